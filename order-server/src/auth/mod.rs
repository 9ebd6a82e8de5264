//! 认证模块
//!
//! JWT + Argon2 认证体系：
//! - [`jwt`] - 令牌生成与验证
//! - [`password`] - 密码哈希
//! - [`middleware`] - 请求认证中间件

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
