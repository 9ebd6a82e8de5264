//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口 (login / register)
//! - [`stores`] - 门店管理接口
//! - [`dishes`] - 菜品和菜品选项管理接口
//! - [`orders`] - 订单管理接口

pub mod convert;

pub mod auth;
pub mod health;

// Store-scoped API
pub mod dishes;
pub mod orders;
pub mod stores;

use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::utils::{AppError, AppResult};
use shared::models::Store;

// Re-export common types for handlers
pub use crate::utils::ok;

/// Store-scope resolver: returns the store only when it exists AND is
/// owned by the calling user, otherwise 404. Every store-scoped handler
/// calls this before touching any data.
pub(crate) async fn resolve_store(
    pool: &SqlitePool,
    user: &CurrentUser,
    store_id: i64,
) -> AppResult<Store> {
    crate::db::repository::store::find_by_id_for_user(pool, store_id, user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Store not found"))
}
