//! Data models
//!
//! Shared between order-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); all timestamps are
//! Unix milliseconds (`i64`); conversion to wire format happens in the
//! server's projection layer, never here.

pub mod dish;
pub mod order;
pub mod store;
pub mod user;

// Re-exports
pub use dish::*;
pub use order::*;
pub use store::*;
pub use user::*;
