//! Shared types for Orderonus
//!
//! Data models and API payload types used by the order-server and its
//! clients. DB row mapping is behind the `db` feature so client-side
//! consumers don't pull in sqlx.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
