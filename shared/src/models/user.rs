//! User Model

use serde::{Deserialize, Serialize};

/// User account (owns stores)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string, never serialized
    #[serde(default, skip_serializing)]
    pub hash_pass: String,
    pub created_at: i64,
}
