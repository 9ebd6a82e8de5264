//! Store Model

use serde::{Deserialize, Serialize};

/// Store entity (one tenant, owning its dishes and orders)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Store {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    /// Owning user, never exposed over the wire
    #[serde(default, skip_serializing)]
    pub user_id: i64,
}

/// Create store payload (validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCreate {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
}
