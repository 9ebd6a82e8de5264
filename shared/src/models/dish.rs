//! Dish and DishModifier Models

use serde::{Deserialize, Serialize};

/// Dish entity (one menu item, owned by exactly one store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Dish {
    pub id: i64,
    #[serde(default, skip_serializing)]
    pub store_id: i64,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub is_available: bool,
}

/// Dish modifier entity (an add-on tied to exactly one dish)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DishModifier {
    pub id: i64,
    #[serde(default, skip_serializing)]
    pub dish_id: i64,
    pub name: String,
    pub price: i64,
    pub is_available: bool,
}

/// Create dish payload (validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: Option<String>,
    pub is_available: bool,
    pub modifiers: Vec<ModifierCreate>,
}

/// Partial dish update: only present fields are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Create modifier payload (validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierCreate {
    pub name: String,
    pub price: i64,
    pub is_available: bool,
}

/// Dish with its modifier list attached, the wire shape of a dish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishFull {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image: Option<String>,
    pub is_available: bool,
    pub modifiers: Vec<DishModifier>,
}
