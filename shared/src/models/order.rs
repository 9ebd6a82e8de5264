//! Order Models

use serde::{Deserialize, Serialize};

use super::dish::{DishFull, DishModifier};

/// Order entity (one customer transaction against one store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    #[serde(default, skip_serializing)]
    pub store_id: i64,
    /// Server-assigned creation time, Unix millis
    pub created_at: i64,
    pub is_online: bool,
    pub is_completed: bool,
}

/// Order dish line row: one ordered dish with quantity and comment.
/// The same dish may appear on several lines of one order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderDish {
    pub id: i64,
    pub order_id: i64,
    pub dish_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub comment: String,
}

/// Create order payload (validated); lines are kept in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub is_online: bool,
    pub is_completed: bool,
    pub lines: Vec<OrderLineCreate>,
}

/// One dish line of an order-create payload, as submitted.
/// The id and quantity stay optional so the workflow can validate each
/// line in submission order and fail with the right error per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineCreate {
    #[serde(default, rename = "id")]
    pub dish_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub comment: String,
    /// Modifier ids as submitted; resolved (and filtered) against the dish
    #[serde(default)]
    pub modifiers: Vec<i64>,
}

/// Order with its dish lines attached, the wire shape of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFull {
    pub id: i64,
    /// ISO-8601 with offset
    pub created_at: String,
    pub is_online: bool,
    pub is_completed: bool,
    pub dishes: Vec<OrderLineFull>,
}

/// One serialized dish line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineFull {
    pub dish: DishFull,
    pub quantity: i64,
    pub comment: String,
    pub dish_modifiers: Vec<DishModifier>,
}
