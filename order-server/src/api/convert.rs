//! Projection helpers
//!
//! Explicit projections over already-loaded rows. Relation data is passed
//! in by the caller; nothing here touches the database.

use shared::models::{Dish, DishFull, DishModifier, Order, OrderDish, OrderFull, OrderLineFull};

use crate::utils::time;

/// Dish row + its modifier rows → wire shape
pub fn dish_full(dish: Dish, modifiers: Vec<DishModifier>) -> DishFull {
    DishFull {
        id: dish.id,
        name: dish.name,
        price: dish.price,
        description: dish.description,
        image: dish.image,
        is_available: dish.is_available,
        modifiers,
    }
}

/// Order line row + resolved dish + attached modifiers → wire shape
pub fn order_line_full(
    line: &OrderDish,
    dish: DishFull,
    dish_modifiers: Vec<DishModifier>,
) -> OrderLineFull {
    OrderLineFull {
        dish,
        quantity: line.quantity,
        comment: line.comment.clone(),
        dish_modifiers,
    }
}

/// Order row + its serialized lines → wire shape
pub fn order_full(order: &Order, dishes: Vec<OrderLineFull>) -> OrderFull {
    OrderFull {
        id: order.id,
        created_at: time::millis_to_rfc3339(order.created_at),
        is_online: order.is_online,
        is_completed: order.is_completed,
        dishes,
    }
}
