//! Order Repository
//!
//! Order creation is the one multi-row write in the system: the order row,
//! its dish lines and the line-modifier links are committed in a single
//! transaction, so a request that fails on any line leaves no trace.

use super::{RepoError, RepoResult};
use shared::models::{DishModifier, Order, OrderCreate, OrderDish};
use sqlx::SqlitePool;

pub async fn find_in_range_for_store(
    pool: &SqlitePool,
    store_id: i64,
    start_millis: i64,
    end_millis: i64,
) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, store_id, created_at, is_online, is_completed FROM orders \
         WHERE store_id = ? AND created_at >= ? AND created_at < ? \
         ORDER BY created_at, id",
    )
    .bind(store_id)
    .bind(start_millis)
    .bind(end_millis)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn find_by_id_for_store(
    pool: &SqlitePool,
    id: i64,
    store_id: i64,
) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(
        "SELECT id, store_id, created_at, is_online, is_completed FROM orders \
         WHERE id = ? AND store_id = ?",
    )
    .bind(id)
    .bind(store_id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// Set the completion flag. Any boolean may follow any boolean:
/// un-completing an order is legal.
pub async fn set_completed(
    pool: &SqlitePool,
    id: i64,
    store_id: i64,
    is_completed: bool,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE orders SET is_completed = ? WHERE id = ? AND store_id = ?")
        .bind(is_completed)
        .bind(id)
        .bind(store_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("Order not found".into()));
    }
    Ok(())
}

/// Create an order with its dish lines atomically.
///
/// Lines are processed in input order. Each line must reference a dish of
/// the given store; modifier ids that don't belong to the line's dish are
/// dropped, never an error. The transaction commits only after every line
/// validated, so a failing line leaves no orphan order row.
pub async fn create(
    pool: &SqlitePool,
    store_id: i64,
    created_at: i64,
    data: OrderCreate,
) -> RepoResult<i64> {
    let mut tx = pool.begin().await?;

    let order_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (store_id, created_at, is_online, is_completed) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(store_id)
    .bind(created_at)
    .bind(data.is_online)
    .bind(data.is_completed)
    .fetch_one(&mut *tx)
    .await?;

    for line in &data.lines {
        // A missing or unknown dish id reads the same to the caller
        let dish_id = line
            .dish_id
            .ok_or_else(|| RepoError::NotFound("Dish not found".into()))?;
        let dish: Option<i64> =
            sqlx::query_scalar("SELECT id FROM dish WHERE id = ? AND store_id = ?")
                .bind(dish_id)
                .bind(store_id)
                .fetch_optional(&mut *tx)
                .await?;
        if dish.is_none() {
            return Err(RepoError::NotFound("Dish not found".into()));
        }

        let quantity = line
            .quantity
            .ok_or_else(|| RepoError::Validation("Missing parameter".into()))?;
        if quantity < 1 {
            return Err(RepoError::Validation("Invalid quantity".into()));
        }

        let line_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO order_dish (order_id, dish_id, quantity, comment) \
             VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(order_id)
        .bind(dish_id)
        .bind(quantity)
        .bind(&line.comment)
        .fetch_one(&mut *tx)
        .await?;

        // Attach only the modifiers that actually belong to this dish
        let mut attached: Vec<i64> = Vec::new();
        for modifier_id in &line.modifiers {
            if attached.contains(modifier_id) {
                continue;
            }
            let owned: Option<i64> =
                sqlx::query_scalar("SELECT id FROM dish_modifier WHERE id = ? AND dish_id = ?")
                    .bind(*modifier_id)
                    .bind(dish_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            if let Some(id) = owned {
                sqlx::query(
                    "INSERT INTO order_dish_modifier (order_dish_id, modifier_id) VALUES (?, ?)",
                )
                .bind(line_id)
                .bind(id)
                .execute(&mut *tx)
                .await?;
                attached.push(id);
            }
        }
    }

    tx.commit().await?;
    Ok(order_id)
}

pub async fn find_lines_for_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderDish>> {
    let lines = sqlx::query_as::<_, OrderDish>(
        "SELECT id, order_id, dish_id, quantity, comment FROM order_dish \
         WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

pub async fn find_line_modifiers(
    pool: &SqlitePool,
    order_dish_id: i64,
) -> RepoResult<Vec<DishModifier>> {
    let modifiers = sqlx::query_as::<_, DishModifier>(
        "SELECT m.id, m.dish_id, m.name, m.price, m.is_available \
         FROM dish_modifier m JOIN order_dish_modifier r ON r.modifier_id = m.id \
         WHERE r.order_dish_id = ? ORDER BY m.id",
    )
    .bind(order_dish_id)
    .fetch_all(pool)
    .await?;
    Ok(modifiers)
}
