//! Dish Repository
//!
//! Dishes and their modifiers, always addressed under an already-resolved
//! store so a caller can never reach another tenant's catalog.

use super::{RepoError, RepoResult};
use shared::models::{Dish, DishCreate, DishModifier, DishUpdate, ModifierCreate};
use sqlx::SqlitePool;

pub async fn find_all_for_store(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Dish>> {
    let dishes = sqlx::query_as::<_, Dish>(
        "SELECT id, store_id, name, price, description, image, is_available \
         FROM dish WHERE store_id = ? ORDER BY id",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(dishes)
}

pub async fn find_by_id_for_store(
    pool: &SqlitePool,
    id: i64,
    store_id: i64,
) -> RepoResult<Option<Dish>> {
    let dish = sqlx::query_as::<_, Dish>(
        "SELECT id, store_id, name, price, description, image, is_available \
         FROM dish WHERE id = ? AND store_id = ?",
    )
    .bind(id)
    .bind(store_id)
    .fetch_optional(pool)
    .await?;
    Ok(dish)
}

/// Check dish-name uniqueness. `store_scope = None` checks across all
/// stores; `Some(store_id)` restricts the check to one store.
pub async fn name_exists(
    pool: &SqlitePool,
    name: &str,
    store_scope: Option<i64>,
) -> RepoResult<bool> {
    let count = match store_scope {
        Some(store_id) => {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM dish WHERE name = ? AND store_id = ?",
            )
            .bind(name)
            .bind(store_id)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dish WHERE name = ?")
                .bind(name)
                .fetch_one(pool)
                .await?
        }
    };
    Ok(count > 0)
}

/// Create a dish and its inline modifiers in one transaction
pub async fn create(pool: &SqlitePool, store_id: i64, data: DishCreate) -> RepoResult<Dish> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO dish (store_id, name, price, description, image, is_available) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(store_id)
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.description)
    .bind(&data.image)
    .bind(data.is_available)
    .fetch_one(&mut *tx)
    .await?;

    for modifier in &data.modifiers {
        sqlx::query(
            "INSERT INTO dish_modifier (dish_id, name, price, is_available) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&modifier.name)
        .bind(modifier.price)
        .bind(modifier.is_available)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(Dish {
        id,
        store_id,
        name: data.name,
        price: data.price,
        description: data.description,
        image: data.image,
        is_available: data.is_available,
    })
}

/// Partial update: only the present fields are applied
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    store_id: i64,
    data: DishUpdate,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE dish SET name = COALESCE(?1, name), price = COALESCE(?2, price), \
         description = COALESCE(?3, description), image = COALESCE(?4, image) \
         WHERE id = ?5 AND store_id = ?6",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.description)
    .bind(&data.image)
    .bind(id)
    .bind(store_id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("Dish not found".into()));
    }
    Ok(())
}

/// Hard delete; modifiers and order relations cascade
pub async fn delete(pool: &SqlitePool, id: i64, store_id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM dish WHERE id = ? AND store_id = ?")
        .bind(id)
        .bind(store_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("Dish not found".into()));
    }
    Ok(())
}

pub async fn set_availability(
    pool: &SqlitePool,
    id: i64,
    store_id: i64,
    is_available: bool,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE dish SET is_available = ? WHERE id = ? AND store_id = ?")
        .bind(is_available)
        .bind(id)
        .bind(store_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("Dish not found".into()));
    }
    Ok(())
}

pub async fn add_modifier(
    pool: &SqlitePool,
    dish_id: i64,
    data: ModifierCreate,
) -> RepoResult<DishModifier> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO dish_modifier (dish_id, name, price, is_available) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(dish_id)
    .bind(&data.name)
    .bind(data.price)
    .bind(data.is_available)
    .fetch_one(pool)
    .await?;

    Ok(DishModifier {
        id,
        dish_id,
        name: data.name,
        price: data.price,
        is_available: data.is_available,
    })
}

pub async fn find_modifiers_for_dish(
    pool: &SqlitePool,
    dish_id: i64,
) -> RepoResult<Vec<DishModifier>> {
    let modifiers = sqlx::query_as::<_, DishModifier>(
        "SELECT id, dish_id, name, price, is_available FROM dish_modifier \
         WHERE dish_id = ? ORDER BY id",
    )
    .bind(dish_id)
    .fetch_all(pool)
    .await?;
    Ok(modifiers)
}

/// All modifiers of a store's dishes in one query, for list projections
pub async fn find_modifiers_for_store(
    pool: &SqlitePool,
    store_id: i64,
) -> RepoResult<Vec<DishModifier>> {
    let modifiers = sqlx::query_as::<_, DishModifier>(
        "SELECT m.id, m.dish_id, m.name, m.price, m.is_available \
         FROM dish_modifier m JOIN dish d ON m.dish_id = d.id \
         WHERE d.store_id = ? ORDER BY m.id",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(modifiers)
}
