//! Store Repository

use super::RepoResult;
use shared::models::{Store, StoreCreate};
use sqlx::SqlitePool;

pub async fn find_all_for_user(pool: &SqlitePool, user_id: i64) -> RepoResult<Vec<Store>> {
    let stores = sqlx::query_as::<_, Store>(
        "SELECT id, name, description, image, user_id FROM store WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(stores)
}

/// Store-scope resolver: the store must exist AND belong to the user.
/// Every store-scoped operation goes through this first.
pub async fn find_by_id_for_user(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> RepoResult<Option<Store>> {
    let store = sqlx::query_as::<_, Store>(
        "SELECT id, name, description, image, user_id FROM store WHERE id = ? AND user_id = ?",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(store)
}

/// Name uniqueness is global, not per user
pub async fn name_exists(pool: &SqlitePool, name: &str) -> RepoResult<bool> {
    let count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM store WHERE name = ?")
            .bind(name)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

pub async fn create(pool: &SqlitePool, user_id: i64, data: StoreCreate) -> RepoResult<Store> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO store (name, description, image, user_id) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.image)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(Store {
        id,
        name: data.name,
        description: data.description,
        image: data.image,
        user_id,
    })
}
