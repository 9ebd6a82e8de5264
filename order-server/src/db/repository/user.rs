//! User Repository

use super::RepoResult;
use shared::models::User;
use sqlx::SqlitePool;

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, hash_pass, created_at FROM user WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    hash_pass: &str,
    created_at: i64,
) -> RepoResult<User> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO user (username, hash_pass, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind(hash_pass)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(User {
        id,
        username: username.to_string(),
        hash_pass: hash_pass.to_string(),
        created_at,
    })
}
