//! Store API Handlers

use axum::{Extension, Json, extract::State};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::store;
use crate::utils::{ApiData, AppError, AppResult, ok};
use shared::models::{Store, StoreCreate};

/// GET /stores/ - 当前用户的所有门店
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiData<Vec<Store>>>> {
    let stores = store::find_all_for_user(&state.pool, user.id).await?;
    Ok(ok(stores))
}

/// Payload for adding a store
#[derive(Debug, Deserialize)]
pub struct AddStoreRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// POST /stores/add - 创建门店
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<AddStoreRequest>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let name = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::validation("Missing parameter")),
    };

    // Store names are unique across all users, not per owner
    if store::name_exists(&state.pool, &name).await? {
        return Err(AppError::duplicate("Store already exists"));
    }

    let data = StoreCreate {
        name,
        description: payload.description.unwrap_or_default(),
        image: payload.image,
    };
    let created = store::create(&state.pool, user.id, data).await?;

    tracing::info!(store_id = created.id, name = %created.name, "Store created");

    Ok(ok("Store added successfully"))
}
