//! Dish API Handlers

use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::api::{convert, resolve_store};
use crate::auth::CurrentUser;
use crate::core::{NameScope, ServerState};
use crate::db::repository::dish;
use crate::utils::{ApiData, AppError, AppResult, ok};
use shared::models::{DishCreate, DishFull, DishModifier, DishUpdate, ModifierCreate};

/// GET /stores/{store_id}/dishes/ - 门店的所有菜品 (含选项)
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<ApiData<Vec<DishFull>>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let dishes = dish::find_all_for_store(&state.pool, store.id).await?;
    let modifiers = dish::find_modifiers_for_store(&state.pool, store.id).await?;

    // Group modifiers by dish, then project
    let mut by_dish: HashMap<i64, Vec<DishModifier>> = HashMap::new();
    for modifier in modifiers {
        by_dish.entry(modifier.dish_id).or_default().push(modifier);
    }

    let full: Vec<DishFull> = dishes
        .into_iter()
        .map(|d| {
            let mods = by_dish.remove(&d.id).unwrap_or_default();
            convert::dish_full(d, mods)
        })
        .collect();

    Ok(ok(full))
}

/// Inline modifier payload of an add-dish request.
/// `is_available` is intentionally absent: inline modifiers always start
/// available, whatever the client sends.
#[derive(Debug, Deserialize)]
pub struct InlineModifier {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
}

/// Payload for adding a dish
#[derive(Debug, Deserialize)]
pub struct AddDishRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub modifiers: Vec<InlineModifier>,
}

/// POST /stores/{store_id}/dishes/add - 创建菜品 (可内联创建选项)
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(store_id): Path<i64>,
    Json(payload): Json<AddDishRequest>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let (name, price) = match (payload.name, payload.price) {
        (Some(name), Some(price)) if !name.is_empty() => (name, price),
        _ => {
            return Err(AppError::validation(
                "Invalid request, please have a valid name",
            ));
        }
    };

    let scope = match state.config.dish_name_scope {
        NameScope::Global => None,
        NameScope::Store => Some(store.id),
    };
    if dish::name_exists(&state.pool, &name, scope).await? {
        return Err(AppError::duplicate(
            "Dish already exists, please use a different name",
        ));
    }

    let data = DishCreate {
        name,
        price,
        description: payload.description.unwrap_or_default(),
        image: payload.image,
        is_available: payload.is_available.unwrap_or(true),
        modifiers: payload
            .modifiers
            .into_iter()
            .map(|m| ModifierCreate {
                name: m.name.unwrap_or_default(),
                price: m.price.unwrap_or(0),
                is_available: true,
            })
            .collect(),
    };
    let created = dish::create(&state.pool, store.id, data).await?;

    tracing::info!(dish_id = created.id, store_id = store.id, "Dish created");

    Ok(ok("Dish created successfully"))
}

/// POST /stores/{store_id}/dishes/{dish_id}/edit - 部分更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((store_id, dish_id)): Path<(i64, i64)>,
    Json(payload): Json<DishUpdate>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;
    dish::update(&state.pool, dish_id, store.id, payload).await?;
    Ok(ok("Dish updated successfully"))
}

/// POST /stores/{store_id}/dishes/{dish_id}/delete - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((store_id, dish_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;
    dish::delete(&state.pool, dish_id, store.id).await?;

    tracing::info!(dish_id, store_id = store.id, "Dish deleted");

    Ok(ok("Dish deleted successfully"))
}

/// Payload for the availability toggle
#[derive(Debug, Deserialize)]
pub struct AvailableRequest {
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// POST /stores/{store_id}/dishes/{dish_id}/available - 上架/下架
pub async fn set_available(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((store_id, dish_id)): Path<(i64, i64)>,
    Json(payload): Json<AvailableRequest>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let is_available = payload
        .is_available
        .ok_or_else(|| AppError::validation("Missing parameter"))?;

    dish::set_availability(&state.pool, dish_id, store.id, is_available).await?;
    Ok(ok("Dish updated successfully"))
}

/// Payload for adding a standalone modifier
#[derive(Debug, Deserialize)]
pub struct AddModifierRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// POST /stores/{store_id}/dishes/{dish_id}/modifier/add - 添加菜品选项
pub async fn add_modifier(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((store_id, dish_id)): Path<(i64, i64)>,
    Json(payload): Json<AddModifierRequest>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let owner = dish::find_by_id_for_store(&state.pool, dish_id, store.id)
        .await?
        .ok_or_else(|| AppError::not_found("Dish not found"))?;

    let (name, price) = match (payload.name, payload.price) {
        (Some(name), Some(price)) if !name.is_empty() => (name, price),
        _ => return Err(AppError::validation("Missing parameter")),
    };

    let data = ModifierCreate {
        name,
        price,
        is_available: payload.is_available.unwrap_or(true),
    };
    dish::add_modifier(&state.pool, owner.id, data).await?;

    Ok(ok("Modifier added successfully"))
}
