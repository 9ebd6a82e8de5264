//! Order API Handlers
//!
//! The order-placement workflow lives here: payload validation at the top,
//! then one atomic repository call, then projection of the result.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::api::{convert, resolve_store};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{dish, order};
use crate::utils::{ApiData, AppError, AppResult, ok, time};
use shared::models::{Order, OrderCreate, OrderFull, OrderLineCreate, OrderLineFull};

/// Load and project the dish lines of one order.
///
/// Line dishes always resolve: deleting a dish cascades into its lines,
/// so a dangling reference here is a storage-level inconsistency.
async fn load_lines(pool: &SqlitePool, target: &Order) -> AppResult<Vec<OrderLineFull>> {
    let lines = order::find_lines_for_order(pool, target.id).await?;

    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        let line_dish = dish::find_by_id_for_store(pool, line.dish_id, target.store_id)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Dish {} missing for order line {}",
                    line.dish_id, line.id
                ))
            })?;
        let dish_modifiers = dish::find_modifiers_for_dish(pool, line_dish.id).await?;
        let line_modifiers = order::find_line_modifiers(pool, line.id).await?;
        result.push(convert::order_line_full(
            &line,
            convert::dish_full(line_dish, dish_modifiers),
            line_modifiers,
        ));
    }
    Ok(result)
}

/// GET /stores/{store_id}/orders/ - 今天的订单 (按创建时间升序)
///
/// 这是日期过滤，不是“未完成”过滤：昨天的未完成订单不会出现，
/// 历史订单走 get_by_id。
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<ApiData<Vec<OrderFull>>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let (start, end) = time::local_today_range_millis();
    let orders = order::find_in_range_for_store(&state.pool, store.id, start, end).await?;

    let mut full = Vec::with_capacity(orders.len());
    for o in &orders {
        let lines = load_lines(&state.pool, o).await?;
        full.push(convert::order_full(o, lines));
    }

    Ok(ok(full))
}

/// Order detail response: the order plus an independently rebuilt line list
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    pub order: OrderFull,
    pub dishes: Vec<OrderLineFull>,
}

/// GET /stores/{store_id}/orders/{order_id}/ - 单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((store_id, order_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiData<OrderDetail>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let found = order::find_by_id_for_store(&state.pool, order_id, store.id)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    // The outer line list is reconstructed separately from the order's own
    // embedded serialization
    let embedded = load_lines(&state.pool, &found).await?;
    let dishes = load_lines(&state.pool, &found).await?;

    Ok(ok(OrderDetail {
        order: convert::order_full(&found, embedded),
        dishes,
    }))
}

/// Payload for completing an order
#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub is_completed: Option<bool>,
}

/// POST /stores/{store_id}/orders/{order_id}/complete - 设置完成状态
pub async fn complete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path((store_id, order_id)): Path<(i64, i64)>,
    Json(payload): Json<CompleteRequest>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let is_completed = payload
        .is_completed
        .ok_or_else(|| AppError::validation("Missing parameter"))?;

    order::set_completed(&state.pool, order_id, store.id, is_completed).await?;
    Ok(ok("Order updated successfully"))
}

/// Payload for adding an order
#[derive(Debug, Deserialize)]
pub struct AddOrderRequest {
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub dishes: Option<Vec<OrderLineCreate>>,
}

/// POST /stores/{store_id}/orders/add - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(store_id): Path<i64>,
    Json(payload): Json<AddOrderRequest>,
) -> AppResult<Json<ApiData<&'static str>>> {
    let store = resolve_store(&state.pool, &user, store_id).await?;

    let lines = payload
        .dishes
        .ok_or_else(|| AppError::validation("Missing parameter"))?;
    if lines.is_empty() {
        return Err(AppError::validation("No dishes in order"));
    }

    let data = OrderCreate {
        is_online: payload.is_online.unwrap_or(false),
        is_completed: payload.is_completed.unwrap_or(false),
        lines,
    };
    let order_id = order::create(&state.pool, store.id, time::now_millis(), data).await?;

    tracing::info!(order_id, store_id = store.id, "Order created");

    Ok(ok("Order added successfully"))
}
