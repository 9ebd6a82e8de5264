//! Order API 模块
//!
//! 所有路由都嵌套在 `/stores/{store_id}/orders` 之下。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/stores/{store_id}/orders/", get(handler::list))
        .route("/stores/{store_id}/orders/add", post(handler::create))
        .route("/stores/{store_id}/orders/{order_id}", get(handler::get_by_id))
        .route("/stores/{store_id}/orders/{order_id}/", get(handler::get_by_id))
        .route("/stores/{store_id}/orders/{order_id}/complete", post(handler::complete))
}
