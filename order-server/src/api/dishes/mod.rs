//! Dish API 模块
//!
//! 所有路由都嵌套在 `/stores/{store_id}/dishes` 之下，
//! handler 先解析门店归属再操作数据。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/stores/{store_id}/dishes/", get(handler::list))
        .route("/stores/{store_id}/dishes/add", post(handler::create))
        .route("/stores/{store_id}/dishes/{dish_id}/edit", post(handler::update))
        .route("/stores/{store_id}/dishes/{dish_id}/delete", post(handler::delete))
        .route("/stores/{store_id}/dishes/{dish_id}/available", post(handler::set_available))
        .route("/stores/{store_id}/dishes/{dish_id}/modifier/add", post(handler::add_modifier))
}
