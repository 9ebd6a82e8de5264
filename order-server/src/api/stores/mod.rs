//! Store API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/stores/", get(handler::list))
        .route("/stores/add", post(handler::create))
}
