//! In-process test harness
//!
//! Drives the real router through Tower's oneshot service against an
//! in-memory SQLite pool: no network, no shared state between tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use order_server::db::DbService;
use order_server::{Config, ServerState, build_app};

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    /// Token of the default registered user ("owner")
    pub token: String,
}

impl TestApp {
    /// Fresh server with one registered and logged-in user
    pub async fn new() -> Self {
        let db = DbService::in_memory()
            .await
            .expect("Failed to create test database");
        let config = Config::with_overrides(":memory:", 0);
        let state = ServerState::with_pool(config, db.pool.clone());
        let router = build_app(state);

        let mut app = Self {
            router,
            pool: db.pool,
            token: String::new(),
        };
        let (status, _) = app.register("owner", "password").await;
        assert_eq!(status, StatusCode::CREATED);
        app.token = app.login_token("owner", "password").await;
        app
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder
            .body(match body {
                Some(value) => Body::from(value.to_string()),
                None => Body::empty(),
            })
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/register",
            Some(serde_json::json!({"username": username, "password": password})),
            None,
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/login",
            Some(serde_json::json!({"username": username, "password": password})),
            None,
        )
        .await
    }

    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let (status, body) = self.login(username, password).await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send("GET", path, None, Some(&self.token)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", path, Some(body), Some(&self.token)).await
    }

    pub async fn get_with_token(&self, token: &str, path: &str) -> (StatusCode, Value) {
        self.send("GET", path, None, Some(token)).await
    }

    pub async fn post_with_token(
        &self,
        token: &str,
        path: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send("POST", path, Some(body), Some(token)).await
    }

    pub async fn get_anonymous(&self, path: &str) -> (StatusCode, Value) {
        self.send("GET", path, None, None).await
    }

    // ---- Fixture helpers ----

    /// Create a store and return its id
    pub async fn create_store(&self, name: &str) -> i64 {
        let (status, body) = self
            .post("/stores/add", serde_json::json!({"name": name}))
            .await;
        assert_eq!(status, StatusCode::OK, "add store failed: {body}");

        let (status, body) = self.get("/stores/").await;
        assert_eq!(status, StatusCode::OK);
        body["data"]
            .as_array()
            .expect("Store list is not an array")
            .iter()
            .find(|s| s["name"] == name)
            .and_then(|s| s["id"].as_i64())
            .expect("Created store not found in list")
    }

    /// Create a dish and return its id
    pub async fn create_dish(&self, store_id: i64, name: &str, price: i64) -> i64 {
        let (status, body) = self
            .post(
                &format!("/stores/{store_id}/dishes/add"),
                serde_json::json!({"name": name, "price": price}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "add dish failed: {body}");
        self.dish_id(store_id, name).await
    }

    /// Look up a dish id by name in the store's dish list
    pub async fn dish_id(&self, store_id: i64, name: &str) -> i64 {
        let (status, body) = self.get(&format!("/stores/{store_id}/dishes/")).await;
        assert_eq!(status, StatusCode::OK);
        body["data"]
            .as_array()
            .expect("Dish list is not an array")
            .iter()
            .find(|d| d["name"] == name)
            .and_then(|d| d["id"].as_i64())
            .expect("Dish not found in list")
    }
}
