//! Order workflow tests: creation, scoping, filtering, completion

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

async fn order_count(app: &TestApp, store_id: i64) -> usize {
    let (status, body) = app.get(&format!("/stores/{store_id}/orders/")).await;
    assert_eq!(status, StatusCode::OK);
    body["data"].as_array().unwrap().len()
}

#[tokio::test]
async fn test_add_order_happy_path() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({
                "is_online": true,
                "is_completed": false,
                "dishes": [{"id": dish_id, "quantity": 2}],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "Order added successfully");

    let (status, body) = app.get(&format!("/stores/{store_id}/orders/")).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["is_online"], true);
    assert_eq!(orders[0]["is_completed"], false);

    let lines = orders[0]["dishes"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(lines[0]["comment"], "");
    assert_eq!(lines[0]["dish"]["name"], "ramen");
    assert_eq!(lines[0]["dish"]["price"], 10000);
    assert_eq!(lines[0]["dish_modifiers"].as_array().unwrap().len(), 0);

    // created_at carries an explicit UTC offset
    let created_at = orders[0]["created_at"].as_str().unwrap();
    let tail = &created_at[created_at.len() - 6..];
    assert!(tail.starts_with('+') || tail.starts_with('-'), "{created_at}");
}

#[tokio::test]
async fn test_add_order_missing_dishes_key() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;

    let (status, body) = app
        .post(&format!("/stores/{store_id}/orders/add"), json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing parameter");
    assert_eq!(order_count(&app, store_id).await, 0);
}

#[tokio::test]
async fn test_add_order_empty_dishes_creates_nothing() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;

    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": []}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No dishes in order");
    assert_eq!(order_count(&app, store_id).await, 0);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_add_order_unknown_dish_rolls_back() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    // First line is fine, second line references a dish that doesn't exist
    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": [
                {"id": dish_id, "quantity": 1},
                {"id": 9999, "quantity": 1},
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dish not found");

    // Nothing persisted, not even the valid first line or the order row
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_dish")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_add_order_missing_quantity_rolls_back() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": [{"id": dish_id}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing parameter");
    assert_eq!(order_count(&app, store_id).await, 0);
}

#[tokio::test]
async fn test_add_order_zero_quantity_rejected() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": [{"id": dish_id, "quantity": 0}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid quantity");
    assert_eq!(order_count(&app, store_id).await, 0);
}

#[tokio::test]
async fn test_add_order_cross_store_dish_rejected() {
    let app = TestApp::new().await;
    let store_a = app.create_store("A").await;
    let store_b = app.create_store("B").await;
    let foreign_dish = app.create_dish(store_a, "ramen", 10000).await;

    // Same user, but the dish belongs to the other store
    let (status, body) = app
        .post(
            &format!("/stores/{store_b}/orders/add"),
            json!({"dishes": [{"id": foreign_dish, "quantity": 1}]}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dish not found");
    assert_eq!(order_count(&app, store_b).await, 0);
}

#[tokio::test]
async fn test_foreign_modifiers_silently_dropped() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;

    // ramen with two modifiers, udon with one
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/dishes/add"),
            json!({"name": "ramen", "price": 10000, "modifiers": [
                {"name": "spicy", "price": 500},
                {"name": "extra noodles", "price": 1000},
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/dishes/add"),
            json!({"name": "udon", "price": 9000, "modifiers": [
                {"name": "tempura", "price": 1500},
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/stores/{store_id}/dishes/")).await;
    let dishes = body["data"].as_array().unwrap();
    let ramen = dishes.iter().find(|d| d["name"] == "ramen").unwrap();
    let udon = dishes.iter().find(|d| d["name"] == "udon").unwrap();
    let ramen_id = ramen["id"].as_i64().unwrap();
    let spicy_id = ramen["modifiers"][0]["id"].as_i64().unwrap();
    let tempura_id = udon["modifiers"][0]["id"].as_i64().unwrap();

    // One owned modifier, one foreign, one unknown: only the owned survives
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": [
                {"id": ramen_id, "quantity": 1, "modifiers": [spicy_id, tempura_id, 424242]},
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/stores/{store_id}/orders/")).await;
    let line_modifiers = body["data"][0]["dishes"][0]["dish_modifiers"]
        .as_array()
        .unwrap();
    assert_eq!(line_modifiers.len(), 1);
    assert_eq!(line_modifiers[0]["id"].as_i64().unwrap(), spicy_id);
    assert_eq!(line_modifiers[0]["name"], "spicy");
}

#[tokio::test]
async fn test_order_round_trip_keeps_all_lines() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    // The same dish twice is two distinct lines
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": [
                {"id": dish_id, "quantity": 1, "comment": "no egg"},
                {"id": dish_id, "quantity": 3, "comment": "extra egg"},
            ]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/stores/{store_id}/orders/")).await;
    let order_id = body["data"][0]["id"].as_i64().unwrap();

    let (status, body) = app
        .get(&format!("/stores/{store_id}/orders/{order_id}/"))
        .await;
    assert_eq!(status, StatusCode::OK);

    // The embedded list and the independently rebuilt list agree
    for lines in [&body["data"]["order"]["dishes"], &body["data"]["dishes"]] {
        let lines = lines.as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["quantity"], 1);
        assert_eq!(lines[0]["comment"], "no egg");
        assert_eq!(lines[1]["quantity"], 3);
        assert_eq!(lines[1]["comment"], "extra egg");
    }
}

#[tokio::test]
async fn test_get_order_not_found() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;

    let (status, body) = app.get(&format!("/stores/{store_id}/orders/77/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn test_complete_and_uncomplete_order() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"dishes": [{"id": dish_id, "quantity": 1}]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get(&format!("/stores/{store_id}/orders/")).await;
    let order_id = body["data"][0]["id"].as_i64().unwrap();

    // Missing parameter
    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/{order_id}/complete"),
            json!({}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing parameter");

    // Complete
    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/{order_id}/complete"),
            json!({"is_completed": true}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "Order updated successfully");
    let (_, body) = app
        .get(&format!("/stores/{store_id}/orders/{order_id}/"))
        .await;
    assert_eq!(body["data"]["order"]["is_completed"], true);

    // No transition restriction: un-completing is legal
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/orders/{order_id}/complete"),
            json!({"is_completed": false}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app
        .get(&format!("/stores/{store_id}/orders/{order_id}/"))
        .await;
    assert_eq!(body["data"]["order"]["is_completed"], false);
}

#[tokio::test]
async fn test_complete_unknown_order() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;

    let (status, body) = app
        .post(
            &format!("/stores/{store_id}/orders/42/complete"),
            json!({"is_completed": true}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn test_order_list_is_a_date_filter_not_a_pending_filter() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    // Today's completed order still shows up
    let (status, _) = app
        .post(
            &format!("/stores/{store_id}/orders/add"),
            json!({"is_completed": true, "dishes": [{"id": dish_id, "quantity": 1}]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order_count(&app, store_id).await, 1);

    // An uncompleted order from yesterday is excluded from the list
    let yesterday = chrono::Utc::now().timestamp_millis() - 36 * 60 * 60 * 1000;
    let old_id: i64 = sqlx::query_scalar(
        "INSERT INTO orders (store_id, created_at, is_online, is_completed) \
         VALUES (?, ?, 0, 0) RETURNING id",
    )
    .bind(store_id)
    .bind(yesterday)
    .fetch_one(&app.pool)
    .await
    .unwrap();

    assert_eq!(order_count(&app, store_id).await, 1);

    // But it remains reachable by id
    let (status, body) = app
        .get(&format!("/stores/{store_id}/orders/{old_id}/"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["order"]["id"].as_i64().unwrap(), old_id);
}

#[tokio::test]
async fn test_orders_sorted_by_creation_ascending() {
    let app = TestApp::new().await;
    let store_id = app.create_store("S").await;
    let dish_id = app.create_dish(store_id, "ramen", 10000).await;

    for quantity in 1..=3 {
        let (status, _) = app
            .post(
                &format!("/stores/{store_id}/orders/add"),
                json!({"dishes": [{"id": dish_id, "quantity": quantity}]}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.get(&format!("/stores/{store_id}/orders/")).await;
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 3);
    let ids: Vec<i64> = orders.iter().map(|o| o["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}
