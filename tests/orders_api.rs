//! End-to-end API tests: spawn the gateway on an ephemeral port and
//! drive it over HTTP.

use std::sync::Arc;

use serde_json::{Value, json};

use shopfront::gateway::{build_router, services::OrderService, state::AppState};
use shopfront::store::MemoryOrderStore;

/// Spawn a fresh gateway, return its base URL.
async fn spawn_server() -> String {
    let store = Arc::new(MemoryOrderStore::new());
    let order_service = Arc::new(OrderService::new(store));
    let state = Arc::new(AppState::new(order_service));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn alice_payload() -> Value {
    json!({"customerName": "Alice", "items": [{"name": "Widget", "qty": 2}]})
}

#[tokio::test]
async fn test_list_orders_on_empty_store_returns_empty_array() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{base}/api/orders")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_place_order_returns_created_order() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/orders/place"))
        .json(&alice_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    let order_id = body["orderId"].as_str().unwrap();
    assert!(order_id.starts_with("ORD-"));
    assert_eq!(body["customerName"], "Alice");
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["status"], "PLACED");
    assert_eq!(
        body["orderDate"].as_str().unwrap(),
        chrono::Local::now().date_naive().to_string()
    );
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["qty"], 2);
}

#[tokio::test]
async fn test_list_includes_exactly_the_placed_order() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let placed: Value = client
        .post(format!("{base}/api/orders/place"))
        .json(&alice_payload())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let listed: Value = reqwest::get(format!("{base}/api/orders"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(listed, json!([placed]));
}

#[tokio::test]
async fn test_two_orders_get_distinct_ids_and_list_in_placement_order() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for customer in ["Alice", "Bob"] {
        let body: Value = client
            .post(format!("{base}/api/orders/place"))
            .json(&json!({"customerName": customer, "items": [{"name": "Widget", "qty": 1}]}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        ids.push(body["orderId"].as_str().unwrap().to_string());
    }
    assert_ne!(ids[0], ids[1]);

    let listed: Value = reqwest::get(format!("{base}/api/orders"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed_ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderId"].as_str().unwrap())
        .collect();
    assert_eq!(listed_ids, ids);
}

#[tokio::test]
async fn test_get_single_order_roundtrip() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let placed: Value = client
        .post(format!("{base}/api/orders/place"))
        .json(&alice_payload())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let order_id = placed["orderId"].as_str().unwrap();

    let resp = reqwest::get(format!("{base}/api/orders/{order_id}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, placed);
}

#[tokio::test]
async fn test_unknown_order_id_returns_404() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{base}/api/orders/ORD-unknown"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn test_order_without_items_is_rejected() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/orders/place"))
        .json(&json!({"customerName": "Alice", "items": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");

    // Nothing was persisted
    let listed: Value = reqwest::get(format!("{base}/api/orders"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_blank_customer_name_is_rejected() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/orders/place"))
        .json(&json!({"customerName": "", "items": [{"name": "Widget", "qty": 1}]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_malformed_body_rejected_before_handler() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/orders/place"))
        .header("Content-Type", "application/json")
        .body("not json at all")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "UP");
    assert!(body["timestamp_ms"].as_u64().unwrap() > 0);
}
