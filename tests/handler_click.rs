mod common;

use axum::http::StatusCode;
use click_analytics::domain::entities::ClickEvent;
use click_analytics::domain::repositories::KvStore;
use serde_json::{Value, json};

#[tokio::test]
async fn test_click_success() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/click")
        .json(&json!({"button": "cta"}))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["clicks"], 1);
    assert_eq!(
        common::counter_value(&store, "total_clicks").await.as_deref(),
        Some("1")
    );
}

#[tokio::test]
async fn test_click_stores_payload_and_metadata() {
    let (server, store) = common::create_test_server();
    let (name, value) = common::edge_ip("203.0.113.7");

    server
        .post("/api/click")
        .add_header(name, value)
        .json(&json!({"button": "cta", "section": {"id": 3}, "tags": ["a", "b"]}))
        .await
        .assert_status_ok();

    let keys = store.list("click_").await.unwrap();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].ends_with("_203_0_113_7"));

    let raw = store.get(&keys[0]).await.unwrap().unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(stored["button"], "cta");
    assert_eq!(stored["section"], json!({"id": 3}));
    assert_eq!(stored["tags"], json!(["a", "b"]));
    assert_eq!(stored["ip"], "203.0.113.7");
    assert_eq!(stored["country"], "unknown");
    assert_eq!(stored["city"], "unknown");
    assert!(stored["timestamp"].is_string());

    let event: ClickEvent = serde_json::from_str(&raw).unwrap();
    assert_eq!(event.ip, "203.0.113.7");
}

#[tokio::test]
async fn test_click_reads_edge_region_headers() {
    let (server, store) = common::create_test_server();

    server
        .post("/api/click")
        .add_header(
            axum::http::HeaderName::from_static("cf-ipcountry"),
            axum::http::HeaderValue::from_static("DE"),
        )
        .add_header(
            axum::http::HeaderName::from_static("cf-ray"),
            axum::http::HeaderValue::from_static("8f1b2c3d4e5f6a7b-FRA"),
        )
        .json(&json!({}))
        .await
        .assert_status_ok();

    let keys = store.list("click_").await.unwrap();
    let raw = store.get(&keys[0]).await.unwrap().unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(stored["country"], "DE");
    assert_eq!(stored["edge"]["colo"], "FRA");
    assert_eq!(stored["ip"], "unknown");
}

#[tokio::test]
async fn test_click_invalid_json() {
    let (server, store) = common::create_test_server();

    let response = server.post("/api/click").text("definitely not json").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert!(json["error"].as_str().unwrap().starts_with("Invalid payload"));
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_some()
    );

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_click_rejects_array_body() {
    let (server, store) = common::create_test_server();

    let response = server.post("/api/click").json(&json!([1, 2, 3])).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(common::counter_value(&store, "total_clicks").await.is_none());
}

#[tokio::test]
async fn test_sequential_clicks_count_exactly() {
    let (server, store) = common::create_test_server();

    for i in 1..=10u64 {
        let response = server
            .post("/api/click")
            .json(&json!({"n": i}))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["clicks"], i);
    }

    assert_eq!(
        common::counter_value(&store, "total_clicks").await.as_deref(),
        Some("10")
    );
}

#[tokio::test]
async fn test_click_continues_existing_counter() {
    let (server, store) = common::create_test_server();
    common::seed_counter(&store, "total_clicks", 41).await;

    let response = server.post("/api/click").json(&json!({})).await;

    assert_eq!(response.json::<Value>()["clicks"], 42);
}

#[tokio::test]
async fn test_corrupt_counter_reports_error() {
    let (server, store) = common::create_test_server();
    store.put("total_clicks", "NaN", None).await.unwrap();

    let response = server.post("/api/click").json(&json!({})).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<Value>();
    assert!(json["error"].as_str().unwrap().contains("total_clicks"));

    // The event write happened before the counter step and is not rolled back
    assert_eq!(store.list("click_").await.unwrap().len(), 1);
    assert_eq!(
        common::counter_value(&store, "total_clicks").await.as_deref(),
        Some("NaN")
    );
}
