#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use click_analytics::application::services::click_service::DEFAULT_RETENTION;
use click_analytics::domain::repositories::KvStore;
use click_analytics::infrastructure::store::MemoryStore;
use click_analytics::routes::app_router;
use click_analytics::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const RETENTION: Duration = DEFAULT_RETENTION;

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), RETENTION, false, 60);
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}

pub async fn seed_click(store: &MemoryStore, key: &str, ip: &str, country: &str) {
    let value = format!(
        r#"{{"ip":"{}","country":"{}","city":"unknown","timestamp":"2025-01-01T00:00:00.000Z"}}"#,
        ip, country
    );
    store.put(key, &value, Some(RETENTION)).await.unwrap();
}

pub async fn seed_counter(store: &MemoryStore, key: &str, value: u64) {
    store.put(key, &value.to_string(), None).await.unwrap();
}

pub async fn counter_value(store: &MemoryStore, key: &str) -> Option<String> {
    store.get(key).await.unwrap()
}

pub fn edge_ip(ip: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("cf-connecting-ip"),
        HeaderValue::from_static(ip),
    )
}
