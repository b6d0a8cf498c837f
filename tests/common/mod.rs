#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use serde_json::json;
use std::sync::Arc;
use quicklink::application::services::LinkService;
use quicklink::infrastructure::memory::MemoryLinkRepository;
use quicklink::routes::app_service;
use quicklink::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(
    base_url: Option<&str>,
) -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository.clone()));

    let state = AppState::new(
        link_service,
        base_url.map(str::to_string),
        "127.0.0.1:5000",
    );

    (state, repository)
}

/// Full application service, trailing-slash normalization included, over a
/// fresh, empty store.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    create_test_server_with_base(Some(TEST_BASE_URL))
}

pub fn create_test_server_with_base(
    base_url: Option<&str>,
) -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repository) = create_test_state(base_url);
    let server = TestServer::new(app_service(state)).unwrap();

    (server, repository)
}

pub async fn shorten(server: &TestServer, url: &str) -> TestResponse {
    server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await
}

/// Shortens `url` and returns the short code from the response.
pub async fn shorten_code(server: &TestServer, url: &str) -> String {
    let response = shorten(server, url).await;
    let json = response.json::<serde_json::Value>();

    json["short_code"].as_str().unwrap().to_string()
}
