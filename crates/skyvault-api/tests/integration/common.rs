//! Shared test helpers for storage service integration tests
//!
//! Provides wiremock-based mock server setup for the service endpoints.
//! Helpers mount individual endpoints against a fixed test token and return
//! a configured ApiClient pointing at the mock server.

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, ResponseTemplate};

use skyvault_api::client::ApiClient;

/// Bearer token the mounted endpoints expect
pub const TEST_TOKEN: &str = "tok-test";

/// Starts a mock server and returns it with a client pointed at it
pub async fn setup_api() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri(), Duration::from_secs(5)).expect("build test client");
    (server, client)
}

/// Matcher for the Authorization header carrying [`TEST_TOKEN`]
pub fn bearer_auth() -> impl Match {
    header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
}

/// Mounts GET /list returning the given names in order
pub async fn mount_list(server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(bearer_auth())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "files": names })),
        )
        .mount(server)
        .await;
}

/// Mounts POST /upload returning a confirmation message
pub async fn mount_upload(server: &MockServer, message: &str) {
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(bearer_auth())
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "message": message })),
        )
        .mount(server)
        .await;
}

/// Mounts GET /download for a specific file name
pub async fn mount_download(server: &MockServer, name: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path("/download"))
        .and(query_param("file_name", name))
        .and(bearer_auth())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(content.to_vec())
                .append_header("Content-Type", "application/octet-stream"),
        )
        .mount(server)
        .await;
}

/// Mounts DELETE /delete for a specific file name
pub async fn mount_delete(server: &MockServer, name: &str, message: &str) {
    Mock::given(method("DELETE"))
        .and(path("/delete"))
        .and(query_param("file_name", name))
        .and(bearer_auth())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": message })),
        )
        .mount(server)
        .await;
}
