//! Integration tests for the signup and login endpoint calls

use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use skyvault_api::{auth, client::ApiClient};
use skyvault_core::domain::VaultError;

use crate::common;

#[tokio::test]
async fn test_signup_returns_message() {
    let (server, client) = common::setup_api().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "message": "User registered successfully"
        })))
        .mount(&server)
        .await;

    let message = auth::signup(&client, "alice", "secret")
        .await
        .expect("signup failed");

    assert_eq!(message, "User registered successfully");
}

#[tokio::test]
async fn test_signup_surfaces_error_envelope() {
    let (server, client) = common::setup_api().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "User already exists"
        })))
        .mount(&server)
        .await;

    let result = auth::signup(&client, "alice", "secret").await;

    assert_eq!(
        result.unwrap_err(),
        VaultError::Remote("User already exists".to_string())
    );
}

#[tokio::test]
async fn test_login_returns_token() {
    let (server, client) = common::setup_api().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": "alice",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok-issued"
        })))
        .mount(&server)
        .await;

    let token = auth::login(&client, "alice", "secret")
        .await
        .expect("login failed");

    assert_eq!(token, "tok-issued");
}

#[tokio::test]
async fn test_login_surfaces_error_envelope() {
    let (server, client) = common::setup_api().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Username or password incorrect"
        })))
        .mount(&server)
        .await;

    let result = auth::login(&client, "alice", "wrong").await;

    assert_eq!(
        result.unwrap_err(),
        VaultError::Remote("Username or password incorrect".to_string())
    );
}

#[tokio::test]
async fn test_login_missing_token_is_remote_error() {
    let (server, client) = common::setup_api().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let result = auth::login(&client, "alice", "secret").await;

    assert!(matches!(result, Err(VaultError::Remote(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on the discard port; the connection is refused
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();

    let result = auth::login(&client, "alice", "secret").await;

    assert!(matches!(result, Err(VaultError::Network(_))));
}
