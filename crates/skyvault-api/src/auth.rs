//! Signup and login endpoint calls
//!
//! Both endpoints are unauthenticated JSON round trips. The response
//! envelope carries either the expected payload or an `error` field; the
//! error field wins regardless of HTTP status.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use skyvault_core::domain::VaultError;

use crate::client::{net_err, reject_error, ApiClient};

// ============================================================================
// Response envelopes
// ============================================================================

/// Response from POST /signup
#[derive(Debug, Default, Deserialize)]
struct SignupEnvelope {
    /// Confirmation message on success
    message: Option<String>,
    /// Server-side failure description
    error: Option<String>,
}

/// Response from POST /login
#[derive(Debug, Default, Deserialize)]
struct LoginEnvelope {
    /// Bearer token on success
    access_token: Option<String>,
    /// Server-side failure description
    error: Option<String>,
}

// ============================================================================
// Endpoint calls
// ============================================================================

/// Registers a new account via `POST /signup`
///
/// # Returns
/// The server's confirmation message
pub async fn signup(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<String, VaultError> {
    debug!(username, "sending signup request");

    let response = client
        .request(Method::POST, "/signup")
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .map_err(net_err)?;

    let status = response.status();
    let body = response.text().await.map_err(net_err)?;
    let envelope: SignupEnvelope = serde_json::from_str(&body).unwrap_or_default();

    reject_error(envelope.error, status)?;

    envelope
        .message
        .ok_or_else(|| VaultError::Remote("signup response missing message".to_string()))
}

/// Exchanges credentials for a bearer token via `POST /login`
///
/// # Returns
/// The opaque access token issued by the server
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<String, VaultError> {
    debug!(username, "sending login request");

    let response = client
        .request(Method::POST, "/login")
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .map_err(net_err)?;

    let status = response.status();
    let body = response.text().await.map_err(net_err)?;
    let envelope: LoginEnvelope = serde_json::from_str(&body).unwrap_or_default();

    reject_error(envelope.error, status)?;

    let token = envelope
        .access_token
        .ok_or_else(|| VaultError::Remote("login response missing access token".to_string()))?;

    info!(username, "login accepted by server");
    Ok(token)
}
