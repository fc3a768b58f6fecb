//! Storage service HTTP client
//!
//! Provides a typed HTTP client for the storage service API. Handles base
//! URL construction, bearer authentication headers, and the per-request
//! timeout. Credentials are passed per call; the client itself holds no
//! session state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use skyvault_api::client::ApiClient;
//!
//! # fn example() -> anyhow::Result<()> {
//! let client = ApiClient::new("http://127.0.0.1:5000", Duration::from_secs(30))?;
//! let request = client.request(reqwest::Method::POST, "/login");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, StatusCode};

use skyvault_core::config::ApiConfig;
use skyvault_core::domain::VaultError;

/// HTTP client for storage service calls
///
/// Wraps `reqwest::Client` with base URL construction and an explicit
/// request timeout, so no call can wait unboundedly on a silent server.
pub struct ApiClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
}

impl ApiClient {
    /// Creates a new ApiClient for the given base URL
    ///
    /// # Arguments
    /// * `base_url` - Service root, e.g. `http://127.0.0.1:5000`
    /// * `timeout` - Applied to every request issued by this client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client from the `api` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Creates an unauthenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Creates a request builder carrying the bearer token
    pub fn authorized(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ============================================================================
// Response handling helpers
// ============================================================================

/// Maps a transport-level failure to the domain taxonomy
pub(crate) fn net_err(err: reqwest::Error) -> VaultError {
    if err.is_timeout() {
        VaultError::Network(format!("request timed out: {}", err))
    } else {
        VaultError::Network(err.to_string())
    }
}

/// Rejects a response whose envelope or status signals failure
///
/// The `error` field is authoritative regardless of HTTP status; a
/// non-success status without one maps to a generic message carrying the
/// status code.
pub(crate) fn reject_error(error: Option<String>, status: StatusCode) -> Result<(), VaultError> {
    if let Some(message) = error {
        return Err(VaultError::Remote(message));
    }
    if !status.is_success() {
        return Err(VaultError::Remote(format!(
            "server returned status {}",
            status
        )));
    }
    Ok(())
}
