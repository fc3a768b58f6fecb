//! File endpoint calls: list, upload, download, delete
//!
//! All four require the bearer token. List, upload, and delete speak the
//! JSON envelope convention (`error` field authoritative); download returns
//! the raw payload on success and a JSON `{error}` body otherwise.

use reqwest::{multipart, Method};
use serde::Deserialize;
use tracing::{debug, info};

use skyvault_core::domain::{FileName, VaultError};

use crate::client::{net_err, reject_error, ApiClient};

/// Fallback message when a download fails without a server-supplied reason
const DOWNLOAD_FAILED: &str = "Download failed";

// ============================================================================
// Response envelopes
// ============================================================================

/// Response from GET /list
#[derive(Debug, Default, Deserialize)]
struct ListEnvelope {
    /// File names in server order
    files: Option<Vec<String>>,
    /// Server-side failure description
    error: Option<String>,
}

/// Response from POST /upload and DELETE /delete
#[derive(Debug, Default, Deserialize)]
struct MessageEnvelope {
    /// Confirmation message on success
    message: Option<String>,
    /// Server-side failure description
    error: Option<String>,
}

/// Error body of a non-OK download response
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

// ============================================================================
// Endpoint calls
// ============================================================================

/// Fetches the file listing via `GET /list`
///
/// # Returns
/// The file names in the order the server provided them
pub async fn list(client: &ApiClient, token: &str) -> Result<Vec<FileName>, VaultError> {
    debug!("sending list request");

    let response = client
        .authorized(Method::GET, "/list", token)
        .send()
        .await
        .map_err(net_err)?;

    let status = response.status();
    let body = response.text().await.map_err(net_err)?;
    let envelope: ListEnvelope = serde_json::from_str(&body).unwrap_or_default();

    reject_error(envelope.error, status)?;

    let names = envelope
        .files
        .ok_or_else(|| VaultError::Remote("list response missing files".to_string()))?;

    names
        .into_iter()
        .map(|name| {
            FileName::new(name.as_str()).map_err(|_| {
                VaultError::Remote(format!("listing contained invalid name '{}'", name))
            })
        })
        .collect()
}

/// Transmits a file via `POST /upload` as a multipart body
///
/// The file goes in the form field named `file`, carrying the declared name.
///
/// # Returns
/// The server's confirmation message
pub async fn upload(
    client: &ApiClient,
    token: &str,
    name: &FileName,
    data: Vec<u8>,
) -> Result<String, VaultError> {
    debug!(name = %name, size = data.len(), "sending upload request");

    let part = multipart::Part::bytes(data).file_name(name.to_string());
    let form = multipart::Form::new().part("file", part);

    let response = client
        .authorized(Method::POST, "/upload", token)
        .multipart(form)
        .send()
        .await
        .map_err(net_err)?;

    let status = response.status();
    let body = response.text().await.map_err(net_err)?;
    let envelope: MessageEnvelope = serde_json::from_str(&body).unwrap_or_default();

    reject_error(envelope.error, status)?;

    let message = envelope
        .message
        .ok_or_else(|| VaultError::Remote("upload response missing message".to_string()))?;

    info!(name = %name, "upload accepted by server");
    Ok(message)
}

/// Downloads a file's payload via `GET /download?file_name=NAME`
///
/// # Returns
/// The raw bytes of the file
pub async fn download(
    client: &ApiClient,
    token: &str,
    name: &FileName,
) -> Result<Vec<u8>, VaultError> {
    debug!(name = %name, "sending download request");

    let response = client
        .authorized(Method::GET, "/download", token)
        .query(&[("file_name", name.as_str())])
        .send()
        .await
        .map_err(net_err)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.map_err(net_err)?;
        let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();
        return Err(VaultError::Remote(
            envelope.error.unwrap_or_else(|| DOWNLOAD_FAILED.to_string()),
        ));
    }

    let bytes = response.bytes().await.map_err(net_err)?;
    debug!(name = %name, size = bytes.len(), "download complete");
    Ok(bytes.to_vec())
}

/// Deletes a file via `DELETE /delete?file_name=NAME`
///
/// # Returns
/// The server's confirmation message
pub async fn delete(
    client: &ApiClient,
    token: &str,
    name: &FileName,
) -> Result<String, VaultError> {
    debug!(name = %name, "sending delete request");

    let response = client
        .authorized(Method::DELETE, "/delete", token)
        .query(&[("file_name", name.as_str())])
        .send()
        .await
        .map_err(net_err)?;

    let status = response.status();
    let body = response.text().await.map_err(net_err)?;
    let envelope: MessageEnvelope = serde_json::from_str(&body).unwrap_or_default();

    reject_error(envelope.error, status)?;

    let message = envelope
        .message
        .ok_or_else(|| VaultError::Remote("delete response missing message".to_string()))?;

    info!(name = %name, "delete accepted by server");
    Ok(message)
}
