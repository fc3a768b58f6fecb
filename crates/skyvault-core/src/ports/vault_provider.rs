//! Vault provider port (driven/secondary port)
//!
//! Interface for the remote file-storage service. The primary implementation
//! speaks the service's JSON-over-HTTP contract, but the trait is
//! transport-agnostic so use cases can be exercised against in-process fakes.
//!
//! ## Design Notes
//!
//! - Methods return [`VaultError`] rather than `anyhow::Error` because the
//!   error kind (remote payload vs. transport failure) is part of what the
//!   presentation layer renders.
//! - Every method is a single request/response round trip. No retry on
//!   failure; the caller surfaces the error and the user retries manually.
//! - The bearer token is passed explicitly per call. Session ownership lives
//!   with [`SessionStore`](super::session_store::SessionStore); providers
//!   hold no ambient credential state.

use crate::domain::{FileName, VaultError};

/// Port trait for remote vault operations
#[async_trait::async_trait]
pub trait VaultProvider: Send + Sync {
    /// Registers a new account
    ///
    /// # Returns
    /// The server's confirmation message
    async fn signup(&self, username: &str, password: &str) -> Result<String, VaultError>;

    /// Exchanges credentials for a bearer token
    ///
    /// # Returns
    /// The opaque access token issued by the server
    async fn login(&self, username: &str, password: &str) -> Result<String, VaultError>;

    /// Fetches the authoritative file listing, in server order
    async fn list_files(&self, token: &str) -> Result<Vec<FileName>, VaultError>;

    /// Transmits a file as a multipart body
    ///
    /// # Returns
    /// The server's confirmation message
    async fn upload_file(
        &self,
        token: &str,
        name: &FileName,
        data: Vec<u8>,
    ) -> Result<String, VaultError>;

    /// Downloads a file's binary payload by name
    async fn download_file(&self, token: &str, name: &FileName) -> Result<Vec<u8>, VaultError>;

    /// Deletes a file by name
    ///
    /// # Returns
    /// The server's confirmation message
    async fn delete_file(&self, token: &str, name: &FileName) -> Result<String, VaultError>;
}
