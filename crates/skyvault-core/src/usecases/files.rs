//! File operations use case
//!
//! Registry refresh, download, and delete: one-shot authenticated requests
//! with results propagated back to the caller. Every operation requires a
//! present session token and fails with [`VaultError::AuthRequired`] before
//! any network call otherwise.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{DownloadedFile, FileName, FileRegistry, VaultError};
use crate::ports::{SessionStore, VaultProvider};

/// Result of a successful delete
///
/// The delete itself succeeded; the follow-up registry refresh may still
/// have failed, which is reported separately so the presentation layer can
/// surface it without undoing the delete confirmation.
#[derive(Debug)]
pub struct DeleteOutcome {
    /// Server confirmation message
    pub message: String,
    /// Error from the triggered registry refresh, if it failed
    pub refresh_error: Option<VaultError>,
}

/// Use case for registry refresh, download, and delete
pub struct FileOperations {
    provider: Arc<dyn VaultProvider>,
    sessions: Arc<dyn SessionStore>,
}

impl FileOperations {
    /// Creates the use case over the given provider and session store
    pub fn new(provider: Arc<dyn VaultProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { provider, sessions }
    }

    fn require_token(&self) -> Result<String, VaultError> {
        self.sessions.token().ok_or(VaultError::AuthRequired)
    }

    /// Refreshes the registry from the server
    ///
    /// On success the registry contents are replaced wholesale; on failure
    /// the prior contents are left untouched and the error is returned.
    /// Idempotent: repeated calls without intervening mutations observe the
    /// same file set.
    pub async fn refresh(&self, registry: &mut FileRegistry) -> Result<(), VaultError> {
        let token = self.require_token()?;
        refresh_registry(self.provider.as_ref(), &token, registry).await
    }

    /// Downloads a file into a transient in-memory resource
    ///
    /// The returned [`DownloadedFile`] is dropped by the caller once the
    /// save action has run.
    pub async fn download(&self, name: &FileName) -> Result<DownloadedFile, VaultError> {
        let token = self.require_token()?;
        debug!(name = %name, "downloading file");

        let bytes = self.provider.download_file(&token, name).await?;
        debug!(name = %name, size = bytes.len(), "download complete");

        Ok(DownloadedFile::new(name.clone(), bytes))
    }

    /// Deletes a file and triggers a registry refresh
    ///
    /// Caller confirmation happens before this is invoked; the use case only
    /// enforces the session precondition.
    pub async fn delete(
        &self,
        name: &FileName,
        registry: &mut FileRegistry,
    ) -> Result<DeleteOutcome, VaultError> {
        let token = self.require_token()?;
        debug!(name = %name, "deleting file");

        let message = self.provider.delete_file(&token, name).await?;

        let refresh_error = refresh_registry(self.provider.as_ref(), &token, registry)
            .await
            .err();
        if let Some(err) = &refresh_error {
            warn!(error = %err, "listing refresh after delete failed");
        }

        Ok(DeleteOutcome {
            message,
            refresh_error,
        })
    }
}

/// Fetches the listing and overwrites the registry with it
///
/// The registry is only mutated once a full response has arrived; a failed
/// request leaves the previous contents in place.
pub(crate) async fn refresh_registry(
    provider: &dyn VaultProvider,
    token: &str,
    registry: &mut FileRegistry,
) -> Result<(), VaultError> {
    let files = provider.list_files(token).await?;
    debug!(count = files.len(), "registry refreshed");
    registry.replace_all(files);
    Ok(())
}
