//! Upload coordinator use case
//!
//! Two-phase upload: consult the server's current listing for the declared
//! name, and only transmit when no collision is found. The transmission is
//! never started before the listing response has been observed; the phases
//! are strictly sequenced, not speculative.
//!
//! The check is best-effort, not transactional. A name created by a
//! concurrent actor between the two phases is not caught here; true
//! uniqueness enforcement belongs to the server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{FileName, FileRegistry, PendingUpload, VaultError};
use crate::ports::{SessionStore, VaultProvider};
use crate::usecases::files::refresh_registry;

/// How an upload attempt resolved
#[derive(Debug)]
pub enum UploadOutcome {
    /// The file was transmitted and the server confirmed it
    Uploaded {
        /// Server confirmation message
        message: String,
        /// Error from the triggered registry refresh, if it failed
        refresh_error: Option<VaultError>,
    },
    /// A file with the declared name already exists; nothing was transmitted
    DuplicateName {
        /// The colliding name, for the warning the caller renders
        name: FileName,
    },
}

/// Use case coordinating the duplicate check with the upload itself
///
/// Exposes a busy flag that is raised for the whole two-phase operation and
/// cleared on every exit path, so the presentation layer can disable and
/// re-enable its trigger control.
pub struct UploadCoordinator {
    provider: Arc<dyn VaultProvider>,
    sessions: Arc<dyn SessionStore>,
    busy: AtomicBool,
}

impl UploadCoordinator {
    /// Creates the coordinator over the given provider and session store
    pub fn new(provider: Arc<dyn VaultProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            provider,
            sessions,
            busy: AtomicBool::new(false),
        }
    }

    /// Returns true while an upload operation is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Runs the two-phase upload
    ///
    /// The pending upload is consumed whatever the outcome, so the caller's
    /// selection state is always destroyed once this resolves.
    pub async fn upload(
        &self,
        pending: PendingUpload,
        registry: &mut FileRegistry,
    ) -> Result<UploadOutcome, VaultError> {
        let _busy = BusyGuard::engage(&self.busy);

        let token = self.sessions.token().ok_or(VaultError::AuthRequired)?;
        let (name, data) = pending.into_parts();

        // Phase 1: fetch the latest listing and check the declared name
        debug!(name = %name, "checking for duplicate name");
        let existing = self.provider.list_files(&token).await?;

        if existing.contains(&name) {
            info!(name = %name, "upload aborted, name already exists");
            return Ok(UploadOutcome::DuplicateName { name });
        }

        // Phase 2: transmit, only now that the listing response is in hand
        debug!(name = %name, size = data.len(), "transmitting file");
        let message = self.provider.upload_file(&token, &name, data).await?;
        info!(name = %name, "upload complete");

        let refresh_error = refresh_registry(self.provider.as_ref(), &token, registry)
            .await
            .err();
        if let Some(err) = &refresh_error {
            warn!(error = %err, "listing refresh after upload failed");
        }

        Ok(UploadOutcome::Uploaded {
            message,
            refresh_error,
        })
    }
}

/// Raises the busy flag for a scope and lowers it on drop
///
/// Drop-based so the flag is cleared on every exit path, early aborts and
/// errors included.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
