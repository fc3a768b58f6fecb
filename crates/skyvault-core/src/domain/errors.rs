//! Domain error taxonomy
//!
//! Every failure a use case can surface to the presentation layer falls into
//! one of these kinds. None of them is fatal and none is retried
//! automatically; the user may always retry the triggering action.

use thiserror::Error;

/// Errors surfaced by vault operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// Local input was rejected before any network call was made
    #[error("{0}")]
    Validation(String),

    /// A privileged operation was attempted without a session token
    #[error("Authentication required")]
    AuthRequired,

    /// The server responded with an error payload or a non-success status
    #[error("{0}")]
    Remote(String),

    /// The request could not complete (connection failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The durable session store failed (keyring unavailable, corrupt entry)
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl VaultError {
    /// Returns true if the error was raised before any request was issued
    pub fn is_local(&self) -> bool {
        matches!(self, VaultError::Validation(_) | VaultError::AuthRequired)
    }
}
