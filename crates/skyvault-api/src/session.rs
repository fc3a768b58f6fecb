//! Keyring-backed session store
//!
//! Persists the session (token + username) in the OS credential store
//! (e.g., GNOME Keyring, KDE Wallet, macOS Keychain) under fixed keys, so
//! it survives process restarts. The session is serialized as JSON.

use tracing::{debug, info};

use skyvault_core::domain::{Session, VaultError};
use skyvault_core::ports::SessionStore;

/// Keyring service name for the stored session
const KEYRING_SERVICE: &str = "skyvault";

/// Fixed keyring entry name; there is at most one session per profile
const KEYRING_ENTRY: &str = "session";

/// Durable session store backed by the system keyring
#[derive(Debug, Default)]
pub struct KeyringSessionStore;

impl KeyringSessionStore {
    /// Creates the store
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<keyring::Entry, VaultError> {
        keyring::Entry::new(KEYRING_SERVICE, KEYRING_ENTRY).map_err(storage_err)
    }
}

impl SessionStore for KeyringSessionStore {
    fn save(&self, session: &Session) -> Result<(), VaultError> {
        let json = serde_json::to_string(session).map_err(storage_err)?;

        Self::entry()?.set_password(&json).map_err(storage_err)?;

        debug!(username = session.username(), "stored session in keyring");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, VaultError> {
        match Self::entry()?.get_password() {
            Ok(json) => {
                let session: Session = serde_json::from_str(&json).map_err(storage_err)?;
                debug!(username = session.username(), "loaded session from keyring");
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("no session in keyring");
                Ok(None)
            }
            Err(e) => Err(storage_err(e)),
        }
    }

    fn clear(&self) -> Result<(), VaultError> {
        match Self::entry()?.delete_credential() {
            Ok(()) => {
                info!("cleared session from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("no session to clear");
                Ok(())
            }
            Err(e) => Err(storage_err(e)),
        }
    }
}

fn storage_err(err: impl std::fmt::Display) -> VaultError {
    VaultError::Storage(err.to_string())
}
