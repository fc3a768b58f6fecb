//! Session store port
//!
//! Owns the persisted session (token + username). The durable adapter keeps
//! it in the OS keyring under fixed keys so it survives process restarts;
//! the initial authenticated/unauthenticated view on startup is computed
//! solely from what this port reports.

use std::sync::Mutex;

use crate::domain::{Session, VaultError};

/// Port trait for session persistence
pub trait SessionStore: Send + Sync {
    /// Persists the session so it survives a restart
    fn save(&self, session: &Session) -> Result<(), VaultError>;

    /// Returns the persisted session, or `None` when unauthenticated
    fn load(&self) -> Result<Option<Session>, VaultError>;

    /// Removes the persisted session; subsequent loads return `None`
    fn clear(&self) -> Result<(), VaultError>;

    /// Returns the current token, or `None` when unauthenticated
    ///
    /// Never fails: storage errors degrade to `None`.
    fn token(&self) -> Option<String> {
        self.load()
            .ok()
            .flatten()
            .map(|session| session.token().to_string())
    }
}

/// In-process session store
///
/// Holds the session behind a mutex for the lifetime of the process. Used in
/// tests and wherever durable persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), VaultError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| VaultError::Storage("session store mutex poisoned".to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, VaultError> {
        let guard = self
            .session
            .lock()
            .map_err(|_| VaultError::Storage("session store mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn clear(&self) -> Result<(), VaultError> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| VaultError::Storage("session store mutex poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
