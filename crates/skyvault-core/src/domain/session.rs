//! Session entity and auth-flow state values
//!
//! A [`Session`] pairs the bearer token issued at login with the username it
//! was issued for; the two are only ever present together. The
//! authenticated/unauthenticated dichotomy is expressed as `Option<Session>`,
//! which makes the two states mutually exclusive and exhaustive by type.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::errors::VaultError;

// ============================================================================
// Session
// ============================================================================

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: String,
    username: String,
}

impl Session {
    /// Creates a session from a token and the username it was issued for
    ///
    /// Both values must be non-empty; a session with either blank would
    /// break the token-presence-implies-authenticated invariant.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Result<Self, VaultError> {
        let token = token.into();
        let username = username.into();

        if token.is_empty() {
            return Err(VaultError::Validation(
                "Session token must not be empty".to_string(),
            ));
        }
        if username.is_empty() {
            return Err(VaultError::Validation(
                "Session username must not be empty".to_string(),
            ));
        }

        Ok(Self { token, username })
    }

    /// Returns the opaque bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the username the token was issued for
    pub fn username(&self) -> &str {
        &self.username
    }
}

// ============================================================================
// AuthMode
// ============================================================================

/// The two mutually exclusive credential-entry modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Entering credentials for an existing account
    Login,
    /// Registering a new account (adds the password confirmation field)
    Signup,
}

impl AuthMode {
    /// Returns the other mode
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Parses a mode from its configuration spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "login" => Some(AuthMode::Login),
            "signup" => Some(AuthMode::Signup),
            _ => None,
        }
    }
}

impl Default for AuthMode {
    fn default() -> Self {
        AuthMode::Login
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Login => write!(f, "login"),
            AuthMode::Signup => write!(f, "signup"),
        }
    }
}

// ============================================================================
// Notice
// ============================================================================

/// Severity of a notice shown on the auth display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible notice produced by the auth flow
///
/// Success notices auto-dismiss after a fixed delay; error notices persist
/// until replaced or cleared. Both share one display surface.
#[derive(Debug, Clone)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
    expires_at: Option<Instant>,
}

impl Notice {
    /// Creates a success notice that dismisses itself after `ttl`
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            expires_at: Some(Instant::now() + ttl),
        }
    }

    /// Creates an error notice with no expiry
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    /// Returns the notice severity
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the notice text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true once the auto-dismiss deadline has passed
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}
