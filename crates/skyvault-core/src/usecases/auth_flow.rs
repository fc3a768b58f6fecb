//! Authentication flow use case
//!
//! Drives signup, login, and logout against the vault provider, owns the
//! credential-entry mode (login vs. signup) and the notice shown on the
//! shared auth display surface. Local validation failures never reach the
//! network; server and transport failures are surfaced verbatim and never
//! retried.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::{AuthMode, FileRegistry, Notice, Session, VaultError};
use crate::ports::{SessionStore, VaultProvider};
use crate::usecases::files::refresh_registry;

/// Default auto-dismiss delay for success notices
const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Message shown when a required credential field is blank
const MSG_FIELDS_REQUIRED: &str = "All fields are required!";

/// Message shown when the two password entries differ
const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match!";

/// Result of a successful login
///
/// The session was issued and persisted; the immediate registry refresh that
/// follows may still have failed, which is reported separately so the
/// presentation layer can surface it without treating the login as failed.
#[derive(Debug)]
pub struct LoginOutcome {
    /// The session now held by the session store
    pub session: Session,
    /// Error from the triggered registry refresh, if it failed
    pub refresh_error: Option<VaultError>,
}

/// Use case for the signup/login/logout flow
pub struct AuthFlow {
    provider: Arc<dyn VaultProvider>,
    sessions: Arc<dyn SessionStore>,
    mode: AuthMode,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl AuthFlow {
    /// Creates the flow in the default mode with the default notice delay
    pub fn new(provider: Arc<dyn VaultProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            provider,
            sessions,
            mode: AuthMode::default(),
            notice: None,
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }

    /// Sets the initial credential-entry mode (configuration default)
    pub fn with_mode(mut self, mode: AuthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the auto-dismiss delay for success notices
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Current credential-entry mode
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switches between login and signup modes
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// The notice currently on the display surface, if any
    ///
    /// Expired success notices are reported as absent.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired())
    }

    /// Registers a new account
    ///
    /// Fails locally, without a network call, when any field is blank or the
    /// password confirmation differs. On success a transient success notice
    /// is raised and the mode transitions to login.
    pub async fn signup(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<String, VaultError> {
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(self.reject(MSG_FIELDS_REQUIRED));
        }
        if password != confirm_password {
            return Err(self.reject(MSG_PASSWORD_MISMATCH));
        }

        match self.provider.signup(username, password).await {
            Ok(message) => {
                info!(username, "signup succeeded");
                self.notice = Some(Notice::success(message.as_str(), self.notice_ttl));
                self.mode = AuthMode::Login;
                Ok(message)
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Exchanges credentials for a session and refreshes the registry once
    ///
    /// Fails locally when either field is blank. On success the session is
    /// persisted, the notice surface cleared, and exactly one registry
    /// refresh is triggered.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        registry: &mut FileRegistry,
    ) -> Result<LoginOutcome, VaultError> {
        if username.is_empty() || password.is_empty() {
            return Err(self.reject(MSG_FIELDS_REQUIRED));
        }

        let token = match self.provider.login(username, password).await {
            Ok(token) => token,
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                return Err(err);
            }
        };

        let session = Session::new(token, username)?;
        self.sessions.save(&session)?;
        self.notice = None;
        info!(username, "login succeeded");

        let refresh_error = refresh_registry(self.provider.as_ref(), session.token(), registry)
            .await
            .err();
        if let Some(err) = &refresh_error {
            warn!(error = %err, "listing refresh after login failed");
        }

        Ok(LoginOutcome {
            session,
            refresh_error,
        })
    }

    /// Clears the session and resets the flow to its unauthenticated state
    ///
    /// Mode returns to login and any notice is dismissed.
    pub fn logout(&mut self) -> Result<(), VaultError> {
        self.sessions.clear()?;
        self.mode = AuthMode::Login;
        self.notice = None;
        info!("logged out");
        Ok(())
    }

    fn reject(&mut self, message: &str) -> VaultError {
        let err = VaultError::Validation(message.to_string());
        self.notice = Some(Notice::error(message));
        err
    }
}
