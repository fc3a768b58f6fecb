//! Auth commands - Signup, Login, Logout, and Status
//!
//! Drives the core auth flow over the HTTP provider:
//! 1. `signup` - registers an account; validation happens locally first.
//! 2. `login`  - exchanges credentials for a token, stores the session in
//!    the keyring, and fetches the initial file listing.
//! 3. `logout` - clears the stored session.
//! 4. `status` - shows whether a session is present and for whom.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use tracing::info;

use skyvault_core::domain::FileRegistry;
use skyvault_core::ports::SessionStore;
use skyvault_core::usecases::AuthFlow;

use crate::commands::{build_context, AppContext};
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Register a new account
    Signup {
        /// Account name
        username: String,
        /// Password
        #[arg(long)]
        password: String,
        /// Repeat of the password
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in and store the session
    Login {
        /// Account name
        username: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Remove the stored session
    Logout,
    /// Check authentication status
    Status,
}

impl AuthCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format);
        let ctx = build_context(config_path)?;

        match self {
            AuthCommand::Signup {
                username,
                password,
                confirm_password,
            } => {
                self.execute_signup(&ctx, &*fmt, username, password, confirm_password)
                    .await
            }
            AuthCommand::Login { username, password } => {
                self.execute_login(&ctx, &*fmt, username, password).await
            }
            AuthCommand::Logout => self.execute_logout(&ctx, &*fmt),
            AuthCommand::Status => self.execute_status(&ctx, &*fmt, format),
        }
    }

    fn auth_flow(&self, ctx: &AppContext) -> AuthFlow {
        AuthFlow::new(ctx.provider.clone(), ctx.sessions.clone())
            .with_mode(ctx.config.default_auth_mode())
            .with_notice_ttl(Duration::from_secs(ctx.config.auth.notice_dismiss_secs))
    }

    async fn execute_signup(
        &self,
        ctx: &AppContext,
        fmt: &dyn OutputFormatter,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        let mut flow = self.auth_flow(ctx);
        let message = flow.signup(username, password, confirm_password).await?;

        fmt.success(&message);
        fmt.info("You can now log in with 'skyvault auth login'");
        Ok(())
    }

    async fn execute_login(
        &self,
        ctx: &AppContext,
        fmt: &dyn OutputFormatter,
        username: &str,
        password: &str,
    ) -> Result<()> {
        info!(username, "logging in");
        let mut flow = self.auth_flow(ctx);
        let mut registry = FileRegistry::new();

        let outcome = flow.login(username, password, &mut registry).await?;

        fmt.success(&format!("Logged in as {}", outcome.session.username()));
        match outcome.refresh_error {
            Some(err) => fmt.warn(&format!("Could not fetch file list: {}", err)),
            None => fmt.info(&format!("{} file(s) stored", registry.len())),
        }
        Ok(())
    }

    fn execute_logout(&self, ctx: &AppContext, fmt: &dyn OutputFormatter) -> Result<()> {
        let mut flow = self.auth_flow(ctx);
        flow.logout()?;

        fmt.success("Logged out");
        fmt.info("Session removed from keyring");
        Ok(())
    }

    fn execute_status(
        &self,
        ctx: &AppContext,
        fmt: &dyn OutputFormatter,
        format: OutputFormat,
    ) -> Result<()> {
        match ctx.sessions.load()? {
            Some(session) => {
                if format == OutputFormat::Json {
                    fmt.print_json(&serde_json::json!({
                        "authenticated": true,
                        "username": session.username(),
                    }));
                } else {
                    fmt.success(&format!("Logged in as {}", session.username()));
                }
            }
            None => {
                if format == OutputFormat::Json {
                    fmt.print_json(&serde_json::json!({ "authenticated": false }));
                } else {
                    fmt.info("Not logged in");
                    fmt.info("Run 'skyvault auth login' to authenticate");
                }
            }
        }
        Ok(())
    }
}
