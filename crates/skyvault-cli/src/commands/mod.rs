//! Subcommand implementations

pub mod auth;
pub mod files;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use skyvault_api::{client::ApiClient, provider::RemoteVault, session::KeyringSessionStore};
use skyvault_core::config::Config;
use skyvault_core::ports::{SessionStore, VaultProvider};

/// Shared wiring for every subcommand: configuration, the HTTP provider,
/// and the durable session store.
pub struct AppContext {
    pub config: Config,
    pub provider: Arc<dyn VaultProvider>,
    pub sessions: Arc<dyn SessionStore>,
}

/// Loads configuration from `config_path` and builds the adapters
pub fn build_context(config_path: &Path) -> Result<AppContext> {
    let config = Config::load_or_default(config_path);

    let issues = config.validate();
    if !issues.is_empty() {
        let summary = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("Invalid configuration: {}", summary);
    }

    let client = ApiClient::from_config(&config.api).context("Failed to build API client")?;

    Ok(AppContext {
        config,
        provider: Arc::new(RemoteVault::new(client)),
        sessions: Arc::new(KeyringSessionStore::new()),
    })
}
