//! RemoteVault - VaultProvider implementation over the HTTP client
//!
//! Thin delegation layer: each port method maps to exactly one endpoint call
//! in the [`auth`](crate::auth) or [`files`](crate::files) module. The
//! provider holds no session state; tokens arrive per call from the use
//! cases, which own them through the session store.

use tracing::debug;

use skyvault_core::domain::{FileName, VaultError};
use skyvault_core::ports::VaultProvider;

use crate::client::ApiClient;
use crate::{auth, files};

/// Provider implementation that speaks the storage service's HTTP contract
pub struct RemoteVault {
    client: ApiClient,
}

impl RemoteVault {
    /// Creates a RemoteVault over the given [`ApiClient`]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl VaultProvider for RemoteVault {
    async fn signup(&self, username: &str, password: &str) -> Result<String, VaultError> {
        debug!(username, "RemoteVault::signup");
        auth::signup(&self.client, username, password).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<String, VaultError> {
        debug!(username, "RemoteVault::login");
        auth::login(&self.client, username, password).await
    }

    async fn list_files(&self, token: &str) -> Result<Vec<FileName>, VaultError> {
        debug!("RemoteVault::list_files");
        files::list(&self.client, token).await
    }

    async fn upload_file(
        &self,
        token: &str,
        name: &FileName,
        data: Vec<u8>,
    ) -> Result<String, VaultError> {
        debug!(name = %name, size = data.len(), "RemoteVault::upload_file");
        files::upload(&self.client, token, name, data).await
    }

    async fn download_file(&self, token: &str, name: &FileName) -> Result<Vec<u8>, VaultError> {
        debug!(name = %name, "RemoteVault::download_file");
        files::download(&self.client, token, name).await
    }

    async fn delete_file(&self, token: &str, name: &FileName) -> Result<String, VaultError> {
        debug!(name = %name, "RemoteVault::delete_file");
        files::delete(&self.client, token, name).await
    }
}
