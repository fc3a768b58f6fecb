//! Call-recording fake provider for use-case tests
//!
//! Records the order of provider invocations so tests can assert request
//! sequencing (e.g. "exactly one list request followed by exactly one upload
//! request"). Responses are fixed per operation and configured up front.

use std::sync::Mutex;

use crate::domain::{FileName, VaultError};
use crate::ports::VaultProvider;

pub(crate) struct MockVault {
    calls: Mutex<Vec<&'static str>>,
    signup: Result<String, VaultError>,
    login: Result<String, VaultError>,
    list: Result<Vec<String>, VaultError>,
    upload: Result<String, VaultError>,
    download: Result<Vec<u8>, VaultError>,
    delete: Result<String, VaultError>,
}

impl MockVault {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            signup: Ok("User registered successfully".to_string()),
            login: Ok("tok-test".to_string()),
            list: Ok(Vec::new()),
            upload: Ok("File uploaded successfully!".to_string()),
            download: Ok(b"payload".to_vec()),
            delete: Ok("File deleted successfully".to_string()),
        }
    }

    pub(crate) fn with_signup(mut self, result: Result<String, VaultError>) -> Self {
        self.signup = result;
        self
    }

    pub(crate) fn with_login(mut self, result: Result<String, VaultError>) -> Self {
        self.login = result;
        self
    }

    pub(crate) fn with_list(mut self, names: &[&str]) -> Self {
        self.list = Ok(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub(crate) fn with_list_error(mut self, err: VaultError) -> Self {
        self.list = Err(err);
        self
    }

    pub(crate) fn with_upload(mut self, result: Result<String, VaultError>) -> Self {
        self.upload = result;
        self
    }

    pub(crate) fn with_delete(mut self, result: Result<String, VaultError>) -> Self {
        self.delete = result;
        self
    }

    /// The provider invocations observed so far, in order
    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait::async_trait]
impl VaultProvider for MockVault {
    async fn signup(&self, _username: &str, _password: &str) -> Result<String, VaultError> {
        self.record("signup");
        self.signup.clone()
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<String, VaultError> {
        self.record("login");
        self.login.clone()
    }

    async fn list_files(&self, _token: &str) -> Result<Vec<FileName>, VaultError> {
        self.record("list");
        self.list.clone().map(|names| {
            names
                .into_iter()
                .map(|n| FileName::new(n).expect("mock listing holds valid names"))
                .collect()
        })
    }

    async fn upload_file(
        &self,
        _token: &str,
        _name: &FileName,
        _data: Vec<u8>,
    ) -> Result<String, VaultError> {
        self.record("upload");
        self.upload.clone()
    }

    async fn download_file(&self, _token: &str, _name: &FileName) -> Result<Vec<u8>, VaultError> {
        self.record("download");
        self.download.clone()
    }

    async fn delete_file(&self, _token: &str, _name: &FileName) -> Result<String, VaultError> {
        self.record("delete");
        self.delete.clone()
    }
}
