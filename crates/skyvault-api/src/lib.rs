//! Skyvault API - HTTP adapter for the storage service
//!
//! Provides the async client for the service's JSON-over-HTTP contract:
//! - Signup/login credential exchange
//! - File listing, multipart upload, download, delete
//! - Durable session persistence in the OS keyring
//!
//! ## Modules
//!
//! - [`client`] - Typed HTTP client (base URL, bearer auth, timeout)
//! - [`auth`] - Signup and login endpoint calls
//! - [`files`] - List, upload, download, and delete endpoint calls
//! - [`provider`] - [`VaultProvider`](skyvault_core::ports::VaultProvider) implementation
//! - [`session`] - Keyring-backed [`SessionStore`](skyvault_core::ports::SessionStore)

pub mod auth;
pub mod client;
pub mod files;
pub mod provider;
pub mod session;
