//! Port definitions - trait interfaces implemented by adapter crates

pub mod session_store;
pub mod vault_provider;

pub use session_store::{MemorySessionStore, SessionStore};
pub use vault_provider::VaultProvider;
