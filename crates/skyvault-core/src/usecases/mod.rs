//! Use cases - orchestration of domain entities through port interfaces

pub mod auth_flow;
pub mod files;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_flow::{AuthFlow, LoginOutcome};
pub use files::{DeleteOutcome, FileOperations};
pub use upload::{UploadCoordinator, UploadOutcome};
