//! Domain module - entities and value objects
//!
//! Pure business types with no I/O: the session entity, validated file
//! names, the file-registry cache, transfer value objects, and the error
//! taxonomy shared by every use case.

pub mod errors;
pub mod newtypes;
pub mod registry;
pub mod session;
pub mod transfer;

pub use errors::VaultError;
pub use newtypes::FileName;
pub use registry::FileRegistry;
pub use session::{AuthMode, Notice, NoticeKind, Session};
pub use transfer::{DownloadedFile, PendingUpload};
