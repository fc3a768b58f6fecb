//! File registry entity
//!
//! The registry is the client's local cache of the server's authoritative
//! file-name list. It is transient: rebuilt by full overwrite on every list
//! response and treated as stale immediately after any mutating operation.
//! Order is the server-provided order.

use super::newtypes::FileName;

/// Local cache of the remote file listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRegistry {
    files: Vec<FileName>,
}

impl FileRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached entries in server order
    pub fn files(&self) -> &[FileName] {
        &self.files
    }

    /// Returns true if a file with the given name is present
    pub fn contains(&self, name: &FileName) -> bool {
        self.files.iter().any(|f| f == name)
    }

    /// Replaces the entire contents with a fresh server listing
    ///
    /// Total replacement, never a merge: entries absent from `files`
    /// disappear. "Last response wins."
    pub fn replace_all(&mut self, files: Vec<FileName>) {
        self.files = files;
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no entries are cached
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
