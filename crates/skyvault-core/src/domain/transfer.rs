//! Transfer value objects
//!
//! [`PendingUpload`] is the file a user has selected but not yet committed;
//! it is consumed by value when an upload is initiated, so the selection is
//! destroyed once the coordinator resolves, whatever the outcome.
//! [`DownloadedFile`] is the transient in-memory resource handed to the
//! presentation layer for a save action and released when dropped.

use super::newtypes::FileName;

/// A locally selected file awaiting upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    name: FileName,
    data: Vec<u8>,
}

impl PendingUpload {
    /// Creates a pending upload from a declared name and the file bytes
    pub fn new(name: FileName, data: Vec<u8>) -> Self {
        Self { name, data }
    }

    /// The name the file will be stored under
    pub fn name(&self) -> &FileName {
        &self.name
    }

    /// The file contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the file contents in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Splits the pending upload into its name and bytes
    pub fn into_parts(self) -> (FileName, Vec<u8>) {
        (self.name, self.data)
    }
}

/// A downloaded file held in memory until the caller saves it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    name: FileName,
    bytes: Vec<u8>,
}

impl DownloadedFile {
    /// Wraps a download response body under the name it was requested as
    pub fn new(name: FileName, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    /// The remote name the payload was downloaded under
    pub fn name(&self) -> &FileName {
        &self.name
    }

    /// The binary payload
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the resource, yielding the payload for the save action
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
