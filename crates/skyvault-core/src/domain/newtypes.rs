//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for domain values, validated at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::VaultError;

// ============================================================================
// FileName
// ============================================================================

/// A validated remote file name
///
/// File names are plain base names as exchanged with the storage service:
/// non-empty, free of path separators and control characters, and never the
/// `.`/`..` dot entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    /// Creates a FileName, validating its content
    pub fn new(name: impl Into<String>) -> Result<Self, VaultError> {
        let name = name.into();

        if name.is_empty() {
            return Err(VaultError::Validation(
                "File name must not be empty".to_string(),
            ));
        }
        if name == "." || name == ".." {
            return Err(VaultError::Validation(format!(
                "File name '{}' is reserved",
                name
            )));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(VaultError::Validation(format!(
                "File name '{}' must not contain path separators",
                name
            )));
        }
        if name.chars().any(|c| c.is_control()) {
            return Err(VaultError::Validation(
                "File name must not contain control characters".to_string(),
            ));
        }

        Ok(Self(name))
    }

    /// Returns the file name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FileName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileName {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
