//! Opaque drive identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a drive.
///
/// Assigned by the data service at creation time and immutable afterwards.
/// The textual format is an implementation detail; uniqueness across the
/// service's lifetime is the contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriveId(String);

impl DriveId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(format!("drive-{}", Uuid::new_v4().simple()))
    }

    /// Wrap an existing raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DriveId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
