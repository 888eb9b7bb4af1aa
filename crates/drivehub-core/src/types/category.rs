//! Drive category enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The top-level bucket a drive belongs to.
///
/// A drive's category is fixed at creation time; there is no cross-category
/// move operation. Using a closed enum (rather than a free-form string key)
/// makes "unknown category" unrepresentable at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveCategory {
    /// A local machine.
    Local,
    /// A remote vault.
    Remote,
    /// A cloud backup account.
    Cloud,
}

impl DriveCategory {
    /// All categories, in display order.
    pub const ALL: [DriveCategory; 3] = [Self::Local, Self::Remote, Self::Cloud];

    /// Return the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for DriveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DriveCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "cloud" => Ok(Self::Cloud),
            other => Err(AppError::validation(format!(
                "Unknown drive category: '{other}'"
            ))),
        }
    }
}
