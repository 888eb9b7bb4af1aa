//! File tree entities.
//!
//! The mock file tree registers directories under POSIX-style slash-joined
//! paths; each directory holds an ordered list of plain child *names*.
//! Leaf files exist only as names in their parent's list.

use serde::{Deserialize, Serialize};

/// Kind of a file-tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A leaf file with no children.
    File,
    /// A directory with an ordered child-name list.
    Directory,
}

impl EntryKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single keyword-search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matching child name.
    pub name: String,
    /// Full slash-joined path of the match.
    pub path: String,
    /// Whether the matched path is itself a registered directory.
    pub kind: EntryKind,
}
