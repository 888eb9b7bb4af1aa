//! Backup run entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress state of a backup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    /// The backup is currently running.
    InProgress,
    /// The backup finished successfully.
    Completed,
    /// The backup aborted with an error.
    Failed,
}

/// Scope of a backup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupKind {
    /// Everything is copied.
    Full,
    /// Only changes since the previous run are copied.
    Incremental,
}

/// A single backup run shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    /// Unique backup identifier.
    pub id: String,
    /// When the run started.
    pub timestamp: DateTime<Utc>,
    /// Current progress state.
    pub status: BackupStatus,
    /// Department the backed-up data belongs to.
    pub department: String,
    /// Size of the backed-up data in bytes.
    pub size: u64,
    /// Full or incremental.
    pub kind: BackupKind,
    /// The device the backup was taken from.
    pub device_id: String,
}
