//! Per-drive capacity statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capacity snapshot returned by the stats operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveStats {
    /// Bytes currently in use.
    pub used: u64,
    /// Total capacity in bytes.
    pub total: u64,
    /// Remaining capacity; always exactly `total - used`.
    pub available: u64,
    /// When the drive last synchronized.
    pub last_sync: DateTime<Utc>,
}
