//! Registered device entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connectivity state of a registered device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    /// The device has checked in recently.
    Active,
    /// The device has not been seen for a while.
    Inactive,
}

/// A device registered with the vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Connectivity state.
    pub status: DeviceStatus,
    /// When the device last checked in.
    pub last_seen: DateTime<Utc>,
}
