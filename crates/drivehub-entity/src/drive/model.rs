//! Drive entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drivehub_core::types::DriveId;

use super::appearance::{DriveColor, DriveIcon};
use super::status::DriveStatus;

/// A storage endpoint tracked by the dashboard.
///
/// The category a drive belongs to is the key of the bucket holding it,
/// not a field on the drive itself; both the category and `id` are
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    /// Unique drive identifier, assigned by the data service.
    pub id: DriveId,
    /// Display label.
    pub name: String,
    /// Human-readable type label (e.g. "Local Machine"). Correlated with
    /// the category but not enforced as derived from it.
    #[serde(rename = "type")]
    pub drive_type: String,
    /// Bytes currently in use. Invariant: `used <= total`.
    pub used: u64,
    /// Total capacity in bytes.
    pub total: u64,
    /// Icon shown on the drive card.
    pub icon: DriveIcon,
    /// Timestamp of the last successful synchronization.
    pub last_sync: DateTime<Utc>,
    /// Accent color of the drive card.
    pub color: DriveColor,
    /// Current synchronization status.
    pub status: DriveStatus,
}

impl Drive {
    /// Remaining capacity in bytes.
    pub fn available(&self) -> u64 {
        self.total.saturating_sub(self.used)
    }
}

/// Caller-supplied fields for creating a drive.
///
/// The service assigns `id`, `last_sync`, and the initial `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDrive {
    /// Display label.
    pub name: String,
    /// Human-readable type label.
    #[serde(rename = "type")]
    pub drive_type: String,
    /// Bytes currently in use.
    #[serde(default)]
    pub used: u64,
    /// Total capacity in bytes.
    #[serde(default)]
    pub total: u64,
    /// Icon shown on the drive card.
    #[serde(default)]
    pub icon: DriveIcon,
    /// Accent color of the drive card.
    #[serde(default)]
    pub color: DriveColor,
}

/// Field-level update for a drive.
///
/// Fields that are `Some` overwrite the corresponding drive field; `None`
/// fields are retained unchanged. There are deliberately no `id` or
/// category fields here, so identity mutation cannot be expressed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriveUpdate {
    /// New display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New type label.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub drive_type: Option<String>,
    /// New used-bytes count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
    /// New total capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// New icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<DriveIcon>,
    /// New accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<DriveColor>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DriveStatus>,
    /// New last-sync timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
}

impl DriveUpdate {
    /// Shallow-merge the present fields onto `drive`.
    pub fn apply_to(&self, drive: &mut Drive) {
        if let Some(name) = &self.name {
            drive.name = name.clone();
        }
        if let Some(drive_type) = &self.drive_type {
            drive.drive_type = drive_type.clone();
        }
        if let Some(used) = self.used {
            drive.used = used;
        }
        if let Some(total) = self.total {
            drive.total = total;
        }
        if let Some(icon) = self.icon {
            drive.icon = icon;
        }
        if let Some(color) = self.color {
            drive.color = color;
        }
        if let Some(status) = self.status {
            drive.status = status;
        }
        if let Some(last_sync) = self.last_sync {
            drive.last_sync = last_sync;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_drive() -> Drive {
        Drive {
            id: DriveId::new("drive-test1"),
            name: "MacBook Pro".to_string(),
            drive_type: "Local Machine".to_string(),
            used: 10,
            total: 100,
            icon: DriveIcon::Laptop,
            last_sync: Utc::now(),
            color: DriveColor::Blue,
            status: DriveStatus::Active,
        }
    }

    #[test]
    fn test_merge_overwrites_present_fields_only() {
        let mut drive = sample_drive();
        let original_id = drive.id.clone();
        let updates = DriveUpdate {
            name: Some("Renamed".to_string()),
            used: Some(42),
            ..Default::default()
        };

        updates.apply_to(&mut drive);

        assert_eq!(drive.name, "Renamed");
        assert_eq!(drive.used, 42);
        assert_eq!(drive.total, 100);
        assert_eq!(drive.drive_type, "Local Machine");
        assert_eq!(drive.id, original_id);
    }

    #[test]
    fn test_empty_update_is_identity() {
        let mut drive = sample_drive();
        let before = drive.clone();
        DriveUpdate::default().apply_to(&mut drive);
        assert_eq!(drive, before);
    }

    #[test]
    fn test_available() {
        let drive = sample_drive();
        assert_eq!(drive.available(), 90);
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let drive = sample_drive();
        let json = serde_json::to_value(&drive).expect("serialize");
        assert_eq!(json["type"], "Local Machine");
    }
}
