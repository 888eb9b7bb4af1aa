//! Development seed data matching the reference dashboard dataset.

use chrono::{Duration, Utc};

use drivehub_core::types::{DriveCategory, DriveId};
use drivehub_entity::backup::{Backup, BackupKind, BackupStatus};
use drivehub_entity::device::{Device, DeviceStatus};
use drivehub_entity::drive::{Drive, DriveColor, DriveIcon, DriveStatus};
use drivehub_entity::notification::Notification;
use drivehub_entity::system::{HealthReport, StoragePool};

const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;

fn drive(
    name: &str,
    drive_type: &str,
    used: u64,
    total: u64,
    icon: DriveIcon,
    color: DriveColor,
) -> Drive {
    Drive {
        id: DriveId::generate(),
        name: name.to_string(),
        drive_type: drive_type.to_string(),
        used,
        total,
        icon,
        last_sync: Utc::now(),
        color,
        status: DriveStatus::Active,
    }
}

/// The four reference drives, grouped by category.
pub fn drives() -> Vec<(DriveCategory, Vec<Drive>)> {
    vec![
        (
            DriveCategory::Local,
            vec![
                drive(
                    "MacBook Pro",
                    "Local Machine",
                    256 * GIB,
                    512 * GIB,
                    DriveIcon::Laptop,
                    DriveColor::Blue,
                ),
                drive(
                    "Windows Workstation",
                    "Local Machine",
                    12 * TIB / 10,
                    2 * TIB,
                    DriveIcon::Laptop,
                    DriveColor::Purple,
                ),
            ],
        ),
        (
            DriveCategory::Remote,
            vec![drive(
                "Primary Vault",
                "Remote Storage",
                35 * TIB / 10,
                8 * TIB,
                DriveIcon::Server,
                DriveColor::Emerald,
            )],
        ),
        (
            DriveCategory::Cloud,
            vec![drive(
                "Cloud Backup",
                "Cloud Storage",
                500 * GIB,
                2 * TIB,
                DriveIcon::Cloud,
                DriveColor::Rose,
            )],
        ),
    ]
}

/// The reference directory tree.
pub fn directories() -> Vec<(String, Vec<String>)> {
    vec![
        (
            "/".to_string(),
            vec![
                "Documents".to_string(),
                "Images".to_string(),
                "Downloads".to_string(),
            ],
        ),
        (
            "/Documents".to_string(),
            vec!["work".to_string(), "personal".to_string()],
        ),
    ]
}

/// Recent backup runs.
pub fn backups() -> Vec<Backup> {
    vec![
        Backup {
            id: "bkp-001".to_string(),
            timestamp: Utc::now(),
            status: BackupStatus::InProgress,
            department: "Marketing".to_string(),
            size: 242_000_000_000,
            kind: BackupKind::Full,
            device_id: "dev-001".to_string(),
        },
        Backup {
            id: "bkp-002".to_string(),
            timestamp: Utc::now() - Duration::hours(2),
            status: BackupStatus::Completed,
            department: "Design".to_string(),
            size: 156_000_000_000,
            kind: BackupKind::Incremental,
            device_id: "dev-002".to_string(),
        },
    ]
}

/// Registered devices.
pub fn devices() -> Vec<Device> {
    vec![
        Device {
            id: "dev-001".to_string(),
            name: "Marketing-MBP-1".to_string(),
            status: DeviceStatus::Active,
            last_seen: Utc::now(),
        },
        Device {
            id: "dev-002".to_string(),
            name: "Design-MBP-2".to_string(),
            status: DeviceStatus::Active,
            last_seen: Utc::now(),
        },
        Device {
            id: "dev-003".to_string(),
            name: "Dev-PC-1".to_string(),
            status: DeviceStatus::Inactive,
            last_seen: Utc::now() - Duration::days(1),
        },
    ]
}

/// Notification feed, newest first.
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "not-001".to_string(),
            title: "Backup Complete".to_string(),
            message: "Marketing assets successfully backed up".to_string(),
            timestamp: Utc::now() - Duration::minutes(2),
            read: false,
        },
        Notification {
            id: "not-002".to_string(),
            title: "Storage Alert".to_string(),
            message: "Approaching 85% capacity".to_string(),
            timestamp: Utc::now() - Duration::hours(1),
            read: false,
        },
        Notification {
            id: "not-003".to_string(),
            title: "New Device".to_string(),
            message: "Design-MBP-2 connected to vault".to_string(),
            timestamp: Utc::now() - Duration::hours(3),
            read: true,
        },
    ]
}

/// Aggregate storage pool (2 TiB total, half used, 100 GiB reserved).
pub fn storage_pool() -> StoragePool {
    StoragePool {
        total: 2 * TIB,
        used: TIB,
        reserved: 100 * GIB,
    }
}

/// Initial health snapshot.
pub fn health() -> HealthReport {
    HealthReport {
        score: 98,
        last_check: Utc::now(),
        issues: Vec::new(),
    }
}
