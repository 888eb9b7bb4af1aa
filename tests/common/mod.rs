//! Shared test helpers for integration tests.

use std::sync::Arc;

use tokio::sync::RwLock;

use drivehub_service::backup::BackupService;
use drivehub_service::device::DeviceService;
use drivehub_service::drive::DriveService;
use drivehub_service::fs::FileService;
use drivehub_service::notification::NotificationService;
use drivehub_service::system::SystemService;
use drivehub_service::{FaultInjector, Latency, seed};
use drivehub_store::DriveStore;

/// Fully seeded mock backend plus an empty store, with zero latency.
pub struct TestVault {
    pub drives: Arc<DriveService>,
    pub files: Arc<FileService>,
    pub backups: Arc<BackupService>,
    pub devices: Arc<DeviceService>,
    pub notifications: Arc<NotificationService>,
    pub system: Arc<SystemService>,
    pub faults: Arc<FaultInjector>,
    pub store: Arc<RwLock<DriveStore>>,
}

impl TestVault {
    /// Build a vault seeded with the reference dataset.
    pub async fn new() -> Self {
        let latency = Latency::instant();
        let faults = Arc::new(FaultInjector::new());

        let drives = Arc::new(DriveService::new(latency, Arc::clone(&faults)));
        for (category, bucket) in seed::drives() {
            drives.load(category, bucket);
        }

        let files = Arc::new(FileService::new(latency, Arc::clone(&faults)));
        for (path, children) in seed::directories() {
            files.load(path, children);
        }

        let backups = Arc::new(BackupService::new(latency, Arc::clone(&faults)));
        backups.load(seed::backups()).await;

        let devices = Arc::new(DeviceService::new(latency, Arc::clone(&faults)));
        devices.load(seed::devices()).await;

        let notifications = Arc::new(NotificationService::new(latency, Arc::clone(&faults)));
        notifications.load(seed::notifications()).await;

        let system = Arc::new(SystemService::new(
            latency,
            Arc::clone(&faults),
            seed::storage_pool(),
            seed::health(),
        ));

        Self {
            drives,
            files,
            backups,
            devices,
            notifications,
            system,
            faults,
            store: Arc::new(RwLock::new(DriveStore::new())),
        }
    }

    /// Run one refresh cycle against the seeded drive service.
    pub async fn refresh(&self) {
        drivehub_worker::refresh_drives(self.drives.as_ref(), self.store.as_ref()).await;
    }
}
