//! Mock backup listing service.

use std::sync::Arc;

use tokio::sync::RwLock;

use drivehub_core::result::AppResult;
use drivehub_entity::backup::Backup;

use crate::fault::FaultInjector;
use crate::latency::Latency;

/// Read-only mock over recent backup runs.
#[derive(Debug)]
pub struct BackupService {
    backups: RwLock<Vec<Backup>>,
    latency: Latency,
    faults: Arc<FaultInjector>,
}

impl BackupService {
    /// Create an empty service.
    pub fn new(latency: Latency, faults: Arc<FaultInjector>) -> Self {
        Self {
            backups: RwLock::new(Vec::new()),
            latency,
            faults,
        }
    }

    /// Replace the backup list without latency or fault checks. Seeding only.
    pub async fn load(&self, backups: Vec<Backup>) {
        *self.backups.write().await = backups;
    }

    /// List recent backup runs, newest first as seeded.
    pub async fn list(&self) -> AppResult<Vec<Backup>> {
        self.latency.read().await;
        self.faults.check("list_backups")?;
        Ok(self.backups.read().await.clone())
    }
}
