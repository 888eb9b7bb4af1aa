//! In-memory drive CRUD with simulated latency.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info};

use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_core::types::{DriveCategory, DriveId};
use drivehub_entity::drive::{CreateDrive, Drive, DriveStats, DriveStatus, DriveUpdate};

use crate::api::DriveApi;
use crate::fault::FaultInjector;
use crate::latency::Latency;

/// Mock implementation of [`DriveApi`] over per-category in-memory buckets.
///
/// Each bucket lives in its own dashmap entry, so two in-flight writes to
/// the same category apply atomically relative to each other (they may
/// still land in delay-completion order rather than invocation order).
#[derive(Debug)]
pub struct DriveService {
    /// Drive buckets keyed by category. All categories are present from
    /// construction so list never distinguishes "unknown" from "empty".
    buckets: DashMap<DriveCategory, Vec<Drive>>,
    latency: Latency,
    faults: Arc<FaultInjector>,
}

impl DriveService {
    /// Create an empty service.
    pub fn new(latency: Latency, faults: Arc<FaultInjector>) -> Self {
        let buckets = DashMap::new();
        for category in DriveCategory::ALL {
            buckets.insert(category, Vec::new());
        }
        Self {
            buckets,
            latency,
            faults,
        }
    }

    /// Bulk-load a bucket without latency or fault checks. Seeding only.
    pub fn load(&self, category: DriveCategory, drives: Vec<Drive>) {
        self.buckets.insert(category, drives);
    }

    fn validate_capacity(used: u64, total: u64) -> AppResult<()> {
        if used > total {
            return Err(AppError::validation(format!(
                "Used bytes ({used}) exceed total capacity ({total})"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DriveApi for DriveService {
    async fn list_drives(&self, category: DriveCategory) -> AppResult<Vec<Drive>> {
        self.latency.read().await;
        self.faults.check("list_drives")?;

        Ok(self
            .buckets
            .get(&category)
            .map(|bucket| bucket.clone())
            .unwrap_or_default())
    }

    async fn add_drive(&self, category: DriveCategory, req: CreateDrive) -> AppResult<Drive> {
        self.latency.write().await;
        self.faults.check("add_drive")?;

        Self::validate_capacity(req.used, req.total)?;

        let drive = Drive {
            id: DriveId::generate(),
            name: req.name,
            drive_type: req.drive_type,
            used: req.used,
            total: req.total,
            icon: req.icon,
            last_sync: Utc::now(),
            color: req.color,
            status: DriveStatus::Active,
        };

        self.buckets.entry(category).or_default().push(drive.clone());

        info!(%category, drive_id = %drive.id, name = %drive.name, "Drive added");
        Ok(drive)
    }

    async fn update_drive(
        &self,
        category: DriveCategory,
        drive_id: &DriveId,
        updates: DriveUpdate,
    ) -> AppResult<Option<Drive>> {
        self.latency.write().await;
        self.faults.check("update_drive")?;

        let mut bucket = match self.buckets.get_mut(&category) {
            Some(bucket) => bucket,
            None => return Ok(None),
        };

        let Some(drive) = bucket.iter_mut().find(|d| &d.id == drive_id) else {
            debug!(%category, %drive_id, "Update target not found");
            return Ok(None);
        };

        let merged_used = updates.used.unwrap_or(drive.used);
        let merged_total = updates.total.unwrap_or(drive.total);
        Self::validate_capacity(merged_used, merged_total)?;

        updates.apply_to(drive);

        info!(%category, %drive_id, "Drive updated");
        Ok(Some(drive.clone()))
    }

    async fn remove_drive(&self, category: DriveCategory, drive_id: &DriveId) -> AppResult<()> {
        self.latency.write().await;
        self.faults.check("remove_drive")?;

        if let Some(mut bucket) = self.buckets.get_mut(&category) {
            let before = bucket.len();
            bucket.retain(|d| &d.id != drive_id);
            if bucket.len() < before {
                info!(%category, %drive_id, "Drive removed");
            }
        }
        Ok(())
    }

    async fn drive_stats(
        &self,
        category: DriveCategory,
        drive_id: &DriveId,
    ) -> AppResult<DriveStats> {
        self.latency.read().await;
        self.faults.check("drive_stats")?;

        let mut bucket = self
            .buckets
            .get_mut(&category)
            .ok_or_else(|| AppError::not_found(format!("Drive not found: {drive_id}")))?;

        let drive = bucket
            .iter_mut()
            .find(|d| &d.id == drive_id)
            .ok_or_else(|| AppError::not_found(format!("Drive not found: {drive_id}")))?;

        // A stat call counts as a successful sync.
        drive.last_sync = Utc::now();

        Ok(DriveStats {
            used: drive.used,
            total: drive.total,
            available: drive.available(),
            last_sync: drive.last_sync,
        })
    }
}
