//! Data service contract traits.
//!
//! These traits pin down the contract a real or mock backend must
//! satisfy. The store never talks to a service directly; calling code
//! awaits these operations and dispatches the results.

use async_trait::async_trait;

use drivehub_core::result::AppResult;
use drivehub_core::types::{DriveCategory, DriveId};
use drivehub_entity::drive::{CreateDrive, Drive, DriveStats, DriveUpdate};
use drivehub_entity::fs::{EntryKind, SearchHit};

/// CRUD and statistics over per-category drive collections.
#[async_trait]
pub trait DriveApi: Send + Sync + 'static {
    /// List the drives in a category, in insertion order.
    ///
    /// An empty or never-populated category yields an empty vec, never an
    /// error. Repeated calls are idempotent reads.
    async fn list_drives(&self, category: DriveCategory) -> AppResult<Vec<Drive>>;

    /// Create a drive in a category.
    ///
    /// The service assigns the id, sets `last_sync` to now and the status
    /// to active. Fails with a validation error when `used > total`.
    async fn add_drive(&self, category: DriveCategory, req: CreateDrive) -> AppResult<Drive>;

    /// Merge partial updates onto a drive.
    ///
    /// Returns `Ok(None)` when the id is not present in the category —
    /// an absent target is a result, not an error. Fails with a
    /// validation error when the merged state would have `used > total`.
    async fn update_drive(
        &self,
        category: DriveCategory,
        drive_id: &DriveId,
        updates: DriveUpdate,
    ) -> AppResult<Option<Drive>>;

    /// Remove a drive from its category. Tolerant of absent ids.
    async fn remove_drive(&self, category: DriveCategory, drive_id: &DriveId) -> AppResult<()>;

    /// Fetch a capacity snapshot for one drive, refreshing its sync time.
    ///
    /// Fails with NotFound when the id is absent in the category.
    async fn drive_stats(
        &self,
        category: DriveCategory,
        drive_id: &DriveId,
    ) -> AppResult<DriveStats>;
}

/// Directory listing, entry CRUD, and keyword search over the file tree.
#[async_trait]
pub trait FileApi: Send + Sync + 'static {
    /// List the child names of a directory, in insertion order.
    ///
    /// Fails with NotFound when no directory is registered at `path`;
    /// an existing-but-empty directory yields an empty vec.
    async fn list_dir(&self, path: &str) -> AppResult<Vec<String>>;

    /// Create a file or directory under an existing parent directory.
    ///
    /// Directories are also registered (empty) at `parent/name`. Fails
    /// with NotFound when the parent is not registered.
    async fn create_entry(&self, parent: &str, name: &str, kind: EntryKind) -> AppResult<()>;

    /// Delete the entry at `path`.
    ///
    /// Removes the leaf name from the parent's child list (a non-listed
    /// name is a tolerated no-op) and drops the entry's own directory
    /// registration if present. Fails with NotFound when the parent
    /// directory is not registered.
    async fn delete_entry(&self, path: &str) -> AppResult<()>;

    /// Case-insensitive substring search over every child name of every
    /// registered directory. Results are ordered by path for stability.
    async fn search(&self, query: &str) -> AppResult<Vec<SearchHit>>;
}
