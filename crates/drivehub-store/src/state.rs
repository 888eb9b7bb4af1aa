//! Store-owned state: drive buckets plus coarse UI flags.

use serde::{Deserialize, Serialize};

use drivehub_core::types::{DriveCategory, DriveId};
use drivehub_entity::drive::Drive;

/// How the drive collection is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Card grid.
    Grid,
    /// Compact rows.
    List,
}

/// The dashboard tab currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    Drives,
    Files,
    Shared,
    Settings,
}

/// One ordered drive bucket per category.
///
/// A struct with a field per category (rather than a map with string keys)
/// makes "unknown category" unrepresentable, so every store transition is
/// a total function. Insertion order within a bucket is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveMap {
    /// Local machines.
    pub local: Vec<Drive>,
    /// Remote vaults.
    pub remote: Vec<Drive>,
    /// Cloud backup accounts.
    pub cloud: Vec<Drive>,
}

impl DriveMap {
    /// Borrow the bucket for a category.
    pub fn get(&self, category: DriveCategory) -> &[Drive] {
        match category {
            DriveCategory::Local => &self.local,
            DriveCategory::Remote => &self.remote,
            DriveCategory::Cloud => &self.cloud,
        }
    }

    /// Mutably borrow the bucket for a category.
    pub fn get_mut(&mut self, category: DriveCategory) -> &mut Vec<Drive> {
        match category {
            DriveCategory::Local => &mut self.local,
            DriveCategory::Remote => &mut self.remote,
            DriveCategory::Cloud => &mut self.cloud,
        }
    }

    /// Replace the bucket for a category.
    pub fn set(&mut self, category: DriveCategory, drives: Vec<Drive>) {
        *self.get_mut(category) = drives;
    }

    /// Find a drive by id within a category.
    pub fn find(&self, category: DriveCategory, drive_id: &DriveId) -> Option<&Drive> {
        self.get(category).iter().find(|d| &d.id == drive_id)
    }

    /// Total number of drives across all categories.
    pub fn len(&self) -> usize {
        self.local.len() + self.remote.len() + self.cloud.len()
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full store-owned state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveState {
    /// Drive buckets, keyed by category.
    pub drives: DriveMap,
    /// True while an outstanding fetch has not resolved.
    pub loading: bool,
    /// Message describing the last failed operation, if any.
    pub error: Option<String>,
    /// Current rendering mode. Presentational only.
    pub view_mode: ViewMode,
    /// Free-text filter. Not validated by the store.
    pub search_query: String,
    /// The dashboard tab currently shown.
    pub active_tab: ActiveTab,
}

impl Default for DriveState {
    fn default() -> Self {
        Self {
            drives: DriveMap::default(),
            loading: false,
            error: None,
            view_mode: ViewMode::Grid,
            search_query: String::new(),
            active_tab: ActiveTab::Drives,
        }
    }
}
