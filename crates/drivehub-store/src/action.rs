//! Store actions.

use serde::{Deserialize, Serialize};

use drivehub_core::types::{DriveCategory, DriveId};
use drivehub_entity::drive::DriveUpdate;

use crate::state::{ActiveTab, DriveMap, ViewMode};

/// A discrete, tagged message describing one state transition.
///
/// The enum is closed and the store matches on it exhaustively, so adding
/// a variant is a compile error until every consumer handles it. Actions
/// never carry effects; they only describe the resulting state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DriveAction {
    /// Replace the entire drive mapping and clear the loading flag.
    SetDrives {
        /// The new buckets, all categories supplied by the caller.
        drives: DriveMap,
    },
    /// Set the loading flag.
    SetLoading {
        /// Whether a fetch is outstanding.
        loading: bool,
    },
    /// Record (or clear) the last operation error.
    ///
    /// Recording an error also clears `loading`; loading cannot remain
    /// true once a failure is known.
    SetError {
        /// The failure message, or `None` to clear.
        message: Option<String>,
    },
    /// Switch between grid and list rendering.
    SetViewMode {
        /// The new mode.
        mode: ViewMode,
    },
    /// Replace the free-text search filter.
    SetSearchQuery {
        /// The new query.
        query: String,
    },
    /// Switch the visible dashboard tab.
    SetActiveTab {
        /// The new tab.
        tab: ActiveTab,
    },
    /// Merge partial updates onto one drive. No-op if the id is absent.
    UpdateDrive {
        /// Bucket holding the drive.
        category: DriveCategory,
        /// The drive to update.
        drive_id: DriveId,
        /// Fields to overwrite; absent fields are retained.
        updates: DriveUpdate,
    },
    /// Drop one drive from its bucket. No-op if the id is absent.
    RemoveDrive {
        /// Bucket holding the drive.
        category: DriveCategory,
        /// The drive to remove.
        drive_id: DriveId,
    },
}
