//! The reducer-style drive store.

use tracing::debug;

use crate::action::DriveAction;
use crate::state::DriveState;

/// Single source of truth for drive collections and coarse UI state.
///
/// `dispatch` applies exactly one action synchronously and is not
/// reentrant-sensitive: each action is fully applied before the next is
/// processed. The store never fetches; it only ingests data handed to it.
/// Transitions are total functions — unknown drive ids are silent no-ops,
/// never failures.
#[derive(Debug, Clone, Default)]
pub struct DriveStore {
    state: DriveState,
}

impl DriveStore {
    /// Create a store with the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an explicit state (useful in tests).
    pub fn with_state(state: DriveState) -> Self {
        Self { state }
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &DriveState {
        &self.state
    }

    /// Apply one action to the state.
    pub fn dispatch(&mut self, action: DriveAction) {
        match action {
            DriveAction::SetDrives { drives } => {
                self.state.drives = drives;
                self.state.loading = false;
            }
            DriveAction::SetLoading { loading } => {
                self.state.loading = loading;
            }
            DriveAction::SetError { message } => {
                self.state.error = message;
                self.state.loading = false;
            }
            DriveAction::SetViewMode { mode } => {
                self.state.view_mode = mode;
            }
            DriveAction::SetSearchQuery { query } => {
                self.state.search_query = query;
            }
            DriveAction::SetActiveTab { tab } => {
                debug!(tab = ?tab, "Switching active tab");
                self.state.active_tab = tab;
            }
            DriveAction::UpdateDrive {
                category,
                drive_id,
                updates,
            } => {
                let bucket = self.state.drives.get_mut(category);
                match bucket.iter_mut().find(|d| d.id == drive_id) {
                    Some(drive) => updates.apply_to(drive),
                    None => {
                        debug!(%category, %drive_id, "UpdateDrive for unknown id, ignoring");
                    }
                }
            }
            DriveAction::RemoveDrive { category, drive_id } => {
                self.state.drives.get_mut(category).retain(|d| d.id != drive_id);
            }
        }
    }
}
