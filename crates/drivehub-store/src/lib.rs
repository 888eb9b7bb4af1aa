//! # drivehub-store
//!
//! The Drive Store: single source of truth for drive collections and
//! coarse UI state. State transitions are synchronous pure functions of
//! (state, action); all effectful work happens in calling code before an
//! action is dispatched, never inside the store.

pub mod action;
pub mod state;
pub mod store;

pub use action::DriveAction;
pub use state::{ActiveTab, DriveMap, DriveState, ViewMode};
pub use store::DriveStore;
