//! # drivehub-worker
//!
//! Synchronization glue between the data service and the drive store:
//! the fetch-then-dispatch refresh cycle and a cancellable poller that
//! repeats it on a fixed interval.

pub mod poller;
pub mod refresh;

pub use poller::{PollerHandle, RefreshPoller};
pub use refresh::refresh_drives;
