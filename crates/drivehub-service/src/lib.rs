//! # drivehub-service
//!
//! The mock data service: an in-memory stand-in for a remote backend so
//! the store and UI can be exercised without one. Every operation imposes
//! an artificial latency before resolving, and failures can be injected
//! deterministically for testing error paths.
//!
//! All collections are owned by the constructed service values — no
//! module-level globals — so parallel tests stay isolated.

pub mod api;
pub mod backup;
pub mod device;
pub mod drive;
pub mod fault;
pub mod fs;
pub mod latency;
pub mod notification;
pub mod seed;
pub mod system;

pub use api::{DriveApi, FileApi};
pub use fault::FaultInjector;
pub use latency::Latency;
