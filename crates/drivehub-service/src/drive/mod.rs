//! Mock drive service.

pub mod service;

pub use service::DriveService;
