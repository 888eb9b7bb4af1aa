//! # drivehub-entity
//!
//! Domain entities for Ivy DriveHub: drives and their presentation
//! attributes, the file tree, and the dashboard side entities (backups,
//! devices, notifications, storage pool, health).

pub mod backup;
pub mod device;
pub mod drive;
pub mod fs;
pub mod notification;
pub mod system;
