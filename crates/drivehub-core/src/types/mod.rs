//! Shared domain types used across DriveHub crates.

pub mod category;
pub mod format;
pub mod id;

pub use category::DriveCategory;
pub use id::DriveId;
