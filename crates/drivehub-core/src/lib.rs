//! # drivehub-core
//!
//! Core crate for Ivy DriveHub. Contains configuration schemas, shared
//! domain types (categories, identifiers), display helpers, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other DriveHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
