//! Mock file tree service.

pub mod path;
pub mod service;

pub use service::FileService;
