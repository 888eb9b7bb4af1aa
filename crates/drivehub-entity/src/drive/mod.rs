//! Drive domain entities.

pub mod appearance;
pub mod model;
pub mod stats;
pub mod status;

pub use appearance::{DriveColor, DriveIcon};
pub use model::{CreateDrive, Drive, DriveUpdate};
pub use stats::DriveStats;
pub use status::DriveStatus;
