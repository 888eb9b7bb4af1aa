//! Mock data service configuration.

use serde::{Deserialize, Serialize};

/// Settings for the mock data service.
///
/// The delays simulate network round-trips so that loading-state UI can be
/// exercised realistically. The exact values are free to change, but reads
/// should stay cheaper than writes to preserve perceived responsiveness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Delay in milliseconds applied to read operations (list, stats).
    #[serde(default = "default_read_delay")]
    pub read_delay_ms: u64,
    /// Delay in milliseconds applied to write operations (add, update, remove).
    #[serde(default = "default_write_delay")]
    pub write_delay_ms: u64,
    /// Delay in milliseconds applied to keyword search.
    #[serde(default = "default_search_delay")]
    pub search_delay_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            read_delay_ms: default_read_delay(),
            write_delay_ms: default_write_delay(),
            search_delay_ms: default_search_delay(),
        }
    }
}

fn default_read_delay() -> u64 {
    300
}

fn default_write_delay() -> u64 {
    800
}

fn default_search_delay() -> u64 {
    700
}
