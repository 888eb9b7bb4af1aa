//! Background refresh poller configuration.

use serde::{Deserialize, Serialize};

/// Settings for the periodic drive-refresh poller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Whether the poller is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Interval in seconds between refresh cycles.
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            interval_seconds: default_interval(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_interval() -> u64 {
    30
}
