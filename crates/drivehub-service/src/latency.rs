//! Artificial latency simulation.

use std::time::Duration;

use tokio::time::sleep;

use drivehub_core::config::service::ServiceConfig;

/// Latency profile applied before every mock operation resolves.
///
/// Reads are cheaper than writes so loading-state UI behaves the way it
/// would against a real backend. Operations suspend at the sleep and
/// resume in delay-completion order, not invocation order.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    read: Duration,
    write: Duration,
    search: Duration,
}

impl Latency {
    /// Build a profile from configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            read: Duration::from_millis(config.read_delay_ms),
            write: Duration::from_millis(config.write_delay_ms),
            search: Duration::from_millis(config.search_delay_ms),
        }
    }

    /// A zero-delay profile for tests.
    pub fn instant() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
            search: Duration::ZERO,
        }
    }

    /// Suspend for the read delay.
    pub async fn read(&self) {
        sleep(self.read).await;
    }

    /// Suspend for the write delay.
    pub async fn write(&self) {
        sleep(self.write).await;
    }

    /// Suspend for the search delay.
    pub async fn search(&self) {
        sleep(self.search).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}
