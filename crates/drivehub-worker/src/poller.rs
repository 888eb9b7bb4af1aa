//! Periodic drive refresh with guaranteed teardown.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, watch};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::info;

use drivehub_core::config::poller::PollerConfig;
use drivehub_service::api::DriveApi;
use drivehub_store::DriveStore;

use crate::refresh::refresh_drives;

/// Periodic refresh task tied to an explicit cancellation handle.
///
/// Unlike an ambient interval timer, the poll loop runs until the handle
/// is shut down, and [`PollerHandle::shutdown`] does not return before
/// the loop has exited — so no dispatch can land after teardown.
pub struct RefreshPoller<A> {
    api: Arc<A>,
    store: Arc<RwLock<DriveStore>>,
    interval: Duration,
}

impl<A: DriveApi> RefreshPoller<A> {
    /// Create a poller from configuration.
    pub fn new(api: Arc<A>, store: Arc<RwLock<DriveStore>>, config: &PollerConfig) -> Self {
        Self {
            api,
            store,
            interval: Duration::from_secs(config.interval_seconds),
        }
    }

    /// Start the poll loop on the runtime and return its handle.
    pub fn spawn(self) -> PollerHandle {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(cancel_rx));
        PollerHandle { cancel_tx, task }
    }

    /// Run until the cancel signal is received. Refreshes immediately,
    /// then once per interval.
    async fn run(self, mut cancel: watch::Receiver<bool>) {
        info!(interval_seconds = self.interval.as_secs(), "Refresh poller started");

        loop {
            refresh_drives(self.api.as_ref(), self.store.as_ref()).await;

            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        break;
                    }
                }
                _ = time::sleep(self.interval) => {}
            }
        }

        info!("Refresh poller stopped");
    }
}

/// Handle to a running poll loop.
pub struct PollerHandle {
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal shutdown and wait for the loop to exit.
    pub async fn shutdown(self) {
        let _ = self.cancel_tx.send(true);
        let _ = self.task.await;
    }
}
