//! Mock device registry service.

use std::sync::Arc;

use tokio::sync::RwLock;

use drivehub_core::result::AppResult;
use drivehub_entity::device::Device;

use crate::fault::FaultInjector;
use crate::latency::Latency;

/// Read-only mock over the registered device list.
#[derive(Debug)]
pub struct DeviceService {
    devices: RwLock<Vec<Device>>,
    latency: Latency,
    faults: Arc<FaultInjector>,
}

impl DeviceService {
    /// Create an empty service.
    pub fn new(latency: Latency, faults: Arc<FaultInjector>) -> Self {
        Self {
            devices: RwLock::new(Vec::new()),
            latency,
            faults,
        }
    }

    /// Replace the device list without latency or fault checks. Seeding only.
    pub async fn load(&self, devices: Vec<Device>) {
        *self.devices.write().await = devices;
    }

    /// List registered devices.
    pub async fn list(&self) -> AppResult<Vec<Device>> {
        self.latency.read().await;
        self.faults.check("list_devices")?;
        Ok(self.devices.read().await.clone())
    }
}
