//! Mock vault-wide storage pool and health service.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use drivehub_core::result::AppResult;
use drivehub_entity::system::{HealthReport, StoragePool};

use crate::fault::FaultInjector;
use crate::latency::Latency;

/// Mock over vault-wide aggregates.
#[derive(Debug)]
pub struct SystemService {
    pool: RwLock<StoragePool>,
    health: RwLock<HealthReport>,
    latency: Latency,
    faults: Arc<FaultInjector>,
}

impl SystemService {
    /// Create a service with the given initial aggregates.
    pub fn new(
        latency: Latency,
        faults: Arc<FaultInjector>,
        pool: StoragePool,
        health: HealthReport,
    ) -> Self {
        Self {
            pool: RwLock::new(pool),
            health: RwLock::new(health),
            latency,
            faults,
        }
    }

    /// Current aggregate storage usage.
    pub async fn storage_stats(&self) -> AppResult<StoragePool> {
        self.latency.read().await;
        self.faults.check("storage_stats")?;
        Ok(*self.pool.read().await)
    }

    /// Run a health check; the returned snapshot carries a fresh check time.
    pub async fn health_check(&self) -> AppResult<HealthReport> {
        self.latency.read().await;
        self.faults.check("health_check")?;

        let mut health = self.health.write().await;
        health.last_check = Utc::now();
        Ok(health.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_service() -> SystemService {
        SystemService::new(
            Latency::instant(),
            Arc::new(FaultInjector::new()),
            StoragePool {
                total: 2048,
                used: 1024,
                reserved: 100,
            },
            HealthReport {
                score: 98,
                last_check: Utc::now(),
                issues: Vec::new(),
            },
        )
    }

    #[tokio::test]
    async fn test_storage_stats() {
        let service = make_service();
        let pool = service.storage_stats().await.unwrap();
        assert_eq!(pool.available(), 924);
    }

    #[tokio::test]
    async fn test_health_check_refreshes_timestamp() {
        let service = make_service();
        let first = service.health_check().await.unwrap();
        let second = service.health_check().await.unwrap();
        assert!(second.last_check >= first.last_check);
        assert_eq!(second.score, 98);
    }
}
