//! Vault-wide storage pool and health entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate capacity of the whole vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePool {
    /// Total pool capacity in bytes.
    pub total: u64,
    /// Bytes currently in use.
    pub used: u64,
    /// Bytes reserved for system use.
    pub reserved: u64,
}

impl StoragePool {
    /// Bytes still available to users (total minus used and reserved).
    pub fn available(&self) -> u64 {
        self.total.saturating_sub(self.used + self.reserved)
    }
}

/// A vault health snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Health score from 0 (critical) to 100 (healthy).
    pub score: u8,
    /// When the last check ran.
    pub last_check: DateTime<Utc>,
    /// Human-readable descriptions of open issues.
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_available_subtracts_reserved() {
        let pool = StoragePool {
            total: 1000,
            used: 600,
            reserved: 100,
        };
        assert_eq!(pool.available(), 300);
    }
}
