//! Mock notification service with read-state management.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_entity::notification::Notification;

use crate::fault::FaultInjector;
use crate::latency::Latency;

/// Mock over the dashboard notification feed.
#[derive(Debug)]
pub struct NotificationService {
    items: RwLock<Vec<Notification>>,
    latency: Latency,
    faults: Arc<FaultInjector>,
}

impl NotificationService {
    /// Create an empty service.
    pub fn new(latency: Latency, faults: Arc<FaultInjector>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            latency,
            faults,
        }
    }

    /// Replace the notification list without latency or fault checks.
    /// Seeding only.
    pub async fn load(&self, notifications: Vec<Notification>) {
        *self.items.write().await = notifications;
    }

    /// List notifications, newest first as seeded.
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.latency.read().await;
        self.faults.check("list_notifications")?;
        Ok(self.items.read().await.clone())
    }

    /// Number of unread notifications.
    pub async fn unread_count(&self) -> AppResult<usize> {
        self.latency.read().await;
        self.faults.check("unread_count")?;
        Ok(self.items.read().await.iter().filter(|n| !n.read).count())
    }

    /// Mark a single notification as read.
    ///
    /// Fails with NotFound when the id is unknown.
    pub async fn mark_read(&self, id: &str) -> AppResult<()> {
        self.latency.write().await;
        self.faults.check("mark_read")?;

        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification not found: {id}")))?;
        item.read = true;

        info!(id, "Notification marked read");
        Ok(())
    }

    /// Mark every notification as read; returns how many changed.
    pub async fn mark_all_read(&self) -> AppResult<u64> {
        self.latency.write().await;
        self.faults.check("mark_all_read")?;

        let mut items = self.items.write().await;
        let mut changed = 0u64;
        for item in items.iter_mut().filter(|n| !n.read) {
            item.read = true;
            changed += 1;
        }

        info!(changed, "All notifications marked read");
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use drivehub_core::error::ErrorKind;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Backup Complete".to_string(),
            message: "Assets successfully backed up".to_string(),
            timestamp: Utc::now(),
            read,
        }
    }

    async fn make_service() -> NotificationService {
        let service = NotificationService::new(Latency::instant(), Arc::new(FaultInjector::new()));
        service
            .load(vec![
                notification("not-001", false),
                notification("not-002", false),
                notification("not-003", true),
            ])
            .await;
        service
    }

    #[tokio::test]
    async fn test_unread_count() {
        let service = make_service().await;
        assert_eq!(service.unread_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_mark_read() {
        let service = make_service().await;
        service.mark_read("not-001").await.unwrap();
        assert_eq!(service.unread_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id() {
        let service = make_service().await;
        let err = service.mark_read("not-999").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_mark_all_read_counts_changes() {
        let service = make_service().await;
        assert_eq!(service.mark_all_read().await.unwrap(), 2);
        assert_eq!(service.unread_count().await.unwrap(), 0);
        // Second pass changes nothing.
        assert_eq!(service.mark_all_read().await.unwrap(), 0);
    }
}
