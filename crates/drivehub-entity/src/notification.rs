//! Dashboard notification entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification shown in the dashboard bell menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the notification was raised.
    pub timestamp: DateTime<Utc>,
    /// Whether the user has read it.
    pub read: bool,
}
