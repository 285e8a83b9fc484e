use anyhow::Result;

use crate::registration::Notification;

/// Toast surface.
#[async_trait::async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<()>;
}
