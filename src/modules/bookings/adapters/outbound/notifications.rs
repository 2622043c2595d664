use crate::modules::bookings::core::notifications::{NotificationKind, OutboundNotification};
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: OutboundNotification) -> anyhow::Result<()>;

    /// Returns how many unread notifications were marked.
    async fn mark_read(
        &self,
        user_id: &str,
        kind: NotificationKind,
        related_booking_id: &str,
    ) -> anyhow::Result<usize>;
}
