use crate::modules::bookings::adapters::outbound::notifications::Notifier;
use crate::modules::bookings::core::notifications::{NotificationKind, OutboundNotification};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredNotification {
    pub notification: OutboundNotification,
    pub read: bool,
}

#[derive(Default)]
pub struct InMemoryNotifier {
    inbox: RwLock<Vec<StoredNotification>>,
    is_offline: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn for_user(&self, user_id: &str) -> Vec<StoredNotification> {
        self.inbox
            .read()
            .await
            .iter()
            .filter(|n| n.notification.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    /// A redelivered notification (same recipient, kind and booking) is ignored.
    async fn notify(&self, notification: OutboundNotification) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Notifier offline"));
        }
        let mut inbox = self.inbox.write().await;
        if inbox.iter().any(|stored| {
            let n = &stored.notification;
            n.user_id == notification.user_id
                && n.kind == notification.kind
                && n.related_booking_id == notification.related_booking_id
        }) {
            return Ok(());
        }
        inbox.push(StoredNotification {
            notification,
            read: false,
        });
        Ok(())
    }

    async fn mark_read(
        &self,
        user_id: &str,
        kind: NotificationKind,
        related_booking_id: &str,
    ) -> anyhow::Result<usize> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Notifier offline"));
        }
        let mut marked = 0;
        for stored in self.inbox.write().await.iter_mut() {
            let n = &stored.notification;
            if !stored.read
                && n.user_id == user_id
                && n.kind == kind
                && n.related_booking_id == related_booking_id
            {
                stored.read = true;
                marked += 1;
            }
        }
        Ok(marked)
    }
}
