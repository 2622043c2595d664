// Relay that delivers enqueued intents to the notification and history
// services. Runs outside the request path; a failed delivery stays pending
// until it succeeds or exhausts its attempts.

use crate::modules::bookings::adapters::outbound::history_archive::HistoryArchive;
use crate::modules::bookings::adapters::outbound::intent_outbox::{
    ARCHIVE_BOOKING, MARK_NOTIFICATION_READ, NOTIFY_USER, NotificationReadPayload,
};
use crate::modules::bookings::adapters::outbound::notifications::Notifier;
use crate::modules::bookings::core::history_record::HistoryRecord;
use crate::modules::bookings::core::notifications::{NotificationKind, OutboundNotification};
use crate::shared::infrastructure::intent_outbox::{
    DomainOutbox, FailureOutcome, OutboxError, OutboxRow,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayReport {
    pub delivered: usize,
    pub retrying: usize,
    pub dead_lettered: usize,
    pub deferred: usize,
}

/// Recipient, kind and booking a notification row refers to.
type NotificationTarget = (String, NotificationKind, String);

fn notification_target(row: &OutboxRow) -> Option<NotificationTarget> {
    match row.event_type.as_str() {
        NOTIFY_USER => serde_json::from_value::<OutboundNotification>(row.payload.clone())
            .ok()
            .map(|n| (n.user_id, n.kind, n.related_booking_id)),
        MARK_NOTIFICATION_READ => {
            serde_json::from_value::<NotificationReadPayload>(row.payload.clone())
                .ok()
                .map(|p| (p.user_id, p.kind, p.related_booking_id))
        }
        _ => None,
    }
}

pub struct IntentRelay<TOutbox, TNotifier, THistory>
where
    TOutbox: DomainOutbox + 'static,
    TNotifier: Notifier + 'static,
    THistory: HistoryArchive + 'static,
{
    outbox: Arc<TOutbox>,
    notifier: Arc<TNotifier>,
    history: Arc<THistory>,
    batch_size: usize,
    max_attempts: u32,
}

impl<TOutbox, TNotifier, THistory> IntentRelay<TOutbox, TNotifier, THistory>
where
    TOutbox: DomainOutbox + 'static,
    TNotifier: Notifier + 'static,
    THistory: HistoryArchive + 'static,
{
    pub fn new(
        outbox: Arc<TOutbox>,
        notifier: Arc<TNotifier>,
        history: Arc<THistory>,
        batch_size: usize,
        max_attempts: u32,
    ) -> Self {
        Self {
            outbox,
            notifier,
            history,
            batch_size,
            max_attempts,
        }
    }

    pub async fn run_once(&self) -> Result<RelayReport, OutboxError> {
        let mut report = RelayReport::default();
        let mut undelivered: HashSet<NotificationTarget> = HashSet::new();
        for row in self.outbox.pending(self.batch_size).await? {
            let key = row.key();
            let target = notification_target(&row);
            if row.event_type == MARK_NOTIFICATION_READ
                && target.as_ref().is_some_and(|t| undelivered.contains(t))
            {
                debug!(
                    stream_id = %row.stream_id,
                    stream_version = row.stream_version,
                    "mark-read held back until its notification is delivered"
                );
                report.deferred += 1;
                continue;
            }
            match self.deliver(&row).await {
                Ok(()) => {
                    if let Err(error) = self.outbox.mark_delivered(&key).await {
                        warn!(
                            event_type = %row.event_type,
                            stream_id = %row.stream_id,
                            stream_version = row.stream_version,
                            error = %error,
                            "delivered row could not be marked delivered"
                        );
                    }
                    report.delivered += 1;
                }
                Err(error) => {
                    if let (NOTIFY_USER, Some(target)) = (row.event_type.as_str(), target) {
                        undelivered.insert(target);
                    }
                    let outcome = self
                        .outbox
                        .mark_failed(&key, &error.to_string(), self.max_attempts)
                        .await?;
                    warn!(
                        event_type = %row.event_type,
                        stream_id = %row.stream_id,
                        stream_version = row.stream_version,
                        ?outcome,
                        error = %error,
                        "outbox delivery failed"
                    );
                    match outcome {
                        FailureOutcome::Retrying { .. } => report.retrying += 1,
                        FailureOutcome::DeadLettered { .. } => report.dead_lettered += 1,
                    }
                }
            }
        }
        Ok(report)
    }

    async fn deliver(&self, row: &OutboxRow) -> anyhow::Result<()> {
        match row.event_type.as_str() {
            NOTIFY_USER => {
                let notification: OutboundNotification =
                    serde_json::from_value(row.payload.clone())?;
                self.notifier.notify(notification).await
            }
            MARK_NOTIFICATION_READ => {
                let payload: NotificationReadPayload =
                    serde_json::from_value(row.payload.clone())?;
                let marked = self
                    .notifier
                    .mark_read(&payload.user_id, payload.kind, &payload.related_booking_id)
                    .await?;
                debug!(
                    marked,
                    booking_id = %payload.related_booking_id,
                    "marked request notifications read"
                );
                Ok(())
            }
            ARCHIVE_BOOKING => {
                let record: HistoryRecord = serde_json::from_value(row.payload.clone())?;
                self.history.archive(record).await
            }
            other => Err(anyhow::anyhow!("unknown outbox event type {other}")),
        }
    }
}
