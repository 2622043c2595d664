use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::notifications::NotificationKind;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use serde::{Deserialize, Serialize};

pub const NOTIFY_USER: &str = "NotifyUser";
pub const MARK_NOTIFICATION_READ: &str = "MarkNotificationRead";
pub const ARCHIVE_BOOKING: &str = "ArchiveBooking";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationReadPayload {
    pub user_id: String,
    pub kind: NotificationKind,
    pub related_booking_id: String,
}

/// Translate a list of domain intents into outbox rows and enqueue them.
/// All rows of one commit share `stream_version`, the version the commit
/// produced, and are told apart by their position in `intents`.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    stream_version: i64,
    topic: &str,
    occurred_at: i64,
    intents: Vec<BookingIntent>,
) -> Result<usize, OutboxError> {
    let count = intents.len();
    for (sequence, intent) in intents.into_iter().enumerate() {
        let (event_type, payload) = match intent {
            BookingIntent::NotifyUser { notification } => {
                (NOTIFY_USER, serde_json::to_value(notification))
            }
            BookingIntent::MarkNotificationRead {
                user_id,
                kind,
                related_booking_id,
            } => (
                MARK_NOTIFICATION_READ,
                serde_json::to_value(NotificationReadPayload {
                    user_id,
                    kind,
                    related_booking_id,
                }),
            ),
            BookingIntent::ArchiveBooking { record } => {
                (ARCHIVE_BOOKING, serde_json::to_value(record))
            }
        };
        let payload = payload.map_err(|e| OutboxError::Validation(e.to_string()))?;
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                sequence: sequence as u32,
                occurred_at,
                payload,
                attempts: 0,
                last_error: None,
            })
            .await?;
    }
    Ok(count)
}
