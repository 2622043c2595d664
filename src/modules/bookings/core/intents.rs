use crate::modules::bookings::core::history_record::HistoryRecord;
use crate::modules::bookings::core::notifications::{NotificationKind, OutboundNotification};

/// Side effects requested by a decision. They run only after the events
/// are committed, and their failure never undoes the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingIntent {
    NotifyUser {
        notification: OutboundNotification,
    },
    MarkNotificationRead {
        user_id: String,
        kind: NotificationKind,
        related_booking_id: String,
    },
    ArchiveBooking {
        record: HistoryRecord,
    },
}
