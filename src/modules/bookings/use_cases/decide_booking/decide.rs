use crate::modules::bookings::core::availability::with_recomputed_availability;
use crate::modules::bookings::core::booking::BookingStatus;
use crate::modules::bookings::core::decision::{DecideError, Decision};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::events::v1::booking_decided::{
    BookingApprovedV1, BookingRejectedV1,
};
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::notifications::{
    NotificationKind, OutboundNotification, format_instant,
};
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::core::station::StationTopology;
use crate::modules::bookings::use_cases::decide_booking::command::{DecideBooking, Verdict};

pub fn decide_booking(
    state: &StationLedger,
    topology: &StationTopology,
    command: &DecideBooking,
) -> Decision {
    if !topology.is_managed_by(&command.actor) {
        return Decision::Rejected {
            reason: DecideError::Forbidden,
        };
    }
    let Some(booking) = state.booking(&command.booking_id) else {
        return Decision::Rejected {
            reason: DecideError::BookingNotFound {
                booking_id: command.booking_id.clone(),
            },
        };
    };
    // A second decision is an error, never a silent success.
    if booking.status != BookingStatus::Pending {
        return Decision::Rejected {
            reason: DecideError::AlreadyDecided {
                status: booking.status,
            },
        };
    }

    let booking_id = command.booking_id.clone();
    let decided_by = command.actor.user_id.clone();
    let window = format!(
        "port {} from {} to {}",
        booking.port_id,
        format_instant(booking.start_time),
        format_instant(booking.end_time)
    );
    let (event, kind, title) = match command.verdict {
        Verdict::Approve => (
            BookingEvent::BookingApprovedV1(BookingApprovedV1 {
                booking_id: booking_id.clone(),
                decided_by,
                owner_message: command.message.clone(),
                approved_at: command.decided_at,
            }),
            NotificationKind::BookingApproved,
            format!("Booking approved at {}", topology.name),
        ),
        Verdict::Reject => (
            BookingEvent::BookingRejectedV1(BookingRejectedV1 {
                booking_id: booking_id.clone(),
                decided_by,
                owner_message: command.message.clone(),
                rejected_at: command.decided_at,
            }),
            NotificationKind::BookingRejected,
            format!("Booking rejected at {}", topology.name),
        ),
    };
    let body = match &command.message {
        Some(message) => format!("Your booking for {window}: {message}"),
        None => format!("Your booking for {window}"),
    };

    Decision::Accepted {
        events: with_recomputed_availability(state, topology, vec![event], command.decided_at),
        intents: vec![
            BookingIntent::NotifyUser {
                notification: OutboundNotification {
                    user_id: booking.requester_id.clone(),
                    kind,
                    title,
                    body,
                    related_booking_id: booking_id.clone(),
                },
            },
            BookingIntent::MarkNotificationRead {
                user_id: topology.owner_id.clone(),
                kind: NotificationKind::BookingRequest,
                related_booking_id: booking_id,
            },
        ],
    }
}
