use crate::modules::bookings::core::availability::with_recomputed_availability;
use crate::modules::bookings::core::booking::TimeRange;
use crate::modules::bookings::core::conflicts::find_conflict;
use crate::modules::bookings::core::decision::{DecideError, Decision};
use crate::modules::bookings::core::events::{
    BookingEvent, v1::booking_requested::BookingRequestedV1,
};
use crate::modules::bookings::core::intents::BookingIntent;
use crate::modules::bookings::core::notifications::{
    NotificationKind, OutboundNotification, format_instant,
};
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::core::station::StationTopology;
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;

pub fn decide_request(
    state: &StationLedger,
    topology: &StationTopology,
    command: &RequestBooking,
) -> Decision {
    if !topology.has_port(command.port_id) {
        return Decision::Rejected {
            reason: DecideError::PortNotFound {
                port_id: command.port_id,
            },
        };
    }
    let window = match TimeRange::future_from(
        command.start_time,
        command.end_time,
        command.requested_at,
    ) {
        Ok(window) => window,
        Err(e) => return Decision::Rejected { reason: e.into() },
    };
    if let Some(existing) = find_conflict(state.ports.bookings_for(command.port_id), &window) {
        return Decision::Rejected {
            reason: DecideError::Conflict {
                port_id: command.port_id,
                conflicting_booking_id: existing.booking_id.clone(),
            },
        };
    }

    let requested = BookingRequestedV1 {
        booking_id: command.booking_id.clone(),
        station_id: command.station_id.clone(),
        port_id: command.port_id,
        requester_id: command.requester_id.clone(),
        start_time: window.start,
        end_time: window.end,
        requested_at: command.requested_at,
    };
    let notification = OutboundNotification {
        user_id: topology.owner_id.clone(),
        kind: NotificationKind::BookingRequest,
        title: format!("New booking request at {}", topology.name),
        body: format!(
            "Port {} requested from {} to {}",
            command.port_id,
            format_instant(window.start),
            format_instant(window.end)
        ),
        related_booking_id: command.booking_id.clone(),
    };
    Decision::Accepted {
        events: with_recomputed_availability(
            state,
            topology,
            vec![BookingEvent::BookingRequestedV1(requested)],
            command.requested_at,
        ),
        intents: vec![BookingIntent::NotifyUser { notification }],
    }
}
