use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::events::v1::booking_requested::BookingRequestedV1;
use crate::modules::bookings::core::evolve::evolve;
use crate::modules::bookings::core::state::StationLedger;
use crate::tests::fixtures::commands::RequestBookingBuilder;

pub fn make_booking_requested_v1_event() -> BookingRequestedV1 {
    let command = RequestBookingBuilder::new().build();
    BookingRequestedV1 {
        booking_id: command.booking_id,
        station_id: command.station_id,
        port_id: command.port_id,
        requester_id: command.requester_id,
        start_time: command.start_time,
        end_time: command.end_time,
        requested_at: command.requested_at,
    }
}

/// Fixed station ledger holding the single pending fixture booking.
pub fn requested_ledger() -> StationLedger {
    evolve(
        StationLedger::new("st-fixed-0001"),
        &BookingEvent::BookingRequestedV1(make_booking_requested_v1_event()),
    )
}
