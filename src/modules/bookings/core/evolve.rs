use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::state::StationLedger;

pub fn evolve(mut state: StationLedger, event: &BookingEvent) -> StationLedger {
    match event {
        BookingEvent::BookingRequestedV1(e) => {
            let booking = Booking {
                booking_id: e.booking_id.clone(),
                station_id: e.station_id.clone(),
                port_id: e.port_id,
                requester_id: e.requester_id.clone(),
                start_time: e.start_time,
                end_time: e.end_time,
                status: BookingStatus::Pending,
                owner_message: None,
                requested_at: e.requested_at,
                approved_at: None,
                rejected_at: None,
                cancelled_at: None,
                completed_at: None,
                updated_at: e.requested_at,
            };
            state.ports.upsert(booking.clone());
            state.bookings.insert(booking.booking_id.clone(), booking);
        }
        BookingEvent::BookingApprovedV1(e) => {
            update(&mut state, &e.booking_id, |b| {
                b.status = BookingStatus::Accepted;
                b.approved_at = Some(e.approved_at);
                b.rejected_at = None;
                b.owner_message = e.owner_message.clone();
                b.updated_at = e.approved_at;
            });
        }
        BookingEvent::BookingRejectedV1(e) => {
            update(&mut state, &e.booking_id, |b| {
                b.status = BookingStatus::Rejected;
                b.rejected_at = Some(e.rejected_at);
                b.approved_at = None;
                b.owner_message = e.owner_message.clone();
                b.updated_at = e.rejected_at;
            });
        }
        BookingEvent::BookingCancelledV1(e) => {
            update(&mut state, &e.booking_id, |b| {
                b.status = BookingStatus::Cancelled;
                b.cancelled_at = Some(e.cancelled_at);
                b.updated_at = e.cancelled_at;
            });
        }
        BookingEvent::BookingArchivedV1(e) => {
            state.bookings.remove(&e.booking_id);
            state.ports.remove(e.port_id, &e.booking_id);
        }
        BookingEvent::AvailabilityRecomputedV1(e) => {
            state.availability = Some(e.record.clone());
        }
    }
    state
}

// Unknown ids leave the ledger untouched.
fn update(state: &mut StationLedger, booking_id: &str, mutate: impl FnOnce(&mut Booking)) {
    if let Some(booking) = state.bookings.get_mut(booking_id) {
        mutate(booking);
        state.ports.upsert(booking.clone());
    }
}
