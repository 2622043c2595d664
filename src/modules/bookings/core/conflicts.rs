use crate::modules::bookings::core::booking::{Booking, TimeRange};

/// First booking on the port that still reserves an interval overlapping `window`.
pub fn find_conflict<'a>(port_bookings: &'a [Booking], window: &TimeRange) -> Option<&'a Booking> {
    port_bookings
        .iter()
        .find(|b| b.status.holds_port() && b.window().overlaps(window))
}
