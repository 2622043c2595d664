use crate::modules::bookings::core::availability::AvailabilityRecord;
use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use crate::modules::bookings::core::port_mirror::PortMirror;
use std::collections::BTreeMap;

/// Live bookings of one station, held twice: keyed by booking id and
/// grouped per port. Both copies only change through `evolve`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationLedger {
    pub station_id: String,
    pub bookings: BTreeMap<String, Booking>,
    pub ports: PortMirror,
    pub availability: Option<AvailabilityRecord>,
}

impl StationLedger {
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            ..Self::default()
        }
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    pub fn with_status(&self, status: BookingStatus) -> impl Iterator<Item = &Booking> {
        self.bookings.values().filter(move |b| b.status == status)
    }
}
