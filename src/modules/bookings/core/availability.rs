// Availability record: derived occupancy summary of one station.
//
// Never edited by hand. Every command that changes the booking set appends a
// freshly derived record in the same commit, and the expiry sweep re-derives
// it after archiving elapsed bookings.

use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::events::v1::availability_recomputed::AvailabilityRecomputedV1;
use crate::modules::bookings::core::evolve::evolve;
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::core::station::StationTopology;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub station_id: String,
    pub occupied_ports: BTreeSet<u32>,
    pub is_available: bool,
    pub current_occupied: u32,
    pub current_available: u32,
    pub total_ports: u32,
    pub last_updated: i64,
}

/// Ports holding an accepted booking whose window contains `now`.
pub fn derive_availability(
    state: &StationLedger,
    topology: &StationTopology,
    now: i64,
) -> AvailabilityRecord {
    let occupied_ports: BTreeSet<u32> = state
        .bookings
        .values()
        .filter(|b| b.occupies_port_at(now) && topology.has_port(b.port_id))
        .map(|b| b.port_id)
        .collect();
    let current_occupied = (occupied_ports.len() as u32).min(topology.total_ports);
    AvailabilityRecord {
        station_id: topology.station_id.clone(),
        occupied_ports,
        is_available: current_occupied < topology.total_ports,
        current_occupied,
        current_available: topology.total_ports - current_occupied,
        total_ports: topology.total_ports,
        last_updated: now,
    }
}

/// Appends the availability record as it stands after `events` are applied.
pub fn with_recomputed_availability(
    state: &StationLedger,
    topology: &StationTopology,
    mut events: Vec<BookingEvent>,
    now: i64,
) -> Vec<BookingEvent> {
    let next = events.iter().fold(state.clone(), evolve);
    let record = derive_availability(&next, topology, now);
    events.push(BookingEvent::AvailabilityRecomputedV1(
        AvailabilityRecomputedV1 { record },
    ));
    events
}
