// Per-port copy of the station's live bookings.
//
// The conflict check reads bookings through this view, so it must always
// equal the station-scoped ledger. The store verifies that after staging
// every append and refuses to persist a divergent pair.

use crate::modules::bookings::core::booking::Booking;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MirrorDivergence {
    #[error("booking {booking_id} is missing from the port mirror")]
    Missing { booking_id: String },

    #[error("booking {booking_id} differs between ledger and port mirror")]
    Stale { booking_id: String },

    #[error("booking {booking_id} is mirrored under port {port_id} but absent from the ledger")]
    Orphan { booking_id: String, port_id: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMirror {
    ports: BTreeMap<u32, Vec<Booking>>,
}

impl PortMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings_for(&self, port_id: u32) -> &[Booking] {
        self.ports.get(&port_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inserts or replaces by booking id, keeping each port ordered by start time.
    pub fn upsert(&mut self, booking: Booking) {
        let list = self.ports.entry(booking.port_id).or_default();
        match list.iter_mut().find(|b| b.booking_id == booking.booking_id) {
            Some(existing) => *existing = booking,
            None => {
                list.push(booking);
                list.sort_by_key(|b| b.start_time);
            }
        }
    }

    pub fn remove(&mut self, port_id: u32, booking_id: &str) -> Option<Booking> {
        let list = self.ports.get_mut(&port_id)?;
        let index = list.iter().position(|b| b.booking_id == booking_id)?;
        let removed = list.remove(index);
        if list.is_empty() {
            self.ports.remove(&port_id);
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.ports.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn divergence_from(&self, ledger: &BTreeMap<String, Booking>) -> Option<MirrorDivergence> {
        for booking in ledger.values() {
            match self
                .bookings_for(booking.port_id)
                .iter()
                .find(|b| b.booking_id == booking.booking_id)
            {
                None => {
                    return Some(MirrorDivergence::Missing {
                        booking_id: booking.booking_id.clone(),
                    });
                }
                Some(mirrored) if mirrored != booking => {
                    return Some(MirrorDivergence::Stale {
                        booking_id: booking.booking_id.clone(),
                    });
                }
                Some(_) => {}
            }
        }
        for (port_id, list) in &self.ports {
            for mirrored in list {
                let in_ledger = ledger
                    .get(&mirrored.booking_id)
                    .is_some_and(|b| b.port_id == *port_id);
                if !in_ledger {
                    return Some(MirrorDivergence::Orphan {
                        booking_id: mirrored.booking_id.clone(),
                        port_id: *port_id,
                    });
                }
            }
        }
        None
    }
}
