// In memory implementation of the BookingStore port.
//
// Responsibilities
// - Keep one ledger document per station, ledger and port mirror side by side.
// - Enforce optimistic concurrency by checking the expected version.
// - Stage every append on a copy and swap it in only when the mirror matches.

use crate::modules::bookings::adapters::outbound::booking_store::{
    BookingStore, BookingStoreError, LoadedLedger,
};
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::evolve::evolve;
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::use_cases::list_requester_bookings::queries_port::BookingQueries;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct StoredLedger {
    state: StationLedger,
    version: i64,
}

#[derive(Default)]
pub struct InMemoryBookingStore {
    stations: RwLock<HashMap<String, StoredLedger>>,
    delay_append_ms: AtomicU64,
    is_offline: bool,
    drops_mirror_writes: bool,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Simulates a partial write: the ledger is updated but the port mirror is not.
    pub fn toggle_mirror_fault(&mut self) {
        self.drops_mirror_writes = !self.drops_mirror_writes;
    }

    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), BookingStoreError> {
        if self.is_offline {
            return Err(BookingStoreError::Backend("Booking store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn load(&self, station_id: &str) -> Result<LoadedLedger, BookingStoreError> {
        self.ensure_online()?;
        let guard = self.stations.read().await;
        Ok(match guard.get(station_id) {
            Some(stored) => LoadedLedger {
                state: stored.state.clone(),
                version: stored.version,
            },
            None => LoadedLedger {
                state: StationLedger::new(station_id),
                version: 0,
            },
        })
    }

    async fn append(
        &self,
        station_id: &str,
        expected_version: i64,
        events: &[BookingEvent],
    ) -> Result<i64, BookingStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.stations.write().await;
        let current = guard.get(station_id);
        let actual = current.map(|s| s.version).unwrap_or(0);
        if actual != expected_version {
            return Err(BookingStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }

        let mut staged = current
            .map(|s| s.state.clone())
            .unwrap_or_else(|| StationLedger::new(station_id));
        let mirror_before = staged.ports.clone();
        staged = events.iter().fold(staged, evolve);
        if self.drops_mirror_writes {
            staged.ports = mirror_before;
        }
        if let Some(divergence) = staged.ports.divergence_from(&staged.bookings) {
            return Err(BookingStoreError::MirrorDivergence {
                station_id: station_id.to_string(),
                divergence,
            });
        }

        let version = actual + 1;
        guard.insert(
            station_id.to_string(),
            StoredLedger {
                state: staged,
                version,
            },
        );
        Ok(version)
    }

    async fn station_ids(&self) -> Result<Vec<String>, BookingStoreError> {
        self.ensure_online()?;
        let mut ids: Vec<String> = self.stations.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[async_trait::async_trait]
impl BookingQueries for InMemoryBookingStore {
    async fn list_by_requester(&self, requester_id: &str) -> anyhow::Result<Vec<Booking>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Booking store offline"));
        }
        let guard = self.stations.read().await;
        let mut items: Vec<Booking> = guard
            .values()
            .flat_map(|stored| stored.state.bookings.values())
            .filter(|b| b.requester_id == requester_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(items)
    }
}
