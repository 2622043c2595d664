// Shared command plumbing: load the station ledger, run a pure decision,
// append under optimistic concurrency, then hand the intents to the outbox.
//
// A stale version reloads the ledger and re-runs the decision, so every
// precondition (conflicts, status, expiry) is checked again against the
// state the append will actually land on.

use crate::modules::bookings::adapters::outbound::booking_store::{
    BookingStore, BookingStoreError,
};
use crate::modules::bookings::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::decision::{DecideError, Decision};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::evolve::evolve;
use crate::modules::bookings::core::state::StationLedger;
use crate::modules::bookings::core::station::StationTopology;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct Committed {
    pub version: i64,
    pub events: Vec<BookingEvent>,
    pub state: StationLedger,
}

pub fn stream_id(station_id: &str) -> String {
    format!("Station-{station_id}")
}

pub async fn station_topology(
    stations: &(impl StationDirectory + ?Sized),
    station_id: &str,
) -> Result<StationTopology, ApplicationError> {
    stations
        .topology(station_id)
        .await
        .map_err(|e| ApplicationError::Collaborator(e.to_string()))?
        .ok_or_else(|| {
            DecideError::StationNotFound {
                station_id: station_id.to_string(),
            }
            .into()
        })
}

pub struct LedgerCommitter<TStore, TOutbox>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    max_retries: u32,
}

impl<TStore, TOutbox> LedgerCommitter<TStore, TOutbox>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        store: Arc<TStore>,
        outbox: Arc<TOutbox>,
        max_retries: u32,
    ) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
            max_retries,
        }
    }

    pub fn store(&self) -> &TStore {
        &self.store
    }

    pub async fn commit<F>(
        &self,
        station_id: &str,
        occurred_at: i64,
        mut decide: F,
    ) -> Result<Committed, ApplicationError>
    where
        F: FnMut(&StationLedger) -> Decision + Send,
    {
        let mut attempt: u32 = 0;
        loop {
            let loaded = self.store.load(station_id).await?;
            let (events, intents) = match decide(&loaded.state) {
                Decision::Accepted { events, intents } => (events, intents),
                Decision::Rejected { reason } => return Err(reason.into()),
            };

            match self
                .store
                .append(station_id, loaded.version, &events)
                .await
            {
                Ok(version) => {
                    info!(
                        station_id,
                        version,
                        events = ?events.iter().map(BookingEvent::name).collect::<Vec<_>>(),
                        "ledger committed"
                    );
                    let stream_id = stream_id(station_id);
                    if let Err(error) = dispatch_intents(
                        &*self.outbox,
                        &stream_id,
                        version,
                        &self.topic,
                        occurred_at,
                        intents,
                    )
                    .await
                    {
                        warn!(station_id, version, error = %error, "failed to enqueue intents");
                    }
                    let state = events.iter().fold(loaded.state, evolve);
                    return Ok(Committed {
                        version,
                        events,
                        state,
                    });
                }
                Err(BookingStoreError::VersionMismatch { expected, actual })
                    if attempt < self.max_retries =>
                {
                    attempt += 1;
                    debug!(station_id, expected, actual, attempt, "ledger version moved, retrying");
                }
                Err(BookingStoreError::VersionMismatch { .. }) => {
                    return Err(ApplicationError::Contention {
                        station_id: station_id.to_string(),
                        attempts: attempt + 1,
                    });
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}
