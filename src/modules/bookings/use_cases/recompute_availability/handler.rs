use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::availability::{AvailabilityRecord, derive_availability};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::ledger::{LedgerCommitter, station_topology};
use crate::modules::bookings::use_cases::recompute_availability::decide::decide_recompute;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub stations_swept: usize,
    pub archived: usize,
    pub failures: usize,
}

pub struct RecomputeAvailabilityHandler<TStore, TOutbox, TStations>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
    TStations: StationDirectory + 'static,
{
    committer: Arc<LedgerCommitter<TStore, TOutbox>>,
    stations: Arc<TStations>,
}

impl<TStore, TOutbox, TStations> RecomputeAvailabilityHandler<TStore, TOutbox, TStations>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
    TStations: StationDirectory + 'static,
{
    pub fn new(committer: Arc<LedgerCommitter<TStore, TOutbox>>, stations: Arc<TStations>) -> Self {
        Self {
            committer,
            stations,
        }
    }

    /// Expires elapsed bookings of one station and returns its fresh availability.
    pub async fn handle(
        &self,
        station_id: &str,
        now: i64,
    ) -> Result<AvailabilityRecord, ApplicationError> {
        self.recompute(station_id, now)
            .await
            .map(|(record, _archived)| record)
    }

    /// One pass over every station the store knows. A failing station is
    /// logged and skipped.
    pub async fn sweep(&self, now: i64) -> Result<SweepReport, ApplicationError> {
        let mut report = SweepReport::default();
        for station_id in self.committer.store().station_ids().await? {
            match self.recompute(&station_id, now).await {
                Ok((_, archived)) => {
                    report.stations_swept += 1;
                    report.archived += archived;
                }
                Err(error) => {
                    report.failures += 1;
                    warn!(station_id = %station_id, error = %error, "sweep failed for station");
                }
            }
        }
        info!(
            stations_swept = report.stations_swept,
            archived = report.archived,
            failures = report.failures,
            "availability sweep finished"
        );
        Ok(report)
    }

    async fn recompute(
        &self,
        station_id: &str,
        now: i64,
    ) -> Result<(AvailabilityRecord, usize), ApplicationError> {
        let topology = station_topology(&*self.stations, station_id).await?;
        let committed = self
            .committer
            .commit(station_id, now, |state| {
                decide_recompute(state, &topology, now)
            })
            .await?;
        let archived = committed
            .events
            .iter()
            .filter(|e| matches!(e, BookingEvent::BookingArchivedV1(_)))
            .count();
        let record = committed
            .state
            .availability
            .clone()
            .unwrap_or_else(|| derive_availability(&committed.state, &topology, now));
        Ok((record, archived))
    }
}
