use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::decision::DecideError;
use crate::modules::bookings::core::history_record::HistoryRecord;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::ledger::station_topology;
use crate::modules::bookings::use_cases::station_history::queries_port::HistoryQueries;
use std::sync::Arc;

pub struct StationHistoryHandler {
    queries: Arc<dyn HistoryQueries>,
    stations: Arc<dyn StationDirectory>,
}

impl StationHistoryHandler {
    pub fn new(queries: Arc<dyn HistoryQueries>, stations: Arc<dyn StationDirectory>) -> Self {
        Self { queries, stations }
    }

    pub async fn handle(
        &self,
        station_id: &str,
        actor: &Actor,
    ) -> Result<Vec<HistoryRecord>, ApplicationError> {
        let topology = station_topology(&*self.stations, station_id).await?;
        if !topology.is_managed_by(actor) {
            return Err(DecideError::Forbidden.into());
        }
        self.queries
            .list_by_station(station_id)
            .await
            .map_err(|e| ApplicationError::Collaborator(e.to_string()))
    }
}
