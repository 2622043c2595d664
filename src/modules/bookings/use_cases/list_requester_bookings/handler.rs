use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::list_requester_bookings::queries_port::BookingQueries;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequesterBookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub station_name: String,
}

pub struct ListRequesterBookingsHandler {
    queries: Arc<dyn BookingQueries>,
    stations: Arc<dyn StationDirectory>,
}

impl ListRequesterBookingsHandler {
    pub fn new(queries: Arc<dyn BookingQueries>, stations: Arc<dyn StationDirectory>) -> Self {
        Self { queries, stations }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
    ) -> Result<Vec<RequesterBookingView>, ApplicationError> {
        let bookings = self
            .queries
            .list_by_requester(&actor.user_id)
            .await
            .map_err(|e| ApplicationError::Collaborator(e.to_string()))?;

        let mut names: HashMap<String, String> = HashMap::new();
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            if !names.contains_key(&booking.station_id) {
                let name = self.station_name(&booking.station_id).await;
                names.insert(booking.station_id.clone(), name);
            }
            let station_name = names[&booking.station_id].clone();
            views.push(RequesterBookingView {
                booking,
                station_name,
            });
        }
        Ok(views)
    }

    async fn station_name(&self, station_id: &str) -> String {
        match self.stations.topology(station_id).await {
            Ok(Some(topology)) => topology.name,
            Ok(None) => station_id.to_string(),
            Err(error) => {
                warn!(station_id, error = %error, "station directory lookup failed");
                station_id.to_string()
            }
        }
    }
}
