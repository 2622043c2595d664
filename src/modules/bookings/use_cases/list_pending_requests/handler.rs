use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::adapters::outbound::users::UserDirectory;
use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use crate::modules::bookings::core::decision::DecideError;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::ledger::station_topology;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRequestView {
    #[serde(flatten)]
    pub booking: Booking,
    pub requester_name: String,
}

pub struct ListPendingRequestsHandler {
    store: Arc<dyn BookingStore>,
    stations: Arc<dyn StationDirectory>,
    users: Arc<dyn UserDirectory>,
}

impl ListPendingRequestsHandler {
    pub fn new(
        store: Arc<dyn BookingStore>,
        stations: Arc<dyn StationDirectory>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            store,
            stations,
            users,
        }
    }

    /// Pending bookings of the station, earliest window first.
    pub async fn handle(
        &self,
        station_id: &str,
        actor: &Actor,
    ) -> Result<Vec<PendingRequestView>, ApplicationError> {
        let topology = station_topology(&*self.stations, station_id).await?;
        if !topology.is_managed_by(actor) {
            return Err(DecideError::Forbidden.into());
        }

        let loaded = self.store.load(station_id).await?;
        let mut pending: Vec<Booking> = loaded
            .state
            .with_status(BookingStatus::Pending)
            .cloned()
            .collect();
        pending.sort_by_key(|b| b.start_time);

        let mut views = Vec::with_capacity(pending.len());
        for booking in pending {
            let requester_name = self.requester_name(&booking.requester_id).await;
            views.push(PendingRequestView {
                booking,
                requester_name,
            });
        }
        Ok(views)
    }

    async fn requester_name(&self, requester_id: &str) -> String {
        match self.users.display_name(requester_id).await {
            Ok(Some(name)) => name,
            Ok(None) => requester_id.to_string(),
            Err(error) => {
                warn!(requester_id, error = %error, "user directory lookup failed");
                requester_id.to_string()
            }
        }
    }
}
