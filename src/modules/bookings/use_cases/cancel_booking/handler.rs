use crate::modules::bookings::adapters::outbound::booking_store::BookingStore;
use crate::modules::bookings::adapters::outbound::stations::StationDirectory;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::decision::DecideError;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::modules::bookings::use_cases::cancel_booking::decide::decide_cancel;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use crate::modules::bookings::use_cases::ledger::{LedgerCommitter, station_topology};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct CancelBookingHandler<TStore, TOutbox, TStations>
where
    TStore: BookingStore + 'static,
    TOutbox: DomainOutbox + 'static,
    TStations: StationDirectory + 'static,
{
    committer: Arc<LedgerCommitter<TStore, TOutbox>>,
    stations: Arc<TStations>,
}

impl<TStore, TOutbox, TStations> CancelBookingHandler<TStore, TOutbox, TStations>
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

    pub async fn handle(&self, command: CancelBooking) -> Result<Booking, ApplicationError> {
        let topology = station_topology(&*self.stations, &command.station_id).await?;
        let committed = self
            .committer
            .commit(&command.station_id, command.cancelled_at, |state| {
                decide_cancel(state, &topology, &command)
            })
            .await?;
        committed
            .state
            .booking(&command.booking_id)
            .cloned()
            .ok_or_else(|| {
                DecideError::BookingNotFound {
                    booking_id: command.booking_id.clone(),
                }
                .into()
            })
    }
}
