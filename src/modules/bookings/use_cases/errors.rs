use crate::modules::bookings::adapters::outbound::booking_store::BookingStoreError;
use crate::modules::bookings::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] BookingStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("station {station_id} stayed contended after {attempts} attempts")]
    Contention { station_id: String, attempts: u32 },

    #[error("collaborator unavailable: {0}")]
    Collaborator(String),
}
