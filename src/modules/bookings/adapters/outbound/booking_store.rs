use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::port_mirror::MirrorDivergence;
use crate::modules::bookings::core::state::StationLedger;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("port mirror of station {station_id} diverged: {divergence}")]
    MirrorDivergence {
        station_id: String,
        divergence: MirrorDivergence,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedLedger {
    pub state: StationLedger,
    pub version: i64,
}

/// Station-scoped booking ledger and its per-port mirror.
///
/// `append` applies the events to both copies as one unit: either both
/// reflect every event and the version advances by one, or nothing changes.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn load(&self, station_id: &str) -> Result<LoadedLedger, BookingStoreError>;

    async fn append(
        &self,
        station_id: &str,
        expected_version: i64,
        events: &[BookingEvent],
    ) -> Result<i64, BookingStoreError>;

    async fn station_ids(&self) -> Result<Vec<String>, BookingStoreError>;
}
