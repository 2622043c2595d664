use crate::modules::bookings::core::station::StationTopology;
use async_trait::async_trait;

/// Read side of the station service: port numbering, capacity and owner.
#[async_trait]
pub trait StationDirectory: Send + Sync {
    async fn topology(&self, station_id: &str) -> anyhow::Result<Option<StationTopology>>;
}
