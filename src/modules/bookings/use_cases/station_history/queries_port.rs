use crate::modules::bookings::core::history_record::HistoryRecord;
use async_trait::async_trait;

#[async_trait]
pub trait HistoryQueries: Send + Sync {
    async fn list_by_station(&self, station_id: &str) -> anyhow::Result<Vec<HistoryRecord>>;
}
