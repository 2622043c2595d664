use crate::modules::bookings::core::history_record::HistoryRecord;
use async_trait::async_trait;

/// Append-only sink for elapsed bookings.
#[async_trait]
pub trait HistoryArchive: Send + Sync {
    async fn archive(&self, record: HistoryRecord) -> anyhow::Result<()>;
}
