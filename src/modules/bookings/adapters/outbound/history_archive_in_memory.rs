use crate::modules::bookings::adapters::outbound::history_archive::HistoryArchive;
use crate::modules::bookings::core::history_record::HistoryRecord;
use crate::modules::bookings::use_cases::station_history::queries_port::HistoryQueries;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryHistoryArchive {
    records: RwLock<Vec<HistoryRecord>>,
    is_offline: bool,
}

impl InMemoryHistoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn records(&self) -> Vec<HistoryRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait::async_trait]
impl HistoryArchive for InMemoryHistoryArchive {
    /// Records are write-once; a redelivered booking id keeps the first copy.
    async fn archive(&self, record: HistoryRecord) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("History archive offline"));
        }
        let mut guard = self.records.write().await;
        if guard.iter().any(|r| r.booking_id == record.booking_id) {
            return Ok(());
        }
        guard.push(record);
        Ok(())
    }
}

#[async_trait::async_trait]
impl HistoryQueries for InMemoryHistoryArchive {
    async fn list_by_station(&self, station_id: &str) -> anyhow::Result<Vec<HistoryRecord>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("History archive offline"));
        }
        let mut items: Vec<HistoryRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.station_id == station_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(items)
    }
}
