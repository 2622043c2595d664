use crate::shared::infrastructure::intent_outbox::{
    DomainOutbox, FailureOutcome, OutboxError, OutboxKey, OutboxRow,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    delivered: AtomicUsize,
    pub dead_letters: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<OutboxKey>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delivered rows are dropped; only their number is kept.
    pub fn delivered_count(&self) -> usize {
        self.delivered.load(Ordering::Relaxed)
    }

    fn ensure_online(&self) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        Ok(())
    }
}

fn unknown_row(key: &OutboxKey) -> OutboxError {
    OutboxError::UnknownRow {
        stream_id: key.stream_id.clone(),
        stream_version: key.stream_version,
        sequence: key.sequence,
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        self.ensure_online()?;
        {
            let mut s = self.seen.lock().await;
            if !s.insert(row.key()) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                    sequence: row.sequence,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }

    async fn pending(&self, limit: usize) -> Result<Vec<OutboxRow>, OutboxError> {
        self.ensure_online()?;
        Ok(self.rows.lock().await.iter().take(limit).cloned().collect())
    }

    async fn mark_delivered(&self, key: &OutboxKey) -> Result<(), OutboxError> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        let index = rows
            .iter()
            .position(|r| &r.key() == key)
            .ok_or_else(|| unknown_row(key))?;
        rows.remove(index);
        self.delivered.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn mark_failed(
        &self,
        key: &OutboxKey,
        error: &str,
        max_attempts: u32,
    ) -> Result<FailureOutcome, OutboxError> {
        self.ensure_online()?;
        let mut rows = self.rows.lock().await;
        let index = rows
            .iter()
            .position(|r| &r.key() == key)
            .ok_or_else(|| unknown_row(key))?;
        let row = &mut rows[index];
        row.attempts += 1;
        row.last_error = Some(error.to_string());
        let attempts = row.attempts;
        if attempts >= max_attempts {
            let row = rows.remove(index);
            self.dead_letters.lock().await.push(row);
            return Ok(FailureOutcome::DeadLettered { attempts });
        }
        Ok(FailureOutcome::Retrying { attempts })
    }
}
