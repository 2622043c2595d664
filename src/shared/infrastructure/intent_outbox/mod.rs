use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutboxKey {
    pub stream_id: String,
    pub stream_version: i64,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    pub sequence: u32,
    pub occurred_at: i64,
    pub payload: Json,
    pub attempts: u32,
    pub last_error: Option<String>,
}

impl OutboxRow {
    pub fn key(&self) -> OutboxKey {
        OutboxKey {
            stream_id: self.stream_id.clone(),
            stream_version: self.stream_version,
            sequence: self.sequence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    Retrying { attempts: u32 },
    DeadLettered { attempts: u32 },
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row for stream {stream_id} v{stream_version} #{sequence}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
        sequence: u32,
    },

    #[error("no pending outbox row for stream {stream_id} v{stream_version} #{sequence}")]
    UnknownRow {
        stream_id: String,
        stream_version: i64,
        sequence: u32,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;

    /// Oldest pending rows first.
    async fn pending(&self, limit: usize) -> Result<Vec<OutboxRow>, OutboxError>;

    async fn mark_delivered(&self, key: &OutboxKey) -> Result<(), OutboxError>;

    async fn mark_failed(
        &self,
        key: &OutboxKey,
        error: &str,
        max_attempts: u32,
    ) -> Result<FailureOutcome, OutboxError>;
}

pub mod in_memory;
