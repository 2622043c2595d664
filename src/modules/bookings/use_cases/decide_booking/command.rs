use crate::modules::bookings::core::actor::Actor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approve,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecideBooking {
    pub station_id: String,
    pub booking_id: String,
    pub verdict: Verdict,
    pub actor: Actor,
    pub message: Option<String>,
    pub decided_at: i64,
}
