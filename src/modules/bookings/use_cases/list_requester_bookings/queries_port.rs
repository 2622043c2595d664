use crate::modules::bookings::core::booking::Booking;
use async_trait::async_trait;

#[async_trait]
pub trait BookingQueries: Send + Sync {
    /// Every live booking of the requester across stations, newest window first.
    async fn list_by_requester(&self, requester_id: &str) -> anyhow::Result<Vec<Booking>>;
}
