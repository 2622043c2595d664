use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};

/// Write-once copy of a booking whose window elapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub booking_id: String,
    pub station_id: String,
    pub owner_id: String,
    pub requester_id: String,
    pub port_id: u32,
    pub start_time: i64,
    pub end_time: i64,
    pub final_status: BookingStatus,
    pub owner_message: Option<String>,
    pub archived_at: i64,
}

impl HistoryRecord {
    pub fn from_booking(booking: &Booking, owner_id: &str, archived_at: i64) -> Self {
        Self {
            booking_id: booking.booking_id.clone(),
            station_id: booking.station_id.clone(),
            owner_id: owner_id.to_string(),
            requester_id: booking.requester_id.clone(),
            port_id: booking.port_id,
            start_time: booking.start_time,
            end_time: booking.end_time,
            final_status: booking.status,
            owner_message: booking.owner_message.clone(),
            archived_at,
        }
    }
}
