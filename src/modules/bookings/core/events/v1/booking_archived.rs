use crate::modules::bookings::core::booking::BookingStatus;

/// Removes an elapsed booking from the live ledger. The status is the one
/// the booking held at removal time, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingArchivedV1 {
    pub booking_id: String,
    pub port_id: u32,
    pub final_status: BookingStatus,
    pub archived_at: i64,
}
