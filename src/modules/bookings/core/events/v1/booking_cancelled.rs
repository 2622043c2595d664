#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingCancelledV1 {
    pub booking_id: String,
    pub cancelled_by: String,
    pub cancelled_at: i64,
}
