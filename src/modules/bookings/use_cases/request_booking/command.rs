#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBooking {
    pub booking_id: String,
    pub station_id: String,
    pub port_id: u32,
    pub requester_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub requested_at: i64,
}
