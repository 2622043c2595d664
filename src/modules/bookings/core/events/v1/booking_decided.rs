#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingApprovedV1 {
    pub booking_id: String,
    pub decided_by: String,
    pub owner_message: Option<String>,
    pub approved_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingRejectedV1 {
    pub booking_id: String,
    pub decided_by: String,
    pub owner_message: Option<String>,
    pub rejected_at: i64,
}
