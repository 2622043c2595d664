use crate::modules::bookings::core::actor::Actor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelBooking {
    pub station_id: String,
    pub booking_id: String,
    pub actor: Actor,
    pub cancelled_at: i64,
}
