use crate::modules::bookings::core::availability::AvailabilityRecord;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityRecomputedV1 {
    pub record: AvailabilityRecord,
}
