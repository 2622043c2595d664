pub mod v1 {
    pub mod availability_recomputed;
    pub mod booking_archived;
    pub mod booking_cancelled;
    pub mod booking_decided;
    pub mod booking_requested;
}

use v1::availability_recomputed::AvailabilityRecomputedV1;
use v1::booking_archived::BookingArchivedV1;
use v1::booking_cancelled::BookingCancelledV1;
use v1::booking_decided::{BookingApprovedV1, BookingRejectedV1};
use v1::booking_requested::BookingRequestedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum BookingEvent {
    BookingRequestedV1(BookingRequestedV1),
    BookingApprovedV1(BookingApprovedV1),
    BookingRejectedV1(BookingRejectedV1),
    BookingCancelledV1(BookingCancelledV1),
    BookingArchivedV1(BookingArchivedV1),
    AvailabilityRecomputedV1(AvailabilityRecomputedV1),
}

impl BookingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            BookingEvent::BookingRequestedV1(_) => "BookingRequested",
            BookingEvent::BookingApprovedV1(_) => "BookingApproved",
            BookingEvent::BookingRejectedV1(_) => "BookingRejected",
            BookingEvent::BookingCancelledV1(_) => "BookingCancelled",
            BookingEvent::BookingArchivedV1(_) => "BookingArchived",
            BookingEvent::AvailabilityRecomputedV1(_) => "AvailabilityRecomputed",
        }
    }

    pub fn booking_id(&self) -> Option<&str> {
        match self {
            BookingEvent::BookingRequestedV1(e) => Some(&e.booking_id),
            BookingEvent::BookingApprovedV1(e) => Some(&e.booking_id),
            BookingEvent::BookingRejectedV1(e) => Some(&e.booking_id),
            BookingEvent::BookingCancelledV1(e) => Some(&e.booking_id),
            BookingEvent::BookingArchivedV1(e) => Some(&e.booking_id),
            BookingEvent::AvailabilityRecomputedV1(_) => None,
        }
    }
}
