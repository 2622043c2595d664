use crate::modules::bookings::core::booking::{Booking, BookingStatus};
use crate::tests::fixtures::commands::NOW;

pub struct BookingBuilder {
    inner: Booking,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: Booking {
                booking_id: "bk-fixed-0001".to_string(),
                station_id: "st-fixed-0001".to_string(),
                port_id: 1,
                requester_id: "driver-fixed-0001".to_string(),
                start_time: NOW + 7_200_000,
                end_time: NOW + 10_800_000,
                status: BookingStatus::Pending,
                owner_message: None,
                requested_at: NOW,
                approved_at: None,
                rejected_at: None,
                cancelled_at: None,
                completed_at: None,
                updated_at: NOW,
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn port_id(mut self, v: u32) -> Self {
        self.inner.port_id = v;
        self
    }

    pub fn requester_id(mut self, v: impl Into<String>) -> Self {
        self.inner.requester_id = v.into();
        self
    }

    pub fn window(mut self, start: i64, end: i64) -> Self {
        self.inner.start_time = start;
        self.inner.end_time = end;
        self
    }

    pub fn status(mut self, v: BookingStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Booking {
        self.inner
    }
}
