// Command builders shared by decide, handler and e2e tests.
// Every builder targets the same fixed station, booking and people.

use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::modules::bookings::use_cases::decide_booking::command::{DecideBooking, Verdict};
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;
use serde::Deserialize;

pub const NOW: i64 = 1_700_000_000_000;
pub const HOUR: i64 = 3_600_000;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RequestBookingDto {
    pub booking_id: String,
    pub station_id: String,
    pub port_id: u32,
    pub requester_id: String,
    pub start_time: i64,
    pub end_time: i64,
}

pub struct RequestBookingBuilder {
    inner: RequestBooking,
}

impl Default for RequestBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RequestBookingBuilder {
    pub fn new() -> Self {
        let dto: RequestBookingDto =
            serde_json::from_str(include_str!("json/request_booking.json")).unwrap();
        Self {
            inner: RequestBooking {
                booking_id: dto.booking_id,
                station_id: dto.station_id,
                port_id: dto.port_id,
                requester_id: dto.requester_id,
                start_time: dto.start_time,
                end_time: dto.end_time,
                requested_at: NOW,
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn station_id(mut self, v: impl Into<String>) -> Self {
        self.inner.station_id = v.into();
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

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> RequestBooking {
        self.inner
    }
}

pub struct DecideBookingBuilder {
    inner: DecideBooking,
}

impl Default for DecideBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DecideBookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: DecideBooking {
                station_id: "st-fixed-0001".to_string(),
                booking_id: "bk-fixed-0001".to_string(),
                verdict: Verdict::Approve,
                actor: Actor::user("owner-fixed-0001"),
                message: None,
                decided_at: NOW,
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn station_id(mut self, v: impl Into<String>) -> Self {
        self.inner.station_id = v.into();
        self
    }

    pub fn verdict(mut self, v: Verdict) -> Self {
        self.inner.verdict = v;
        self
    }

    pub fn actor(mut self, v: Actor) -> Self {
        self.inner.actor = v;
        self
    }

    pub fn message(mut self, v: impl Into<String>) -> Self {
        self.inner.message = Some(v.into());
        self
    }

    pub fn decided_at(mut self, v: i64) -> Self {
        self.inner.decided_at = v;
        self
    }

    pub fn build(self) -> DecideBooking {
        self.inner
    }
}

pub struct CancelBookingBuilder {
    inner: CancelBooking,
}

impl Default for CancelBookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CancelBookingBuilder {
    pub fn new() -> Self {
        Self {
            inner: CancelBooking {
                station_id: "st-fixed-0001".to_string(),
                booking_id: "bk-fixed-0001".to_string(),
                actor: Actor::user("driver-fixed-0001"),
                cancelled_at: NOW,
            },
        }
    }

    pub fn booking_id(mut self, v: impl Into<String>) -> Self {
        self.inner.booking_id = v.into();
        self
    }

    pub fn actor(mut self, v: Actor) -> Self {
        self.inner.actor = v;
        self
    }

    pub fn cancelled_at(mut self, v: i64) -> Self {
        self.inner.cancelled_at = v;
        self
    }

    pub fn build(self) -> CancelBooking {
        self.inner
    }
}
