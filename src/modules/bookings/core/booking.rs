use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    /// Only set by an external charging-session process, never by the ledger.
    Active,
    /// Only set by an external charging-session process, never by the ledger.
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Pending and accepted bookings reserve their port interval.
    pub fn holds_port(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Accepted)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeRangeError {
    #[error("end time must be after start time")]
    EndNotAfterStart,

    #[error("booking window must lie in the future")]
    InPast,
}

/// Closed-open interval `[start, end)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Result<Self, TimeRangeError> {
        if end <= start {
            return Err(TimeRangeError::EndNotAfterStart);
        }
        Ok(Self { start, end })
    }

    /// Both endpoints must be strictly after `now`.
    pub fn future_from(start: i64, end: i64, now: i64) -> Result<Self, TimeRangeError> {
        let range = Self::new(start, end)?;
        if range.start <= now || range.end <= now {
            return Err(TimeRangeError::InPast);
        }
        Ok(range)
    }

    /// Covers a start inside `other`, an end inside `other`, and full
    /// containment of `other`. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, instant: i64) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn has_elapsed(&self, now: i64) -> bool {
        self.end <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub station_id: String,
    pub port_id: u32,
    pub requester_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub status: BookingStatus,
    pub owner_message: Option<String>,
    pub requested_at: i64,
    pub approved_at: Option<i64>,
    pub rejected_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub updated_at: i64,
}

impl Booking {
    pub fn window(&self) -> TimeRange {
        TimeRange {
            start: self.start_time,
            end: self.end_time,
        }
    }

    pub fn occupies_port_at(&self, now: i64) -> bool {
        self.status == BookingStatus::Accepted && self.window().contains(now)
    }
}
