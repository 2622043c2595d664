use crate::modules::bookings::core::booking::{BookingStatus, TimeRangeError};
use crate::modules::bookings::core::events::BookingEvent;
use crate::modules::bookings::core::intents::BookingIntent;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("station {station_id} not found")]
    StationNotFound { station_id: String },

    #[error("port {port_id} not found")]
    PortNotFound { port_id: u32 },

    #[error("booking {booking_id} not found")]
    BookingNotFound { booking_id: String },

    #[error("invalid time range: {0}")]
    InvalidTimeRange(#[from] TimeRangeError),

    #[error("port {port_id} is already booked by {conflicting_booking_id} in that window")]
    Conflict {
        port_id: u32,
        conflicting_booking_id: String,
    },

    #[error("actor is not allowed to perform this operation")]
    Forbidden,

    #[error("booking was already decided (status {status})")]
    AlreadyDecided { status: BookingStatus },

    #[error("booking cannot be cancelled (status {status})")]
    NotCancellable { status: BookingStatus },
}

pub enum Decision {
    Accepted {
        events: Vec<BookingEvent>,
        intents: Vec<BookingIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
