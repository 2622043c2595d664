use crate::modules::bookings::adapters::inbound::http_errors::classify;
use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::availability::AvailabilityRecord;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use async_graphql::{Context, ErrorExtensions, SimpleObject};

#[derive(SimpleObject, Clone)]
pub struct GqlBooking {
    pub booking_id: String,
    pub station_id: String,
    pub port_id: u32,
    pub requester_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub status: String,
    pub owner_message: Option<String>,
    pub requested_at: i64,
    pub approved_at: Option<i64>,
    pub rejected_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub updated_at: i64,
}

impl From<Booking> for GqlBooking {
    fn from(b: Booking) -> Self {
        Self {
            booking_id: b.booking_id,
            station_id: b.station_id,
            port_id: b.port_id,
            requester_id: b.requester_id,
            start_time: b.start_time,
            end_time: b.end_time,
            status: b.status.as_str().to_string(),
            owner_message: b.owner_message,
            requested_at: b.requested_at,
            approved_at: b.approved_at,
            rejected_at: b.rejected_at,
            cancelled_at: b.cancelled_at,
            completed_at: b.completed_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAvailability {
    pub station_id: String,
    pub is_available: bool,
    pub occupied_ports: Vec<u32>,
    pub current_available: u32,
    pub current_occupied: u32,
    pub total_ports: u32,
    pub last_updated: i64,
}

impl From<AvailabilityRecord> for GqlAvailability {
    fn from(r: AvailabilityRecord) -> Self {
        Self {
            station_id: r.station_id,
            is_available: r.is_available,
            occupied_ports: r.occupied_ports.into_iter().collect(),
            current_available: r.current_available,
            current_occupied: r.current_occupied,
            total_ports: r.total_ports,
            last_updated: r.last_updated,
        }
    }
}

/// Carries the same code as the HTTP body in the `code` extension.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let (_, code) = classify(&error);
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}

pub fn gql_actor(context: &Context<'_>) -> async_graphql::Result<Actor> {
    context.data_opt::<Actor>().cloned().ok_or_else(|| {
        async_graphql::Error::new("missing caller identity")
            .extend_with(|_, e| e.set("code", "unauthenticated"))
    })
}
