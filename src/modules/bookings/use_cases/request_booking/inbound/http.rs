use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::bookings::adapters::inbound::http_errors::unprocessable;
use crate::modules::bookings::adapters::inbound::identity::Identified;
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RequestBookingBody {
    pub port_id: u32,
    pub start_time: i64,
    pub end_time: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Identified(actor): Identified,
    body: Result<Json<RequestBookingBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return unprocessable();
    };

    let command = RequestBooking {
        booking_id: Uuid::now_v7().to_string(),
        station_id,
        port_id: body.port_id,
        requester_id: actor.user_id,
        start_time: body.start_time,
        end_time: body.end_time,
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.request_handler.handle(command).await {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(error) => error.into_response(),
    }
}
