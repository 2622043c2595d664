use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::bookings::adapters::inbound::http_errors::unprocessable;
use crate::modules::bookings::adapters::inbound::identity::Identified;
use crate::modules::bookings::use_cases::decide_booking::command::{DecideBooking, Verdict};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DecideBookingBody {
    pub decision: Verdict,
    pub message: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path((station_id, booking_id)): Path<(String, String)>,
    Identified(actor): Identified,
    body: Result<Json<DecideBookingBody>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return unprocessable();
    };

    let command = DecideBooking {
        station_id,
        booking_id,
        verdict: body.decision,
        actor,
        message: body.message,
        decided_at: Utc::now().timestamp_millis(),
    };

    match state.decide_handler.handle(command).await {
        Ok(booking) => Json(booking).into_response(),
        Err(error) => error.into_response(),
    }
}
