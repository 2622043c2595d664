use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::bookings::adapters::inbound::identity::Identified;
use crate::modules::bookings::use_cases::cancel_booking::command::CancelBooking;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((station_id, booking_id)): Path<(String, String)>,
    Identified(actor): Identified,
) -> Response {
    let command = CancelBooking {
        station_id,
        booking_id,
        actor,
        cancelled_at: Utc::now().timestamp_millis(),
    };

    match state.cancel_handler.handle(command).await {
        Ok(booking) => Json(booking).into_response(),
        Err(error) => error.into_response(),
    }
}
