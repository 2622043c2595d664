use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::shell::state::AppState;

/// Reading availability expires elapsed bookings first.
pub async fn handle(State(state): State<AppState>, Path(station_id): Path<String>) -> Response {
    let now = Utc::now().timestamp_millis();
    match state.availability_handler.handle(&station_id, now).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => error.into_response(),
    }
}
