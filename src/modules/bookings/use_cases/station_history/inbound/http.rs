use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::bookings::adapters::inbound::identity::Identified;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Identified(actor): Identified,
) -> Response {
    match state.station_history.handle(&station_id, &actor).await {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}
