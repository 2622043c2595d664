use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::bookings::adapters::inbound::identity::Identified;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Identified(actor): Identified) -> Response {
    match state.requester_bookings.handle(&actor).await {
        Ok(views) => Json(views).into_response(),
        Err(error) => error.into_response(),
    }
}
