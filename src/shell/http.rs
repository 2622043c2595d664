use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::bookings::use_cases::cancel_booking::inbound::http as cancel_http;
use crate::modules::bookings::use_cases::decide_booking::inbound::http as decide_http;
use crate::modules::bookings::use_cases::list_pending_requests::inbound::http as pending_http;
use crate::modules::bookings::use_cases::list_requester_bookings::inbound::http as mine_http;
use crate::modules::bookings::use_cases::recompute_availability::inbound::http as availability_http;
use crate::modules::bookings::use_cases::request_booking::inbound::http as request_http;
use crate::modules::bookings::use_cases::station_history::inbound::http as history_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/stations/{station_id}/bookings", post(request_http::handle))
        .route(
            "/stations/{station_id}/bookings/pending",
            get(pending_http::handle),
        )
        .route(
            "/stations/{station_id}/bookings/{booking_id}/decision",
            post(decide_http::handle),
        )
        .route(
            "/stations/{station_id}/bookings/{booking_id}/cancel",
            post(cancel_http::handle),
        )
        .route(
            "/stations/{station_id}/availability",
            get(availability_http::handle),
        )
        .route("/stations/{station_id}/history", get(history_http::handle))
        .route("/bookings/mine", get(mine_http::handle))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, traced.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}
