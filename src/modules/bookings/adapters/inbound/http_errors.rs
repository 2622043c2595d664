use crate::modules::bookings::core::decision::DecideError;
use crate::modules::bookings::use_cases::errors::ApplicationError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Status and stable error code shared by the HTTP and GraphQL surfaces.
pub fn classify(error: &ApplicationError) -> (StatusCode, &'static str) {
    match error {
        ApplicationError::Domain(reason) => match reason {
            DecideError::StationNotFound { .. }
            | DecideError::PortNotFound { .. }
            | DecideError::BookingNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            DecideError::InvalidTimeRange(_) => (StatusCode::BAD_REQUEST, "invalid_time_range"),
            DecideError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            DecideError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
            DecideError::AlreadyDecided { .. } => (StatusCode::CONFLICT, "already_decided"),
            DecideError::NotCancellable { .. } => (StatusCode::CONFLICT, "invalid_state"),
        },
        ApplicationError::Contention { .. } => (StatusCode::SERVICE_UNAVAILABLE, "contention"),
        ApplicationError::Collaborator(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        ApplicationError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, code) = classify(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
            return (status, Json(json!({ "error": code }))).into_response();
        }
        (
            status,
            Json(json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}

pub fn unprocessable() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "invalid_body" })),
    )
        .into_response()
}
