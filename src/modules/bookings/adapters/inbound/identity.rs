// Caller identity as forwarded by the authentication layer.

use crate::modules::bookings::core::actor::{Actor, Role};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// `None` when the user id header is absent or blank. Any role other than
/// `admin` is a plain user.
pub fn actor_from_headers(headers: &HeaderMap) -> Option<Actor> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())?;
    let role = match headers.get(USER_ROLE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(role) if role.eq_ignore_ascii_case("admin") => Role::Admin,
        _ => Role::User,
    };
    Some(Actor {
        user_id: user_id.to_string(),
        role,
    })
}

pub struct Identified(pub Actor);

impl<S> FromRequestParts<S> for Identified
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_from_headers(&parts.headers).map(Identified).ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthenticated" })),
            )
                .into_response()
        })
    }
}
