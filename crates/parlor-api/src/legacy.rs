//! Legacy response envelopes preserved for wire compatibility.
//!
//! Existing callers depend on three quirks of the original service:
//!
//! 1. `/advance-game` answers 403 with one combined body for both "not the
//!    host" and "no such game".
//! 2. `/narrate-storyline` answers 404 with a bare `{"error": ...}` body.
//! 3. The content-generation routes fold provider failure text into an
//!    otherwise success-shaped 200 body instead of an error status.
//!
//! All three are design smells. They live here, behind named constructors,
//! so error handling can be corrected later without touching every caller
//! at once.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use parlor_core::error::DomainError;

use crate::error::ApiError;

/// Combined rejection body for `/advance-game`.
pub const ADVANCE_REJECTED: &str = "Unauthorized or Game not found";

/// Rejection body for `/narrate-storyline` on an unknown game.
pub const GAME_NOT_FOUND: &str = "Game not found";

/// 403 with the combined unauthorized/not-found body.
#[must_use]
pub fn advance_rejected() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": ADVANCE_REJECTED })),
    )
        .into_response()
}

/// 404 with the bare game-not-found body.
#[must_use]
pub fn game_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": GAME_NOT_FOUND })),
    )
        .into_response()
}

/// Wraps a generation outcome in the success-shaped `{<key>: <text>}` body.
///
/// Provider failures put the diagnostic text where the generated text would
/// go, still under a 200 status. Any other error keeps the normal mapping.
#[must_use]
pub fn content_envelope(key: &str, outcome: Result<String, DomainError>) -> Response {
    let text = match outcome {
        Ok(text) => text,
        Err(DomainError::Provider(diagnostic)) => diagnostic,
        Err(other) => return ApiError(other).into_response(),
    };
    Json(json!({ key: text })).into_response()
}
