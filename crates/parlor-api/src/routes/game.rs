//! Game lifecycle routes: creation and host-only advancement.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use parlor_core::error::DomainError;

use crate::error::ApiError;
use crate::legacy;
use crate::state::AppState;

/// Request body for POST /create-game.
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// Identity of the host creating the game.
    pub host_email: Option<String>,
}

/// Response body for POST /create-game.
#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    /// Identifier of the new game.
    pub game_id: Uuid,
    /// Bearer credential bound to the host identity.
    pub token: String,
}

/// Request body for POST /advance-game.
#[derive(Debug, Deserialize)]
pub struct AdvanceGameRequest {
    /// The game to advance.
    pub game_id: Option<String>,
}

/// POST /create-game
#[instrument(skip(state, request))]
async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let host_email = request
        .host_email
        .filter(|h| !h.is_empty())
        .ok_or_else(|| DomainError::Validation("host_email is required".into()))?;

    let game_id = state.registry.create_game(host_email.as_str())?;
    let token = state.signer.issue(&host_email);

    info!(%game_id, "handled create_game");
    Ok(Json(CreateGameResponse { game_id, token }))
}

/// POST /advance-game
///
/// Host-scoped: the caller identity comes from the bearer credential, never
/// from the body. Every rejection — missing or invalid credential, unknown
/// game, non-host caller — answers with the one combined legacy 403 body,
/// so a prober cannot tell "wrong host" from "no such game".
#[instrument(skip(state, headers, request))]
async fn advance_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AdvanceGameRequest>,
) -> Response {
    let Some(raw_game_id) = request.game_id else {
        return ApiError(DomainError::Validation("game_id is required".into())).into_response();
    };

    let Some(caller) = bearer_identity(&state, &headers) else {
        return legacy::advance_rejected();
    };

    let Ok(game_id) = Uuid::parse_str(&raw_game_id) else {
        return legacy::advance_rejected();
    };

    match state.registry.advance_round(game_id, &caller) {
        Ok(round) => {
            info!(%game_id, round, "handled advance_game");
            Json(json!({ "status": "game advanced to round", "round": round })).into_response()
        }
        Err(DomainError::GameNotFound(_) | DomainError::Unauthorized(_)) => {
            legacy::advance_rejected()
        }
        Err(other) => ApiError(other).into_response(),
    }
}

/// Extracts and verifies the bearer credential, returning the identity it
/// asserts.
fn bearer_identity(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    state.signer.verify(token).ok()
}

/// Returns the router for game lifecycle routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-game", post(create_game))
        .route("/advance-game", post(advance_game))
}
