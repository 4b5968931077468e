//! Narrated storyline route.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use parlor_core::error::DomainError;
use parlor_gateway::NARRATION_FAILED;

use crate::error::ApiError;
use crate::legacy;
use crate::state::AppState;

/// Request body for POST /narrate-storyline.
#[derive(Debug, Deserialize)]
pub struct NarrateStorylineRequest {
    /// The game whose storyline to narrate.
    pub game_id: Option<String>,
    /// The act to narrate.
    pub act: Option<String>,
}

/// POST /narrate-storyline
///
/// An unknown game is a legacy 404; an unknown act within a known game is
/// not an error — the registry's sentinel text gets narrated instead.
#[instrument(skip(state, request))]
async fn narrate_storyline(
    State(state): State<AppState>,
    Json(request): Json<NarrateStorylineRequest>,
) -> Response {
    let (Some(raw_game_id), Some(act)) = (request.game_id, request.act) else {
        return ApiError(DomainError::Validation("game_id and act are required".into()))
            .into_response();
    };

    let Ok(game_id) = Uuid::parse_str(&raw_game_id) else {
        return legacy::game_not_found();
    };

    let storyline = match state.registry.resolve_storyline_for_act(game_id, &act) {
        Ok(text) => text,
        Err(DomainError::GameNotFound(_)) => return legacy::game_not_found(),
        Err(other) => return ApiError(other).into_response(),
    };

    let audio_url = match state.narration_provider.synthesize(&storyline).await {
        Ok(audio_url) => audio_url,
        Err(err) => return ApiError(err).into_response(),
    };

    // Archive successful narrations only; the failure sentinel is not a
    // recording. A write failure must not take down the narration path.
    if audio_url != NARRATION_FAILED {
        if let Err(err) = state.archive.record(&storyline, &audio_url).await {
            warn!(%game_id, %act, "act archive write failed: {err}");
        }
    }

    info!(%game_id, %act, "handled narrate_storyline");
    Json(json!({ "audio_url": audio_url })).into_response()
}

/// Returns the router for the narration route.
pub fn router() -> Router<AppState> {
    Router::new().route("/narrate-storyline", post(narrate_storyline))
}
