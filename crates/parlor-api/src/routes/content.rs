//! Content-generation routes.
//!
//! All sixteen routes run the same pipeline — compose prompt, call the
//! provider, wrap in the legacy envelope — so there is one handler
//! parameterized by [`ContentKind`], and the router is built from the kind
//! table.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};

use parlor_content::ContentKind;
use parlor_core::error::DomainError;

use crate::error::ApiError;
use crate::legacy;
use crate::state::AppState;

/// Request body shared by every content-generation route.
#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    /// The theme to generate content for.
    pub theme: Option<String>,
}

/// Generic POST handler for one content kind.
#[instrument(skip(state, request), fields(kind = kind.route()))]
async fn generate_content(
    state: AppState,
    kind: ContentKind,
    request: GenerateContentRequest,
) -> Response {
    let Some(theme) = request.theme else {
        return ApiError(DomainError::Validation("theme is required".into())).into_response();
    };

    let prompt = match state.composer.compose(kind, &theme) {
        Ok(prompt) => prompt,
        Err(err) => return ApiError(err).into_response(),
    };

    info!("handling content generation");
    let outcome = state.content_provider.generate(&prompt).await;
    legacy::content_envelope(kind.response_key(), outcome)
}

/// Returns the router with one route per content kind.
pub fn router() -> Router<AppState> {
    let mut router = Router::new();
    for kind in ContentKind::ALL {
        router = router.route(
            &format!("/{}", kind.route()),
            post(
                move |State(state): State<AppState>, Json(request): Json<GenerateContentRequest>| {
                    generate_content(state, kind, request)
                },
            ),
        );
    }
    router
}
