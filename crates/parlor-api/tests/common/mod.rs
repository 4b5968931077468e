//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use parlor_api::routes;
use parlor_api::state::AppState;
use parlor_content::{PromptComposer, TemplateStore};
use parlor_core::token::TokenSigner;
use parlor_gateway::{ContentProvider, NarrationProvider};
use parlor_session::GameRegistry;
use parlor_test_support::{CannedContentProvider, CannedNarrationProvider, InMemoryActArchive};

/// Signing secret shared by every test app.
pub const TEST_SECRET: &str = "test-secret";

/// Text every canned generation answers with.
pub const CANNED_TEXT: &str = "generated text";

/// Audio reference every canned synthesis answers with.
pub const CANNED_AUDIO: &str = "https://audio.example/clip.mp3";

/// Template body written for the file-backed theme-selection kind.
pub const THEME_SELECTION_TEMPLATE: &str =
    "Propose murder mystery party concepts based on the theme '{{theme}}'.";

/// A fully wired test application with handles to its mocks.
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub content: Arc<CannedContentProvider>,
    pub narration: Arc<CannedNarrationProvider>,
    pub archive: Arc<InMemoryActArchive>,
}

/// Build the full app router with canned providers and an in-memory archive.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app() -> TestApp {
    let content = Arc::new(CannedContentProvider::new(CANNED_TEXT));
    let narration = Arc::new(CannedNarrationProvider::new(CANNED_AUDIO));
    let archive = Arc::new(InMemoryActArchive::new());
    let state = app_state(
        Arc::clone(&content) as Arc<dyn ContentProvider>,
        Arc::clone(&narration) as Arc<dyn NarrationProvider>,
        Arc::clone(&archive),
    );

    TestApp {
        app: build_router(state.clone()),
        state,
        content,
        narration,
        archive,
    }
}

/// Build the app router with caller-supplied providers, for failure-path
/// tests.
pub fn build_test_app_with(
    content: Arc<dyn ContentProvider>,
    narration: Arc<dyn NarrationProvider>,
) -> (Router, AppState, Arc<InMemoryActArchive>) {
    let archive = Arc::new(InMemoryActArchive::new());
    let state = app_state(content, narration, Arc::clone(&archive));
    (build_router(state.clone()), state, archive)
}

fn app_state(
    content: Arc<dyn ContentProvider>,
    narration: Arc<dyn NarrationProvider>,
    archive: Arc<InMemoryActArchive>,
) -> AppState {
    let prompt_dir =
        std::env::temp_dir().join(format!("parlor-api-tests-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&prompt_dir).unwrap();
    std::fs::write(
        prompt_dir.join("theme_selection.prompt"),
        THEME_SELECTION_TEMPLATE,
    )
    .unwrap();

    AppState::new(
        Arc::new(GameRegistry::new()),
        Arc::new(PromptComposer::new(TemplateStore::new(prompt_dir))),
        content,
        narration,
        archive,
        TokenSigner::new(TEST_SECRET),
    )
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1",
            routes::game::router()
                .merge(routes::narration::router())
                .merge(routes::content::router()),
        )
        .with_state(state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_json_with_bearer_opt(app, uri, body, None).await
}

/// Send a POST request with a JSON body and a bearer credential.
pub async fn post_json_with_bearer(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    token: &str,
) -> (StatusCode, serde_json::Value) {
    post_json_with_bearer_opt(app, uri, body, Some(token)).await
}

async fn post_json_with_bearer_opt(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
