//! Parlor API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use parlor_api::routes;
use parlor_api::state::AppState;
use parlor_archive::PgActArchive;
use parlor_content::{PromptComposer, TemplateStore};
use parlor_core::token::TokenSigner;
use parlor_gateway::{ElevenLabsConfig, ElevenLabsProvider, OpenAiConfig, OpenAiProvider};
use parlor_session::GameRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Parlor API server");

    // Read configuration from environment.
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL environment variable must be set")?;
    let token_secret = std::env::var("TOKEN_SECRET")
        .map_err(|_| "TOKEN_SECRET environment variable must be set")?;
    let openai_api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| "OPENAI_API_KEY environment variable must be set")?;
    let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY")
        .map_err(|_| "ELEVENLABS_API_KEY environment variable must be set")?;
    let voice = std::env::var("ELEVENLABS_VOICE_ID").unwrap_or_else(|_| "narrator".to_string());
    let prompt_dir = std::env::var("PROMPT_DIR").unwrap_or_else(|_| "prompts".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;

    let mut openai_config = OpenAiConfig::new(openai_api_key);
    if let Ok(model) = std::env::var("OPENAI_MODEL") {
        openai_config = openai_config.with_model(model);
    }

    // Create database connection pool and run migrations.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    // Build application state.
    let app_state = AppState::new(
        Arc::new(GameRegistry::new()),
        Arc::new(PromptComposer::new(TemplateStore::new(prompt_dir))),
        Arc::new(OpenAiProvider::new(openai_config)?),
        Arc::new(ElevenLabsProvider::new(ElevenLabsConfig::new(
            elevenlabs_api_key,
            voice,
        ))?),
        Arc::new(PgActArchive::new(pool)),
        TokenSigner::new(token_secret),
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1",
            routes::game::router()
                .merge(routes::narration::router())
                .merge(routes::content::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
