//! Shared application state.

use std::sync::Arc;

use parlor_archive::ActArchive;
use parlor_content::PromptComposer;
use parlor_core::token::TokenSigner;
use parlor_gateway::{ContentProvider, NarrationProvider};
use parlor_session::GameRegistry;

/// Application state shared across all request handlers.
///
/// The registry is owned here and injected into handlers; there is no
/// ambient global game table.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory game registry.
    pub registry: Arc<GameRegistry>,
    /// Builds provider instructions from (content kind, theme) pairs.
    pub composer: Arc<PromptComposer>,
    /// Gateway to the text-generation provider.
    pub content_provider: Arc<dyn ContentProvider>,
    /// Gateway to the speech-synthesis provider.
    pub narration_provider: Arc<dyn NarrationProvider>,
    /// Durable archive of narrated acts.
    pub archive: Arc<dyn ActArchive>,
    /// Issues and verifies host credentials.
    pub signer: TokenSigner,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        registry: Arc<GameRegistry>,
        composer: Arc<PromptComposer>,
        content_provider: Arc<dyn ContentProvider>,
        narration_provider: Arc<dyn NarrationProvider>,
        archive: Arc<dyn ActArchive>,
        signer: TokenSigner,
    ) -> Self {
        Self {
            registry,
            composer,
            content_provider,
            narration_provider,
            archive,
            signer,
        }
    }
}
