//! Mock provider gateways for tests.

use async_trait::async_trait;
use parlor_core::error::DomainError;
use parlor_gateway::{ContentProvider, NARRATION_FAILED, NarrationProvider};
use std::sync::Mutex;

/// A content provider that returns a fixed text and records every prompt it
/// was asked to generate from.
#[derive(Debug)]
pub struct CannedContentProvider {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl CannedContentProvider {
    /// Creates a provider that always answers with `response`.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all prompts received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentProvider for CannedContentProvider {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// A content provider that always fails with the configured diagnostic.
#[derive(Debug)]
pub struct FailingContentProvider(pub &'static str);

#[async_trait]
impl ContentProvider for FailingContentProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::Provider(self.0.to_string()))
    }
}

/// A narration provider that returns a fixed audio reference and records the
/// text it was asked to speak.
#[derive(Debug)]
pub struct CannedNarrationProvider {
    audio_url: String,
    spoken: Mutex<Vec<String>>,
}

impl CannedNarrationProvider {
    /// Creates a provider that always answers with `audio_url`.
    #[must_use]
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            spoken: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all narration texts received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrationProvider for CannedNarrationProvider {
    async fn synthesize(&self, text: &str) -> Result<String, DomainError> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(self.audio_url.clone())
    }
}

/// A narration provider that behaves like an unreachable speech service:
/// every call yields the fixed failure sentinel.
#[derive(Debug)]
pub struct UnavailableNarrationProvider;

#[async_trait]
impl NarrationProvider for UnavailableNarrationProvider {
    async fn synthesize(&self, _text: &str) -> Result<String, DomainError> {
        Ok(NARRATION_FAILED.to_string())
    }
}
