//! Gateway to the speech-synthesis provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use parlor_core::error::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sentinel returned in place of an audio reference when synthesis fails.
///
/// Compatibility quirk: the provider saying no and the provider being
/// unreachable both collapse to this one string. Callers cannot tell them
/// apart; the documented behavior is kept as-is.
pub const NARRATION_FAILED: &str = "Error generating narration";

/// Sends narration text to the speech provider.
#[async_trait]
pub trait NarrationProvider: Send + Sync {
    /// Synthesizes `text` and returns a playable-audio reference.
    async fn synthesize(&self, text: &str) -> Result<String, DomainError>;
}

/// Configuration for the ElevenLabs-backed provider.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    /// API key presented as a bearer credential.
    pub api_key: String,
    /// Voice selector.
    pub voice: String,
    /// API base URL, overridable for tests.
    pub base_url: String,
}

impl ElevenLabsConfig {
    /// Creates a config with the default base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice: voice.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `NarrationProvider` backed by the ElevenLabs synthesis API.
#[derive(Debug, Clone)]
pub struct ElevenLabsProvider {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsProvider {
    /// Creates a provider with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the HTTP client cannot be
    /// built.
    pub fn new(config: ElevenLabsConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Infrastructure(format!("http client: {e}")))?;
        Ok(Self { config, client })
    }
}

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    voice: &'a str,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioUrl")]
    audio_url: Option<String>,
}

#[async_trait]
impl NarrationProvider for ElevenLabsProvider {
    #[instrument(skip(self, text), fields(voice = %self.config.voice))]
    async fn synthesize(&self, text: &str) -> Result<String, DomainError> {
        let url = format!("{}/synthesize", self.config.base_url);
        let request = SynthesizeRequest {
            text,
            voice: &self.config.voice,
        };
        debug!("sending synthesis request");

        let response = match self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("synthesis request failed: {e}");
                return Ok(NARRATION_FAILED.to_string());
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "synthesis provider returned error");
            return Ok(NARRATION_FAILED.to_string());
        }

        match response.json::<SynthesizeResponse>().await {
            Ok(SynthesizeResponse {
                audio_url: Some(audio_url),
            }) => {
                debug!("synthesis successful");
                Ok(audio_url)
            }
            Ok(SynthesizeResponse { audio_url: None }) => {
                warn!("synthesis response carried no audioUrl");
                Ok(NARRATION_FAILED.to_string())
            }
            Err(e) => {
                warn!("malformed synthesis response: {e}");
                Ok(NARRATION_FAILED.to_string())
            }
        }
    }
}
