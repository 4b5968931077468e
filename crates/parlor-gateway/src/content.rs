//! Gateway to the text-generation provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use parlor_core::error::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Output bound carried over from the original deployment.
const MAX_TOKENS: u32 = 150;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a composed prompt to the generation provider.
///
/// Any provider-side failure surfaces as `DomainError::Provider` carrying
/// the provider's diagnostic message as opaque text.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generates text for `prompt`, suspending until the provider responds
    /// or the request times out.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

/// Configuration for the OpenAI-backed provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key presented as a bearer credential.
    pub api_key: String,
    /// Model/engine selector.
    pub model: String,
    /// API base URL, overridable for self-hosted gateways.
    pub base_url: String,
}

impl OpenAiConfig {
    /// Creates a config with the default model and base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the model selector.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// `ContentProvider` backed by the OpenAI chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Creates a provider with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the HTTP client cannot be
    /// built.
    pub fn new(config: OpenAiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Infrastructure(format!("http client: {e}")))?;
        Ok(Self { config, client })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl ContentProvider for OpenAiProvider {
    #[instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
        };
        debug!("sending generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("generation request failed: {e}");
                DomainError::Provider(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let diagnostic = response.text().await.unwrap_or_default();
            error!(%status, "provider returned error");
            return Err(DomainError::Provider(format!(
                "provider returned {status}: {diagnostic}"
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            error!("malformed provider response: {e}");
            DomainError::Provider(format!("malformed response: {e}"))
        })?;

        let text = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DomainError::Provider("response carried no choices".into()))?;

        debug!("generation successful");
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "a prompt",
            }],
            max_tokens: MAX_TOKENS,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "a prompt");
        assert_eq!(json["max_tokens"], 150);
    }

    #[test]
    fn test_chat_response_parses_first_choice() {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "text" } }]
        });

        let parsed: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "text");
    }
}
