//! Groq HTTP client for chat completions.
//!
//! Uses the OpenAI-compatible /chat/completions endpoint with a fixed
//! sampling temperature and output length. One request per call, no
//! retries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Default Groq API base URL.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Sampling temperature for analysis generation.
const TEMPERATURE: f32 = 0.7;

/// Maximum completion length in tokens.
const MAX_TOKENS: u32 = 4000;

/// Groq chat-completion client.
#[derive(Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl GroqClient {
    /// Create a client from an engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            client,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one completion request with a system and a user message,
    /// returning the reply text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, EngineError> {
        let api_key = self.api_key.as_deref().ok_or(EngineError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Api { status, body });
        }

        let body: ChatResponse = response.json().await?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(EngineError::EmptyCompletion)?;

        debug!(chars = content.len(), "Received completion");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_io() {
        let client = GroqClient::new(&EngineConfig::new(None));
        let err = client.complete("system", "user").await.unwrap_err();
        assert!(matches!(err, EngineError::MissingApiKey));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let mut config = EngineConfig::new(Some("key".to_string()));
        config.base_url = "https://api.groq.com/openai/v1/".to_string();
        let client = GroqClient::new(&config);
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }
}
