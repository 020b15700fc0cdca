//! Engine configuration.
//!
//! The credential and model selection are read once at startup and
//! passed into constructors; the client itself never touches the
//! environment, which keeps tests deterministic.

use crate::client::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Configuration for the insight engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// API key for the completion service. When absent, generation
    /// fails with `EngineError::MissingApiKey` instead of at startup.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl EngineConfig {
    /// Build a config with the given API key and default model/URL.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// `GROQ_API_KEY` carries the credential; `GROQ_MODEL` and
    /// `GROQ_API_URL` override the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var("GROQ_API_KEY").ok());
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            config.model = model;
        }
        if let Ok(url) = std::env::var("GROQ_API_URL") {
            config.base_url = url;
        }
        config
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new(None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_with_model() {
        let config = EngineConfig::new(None).with_model("llama-3.3-70b-versatile");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
    }
}
