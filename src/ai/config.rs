//! AI client configuration.
//!
//! Configuration is an explicit value handed to the client at construction
//! time; `from_env` is a convenience for binaries, not a hidden dependency of
//! the generation code.

use std::env;

use thiserror::Error;

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the OpenAI-compatible endpoint.
    pub api_key: String,
    /// Model name (e.g., "openai/gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl AiConfig {
    /// Create a configuration with the default model and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENROUTER_API_KEY`: API key
    ///
    /// Optional:
    /// - `SKILLET_AI_MODEL`: Model name (default: "openai/gpt-4o-mini")
    /// - `SKILLET_AI_BASE_URL`: API base URL (default: OpenRouter)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let model = env::var("SKILLET_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("SKILLET_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}
