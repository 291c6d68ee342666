#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result, ensure};
use async_openai::config::OpenAIConfig;

/// Model used for review generation when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Sampling temperature used when `OPENAI_TEMPERATURE` is unset.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Upper bound on generated review length, in completion tokens.
pub const MAX_COMPLETION_TOKENS: u32 = 2500;

/// OpenAI credentials and optional tuning parameters sourced from the
/// environment.
#[derive(Clone)]
pub struct OpenAiEnv {
    /// Base URL override for an OpenAI-compatible endpoint, if provided
    api_base:    Option<String>,
    /// API key used to authenticate requests
    api_key:     String,
    /// Model identifier for chat completions
    model:       String,
    /// Sampling temperature sent with requests
    temperature: f32,
    /// Optional top-p override, if provided
    top_p:       Option<f32>,
}

impl OpenAiEnv {
    /// Constructs an `OpenAiEnv` from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_ENDPOINT`, `OPENAI_MODEL`,
    /// `OPENAI_TEMPERATURE`, and `OPENAI_TOP_P` are optional with
    /// defaults matching the review call.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set to generate reviews")?
            .trim()
            .to_owned();
        ensure!(!api_key.is_empty(), "OPENAI_API_KEY must not be empty");

        let api_base = std::env::var("OPENAI_ENDPOINT")
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());
        let model = std::env::var("OPENAI_MODEL")
            .ok()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let temperature = std::env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        let top_p = std::env::var("OPENAI_TOP_P")
            .ok()
            .and_then(|s| s.parse::<f32>().ok());

        Ok(Self {
            api_base,
            api_key,
            model,
            temperature,
            top_p,
        })
    }

    /// Builds the `async-openai` client configuration for these
    /// credentials.
    pub fn client_config(&self) -> OpenAIConfig {
        let mut config = OpenAIConfig::new().with_api_key(self.api_key.clone());
        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base.clone());
        }
        config
    }

    /// Returns the model identifier used for chat completions.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the sampling temperature.
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Returns the configured top_p, if any.
    pub fn top_p(&self) -> Option<f32> {
        self.top_p
    }
}
