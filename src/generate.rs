use anyhow::Result;
use async_openai::{
    Client as OpenAIClient,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest,
    },
};
use async_trait::async_trait;

use crate::{
    config::{MAX_COMPLETION_TOKENS, OpenAiEnv},
    persona::ReviewPrompt,
};

/// A classified failure from the external text-generation service.
///
/// The service is treated as unreliable: transport errors, provider-side
/// errors, and empty responses all surface here. Callers never retry
/// automatically.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// Transport or provider-side failure from the OpenAI-compatible API
    #[error("generation request failed: {0}")]
    Provider(#[from] OpenAIError),
    /// The service answered but returned no usable content
    #[error("generation service returned an empty response")]
    EmptyResponse,
}

/// Trait implemented by text-generation backends.
///
/// One operation: submit a structured prompt, receive markdown text or a
/// classified failure. This seam isolates the deterministic pipeline from
/// the non-reproducible external dependency, so the pipeline can be
/// tested without network access.
#[async_trait]
pub trait ReviewGenerator {
    /// Submits the prompt and returns the generated markdown feedback.
    async fn generate(&self, prompt: &ReviewPrompt) -> Result<String, GenerationError>;
}

/// Generator backed by an OpenAI-compatible chat-completion endpoint.
pub struct OpenAiGenerator {
    /// Endpoint, credentials, and tuning parameters
    env: OpenAiEnv,
}

impl OpenAiGenerator {
    /// Builds a generator from environment configuration.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            env: OpenAiEnv::from_env()?,
        })
    }

    /// Builds a generator from explicit configuration.
    pub fn new(env: OpenAiEnv) -> Self {
        Self { env }
    }
}

#[async_trait]
impl ReviewGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &ReviewPrompt) -> Result<String, GenerationError> {
        let client = OpenAIClient::with_config(self.env.client_config());

        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(prompt.system.clone())
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt.user.clone())
                .build()?
                .into(),
        ];

        let response = client
            .chat()
            .create(CreateChatCompletionRequest {
                model: self.env.model().to_string(),
                messages,
                temperature: Some(self.env.temperature()),
                top_p: self.env.top_p(),
                n: Some(1),
                stream: Some(false),
                max_completion_tokens: Some(MAX_COMPLETION_TOKENS),
                ..Default::default()
            })
            .await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();
        let content = content.trim();

        if content.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}
