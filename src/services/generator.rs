// src/services/generator.rs
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("No API key was provided. Set GEMINI_API_KEY.")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Network(String),

    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("response contained no text ({0})")]
    EmptyResponse(String),
}

/// Anything that can turn a prompt into generated text in one round trip.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
