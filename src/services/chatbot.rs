// src/services/chatbot.rs
use tracing::{debug, info};

use super::generator::TextGenerator;
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    prompt::build_prompt,
};

pub const HEALTH_STATUS: &str = "Portfolio Chat API is running";

pub fn health() -> HealthResponse {
    HealthResponse { status: HEALTH_STATUS.to_string() }
}

/// True when the message has nothing but whitespace, counting the
/// ASCII information separators (0x1C..=0x1F) as whitespace too.
pub fn is_blank(message: &str) -> bool {
    message
        .trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .is_empty()
}

/// Validates the visitor message, sends the composed prompt upstream once and
/// returns the generated text untouched.
pub async fn chat(generator: &dyn TextGenerator, request: &ChatRequest) -> Result<ChatResponse, AppError> {
    if is_blank(&request.message) {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }

    let prompt = build_prompt(&request.profile, &request.message);
    info!(%prompt, "dispatching prompt");

    match generator.generate(&prompt).await {
        Ok(reply) => Ok(ChatResponse { reply }),
        Err(e) => {
            debug!(error = %e, "generation failed");
            Err(AppError::Upstream(e.to_string()))
        }
    }
}
