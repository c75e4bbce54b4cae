// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
