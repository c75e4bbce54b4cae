use axum::{
    extract::{State, rejection::JsonRejection},
    Json,
};
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthResponse},
    services::chatbot,
    state::SharedState,
};

pub async fn health_handler() -> Json<HealthResponse> {
    Json(chatbot::health())
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(payload) = payload?;
    let response = chatbot::chat(state.generator.as_ref(), &payload).await?;
    Ok(Json(response))
}
