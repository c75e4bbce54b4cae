// src/routes/mod.rs
pub mod chat;

use crate::{
    config::{AllowedOrigins, Config},
    state::SharedState,
};
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
}

/// GET and POST from the configured origins, any request header.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    match &config.allowed_origins {
        AllowedOrigins::Any => cors.allow_origin(Any),
        AllowedOrigins::List(origins) => cors.allow_origin(origins.clone()),
    }
}
