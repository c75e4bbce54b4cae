use std::sync::Arc;

use portfolio_chat_api::{
    config::Config,
    routes,
    services::gemini::GeminiClient,
    state::AppState,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; /chat requests will fail until it is provided");
    }

    let gemini = GeminiClient::from_config(&config);
    info!(model = gemini.model(), "configured Gemini client");

    let state = Arc::new(AppState::new(Arc::new(gemini)));

    let app = routes::create_router()
        .with_state(state)
        .layer(routes::cors_layer(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!("Portfolio Chat API listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
