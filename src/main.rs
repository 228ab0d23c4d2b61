//! Main entry point for the Portfolio API

use portfolio_api::{
    api,
    config::{LogFormat, LoggingConfig, Settings},
    AppState,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load()?;
    settings.validate()?;

    init_logging(&settings.logging);

    info!("Starting Portfolio API");
    info!(
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );
    info!(
        redis_url = %settings.redis.connection_url(),
        redis_ttl_secs = settings.redis.ttl_secs,
        chatbot_configured = settings.chatbot.is_configured(),
        cors_origins = ?settings.cors.allowed_origins,
        "Optional integrations"
    );

    let addr = settings.server.bind_address();
    let app_state = Arc::new(AppState::new(settings));

    // Build the router
    let app = api::routes::create_router(app_state)?;

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
