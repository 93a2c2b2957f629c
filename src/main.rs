use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use huemood_api::{
    api::{create_router, AppState},
    config::Config,
    services::{palette::PaletteIndex, recommend::RecommenderClient, telemetry::ExperimentLogger},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // An unreadable dataset is not fatal: lookups just find no match.
    let palette = PaletteIndex::load(&config.palette_path);
    if palette.is_empty() {
        tracing::warn!("Running with an empty palette index; estimates fall back to defaults");
    }

    let recommender = Arc::new(RecommenderClient::new(config.recommender_url.clone()));
    let logger = ExperimentLogger::new(config.experiment_log_url.clone());

    let state = AppState::new(palette, recommender, logger);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
