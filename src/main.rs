use image_gallery::config::AppConfig;
use image_gallery::provider::client::PixabayClient;
use image_gallery::web::{AppState, router};
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on how often idle sessions are swept.
const SWEEP_EVERY: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!(
        "Image provider: {} ({} hits per page)",
        config.provider.base_url,
        config.provider.per_page
    );

    let provider = Arc::new(PixabayClient::new(config.provider.clone())?);
    let state = AppState::new(provider);

    // Covers pages that never send their close request
    state
        .sessions
        .clone()
        .spawn_sweeper(SWEEP_EVERY.min(config.session_idle), config.session_idle);

    let app = router(state);

    tracing::info!("Gallery listening on http://{}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
