use interview_backend::{config::Config, routes, utils::logging::init_tracing, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; every request will be served a fallback question");
    }
    info!(
        model = %config.gemini_model,
        timeout_secs = config.upstream_timeout.as_secs(),
        "Gemini upstream configured"
    );

    let app_state = AppState::new(&config)?;
    let app = routes::router(app_state);

    let listener = TcpListener::bind(config.server_address).await?;
    info!("Server started on {}", config.server_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
