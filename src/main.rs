use dialdesk::config::Config;
use dialdesk::domain::call_registry::CallRegistry;
use dialdesk::infrastructure::ticker::DurationTicker;
use dialdesk::interface::api::{build_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting DialDesk call session service");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    // Wire up the registry and its shared duration ticker
    let registry = Arc::new(CallRegistry::with_capacity(
        config.calling.max_concurrent_calls,
    ));
    let ticker = DurationTicker::spawn(
        registry.clone(),
        Duration::from_millis(config.calling.tick_interval_ms),
    );

    // Start the API server
    let state = AppState {
        registry: registry.clone(),
    };
    let app = build_router(state);
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on {}", bind_addr);

    let api_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("API server failed");
    });

    // Keep the service running
    tokio::signal::ctrl_c().await?;
    info!("Shutting down...");

    // Stop the ticker first so no duration update lands mid-teardown
    ticker.stop();
    api_handle.abort();
    info!("DialDesk stopped");

    Ok(())
}
