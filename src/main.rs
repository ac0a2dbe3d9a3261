use airpulse::api::{self, WsAppState};
use airpulse::broadcast::{run_broadcast_loop, Broadcaster};
use airpulse::config::AirpulseConfig;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airpulse=info".into()),
        )
        .init();

    info!("Airpulse starting...");

    let config = AirpulseConfig::load()?;

    let broadcaster = Arc::new(Broadcaster::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ctrl-C flips the shutdown watch; the tick loop and the server both
    // observe it
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let generator = tokio::spawn(run_broadcast_loop(
        Arc::clone(&broadcaster),
        config.broadcast.interval_seconds,
        shutdown_rx.clone(),
    ));

    let state = Arc::new(WsAppState { broadcaster });
    let app = api::create_ws_router(state);
    api::run_server(&config.server, app, shutdown_rx).await?;

    generator.await?;

    info!("Airpulse stopped");
    Ok(())
}
