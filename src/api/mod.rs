// HTTP and WebSocket surface

pub mod websocket;

pub use websocket::{create_ws_router, ws_handler, WsAppState};

use crate::config::ServerConfig;
use anyhow::Result;
use axum::Router;
use tokio::sync::watch;
use tracing::info;

/// Bind the configured listen address and serve until `shutdown` fires
pub async fn run_server(
    config: &ServerConfig,
    app: Router,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
        })
        .await?;

    Ok(())
}
