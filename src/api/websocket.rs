use crate::broadcast::Broadcaster;
use crate::connection;
use axum::{
    extract::{
        ws::{WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared application state for the WebSocket handler
#[derive(Clone)]
pub struct WsAppState {
    pub broadcaster: Arc<Broadcaster>,
}

/// GET /ws - WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<WsAppState>>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Create the WebSocket router. Cross-origin access is unrestricted — any
/// origin may connect.
pub fn create_ws_router(state: Arc<WsAppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

/// Handle WebSocket connection lifecycle
async fn handle_socket(socket: WebSocket, state: Arc<WsAppState>) {
    info!("Client connected");

    let updates_rx = state.broadcaster.register();
    connection::handle_connection(socket, updates_rx).await;
    state.broadcaster.unregister();
}
