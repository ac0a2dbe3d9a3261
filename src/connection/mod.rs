use crate::broadcast::PollutionUpdate;
use axum::extract::ws::{Message, WebSocket};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

/// Drive one WebSocket connection: forward every broadcast update as a text
/// frame, answer pings, exit on close or transport error.
///
/// The stream is push-only; inbound text and binary frames are ignored.
pub async fn handle_connection(
    mut socket: WebSocket,
    mut updates_rx: broadcast::Receiver<PollutionUpdate>,
) {
    loop {
        tokio::select! {
            // Handle incoming client frames
            Some(msg) = socket.recv() => {
                match msg {
                    Ok(Message::Close(_)) => {
                        info!("WebSocket client disconnected");
                        break;
                    }
                    Ok(Message::Ping(data)) => {
                        if let Err(e) = socket.send(Message::Pong(data)).await {
                            error!(error = %e, "Failed to send pong");
                            break;
                        }
                    }
                    Ok(_) => {
                        // Ignore text, binary, pong frames
                    }
                    Err(e) => {
                        warn!(error = %e, "WebSocket error");
                        break;
                    }
                }
            }

            // Handle updates from the broadcast channel
            result = updates_rx.recv() => {
                match result {
                    Ok(update) => {
                        if let Err(e) = send_update(&mut socket, update).await {
                            error!(error = %e, "Failed to send update");
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Next tick supersedes whatever was missed
                        warn!(skipped = skipped, "WebSocket lagged, skipped updates");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        error!("Broadcast channel closed");
                        break;
                    }
                }
            }

            else => {
                break;
            }
        }
    }

    info!("WebSocket connection closed");
}

/// Send one update to the client as a JSON text frame
async fn send_update(socket: &mut WebSocket, update: PollutionUpdate) -> anyhow::Result<()> {
    let json = serde_json::to_string(&update)?;
    socket.send(Message::Text(json)).await?;
    Ok(())
}
