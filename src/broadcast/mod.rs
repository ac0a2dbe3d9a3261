use crate::reading::Reading;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;

mod ticker;

pub use ticker::run_broadcast_loop;

/// Fan-out channel capacity. At one update per tick a receiver has to stall
/// for over a minute before it lags out, and a lost update is superseded by
/// the next tick anyway.
const CHANNEL_CAPACITY: usize = 16;

/// Server → Client: air-quality update envelope
#[derive(Debug, Clone, Serialize)]
pub struct PollutionUpdate {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub payload: Reading,
}

impl From<Reading> for PollutionUpdate {
    fn from(reading: Reading) -> Self {
        Self {
            msg_type: "pollution_update".to_string(),
            payload: reading,
        }
    }
}

/// Owns the set of connected clients and fans each update out to all of them.
///
/// The recipient set lives inside the broadcast channel: `register` adds a
/// receiver, dropping the receiver removes it. A client connecting or
/// disconnecting mid-send is safe; the send reaches whoever is subscribed at
/// that moment.
pub struct Broadcaster {
    tx: broadcast::Sender<PollutionUpdate>,

    /// Live connection count (observability only)
    connections: AtomicU64,
}

impl Broadcaster {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            tx,
            connections: AtomicU64::new(0),
        }
    }

    /// Add a client to the recipient set
    pub fn register(&self) -> broadcast::Receiver<PollutionUpdate> {
        self.connections.fetch_add(1, Ordering::Relaxed);
        self.tx.subscribe()
    }

    /// Record a client leaving (the channel drops the receiver itself)
    pub fn unregister(&self) {
        self.connections.fetch_sub(1, Ordering::Relaxed);
    }

    /// Push one update to every currently registered client.
    ///
    /// An empty recipient set is not an error — the update is simply dropped
    /// and the next tick supersedes it.
    pub fn broadcast(&self, update: PollutionUpdate) {
        let _ = self.tx.send(update);
    }

    /// Number of currently registered clients
    pub fn connection_count(&self) -> u64 {
        self.connections.load(Ordering::Relaxed)
    }

    /// Number of live receivers on the channel
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}
