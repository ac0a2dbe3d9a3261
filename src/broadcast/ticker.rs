use super::{Broadcaster, PollutionUpdate};
use crate::reading::Reading;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Generate and broadcast one reading every `interval_seconds`.
///
/// Runs until `shutdown` fires (or its sender is dropped). The first reading
/// is emitted immediately, then one per interval. The broadcast itself never
/// waits on client I/O, so a slow client cannot delay the next tick.
pub async fn run_broadcast_loop(
    broadcaster: Arc<Broadcaster>,
    interval_seconds: u64,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(Duration::from_secs(interval_seconds));

    // Skip missed ticks to prevent backlog under load
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reading = Reading::generate();

                debug!(
                    location = ?reading.location,
                    aqi = reading.aqi,
                    clients = broadcaster.connection_count(),
                    "Broadcasting reading"
                );

                broadcaster.broadcast(PollutionUpdate::from(reading));
            }

            _ = shutdown.changed() => {
                info!("Broadcast loop shutting down");
                break;
            }
        }
    }
}
