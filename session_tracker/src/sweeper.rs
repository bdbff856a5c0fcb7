use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use tokio::task::JoinHandle;

use crate::config::{SESSION_IDLE_TIMEOUT, SWEEP_INTERVAL};
use crate::store::SessionStore;

/// Spawn the periodic expiry sweeper for `store`.
///
/// Runs for the life of the process on a fixed interval, removing sessions
/// idle past `SESSION_IDLE_TIMEOUT`. Fire-and-forget: a run's outcome is
/// logged and never surfaced to any request; a missed candidate is picked
/// up by the next run.
pub fn spawn_sweeper(store: SessionStore) -> JoinHandle<()> {
    let period = StdDuration::from_secs(*SWEEP_INTERVAL);
    let idle_threshold = Duration::seconds(*SESSION_IDLE_TIMEOUT as i64);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately; skip it so a freshly
        // started process does not sweep before serving anything.
        ticker.tick().await;

        tracing::info!(
            "Expiry sweeper running every {}s, idle timeout {}s",
            period.as_secs(),
            idle_threshold.num_seconds()
        );

        loop {
            ticker.tick().await;
            let removed = store.sweep_expired(idle_threshold, Utc::now()).await;
            if removed > 0 {
                tracing::info!("Swept {} expired session(s)", removed);
            } else {
                tracing::debug!("Sweep found no expired sessions");
            }
        }
    })
}
