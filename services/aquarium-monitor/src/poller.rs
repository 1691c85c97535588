//! Poller: drives the snapshot source on a fixed refresh interval

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::snapshot::SnapshotSource;
use crate::state::StateHandle;

/// Fetches one snapshot eagerly, then one per interval, until cancelled
pub struct Poller {
    source: Arc<dyn SnapshotSource>,
    state: StateHandle,
    interval: Duration,
    cancel: CancellationToken,
}

impl Poller {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        state: StateHandle,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            source,
            state,
            interval,
            cancel,
        }
    }

    /// Poll until the cancellation token is triggered
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
                _ = ticker.tick() => {}
            }

            if !self.refresh().await {
                break;
            }
        }
    }

    /// Fetch one snapshot and record the outcome.
    ///
    /// Returns false if cancellation arrived while the fetch was in flight; the
    /// fetch result is discarded in that case.
    pub async fn refresh(&self) -> bool {
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                tracing::debug!("Discarding in-flight fetch after cancellation");
                return false;
            }
            result = self.source.fetch() => result,
        };

        let mut state = self.state.write().await;
        match result {
            Ok(snapshot) => {
                tracing::debug!(
                    "Refreshed snapshot: {} notifications",
                    snapshot.notifications.len()
                );
                state.apply_snapshot(snapshot, current_epoch_ms());
            }
            Err(e) => {
                tracing::warn!("Failed to fetch aquarium data: {}", e);
                state.record_failure(e.to_string());
                if state.consecutive_failures == 5 {
                    tracing::warn!(
                        "Snapshot source has failed {} times in a row",
                        state.consecutive_failures
                    );
                }
            }
        }
        true
    }
}

fn current_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
