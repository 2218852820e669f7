//! Shared duration ticker
//!
//! One background task drives the per-second duration refresh for every
//! live call, instead of one timer handle per call. Tearing down the task
//! stops all ticking at once.

use crate::domain::call_registry::CallRegistry;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Background task refreshing call durations on a fixed cadence
pub struct DurationTicker {
    handle: JoinHandle<()>,
}

impl DurationTicker {
    /// Spawn the ticker against a registry
    pub fn spawn(registry: Arc<CallRegistry>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval);
            // Durations recompute from the start timestamp on every pass
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tick.tick().await;
                registry.refresh_durations();
            }
        });
        info!("Duration ticker started ({:?} cadence)", interval);
        Self { handle }
    }

    /// Stop ticking; no duration update is observed afterwards
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for DurationTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
