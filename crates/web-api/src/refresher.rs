//! Background refresh task: fetch a snapshot, compute signals, swap the
//! cache on success.
//!
//! The engine itself has no timer; this task owns the cadence. A failed
//! cycle logs a warning and leaves the cache untouched, so the next tick is
//! the only retry.

use crate::state::SignalCache;
use perp_radar_core::SnapshotSource;
use perp_radar_signals::SignalEngine;
use std::sync::Arc;
use std::time::Duration;

pub struct SignalRefresher<S> {
    source: S,
    engine: SignalEngine,
    cache: Arc<SignalCache>,
    interval: Duration,
}

impl<S: SnapshotSource> SignalRefresher<S> {
    #[must_use]
    pub fn new(
        source: S,
        engine: SignalEngine,
        cache: Arc<SignalCache>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            engine,
            cache,
            interval,
        }
    }

    /// Runs forever. The first tick fires immediately, so the cache warms up
    /// as soon as the upstream answers; after that, one refresh per interval.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            ticker.tick().await;
            match self.refresh_once().await {
                Ok(count) => {
                    tracing::info!("Snapshot refreshed, {} signals published", count);
                }
                Err(e) => {
                    tracing::warn!("Snapshot refresh failed, keeping last result: {:#}", e);
                }
            }
        }
    }

    /// One fetch-compute-store cycle, returning how many signals were
    /// published.
    ///
    /// # Errors
    /// Returns an error when the snapshot fetch fails. The cache is left
    /// untouched in that case.
    pub async fn refresh_once(&self) -> anyhow::Result<usize> {
        let snapshot = self.source.fetch_snapshot().await?;
        let signals = self
            .engine
            .compute_signals(&snapshot.universe, &snapshot.contexts);
        let count = signals.len();
        self.cache.store(signals).await;
        Ok(count)
    }
}
