//! Shared state: the last-known-good ranked signal list.

use chrono::{DateTime, Utc};
use perp_radar_signals::Signal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One successful refresh: the ranked list and when it was computed.
#[derive(Debug, Clone)]
pub struct RankedSignals {
    pub signals: Vec<Signal>,
    pub updated_at: DateTime<Utc>,
}

/// Holds the most recent successful result. A failed refresh never touches
/// it, so consumers keep seeing the last good list across transient
/// upstream outages.
#[derive(Debug, Default)]
pub struct SignalCache {
    inner: RwLock<Option<RankedSignals>>,
}

impl SignalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached result with a freshly computed one.
    pub async fn store(&self, signals: Vec<Signal>) {
        let ranked = RankedSignals {
            signals,
            updated_at: Utc::now(),
        };
        *self.inner.write().await = Some(ranked);
    }

    /// Returns the most recent successful result, if any.
    pub async fn latest(&self) -> Option<RankedSignals> {
        self.inner.read().await.clone()
    }
}

/// State shared with the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SignalCache>,
    pub builder_address: String,
    pub refresh_interval_secs: u64,
}
