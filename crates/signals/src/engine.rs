//! Snapshot-to-signals pipeline.
//!
//! Three stages over a decoded snapshot: derive-and-filter (parse each
//! context, drop inactive instruments), score-and-tag, then rank (stable
//! sort by score descending, truncate to the top N). Pure and synchronous;
//! bad records degrade to defaults or drop out, they never fail the batch.

use crate::score::{composite_score, ScoreConfig};
use crate::tags::{classify, TagConfig};
use crate::types::{InstrumentMetrics, Signal};
use perp_radar_core::snapshot::{AssetCtx, AssetMeta};
use std::cmp::Ordering;

pub const DEFAULT_TOP_N: usize = 20;

/// Turns raw snapshots into a ranked signal list.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    score: ScoreConfig,
    tags: TagConfig,
    top_n: usize,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self {
            score: ScoreConfig::default(),
            tags: TagConfig::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SignalEngine {
    #[must_use]
    pub fn new(score: ScoreConfig, tags: TagConfig, top_n: usize) -> Self {
        Self { score, tags, top_n }
    }

    /// Overrides how many ranked signals are kept.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Runs the full pipeline over one snapshot.
    ///
    /// Universe and contexts are paired by index; a missing or `null`
    /// context skips that instrument, as does failing the liquidity gate.
    /// The result is sorted by score descending (ties keep snapshot order)
    /// and capped at `top_n` entries.
    #[must_use]
    pub fn compute_signals(
        &self,
        universe: &[AssetMeta],
        contexts: &[Option<AssetCtx>],
    ) -> Vec<Signal> {
        let candidates: Vec<Signal> = universe
            .iter()
            .zip(contexts.iter())
            .filter_map(|(meta, ctx)| self.derive_signal(meta, ctx.as_ref()?))
            .collect();

        tracing::debug!(
            "Scored {} of {} instruments in snapshot",
            candidates.len(),
            universe.len()
        );

        rank_signals(candidates, self.top_n)
    }

    fn derive_signal(&self, meta: &AssetMeta, ctx: &AssetCtx) -> Option<Signal> {
        let metrics = InstrumentMetrics::from_ctx(ctx);
        if !metrics.is_active() {
            tracing::trace!("Skipping {}: no price or no volume", meta.name);
            return None;
        }

        let breakdown = composite_score(&metrics, &self.score);
        let tags = classify(&metrics, &self.tags);

        Some(Signal {
            symbol: meta.name.clone(),
            price: metrics.price,
            change_24h: metrics.change_24h,
            volume_24h: metrics.volume_24h,
            funding_rate: metrics.funding_rate,
            open_interest: metrics.open_interest,
            score: breakdown.total(),
            tags,
        })
    }
}

/// Ranking stage: stable sort by score descending, then truncate.
///
/// `sort_by` is stable, so equal scores keep their snapshot order.
#[must_use]
pub fn rank_signals(mut signals: Vec<Signal>, top_n: usize) -> Vec<Signal> {
    signals.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    signals.truncate(top_n);
    signals
}
