//! Threshold-based market-condition tagging.

use crate::types::{InstrumentMetrics, Tag};

/// Thresholds for tag classification.
#[derive(Debug, Clone)]
pub struct TagConfig {
    /// Absolute 24h change in percent above which a move is tagged (default 3.0)
    pub move_threshold_pct: f64,
    /// Absolute funding rate in percent above which funding is notable (default 0.05)
    pub funding_threshold_pct: f64,
    /// Turnover ratio above which churn is notable (default 2.0)
    pub turnover_threshold: f64,
    /// Funding rate in percent beyond which the market is extreme (default 0.1)
    pub extreme_funding_pct: f64,
    /// 24h volume in USD above which volume is notable (default 30M)
    pub volume_threshold_usd: f64,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            move_threshold_pct: 3.0,
            funding_threshold_pct: 0.05,
            turnover_threshold: 2.0,
            extreme_funding_pct: 0.1,
            volume_threshold_usd: 30_000_000.0,
        }
    }
}

/// Classifies one instrument.
///
/// Rules are non-exclusive and evaluated in a fixed order; the returned
/// ordering is part of the output contract. All thresholds are strict.
#[must_use]
pub fn classify(metrics: &InstrumentMetrics, config: &TagConfig) -> Vec<Tag> {
    let mut tags = Vec::new();

    if metrics.change_24h.abs() > config.move_threshold_pct {
        tags.push(if metrics.change_24h > 0.0 {
            Tag::Pumping
        } else {
            Tag::Dumping
        });
    }
    if metrics.funding_rate.abs() > config.funding_threshold_pct {
        tags.push(if metrics.funding_rate > 0.0 {
            Tag::HighFunding
        } else {
            Tag::NegFunding
        });
    }
    if metrics.turnover_ratio > config.turnover_threshold {
        tags.push(Tag::HighTurnover);
    }
    if metrics.funding_rate > config.extreme_funding_pct {
        tags.push(Tag::Overheated);
    }
    if metrics.funding_rate < -config.extreme_funding_pct {
        tags.push(Tag::ShortSqueezeRisk);
    }
    if metrics.volume_24h > config.volume_threshold_usd {
        tags.push(Tag::HighVolume);
    }

    tags
}
