//! Composite interestingness scoring.
//!
//! Four sub-scores, each clamped to its own range so no single dimension
//! can dominate: turnover (how fast open interest churns), funding pressure,
//! 24h momentum, and open-interest depth. With default weights the total
//! lies in [0, 23].

use crate::types::InstrumentMetrics;

/// Caps, weights, and saturation points for the composite score.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Cap on the raw turnover ratio before weighting (default 5.0)
    pub turnover_cap: f64,
    /// Weight applied to the capped turnover ratio (default 2.0)
    pub turnover_weight: f64,
    /// Funding magnitude in percent at which the funding term saturates (default 0.1)
    pub funding_saturation_pct: f64,
    /// Weight applied to the saturated funding term (default 3.0)
    pub funding_weight: f64,
    /// Multiplier on the absolute 24h change before capping (default 0.4)
    pub momentum_factor: f64,
    /// Cap on the momentum term (default 8.0)
    pub momentum_cap: f64,
    /// Open interest in USD at which the OI term saturates (default 500M)
    pub oi_saturation_usd: f64,
    /// Weight applied to the saturated OI term (default 2.0)
    pub oi_weight: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            turnover_cap: 5.0,
            turnover_weight: 2.0,
            funding_saturation_pct: 0.1,
            funding_weight: 3.0,
            momentum_factor: 0.4,
            momentum_cap: 8.0,
            oi_saturation_usd: 500_000_000.0,
            oi_weight: 2.0,
        }
    }
}

impl ScoreConfig {
    /// Highest total any instrument can reach under this configuration.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.turnover_cap * self.turnover_weight
            + self.funding_weight
            + self.momentum_cap
            + self.oi_weight
    }
}

/// The four scoring terms for one instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub turnover: f64,
    pub funding: f64,
    pub momentum: f64,
    pub open_interest: f64,
}

impl ScoreBreakdown {
    /// The rank key: sum of all terms.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.turnover + self.funding + self.momentum + self.open_interest
    }
}

/// Scores one instrument.
///
/// Every term clamps to `[0, cap]`, which also bounds the total for
/// arbitrary (including degenerate) inputs.
#[must_use]
pub fn composite_score(metrics: &InstrumentMetrics, config: &ScoreConfig) -> ScoreBreakdown {
    let turnover = metrics.turnover_ratio.clamp(0.0, config.turnover_cap) * config.turnover_weight;
    let funding = (metrics.funding_rate.abs() / config.funding_saturation_pct).clamp(0.0, 1.0)
        * config.funding_weight;
    let momentum =
        (metrics.change_24h.abs() * config.momentum_factor).clamp(0.0, config.momentum_cap);
    let open_interest =
        (metrics.open_interest / config.oi_saturation_usd).clamp(0.0, 1.0) * config.oi_weight;

    ScoreBreakdown {
        turnover,
        funding,
        momentum,
        open_interest,
    }
}
