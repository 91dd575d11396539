//! Output-facing signal types and lenient numeric parsing.

use perp_radar_core::snapshot::AssetCtx;
use serde::Serialize;
use std::fmt;

/// Descriptive market-condition tag attached to a signal.
///
/// Serializes as the human-readable label, which is part of the output
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tag {
    Pumping,
    Dumping,
    #[serde(rename = "High Funding")]
    HighFunding,
    #[serde(rename = "Neg Funding")]
    NegFunding,
    #[serde(rename = "High Turnover")]
    HighTurnover,
    Overheated,
    #[serde(rename = "Short Squeeze Risk")]
    ShortSqueezeRisk,
    #[serde(rename = "High Volume")]
    HighVolume,
}

impl Tag {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pumping => "Pumping",
            Self::Dumping => "Dumping",
            Self::HighFunding => "High Funding",
            Self::NegFunding => "Neg Funding",
            Self::HighTurnover => "High Turnover",
            Self::Overheated => "Overheated",
            Self::ShortSqueezeRisk => "Short Squeeze Risk",
            Self::HighVolume => "High Volume",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ranked instrument as published to consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub symbol: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
    pub funding_rate: f64,
    pub open_interest: f64,
    pub score: f64,
    pub tags: Vec<Tag>,
}

/// Parsed and derived per-instrument numbers, the input to scoring and
/// tagging.
///
/// Units: `change_24h` and `funding_rate` are percentages, `volume_24h` and
/// `open_interest` are USD notionals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentMetrics {
    pub price: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
    pub funding_rate: f64,
    pub open_interest: f64,
    pub turnover_ratio: f64,
}

impl InstrumentMetrics {
    /// Derives metrics from a raw market context.
    ///
    /// - A missing previous-day price defaults to the mark price, so the
    ///   24h change reads 0 rather than a spurious move.
    /// - Open interest arrives in contracts and is converted to USD
    ///   notional via the mark price.
    /// - The funding rate arrives as a per-period fraction and is converted
    ///   to percent.
    /// - Turnover divides volume by `max(open_interest, 1)` to stay finite
    ///   for empty books.
    #[must_use]
    pub fn from_ctx(ctx: &AssetCtx) -> Self {
        let price = parse_or(ctx.mark_px.as_deref(), 0.0);
        let prev_price = parse_or(ctx.prev_day_px.as_deref(), price);
        let change_24h = if prev_price > 0.0 {
            (price - prev_price) / prev_price * 100.0
        } else {
            0.0
        };
        let volume_24h = parse_or(ctx.day_ntl_vlm.as_deref(), 0.0);
        let open_interest = parse_or(ctx.open_interest.as_deref(), 0.0) * price;
        let funding_rate = parse_or(ctx.funding.as_deref(), 0.0) * 100.0;
        let turnover_ratio = volume_24h / open_interest.max(1.0);

        Self {
            price,
            change_24h,
            volume_24h,
            funding_rate,
            open_interest,
            turnover_ratio,
        }
    }

    /// Liquidity gate: only instruments with a live price and nonzero 24h
    /// volume are worth ranking.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.price > 0.0 && self.volume_24h > 0.0
    }
}

/// Parses an optional string-encoded numeric field, falling back to
/// `default` when the field is absent, empty, unparseable, or non-finite.
#[must_use]
pub fn parse_or(field: Option<&str>, default: f64) -> f64 {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(mark: &str, prev: &str, vlm: &str, oi: &str, funding: &str) -> AssetCtx {
        AssetCtx {
            mark_px: Some(mark.to_string()),
            prev_day_px: Some(prev.to_string()),
            day_ntl_vlm: Some(vlm.to_string()),
            open_interest: Some(oi.to_string()),
            funding: Some(funding.to_string()),
        }
    }

    // ============================================
    // parse_or Tests
    // ============================================

    #[test]
    fn parse_or_reads_valid_numbers() {
        assert!((parse_or(Some("50000.5"), 0.0) - 50000.5).abs() < f64::EPSILON);
        assert!((parse_or(Some("-0.0125"), 0.0) - (-0.0125)).abs() < f64::EPSILON);
        assert!((parse_or(Some("1e8"), 0.0) - 1e8).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_or_trims_whitespace() {
        assert!((parse_or(Some("  42.0  "), 0.0) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_or_defaults_on_missing_field() {
        assert!((parse_or(None, 7.5) - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_or_defaults_on_garbage() {
        assert!((parse_or(Some(""), 3.0) - 3.0).abs() < f64::EPSILON);
        assert!((parse_or(Some("abc"), 3.0) - 3.0).abs() < f64::EPSILON);
        assert!((parse_or(Some("12.3.4"), 3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_or_rejects_non_finite_values() {
        assert!((parse_or(Some("NaN"), 1.0) - 1.0).abs() < f64::EPSILON);
        assert!((parse_or(Some("inf"), 1.0) - 1.0).abs() < f64::EPSILON);
        assert!((parse_or(Some("-inf"), 1.0) - 1.0).abs() < f64::EPSILON);
    }

    // ============================================
    // Metric Derivation Tests
    // ============================================

    #[test]
    fn derives_metrics_from_full_context() {
        let m = InstrumentMetrics::from_ctx(&ctx("50000", "48000", "100000000", "2000", "0.0002"));

        assert!((m.price - 50000.0).abs() < f64::EPSILON);
        assert!((m.change_24h - 4.166_666_666_666_667).abs() < 1e-9);
        assert!((m.volume_24h - 1e8).abs() < f64::EPSILON);
        // 2000 contracts at 50000 USD.
        assert!((m.open_interest - 1e8).abs() < f64::EPSILON);
        // Fraction 0.0002 becomes 0.02 percent.
        assert!((m.funding_rate - 0.02).abs() < 1e-12);
        assert!((m.turnover_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_prev_day_price_means_zero_change() {
        let raw = AssetCtx {
            mark_px: Some("120.0".to_string()),
            day_ntl_vlm: Some("5000000".to_string()),
            ..Default::default()
        };
        let m = InstrumentMetrics::from_ctx(&raw);

        assert!((m.change_24h).abs() < f64::EPSILON);
        assert!(m.is_active());
    }

    #[test]
    fn zero_prev_day_price_means_zero_change() {
        let m = InstrumentMetrics::from_ctx(&ctx("10", "0", "1000", "1", "0"));
        assert!((m.change_24h).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_change_is_signed() {
        let m = InstrumentMetrics::from_ctx(&ctx("90", "100", "1000", "1", "0"));
        assert!((m.change_24h - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn turnover_stays_finite_with_zero_open_interest() {
        let m = InstrumentMetrics::from_ctx(&ctx("10", "10", "5000", "0", "0"));
        assert!((m.turnover_ratio - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gate_rejects_zero_price_and_zero_volume() {
        assert!(!InstrumentMetrics::from_ctx(&ctx("0", "100", "1000", "1", "0")).is_active());
        assert!(!InstrumentMetrics::from_ctx(&ctx("10", "10", "0", "1", "0")).is_active());
        assert!(InstrumentMetrics::from_ctx(&ctx("10", "10", "1", "1", "0")).is_active());
    }

    #[test]
    fn gate_rejects_empty_context() {
        let m = InstrumentMetrics::from_ctx(&AssetCtx::default());
        assert!(!m.is_active());
    }

    // ============================================
    // Serialization Tests
    // ============================================

    #[test]
    fn signal_serializes_camel_case_keys() {
        let signal = Signal {
            symbol: "BTC".to_string(),
            price: 50000.0,
            change_24h: 4.17,
            volume_24h: 1e8,
            funding_rate: 0.02,
            open_interest: 1e8,
            score: 4.67,
            tags: vec![Tag::Pumping, Tag::HighVolume],
        };
        let json = serde_json::to_value(&signal).unwrap();

        assert_eq!(json["symbol"], "BTC");
        assert!(json.get("change24h").is_some());
        assert!(json.get("volume24h").is_some());
        assert!(json.get("fundingRate").is_some());
        assert!(json.get("openInterest").is_some());
        assert_eq!(json["tags"][0], "Pumping");
        assert_eq!(json["tags"][1], "High Volume");
    }

    #[test]
    fn tag_labels_match_serialized_form() {
        for tag in [
            Tag::Pumping,
            Tag::Dumping,
            Tag::HighFunding,
            Tag::NegFunding,
            Tag::HighTurnover,
            Tag::Overheated,
            Tag::ShortSqueezeRisk,
            Tag::HighVolume,
        ] {
            let serialized = serde_json::to_value(tag).unwrap();
            assert_eq!(serialized, tag.label());
            assert_eq!(tag.to_string(), tag.label());
        }
    }
}
