//! Wire types for the Hyperliquid `metaAndAssetCtxs` snapshot.
//!
//! The upstream response is a two-element array: a meta object whose
//! `universe` lists instrument names, and a parallel array of per-instrument
//! market contexts aligned by index. Numeric fields arrive as strings and
//! any of them may be absent; a whole context entry may be `null`.

use serde::{Deserialize, Serialize};

/// Instrument identity from the meta `universe` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMeta {
    pub name: String,
}

/// Meta object, first element of the snapshot array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub universe: Vec<AssetMeta>,
}

/// Raw per-instrument market context, second-element entries.
///
/// Kept as close to the wire as possible: every numeric is an optional
/// string, parsed downstream with explicit defaults. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetCtx {
    pub mark_px: Option<String>,
    pub prev_day_px: Option<String>,
    pub day_ntl_vlm: Option<String>,
    pub open_interest: Option<String>,
    pub funding: Option<String>,
}

/// One decoded snapshot: universe and contexts, positionally aligned.
///
/// The arrays may differ in length; consumers pair entries by index and
/// treat a missing or `null` context as "skip this instrument".
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub universe: Vec<AssetMeta>,
    pub contexts: Vec<Option<AssetCtx>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_ctx_deserializes_camel_case_fields() {
        let json = r#"{
            "markPx": "50000.0",
            "prevDayPx": "48000.0",
            "dayNtlVlm": "100000000.0",
            "openInterest": "2000.0",
            "funding": "0.0002"
        }"#;
        let ctx: AssetCtx = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.mark_px.as_deref(), Some("50000.0"));
        assert_eq!(ctx.prev_day_px.as_deref(), Some("48000.0"));
        assert_eq!(ctx.day_ntl_vlm.as_deref(), Some("100000000.0"));
        assert_eq!(ctx.open_interest.as_deref(), Some("2000.0"));
        assert_eq!(ctx.funding.as_deref(), Some("0.0002"));
    }

    #[test]
    fn asset_ctx_tolerates_missing_fields() {
        let ctx: AssetCtx = serde_json::from_str(r#"{"markPx": "1.5"}"#).unwrap();
        assert_eq!(ctx.mark_px.as_deref(), Some("1.5"));
        assert_eq!(ctx.prev_day_px, None);
        assert_eq!(ctx.funding, None);
    }

    #[test]
    fn asset_ctx_ignores_unknown_fields() {
        let json = r#"{
            "markPx": "1.0",
            "midPx": "1.01",
            "impactPxs": ["0.99", "1.02"],
            "premium": "0.0001"
        }"#;
        let ctx: AssetCtx = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.mark_px.as_deref(), Some("1.0"));
    }

    #[test]
    fn null_context_entries_deserialize_as_none() {
        let entries: Vec<Option<AssetCtx>> =
            serde_json::from_str(r#"[{"markPx": "2.0"}, null]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_some());
        assert!(entries[1].is_none());
    }

    #[test]
    fn meta_deserializes_universe_names() {
        let json = r#"{"universe": [{"name": "BTC", "szDecimals": 5}, {"name": "ETH"}]}"#;
        let meta: Meta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.universe.len(), 2);
        assert_eq!(meta.universe[0].name, "BTC");
        assert_eq!(meta.universe[1].name, "ETH");
    }
}
