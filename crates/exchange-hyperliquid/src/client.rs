//! Hyperliquid info-API client with rate limiting.
//!
//! One endpoint matters here: POST `/info` with `{"type": "metaAndAssetCtxs"}`,
//! which returns the full perp universe and per-instrument market contexts in
//! a single response. Requests are rate limited with the governor crate.

use crate::error::{HyperliquidError, Result};
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use perp_radar_core::snapshot::{AssetCtx, MarketSnapshot, Meta};
use perp_radar_core::traits::SnapshotSource;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Hyperliquid production API base URL.
pub const HYPERLIQUID_API_URL: &str = "https://api.hyperliquid.xyz";

/// Request timeout. The refresher polls on a short interval, so a hung
/// request has to fail well before the next tick.
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct HyperliquidClient {
    http: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl HyperliquidClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| HyperliquidError::Network(format!("failed to build HTTP client: {e}")))?;

        // 1200 requests per minute = 20 per second
        let quota = Quota::per_second(nonzero!(20u32));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: base_url.into(),
            rate_limiter,
        })
    }

    /// Creates a client for the production API.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn production() -> Result<Self> {
        Self::new(HYPERLIQUID_API_URL)
    }

    /// Fetches the perp universe and per-instrument market contexts.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not decode as a snapshot. Never retries; the caller decides
    /// when to ask again.
    pub async fn meta_and_asset_ctxs(&self) -> Result<MarketSnapshot> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}/info", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&info_request_body())
            .send()
            .await?;

        let value = Self::handle_response(response).await?;
        decode_snapshot(value)
    }

    async fn handle_response(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(HyperliquidError::rate_limit(retry_after));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(HyperliquidError::api(status.as_u16(), text));
        }

        let body = response.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl SnapshotSource for HyperliquidClient {
    async fn fetch_snapshot(&self) -> anyhow::Result<MarketSnapshot> {
        Ok(self.meta_and_asset_ctxs().await?)
    }
}

/// Request body for the `metaAndAssetCtxs` info endpoint.
#[must_use]
pub fn info_request_body() -> serde_json::Value {
    serde_json::json!({ "type": "metaAndAssetCtxs" })
}

/// Decodes the two-element `[meta, contexts]` response into a snapshot.
///
/// A `null` context entry is kept as `None`; it marks an instrument with no
/// market data rather than a malformed response.
///
/// # Errors
/// Returns `HyperliquidError::Decode` when the body is not the expected
/// shape.
pub fn decode_snapshot(value: serde_json::Value) -> Result<MarketSnapshot> {
    let (meta, contexts): (Meta, Vec<Option<AssetCtx>>) = serde_json::from_value(value)?;
    Ok(MarketSnapshot {
        universe: meta.universe,
        contexts,
    })
}
