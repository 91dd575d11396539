use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use perp_radar_signals::Signal;
use serde::Serialize;

/// Signals envelope served to consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalsResponse {
    pub signals: Vec<Signal>,
    pub builder_address: String,
    pub updated_at: DateTime<Utc>,
}

/// Generic error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Freshness report for the signal cache.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub staleness_seconds: Option<i64>,
    pub refresh_interval_secs: u64,
}

/// GET /api/signals - the ranked list from the last successful refresh.
///
/// # Errors
/// Returns `502 Bad Gateway` with an error envelope when no snapshot has
/// ever been fetched successfully.
pub async fn get_signals(
    State(state): State<AppState>,
) -> Result<Json<SignalsResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.cache.latest().await {
        Some(ranked) => Ok(Json(SignalsResponse {
            signals: ranked.signals,
            builder_address: state.builder_address.clone(),
            updated_at: ranked.updated_at,
        })),
        None => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: "failed to fetch signals".to_string(),
            }),
        )),
    }
}

/// GET /api/health - freshness of the cached signal list.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let updated_at = state.cache.latest().await.map(|r| r.updated_at);
    let staleness_seconds = updated_at.map(|t| (Utc::now() - t).num_seconds());
    let status = determine_status(staleness_seconds, state.refresh_interval_secs);

    Json(HealthResponse {
        status: status.to_string(),
        timestamp: Utc::now(),
        updated_at,
        staleness_seconds,
        refresh_interval_secs: state.refresh_interval_secs,
    })
}

/// Staleness thresholds scale with the refresh interval: one missed refresh
/// is still healthy, up to ten is degraded, beyond that (or no data at all)
/// is unhealthy.
fn determine_status(staleness_seconds: Option<i64>, refresh_interval_secs: u64) -> &'static str {
    let interval = i64::try_from(refresh_interval_secs).unwrap_or(i64::MAX);
    match staleness_seconds {
        None => "unhealthy",
        Some(s) if s <= interval.saturating_mul(2) => "healthy",
        Some(s) if s <= interval.saturating_mul(10) => "degraded",
        Some(_) => "unhealthy",
    }
}
