//! Handler for aggregated statistics.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns statistics computed from the store.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "totalClicks": 75,
///   "totalVisitors": 100,
///   "uniqueIPs": 40,
///   "clickRate": 75,
///   "countries": { "BR": 30, "US": 10 },
///   "lastUpdate": "2025-03-01T12:00:00.000Z"
/// }
/// ```
///
/// # Caching
///
/// Every call rescans the store. The response carries
/// `Cache-Control: public, max-age=<STATS_CACHE_MAX_AGE>` so intermediaries
/// can absorb repeated reads.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.stats_service.snapshot().await?;

    let cache_control = HeaderValue::from_str(&format!(
        "public, max-age={}",
        state.stats_cache_max_age
    ))
    .map_err(|e| AppError::serialization(e.to_string()))?;

    Ok((
        [(header::CACHE_CONTROL, cache_control)],
        Json(StatsResponse::from(snapshot)),
    )
        .into_response())
}
