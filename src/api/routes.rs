//! API route configuration.

use crate::api::handlers::{click_handler, fallback_handler, stats_handler, visitor_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None of them require authentication.
///
/// # Endpoints
///
/// - `POST /click`   - Record a click
/// - `POST /visitor` - Count a visitor
/// - `GET  /stats`   - Aggregated statistics
///
/// Any other method on these paths falls through to
/// [`fallback_handler`]: `OPTIONS` gets an empty 200, the rest a 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/click", post(click_handler).fallback(fallback_handler))
        .route("/visitor", post(visitor_handler).fallback(fallback_handler))
        .route("/stats", get(stats_handler).fallback(fallback_handler))
}
