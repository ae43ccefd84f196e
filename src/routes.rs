//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/click`   - Record a click
//! - `POST /api/visitor` - Count a visitor
//! - `GET  /api/stats`   - Aggregated statistics
//! - `OPTIONS *`         - CORS preflight, empty 200
//! - anything else       - 404 `Not found`
//!
//! # Middleware
//!
//! - **CORS** - Permissive headers on every response
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::fallback_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .fallback(fallback_handler)
        .with_state(state);

    cors::apply(router).layer(tracing::layer())
}
