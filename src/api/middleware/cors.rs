//! Permissive cross-origin headers.

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::set_header::SetResponseHeaderLayer;

/// Origins allowed to call the API.
pub const ALLOW_ORIGIN: &str = "*";
/// Methods advertised to browsers.
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
/// Request headers browsers may send.
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Attaches the CORS headers to every response of `router`.
///
/// Applied outermost so errors, 404s and preflight answers carry them too;
/// a cross-origin caller can always read why a request failed. Preflight
/// requests themselves are answered by
/// [`crate::api::handlers::fallback_handler`].
///
/// # Headers
///
/// ```text
/// Access-Control-Allow-Origin: *
/// Access-Control-Allow-Methods: GET, POST, OPTIONS
/// Access-Control-Allow-Headers: Content-Type
/// ```
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
}
