//! Handler for preflight requests and unknown routes.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Answers `OPTIONS` on any path with an empty 200 and everything else with
/// 404 `Not found`.
///
/// Used as the router fallback and as the method fallback of every API
/// route, so a wrong method on a known path is also a 404.
pub async fn fallback_handler(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        AppError::NotFound.into_response()
    }
}
