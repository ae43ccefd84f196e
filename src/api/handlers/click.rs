//! Handler for click recording.

use axum::{
    Json,
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{Extensions, HeaderMap},
};
use std::net::SocketAddr;

use crate::api::dto::clicks::ClickResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_metadata::extract_request_metadata;

/// Records one click.
///
/// # Endpoint
///
/// `POST /api/click`
///
/// # Request Body
///
/// Any JSON object. Its fields are stored as-is next to the injected
/// `ip`, `country`, `city`, `timestamp` and `edge` fields.
///
/// # Response
///
/// ```json
/// { "success": true, "clicks": 42 }
/// ```
///
/// # Errors
///
/// Returns 500 with `{"error": "..."}` if the body is not a JSON object or a
/// store call fails.
pub async fn click_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    body: Bytes,
) -> Result<Json<ClickResponse>, AppError> {
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let metadata = extract_request_metadata(&headers, peer, state.behind_proxy);

    let clicks = state.click_service.record_click(&body, metadata).await?;

    Ok(Json(ClickResponse::new(clicks)))
}
