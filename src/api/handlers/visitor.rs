//! Handler for visitor counting.

use axum::{Json, extract::State};

use crate::api::dto::clicks::VisitorResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Counts one visitor.
///
/// # Endpoint
///
/// `POST /api/visitor`
///
/// The request body is ignored.
///
/// # Response
///
/// ```json
/// { "success": true, "visitors": 17 }
/// ```
pub async fn visitor_handler(
    State(state): State<AppState>,
) -> Result<Json<VisitorResponse>, AppError> {
    let visitors = state.visitor_service.record_visit().await?;

    Ok(Json(VisitorResponse::new(visitors)))
}
