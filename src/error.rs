//! Application error type and its HTTP mapping.
//!
//! Malformed request bodies and store failures are both reported as
//! `500 Internal Server Error` with a `{"error": "<message>"}` body. Callers
//! see the underlying message verbatim; the status does not distinguish the
//! two classes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body is not a JSON object.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A running counter holds something other than a non-negative integer.
    #[error("Counter '{key}' holds a non-numeric value: {value:?}")]
    CorruptCounter { key: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::NotFound = self {
            return (status, "Not found").into_response();
        }

        tracing::error!(error = %self, "Request failed");

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
