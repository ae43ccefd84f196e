//! DTOs for click and visitor recording.

use serde::Serialize;

/// Response of `POST /api/click`.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub success: bool,
    /// Total clicks as written by this request.
    pub clicks: u64,
}

impl ClickResponse {
    pub fn new(clicks: u64) -> Self {
        Self {
            success: true,
            clicks,
        }
    }
}

/// Response of `POST /api/visitor`.
#[derive(Debug, Serialize)]
pub struct VisitorResponse {
    pub success: bool,
    /// Total visitors as written by this request.
    pub visitors: u64,
}

impl VisitorResponse {
    pub fn new(visitors: u64) -> Self {
        Self {
            success: true,
            visitors,
        }
    }
}
