//! Data Transfer Objects for API responses.
//!
//! Field names follow the JSON contract consumed by the site's front end.

pub mod clicks;
pub mod stats;
