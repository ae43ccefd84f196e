//! HTTP middleware applied to every route.
//!
//! Provides cross-origin headers and request tracing.

pub mod cors;
pub mod tracing;
