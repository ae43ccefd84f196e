//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ClickEvent`] - A recorded click with its request metadata
//! - [`RunningCounter`] - The two named running totals
//! - [`StatsSnapshot`] - Aggregates derived from the store, never persisted

pub mod click;
pub mod counter;
pub mod stats;

pub use click::{
    CLICK_KEY_PREFIX, ClickEvent, EdgeMetadata, RequestMetadata, UNKNOWN, sanitize_address,
};
pub use counter::RunningCounter;
pub use stats::StatsSnapshot;
