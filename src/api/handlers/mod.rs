//! HTTP request handlers for API endpoints.

pub mod click;
pub mod fallback;
pub mod stats;
pub mod visitor;

pub use click::click_handler;
pub use fallback::fallback_handler;
pub use stats::stats_handler;
pub use visitor::visitor_handler;
