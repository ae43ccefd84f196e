//! Business logic services for the application layer.

pub mod click_service;
pub mod counter;
pub mod stats_service;
pub mod visitor_service;

pub use click_service::ClickService;
pub use counter::increment_counter;
pub use stats_service::StatsService;
pub use visitor_service::VisitorService;
