//! Application layer services implementing business logic.
//!
//! Services work against [`crate::domain::event_store::EventStore`] and
//! expose the operations HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::click_service::ClickService`] - Click recording
//! - [`services::visitor_service::VisitorService`] - Visitor counting
//! - [`services::stats_service::StatsService`] - Stats aggregation
//! - [`services::counter`] - Shared read-then-write counter increment

pub mod services;
