//! # Click Analytics
//!
//! A small click and visitor analytics service built with Axum on top of an
//! eventually consistent key-value store (Redis in production).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the key-value contract and the typed event store
//! - **Application Layer** ([`application`]) - Click recording, visitor counting, stats aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory store backends
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Consistency
//!
//! The store offers `get`, `put` (with optional expiry) and prefix `list`,
//! nothing more. Counters are maintained by read-then-write and can lose
//! increments under concurrent writers; statistics are rebuilt on every
//! request by scanning retained clicks. Both are accepted trade-offs for an
//! approximate analytics feed.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickService, StatsService, VisitorService};
    pub use crate::domain::entities::{ClickEvent, RequestMetadata, RunningCounter, StatsSnapshot};
    pub use crate::domain::event_store::EventStore;
    pub use crate::domain::repositories::{KvStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
