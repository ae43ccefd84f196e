//! Domain layer containing entities, storage contracts and the event store.
//!
//! # Architecture
//!
//! - [`entities`] - Click events, running counters and stats snapshots
//! - [`repositories`] - The key-value capability the service runs on
//! - [`event_store`] - Typed adapter mapping entities onto store keys
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Store backends implement [`repositories::KvStore`] in the infrastructure layer
//! - Business operations live in services (see [`crate::application::services`])
//!
//! # Key Layout
//!
//! | Key | Value | Expiry |
//! |-----|-------|--------|
//! | `click_<millis>_<ip>` | click event JSON | retention window |
//! | `total_clicks` | decimal string | never |
//! | `total_visitors` | decimal string | never |

pub mod entities;
pub mod event_store;
pub mod repositories;
