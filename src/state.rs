//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ClickService, StatsService, VisitorService};
use crate::config::Config;
use crate::domain::event_store::EventStore;
use crate::domain::repositories::KvStore;

/// State cloned into every request.
///
/// Holds no mutable data: every counter and event lives in the store.
#[derive(Clone)]
pub struct AppState {
    pub click_service: Arc<ClickService>,
    pub visitor_service: Arc<VisitorService>,
    pub stats_service: Arc<StatsService>,
    /// Trust proxy headers for the client address.
    pub behind_proxy: bool,
    /// `max-age` sent with stats responses.
    pub stats_cache_max_age: u64,
}

impl AppState {
    /// Wires every service onto one shared store.
    pub fn new(
        store: Arc<dyn KvStore>,
        retention: Duration,
        behind_proxy: bool,
        stats_cache_max_age: u64,
    ) -> Self {
        let events = EventStore::new(store);

        Self {
            click_service: Arc::new(ClickService::new(events.clone(), retention)),
            visitor_service: Arc::new(VisitorService::new(events.clone())),
            stats_service: Arc::new(StatsService::new(events)),
            behind_proxy,
            stats_cache_max_age,
        }
    }

    /// Builds state from loaded configuration.
    pub fn from_config(store: Arc<dyn KvStore>, config: &Config) -> Self {
        Self::new(
            store,
            config.click_retention(),
            config.behind_proxy,
            config.stats_cache_max_age,
        )
    }
}
