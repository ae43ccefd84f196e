//! Visitor counting service.

use tracing::info;

use crate::application::services::counter::increment_counter;
use crate::domain::entities::RunningCounter;
use crate::domain::event_store::EventStore;
use crate::error::AppError;

/// Advances the total-visitors counter. No per-visit record is stored.
pub struct VisitorService {
    store: EventStore,
}

impl VisitorService {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }

    /// Increments `total_visitors` and returns the value written.
    ///
    /// Shares the lost-update behaviour of [`increment_counter`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] or [`AppError::CorruptCounter`].
    pub async fn record_visit(&self) -> Result<u64, AppError> {
        let total = increment_counter(&self.store, RunningCounter::TotalVisitors).await?;

        metrics::counter!("visits_recorded_total").increment(1);
        info!(total, "Visit recorded");

        Ok(total)
    }
}
