//! Stats aggregation over stored clicks.

use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::domain::entities::{RunningCounter, StatsSnapshot, UNKNOWN};
use crate::domain::event_store::EventStore;
use crate::error::AppError;

/// Builds [`StatsSnapshot`]s by scanning every retained click.
///
/// Cost is linear in the number of retained events: one list call (paged by
/// the backend) plus one fetch per key. Nothing is maintained incrementally.
pub struct StatsService {
    store: EventStore,
}

impl StatsService {
    pub fn new(store: EventStore) -> Self {
        Self { store }
    }

    /// Computes a fresh snapshot.
    ///
    /// # Algorithm
    ///
    /// 1. List all click keys (eventually consistent, recent writes may be missing)
    /// 2. Fetch each click; skip absent keys, log and skip unreadable or
    ///    unparseable ones
    /// 3. Collect distinct origin addresses and per-country counts
    /// 4. Read both counters and derive visitors and click rate
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if listing or reading a counter fails, and
    /// [`AppError::CorruptCounter`] for a non-numeric counter. A click that
    /// cannot be fetched or parsed never fails the snapshot.
    pub async fn snapshot(&self) -> Result<StatsSnapshot, AppError> {
        let keys = self.store.click_keys().await?;

        let mut ips: HashSet<String> = HashSet::new();
        let mut countries: BTreeMap<String, u64> = BTreeMap::new();
        let mut skipped = 0u64;

        for key in &keys {
            let record = match self.store.get_click(key).await {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable click {}: {}", key, e);
                    skipped += 1;
                    continue;
                }
            };

            match record {
                Some(Ok(click)) => {
                    ips.insert(click.ip);
                    let country = if click.country.is_empty() {
                        UNKNOWN.to_string()
                    } else {
                        click.country
                    };
                    *countries.entry(country).or_insert(0) += 1;
                }
                Some(Err(e)) => {
                    warn!("Skipping unparseable click {}: {}", key, e);
                    skipped += 1;
                }
                None => debug!("Click {} vanished before it could be read", key),
            }
        }

        if skipped > 0 {
            metrics::counter!("stats_skipped_events_total").increment(skipped);
        }

        let total_clicks = self.store.read_counter(RunningCounter::TotalClicks).await?;
        let visitor_counter = self
            .store
            .read_counter(RunningCounter::TotalVisitors)
            .await?;

        metrics::counter!("stats_snapshots_total").increment(1);
        debug!(
            "Stats computed from {} keys ({} skipped, {} unique IPs)",
            keys.len(),
            skipped,
            ips.len()
        );

        Ok(StatsSnapshot::new(
            total_clicks,
            visitor_counter,
            ips.len() as u64,
            countries,
            Utc::now(),
        ))
    }

    /// Reads both running counters as stored, without the visitor fallback.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] or [`AppError::CorruptCounter`].
    pub async fn counters(&self) -> Result<(u64, u64), AppError> {
        let clicks = self.store.read_counter(RunningCounter::TotalClicks).await?;
        let visitors = self
            .store
            .read_counter(RunningCounter::TotalVisitors)
            .await?;
        Ok((clicks, visitors))
    }

    /// Checks if the underlying store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }
}
