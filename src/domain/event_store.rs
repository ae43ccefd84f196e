//! Typed access to click events and running counters.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{CLICK_KEY_PREFIX, ClickEvent, RunningCounter};
use crate::domain::repositories::{KvStore, StoreResult};
use crate::error::AppError;

/// Wraps a raw [`KvStore`] with the service's key layout and encodings.
///
/// Click events are JSON objects under `click_*` keys; counters are decimal
/// strings under [`RunningCounter::key`]. The two key families never
/// overlap.
#[derive(Clone)]
pub struct EventStore {
    store: Arc<dyn KvStore>,
}

impl EventStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Persists a click under `key`, expiring after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Serialization`] if the event cannot be encoded and
    /// [`AppError::Store`] if the write fails.
    pub async fn put_click(
        &self,
        key: &str,
        event: &ClickEvent,
        ttl: Duration,
    ) -> Result<(), AppError> {
        let value =
            serde_json::to_string(event).map_err(|e| AppError::serialization(e.to_string()))?;
        self.store.put(key, &value, Some(ttl)).await?;
        Ok(())
    }

    /// Lists the keys of all currently visible click events.
    pub async fn click_keys(&self) -> StoreResult<Vec<String>> {
        self.store.list(CLICK_KEY_PREFIX).await
    }

    /// Fetches and decodes one click.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` if the key is absent (for instance expired since listing)
    /// - `Ok(Some(Err(_)))` if the stored value is not a valid click record
    /// - `Ok(Some(Ok(event)))` otherwise
    pub async fn get_click(
        &self,
        key: &str,
    ) -> StoreResult<Option<Result<ClickEvent, serde_json::Error>>> {
        let raw = self.store.get(key).await?;
        Ok(raw.map(|value| serde_json::from_str(&value)))
    }

    /// Reads a counter; an absent key counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CorruptCounter`] if the stored value is not a
    /// non-negative integer.
    pub async fn read_counter(&self, counter: RunningCounter) -> Result<u64, AppError> {
        match self.store.get(counter.key()).await? {
            None => Ok(0),
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| AppError::CorruptCounter {
                    key: counter.key(),
                    value,
                }),
        }
    }

    /// Overwrites a counter with `value`. Counters never expire.
    pub async fn write_counter(&self, counter: RunningCounter, value: u64) -> StoreResult<()> {
        self.store
            .put(counter.key(), &value.to_string(), None)
            .await
    }

    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RequestMetadata;
    use crate::domain::repositories::{MockKvStore, StoreError};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn adapter(mock: MockKvStore) -> EventStore {
        EventStore::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_read_counter_absent_is_zero() {
        let mut mock = MockKvStore::new();
        mock.expect_get()
            .with(eq("total_clicks"))
            .times(1)
            .returning(|_| Ok(None));

        let value = adapter(mock)
            .read_counter(RunningCounter::TotalClicks)
            .await
            .unwrap();

        assert_eq!(value, 0);
    }

    #[tokio::test]
    async fn test_read_counter_parses_decimal() {
        let mut mock = MockKvStore::new();
        mock.expect_get()
            .returning(|_| Ok(Some("41".to_string())));

        let value = adapter(mock)
            .read_counter(RunningCounter::TotalVisitors)
            .await
            .unwrap();

        assert_eq!(value, 41);
    }

    #[tokio::test]
    async fn test_read_counter_rejects_garbage() {
        let mut mock = MockKvStore::new();
        mock.expect_get()
            .returning(|_| Ok(Some("NaN".to_string())));

        let result = adapter(mock).read_counter(RunningCounter::TotalClicks).await;

        assert!(matches!(
            result,
            Err(AppError::CorruptCounter { key: "total_clicks", .. })
        ));
    }

    #[tokio::test]
    async fn test_read_counter_rejects_negative() {
        let mut mock = MockKvStore::new();
        mock.expect_get()
            .returning(|_| Ok(Some("-3".to_string())));

        let result = adapter(mock).read_counter(RunningCounter::TotalClicks).await;

        assert!(matches!(result, Err(AppError::CorruptCounter { .. })));
    }

    #[tokio::test]
    async fn test_write_counter_has_no_ttl() {
        let mut mock = MockKvStore::new();
        mock.expect_put()
            .withf(|key, value, ttl| key == "total_visitors" && value == "7" && ttl.is_none())
            .times(1)
            .returning(|_, _, _| Ok(()));

        adapter(mock)
            .write_counter(RunningCounter::TotalVisitors, 7)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_put_click_uses_ttl() {
        let ttl = Duration::from_secs(60);
        let mut mock = MockKvStore::new();
        mock.expect_put()
            .withf(move |key, value, got| {
                key == "click_1_x" && value.contains("\"ip\":\"unknown\"") && *got == Some(ttl)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let event = ClickEvent::new(Default::default(), RequestMetadata::default(), Utc::now());
        adapter(mock).put_click("click_1_x", &event, ttl).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_click_reports_corrupt_record() {
        let mut mock = MockKvStore::new();
        mock.expect_get()
            .returning(|_| Ok(Some("{not json".to_string())));

        let result = adapter(mock).get_click("click_1_x").await.unwrap();

        assert!(matches!(result, Some(Err(_))));
    }

    #[tokio::test]
    async fn test_click_keys_lists_event_prefix() {
        let mut mock = MockKvStore::new();
        mock.expect_list()
            .with(eq("click_"))
            .times(1)
            .returning(|_| Ok(vec!["click_1_a".to_string()]));

        let keys = adapter(mock).click_keys().await.unwrap();

        assert_eq!(keys, vec!["click_1_a".to_string()]);
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut mock = MockKvStore::new();
        mock.expect_get()
            .returning(|_| Err(StoreError::Operation("timeout".to_string())));

        let result = adapter(mock).read_counter(RunningCounter::TotalClicks).await;

        assert!(matches!(result, Err(AppError::Store(_))));
    }
}
