//! Click recording service.

use chrono::Utc;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info};

use crate::application::services::counter::increment_counter;
use crate::domain::entities::{ClickEvent, RequestMetadata, RunningCounter};
use crate::domain::event_store::EventStore;
use crate::error::AppError;

/// Default lifetime of a stored click.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(86_400 * 30);

/// Records clicks and advances the total-clicks counter.
pub struct ClickService {
    store: EventStore,
    retention: Duration,
}

impl ClickService {
    /// Creates a click service whose events expire after `retention`.
    pub fn new(store: EventStore, retention: Duration) -> Self {
        Self { store, retention }
    }

    /// Parses `body`, stores the click and increments `total_clicks`.
    ///
    /// Returns the counter value written by this request.
    ///
    /// The event write and the counter update are independent store calls:
    /// if the increment fails the event stays stored, and nothing is rolled
    /// back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidPayload`] if `body` is not a JSON object.
    /// Returns [`AppError::Store`] or [`AppError::CorruptCounter`] if a store
    /// step fails.
    pub async fn record_click(
        &self,
        body: &[u8],
        metadata: RequestMetadata,
    ) -> Result<u64, AppError> {
        let payload = parse_payload(body)?;

        let event = ClickEvent::new(payload, metadata, Utc::now());
        let key = event.storage_key();

        self.store.put_click(&key, &event, self.retention).await?;
        debug!("Stored click {}", key);

        let total = increment_counter(&self.store, RunningCounter::TotalClicks).await?;

        metrics::counter!("clicks_recorded_total").increment(1);
        info!(ip = %event.ip, country = %event.country, total, "Click recorded");

        Ok(total)
    }
}

/// Parses a request body into an open JSON object.
///
/// # Errors
///
/// Returns [`AppError::InvalidPayload`] with the parser message for invalid
/// JSON, and a type message for valid JSON that is not an object.
pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::invalid_payload(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(AppError::invalid_payload(e.to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
