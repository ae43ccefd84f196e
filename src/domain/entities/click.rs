//! Click entity: one recorded click together with its request metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key prefix shared by every stored click event.
pub const CLICK_KEY_PREFIX: &str = "click_";

/// Placeholder used when the origin address or region is not known.
pub const UNKNOWN: &str = "unknown";

/// Field names injected by the recorder. Caller keys with these names are
/// overridden.
const RESERVED_FIELDS: [&str; 5] = ["ip", "country", "city", "timestamp", "edge"];

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Point-of-presence details attached by the edge in front of the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Request-derived inputs to a click. Every field is optional; missing
/// address and region become [`UNKNOWN`], missing edge fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    pub ip: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub colo: Option<String>,
    pub timezone: Option<String>,
}

/// A click as stored in the key-value store.
///
/// The caller payload is an open JSON object flattened into the record next
/// to the injected metadata, so the stored JSON looks like
/// `{"button": "cta", "ip": "1.2.3.4", "country": "BR", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    #[serde(default = "unknown")]
    pub ip: String,
    #[serde(default = "unknown")]
    pub country: String,
    #[serde(default = "unknown")]
    pub city: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, alias = "cfData")]
    pub edge: EdgeMetadata,
}

impl ClickEvent {
    /// Builds a click captured at `captured_at`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut payload = serde_json::Map::new();
    /// payload.insert("button".into(), "cta".into());
    ///
    /// let event = ClickEvent::new(payload, RequestMetadata::default(), Utc::now());
    /// assert_eq!(event.ip, "unknown");
    /// ```
    pub fn new(
        mut payload: Map<String, Value>,
        metadata: RequestMetadata,
        captured_at: DateTime<Utc>,
    ) -> Self {
        for field in RESERVED_FIELDS {
            payload.remove(field);
        }

        Self {
            payload,
            ip: metadata.ip.unwrap_or_else(unknown),
            country: metadata.country.unwrap_or_else(unknown),
            city: metadata.city.unwrap_or_else(unknown),
            timestamp: captured_at,
            edge: EdgeMetadata {
                colo: metadata.colo,
                timezone: metadata.timezone,
            },
        }
    }

    /// Storage key: capture instant in epoch milliseconds plus the sanitized
    /// origin address.
    ///
    /// Two clicks from one address within the same millisecond share a key.
    pub fn storage_key(&self) -> String {
        format!(
            "{}{}_{}",
            CLICK_KEY_PREFIX,
            self.timestamp.timestamp_millis(),
            sanitize_address(&self.ip)
        )
    }
}

/// Replaces address separators so the address can be embedded in a key.
pub fn sanitize_address(ip: &str) -> String {
    ip.replace(['.', ':'], "_")
}
