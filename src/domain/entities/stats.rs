//! Aggregated statistics computed from the store on every request.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Click-to-visitor rate assumed when no visitor has been counted yet.
pub const ASSUMED_CLICK_RATE: f64 = 0.75;

/// A freshly computed, non-persisted view of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub total_clicks: u64,
    pub total_visitors: u64,
    pub unique_ips: u64,
    pub click_rate: u64,
    pub countries: BTreeMap<String, u64>,
    pub computed_at: DateTime<Utc>,
}

impl StatsSnapshot {
    /// Combines scanned aggregates with the running counters.
    ///
    /// A visitor counter of exactly zero is replaced by
    /// `round(total_clicks / 0.75)`.
    pub fn new(
        total_clicks: u64,
        visitor_counter: u64,
        unique_ips: u64,
        countries: BTreeMap<String, u64>,
        computed_at: DateTime<Utc>,
    ) -> Self {
        let total_visitors = if visitor_counter == 0 {
            estimate_visitors(total_clicks)
        } else {
            visitor_counter
        };

        Self {
            total_clicks,
            total_visitors,
            unique_ips,
            click_rate: click_rate(total_clicks, total_visitors),
            countries,
            computed_at,
        }
    }
}

/// Visitor estimate used before the visitor counter is first populated.
pub fn estimate_visitors(total_clicks: u64) -> u64 {
    (total_clicks as f64 / ASSUMED_CLICK_RATE).round() as u64
}

/// `round(100 * clicks / visitors)`, or 0 without visitors.
pub fn click_rate(total_clicks: u64, total_visitors: u64) -> u64 {
    if total_visitors == 0 {
        return 0;
    }
    (100.0 * total_clicks as f64 / total_visitors as f64).round() as u64
}
