//! DTO for aggregated statistics.

use chrono::SecondsFormat;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::StatsSnapshot;

/// Response of `GET /api/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: u64,
    pub total_visitors: u64,
    #[serde(rename = "uniqueIPs")]
    pub unique_ips: u64,
    pub click_rate: u64,
    pub countries: BTreeMap<String, u64>,
    /// RFC 3339 with millisecond precision, e.g. `2025-03-01T12:00:00.000Z`.
    pub last_update: String,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            total_clicks: snapshot.total_clicks,
            total_visitors: snapshot.total_visitors,
            unique_ips: snapshot.unique_ips,
            click_rate: snapshot.click_rate,
            countries: snapshot.countries,
            last_update: snapshot
                .computed_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let mut countries = BTreeMap::new();
        countries.insert("BR".to_string(), 2);

        let snapshot = StatsSnapshot::new(
            3,
            4,
            2,
            countries,
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        );

        let body = serde_json::to_value(StatsResponse::from(snapshot)).unwrap();

        assert_eq!(
            body,
            json!({
                "totalClicks": 3,
                "totalVisitors": 4,
                "uniqueIPs": 2,
                "clickRate": 75,
                "countries": {"BR": 2},
                "lastUpdate": "2025-03-01T12:00:00.000Z"
            })
        );
    }
}
