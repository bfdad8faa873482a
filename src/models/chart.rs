//! Historical chart bar models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One historical bar. Daily ranges carry `date`; the `1d` range carries
/// `minute` alongside the date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    /// Trading date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Minute label (`HH:MM`) for intraday bars
    #[serde(default)]
    pub minute: Option<String>,
    /// Open price
    #[serde(default)]
    pub open: Option<Decimal>,
    /// High price
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Low price
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Close price
    #[serde(default)]
    pub close: Option<Decimal>,
    /// Trading volume
    #[serde(default)]
    pub volume: Option<i64>,
    /// Change from previous bar
    #[serde(default)]
    pub change: Option<Decimal>,
    /// Percent change from previous bar
    #[serde(default)]
    pub change_percent: Option<Decimal>,
    /// Cumulative change over the requested range
    #[serde(default)]
    pub change_over_time: Option<Decimal>,
    /// Volume-weighted average price
    #[serde(default)]
    pub vwap: Option<Decimal>,
    /// Human-readable bar label
    #[serde(default)]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_daily_bar_fixture() {
        let bar: ChartBar = serde_json::from_str(
            r#"{
                "date": "2024-01-26",
                "open": 190.5,
                "high": 193.0,
                "low": 189.75,
                "close": 192.25,
                "volume": 44594012,
                "change": 2.0,
                "changePercent": 1.0514,
                "changeOverTime": 0.0375,
                "vwap": 191.88,
                "label": "Jan 26, 24"
            }"#,
        )
        .unwrap();
        assert_eq!(bar.date, Some(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()));
        assert_eq!(bar.close, Some(dec!(192.25)));
        assert_eq!(bar.volume, Some(44_594_012));
        assert!(bar.minute.is_none());
    }

    #[test]
    fn test_intraday_bar_has_minute() {
        let bar: ChartBar =
            serde_json::from_str(r#"{"date": "2024-01-26", "minute": "09:30", "close": 190.6}"#)
                .unwrap();
        assert_eq!(bar.minute.as_deref(), Some("09:30"));
    }
}
