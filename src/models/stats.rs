//! Key stats models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key stats for a symbol.
///
/// The wire contract lowercases several multi-word field names
/// (`marketcap`, `week52high`), so those carry explicit renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
    /// Company name
    #[serde(default)]
    pub company_name: Option<String>,
    /// Market capitalization
    #[serde(default, rename = "marketcap")]
    pub market_cap: Option<i64>,
    /// 52-week high
    #[serde(default, rename = "week52high")]
    pub week_52_high: Option<Decimal>,
    /// 52-week low
    #[serde(default, rename = "week52low")]
    pub week_52_low: Option<Decimal>,
    /// 52-week change (as a ratio)
    #[serde(default, rename = "week52change")]
    pub week_52_change: Option<Decimal>,
    /// Shares outstanding
    #[serde(default)]
    pub shares_outstanding: Option<i64>,
    /// Public float
    #[serde(default)]
    pub float: Option<i64>,
    /// 10-day average volume
    #[serde(default, rename = "avg10Volume")]
    pub avg_10_volume: Option<i64>,
    /// 30-day average volume
    #[serde(default, rename = "avg30Volume")]
    pub avg_30_volume: Option<i64>,
    /// 200-day moving average
    #[serde(default, rename = "day200MovingAvg")]
    pub day_200_moving_avg: Option<Decimal>,
    /// 50-day moving average
    #[serde(default, rename = "day50MovingAvg")]
    pub day_50_moving_avg: Option<Decimal>,
    /// Number of employees
    #[serde(default)]
    pub employees: Option<i64>,
    /// Trailing twelve-month earnings per share
    #[serde(default, rename = "ttmEPS")]
    pub ttm_eps: Option<Decimal>,
    /// Trailing twelve-month dividend rate
    #[serde(default)]
    pub ttm_dividend_rate: Option<Decimal>,
    /// Dividend yield (as a ratio)
    #[serde(default)]
    pub dividend_yield: Option<Decimal>,
    /// Next dividend date
    #[serde(default)]
    pub next_dividend_date: Option<NaiveDate>,
    /// Last ex-dividend date
    #[serde(default)]
    pub ex_dividend_date: Option<NaiveDate>,
    /// Next earnings date
    #[serde(default)]
    pub next_earnings_date: Option<NaiveDate>,
    /// Price-to-earnings ratio
    #[serde(default)]
    pub pe_ratio: Option<Decimal>,
    /// Beta versus the market
    #[serde(default)]
    pub beta: Option<Decimal>,
    /// Maximum change over available history (as a ratio)
    #[serde(default)]
    pub max_change_percent: Option<Decimal>,
    /// Five-year change (as a ratio)
    #[serde(default, rename = "year5ChangePercent")]
    pub year_5_change_percent: Option<Decimal>,
    /// Two-year change (as a ratio)
    #[serde(default, rename = "year2ChangePercent")]
    pub year_2_change_percent: Option<Decimal>,
    /// One-year change (as a ratio)
    #[serde(default, rename = "year1ChangePercent")]
    pub year_1_change_percent: Option<Decimal>,
    /// Year-to-date change (as a ratio)
    #[serde(default)]
    pub ytd_change_percent: Option<Decimal>,
    /// Six-month change (as a ratio)
    #[serde(default, rename = "month6ChangePercent")]
    pub month_6_change_percent: Option<Decimal>,
    /// Three-month change (as a ratio)
    #[serde(default, rename = "month3ChangePercent")]
    pub month_3_change_percent: Option<Decimal>,
    /// One-month change (as a ratio)
    #[serde(default, rename = "month1ChangePercent")]
    pub month_1_change_percent: Option<Decimal>,
    /// 30-day change (as a ratio)
    #[serde(default, rename = "day30ChangePercent")]
    pub day_30_change_percent: Option<Decimal>,
    /// Five-day change (as a ratio)
    #[serde(default, rename = "day5ChangePercent")]
    pub day_5_change_percent: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_key_stats_lowercased_wire_names() {
        let stats: KeyStats = serde_json::from_str(
            r#"{
                "companyName": "Apple Inc.",
                "marketcap": 2953679522680,
                "week52high": 199.62,
                "week52low": 164.08,
                "week52change": 0.1724,
                "sharesOutstanding": 15441881000,
                "float": 15424358000,
                "avg10Volume": 51422151,
                "avg30Volume": 54930125,
                "day200MovingAvg": 182.45,
                "day50MovingAvg": 190.11,
                "employees": 164000,
                "ttmEPS": 6.43,
                "ttmDividendRate": 0.95,
                "dividendYield": 0.0049,
                "exDividendDate": "2024-02-09",
                "nextEarningsDate": "2024-05-02",
                "peRatio": 29.5,
                "beta": 1.28
            }"#,
        )
        .unwrap();
        assert_eq!(stats.market_cap, Some(2_953_679_522_680));
        assert_eq!(stats.week_52_high, Some(dec!(199.62)));
        assert_eq!(stats.avg_10_volume, Some(51_422_151));
        assert_eq!(stats.ttm_eps, Some(dec!(6.43)));
        assert_eq!(
            stats.ex_dividend_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap())
        );
    }
}
