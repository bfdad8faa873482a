//! Quote, OHLC, book, and trade snapshot models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::market::{BookLevel, DeepTrade, SystemEvent};
use super::primitives::Symbol;

/// Full quote for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Trading symbol
    pub symbol: Symbol,
    /// Company name
    #[serde(default)]
    pub company_name: Option<String>,
    /// Listing exchange name
    #[serde(default)]
    pub primary_exchange: Option<String>,
    /// Source used to calculate `latest_price`
    #[serde(default)]
    pub calculation_price: Option<String>,
    /// Official open price
    #[serde(default)]
    pub open: Option<Decimal>,
    /// Official close price
    #[serde(default)]
    pub close: Option<Decimal>,
    /// Market-wide high
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Market-wide low
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Latest price from the source in `latest_source`
    #[serde(default)]
    pub latest_price: Option<Decimal>,
    /// Source of `latest_price`
    #[serde(default)]
    pub latest_source: Option<String>,
    /// Human-readable time of `latest_price`
    #[serde(default)]
    pub latest_time: Option<String>,
    /// Epoch milliseconds of `latest_price`
    #[serde(default)]
    pub latest_update: Option<i64>,
    /// Volume at `latest_price`
    #[serde(default)]
    pub latest_volume: Option<i64>,
    /// Latest IEX real-time price
    #[serde(default)]
    pub iex_realtime_price: Option<Decimal>,
    /// Size of the latest IEX trade
    #[serde(default)]
    pub iex_realtime_size: Option<i64>,
    /// Best IEX bid
    #[serde(default)]
    pub iex_bid_price: Option<Decimal>,
    /// Size of the best IEX bid
    #[serde(default)]
    pub iex_bid_size: Option<i64>,
    /// Best IEX ask
    #[serde(default)]
    pub iex_ask_price: Option<Decimal>,
    /// Size of the best IEX ask
    #[serde(default)]
    pub iex_ask_size: Option<i64>,
    /// 15-minute delayed price
    #[serde(default)]
    pub delayed_price: Option<Decimal>,
    /// Extended-hours price
    #[serde(default)]
    pub extended_price: Option<Decimal>,
    /// Previous trading day close
    #[serde(default)]
    pub previous_close: Option<Decimal>,
    /// Change from previous close
    #[serde(default)]
    pub change: Option<Decimal>,
    /// Percent change from previous close (as a ratio, e.g. `0.0156`)
    #[serde(default)]
    pub change_percent: Option<Decimal>,
    /// 30-day average volume
    #[serde(default)]
    pub avg_total_volume: Option<i64>,
    /// Market capitalization
    #[serde(default)]
    pub market_cap: Option<i64>,
    /// Price-to-earnings ratio
    #[serde(default)]
    pub pe_ratio: Option<Decimal>,
    /// 52-week high
    #[serde(default, rename = "week52High")]
    pub week_52_high: Option<Decimal>,
    /// 52-week low
    #[serde(default, rename = "week52Low")]
    pub week_52_low: Option<Decimal>,
    /// Year-to-date change (as a ratio)
    #[serde(default)]
    pub ytd_change: Option<Decimal>,
    /// Whether the US equity market is open
    #[serde(default, rename = "isUSMarketOpen")]
    pub is_us_market_open: Option<bool>,
}

impl Quote {
    /// Midpoint of the IEX bid/ask, if both sides are present.
    pub fn iex_midpoint(&self) -> Option<Decimal> {
        match (self.iex_bid_price, self.iex_ask_price) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }
}

/// 15-minute delayed market quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedQuote {
    /// Trading symbol
    pub symbol: Symbol,
    /// Delayed price
    #[serde(default)]
    pub delayed_price: Option<Decimal>,
    /// Size of the delayed trade
    #[serde(default)]
    pub delayed_size: Option<i64>,
    /// Delayed high
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Delayed low
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Total delayed volume
    #[serde(default)]
    pub total_volume: Option<i64>,
    /// Epoch milliseconds of the delayed price
    #[serde(default)]
    pub delayed_price_time: Option<i64>,
    /// Epoch milliseconds when the data was processed
    #[serde(default)]
    pub processed_time: Option<i64>,
}

/// One of the 15 largest trades of the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargestTrade {
    /// Trade price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Trade size
    #[serde(default)]
    pub size: Option<i64>,
    /// Epoch milliseconds of the trade
    #[serde(default)]
    pub time: Option<i64>,
    /// Human-readable trade time
    #[serde(default)]
    pub time_label: Option<String>,
    /// Venue identifier
    #[serde(default)]
    pub venue: Option<String>,
    /// Venue display name
    #[serde(default)]
    pub venue_name: Option<String>,
}

/// A price with the time it printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// The price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Epoch milliseconds of the price
    #[serde(default)]
    pub time: Option<i64>,
}

/// Official open/close with the day's range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ohlc {
    /// Official open
    #[serde(default)]
    pub open: Option<PricePoint>,
    /// Official close
    #[serde(default)]
    pub close: Option<PricePoint>,
    /// Day high
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Day low
    #[serde(default)]
    pub low: Option<Decimal>,
}

/// Previous trading day's adjusted bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousDay {
    /// Trading symbol
    pub symbol: Symbol,
    /// Trading date
    #[serde(default)]
    pub date: Option<NaiveDate>,
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
    /// Adjusted volume
    #[serde(default)]
    pub volume: Option<i64>,
    /// Unadjusted volume
    #[serde(default)]
    pub unadjusted_volume: Option<i64>,
    /// Change from the prior close
    #[serde(default)]
    pub change: Option<Decimal>,
    /// Percent change from the prior close
    #[serde(default)]
    pub change_percent: Option<Decimal>,
    /// Volume-weighted average price
    #[serde(default)]
    pub vwap: Option<Decimal>,
}

/// Quote plus IEX order book and recent trades for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Latest quote
    #[serde(default)]
    pub quote: Option<Quote>,
    /// Bid side of the IEX book
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    /// Ask side of the IEX book
    #[serde(default)]
    pub asks: Vec<BookLevel>,
    /// Recent IEX trades
    #[serde(default)]
    pub trades: Vec<DeepTrade>,
    /// Current system event state
    #[serde(default)]
    pub system_event: Option<SystemEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const QUOTE_FIXTURE: &str = r#"{
        "symbol": "AAPL",
        "companyName": "Apple Inc.",
        "primaryExchange": "NASDAQ",
        "calculationPrice": "close",
        "open": 190.5,
        "close": 192.25,
        "high": 193.0,
        "low": 189.75,
        "latestPrice": 192.25,
        "latestSource": "Close",
        "latestTime": "4:00:00 PM",
        "latestUpdate": 1706302800000,
        "latestVolume": 58499129,
        "iexBidPrice": 192.0,
        "iexBidSize": 100,
        "iexAskPrice": 192.5,
        "iexAskSize": 200,
        "previousClose": 190.25,
        "change": 2.0,
        "changePercent": 0.0105,
        "avgTotalVolume": 54930125,
        "marketCap": 2953679522680,
        "peRatio": 29.5,
        "week52High": 199.62,
        "week52Low": 164.08,
        "ytdChange": 0.0375,
        "isUSMarketOpen": false
    }"#;

    #[test]
    fn test_quote_fixture_roundtrip() {
        let quote: Quote = serde_json::from_str(QUOTE_FIXTURE).unwrap();
        assert_eq!(quote.symbol, Symbol::new("AAPL"));
        assert_eq!(quote.company_name.as_deref(), Some("Apple Inc."));
        assert_eq!(quote.latest_price, Some(dec!(192.25)));
        assert_eq!(quote.latest_update, Some(1_706_302_800_000));
        assert_eq!(quote.latest_volume, Some(58_499_129));
        assert_eq!(quote.change, Some(dec!(2.0)));
        assert_eq!(quote.week_52_high, Some(dec!(199.62)));
        assert_eq!(quote.market_cap, Some(2_953_679_522_680));
        assert_eq!(quote.is_us_market_open, Some(false));
    }

    #[test]
    fn test_quote_midpoint() {
        let quote: Quote = serde_json::from_str(QUOTE_FIXTURE).unwrap();
        assert_eq!(quote.iex_midpoint(), Some(dec!(192.25)));
    }

    #[test]
    fn test_quote_missing_fields_default_to_none() {
        let quote: Quote = serde_json::from_str(r#"{"symbol": "XYZ"}"#).unwrap();
        assert_eq!(quote.symbol, Symbol::new("XYZ"));
        assert!(quote.latest_price.is_none());
        assert!(quote.iex_midpoint().is_none());
    }

    #[test]
    fn test_ohlc_fixture() {
        let ohlc: Ohlc = serde_json::from_str(
            r#"{
                "open": {"price": 190.5, "time": 1706281800000},
                "close": {"price": 192.25, "time": 1706305200000},
                "high": 193.0,
                "low": 189.75
            }"#,
        )
        .unwrap();
        assert_eq!(ohlc.open.unwrap().price, Some(dec!(190.5)));
        assert_eq!(ohlc.close.unwrap().time, Some(1_706_305_200_000));
        assert_eq!(ohlc.high, Some(dec!(193.0)));
    }

    #[test]
    fn test_previous_day_date_parses() {
        let prev: PreviousDay = serde_json::from_str(
            r#"{"symbol": "aapl", "date": "2024-01-26", "close": 192.25, "volume": 44594012}"#,
        )
        .unwrap();
        assert_eq!(
            prev.date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap())
        );
        assert_eq!(prev.close, Some(dec!(192.25)));
    }
}
