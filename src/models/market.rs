//! TOPS, Last, DEEP, and HIST exchange-data models.
//!
//! These mirror the IEX exchange's own data products: top-of-book
//! aggregates, last-sale prints, full depth-of-book state, and pcap
//! download listings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::Symbol;

/// Top-of-book entry for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopsEntry {
    /// Trading symbol
    pub symbol: Symbol,
    /// IEX share of market-wide volume (as a ratio)
    #[serde(default)]
    pub market_percent: Option<Decimal>,
    /// Aggregated best bid size
    #[serde(default)]
    pub bid_size: Option<i64>,
    /// Best bid price
    #[serde(default)]
    pub bid_price: Option<Decimal>,
    /// Aggregated best ask size
    #[serde(default)]
    pub ask_size: Option<i64>,
    /// Best ask price
    #[serde(default)]
    pub ask_price: Option<Decimal>,
    /// Shares traded on IEX today
    #[serde(default)]
    pub volume: Option<i64>,
    /// Last sale price
    #[serde(default)]
    pub last_sale_price: Option<Decimal>,
    /// Last sale size
    #[serde(default)]
    pub last_sale_size: Option<i64>,
    /// Epoch milliseconds of the last sale
    #[serde(default)]
    pub last_sale_time: Option<i64>,
    /// Epoch milliseconds of the last book update
    #[serde(default)]
    pub last_updated: Option<i64>,
    /// Sector classification
    #[serde(default)]
    pub sector: Option<String>,
    /// Security type code
    #[serde(default)]
    pub security_type: Option<String>,
}

/// Last-sale print for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTrade {
    /// Trading symbol
    pub symbol: Symbol,
    /// Trade price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Trade size
    #[serde(default)]
    pub size: Option<i64>,
    /// Epoch milliseconds of the trade
    #[serde(default)]
    pub time: Option<i64>,
}

/// One downloadable HIST pcap file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistEntry {
    /// Download link
    #[serde(default)]
    pub link: Option<String>,
    /// Trading date the capture covers
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Feed name (`TOPS`, `DEEP`)
    #[serde(default)]
    pub feed: Option<String>,
    /// Feed specification version
    #[serde(default)]
    pub version: Option<String>,
    /// Transport protocol of the capture
    #[serde(default)]
    pub protocol: Option<String>,
    /// File size in bytes, as reported
    #[serde(default)]
    pub size: Option<String>,
}

/// Market-wide system event state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEvent {
    /// System event code (`O` start of messages, `S` start of system
    /// hours, `R` start of regular hours, ...)
    #[serde(default)]
    pub system_event: Option<String>,
    /// Epoch milliseconds of the event
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// One price level of the IEX order book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookLevel {
    /// Level price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Aggregated size at the level
    #[serde(default)]
    pub size: Option<i64>,
    /// Epoch milliseconds of the last level update
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Both sides of the IEX order book for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepBook {
    /// Bid side, best first
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    /// Ask side, best first
    #[serde(default)]
    pub asks: Vec<BookLevel>,
}

/// One trade report from the DEEP feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepTrade {
    /// Trade price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Trade size
    #[serde(default)]
    pub size: Option<i64>,
    /// IEX trade identifier
    #[serde(default)]
    pub trade_id: Option<i64>,
    /// Intermarket sweep order
    #[serde(default, rename = "isISO")]
    pub is_iso: Option<bool>,
    /// Odd-lot trade
    #[serde(default)]
    pub is_odd_lot: Option<bool>,
    /// Executed outside regular hours
    #[serde(default)]
    pub is_outside_regular_hours: Option<bool>,
    /// Single-price cross execution
    #[serde(default)]
    pub is_single_price_cross: Option<bool>,
    /// Trade-through exempt
    #[serde(default)]
    pub is_trade_through_exempt: Option<bool>,
    /// Epoch milliseconds of the trade
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Trading status of a symbol on IEX.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingStatus {
    /// Status code (`H` halted, `T` trading, ...)
    #[serde(default)]
    pub status: Option<String>,
    /// Reason code for the status
    #[serde(default)]
    pub reason: Option<String>,
    /// Epoch milliseconds of the status change
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Operational halt state of a symbol on IEX.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpHaltStatus {
    /// Whether the symbol is operationally halted
    #[serde(default)]
    pub is_halted: Option<bool>,
    /// Epoch milliseconds of the state change
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Short sale price test state of a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsrStatus {
    /// Whether the short sale price test is in effect
    #[serde(default, rename = "isSSR")]
    pub is_ssr: Option<bool>,
    /// Activation detail code
    #[serde(default)]
    pub detail: Option<String>,
    /// Epoch milliseconds of the state change
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Security event state of a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEventEntry {
    /// Security event code (`MarketOpen`, `MarketClose`)
    #[serde(default)]
    pub security_event: Option<String>,
    /// Epoch milliseconds of the event
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Auction information for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    /// Auction type (`Open`, `Close`, `Halt`, `Volatility`, `IPO`)
    #[serde(default)]
    pub auction_type: Option<String>,
    /// Price at which interest is currently paired
    #[serde(default)]
    pub pairing_price: Option<Decimal>,
    /// Shares paired at the pairing price
    #[serde(default)]
    pub paired_shares: Option<i64>,
    /// Imbalance shares
    #[serde(default)]
    pub imbalance_shares: Option<i64>,
    /// Reference price used for collars
    #[serde(default)]
    pub reference_price: Option<Decimal>,
    /// Clearing price at or within collars
    #[serde(default)]
    pub indicative_price: Option<Decimal>,
    /// Book clearing price
    #[serde(default)]
    pub auction_book_price: Option<Decimal>,
    /// Lower auction collar
    #[serde(default)]
    pub lower_collar_price: Option<Decimal>,
    /// Upper auction collar
    #[serde(default)]
    pub upper_collar_price: Option<Decimal>,
    /// Number of extensions so far
    #[serde(default)]
    pub extension_number: Option<i64>,
    /// Scheduled auction start time (`HH:MM:SS`)
    #[serde(default)]
    pub start_time: Option<String>,
    /// Epoch milliseconds of the last update
    #[serde(default)]
    pub last_update: Option<i64>,
}

/// Official opening or closing price from the DEEP feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialPrice {
    /// Price type (`Open` or `Close`)
    #[serde(default)]
    pub price_type: Option<String>,
    /// The official price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Epoch milliseconds of the print
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Aggregated DEEP snapshot for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepSnapshot {
    /// Trading symbol
    pub symbol: Symbol,
    /// IEX share of market-wide volume (as a ratio)
    #[serde(default)]
    pub market_percent: Option<Decimal>,
    /// Shares traded on IEX today
    #[serde(default)]
    pub volume: Option<i64>,
    /// Last sale price
    #[serde(default)]
    pub last_sale_price: Option<Decimal>,
    /// Last sale size
    #[serde(default)]
    pub last_sale_size: Option<i64>,
    /// Epoch milliseconds of the last sale
    #[serde(default)]
    pub last_sale_time: Option<i64>,
    /// Epoch milliseconds of the last update
    #[serde(default)]
    pub last_updated: Option<i64>,
    /// Bid side of the book
    #[serde(default)]
    pub bids: Vec<BookLevel>,
    /// Ask side of the book
    #[serde(default)]
    pub asks: Vec<BookLevel>,
    /// Current system event state
    #[serde(default)]
    pub system_event: Option<SystemEvent>,
    /// Current trading status
    #[serde(default)]
    pub trading_status: Option<TradingStatus>,
    /// Current operational halt state
    #[serde(default)]
    pub op_halt_status: Option<OpHaltStatus>,
    /// Current short sale price test state
    #[serde(default)]
    pub ssr_status: Option<SsrStatus>,
    /// Current security event state
    #[serde(default)]
    pub security_event: Option<SecurityEventEntry>,
    /// Recent trades
    #[serde(default)]
    pub trades: Vec<DeepTrade>,
    /// Recent trade breaks
    #[serde(default)]
    pub trade_breaks: Vec<DeepTrade>,
    /// Current auction state
    #[serde(default)]
    pub auction: Option<Auction>,
    /// Latest official price print
    #[serde(default)]
    pub official_price: Option<OfficialPrice>,
}

/// One venue's share of US market volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketVolume {
    /// Market identifier code
    #[serde(default)]
    pub mic: Option<String>,
    /// Tape identifier
    #[serde(default)]
    pub tape_id: Option<String>,
    /// Venue display name
    #[serde(default)]
    pub venue_name: Option<String>,
    /// Shares traded at the venue
    #[serde(default)]
    pub volume: Option<i64>,
    /// Tape A volume
    #[serde(default)]
    pub tape_a: Option<i64>,
    /// Tape B volume
    #[serde(default)]
    pub tape_b: Option<i64>,
    /// Tape C volume
    #[serde(default)]
    pub tape_c: Option<i64>,
    /// Venue share of market-wide volume (as a ratio)
    #[serde(default)]
    pub market_percent: Option<Decimal>,
    /// Epoch milliseconds of the last update
    #[serde(default)]
    pub last_updated: Option<i64>,
}

/// Performance of one market sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPerformance {
    /// Record type, always `sector`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Sector name
    #[serde(default)]
    pub name: Option<String>,
    /// Performance ratio for the session
    #[serde(default)]
    pub performance: Option<Decimal>,
    /// Epoch milliseconds of the last update
    #[serde(default)]
    pub last_updated: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tops_fixture_preserves_order_and_case() {
        let entries: Vec<TopsEntry> = serde_json::from_str(
            r#"[
                {"symbol": "aapl", "bidPrice": 192.0, "bidSize": 100, "askPrice": 192.5,
                 "askSize": 200, "lastSalePrice": 192.25, "volume": 1204325,
                 "marketPercent": 0.0305, "lastUpdated": 1706302800000},
                {"symbol": "msft", "bidPrice": 402.1, "bidSize": 300, "askPrice": 402.4,
                 "askSize": 100, "lastSalePrice": 402.25, "volume": 845120}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].symbol, Symbol::new("aapl"));
        assert_eq!(entries[1].symbol, Symbol::new("msft"));
        assert_eq!(entries[0].bid_price, Some(dec!(192.0)));
        assert_eq!(entries[1].volume, Some(845_120));
    }

    #[test]
    fn test_deep_snapshot_fixture() {
        let deep: DeepSnapshot = serde_json::from_str(
            r#"{
                "symbol": "SNAP",
                "marketPercent": 0.00901,
                "volume": 7337619,
                "lastSalePrice": 13.04,
                "lastSaleSize": 100,
                "lastSaleTime": 1494446394043,
                "lastUpdated": 1494446706714,
                "bids": [{"price": 13.03, "size": 200, "timestamp": 1494446706714}],
                "asks": [],
                "systemEvent": {"systemEvent": "R", "timestamp": 1494443400000},
                "tradingStatus": {"status": "T", "reason": "NA", "timestamp": 1494443400193},
                "opHaltStatus": {"isHalted": false, "timestamp": 1494443400193},
                "ssrStatus": {"isSSR": true, "detail": "N", "timestamp": 1494443400193},
                "securityEvent": {"securityEvent": "MarketOpen", "timestamp": 1494441000000},
                "trades": [{"price": 13.04, "size": 100, "tradeId": 455367510,
                            "isISO": false, "isOddLot": false, "timestamp": 1494446394043}]
            }"#,
        )
        .unwrap();
        assert_eq!(deep.symbol, Symbol::new("SNAP"));
        assert_eq!(deep.bids.len(), 1);
        assert!(deep.asks.is_empty());
        assert_eq!(deep.ssr_status.unwrap().is_ssr, Some(true));
        assert_eq!(deep.trades[0].trade_id, Some(455_367_510));
        assert!(deep.auction.is_none());
    }

    #[test]
    fn test_hist_entry_date() {
        let entry: HistEntry = serde_json::from_str(
            r#"{"link": "https://example.com/hist.pcap.gz", "date": "2017-05-15",
                "feed": "TOPS", "version": "1.5", "protocol": "IEXTP1", "size": "4914233"}"#,
        )
        .unwrap();
        assert_eq!(
            entry.date,
            Some(NaiveDate::from_ymd_opt(2017, 5, 15).unwrap())
        );
        assert_eq!(entry.feed.as_deref(), Some("TOPS"));
    }

    #[test]
    fn test_market_volume_fixture() {
        let venues: Vec<MarketVolume> = serde_json::from_str(
            r#"[{"mic": "XNYS", "tapeId": "N", "venueName": "NYSE",
                 "volume": 505656791, "marketPercent": 0.1212, "lastUpdated": 1480433817317}]"#,
        )
        .unwrap();
        assert_eq!(venues[0].mic.as_deref(), Some("XNYS"));
        assert_eq!(venues[0].market_percent, Some(dec!(0.1212)));
    }
}
