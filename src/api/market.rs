//! IEX exchange-data service: TOPS, Last, DEEP, HIST, and market-wide
//! volume.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::client::{ClientInner, Endpoint, PathParams, QueryParams};
use crate::models::{
    Auction, DeepBook, DeepSnapshot, DeepTrade, HistEntry, LastTrade, MarketVolume, OfficialPrice,
    OpHaltStatus, SecurityEventEntry, SsrStatus, SystemEvent, TopsEntry, TradingStatus,
};
use crate::Result;

// Endpoint table.
const TOPS: Endpoint<Vec<TopsEntry>> = Endpoint::get("tops");
const LAST: Endpoint<Vec<LastTrade>> = Endpoint::get("tops/last");
const HIST: Endpoint<HashMap<String, Vec<HistEntry>>> = Endpoint::get("hist");
const HIST_BY_DATE: Endpoint<Vec<HistEntry>> = Endpoint::get("hist");
const DEEP: Endpoint<DeepSnapshot> = Endpoint::get("deep");
const DEEP_BOOK: Endpoint<HashMap<String, DeepBook>> = Endpoint::get("deep/book");
const DEEP_TRADES: Endpoint<HashMap<String, Vec<DeepTrade>>> = Endpoint::get("deep/trades");
const DEEP_SYSTEM_EVENT: Endpoint<SystemEvent> = Endpoint::get("deep/system-event");
const DEEP_TRADING_STATUS: Endpoint<HashMap<String, TradingStatus>> =
    Endpoint::get("deep/trading-status");
const DEEP_OP_HALT_STATUS: Endpoint<HashMap<String, OpHaltStatus>> =
    Endpoint::get("deep/op-halt-status");
const DEEP_SSR_STATUS: Endpoint<HashMap<String, SsrStatus>> = Endpoint::get("deep/ssr-status");
const DEEP_SECURITY_EVENT: Endpoint<HashMap<String, SecurityEventEntry>> =
    Endpoint::get("deep/security-event");
const DEEP_TRADE_BREAKS: Endpoint<HashMap<String, Vec<DeepTrade>>> =
    Endpoint::get("deep/trade-breaks");
const DEEP_AUCTION: Endpoint<HashMap<String, Auction>> = Endpoint::get("deep/auction");
const DEEP_OFFICIAL_PRICE: Endpoint<HashMap<String, OfficialPrice>> =
    Endpoint::get("deep/official-price");
const MARKET_VOLUME: Endpoint<Vec<MarketVolume>> = Endpoint::get("market");

/// Service for IEX exchange-data endpoints.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: iexcloud_rs::IexCloudClient) -> iexcloud_rs::Result<()> {
/// // Top of book for two symbols; case is preserved as given.
/// let tops = client.market().tops(&["aapl", "msft"]).await?;
/// for entry in &tops {
///     println!("{}: bid={:?} ask={:?}", entry.symbol, entry.bid_price, entry.ask_price);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MarketService {
    inner: Arc<ClientInner>,
}

impl MarketService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get top-of-book entries for the given symbols.
    ///
    /// An empty slice falls back to [`tops_all`](Self::tops_all); the
    /// endpoint supports both forms.
    pub async fn tops(&self, symbols: &[&str]) -> Result<Vec<TopsEntry>> {
        if symbols.is_empty() {
            return self.tops_all().await;
        }
        self.inner.execute_for_symbols(&TOPS, symbols).await
    }

    /// Get top-of-book entries for every IEX-listed symbol.
    pub async fn tops_all(&self) -> Result<Vec<TopsEntry>> {
        self.inner.execute_no_params(&TOPS).await
    }

    /// Get last-sale prints for the given symbols.
    ///
    /// An empty slice falls back to [`last_all`](Self::last_all); the
    /// endpoint supports both forms.
    pub async fn last(&self, symbols: &[&str]) -> Result<Vec<LastTrade>> {
        if symbols.is_empty() {
            return self.last_all().await;
        }
        self.inner.execute_for_symbols(&LAST, symbols).await
    }

    /// Get last-sale prints for every IEX-listed symbol.
    pub async fn last_all(&self) -> Result<Vec<LastTrade>> {
        self.inner.execute_no_params(&LAST).await
    }

    /// Get the full HIST download listing, keyed by date.
    pub async fn hist(&self) -> Result<HashMap<String, Vec<HistEntry>>> {
        self.inner.execute_no_params(&HIST).await
    }

    /// Get the HIST download listing for one trading date.
    pub async fn hist_by_date(&self, date: NaiveDate) -> Result<Vec<HistEntry>> {
        let mut query = QueryParams::new();
        query.push("date", date.format("%Y%m%d").to_string());
        self.inner
            .execute(&HIST_BY_DATE, &PathParams::new(), query)
            .await
    }

    /// Get the aggregated DEEP snapshot for one symbol.
    ///
    /// The feed serves one symbol per request; requires exactly that
    /// one symbol.
    pub async fn deep(&self, symbols: &[&str]) -> Result<DeepSnapshot> {
        self.inner.execute_for_symbols(&DEEP, symbols).await
    }

    /// Get the order book for the given symbols, keyed by symbol.
    pub async fn deep_book(&self, symbols: &[&str]) -> Result<HashMap<String, DeepBook>> {
        self.inner.execute_for_symbols(&DEEP_BOOK, symbols).await
    }

    /// Get recent trades for the given symbols, keyed by symbol.
    pub async fn deep_trades(&self, symbols: &[&str]) -> Result<HashMap<String, Vec<DeepTrade>>> {
        self.inner.execute_for_symbols(&DEEP_TRADES, symbols).await
    }

    /// Get the current market-wide system event state.
    pub async fn deep_system_event(&self) -> Result<SystemEvent> {
        self.inner.execute_no_params(&DEEP_SYSTEM_EVENT).await
    }

    /// Get trading status for the given symbols, keyed by symbol.
    pub async fn deep_trading_status(
        &self,
        symbols: &[&str],
    ) -> Result<HashMap<String, TradingStatus>> {
        self.inner
            .execute_for_symbols(&DEEP_TRADING_STATUS, symbols)
            .await
    }

    /// Get operational halt state for the given symbols, keyed by
    /// symbol.
    pub async fn deep_op_halt_status(
        &self,
        symbols: &[&str],
    ) -> Result<HashMap<String, OpHaltStatus>> {
        self.inner
            .execute_for_symbols(&DEEP_OP_HALT_STATUS, symbols)
            .await
    }

    /// Get short sale price test state for the given symbols, keyed by
    /// symbol.
    pub async fn deep_ssr_status(&self, symbols: &[&str]) -> Result<HashMap<String, SsrStatus>> {
        self.inner
            .execute_for_symbols(&DEEP_SSR_STATUS, symbols)
            .await
    }

    /// Get security event state for the given symbols, keyed by symbol.
    pub async fn deep_security_event(
        &self,
        symbols: &[&str],
    ) -> Result<HashMap<String, SecurityEventEntry>> {
        self.inner
            .execute_for_symbols(&DEEP_SECURITY_EVENT, symbols)
            .await
    }

    /// Get recent trade breaks for the given symbols, keyed by symbol.
    pub async fn deep_trade_breaks(
        &self,
        symbols: &[&str],
    ) -> Result<HashMap<String, Vec<DeepTrade>>> {
        self.inner
            .execute_for_symbols(&DEEP_TRADE_BREAKS, symbols)
            .await
    }

    /// Get auction state for the given symbols, keyed by symbol.
    pub async fn deep_auction(&self, symbols: &[&str]) -> Result<HashMap<String, Auction>> {
        self.inner.execute_for_symbols(&DEEP_AUCTION, symbols).await
    }

    /// Get the latest official price prints for the given symbols,
    /// keyed by symbol.
    pub async fn deep_official_price(
        &self,
        symbols: &[&str],
    ) -> Result<HashMap<String, OfficialPrice>> {
        self.inner
            .execute_for_symbols(&DEEP_OFFICIAL_PRICE, symbols)
            .await
    }

    /// Get per-venue US market volume.
    pub async fn us_market_volume(&self) -> Result<Vec<MarketVolume>> {
        self.inner.execute_no_params(&MARKET_VOLUME).await
    }
}
