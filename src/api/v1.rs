//! Services for the legacy IEX Trading API (v1).
//!
//! The legacy surface overlaps the cloud one but is not identical: no
//! token rides along, the host is fixed, and batch responses carry the
//! v1 news shape. Kept as an independent endpoint table rather than
//! unified behind a version parameter.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::client::{ClientInner, Endpoint, PathParams, QueryParams};
use crate::models::{
    BatchType, BatchV1Response, ChartRange, DeepBook, DeepSnapshot, DeepTrade, HistEntry,
    LastTrade, MarketVolume, Quote, SymbolInfo, SystemEvent, TopsEntry,
};
use crate::{Error, Result};

// Legacy endpoint table.
const TOPS: Endpoint<Vec<TopsEntry>> = Endpoint::get("tops");
const LAST: Endpoint<Vec<LastTrade>> = Endpoint::get("tops/last");
const HIST: Endpoint<HashMap<String, Vec<HistEntry>>> = Endpoint::get("hist");
const HIST_BY_DATE: Endpoint<Vec<HistEntry>> = Endpoint::get("hist");
const DEEP: Endpoint<DeepSnapshot> = Endpoint::get("deep");
const DEEP_BOOK: Endpoint<HashMap<String, DeepBook>> = Endpoint::get("deep/book");
const DEEP_TRADES: Endpoint<HashMap<String, Vec<DeepTrade>>> = Endpoint::get("deep/trades");
const DEEP_SYSTEM_EVENT: Endpoint<SystemEvent> = Endpoint::get("deep/system-event");
const MARKET_VOLUME: Endpoint<Vec<MarketVolume>> = Endpoint::get("market");
const QUOTE: Endpoint<Quote> = Endpoint::get("stock/[symbol]/quote");
const BATCH: Endpoint<BatchV1Response> = Endpoint::get("stock/[symbol]/batch");
const BATCH_MARKET: Endpoint<HashMap<String, BatchV1Response>> =
    Endpoint::get("stock/market/batch");
const SYMBOLS: Endpoint<Vec<SymbolInfo>> = Endpoint::get("ref-data/symbols");

/// Legacy IEX exchange-data service.
pub struct LegacyMarketService {
    inner: Arc<ClientInner>,
}

impl LegacyMarketService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get top-of-book entries for the given symbols; an empty slice
    /// falls back to the all-symbols form.
    pub async fn tops(&self, symbols: &[&str]) -> Result<Vec<TopsEntry>> {
        if symbols.is_empty() {
            return self.inner.execute_no_params(&TOPS).await;
        }
        self.inner.execute_for_symbols(&TOPS, symbols).await
    }

    /// Get last-sale prints for the given symbols; an empty slice falls
    /// back to the all-symbols form.
    pub async fn last(&self, symbols: &[&str]) -> Result<Vec<LastTrade>> {
        if symbols.is_empty() {
            return self.inner.execute_no_params(&LAST).await;
        }
        self.inner.execute_for_symbols(&LAST, symbols).await
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

    /// Get per-venue US market volume.
    pub async fn us_market_volume(&self) -> Result<Vec<MarketVolume>> {
        self.inner.execute_no_params(&MARKET_VOLUME).await
    }
}

/// Legacy stock service.
pub struct LegacyStockService {
    inner: Arc<ClientInner>,
}

impl LegacyStockService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the full quote for a symbol.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&QUOTE, &path, QueryParams::new()).await
    }

    /// Get multiple response sections for one symbol in a single call.
    ///
    /// Identical to the cloud batch except the news section arrives in
    /// the v1 shape. At least one type is required.
    pub async fn batch(
        &self,
        symbol: &str,
        types: &[BatchType],
        range: Option<ChartRange>,
        last: u8,
    ) -> Result<BatchV1Response> {
        if types.is_empty() {
            return Err(Error::InvalidInput(
                "at least one batch type is required".into(),
            ));
        }
        let path = PathParams::new().insert("symbol", symbol);
        let mut query = QueryParams::new();
        query.push("types", BatchType::join(types));
        if let Some(range) = range {
            query.push("range", range.as_wire());
        }
        query.push("last", last);
        self.inner.execute(&BATCH, &path, query).await
    }

    /// Get multiple response sections for multiple symbols, keyed by
    /// symbol. At least one symbol and one type are required.
    pub async fn batch_market(
        &self,
        symbols: &[&str],
        types: &[BatchType],
        range: Option<ChartRange>,
        last: u8,
    ) -> Result<HashMap<String, BatchV1Response>> {
        if symbols.is_empty() {
            return Err(Error::InvalidInput(
                "at least one symbol is required for a market batch".into(),
            ));
        }
        if types.is_empty() {
            return Err(Error::InvalidInput(
                "at least one batch type is required".into(),
            ));
        }
        let mut query = QueryParams::new();
        query.push("symbols", symbols.join(","));
        query.push("types", BatchType::join(types));
        if let Some(range) = range {
            query.push("range", range.as_wire());
        }
        query.push("last", last);
        self.inner
            .execute(&BATCH_MARKET, &PathParams::new(), query)
            .await
    }
}

/// Legacy reference data service.
pub struct LegacyReferenceService {
    inner: Arc<ClientInner>,
}

impl LegacyReferenceService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the directory of all supported symbols.
    pub async fn symbols(&self) -> Result<Vec<SymbolInfo>> {
        self.inner.execute_no_params(&SYMBOLS).await
    }
}
