//! Stock service: quotes, fundamentals, corporate actions, and batch
//! calls for individual symbols.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::client::{ClientInner, Endpoint, PathParams, QueryParams};
use crate::models::{
    BalanceSheetResponse, BatchResponse, BatchType, Book, ChartBar, ChartRange, CashFlowResponse,
    CollectionType, Company, DelayedQuote, Dividend, DividendRange, EarningsResponse,
    EstimatesResponse, FinancialsResponse, FundOwnership, IncomeStatementResponse, InsiderRoster,
    KeyStats, LargestTrade, ListType, Logo, News, Ohlc, Period, PreviousDay, Quote,
    SectorPerformance, Split, TodayEarnings,
};
use crate::{Error, Result};

// Endpoint table. One row per operation; placeholders are resolved per
// call by the request builder.
const QUOTE: Endpoint<Quote> = Endpoint::get("stock/[symbol]/quote");
const PRICE: Endpoint<Decimal> = Endpoint::get("stock/[symbol]/price");
const OHLC: Endpoint<Ohlc> = Endpoint::get("stock/[symbol]/ohlc");
const PREVIOUS: Endpoint<PreviousDay> = Endpoint::get("stock/[symbol]/previous");
const LARGEST_TRADES: Endpoint<Vec<LargestTrade>> =
    Endpoint::get("stock/[symbol]/largest-trades");
const DELAYED_QUOTE: Endpoint<DelayedQuote> = Endpoint::get("stock/[symbol]/delayed-quote");
const BOOK: Endpoint<Book> = Endpoint::get("stock/[symbol]/book");
const COMPANY: Endpoint<Company> = Endpoint::get("stock/[symbol]/company");
const LOGO: Endpoint<Logo> = Endpoint::get("stock/[symbol]/logo");
const PEERS: Endpoint<Vec<String>> = Endpoint::get("stock/[symbol]/peers");
const BALANCE_SHEET: Endpoint<BalanceSheetResponse> =
    Endpoint::get("stock/[symbol]/balance-sheet/[last]");
const CASH_FLOW: Endpoint<CashFlowResponse> = Endpoint::get("stock/[symbol]/cash-flow/[last]");
const INCOME_STATEMENT: Endpoint<IncomeStatementResponse> =
    Endpoint::get("stock/[symbol]/income/[last]");
const FINANCIALS: Endpoint<FinancialsResponse> = Endpoint::get("stock/[symbol]/financials/[last]");
const EARNINGS: Endpoint<EarningsResponse> = Endpoint::get("stock/[symbol]/earnings/[last]");
const ESTIMATES: Endpoint<EstimatesResponse> = Endpoint::get("stock/[symbol]/estimates/[last]");
const KEY_STATS: Endpoint<KeyStats> = Endpoint::get("stock/[symbol]/stats");
const FUND_OWNERSHIP: Endpoint<Vec<FundOwnership>> =
    Endpoint::get("stock/[symbol]/fund-ownership");
const INSIDER_ROSTER: Endpoint<Vec<InsiderRoster>> =
    Endpoint::get("stock/[symbol]/insider-roster");
const DIVIDENDS: Endpoint<Vec<Dividend>> = Endpoint::get("stock/[symbol]/dividends/[range]");
const SPLITS: Endpoint<Vec<Split>> = Endpoint::get("stock/[symbol]/splits/[range]");
const CHART: Endpoint<Vec<ChartBar>> = Endpoint::get("stock/[symbol]/chart/[range]");
const NEWS: Endpoint<Vec<News>> = Endpoint::get("stock/[symbol]/news/last/[last]");
const BATCH: Endpoint<BatchResponse> = Endpoint::get("stock/[symbol]/batch");
const BATCH_MARKET: Endpoint<HashMap<String, BatchResponse>> =
    Endpoint::get("stock/market/batch");
const COLLECTION: Endpoint<Vec<Quote>> = Endpoint::get("stock/market/collection/[collectionType]");
const LIST: Endpoint<Vec<Quote>> = Endpoint::get("stock/market/list/[listType]");
const SECTOR_PERFORMANCE: Endpoint<Vec<SectorPerformance>> =
    Endpoint::get("stock/market/sector-performance");
const TODAY_EARNINGS: Endpoint<TodayEarnings> = Endpoint::get("stock/market/today-earnings");

/// Service for stock endpoints.
///
/// # Example
///
/// ```no_run
/// use iexcloud_rs::models::{BatchType, Period};
///
/// # async fn example(client: iexcloud_rs::IexCloudClient) -> iexcloud_rs::Result<()> {
/// let quote = client.stock().quote("aapl").await?;
/// println!("latest: {:?}", quote.latest_price);
///
/// let balance = client.stock().balance_sheet("aapl", Period::Quarter, 4).await?;
/// println!("{} reports", balance.balancesheet.len());
///
/// let batch = client.stock()
///     .batch("aapl", &[BatchType::Quote, BatchType::News], None, 5)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct StockService {
    inner: Arc<ClientInner>,
}

impl StockService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the full quote for a symbol.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&QUOTE, &path, QueryParams::new()).await
    }

    /// Get the single latest price for a symbol.
    pub async fn price(&self, symbol: &str) -> Result<Decimal> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&PRICE, &path, QueryParams::new()).await
    }

    /// Get the official open and close for a symbol.
    pub async fn ohlc(&self, symbol: &str) -> Result<Ohlc> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&OHLC, &path, QueryParams::new()).await
    }

    /// Get the previous trading day's adjusted bar.
    pub async fn previous(&self, symbol: &str) -> Result<PreviousDay> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&PREVIOUS, &path, QueryParams::new())
            .await
    }

    /// Get the 15 largest trades of the day.
    pub async fn largest_trades(&self, symbol: &str) -> Result<Vec<LargestTrade>> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&LARGEST_TRADES, &path, QueryParams::new())
            .await
    }

    /// Get the 15-minute delayed quote.
    pub async fn delayed_quote(&self, symbol: &str) -> Result<DelayedQuote> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&DELAYED_QUOTE, &path, QueryParams::new())
            .await
    }

    /// Get the quote plus IEX order book for a symbol.
    pub async fn book(&self, symbol: &str) -> Result<Book> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&BOOK, &path, QueryParams::new()).await
    }

    /// Get the company profile.
    pub async fn company(&self, symbol: &str) -> Result<Company> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&COMPANY, &path, QueryParams::new())
            .await
    }

    /// Get the company logo location.
    pub async fn logo(&self, symbol: &str) -> Result<Logo> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&LOGO, &path, QueryParams::new()).await
    }

    /// Get IEX-defined peer symbols.
    pub async fn peers(&self, symbol: &str) -> Result<Vec<String>> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner.execute(&PEERS, &path, QueryParams::new()).await
    }

    /// Get balance sheet reports.
    ///
    /// `last` selects how many reports to return (1-4 for annual, 1-12
    /// for quarterly).
    pub async fn balance_sheet(
        &self,
        symbol: &str,
        period: Period,
        last: u8,
    ) -> Result<BalanceSheetResponse> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        let mut query = QueryParams::new();
        query.push("period", period.as_wire());
        self.inner.execute(&BALANCE_SHEET, &path, query).await
    }

    /// Get cash flow reports.
    pub async fn cash_flow(
        &self,
        symbol: &str,
        period: Period,
        last: u8,
    ) -> Result<CashFlowResponse> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        let mut query = QueryParams::new();
        query.push("period", period.as_wire());
        self.inner.execute(&CASH_FLOW, &path, query).await
    }

    /// Get income statement reports.
    pub async fn income_statement(
        &self,
        symbol: &str,
        period: Period,
        last: u8,
    ) -> Result<IncomeStatementResponse> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        let mut query = QueryParams::new();
        query.push("period", period.as_wire());
        self.inner.execute(&INCOME_STATEMENT, &path, query).await
    }

    /// Get combined financials reports.
    pub async fn financials(&self, symbol: &str, last: u8) -> Result<FinancialsResponse> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        self.inner
            .execute(&FINANCIALS, &path, QueryParams::new())
            .await
    }

    /// Get earnings reports.
    pub async fn earnings(&self, symbol: &str, last: u8) -> Result<EarningsResponse> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        self.inner
            .execute(&EARNINGS, &path, QueryParams::new())
            .await
    }

    /// Get analyst estimates.
    pub async fn estimates(&self, symbol: &str, last: u8) -> Result<EstimatesResponse> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        self.inner
            .execute(&ESTIMATES, &path, QueryParams::new())
            .await
    }

    /// Get key stats.
    pub async fn key_stats(&self, symbol: &str) -> Result<KeyStats> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&KEY_STATS, &path, QueryParams::new())
            .await
    }

    /// Get institutional fund ownership.
    pub async fn fund_ownership(&self, symbol: &str) -> Result<Vec<FundOwnership>> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&FUND_OWNERSHIP, &path, QueryParams::new())
            .await
    }

    /// Get the insider roster.
    pub async fn insider_roster(&self, symbol: &str) -> Result<Vec<InsiderRoster>> {
        let path = PathParams::new().insert("symbol", symbol);
        self.inner
            .execute(&INSIDER_ROSTER, &path, QueryParams::new())
            .await
    }

    /// Get dividend history over a range.
    pub async fn dividends(&self, symbol: &str, range: DividendRange) -> Result<Vec<Dividend>> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("range", range.as_wire());
        self.inner
            .execute(&DIVIDENDS, &path, QueryParams::new())
            .await
    }

    /// Get split history over a range.
    pub async fn splits(&self, symbol: &str, range: ChartRange) -> Result<Vec<Split>> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("range", range.as_wire());
        self.inner.execute(&SPLITS, &path, QueryParams::new()).await
    }

    /// Get historical chart bars over a range.
    pub async fn chart(&self, symbol: &str, range: ChartRange) -> Result<Vec<ChartBar>> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("range", range.as_wire());
        self.inner.execute(&CHART, &path, QueryParams::new()).await
    }

    /// Get up to `last` recent news items for a symbol (1-50).
    pub async fn news(&self, symbol: &str, last: u8) -> Result<Vec<News>> {
        let path = PathParams::new()
            .insert("symbol", symbol)
            .insert("last", last.to_string());
        self.inner.execute(&NEWS, &path, QueryParams::new()).await
    }

    /// Get multiple response sections for one symbol in a single call.
    ///
    /// `range` scopes the chart section when `BatchType::Chart` is
    /// requested; `last` caps the news section when `BatchType::News`
    /// is requested. At least one type is required.
    pub async fn batch(
        &self,
        symbol: &str,
        types: &[BatchType],
        range: Option<ChartRange>,
        last: u8,
    ) -> Result<BatchResponse> {
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

    /// Get multiple response sections for multiple symbols in a single
    /// call, keyed by symbol. At least one symbol and one type are
    /// required.
    pub async fn batch_market(
        &self,
        symbols: &[&str],
        types: &[BatchType],
        range: Option<ChartRange>,
        last: u8,
    ) -> Result<HashMap<String, BatchResponse>> {
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

    /// Get quotes for all symbols in a collection.
    pub async fn collection(
        &self,
        collection: CollectionType,
        name: &str,
    ) -> Result<Vec<Quote>> {
        let path = PathParams::new().insert("collectionType", collection.as_wire());
        let mut query = QueryParams::new();
        query.push("collectionName", name);
        self.inner.execute(&COLLECTION, &path, query).await
    }

    /// Get quotes for a curated market mover list.
    pub async fn list(&self, list: ListType) -> Result<Vec<Quote>> {
        let path = PathParams::new().insert("listType", list.as_wire());
        self.inner.execute(&LIST, &path, QueryParams::new()).await
    }

    /// Get session performance for each market sector.
    pub async fn sector_performance(&self) -> Result<Vec<SectorPerformance>> {
        self.inner.execute_no_params(&SECTOR_PERFORMANCE).await
    }

    /// Get earnings expected today, grouped by announcement time.
    pub async fn today_earnings(&self) -> Result<TodayEarnings> {
        self.inner.execute_no_params(&TODAY_EARNINGS).await
    }
}
