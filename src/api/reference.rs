//! Reference data service.

use std::sync::Arc;

use crate::client::{ClientInner, Endpoint};
use crate::models::{ExchangeInfo, IexSymbolInfo, SymbolInfo};
use crate::Result;

const SYMBOLS: Endpoint<Vec<SymbolInfo>> = Endpoint::get("ref-data/symbols");
const IEX_SYMBOLS: Endpoint<Vec<IexSymbolInfo>> = Endpoint::get("ref-data/iex/symbols");
const US_EXCHANGES: Endpoint<Vec<ExchangeInfo>> = Endpoint::get("ref-data/market/us/exchanges");

/// Service for reference data endpoints.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: iexcloud_rs::IexCloudClient) -> iexcloud_rs::Result<()> {
/// let symbols = client.reference().symbols().await?;
/// println!("{} supported symbols", symbols.len());
/// # Ok(())
/// # }
/// ```
pub struct ReferenceDataService {
    inner: Arc<ClientInner>,
}

impl ReferenceDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the directory of all supported symbols.
    pub async fn symbols(&self) -> Result<Vec<SymbolInfo>> {
        self.inner.execute_no_params(&SYMBOLS).await
    }

    /// Get the directory of IEX-listed symbols.
    pub async fn iex_symbols(&self) -> Result<Vec<IexSymbolInfo>> {
        self.inner.execute_no_params(&IEX_SYMBOLS).await
    }

    /// Get the directory of US exchanges.
    pub async fn us_exchanges(&self) -> Result<Vec<ExchangeInfo>> {
        self.inner.execute_no_params(&US_EXCHANGES).await
    }
}
