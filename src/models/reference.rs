//! Reference data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::primitives::Symbol;

/// One entry of the supported-symbols directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Trading symbol
    pub symbol: Symbol,
    /// Listing exchange code
    #[serde(default)]
    pub exchange: Option<String>,
    /// Security name
    #[serde(default)]
    pub name: Option<String>,
    /// Date the directory was generated
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Issue type code (`cs` common stock, `et` ETF, ...)
    #[serde(default, rename = "type")]
    pub symbol_type: Option<String>,
    /// Opaque IEX identifier for the security
    #[serde(default)]
    pub iex_id: Option<String>,
    /// Listing region
    #[serde(default)]
    pub region: Option<String>,
    /// Trading currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Whether the symbol is currently enabled for trading
    #[serde(default)]
    pub is_enabled: Option<bool>,
    /// OpenFIGI identifier
    #[serde(default)]
    pub figi: Option<String>,
    /// SEC CIK number
    #[serde(default)]
    pub cik: Option<String>,
}

/// One entry of the IEX-listed symbols directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IexSymbolInfo {
    /// Trading symbol
    pub symbol: Symbol,
    /// Date the directory was generated
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Whether the symbol is currently enabled for trading
    #[serde(default)]
    pub is_enabled: Option<bool>,
}

/// One US exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    /// Exchange abbreviation
    #[serde(default)]
    pub exchange: Option<String>,
    /// Listing region
    #[serde(default)]
    pub region: Option<String>,
    /// Full exchange name
    #[serde(default)]
    pub description: Option<String>,
    /// Market identifier code
    #[serde(default)]
    pub mic: Option<String>,
    /// Symbol suffix used by the exchange
    #[serde(default)]
    pub exchange_suffix: Option<String>,
}
