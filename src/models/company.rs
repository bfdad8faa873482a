//! Company profile models.

use serde::{Deserialize, Serialize};

use super::primitives::Symbol;

/// Company profile for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Trading symbol
    pub symbol: Symbol,
    /// Company name
    #[serde(default)]
    pub company_name: Option<String>,
    /// Listing exchange
    #[serde(default)]
    pub exchange: Option<String>,
    /// Industry classification
    #[serde(default)]
    pub industry: Option<String>,
    /// Company website
    #[serde(default)]
    pub website: Option<String>,
    /// Business description
    #[serde(default)]
    pub description: Option<String>,
    /// Chief executive officer
    #[serde(default, rename = "CEO")]
    pub ceo: Option<String>,
    /// Name of the listed security
    #[serde(default)]
    pub security_name: Option<String>,
    /// Issue type code (`cs` common stock, `et` ETF, ...)
    #[serde(default)]
    pub issue_type: Option<String>,
    /// Sector classification
    #[serde(default)]
    pub sector: Option<String>,
    /// Number of employees
    #[serde(default)]
    pub employees: Option<i64>,
    /// Descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// State or province
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code
    #[serde(default)]
    pub zip: Option<String>,
    /// Country
    #[serde(default)]
    pub country: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
}

/// Company logo location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    /// URL of the logo image
    #[serde(default)]
    pub url: Option<String>,
}
