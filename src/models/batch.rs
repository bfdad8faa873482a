//! Batch response models.
//!
//! A batch call returns only the sections selected through the `types`
//! query parameter, so every section is optional. The legacy v1 shape
//! differs from v2 in the news section only.

use serde::{Deserialize, Serialize};

use super::chart::ChartBar;
use super::news::{News, NewsV1};
use super::quote::Quote;

/// Sections of a v2 batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    /// Quote section, present when `quote` was requested
    #[serde(default)]
    pub quote: Option<Quote>,
    /// News section, present when `news` was requested
    #[serde(default)]
    pub news: Option<Vec<News>>,
    /// Chart section, present when `chart` was requested
    #[serde(default)]
    pub chart: Option<Vec<ChartBar>>,
}

/// Sections of a legacy v1 batch response.
///
/// Identical to [`BatchResponse`] except the news section uses the v1
/// news shape with string timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchV1Response {
    /// Quote section, present when `quote` was requested
    #[serde(default)]
    pub quote: Option<Quote>,
    /// News section in the v1 shape, present when `news` was requested
    #[serde(default)]
    pub news: Option<Vec<NewsV1>>,
    /// Chart section, present when `chart` was requested
    #[serde(default)]
    pub chart: Option<Vec<ChartBar>>,
}
