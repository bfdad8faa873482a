//! News item models.
//!
//! The v2 shape timestamps items in epoch milliseconds and carries
//! language/paywall metadata; the legacy v1 shape timestamps items as
//! ISO-8601 strings. Batch responses differ between the two API
//! generations in exactly this field, so both shapes are kept.

use serde::{Deserialize, Serialize};

/// A news item in the IEX Cloud (v2) shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    /// Epoch milliseconds of publication
    #[serde(default)]
    pub datetime: Option<i64>,
    /// Article headline
    #[serde(default)]
    pub headline: Option<String>,
    /// Publishing source
    #[serde(default)]
    pub source: Option<String>,
    /// Article URL
    #[serde(default)]
    pub url: Option<String>,
    /// Article summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Comma-separated related symbols
    #[serde(default)]
    pub related: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Article language code
    #[serde(default)]
    pub lang: Option<String>,
    /// Whether the article sits behind a paywall
    #[serde(default)]
    pub has_paywall: Option<bool>,
}

/// A news item in the legacy v1 shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsV1 {
    /// ISO-8601 publication time
    #[serde(default)]
    pub datetime: Option<String>,
    /// Article headline
    #[serde(default)]
    pub headline: Option<String>,
    /// Publishing source
    #[serde(default)]
    pub source: Option<String>,
    /// Article URL
    #[serde(default)]
    pub url: Option<String>,
    /// Article summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Comma-separated related symbols
    #[serde(default)]
    pub related: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_v2_epoch_datetime() {
        let item: News = serde_json::from_str(
            r#"{
                "datetime": 1545215400000,
                "headline": "Voluntary recall",
                "source": "Company Press",
                "url": "https://example.com/article",
                "summary": "...",
                "related": "AAPL",
                "image": "https://example.com/image.png",
                "lang": "en",
                "hasPaywall": false
            }"#,
        )
        .unwrap();
        assert_eq!(item.datetime, Some(1_545_215_400_000));
        assert_eq!(item.has_paywall, Some(false));
    }

    #[test]
    fn test_news_v1_string_datetime() {
        let item: NewsV1 = serde_json::from_str(
            r#"{
                "datetime": "2018-12-19T09:45:00-05:00",
                "headline": "Voluntary recall",
                "source": "Company Press",
                "url": "https://example.com/article",
                "related": "AAPL"
            }"#,
        )
        .unwrap();
        assert_eq!(item.datetime.as_deref(), Some("2018-12-19T09:45:00-05:00"));
        assert!(item.image.is_none());
    }
}
