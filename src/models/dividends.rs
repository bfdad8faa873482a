//! Dividend and split history models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dividend record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    /// Ex-dividend date
    #[serde(default)]
    pub ex_date: Option<NaiveDate>,
    /// Payment date
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    /// Record date
    #[serde(default)]
    pub record_date: Option<NaiveDate>,
    /// Declaration date
    #[serde(default)]
    pub declared_date: Option<NaiveDate>,
    /// Payment amount per share
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Dividend flag (`Cash`, `Stock`, ...)
    #[serde(default)]
    pub flag: Option<String>,
    /// Payment currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Description of the distribution
    #[serde(default)]
    pub description: Option<String>,
    /// Payment frequency (`quarterly`, `semi-annual`, ...)
    #[serde(default)]
    pub frequency: Option<String>,
}

/// One stock split record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    /// Ex-split date
    #[serde(default)]
    pub ex_date: Option<NaiveDate>,
    /// Declaration date
    #[serde(default)]
    pub declared_date: Option<NaiveDate>,
    /// Split ratio (`to_factor / from_factor`)
    #[serde(default)]
    pub ratio: Option<Decimal>,
    /// Post-split share factor
    #[serde(default)]
    pub to_factor: Option<Decimal>,
    /// Pre-split share factor
    #[serde(default)]
    pub from_factor: Option<Decimal>,
    /// Description of the split
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dividend_fixture() {
        let dividend: Dividend = serde_json::from_str(
            r#"{
                "exDate": "2024-02-09",
                "paymentDate": "2024-02-15",
                "recordDate": "2024-02-12",
                "declaredDate": "2024-02-01",
                "amount": 0.24,
                "flag": "Cash",
                "currency": "USD",
                "description": "Ordinary Shares",
                "frequency": "quarterly"
            }"#,
        )
        .unwrap();
        assert_eq!(dividend.amount, Some(dec!(0.24)));
        assert_eq!(
            dividend.ex_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap())
        );
        assert_eq!(dividend.frequency.as_deref(), Some("quarterly"));
    }

    #[test]
    fn test_split_factors() {
        let split: Split = serde_json::from_str(
            r#"{"exDate": "2020-08-31", "declaredDate": "2020-07-30",
                "ratio": 0.25, "toFactor": 4, "fromFactor": 1,
                "description": "4-for-1 split"}"#,
        )
        .unwrap();
        assert_eq!(split.ratio, Some(dec!(0.25)));
        assert_eq!(split.to_factor, Some(dec!(4)));
    }
}
