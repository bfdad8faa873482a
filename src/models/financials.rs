//! Fundamentals models: balance sheet, cash flow, income statement,
//! financials, earnings, estimates, and ownership.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::Symbol;
use super::quote::Quote;

/// One balance sheet report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Report date
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    /// Cash and cash equivalents
    #[serde(default)]
    pub current_cash: Option<Decimal>,
    /// Short-term investments
    #[serde(default)]
    pub short_term_investments: Option<Decimal>,
    /// Net receivables
    #[serde(default)]
    pub receivables: Option<Decimal>,
    /// Inventory
    #[serde(default)]
    pub inventory: Option<Decimal>,
    /// Other current assets
    #[serde(default)]
    pub other_current_assets: Option<Decimal>,
    /// Total current assets
    #[serde(default)]
    pub current_assets: Option<Decimal>,
    /// Long-term investments
    #[serde(default)]
    pub long_term_investments: Option<Decimal>,
    /// Property, plant and equipment
    #[serde(default)]
    pub property_plant_equipment: Option<Decimal>,
    /// Goodwill
    #[serde(default)]
    pub goodwill: Option<Decimal>,
    /// Intangible assets
    #[serde(default)]
    pub intangible_assets: Option<Decimal>,
    /// Other assets
    #[serde(default)]
    pub other_assets: Option<Decimal>,
    /// Total assets
    #[serde(default)]
    pub total_assets: Option<Decimal>,
    /// Accounts payable
    #[serde(default)]
    pub accounts_payable: Option<Decimal>,
    /// Long-term debt
    #[serde(default)]
    pub long_term_debt: Option<Decimal>,
    /// Total liabilities
    #[serde(default)]
    pub total_liabilities: Option<Decimal>,
    /// Common stock value
    #[serde(default)]
    pub common_stock: Option<Decimal>,
    /// Retained earnings
    #[serde(default)]
    pub retained_earnings: Option<Decimal>,
    /// Treasury stock
    #[serde(default)]
    pub treasury_stock: Option<Decimal>,
    /// Capital surplus
    #[serde(default)]
    pub capital_surplus: Option<Decimal>,
    /// Total shareholder equity
    #[serde(default)]
    pub shareholder_equity: Option<Decimal>,
    /// Net tangible assets
    #[serde(default)]
    pub net_tangible_assets: Option<Decimal>,
}

/// Balance sheet reports for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetResponse {
    /// Trading symbol
    pub symbol: Symbol,
    /// Reports, most recent first
    #[serde(default)]
    pub balancesheet: Vec<BalanceSheet>,
}

/// One cash flow report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    /// Report date
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    /// Net income
    #[serde(default)]
    pub net_income: Option<Decimal>,
    /// Depreciation and amortization
    #[serde(default)]
    pub depreciation: Option<Decimal>,
    /// Changes in receivables
    #[serde(default)]
    pub changes_in_receivables: Option<Decimal>,
    /// Changes in inventories
    #[serde(default)]
    pub changes_in_inventories: Option<Decimal>,
    /// Net change in cash
    #[serde(default)]
    pub cash_change: Option<Decimal>,
    /// Cash flow from operations
    #[serde(default)]
    pub cash_flow: Option<Decimal>,
    /// Capital expenditures
    #[serde(default)]
    pub capital_expenditures: Option<Decimal>,
    /// Investment purchases and sales
    #[serde(default)]
    pub investments: Option<Decimal>,
    /// Other investing activity
    #[serde(default)]
    pub investing_activity_other: Option<Decimal>,
    /// Total investing cash flows
    #[serde(default)]
    pub total_investing_cash_flows: Option<Decimal>,
    /// Dividends paid
    #[serde(default)]
    pub dividends_paid: Option<Decimal>,
    /// Net borrowings
    #[serde(default)]
    pub net_borrowings: Option<Decimal>,
    /// Other financing cash flows
    #[serde(default)]
    pub other_financing_cash_flows: Option<Decimal>,
    /// Cash flow from financing
    #[serde(default)]
    pub cash_flow_financing: Option<Decimal>,
}

/// Cash flow reports for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowResponse {
    /// Trading symbol
    pub symbol: Symbol,
    /// Reports, most recent first
    #[serde(default)]
    pub cashflow: Vec<CashFlow>,
}

/// One income statement report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Report date
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    /// Total revenue
    #[serde(default)]
    pub total_revenue: Option<Decimal>,
    /// Cost of revenue
    #[serde(default)]
    pub cost_of_revenue: Option<Decimal>,
    /// Gross profit
    #[serde(default)]
    pub gross_profit: Option<Decimal>,
    /// Research and development expense
    #[serde(default)]
    pub research_and_development: Option<Decimal>,
    /// Selling, general and administrative expense
    #[serde(default)]
    pub selling_general_and_admin: Option<Decimal>,
    /// Total operating expense
    #[serde(default)]
    pub operating_expense: Option<Decimal>,
    /// Operating income
    #[serde(default)]
    pub operating_income: Option<Decimal>,
    /// Other income or expense, net
    #[serde(default)]
    pub other_income_expense_net: Option<Decimal>,
    /// Earnings before interest and taxes
    #[serde(default)]
    pub ebit: Option<Decimal>,
    /// Interest income
    #[serde(default)]
    pub interest_income: Option<Decimal>,
    /// Pre-tax income
    #[serde(default)]
    pub pretax_income: Option<Decimal>,
    /// Income tax expense
    #[serde(default)]
    pub income_tax: Option<Decimal>,
    /// Minority interest
    #[serde(default)]
    pub minority_interest: Option<Decimal>,
    /// Net income
    #[serde(default)]
    pub net_income: Option<Decimal>,
    /// Net income for basic EPS
    #[serde(default)]
    pub net_income_basic: Option<Decimal>,
}

/// Income statement reports for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatementResponse {
    /// Trading symbol
    pub symbol: Symbol,
    /// Reports, most recent first
    #[serde(default)]
    pub income: Vec<IncomeStatement>,
}

/// One row of the combined financials report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    /// Report date
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    /// Gross profit
    #[serde(default)]
    pub gross_profit: Option<Decimal>,
    /// Cost of revenue
    #[serde(default)]
    pub cost_of_revenue: Option<Decimal>,
    /// Operating revenue
    #[serde(default)]
    pub operating_revenue: Option<Decimal>,
    /// Total revenue
    #[serde(default)]
    pub total_revenue: Option<Decimal>,
    /// Operating income
    #[serde(default)]
    pub operating_income: Option<Decimal>,
    /// Net income
    #[serde(default)]
    pub net_income: Option<Decimal>,
    /// Research and development expense
    #[serde(default)]
    pub research_and_development: Option<Decimal>,
    /// Total operating expense
    #[serde(default)]
    pub operating_expense: Option<Decimal>,
    /// Total current assets
    #[serde(default)]
    pub current_assets: Option<Decimal>,
    /// Total assets
    #[serde(default)]
    pub total_assets: Option<Decimal>,
    /// Total liabilities
    #[serde(default)]
    pub total_liabilities: Option<Decimal>,
    /// Cash and equivalents
    #[serde(default)]
    pub current_cash: Option<Decimal>,
    /// Current debt
    #[serde(default)]
    pub current_debt: Option<Decimal>,
    /// Total cash
    #[serde(default)]
    pub total_cash: Option<Decimal>,
    /// Total debt
    #[serde(default)]
    pub total_debt: Option<Decimal>,
    /// Shareholder equity
    #[serde(default)]
    pub shareholder_equity: Option<Decimal>,
    /// Net change in cash
    #[serde(default)]
    pub cash_change: Option<Decimal>,
    /// Cash flow from operations
    #[serde(default)]
    pub cash_flow: Option<Decimal>,
}

/// Combined financials for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialsResponse {
    /// Trading symbol
    pub symbol: Symbol,
    /// Reports, most recent first
    #[serde(default)]
    pub financials: Vec<Financial>,
}

/// One earnings report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earning {
    /// Actual earnings per share
    #[serde(default, rename = "actualEPS")]
    pub actual_eps: Option<Decimal>,
    /// Consensus estimate
    #[serde(default, rename = "consensusEPS")]
    pub consensus_eps: Option<Decimal>,
    /// Announcement time (`BTO`, `AMC`, `DMT`)
    #[serde(default)]
    pub announce_time: Option<String>,
    /// Number of analyst estimates
    #[serde(default)]
    pub number_of_estimates: Option<i64>,
    /// Dollar surprise versus consensus
    #[serde(default, rename = "EPSSurpriseDollar")]
    pub eps_surprise_dollar: Option<Decimal>,
    /// Date the report was published
    #[serde(default, rename = "EPSReportDate")]
    pub eps_report_date: Option<NaiveDate>,
    /// Fiscal period label
    #[serde(default)]
    pub fiscal_period: Option<String>,
    /// Fiscal period end date
    #[serde(default)]
    pub fiscal_end_date: Option<NaiveDate>,
    /// EPS for the same period a year ago
    #[serde(default)]
    pub year_ago: Option<Decimal>,
    /// Change versus a year ago (as a ratio)
    #[serde(default)]
    pub year_ago_change_percent: Option<Decimal>,
}

/// Earnings reports for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsResponse {
    /// Trading symbol
    pub symbol: Symbol,
    /// Reports, most recent first
    #[serde(default)]
    pub earnings: Vec<Earning>,
}

/// An earnings report expected today, with quote context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayEarning {
    /// Trading symbol
    #[serde(default)]
    pub symbol: Option<Symbol>,
    /// Consensus estimate
    #[serde(default, rename = "consensusEPS")]
    pub consensus_eps: Option<Decimal>,
    /// Announcement time (`BTO`, `AMC`, `DMT`)
    #[serde(default)]
    pub announce_time: Option<String>,
    /// Number of analyst estimates
    #[serde(default)]
    pub number_of_estimates: Option<i64>,
    /// Fiscal period label
    #[serde(default)]
    pub fiscal_period: Option<String>,
    /// Fiscal period end date
    #[serde(default)]
    pub fiscal_end_date: Option<NaiveDate>,
    /// Current quote for the symbol
    #[serde(default)]
    pub quote: Option<Quote>,
}

/// Earnings expected today, grouped by announcement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayEarnings {
    /// Before the open
    #[serde(default)]
    pub bto: Vec<TodayEarning>,
    /// After market close
    #[serde(default)]
    pub amc: Vec<TodayEarning>,
    /// During market trading
    #[serde(default)]
    pub dmt: Vec<TodayEarning>,
}

/// One analyst estimate period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Consensus EPS estimate
    #[serde(default, rename = "consensusEPS")]
    pub consensus_eps: Option<Decimal>,
    /// Announcement time (`BTO`, `AMC`, `DMT`)
    #[serde(default)]
    pub announce_time: Option<String>,
    /// Number of analyst estimates
    #[serde(default)]
    pub number_of_estimates: Option<i64>,
    /// Fiscal period label
    #[serde(default)]
    pub fiscal_period: Option<String>,
    /// Fiscal period end date
    #[serde(default)]
    pub fiscal_end_date: Option<NaiveDate>,
    /// Expected report date
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
}

/// Analyst estimates for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatesResponse {
    /// Trading symbol
    pub symbol: Symbol,
    /// Estimate periods, nearest first
    #[serde(default)]
    pub estimates: Vec<Estimate>,
}

/// One institutional fund holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundOwnership {
    /// Holder name
    #[serde(default)]
    pub entity_proper_name: Option<String>,
    /// Share quantity adjusted for corporate actions
    #[serde(default)]
    pub adj_holding: Option<Decimal>,
    /// Market value of the adjusted holding
    #[serde(default)]
    pub adj_mv: Option<Decimal>,
    /// Share quantity as reported
    #[serde(default)]
    pub reported_holding: Option<Decimal>,
    /// Market value as reported
    #[serde(default)]
    pub reported_mv: Option<Decimal>,
    /// Epoch milliseconds of the report
    #[serde(default)]
    pub report_date: Option<i64>,
}

/// One insider roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsiderRoster {
    /// Insider name
    #[serde(default)]
    pub entity_name: Option<String>,
    /// Shares held
    #[serde(default)]
    pub position: Option<i64>,
    /// Epoch milliseconds of the report
    #[serde(default)]
    pub report_date: Option<i64>,
}
