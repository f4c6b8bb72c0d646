//! Data types for FMP API responses.
//!
//! Only the fields the estimator reads are modelled. Numeric fields are
//! `Option<f64>` so that an absent or `null` value is reported as missing
//! data rather than silently read as zero.

use crate::error::FmpError;
use serde::{Deserialize, Serialize};
use wacc_traits::{BalanceSheetRecord, IncomeStatementRecord};

/// Reporting period for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    /// Annual reports (10-K filings).
    #[default]
    Annual,
    /// Quarterly reports (10-Q filings).
    Quarter,
}

impl Period {
    /// Get the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarter => "quarter",
        }
    }
}

impl std::str::FromStr for Period {
    type Err = FmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annual" | "fy" => Ok(Self::Annual),
            "quarter" | "quarterly" | "q" => Ok(Self::Quarter),
            other => Err(FmpError::InvalidPeriod(other.to_string())),
        }
    }
}

fn require(
    value: Option<f64>,
    record: &'static str,
    symbol: &str,
    field: &'static str,
) -> Result<f64, FmpError> {
    value.ok_or_else(|| FmpError::MissingField {
        record,
        symbol: symbol.to_string(),
        field,
    })
}

/// Income statement data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period (FY, Q1..Q4).
    #[serde(default)]
    pub period: String,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// EBITDA.
    #[serde(default)]
    pub ebitda: Option<f64>,
    /// Depreciation and amortization.
    #[serde(default)]
    pub depreciation_and_amortization: Option<f64>,
    /// Interest expense.
    #[serde(default)]
    pub interest_expense: Option<f64>,
}

impl IncomeStatement {
    /// Extract the fields the estimator needs.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingField`] if EBITDA, D&A or interest expense is absent.
    pub fn to_record(&self) -> Result<IncomeStatementRecord, FmpError> {
        const RECORD: &str = "income statement";
        Ok(IncomeStatementRecord {
            date: self.date.clone(),
            ebitda: require(self.ebitda, RECORD, &self.symbol, "ebitda")?,
            depreciation_and_amortization: require(
                self.depreciation_and_amortization,
                RECORD,
                &self.symbol,
                "depreciationAndAmortization",
            )?,
            interest_expense: require(
                self.interest_expense,
                RECORD,
                &self.symbol,
                "interestExpense",
            )?,
        })
    }
}

/// Balance sheet data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period.
    #[serde(default)]
    pub period: String,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Total debt.
    #[serde(default)]
    pub total_debt: Option<f64>,
    /// Total stockholders' equity.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
}

impl BalanceSheet {
    /// Extract the fields the estimator needs.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingField`] if total debt or stockholders' equity is absent.
    pub fn to_record(&self) -> Result<BalanceSheetRecord, FmpError> {
        const RECORD: &str = "balance sheet";
        Ok(BalanceSheetRecord {
            date: self.date.clone(),
            total_debt: require(self.total_debt, RECORD, &self.symbol, "totalDebt")?,
            total_stockholders_equity: require(
                self.total_stockholders_equity,
                RECORD,
                &self.symbol,
                "totalStockholdersEquity",
            )?,
        })
    }
}

/// Financial ratios from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Reporting period.
    #[serde(default)]
    pub period: String,
    /// Effective tax rate as a fraction.
    #[serde(default)]
    pub effective_tax_rate: Option<f64>,
    /// Interest coverage as computed by FMP (informational only).
    #[serde(default)]
    pub interest_coverage_ratio: Option<f64>,
}

impl FinancialRatios {
    /// Effective tax rate, required.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingField`] if the rate is absent.
    pub fn effective_tax_rate(&self) -> Result<f64, FmpError> {
        require(
            self.effective_tax_rate,
            "financial ratios",
            &self.symbol,
            "effectiveTaxRate",
        )
    }
}

/// Company profile from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Beta against the broad market.
    #[serde(default)]
    pub beta: Option<f64>,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market cap.
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Reporting currency.
    #[serde(default)]
    pub currency: Option<String>,
}

impl CompanyProfile {
    /// Beta, required.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::MissingField`] if beta is absent.
    pub fn beta(&self) -> Result<f64, FmpError> {
        require(self.beta, "company profile", &self.symbol, "beta")
    }
}
