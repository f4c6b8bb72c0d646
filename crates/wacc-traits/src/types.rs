//! Common types used throughout the WACC estimator.
//!
//! Every record here is transient: it is built for one run, for one company,
//! and dropped once the result is printed.

use crate::{Result, WaccError};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// Default trailing window length in calendar days.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 366;

/// A company ticker symbol such as "MSFT".
///
/// Tickers are trimmed and upper-cased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker from user input.
    ///
    /// # Errors
    ///
    /// Returns [`WaccError::InvalidInput`] if the symbol is empty after trimming.
    pub fn new(symbol: &str) -> Result<Self> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(WaccError::InvalidInput(
                "ticker symbol must not be empty".to_string(),
            ));
        }
        Ok(Self(symbol.to_uppercase()))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inclusive calendar date range used for time-series requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First date of the window.
    pub start: Date,
    /// Last date of the window.
    pub end: Date,
}

impl DateWindow {
    /// The window ending at `end` and starting `days` calendar days earlier.
    #[must_use]
    pub fn trailing(end: Date, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }
}

/// The subset of an income statement the estimator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatementRecord {
    /// Period end date reported by the provider.
    pub date: String,
    /// Earnings before interest, taxes, depreciation and amortization.
    pub ebitda: f64,
    /// Depreciation and amortization.
    pub depreciation_and_amortization: f64,
    /// Interest expense for the period.
    pub interest_expense: f64,
}

impl IncomeStatementRecord {
    /// EBIT derived as EBITDA less depreciation and amortization.
    #[must_use]
    pub fn ebit(&self) -> f64 {
        self.ebitda - self.depreciation_and_amortization
    }
}

/// The subset of a balance sheet the estimator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetRecord {
    /// Period end date reported by the provider.
    pub date: String,
    /// Total debt.
    pub total_debt: f64,
    /// Total stockholders' equity.
    pub total_stockholders_equity: f64,
}

/// A single dated value of a time series.
///
/// `value` is `None` when the provider published the date without a number
/// (market holidays in daily index series, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: Date,
    /// Observed value, if any.
    pub value: Option<f64>,
}

impl Observation {
    /// Creates an observation with a present value.
    #[must_use]
    pub const fn new(date: Date, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    /// Creates an observation with no value.
    #[must_use]
    pub const fn missing(date: Date) -> Self {
        Self { date, value: None }
    }
}

/// An ordered series of observations for one named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Provider series identifier (e.g. `TB1YR`).
    pub id: String,
    /// Observations in ascending date order.
    pub observations: Vec<Observation>,
}

impl TimeSeries {
    /// Creates a series, sorting observations by date.
    #[must_use]
    pub fn new(id: impl Into<String>, mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.date);
        Self {
            id: id.into(),
            observations,
        }
    }

    /// Present values in date order, with missing and non-finite entries removed.
    #[must_use]
    pub fn cleaned(&self) -> Vec<f64> {
        self.observations
            .iter()
            .filter_map(|o| o.value)
            .filter(|v| v.is_finite())
            .collect()
    }

    /// The most recent present value.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.observations
            .iter()
            .rev()
            .filter_map(|o| o.value)
            .find(|v| v.is_finite())
    }

    /// Number of observations, including missing ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series has no observations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

/// Everything fetched for one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    /// Company analysed.
    pub ticker: Ticker,
    /// Window used for the time-series requests.
    pub window: DateWindow,
    /// Latest income statement.
    pub income: IncomeStatementRecord,
    /// Latest balance sheet.
    pub balance: BalanceSheetRecord,
    /// Latest effective tax rate, as a fraction.
    pub effective_tax_rate: f64,
    /// Company beta from its profile.
    pub beta: f64,
    /// One-year Treasury yield series, in percent.
    pub treasury: TimeSeries,
    /// Equity index closing levels.
    pub equity_index: TimeSeries,
}
