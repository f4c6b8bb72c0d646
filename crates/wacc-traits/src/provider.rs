//! Provider traits for the external data sources.
//!
//! The estimator only sees these two capabilities, so the calculation can be
//! driven by fixture data in tests and by HTTP clients in production.

use crate::{BalanceSheetRecord, DateWindow, IncomeStatementRecord, Result, Ticker, TimeSeries};

/// Source of company fundamentals and profile data.
///
/// Every method returns the most recent reporting period the provider has.
/// Implementations must be thread-safe so fetches can run concurrently.
#[async_trait::async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Short name used in logs.
    fn provider_name(&self) -> &'static str;

    /// Latest income statement.
    async fn income_statement(&self, ticker: &Ticker) -> Result<IncomeStatementRecord>;

    /// Latest balance sheet.
    async fn balance_sheet(&self, ticker: &Ticker) -> Result<BalanceSheetRecord>;

    /// Latest effective tax rate, as a fraction.
    async fn effective_tax_rate(&self, ticker: &Ticker) -> Result<f64>;

    /// Company beta.
    async fn beta(&self, ticker: &Ticker) -> Result<f64>;
}

/// Source of named macroeconomic time series.
#[async_trait::async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Short name used in logs.
    fn provider_name(&self) -> &'static str;

    /// Observations of series `id` between `window.start` and `window.end`.
    async fn series(&self, id: &str, window: DateWindow) -> Result<TimeSeries>;
}
