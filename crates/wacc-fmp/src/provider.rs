//! [`FundamentalsProvider`] implementation backed by FMP.

use crate::FmpClient;
use wacc_traits::{
    BalanceSheetRecord, FundamentalsProvider, IncomeStatementRecord, Result, Ticker,
};

#[async_trait::async_trait]
impl FundamentalsProvider for FmpClient {
    fn provider_name(&self) -> &'static str {
        "financialmodelingprep"
    }

    async fn income_statement(&self, ticker: &Ticker) -> Result<IncomeStatementRecord> {
        let statement = Self::income_statement(self, ticker.as_str()).await?;
        tracing::debug!(
            %ticker,
            date = %statement.date,
            period = %statement.period,
            "fetched income statement"
        );
        Ok(statement.to_record()?)
    }

    async fn balance_sheet(&self, ticker: &Ticker) -> Result<BalanceSheetRecord> {
        let sheet = Self::balance_sheet(self, ticker.as_str()).await?;
        tracing::debug!(%ticker, date = %sheet.date, "fetched balance sheet");
        Ok(sheet.to_record()?)
    }

    async fn effective_tax_rate(&self, ticker: &Ticker) -> Result<f64> {
        let ratios = self.ratios(ticker.as_str()).await?;
        tracing::debug!(
            %ticker,
            date = %ratios.date,
            reported_interest_coverage = ?ratios.interest_coverage_ratio,
            "fetched financial ratios"
        );
        Ok(ratios.effective_tax_rate()?)
    }

    async fn beta(&self, ticker: &Ticker) -> Result<f64> {
        let profile = self.profile(ticker.as_str()).await?;
        tracing::debug!(%ticker, name = ?profile.company_name, "fetched company profile");
        Ok(profile.beta()?)
    }
}
