//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{BalanceSheet, CompanyProfile, FinancialRatios, IncomeStatement, Period},
};
use reqwest::Client;
use std::{env, time::Duration};

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
    base_url: String,
    period: Period,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: FMP_BASE_URL.to_string(),
            period: Period::default(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Use a request timeout for every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Fetch statements for the given reporting period.
    #[must_use]
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Point the client at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reporting period used for statement requests.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{}/{endpoint}&apikey={}", self.base_url, self.api_key)
        } else {
            format!("{}/{endpoint}?apikey={}", self.base_url, self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        tracing::debug!(endpoint, "fmp request");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        parse_body(&text)
    }

    /// Fetch a statement-style endpoint and keep the most recent entry.
    async fn latest<T: serde::de::DeserializeOwned>(
        &self,
        name: &str,
        symbol: &str,
    ) -> Result<T> {
        let endpoint = format!(
            "{name}?symbol={}&period={}&limit=1",
            symbol.to_uppercase(),
            self.period.as_str()
        );
        let rows: Vec<T> = self.get(&endpoint).await?;
        first_row(rows, || format!("{name} of {symbol}"))
    }

    /// Get the most recent income statement for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no statements.
    pub async fn income_statement(&self, symbol: &str) -> Result<IncomeStatement> {
        self.latest("income-statement", symbol).await
    }

    /// Get the most recent balance sheet for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no statements.
    pub async fn balance_sheet(&self, symbol: &str) -> Result<BalanceSheet> {
        self.latest("balance-sheet-statement", symbol).await
    }

    /// Get the most recent financial ratios for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns no rows.
    pub async fn ratios(&self, symbol: &str) -> Result<FinancialRatios> {
        self.latest("ratios", symbol).await
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let endpoint = format!("profile?symbol={}", symbol.to_uppercase());
        let profiles: Vec<CompanyProfile> = self.get(&endpoint).await?;
        first_row(profiles, || format!("profile of {symbol}"))
    }
}

/// Keep the first row of a list response; an empty list means no data.
fn first_row<T>(rows: Vec<T>, what: impl FnOnce() -> String) -> Result<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| FmpError::NoData(what()))
}

/// Parse a response body, surfacing FMP error payloads.
fn parse_body<T: serde::de::DeserializeOwned>(text: &str) -> Result<T> {
    // Check for error responses
    if text.contains("\"Error Message\"") || text.contains("\"error\"") {
        return Err(FmpError::Api(text.to_string()));
    }

    serde_json::from_str(text).map_err(|e| {
        FmpError::Json(serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to parse: {e}. Response: {text}"),
        )))
    })
}
