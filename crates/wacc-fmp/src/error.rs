//! Error types for FMP API client.

use thiserror::Error;
use wacc_traits::WaccError;

/// Errors that can occur when using the FMP API.
#[derive(Debug, Error)]
pub enum FmpError {
    /// Missing API key.
    #[error("FMP_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("FMP API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 250 requests/day.")]
    RateLimitExceeded,

    /// Unrecognised statement period.
    #[error("Unknown statement period: {0}")]
    InvalidPeriod(String),

    /// No data available.
    #[error("No data available for {0}")]
    NoData(String),

    /// A record was returned without a field the estimator needs.
    #[error("{record} for {symbol} has no `{field}`")]
    MissingField {
        /// Record kind, e.g. "income statement".
        record: &'static str,
        /// Ticker symbol.
        symbol: String,
        /// JSON field name.
        field: &'static str,
    },
}

impl From<FmpError> for WaccError {
    fn from(err: FmpError) -> Self {
        match err {
            FmpError::NoData(_) | FmpError::MissingField { .. } => Self::MissingData(err.to_string()),
            FmpError::MissingApiKey | FmpError::InvalidPeriod(_) => {
                Self::InvalidInput(err.to_string())
            }
            FmpError::Request(_)
            | FmpError::Json(_)
            | FmpError::Api(_)
            | FmpError::RateLimitExceeded => Self::Fetch(err.to_string()),
        }
    }
}
