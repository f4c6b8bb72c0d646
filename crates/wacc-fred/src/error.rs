//! Error types for the FRED client.

use thiserror::Error;
use wacc_traits::WaccError;

/// Errors that can occur when fetching FRED series.
#[derive(Debug, Error)]
pub enum FredError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// FRED answered with a non-success status.
    #[error("FRED API error: {0}")]
    Api(String),

    /// CSV payload could not be read.
    #[error("Failed to parse CSV response: {0}")]
    Csv(#[from] csv::Error),

    /// A row carried a date or value that is not understood.
    #[error("Malformed row {row} in series {series}: {reason}")]
    MalformedRow {
        /// Series identifier.
        series: String,
        /// 1-based data row number.
        row: usize,
        /// What was wrong.
        reason: String,
    },

    /// The response held no observations at all.
    #[error("No observations for series {0}")]
    NoData(String),
}

impl From<FredError> for WaccError {
    fn from(err: FredError) -> Self {
        match err {
            FredError::NoData(_) => Self::MissingData(err.to_string()),
            FredError::Request(_)
            | FredError::Api(_)
            | FredError::Csv(_)
            | FredError::MalformedRow { .. } => Self::Fetch(err.to_string()),
        }
    }
}
