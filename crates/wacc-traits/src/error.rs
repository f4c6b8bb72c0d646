//! Error types for the WACC estimator.
//!
//! Failures fall into three families: fetch failures (network, HTTP status,
//! unparseable payloads), missing-data failures (an expected record or field
//! is absent) and domain failures (a formula cannot be evaluated on the
//! supplied numbers). Each family maps to its own variants so callers can tell
//! them apart instead of treating every failure alike.

use thiserror::Error;

/// The main error type for WACC estimation.
#[derive(Debug, Error)]
pub enum WaccError {
    /// A provider request failed or returned something that could not be parsed.
    #[error("Data fetch error: {0}")]
    Fetch(String),

    /// A provider response was well formed but lacked an expected record or field.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A time series is too short for the requested lookback.
    #[error("Insufficient history: need {required} observations, got {available}")]
    InsufficientHistory {
        /// Observations required.
        required: usize,
        /// Observations available after cleaning.
        available: usize,
    },

    /// A formula would divide by zero.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Caller supplied an unusable input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Broad family of a [`WaccError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, HTTP or parse failure.
    Fetch,
    /// Absent record or field.
    MissingData,
    /// Formula could not be evaluated.
    Domain,
}

impl WaccError {
    /// Returns the family this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::MissingData(_) => ErrorKind::MissingData,
            Self::InsufficientHistory { .. } | Self::DivisionByZero(_) | Self::InvalidInput(_) => {
                ErrorKind::Domain
            }
        }
    }

    /// Shorthand for a missing field on a named record.
    #[must_use]
    pub fn missing_field(record: &str, field: &str) -> Self {
        Self::MissingData(format!("{record} has no `{field}`"))
    }
}

/// A specialized Result type for WACC operations.
pub type Result<T> = std::result::Result<T, WaccError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WaccError::InsufficientHistory {
            required: 253,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient history: need 253 observations, got 100"
        );

        let err = WaccError::missing_field("income statement", "interestExpense");
        assert_eq!(
            err.to_string(),
            "Missing data: income statement has no `interestExpense`"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(WaccError::Fetch("timeout".into()).kind(), ErrorKind::Fetch);
        assert_eq!(
            WaccError::MissingData("beta".into()).kind(),
            ErrorKind::MissingData
        );
        assert_eq!(
            WaccError::DivisionByZero("capital".into()).kind(),
            ErrorKind::Domain
        );
        assert_eq!(
            WaccError::InsufficientHistory {
                required: 2,
                available: 1
            }
            .kind(),
            ErrorKind::Domain
        );
    }
}
