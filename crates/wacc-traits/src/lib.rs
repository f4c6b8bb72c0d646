#![doc(issue_tracker_base_url = "https://github.com/factordynamics/wacc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and provider traits for the WACC estimator.
//!
//! This crate holds the records passed between the fetch and compute stages,
//! the shared error taxonomy and the narrow provider interfaces that keep
//! network code out of the financial formulas.

/// The version of the wacc-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod types;

// Re-exports
pub use error::{ErrorKind, Result, WaccError};
pub use provider::{FundamentalsProvider, SeriesProvider};
pub use types::{
    BalanceSheetRecord, DEFAULT_LOOKBACK_DAYS, Date, DateWindow, IncomeStatementRecord,
    MarketInputs, Observation, Ticker, TimeSeries,
};
