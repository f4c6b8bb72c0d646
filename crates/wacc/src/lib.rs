#![doc(issue_tracker_base_url = "https://github.com/factordynamics/wacc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # wacc
//!
//! Weighted average cost of capital for a single public company.
//!
//! wacc is an umbrella crate that re-exports the wacc sub-crates for
//! convenience: the shared types and provider traits, the FMP and FRED
//! clients, and the cost of capital model.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wacc::prelude::*;
//! use wacc::fmp::FmpClient;
//! use wacc::fred::FredClient;
//!
//! # async fn example() -> Result<()> {
//! let estimator = WaccEstimator::new(FmpClient::from_env()?, FredClient::new());
//! let today = chrono::Utc::now().date_naive();
//! let result = estimator.estimate(&Ticker::new("MSFT")?, today).await?;
//!
//! println!("WACC of {} is {:.2}%", result.ticker, result.wacc * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Records, errors and the [`FundamentalsProvider`] / [`SeriesProvider`] seams
//! - [`model`] - Credit spread table, cost formulas, WACC aggregation, estimator
//! - [`fmp`] - Financial Modeling Prep client for fundamentals and beta
//! - [`fred`] - FRED client for the Treasury yield and equity index series
//!
//! ## Pipeline
//!
//! Data flows strictly forward:
//!
//! 1. **Fetch** the income statement, balance sheet, tax rate, beta and two series
//! 2. **Classify** interest coverage into a credit spread
//! 3. **Price** debt (`rf + spread`) and equity (CAPM)
//! 4. **Aggregate** with book capital weights into WACC

/// Version information for the wacc crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Shared records, error taxonomy and provider traits.
pub mod traits {
    pub use wacc_traits::*;
}

pub use wacc_traits::{
    ErrorKind, FundamentalsProvider, MarketInputs, Result, SeriesProvider, Ticker, WaccError,
};

// ============================================================================
// Model
// ============================================================================

/// Credit rating classification, cost components and aggregation.
///
/// ```text
/// coverage = (EBITDA - D&A) / interest expense
/// Kd       = rf + spread(coverage)
/// Ke       = rf + beta * (market return - rf)
/// WACC     = Kd * (1 - t) * D/(D+E) + Ke * E/(D+E)
/// ```
pub mod model {
    pub use wacc_model::*;
}

pub use wacc_model::{EstimatorConfig, WaccEstimator, WaccResult};

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
pub mod fmp {
    pub use wacc_fmp::*;
}

/// FRED graph-export client. No API key needed.
pub mod fred {
    pub use wacc_fred::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use wacc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::traits::{Date, DateWindow, Ticker};
    pub use crate::{EstimatorConfig, WaccEstimator, WaccResult};
    pub use crate::{FundamentalsProvider, SeriesProvider};
    pub use crate::{Result, WaccError};
}

// ============================================================================
// Tests
// ============================================================================
