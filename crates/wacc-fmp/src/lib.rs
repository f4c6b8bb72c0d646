//! Financial Modeling Prep (FMP) API client for the WACC estimator.
//!
//! This crate fetches the company fundamentals the estimator needs from
//! the [Financial Modeling Prep](https://financialmodelingprep.com/) API:
//! the latest income statement, balance sheet, financial ratios and company
//! profile. [`FmpClient`] implements
//! [`FundamentalsProvider`](wacc_traits::FundamentalsProvider).
//!
//! # Usage
//!
//! ```rust,ignore
//! use wacc_fmp::{FmpClient, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?.with_period(Period::Annual);
//!
//!     // Latest income statement
//!     let income = client.income_statement("MSFT").await?;
//!
//!     // Beta from the company profile
//!     let beta = client.profile("MSFT").await?.beta()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod provider;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
