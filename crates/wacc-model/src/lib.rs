//! Cost of capital calculations for the WACC estimator.
//!
//! This crate implements the three computational stages downstream of the
//! data fetch:
//!
//! - **Credit rating classification** ([`spread`]): interest coverage to
//!   synthetic rating and credit spread
//! - **Cost components** ([`cost`]): risk-free rate, cost of debt, trailing
//!   market return and CAPM cost of equity
//! - **Aggregation** ([`capital`]): capital structure weights and WACC
//!
//! [`estimator`] ties them to the providers.
//!
//! # Example
//!
//! ```ignore
//! use wacc_model::{WaccEstimator, compute};
//! use wacc_fmp::FmpClient;
//! use wacc_fred::FredClient;
//!
//! let estimator = WaccEstimator::new(FmpClient::from_env()?, FredClient::new());
//! let result = estimator.estimate(&Ticker::new("MSFT")?, today).await?;
//! println!("{:.2}%", result.wacc * 100.0);
//! ```

#![warn(missing_docs)]

pub mod capital;
pub mod cost;
pub mod estimator;
pub mod spread;

pub use capital::{CapitalStructure, weighted_average_cost};
pub use cost::{
    TRADING_DAYS_PER_YEAR, cost_of_debt, cost_of_equity, interest_coverage, market_return,
    risk_free_rate,
};
pub use estimator::{CostInputs, EstimatorConfig, WaccEstimator, WaccResult, compute, evaluate};
pub use spread::{CREDIT_SPREAD_TABLE, CreditBand, CreditRating, classify, credit_spread};
