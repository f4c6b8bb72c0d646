//! FRED time-series client for the WACC estimator.
//!
//! Fetches named macroeconomic series, such as the one-year Treasury yield
//! (`TB1YR`) and the S&P 500 close (`SP500`), over a date window from the
//! St. Louis Fed's public graph export. [`FredClient`] implements
//! [`SeriesProvider`](wacc_traits::SeriesProvider).
//!
//! ```rust,ignore
//! use wacc_fred::FredClient;
//! use wacc_traits::DateWindow;
//!
//! let client = FredClient::new();
//! let window = DateWindow::trailing(chrono::Utc::now().date_naive(), 366);
//! let rows = client.observations("TB1YR", window).await?;
//! ```

mod client;
mod error;
mod provider;

pub use client::FredClient;
pub use error::FredError;

/// Default series for the one-year Treasury bill secondary market rate, in percent.
pub const TREASURY_1Y: &str = "TB1YR";

/// Default series for the S&P 500 daily close.
pub const SP500: &str = "SP500";

/// Result type for FRED operations.
pub type Result<T> = std::result::Result<T, FredError>;
