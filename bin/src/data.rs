//! Provider and input setup for the WACC CLI.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::{env, time::Duration};
use wacc::{
    EstimatorConfig, WaccEstimator,
    fmp::{FmpClient, Period},
    fred::FredClient,
};

/// Environment variable overriding the HTTP timeout in seconds.
const TIMEOUT_ENV: &str = "WACC_HTTP_TIMEOUT_SECS";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the production estimator: FMP fundamentals and FRED series.
///
/// Reads `FMP_API_KEY` (and an optional timeout) from the environment or a
/// `.env` file.
pub(crate) fn build_estimator(
    period: Period,
    config: EstimatorConfig,
) -> Result<WaccEstimator<FmpClient, FredClient>> {
    let _ = dotenvy::dotenv();
    let timeout = http_timeout(env::var(TIMEOUT_ENV).ok().as_deref());

    let fmp = FmpClient::from_env()?
        .with_timeout(timeout)?
        .with_period(period);
    let fred = FredClient::new().with_timeout(timeout)?;

    Ok(WaccEstimator::with_config(fmp, fred, config))
}

/// Timeout from the raw environment value, falling back to the default.
fn http_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {date_str}"))
}

/// Window end date: the given date, or today in UTC.
pub(crate) fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate> {
    as_of.map_or_else(|| Ok(Utc::now().date_naive()), parse_date)
}
