//! Estimate command implementation.

use crate::{
    data,
    report::{self, OutputFormat},
};
use anyhow::Result;
use wacc::{EstimatorConfig, Ticker, WaccError, fmp::Period};

/// Arguments of the `estimate` subcommand.
#[derive(Debug)]
pub(crate) struct EstimateArgs {
    pub(crate) ticker: String,
    pub(crate) as_of: Option<String>,
    pub(crate) period: String,
    pub(crate) lookback_days: i64,
    pub(crate) treasury_series: String,
    pub(crate) index_series: String,
}

/// Fetch inputs for one ticker and print its WACC.
pub(crate) async fn estimate(args: EstimateArgs, format: OutputFormat) -> Result<()> {
    let ticker = Ticker::new(&args.ticker)?;
    let as_of = data::resolve_as_of(args.as_of.as_deref())?;
    let period: Period = args.period.parse()?;

    let config = EstimatorConfig {
        lookback_days: args.lookback_days,
        treasury_series: args.treasury_series,
        index_series: args.index_series,
        ..Default::default()
    };

    tracing::info!(%ticker, %as_of, period = period.as_str(), "estimating wacc");

    let estimator = data::build_estimator(period, config)?;
    let result = estimator
        .estimate(&ticker, as_of)
        .await
        .map_err(|e| {
            let context = failure_context(&ticker, &e);
            anyhow::Error::new(e).context(context)
        })?;

    report::print_result(&result, format)
}

/// Headline for a failed estimation, with a hint when the index window was too short.
fn failure_context(ticker: &Ticker, err: &WaccError) -> String {
    match err {
        WaccError::InsufficientHistory { .. } => format!(
            "WACC estimation failed for {ticker}: the index window is too short, \
             retry with a larger --lookback-days (e.g. 400)"
        ),
        _ => format!("WACC estimation failed for {ticker}"),
    }
}
