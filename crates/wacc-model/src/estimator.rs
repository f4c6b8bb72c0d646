//! The end-to-end estimation pipeline.
//!
//! Fetching and computing are kept apart: [`WaccEstimator::fetch`] talks to the
//! providers and returns plain [`MarketInputs`], and [`compute`] turns those
//! inputs into a [`WaccResult`] without any I/O.

use crate::{
    capital::{CapitalStructure, weighted_average_cost},
    cost::{
        TRADING_DAYS_PER_YEAR, cost_of_debt, cost_of_equity, interest_coverage, market_return,
        risk_free_rate,
    },
    spread::{CreditRating, classify},
};
use serde::{Deserialize, Serialize};
use wacc_traits::{
    BalanceSheetRecord, DEFAULT_LOOKBACK_DAYS, Date, DateWindow, FundamentalsProvider,
    IncomeStatementRecord, MarketInputs, Result, SeriesProvider, Ticker, WaccError,
};

/// Configuration for an estimation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Calendar days of series history to request (default: 366)
    pub lookback_days: i64,
    /// Sessions between the two index closes of the market return (default: 252)
    pub trading_days_per_year: usize,
    /// Series id of the risk-free yield, in percent (default: `TB1YR`)
    pub treasury_series: String,
    /// Series id of the equity index level (default: `SP500`)
    pub index_series: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
            treasury_series: "TB1YR".to_string(),
            index_series: "SP500".to_string(),
        }
    }
}

/// Every intermediate and final number of one estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaccResult {
    /// Company analysed.
    pub ticker: Ticker,
    /// Last date of the series window.
    pub as_of: Date,
    /// Risk-free rate as a fraction.
    pub risk_free_rate: f64,
    /// EBIT over interest expense.
    pub interest_coverage: f64,
    /// Rating implied by the coverage.
    pub rating: CreditRating,
    /// Spread over the risk-free rate.
    pub credit_spread: f64,
    /// Pre-tax cost of debt.
    pub cost_of_debt: f64,
    /// Company beta.
    pub beta: f64,
    /// Trailing one-year index return.
    pub market_return: f64,
    /// CAPM cost of equity.
    pub cost_of_equity: f64,
    /// Effective tax rate applied to the debt leg.
    pub effective_tax_rate: f64,
    /// Debt share of capital.
    pub debt_weight: f64,
    /// Equity share of capital.
    pub equity_weight: f64,
    /// Weighted average cost of capital.
    pub wacc: f64,
}

/// Company-level numbers with the two series already reduced to scalars.
///
/// This is what [`evaluate`] prices; [`compute`] builds it from
/// [`MarketInputs`], and callers with their own figures can fill it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Latest income statement.
    pub income: IncomeStatementRecord,
    /// Latest balance sheet.
    pub balance: BalanceSheetRecord,
    /// Effective tax rate as a fraction.
    pub effective_tax_rate: f64,
    /// Company beta.
    pub beta: f64,
    /// Risk-free rate as a fraction.
    pub risk_free_rate: f64,
    /// Trailing one-year index return.
    pub market_return: f64,
}

/// Price debt and equity and blend them into WACC.
///
/// # Errors
///
/// Returns [`WaccError::DivisionByZero`] for zero interest expense or a zero
/// capital base and [`WaccError::InvalidInput`] for a NaN coverage ratio.
pub fn evaluate(ticker: &Ticker, as_of: Date, inputs: &CostInputs) -> Result<WaccResult> {
    let rf = inputs.risk_free_rate;
    let coverage = interest_coverage(&inputs.income)?;
    let band = classify(coverage)?;
    let kd = cost_of_debt(rf, band.spread);
    tracing::debug!(
        %ticker,
        rf,
        coverage,
        rating = %band.rating,
        spread = band.spread,
        kd,
        "cost of debt"
    );

    let ke = cost_of_equity(rf, inputs.beta, inputs.market_return);
    tracing::debug!(
        %ticker,
        beta = inputs.beta,
        market_return = inputs.market_return,
        ke,
        "cost of equity"
    );

    let structure = CapitalStructure::from_balance_sheet(&inputs.balance)?;
    let wacc = weighted_average_cost(kd, ke, inputs.effective_tax_rate, structure);
    tracing::info!(%ticker, wacc, "wacc computed");

    Ok(WaccResult {
        ticker: ticker.clone(),
        as_of,
        risk_free_rate: rf,
        interest_coverage: coverage,
        rating: band.rating,
        credit_spread: band.spread,
        cost_of_debt: kd,
        beta: inputs.beta,
        market_return: inputs.market_return,
        cost_of_equity: ke,
        effective_tax_rate: inputs.effective_tax_rate,
        debt_weight: structure.debt_weight,
        equity_weight: structure.equity_weight,
        wacc,
    })
}

/// Compute the full result from fetched inputs.
///
/// # Errors
///
/// Propagates the domain and missing-data errors of the individual formulas:
/// zero interest expense, an empty Treasury series, a too short index
/// series or a zero capital base.
pub fn compute(inputs: &MarketInputs, config: &EstimatorConfig) -> Result<WaccResult> {
    let cost_inputs = CostInputs {
        income: inputs.income.clone(),
        balance: inputs.balance.clone(),
        effective_tax_rate: inputs.effective_tax_rate,
        beta: inputs.beta,
        risk_free_rate: risk_free_rate(&inputs.treasury)?,
        market_return: market_return(&inputs.equity_index, config.trading_days_per_year)?,
    };
    evaluate(&inputs.ticker, inputs.window.end, &cost_inputs)
}

/// Fetches inputs from a fundamentals and a series provider and computes WACC.
#[derive(Debug)]
pub struct WaccEstimator<F, S> {
    fundamentals: F,
    series: S,
    config: EstimatorConfig,
}

impl<F, S> WaccEstimator<F, S>
where
    F: FundamentalsProvider,
    S: SeriesProvider,
{
    /// Create an estimator with the default configuration.
    pub fn new(fundamentals: F, series: S) -> Self {
        Self::with_config(fundamentals, series, EstimatorConfig::default())
    }

    /// Create an estimator with the given configuration.
    pub const fn with_config(fundamentals: F, series: S, config: EstimatorConfig) -> Self {
        Self {
            fundamentals,
            series,
            config,
        }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Fetch every input for `ticker` with the series window ending at `as_of`.
    ///
    /// The six requests are independent and run concurrently; the first
    /// failure aborts the others.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or missing-data error reported by a provider.
    pub async fn fetch(&self, ticker: &Ticker, as_of: Date) -> Result<MarketInputs> {
        if self.config.lookback_days <= 0 {
            return Err(WaccError::InvalidInput(format!(
                "lookback must be positive, got {} days",
                self.config.lookback_days
            )));
        }

        let window = DateWindow::trailing(as_of, self.config.lookback_days);
        tracing::info!(
            %ticker,
            start = %window.start,
            end = %window.end,
            fundamentals = self.fundamentals.provider_name(),
            series = self.series.provider_name(),
            "fetching market inputs"
        );

        let (income, balance, effective_tax_rate, beta, treasury, equity_index) = tokio::try_join!(
            self.fundamentals.income_statement(ticker),
            self.fundamentals.balance_sheet(ticker),
            self.fundamentals.effective_tax_rate(ticker),
            self.fundamentals.beta(ticker),
            self.series.series(&self.config.treasury_series, window),
            self.series.series(&self.config.index_series, window),
        )?;

        tracing::debug!(
            %ticker,
            income_date = %income.date,
            balance_date = %balance.date,
            treasury_rows = treasury.len(),
            index_rows = equity_index.len(),
            "market inputs fetched"
        );

        Ok(MarketInputs {
            ticker: ticker.clone(),
            window,
            income,
            balance,
            effective_tax_rate,
            beta,
            treasury,
            equity_index,
        })
    }

    /// Fetch inputs and compute the result in one call.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::fetch`] or [`compute`].
    pub async fn estimate(&self, ticker: &Ticker, as_of: Date) -> Result<WaccResult> {
        let inputs = self.fetch(ticker, as_of).await?;
        compute(&inputs, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;
    use wacc_traits::{ErrorKind, Observation, TimeSeries};

    fn as_of() -> Date {
        Date::from_ymd_opt(2024, 10, 14).unwrap()
    }

    /// Daily closes rising so the trailing 252-session return is `ret`.
    fn index_with_return(end: Date, ret: f64) -> TimeSeries {
        let n = TRADING_DAYS_PER_YEAR + 1;
        let observations = (0..n)
            .map(|i| {
                let date = end - Duration::days((n - 1 - i) as i64);
                if i == n - 1 {
                    Observation::new(date, 1000.0 * (1.0 + ret))
                } else {
                    Observation::new(date, 1000.0)
                }
            })
            .chain(std::iter::once(Observation::missing(end + Duration::days(1))))
            .collect();
        TimeSeries::new("SP500", observations)
    }

    struct FixtureFundamentals {
        interest_expense: f64,
        missing_beta: bool,
    }

    impl Default for FixtureFundamentals {
        fn default() -> Self {
            Self {
                interest_expense: 10.0,
                missing_beta: false,
            }
        }
    }

    #[async_trait::async_trait]
    impl FundamentalsProvider for FixtureFundamentals {
        fn provider_name(&self) -> &'static str {
            "fixture"
        }

        async fn income_statement(&self, _ticker: &Ticker) -> Result<IncomeStatementRecord> {
            Ok(IncomeStatementRecord {
                date: "2024-06-30".to_string(),
                ebitda: 100.0,
                depreciation_and_amortization: 20.0,
                interest_expense: self.interest_expense,
            })
        }

        async fn balance_sheet(&self, _ticker: &Ticker) -> Result<BalanceSheetRecord> {
            Ok(BalanceSheetRecord {
                date: "2024-06-30".to_string(),
                total_debt: 40.0,
                total_stockholders_equity: 60.0,
            })
        }

        async fn effective_tax_rate(&self, _ticker: &Ticker) -> Result<f64> {
            Ok(0.21)
        }

        async fn beta(&self, ticker: &Ticker) -> Result<f64> {
            if self.missing_beta {
                return Err(WaccError::missing_field(ticker.as_str(), "beta"));
            }
            Ok(1.2)
        }
    }

    struct FixtureSeries {
        index_sessions: Option<usize>,
    }

    #[async_trait::async_trait]
    impl SeriesProvider for FixtureSeries {
        fn provider_name(&self) -> &'static str {
            "fixture"
        }

        async fn series(&self, id: &str, window: DateWindow) -> Result<TimeSeries> {
            match id {
                "TB1YR" => Ok(TimeSeries::new(
                    id,
                    vec![
                        Observation::new(window.start, 5.0),
                        Observation::new(window.end, 3.0),
                    ],
                )),
                "SP500" => {
                    let mut series = index_with_return(window.end, 0.10);
                    if let Some(n) = self.index_sessions {
                        let skip = series.observations.len() - n;
                        series.observations = series.observations.split_off(skip);
                    }
                    Ok(series)
                }
                other => Err(WaccError::Fetch(format!("unknown series {other}"))),
            }
        }
    }

    fn estimator(
        fundamentals: FixtureFundamentals,
        index_sessions: Option<usize>,
    ) -> WaccEstimator<FixtureFundamentals, FixtureSeries> {
        WaccEstimator::new(fundamentals, FixtureSeries { index_sessions })
    }

    #[test]
    fn test_config_default() {
        let config = EstimatorConfig::default();
        assert_eq!(config.lookback_days, 366);
        assert_eq!(config.trading_days_per_year, 252);
        assert_eq!(config.treasury_series, "TB1YR");
        assert_eq!(config.index_series, "SP500");
    }

    #[test]
    fn test_evaluate_without_series() {
        let inputs = CostInputs {
            income: IncomeStatementRecord {
                date: "2024-06-30".to_string(),
                ebitda: 100.0,
                depreciation_and_amortization: 20.0,
                interest_expense: 10.0,
            },
            balance: BalanceSheetRecord {
                date: "2024-06-30".to_string(),
                total_debt: 40.0,
                total_stockholders_equity: 60.0,
            },
            effective_tax_rate: 0.21,
            beta: 1.2,
            risk_free_rate: 0.03,
            market_return: 0.10,
        };
        let result = evaluate(&Ticker::new("TEST").unwrap(), as_of(), &inputs).unwrap();

        assert_eq!(result.rating, CreditRating::Aa);
        assert_relative_eq!(result.cost_of_debt, 0.0378, epsilon = 1e-12);
        assert_relative_eq!(result.cost_of_equity, 0.114, epsilon = 1e-12);
        assert_relative_eq!(result.wacc, 0.080_344_8, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_reports_short_index() {
        let end = as_of();
        let inputs = MarketInputs {
            ticker: Ticker::new("TEST").unwrap(),
            window: DateWindow::trailing(end, 366),
            income: IncomeStatementRecord {
                date: "2024-06-30".to_string(),
                ebitda: 100.0,
                depreciation_and_amortization: 20.0,
                interest_expense: 10.0,
            },
            balance: BalanceSheetRecord {
                date: "2024-06-30".to_string(),
                total_debt: 40.0,
                total_stockholders_equity: 60.0,
            },
            effective_tax_rate: 0.21,
            beta: 1.2,
            treasury: TimeSeries::new("TB1YR", vec![Observation::new(end, 3.0)]),
            equity_index: TimeSeries::new("SP500", vec![Observation::new(end, 5000.0)]),
        };

        let err = compute(&inputs, &EstimatorConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[tokio::test]
    async fn test_estimate_end_to_end() {
        let ticker = Ticker::new("msft").unwrap();
        let result = estimator(FixtureFundamentals::default(), None)
            .estimate(&ticker, as_of())
            .await
            .unwrap();

        assert_eq!(result.ticker.as_str(), "MSFT");
        assert_eq!(result.as_of, as_of());
        assert_relative_eq!(result.risk_free_rate, 0.03, epsilon = 1e-12);
        assert_relative_eq!(result.interest_coverage, 8.0, epsilon = 1e-12);
        assert_eq!(result.rating, CreditRating::Aa);
        assert_relative_eq!(result.credit_spread, 0.0078);
        assert_relative_eq!(result.cost_of_debt, 0.0378, epsilon = 1e-12);
        assert_relative_eq!(result.market_return, 0.10, epsilon = 1e-12);
        assert_relative_eq!(result.cost_of_equity, 0.114, epsilon = 1e-12);
        assert_relative_eq!(result.debt_weight, 0.4, epsilon = 1e-12);
        assert_relative_eq!(result.equity_weight, 0.6, epsilon = 1e-12);
        assert_relative_eq!(result.wacc, 0.080_344_8, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_fetch_builds_window() {
        let ticker = Ticker::new("MSFT").unwrap();
        let inputs = estimator(FixtureFundamentals::default(), None)
            .fetch(&ticker, as_of())
            .await
            .unwrap();

        assert_eq!(inputs.window, DateWindow::trailing(as_of(), 366));
        assert_eq!(inputs.treasury.len(), 2);
        assert_eq!(inputs.equity_index.cleaned().len(), TRADING_DAYS_PER_YEAR + 1);
    }

    #[tokio::test]
    async fn test_missing_field_surfaces_as_missing_data() {
        let fundamentals = FixtureFundamentals {
            missing_beta: true,
            ..Default::default()
        };
        let err = estimator(fundamentals, None)
            .estimate(&Ticker::new("MSFT").unwrap(), as_of())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingData);
    }

    #[tokio::test]
    async fn test_short_history_is_domain_error() {
        let err = estimator(FixtureFundamentals::default(), Some(100))
            .estimate(&Ticker::new("MSFT").unwrap(), as_of())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WaccError::InsufficientHistory {
                required: 253,
                available: 99
            }
        ));
    }

    #[tokio::test]
    async fn test_zero_interest_expense() {
        let fundamentals = FixtureFundamentals {
            interest_expense: 0.0,
            ..Default::default()
        };
        let err = estimator(fundamentals, None)
            .estimate(&Ticker::new("MSFT").unwrap(), as_of())
            .await
            .unwrap_err();

        assert!(matches!(err, WaccError::DivisionByZero(_)));
    }

    #[tokio::test]
    async fn test_unknown_series_is_fetch_error() {
        let config = EstimatorConfig {
            index_series: "NOPE".to_string(),
            ..Default::default()
        };
        let estimator = WaccEstimator::with_config(
            FixtureFundamentals::default(),
            FixtureSeries {
                index_sessions: None,
            },
            config,
        );
        let err = estimator
            .fetch(&Ticker::new("MSFT").unwrap(), as_of())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fetch);
    }

    #[tokio::test]
    async fn test_non_positive_lookback() {
        let config = EstimatorConfig {
            lookback_days: 0,
            ..Default::default()
        };
        let estimator = WaccEstimator::with_config(
            FixtureFundamentals::default(),
            FixtureSeries {
                index_sessions: None,
            },
            config,
        );
        let err = estimator
            .fetch(&Ticker::new("MSFT").unwrap(), as_of())
            .await
            .unwrap_err();

        assert!(matches!(err, WaccError::InvalidInput(_)));
    }
}
