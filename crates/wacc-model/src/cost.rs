//! Cost of debt and cost of equity.

use wacc_traits::{IncomeStatementRecord, Result, TimeSeries, WaccError};

/// Trading sessions in a year, used as the market return lookback.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// EBIT over interest expense.
///
/// # Errors
///
/// Returns [`WaccError::DivisionByZero`] when interest expense is zero.
pub fn interest_coverage(income: &IncomeStatementRecord) -> Result<f64> {
    if income.interest_expense == 0.0 {
        return Err(WaccError::DivisionByZero(
            "interest coverage with zero interest expense".to_string(),
        ));
    }
    Ok(income.ebit() / income.interest_expense)
}

/// Latest Treasury yield converted from percent to a fraction.
///
/// # Errors
///
/// Returns [`WaccError::MissingData`] if the series has no present value.
pub fn risk_free_rate(treasury: &TimeSeries) -> Result<f64> {
    treasury
        .latest()
        .map(|pct| pct / 100.0)
        .ok_or_else(|| WaccError::MissingData(format!("series {} has no observations", treasury.id)))
}

/// `Kd = rf + spread`.
#[must_use]
pub fn cost_of_debt(risk_free_rate: f64, credit_spread: f64) -> f64 {
    risk_free_rate + credit_spread
}

/// Trailing return of an index over `sessions` observations.
///
/// Computed on the cleaned series as `last / value[len - 1 - sessions] - 1`,
/// so at least `sessions + 1` present values are required.
///
/// # Errors
///
/// Returns [`WaccError::InsufficientHistory`] if the cleaned series is too
/// short and [`WaccError::DivisionByZero`] if the base close is zero.
pub fn market_return(index: &TimeSeries, sessions: usize) -> Result<f64> {
    let closes = index.cleaned();
    let required = sessions + 1;
    if closes.len() < required {
        return Err(WaccError::InsufficientHistory {
            required,
            available: closes.len(),
        });
    }

    let last = closes[closes.len() - 1];
    let base = closes[closes.len() - 1 - sessions];
    if base == 0.0 {
        return Err(WaccError::DivisionByZero(format!(
            "series {} has a zero close {sessions} sessions back",
            index.id
        )));
    }

    Ok(last / base - 1.0)
}

/// CAPM: `Ke = rf + beta * (market_return - rf)`.
#[must_use]
pub fn cost_of_equity(risk_free_rate: f64, beta: f64, market_return: f64) -> f64 {
    risk_free_rate + beta * (market_return - risk_free_rate)
}
