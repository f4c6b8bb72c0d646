//! Offline compute command implementation.

use crate::report::{self, OutputFormat};
use anyhow::Result;
use chrono::Utc;
use wacc::{
    Ticker, WaccResult,
    model::{CostInputs, evaluate},
    traits::{BalanceSheetRecord, IncomeStatementRecord},
};

/// Figures supplied on the command line.
#[derive(Debug)]
pub(crate) struct ComputeArgs {
    pub(crate) ticker: String,
    pub(crate) ebitda: f64,
    pub(crate) depreciation: f64,
    pub(crate) interest_expense: f64,
    pub(crate) total_debt: f64,
    pub(crate) total_equity: f64,
    pub(crate) tax_rate: f64,
    pub(crate) beta: f64,
    pub(crate) risk_free_rate: f64,
    pub(crate) market_return: f64,
}

fn run(args: &ComputeArgs) -> Result<WaccResult> {
    let ticker = Ticker::new(&args.ticker)?;
    let today = Utc::now().date_naive();
    let inputs = CostInputs {
        income: IncomeStatementRecord {
            date: today.to_string(),
            ebitda: args.ebitda,
            depreciation_and_amortization: args.depreciation,
            interest_expense: args.interest_expense,
        },
        balance: BalanceSheetRecord {
            date: today.to_string(),
            total_debt: args.total_debt,
            total_stockholders_equity: args.total_equity,
        },
        effective_tax_rate: args.tax_rate,
        beta: args.beta,
        risk_free_rate: args.risk_free_rate,
        market_return: args.market_return,
    };
    Ok(evaluate(&ticker, today, &inputs)?)
}

/// Compute WACC from explicit figures and print it.
pub(crate) fn compute(args: &ComputeArgs, format: OutputFormat) -> Result<()> {
    let result = run(args)?;
    report::print_result(&result, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args() -> ComputeArgs {
        ComputeArgs {
            ticker: "manual".to_string(),
            ebitda: 100.0,
            depreciation: 20.0,
            interest_expense: 10.0,
            total_debt: 40.0,
            total_equity: 60.0,
            tax_rate: 0.21,
            beta: 1.2,
            risk_free_rate: 0.03,
            market_return: 0.10,
        }
    }

    #[test]
    fn test_compute_reference_case() {
        let result = run(&args()).unwrap();
        assert_eq!(result.ticker.as_str(), "MANUAL");
        assert_relative_eq!(result.wacc, 0.080_344_8, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_zero_capital() {
        let args = ComputeArgs {
            total_debt: 0.0,
            total_equity: 0.0,
            ..args()
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Division by zero"));
    }
}
