//! Capital structure weights and the weighted average cost of capital.

use serde::{Deserialize, Serialize};
use wacc_traits::{BalanceSheetRecord, Result, WaccError};

/// Share of debt and equity in total book capital.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalStructure {
    /// `D / (D + E)`
    pub debt_weight: f64,
    /// `E / (D + E)`
    pub equity_weight: f64,
}

impl CapitalStructure {
    /// Weights from total debt and total stockholders' equity.
    ///
    /// The equity weight is taken as the complement of the debt weight so the
    /// two always sum to one.
    ///
    /// # Errors
    ///
    /// Returns [`WaccError::DivisionByZero`] if debt plus equity is zero.
    pub fn new(total_debt: f64, total_equity: f64) -> Result<Self> {
        let capital = total_debt + total_equity;
        if capital == 0.0 {
            return Err(WaccError::DivisionByZero(
                "capital structure with zero total debt plus equity".to_string(),
            ));
        }

        let debt_weight = total_debt / capital;
        Ok(Self {
            debt_weight,
            equity_weight: 1.0 - debt_weight,
        })
    }

    /// Weights from a balance sheet.
    ///
    /// # Errors
    ///
    /// Returns [`WaccError::DivisionByZero`] if debt plus equity is zero.
    pub fn from_balance_sheet(balance: &BalanceSheetRecord) -> Result<Self> {
        Self::new(balance.total_debt, balance.total_stockholders_equity)
    }
}

/// `WACC = Kd * (1 - t) * wd + Ke * we`.
#[must_use]
pub fn weighted_average_cost(
    cost_of_debt: f64,
    cost_of_equity: f64,
    effective_tax_rate: f64,
    structure: CapitalStructure,
) -> f64 {
    cost_of_debt * (1.0 - effective_tax_rate) * structure.debt_weight
        + cost_of_equity * structure.equity_weight
}
