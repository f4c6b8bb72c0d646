//! Rendering of estimation results.

use anyhow::Result;
use clap::ValueEnum;
use wacc::WaccResult;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Write a result in the requested format.
pub(crate) fn print_result(result: &WaccResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn pct(x: f64) -> String {
    format!("{:.4}%", x * 100.0)
}

/// Text report of every intermediate value.
pub(crate) fn render_text(r: &WaccResult) -> String {
    let rule = "━".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!("WACC OF {} (as of {})\n", r.ticker, r.as_of));
    out.push_str(&format!("{rule}\n\n"));

    out.push_str("Cost of debt\n");
    out.push_str(&format!("  {:<28} {:>14}\n", "Risk-free rate", pct(r.risk_free_rate)));
    out.push_str(&format!(
        "  {:<28} {:>14.4}\n",
        "Interest coverage ratio", r.interest_coverage
    ));
    out.push_str(&format!("  {:<28} {:>14}\n", "Implied rating", r.rating.as_str()));
    out.push_str(&format!("  {:<28} {:>14}\n", "Credit spread", pct(r.credit_spread)));
    out.push_str(&format!("  {:<28} {:>14}\n\n", "Cost of debt (Kd)", pct(r.cost_of_debt)));

    out.push_str("Cost of equity\n");
    out.push_str(&format!("  {:<28} {:>14.4}\n", "Beta", r.beta));
    out.push_str(&format!("  {:<28} {:>14}\n", "Market return (1y)", pct(r.market_return)));
    out.push_str(&format!(
        "  {:<28} {:>14}\n\n",
        "Cost of equity (Ke)",
        pct(r.cost_of_equity)
    ));

    out.push_str("Capital structure\n");
    out.push_str(&format!("  {:<28} {:>14}\n", "Debt weight", pct(r.debt_weight)));
    out.push_str(&format!("  {:<28} {:>14}\n", "Equity weight", pct(r.equity_weight)));
    out.push_str(&format!(
        "  {:<28} {:>14}\n\n",
        "Effective tax rate",
        pct(r.effective_tax_rate)
    ));

    out.push_str(&format!("WACC of {} is {}\n", r.ticker, pct(r.wacc)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wacc::{Ticker, model::CreditRating, traits::Date};

    fn sample() -> WaccResult {
        WaccResult {
            ticker: Ticker::new("MSFT").unwrap(),
            as_of: Date::from_ymd_opt(2024, 10, 14).unwrap(),
            risk_free_rate: 0.03,
            interest_coverage: 8.0,
            rating: CreditRating::Aa,
            credit_spread: 0.0078,
            cost_of_debt: 0.0378,
            beta: 1.2,
            market_return: 0.10,
            cost_of_equity: 0.114,
            effective_tax_rate: 0.21,
            debt_weight: 0.4,
            equity_weight: 0.6,
            wacc: 0.080_344,
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample());
        assert!(text.contains("WACC OF MSFT (as of 2024-10-14)"));
        assert!(text.contains("AA"));
        assert!(text.contains("3.7800%"));
        assert!(text.ends_with("WACC of MSFT is 8.0344%\n"));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["ticker"], "MSFT");
        assert_eq!(value["rating"], "AA");
        assert_eq!(value["as_of"], "2024-10-14");
    }
}
