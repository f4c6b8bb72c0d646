//! Spread table command implementation.

use wacc::model::{CREDIT_SPREAD_TABLE, CreditBand};

fn describe_range(band: &CreditBand) -> String {
    match (band.lower.is_finite(), band.upper.is_finite()) {
        (true, false) => format!("> {}", band.lower),
        (false, true) => format!("<= {}", band.upper),
        _ => format!("({}, {}]", band.lower, band.upper),
    }
}

/// Print the interest coverage to credit spread table.
pub(crate) fn list_spreads() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Interest Coverage Credit Spreads              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("{:<16} {:>8} {:>12}", "Coverage", "Rating", "Spread");
    println!("{}", "─".repeat(38));

    for band in &CREDIT_SPREAD_TABLE {
        println!(
            "{:<16} {:>8} {:>11.2}%",
            describe_range(band),
            band.rating.as_str(),
            band.spread * 100.0
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_range() {
        assert_eq!(describe_range(&CREDIT_SPREAD_TABLE[0]), "> 8.5");
        assert_eq!(describe_range(&CREDIT_SPREAD_TABLE[3]), "(4.25, 5.5]");
        assert_eq!(describe_range(&CREDIT_SPREAD_TABLE[14]), "<= 0.2");
    }
}
