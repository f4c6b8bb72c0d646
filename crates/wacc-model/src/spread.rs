//! Credit rating classification from the interest coverage ratio.
//!
//! The table maps coverage bands to a synthetic rating and the spread a
//! borrower of that rating pays over the risk-free rate. Bands are open at
//! the lower bound and closed at the upper bound, ordered from the highest
//! coverage down, and together cover the whole real line.

use serde::{Deserialize, Serialize};
use std::fmt;
use wacc_traits::{Result, WaccError};

/// Synthetic credit rating implied by interest coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    /// AAA
    #[serde(rename = "AAA")]
    Aaa,
    /// AA
    #[serde(rename = "AA")]
    Aa,
    /// A+
    #[serde(rename = "A+")]
    APlus,
    /// A
    #[serde(rename = "A")]
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// BBB
    #[serde(rename = "BBB")]
    Bbb,
    /// BB+
    #[serde(rename = "BB+")]
    BbPlus,
    /// BB
    #[serde(rename = "BB")]
    Bb,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    #[serde(rename = "B")]
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// CCC
    #[serde(rename = "CCC")]
    Ccc,
    /// CC
    #[serde(rename = "CC")]
    Cc,
    /// C
    #[serde(rename = "C")]
    C,
    /// D
    #[serde(rename = "D")]
    D,
}

impl CreditRating {
    /// Conventional rating label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::Bbb => "BBB",
            Self::BbPlus => "BB+",
            Self::Bb => "BB",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::Ccc => "CCC",
            Self::Cc => "CC",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for CreditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the spread table: coverage in `(lower, upper]` earns `spread`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditBand {
    /// Exclusive lower bound of the coverage range.
    pub lower: f64,
    /// Inclusive upper bound of the coverage range.
    pub upper: f64,
    /// Rating implied by the band.
    pub rating: CreditRating,
    /// Annual spread over the risk-free rate, as a decimal fraction.
    pub spread: f64,
}

impl CreditBand {
    /// Whether `ratio` falls inside `(lower, upper]`.
    #[must_use]
    pub fn contains(&self, ratio: f64) -> bool {
        ratio > self.lower && ratio <= self.upper
    }
}

const fn band(lower: f64, upper: f64, rating: CreditRating, spread: f64) -> CreditBand {
    CreditBand {
        lower,
        upper,
        rating,
        spread,
    }
}

/// Coverage bands from the strongest credit to the weakest.
///
/// The A band closes at 5.5 so that it meets the A+ band without a gap.
pub static CREDIT_SPREAD_TABLE: [CreditBand; 15] = [
    band(8.5, f64::INFINITY, CreditRating::Aaa, 0.0063),
    band(6.5, 8.5, CreditRating::Aa, 0.0078),
    band(5.5, 6.5, CreditRating::APlus, 0.0098),
    band(4.25, 5.5, CreditRating::A, 0.0108),
    band(3.0, 4.25, CreditRating::AMinus, 0.0122),
    band(2.5, 3.0, CreditRating::Bbb, 0.0156),
    band(2.25, 2.5, CreditRating::BbPlus, 0.0200),
    band(2.0, 2.25, CreditRating::Bb, 0.0240),
    band(1.75, 2.0, CreditRating::BPlus, 0.0351),
    band(1.5, 1.75, CreditRating::B, 0.0421),
    band(1.25, 1.5, CreditRating::BMinus, 0.0515),
    band(0.8, 1.25, CreditRating::Ccc, 0.0820),
    band(0.65, 0.8, CreditRating::Cc, 0.0864),
    band(0.2, 0.65, CreditRating::C, 0.1134),
    band(f64::NEG_INFINITY, 0.2, CreditRating::D, 0.1512),
];

/// Find the band an interest coverage ratio falls in.
///
/// Every ratio other than NaN matches exactly one band; positive infinity
/// lands in AAA and negative infinity in D.
///
/// # Errors
///
/// Returns [`WaccError::InvalidInput`] if `ratio` is NaN.
pub fn classify(ratio: f64) -> Result<&'static CreditBand> {
    if ratio.is_nan() {
        return Err(WaccError::InvalidInput(
            "interest coverage ratio is NaN".to_string(),
        ));
    }

    // Bounds at infinity: (8.5, inf] and (-inf, 0.2]
    if ratio == f64::NEG_INFINITY {
        return Ok(&CREDIT_SPREAD_TABLE[CREDIT_SPREAD_TABLE.len() - 1]);
    }

    CREDIT_SPREAD_TABLE
        .iter()
        .find(|b| b.contains(ratio))
        .ok_or_else(|| WaccError::InvalidInput(format!("no credit band for coverage {ratio}")))
}

/// Spread implied by an interest coverage ratio.
///
/// # Errors
///
/// Returns [`WaccError::InvalidInput`] if `ratio` is NaN.
pub fn credit_spread(ratio: f64) -> Result<f64> {
    classify(ratio).map(|b| b.spread)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_contiguous() {
        assert_eq!(CREDIT_SPREAD_TABLE[0].upper, f64::INFINITY);
        assert_eq!(CREDIT_SPREAD_TABLE[14].lower, f64::NEG_INFINITY);
        for pair in CREDIT_SPREAD_TABLE.windows(2) {
            assert_eq!(pair[0].lower, pair[1].upper, "gap below {}", pair[0].rating);
            assert!(pair[0].spread < pair[1].spread);
        }
    }

    #[test]
    fn test_boundaries_belong_to_lower_band() {
        assert_eq!(classify(8.5).unwrap().rating, CreditRating::Aa);
        assert_eq!(credit_spread(8.5).unwrap(), 0.0078);
        assert_eq!(classify(8.500_001).unwrap().rating, CreditRating::Aaa);
        assert_eq!(classify(3.0).unwrap().rating, CreditRating::Bbb);
        assert_eq!(classify(0.2).unwrap().rating, CreditRating::D);
        assert_eq!(classify(0.200_001).unwrap().rating, CreditRating::C);
    }

    #[test]
    fn test_seam_between_a_and_a_plus() {
        assert_eq!(classify(5.49).unwrap().rating, CreditRating::A);
        assert_eq!(classify(5.495).unwrap().rating, CreditRating::A);
        assert_eq!(classify(5.5).unwrap().rating, CreditRating::A);
        assert_eq!(classify(5.500_1).unwrap().rating, CreditRating::APlus);
    }

    #[test]
    fn test_every_band_reachable() {
        let samples = [
            20.0, 8.0, 6.0, 5.0, 4.0, 2.75, 2.4, 2.1, 1.8, 1.6, 1.3, 1.0, 0.7, 0.5, -3.0,
        ];
        for (sample, expected) in samples.iter().zip(CREDIT_SPREAD_TABLE.iter()) {
            assert_eq!(classify(*sample).unwrap(), expected);
        }
    }

    #[test]
    fn test_exactly_one_band_matches() {
        let mut ratio = -5.0;
        while ratio < 15.0 {
            let matches = CREDIT_SPREAD_TABLE
                .iter()
                .filter(|b| b.contains(ratio))
                .count();
            assert_eq!(matches, 1, "ratio {ratio}");
            ratio += 0.01;
        }
    }

    #[test]
    fn test_spread_non_increasing_in_coverage() {
        let mut previous = f64::INFINITY;
        let mut ratio = -2.0;
        while ratio < 12.0 {
            let spread = credit_spread(ratio).unwrap();
            assert!(spread <= previous, "spread rose at ratio {ratio}");
            previous = spread;
            ratio += 0.005;
        }
    }

    #[test]
    fn test_infinite_and_nan() {
        assert_eq!(classify(f64::INFINITY).unwrap().rating, CreditRating::Aaa);
        assert_eq!(classify(f64::NEG_INFINITY).unwrap().rating, CreditRating::D);
        assert!(matches!(classify(f64::NAN), Err(WaccError::InvalidInput(_))));
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(CreditRating::BbPlus.to_string(), "BB+");
        assert_eq!(CreditRating::AMinus.as_str(), "A-");
    }

    #[test]
    fn test_serialized_labels_match_display() {
        for band in &CREDIT_SPREAD_TABLE {
            let json = serde_json::to_string(&band.rating).unwrap();
            assert_eq!(json, format!("\"{}\"", band.rating));
            let back: CreditRating = serde_json::from_str(&json).unwrap();
            assert_eq!(back, band.rating);
        }
    }
}
