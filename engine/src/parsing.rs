//! Parsing of the textual input fields
//!
//! Weight and goal arrive as text with either `,` or `.` as the decimal
//! separator. The activity field carries two numbers in one select value,
//! `"<multiplier>,<weekly extra fluid ounces>"`, and each formula that reads
//! it has its own stripping rule.

use crate::errors::CalcError;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Trailing `,<digits>` annotation removed before reading the multiplier
static MULTIPLIER_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",[0-9]+$").expect("multiplier suffix pattern is valid"));

/// Leading `<number>,` prefix removed before reading the weekly extra water
static WATER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+.[0-9]+,").expect("water prefix pattern is valid"));

/// Parse a decimal number accepting both `,` and `.` as separator
///
/// Every comma becomes a dot, so `"70,5"` and `"70.5"` are the same value
/// while `"1,000,5"` is rejected.
pub fn normalize_decimal(field: &'static str, text: &str) -> Result<f64, CalcError> {
    let normalized = text.trim().replace(',', ".");
    parse_finite(&normalized).ok_or_else(|| CalcError::invalid_number(field, text))
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Activity selection decoded into its two components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactor {
    /// Multiplier applied to BMR for maintenance calories
    pub multiplier: f64,
    /// Extra fluid ounces of water per week
    pub weekly_extra: f64,
}

impl ActivityFactor {
    /// Decode an activity select value
    pub fn parse(text: &str) -> Result<Self, CalcError> {
        Ok(Self {
            multiplier: Self::parse_multiplier(text)?,
            weekly_extra: Self::parse_weekly_extra(text)?,
        })
    }

    /// Multiplier rule: drop a trailing `,<digits>` and read the rest
    pub fn parse_multiplier(text: &str) -> Result<f64, CalcError> {
        let trimmed = text.trim();
        let stripped = MULTIPLIER_SUFFIX.replace_all(trimmed, "");
        parse_finite(stripped.trim()).ok_or_else(|| CalcError::invalid_number("activity", text))
    }

    /// Water rule: drop every `<digits><any><digits>,` and read the rest.
    /// An empty remainder counts as zero.
    pub fn parse_weekly_extra(text: &str) -> Result<f64, CalcError> {
        let stripped = WATER_PREFIX.replace_all(text.trim(), "");
        let remainder = stripped.trim();
        if remainder.is_empty() {
            return Ok(0.0);
        }
        parse_finite(remainder).ok_or_else(|| CalcError::invalid_number("activity", text))
    }

    /// Build the select value for a multiplier and weekly extra ounces
    pub fn encode(multiplier: f64, weekly_extra_oz: u32) -> String {
        format!("{},{}", multiplier, weekly_extra_oz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("70", 70.0)]
    #[case("70.5", 70.5)]
    #[case("70,5", 70.5)]
    #[case(" 82,25 ", 82.25)]
    #[case("60.", 60.0)]
    fn test_normalize_decimal(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(normalize_decimal("weight", input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("70,5,1")]
    #[case("70.5.1")]
    #[case("inf")]
    fn test_normalize_decimal_rejects(#[case] input: &str) {
        let err = normalize_decimal("goal", input).unwrap_err();
        assert!(matches!(err, CalcError::InvalidNumber { field: "goal", .. }));
    }

    #[test]
    fn test_activity_plain_multiplier() {
        // Without a comma the water rule leaves the whole value in place
        let factor = ActivityFactor::parse("1.2").unwrap();
        assert_eq!(factor.multiplier, 1.2);
        assert_eq!(factor.weekly_extra, 1.2);
    }

    #[test]
    fn test_activity_encoded_value() {
        let factor = ActivityFactor::parse("1.375,36").unwrap();
        assert_eq!(factor.multiplier, 1.375);
        assert_eq!(factor.weekly_extra, 36.0);

        let factor = ActivityFactor::parse("1.2,5").unwrap();
        assert_eq!(factor.multiplier, 1.2);
        assert_eq!(factor.weekly_extra, 5.0);
    }

    #[test]
    fn test_activity_non_numeric_annotation() {
        // Neither rule strips a non-digit annotation into a number
        assert!(ActivityFactor::parse_multiplier("1.2,extra").is_err());
        assert!(ActivityFactor::parse_weekly_extra("1.2,extra").is_err());
        assert!(matches!(
            ActivityFactor::parse("1.2,extra"),
            Err(CalcError::InvalidNumber { field: "activity", .. })
        ));
    }

    #[test]
    fn test_activity_empty_water_remainder() {
        assert_eq!(ActivityFactor::parse_weekly_extra("1.55,").unwrap(), 0.0);
    }

    #[test]
    fn test_encode() {
        assert_eq!(ActivityFactor::encode(1.2, 0), "1.2,0");
        assert_eq!(ActivityFactor::encode(1.725, 144), "1.725,144");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: comma and dot separators normalize to the same value
        #[test]
        fn prop_comma_equals_dot(whole in 1u32..500, frac in 0u32..100) {
            let dot = normalize_decimal("weight", &format!("{}.{}", whole, frac)).unwrap();
            let comma = normalize_decimal("weight", &format!("{},{}", whole, frac)).unwrap();
            prop_assert_eq!(dot, comma);
        }

        /// Property: encoded select values decode to their components
        #[test]
        fn prop_encode_decode(mult_hundredths in 101u32..250, extra in 0u32..400) {
            // Whole multipliers print without a fraction and miss the water rule
            prop_assume!(mult_hundredths % 100 != 0);
            let multiplier = mult_hundredths as f64 / 100.0;
            let factor = ActivityFactor::parse(&ActivityFactor::encode(multiplier, extra)).unwrap();
            prop_assert_eq!(factor.multiplier, multiplier);
            prop_assert_eq!(factor.weekly_extra, extra as f64);
        }
    }
}
