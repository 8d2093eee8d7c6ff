//! Unit coefficients and conversions
//!
//! Every formula in the calculator works in kilograms, centimeters and liters.
//! The empirical formulas are stated in pounds, inches and fluid ounces, so
//! conversions go through the constants below and nowhere else.

/// Kilograms per international avoirdupois pound
pub const POUND_TO_KG: f64 = 0.45359237;

/// Centimeters per inch
pub const INCH_TO_CM: f64 = 2.54;

/// Liters per US liquid ounce
pub const FLUID_OUNCE_TO_LITER: f64 = 0.0295735;

// ============================================================================
// Conversions
// ============================================================================

pub fn pounds_to_kg(lbs: f64) -> f64 {
    lbs * POUND_TO_KG
}

pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / POUND_TO_KG
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * INCH_TO_CM
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / INCH_TO_CM
}

pub fn fluid_ounces_to_liters(ounces: f64) -> f64 {
    ounces * FLUID_OUNCE_TO_LITER
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to two decimal places on the exact binary value
///
/// `44.9 / 4.0` is stored as 11.22499..., so it rounds down to 11.22 even
/// though `x * 100.0` lands on 1122.5. Exact midpoints round away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let doubled = (value * 200.0).round();
    let is_midpoint = doubled % 2.0 != 0.0 && value.mul_add(200.0, -doubled) == 0.0;
    if is_midpoint {
        return (doubled + doubled.signum()) / 200.0;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}
