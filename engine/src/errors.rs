//! Error types for the body metrics engine

use thiserror::Error;

/// Errors raised while computing a result record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Computation produced a non-finite {quantity}")]
    NonFinite { quantity: &'static str },

    #[error("Computation produced an out of range {quantity}")]
    OutOfRange { quantity: &'static str },

    #[error("Calorie deficit must be positive, got {0}")]
    NonPositiveDeficit(i64),

    #[error("Diet completion date is out of range ({0} days ahead)")]
    DateOutOfRange(i64),
}

impl CalcError {
    pub(crate) fn invalid_number(field: &'static str, value: &str) -> Self {
        CalcError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }
}

/// Reject NaN and infinities before they reach the result record
pub(crate) fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { quantity })
    }
}

/// Largest integer an f64 still holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Round to the nearest integer, rejecting values an `i64` cannot carry exactly
pub(crate) fn round_to_i64(quantity: &'static str, value: f64) -> Result<i64, CalcError> {
    let rounded = ensure_finite(quantity, value)?.round();
    if rounded.abs() > MAX_EXACT_INTEGER {
        return Err(CalcError::OutOfRange { quantity });
    }
    Ok(rounded as i64)
}
