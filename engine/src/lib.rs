//! Body Metrics Engine
//!
//! The calculation engine behind the body metrics calculator: BMI, ideal
//! weight, calorie targets, water need and the diet projection, plus the
//! form rule table shared by every front end.

pub mod calculator;
pub mod errors;
pub mod form;
pub mod parsing;
pub mod types;
pub mod units;

// Re-export commonly used items
pub use calculator::{compute, compute_on};
pub use errors::CalcError;
pub use form::{check_field, ActivityLevel, CalculatorForm, FieldError, FormField, FORM_RULES};
pub use parsing::{normalize_decimal, ActivityFactor};
pub use types::*;
pub use units::{FLUID_OUNCE_TO_LITER, INCH_TO_CM, POUND_TO_KG};
