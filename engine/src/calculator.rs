//! Metrics calculator
//!
//! Turns one [`CalculatorInput`] into a complete [`CalculatorResult`]. Each
//! step is a pure function; [`compute_on`] runs them in order and is the only
//! place that threads earlier results into later steps.

use crate::errors::{ensure_finite, round_to_i64, CalcError};
use crate::parsing::{normalize_decimal, ActivityFactor};
use crate::types::{
    BmiCategory, CalculatorInput, CalculatorResult, CalorieTargets, Gender, IdealWeight,
    WeightDifference, WeightStatus,
};
use crate::units::{
    cm_to_inches, fluid_ounces_to_liters, inches_to_cm, kg_to_pounds, pounds_to_kg, round2,
};
use chrono::{Days, Local, NaiveDate};

/// Energy content of one pound of body mass in kcal
pub const KCAL_PER_POUND: f64 = 3500.0;

/// Daily surplus or deficit for roughly half a kilogram per week
pub const WEEKLY_HALF_KG_STEP_KCAL: i64 = 551;

/// Share of maintenance calories used as the diet deficit
pub const DEFICIT_SHARE: f64 = 0.2;

/// Fluid ounces of water per pound of body weight per day
pub const WATER_OZ_PER_POUND: f64 = 0.67;

/// Height at which the ideal weight formulas are anchored
const IDEAL_WEIGHT_ANCHOR_INCHES: f64 = 60.0;

// ============================================================================
// BMI
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

// ============================================================================
// Ideal Weight
// ============================================================================

/// Ideal weight formula, stated in pounds above five feet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdealWeightFormula {
    Devine,
    Robinson,
    Miller,
}

impl IdealWeightFormula {
    /// Base weight at 60 inches and slope per extra inch, both in pounds
    pub fn coefficients_lbs(&self, gender: Gender) -> (f64, f64) {
        match (self, gender) {
            (IdealWeightFormula::Devine, Gender::Woman) => (100.1, 5.06),
            (IdealWeightFormula::Devine, Gender::Man) => (110.0, 5.06),
            (IdealWeightFormula::Robinson, Gender::Woman) => (107.8, 3.74),
            (IdealWeightFormula::Robinson, Gender::Man) => (114.4, 4.18),
            (IdealWeightFormula::Miller, Gender::Woman) => (116.82, 2.99),
            (IdealWeightFormula::Miller, Gender::Man) => (123.64, 3.10),
        }
    }

    /// Ideal weight in kilograms, unrounded
    ///
    /// Heights under five feet are not clamped; the slope term goes negative.
    pub fn ideal_weight_kg(&self, height_cm: f64, gender: Gender) -> f64 {
        let (base_lbs, slope_lbs) = self.coefficients_lbs(gender);
        let inches_over_anchor = cm_to_inches(height_cm - inches_to_cm(IDEAL_WEIGHT_ANCHOR_INCHES));
        pounds_to_kg(base_lbs) + pounds_to_kg(slope_lbs) * inches_over_anchor
    }
}

/// Calculate ideal body weight with the three formulas and their average
pub fn calculate_ideal_weight(height_cm: f64, gender: Gender) -> IdealWeight {
    let devine = round2(IdealWeightFormula::Devine.ideal_weight_kg(height_cm, gender));
    let robinson = round2(IdealWeightFormula::Robinson.ideal_weight_kg(height_cm, gender));
    let miller = round2(IdealWeightFormula::Miller.ideal_weight_kg(height_cm, gender));

    IdealWeight {
        devine,
        robinson,
        miller,
        average: round2((devine + robinson + miller) / 3.0),
    }
}

// ============================================================================
// Calories
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Man => base + 5.0,
        Gender::Woman => base - 161.0,
    }
}

/// Rounded BMR, maintenance calories and the four goal targets
///
/// Both roundings must stay within exact integer range so the targets never
/// overflow.
pub fn calculate_calorie_targets(bmr: f64, multiplier: f64) -> Result<CalorieTargets, CalcError> {
    let bmr = round_to_i64("bmr", bmr)?;
    let maintain = round_to_i64("maintenance calories", bmr as f64 * multiplier)?;

    Ok(CalorieTargets {
        bmr,
        maintain,
        loose1: maintain - WEEKLY_HALF_KG_STEP_KCAL,
        loose2: maintain - 2 * WEEKLY_HALF_KG_STEP_KCAL,
        gain1: maintain + WEEKLY_HALF_KG_STEP_KCAL,
        gain2: maintain + 2 * WEEKLY_HALF_KG_STEP_KCAL,
    })
}

/// Deficit used to project the diet duration
pub fn calculate_calorie_deficit(maintain: i64) -> i64 {
    (maintain as f64 * DEFICIT_SHARE).round() as i64
}

// ============================================================================
// Hydration
// ============================================================================

/// Daily water need in liters, unrounded
///
/// Two thirds of an ounce per pound of body weight plus the weekly exercise
/// extra spread over seven days.
pub fn calculate_water_need_liters(weight_kg: f64, weekly_extra_oz: f64) -> f64 {
    let ounces = kg_to_pounds(weight_kg) * WATER_OZ_PER_POUND + weekly_extra_oz / 7.0;
    fluid_ounces_to_liters(ounces)
}

// ============================================================================
// Goal Projection
// ============================================================================

/// Compare current weight with the goal
pub fn calculate_weight_difference(weight_kg: f64, goal_kg: f64) -> WeightDifference {
    if weight_kg > goal_kg {
        WeightDifference {
            status: WeightStatus::Loose,
            diff: round2(weight_kg - goal_kg),
        }
    } else if weight_kg < goal_kg {
        WeightDifference {
            status: WeightStatus::Gain,
            diff: round2(goal_kg - weight_kg),
        }
    } else {
        WeightDifference {
            status: WeightStatus::Maintain,
            diff: 0.0,
        }
    }
}

/// Days needed to cover the weight difference at the daily deficit
///
/// Maintaining needs no diet, so the duration is zero without dividing.
pub fn calculate_diet_duration_days(
    difference: &WeightDifference,
    calorie_deficit: i64,
) -> Result<i64, CalcError> {
    if difference.status == WeightStatus::Maintain {
        return Ok(0);
    }
    if calorie_deficit <= 0 {
        return Err(CalcError::NonPositiveDeficit(calorie_deficit));
    }

    let total_kcal = kg_to_pounds(difference.diff) * KCAL_PER_POUND;
    round_to_i64("diet duration", total_kcal / calorie_deficit as f64)
}

/// Date the diet is expected to finish
pub fn project_completion_date(today: NaiveDate, duration_days: i64) -> Result<NaiveDate, CalcError> {
    u64::try_from(duration_days)
        .ok()
        .and_then(|days| today.checked_add_days(Days::new(days)))
        .ok_or(CalcError::DateOutOfRange(duration_days))
}

// ============================================================================
// Full Computation
// ============================================================================

/// Compute the result record using today's local date
pub fn compute(input: &CalculatorInput) -> Result<CalculatorResult, CalcError> {
    compute_on(input, Local::now().date_naive())
}

/// Compute the result record relative to `today`
pub fn compute_on(input: &CalculatorInput, today: NaiveDate) -> Result<CalculatorResult, CalcError> {
    let weight_kg = normalize_decimal("weight", &input.weight)?;
    let goal_kg = normalize_decimal("goal", &input.goal)?;
    let height_cm = ensure_finite("height", input.height)?;
    let activity = ActivityFactor::parse(&input.activity_factor)?;

    let bmi = round2(ensure_finite("bmi", calculate_bmi(weight_kg, height_cm))?);
    let ideal_weight = calculate_ideal_weight(height_cm, input.gender);

    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, input.age, input.gender);
    let calories = calculate_calorie_targets(bmr, activity.multiplier)?;

    let water_need = round2(ensure_finite(
        "water need",
        calculate_water_need_liters(weight_kg, activity.weekly_extra),
    )?);

    let weight_difference = calculate_weight_difference(weight_kg, goal_kg);
    let calorie_deficit = calculate_calorie_deficit(calories.maintain);
    let diet_duration_days = calculate_diet_duration_days(&weight_difference, calorie_deficit)?;
    let diet_completion_date = project_completion_date(today, diet_duration_days)?;

    Ok(CalculatorResult {
        bmi,
        bmi_category: BmiCategory::classify(bmi),
        ideal_weight,
        calories,
        water_need,
        weight_difference,
        calorie_deficit,
        diet_duration_days,
        diet_completion_date,
    })
}
