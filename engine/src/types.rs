//! Input and result records exchanged with the form layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input Record
// ============================================================================

/// Gender used by the sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Woman,
    Man,
}

impl Gender {
    /// The other gender, for the form's toggle button
    pub fn toggled(self) -> Self {
        match self {
            Gender::Woman => Gender::Man,
            Gender::Man => Gender::Woman,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Woman => "woman",
            Gender::Man => "man",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "woman" | "female" | "w" | "f" => Ok(Gender::Woman),
            "man" | "male" | "m" => Ok(Gender::Man),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Everything the calculator needs, already validated by the form layer
///
/// Weight, goal and activity keep their text form; the engine normalizes
/// decimal separators and decodes the activity value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Current weight in kilograms
    pub weight: String,
    /// Encoded activity select value
    pub activity_factor: String,
    /// Goal weight in kilograms
    pub goal: String,
}

// ============================================================================
// Result Record
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Classify a BMI value
    pub fn classify(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiCategory::SeverelyUnderweight
        } else if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObeseClass1
        } else if bmi < 40.0 {
            BmiCategory::ObeseClass2
        } else {
            BmiCategory::ObeseClass3
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Ideal body weight in kilograms by formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeight {
    pub devine: f64,
    pub robinson: f64,
    pub miller: f64,
    pub average: f64,
}

/// Daily calorie targets in kcal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieTargets {
    pub bmr: i64,
    pub maintain: i64,
    /// About 0.5 kg per week loss
    pub loose1: i64,
    /// About 1 kg per week loss
    pub loose2: i64,
    pub gain1: i64,
    pub gain2: i64,
}

/// Direction of the change from current weight to goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightStatus {
    Loose,
    Gain,
    Maintain,
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeightStatus::Loose => "lose",
            WeightStatus::Gain => "gain",
            WeightStatus::Maintain => "maintain",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightDifference {
    pub status: WeightStatus,
    /// Absolute difference in kilograms
    pub diff: f64,
}

/// Everything shown on the results panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub ideal_weight: IdealWeight,
    pub calories: CalorieTargets,
    /// Liters per day
    pub water_need: f64,
    pub weight_difference: WeightDifference,
    pub calorie_deficit: i64,
    pub diet_duration_days: i64,
    #[serde(with = "completion_date")]
    pub diet_completion_date: NaiveDate,
}

/// Format a date as "Month Day Year", e.g. "May 3 2027"
pub fn format_completion_date(date: NaiveDate) -> String {
    date.format(completion_date::FORMAT).to_string()
}

mod completion_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%B %-d %Y";
    const PARSE_FORMAT: &str = "%B %d %Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_completion_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, PARSE_FORMAT).map_err(serde::de::Error::custom)
    }
}
