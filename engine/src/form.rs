//! Form layer model
//!
//! The declarative field rule table and the state of the calculator form.
//! Front ends consult these before calling the calculator; the calculator
//! itself never does.

use crate::parsing::ActivityFactor;
use crate::types::{CalculatorInput, Gender};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

// ============================================================================
// Fields and Rules
// ============================================================================

/// Input fields of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Gender,
    Age,
    Height,
    Weight,
    Activity,
    Goal,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Gender,
        FormField::Age,
        FormField::Height,
        FormField::Weight,
        FormField::Activity,
        FormField::Goal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Gender => "gender",
            FormField::Age => "age",
            FormField::Height => "height",
            FormField::Weight => "weight",
            FormField::Activity => "activity",
            FormField::Goal => "goal",
        }
    }

    /// User-friendly label
    pub fn display_label(&self) -> &'static str {
        match self {
            FormField::Gender => "Gender",
            FormField::Age => "Age",
            FormField::Height => "Height (cm)",
            FormField::Weight => "Current Weight (kg)",
            FormField::Activity => "Activity Level",
            FormField::Goal => "Goal Weight (kg)",
        }
    }

    /// Rule for this field, if it has one
    pub fn rule(&self) -> Option<&'static FieldRule> {
        FORM_RULES.iter().find(|rule| rule.field == *self)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

/// Pattern constraint with the message shown when it fails
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    /// Matched against the whole value
    pub pattern: &'static str,
    pub message: &'static str,
}

/// Validation rule of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FormField,
    /// Message shown when the value is empty
    pub required: Option<&'static str>,
    pub pattern: Option<PatternRule>,
}

const WHOLE_NUMBER: &str = "[0-9]+";
const DECIMAL_NUMBER: &str = "[0-9]+[.,]*[0-9]*";
const ONLY_NUMBERS: &str = "Only numbers";

/// Rules consulted by the form layer. Gender has none.
pub const FORM_RULES: &[FieldRule] = &[
    FieldRule {
        field: FormField::Age,
        required: Some("Enter age"),
        pattern: Some(PatternRule { pattern: WHOLE_NUMBER, message: ONLY_NUMBERS }),
    },
    FieldRule {
        field: FormField::Height,
        required: Some("Enter height"),
        pattern: Some(PatternRule { pattern: WHOLE_NUMBER, message: ONLY_NUMBERS }),
    },
    FieldRule {
        field: FormField::Weight,
        required: Some("Enter weight"),
        pattern: Some(PatternRule { pattern: DECIMAL_NUMBER, message: ONLY_NUMBERS }),
    },
    FieldRule {
        field: FormField::Activity,
        required: Some("Enter activity"),
        pattern: None,
    },
    FieldRule {
        field: FormField::Goal,
        required: Some("Enter goal"),
        pattern: Some(PatternRule { pattern: DECIMAL_NUMBER, message: ONLY_NUMBERS }),
    },
];

static COMPILED_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    FORM_RULES
        .iter()
        .filter_map(|rule| rule.pattern)
        .map(|p| {
            let anchored = format!("^(?:{})$", p.pattern);
            (p.pattern, Regex::new(&anchored).expect("form patterns are valid"))
        })
        .collect()
});

/// Check one value against its field rule
///
/// Returns the message of the failing rule. An empty value only fails the
/// required rule; the pattern is checked on non-empty values.
pub fn check_field(field: FormField, value: &str) -> Option<&'static str> {
    let rule = field.rule()?;
    if value.is_empty() {
        return rule.required;
    }
    let pattern = rule.pattern?;
    match COMPILED_PATTERNS.get(pattern.pattern) {
        Some(regex) if regex.is_match(value) => None,
        _ => Some(pattern.message),
    }
}

/// Validation failure of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
    pub display_label: String,
}

impl FieldError {
    pub fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
            display_label: field.display_label().to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

// ============================================================================
// Activity Presets
// ============================================================================

/// Activity level options offered by the activity select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Multiplier for maintenance calories
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Extra water per week, 12 fl oz per 30 minutes of exercise
    pub fn weekly_extra_oz(&self) -> u32 {
        match self {
            ActivityLevel::Sedentary => 0,
            ActivityLevel::LightlyActive => 36,
            ActivityLevel::ModeratelyActive => 60,
            ActivityLevel::VeryActive => 144,
            ActivityLevel::ExtraActive => 252,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }

    /// Value submitted by the activity select
    pub fn select_value(&self) -> String {
        ActivityFactor::encode(self.multiplier(), self.weekly_extra_oz())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        ActivityLevel::ALL
            .iter()
            .copied()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.name()).collect();
                format!("Invalid activity level. Must be one of: {}", names.join(", "))
            })
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Raw state of the calculator form
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    gender: Gender,
    values: BTreeMap<FormField, String>,
    dirty: BTreeSet<FormField>,
    use_current_weight: bool,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn toggle_gender(&mut self) {
        self.gender = self.gender.toggled();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Current text of a field
    pub fn value(&self, field: FormField) -> &str {
        if field == FormField::Gender {
            return self.gender.as_str();
        }
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_dirty(&self, field: FormField) -> bool {
        self.dirty.contains(&field)
    }

    pub fn uses_current_weight(&self) -> bool {
        self.use_current_weight
    }

    /// Store user-entered text. Typing a goal turns off "use current weight";
    /// while it is on, the goal follows every weight edit.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Gender => {
                if let Ok(gender) = value.parse() {
                    self.gender = gender;
                }
            }
            FormField::Weight => {
                let weight = value.trim().to_string();
                if self.use_current_weight {
                    self.values.insert(FormField::Goal, weight.clone());
                }
                self.values.insert(field, weight);
            }
            FormField::Goal => {
                self.use_current_weight = false;
                self.values.insert(field, value.trim().to_string());
            }
            _ => {
                self.values.insert(field, value.trim().to_string());
            }
        }
        self.dirty.insert(field);
    }

    /// Copy the current weight into the goal, or clear the goal
    pub fn set_use_current_weight(&mut self, enabled: bool) {
        self.use_current_weight = enabled;
        let goal = if enabled {
            self.value(FormField::Weight).to_string()
        } else {
            String::new()
        };
        self.values.insert(FormField::Goal, goal);
        self.dirty.insert(FormField::Goal);
    }

    /// Messages for fields the user has touched and left invalid
    pub fn field_errors(&self) -> Vec<FieldError> {
        FormField::ALL
            .iter()
            .filter(|field| self.is_dirty(**field))
            .filter_map(|field| check_field(*field, self.value(*field)).map(|msg| FieldError::new(*field, msg)))
            .collect()
    }

    /// Validate every field and build the calculator input
    pub fn submit(&mut self) -> Result<CalculatorInput, Vec<FieldError>> {
        self.dirty.extend(FormField::ALL);
        let mut errors = self.field_errors();

        let age = self.value(FormField::Age).parse::<u32>();
        let height = self.value(FormField::Height).parse::<f64>();

        if errors.is_empty() {
            // Digits only, but the value may still overflow
            if age.is_err() {
                errors.push(FieldError::new(FormField::Age, ONLY_NUMBERS));
            }
            if height.is_err() {
                errors.push(FieldError::new(FormField::Height, ONLY_NUMBERS));
            }
        }

        match (age, height) {
            (Ok(age), Ok(height)) if errors.is_empty() => Ok(CalculatorInput {
                gender: self.gender,
                age,
                height,
                weight: self.value(FormField::Weight).to_string(),
                activity_factor: self.value(FormField::Activity).to_string(),
                goal: self.value(FormField::Goal).to_string(),
            }),
            _ => Err(errors),
        }
    }
}
