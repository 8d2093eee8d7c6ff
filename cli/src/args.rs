//! Command line arguments

use crate::config::OutputFormat;
use body_metrics_engine::{ActivityLevel, CalculatorForm, FormField, Gender};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "body-metrics")]
#[command(about = "Estimate BMI, ideal weight, calorie targets and water need", long_about = None)]
#[command(version)]
pub struct Cli {
    /// woman or man (defaults to woman)
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Age in years
    #[arg(short, long)]
    pub age: Option<String>,

    /// Height in centimeters
    #[arg(long)]
    pub height: Option<String>,

    /// Current weight in kg, comma or dot as decimal separator
    #[arg(short, long)]
    pub weight: Option<String>,

    /// Activity preset (sedentary, lightly_active, moderately_active,
    /// very_active, extra_active) or a raw "<multiplier>,<weekly oz>" value
    #[arg(long)]
    pub activity: Option<String>,

    /// Goal weight in kg
    #[arg(long, conflicts_with = "maintain")]
    pub goal: Option<String>,

    /// Use the current weight as the goal
    #[arg(long)]
    pub maintain: bool,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Never prompt; fail when a field is missing
    #[arg(long)]
    pub no_input: bool,

    /// Path to config file (defaults to config/<RUST_ENV>.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve an activity argument to its select value
pub fn activity_value(raw: &str) -> String {
    match raw.parse::<ActivityLevel>() {
        Ok(level) => level.select_value(),
        Err(_) => raw.to_string(),
    }
}

impl Cli {
    /// Copy every field given on the command line into the form
    pub fn apply_to_form(&self, form: &mut CalculatorForm) {
        if let Some(gender) = self.gender {
            form.set_field(FormField::Gender, gender.as_str());
        }
        if let Some(age) = &self.age {
            form.set_field(FormField::Age, age);
        }
        if let Some(height) = &self.height {
            form.set_field(FormField::Height, height);
        }
        if let Some(weight) = &self.weight {
            form.set_field(FormField::Weight, weight);
        }
        if let Some(activity) = &self.activity {
            form.set_field(FormField::Activity, &activity_value(activity));
        }
        if self.maintain {
            form.set_use_current_weight(true);
        } else if let Some(goal) = &self.goal {
            form.set_field(FormField::Goal, goal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_value() {
        assert_eq!(activity_value("moderately_active"), "1.55,60");
        assert_eq!(activity_value("1.3,10"), "1.3,10");
    }

    #[test]
    fn test_apply_to_form() {
        let cli = Cli::try_parse_from([
            "body-metrics", "--gender", "man", "--age", "30", "--height", "180",
            "--weight", "80,5", "--activity", "sedentary", "--maintain",
        ])
        .unwrap();

        let mut form = CalculatorForm::new();
        cli.apply_to_form(&mut form);

        assert_eq!(form.gender(), Gender::Man);
        assert_eq!(form.value(FormField::Activity), "1.2,0");
        assert_eq!(form.value(FormField::Goal), "80,5");
        assert!(form.uses_current_weight());
    }

    #[test]
    fn test_goal_conflicts_with_maintain() {
        let parsed = Cli::try_parse_from(["body-metrics", "--goal", "60", "--maintain"]);
        assert!(parsed.is_err());
    }
}
