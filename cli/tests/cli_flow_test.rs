//! Integration tests for the flag -> form -> engine -> panel flow

use body_metrics_cli::args::Cli;
use body_metrics_cli::config::{AppConfig, OutputFormat};
use body_metrics_cli::{prompt, render};
use body_metrics_engine::{compute_on, CalculatorForm, FormField, WeightStatus};
use chrono::NaiveDate;
use clap::Parser;
use rstest::rstest;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn form_from(args: &[&str]) -> CalculatorForm {
    let cli = Cli::try_parse_from(args).expect("arguments parse");
    let mut form = CalculatorForm::new();
    cli.apply_to_form(&mut form);
    form
}

#[test]
fn test_full_flags_need_no_prompt() {
    let mut form = form_from(&[
        "body-metrics", "--gender", "woman", "--age", "30", "--height", "165",
        "--weight", "70", "--activity", "1.2", "--goal", "60",
    ]);
    assert!(prompt::missing_fields(&form).is_empty());

    let input = form.submit().unwrap();
    let result = compute_on(&input, reference_date()).unwrap();

    let mut config = AppConfig::default();
    config.output.format = OutputFormat::Json;
    config.output.pretty_json = false;
    let json = render::render(&result, &config.output).unwrap();

    assert!(json.contains("\"bmi\":25.71"));
    assert!(json.contains("\"dietDurationDays\":226"));
}

#[rstest]
#[case("--maintain", WeightStatus::Maintain)]
#[case("--goal=90", WeightStatus::Gain)]
#[case("--goal=70,5", WeightStatus::Loose)]
fn test_goal_status_from_flags(#[case] goal_flag: &str, #[case] expected: WeightStatus) {
    let mut form = form_from(&[
        "body-metrics", "--gender", "man", "--age", "45", "--height", "182",
        "--weight", "84,2", "--activity", "very_active", goal_flag,
    ]);

    let input = form.submit().unwrap();
    let result = compute_on(&input, reference_date()).unwrap();
    assert_eq!(result.weight_difference.status, expected);

    if expected == WeightStatus::Maintain {
        assert_eq!(result.diet_duration_days, 0);
        assert_eq!(result.diet_completion_date, reference_date());
    }
}

#[test]
fn test_partial_flags_leave_fields_for_prompt() {
    let form = form_from(&["body-metrics", "--age", "30", "--weight", "70"]);
    let missing = prompt::missing_fields(&form);
    assert_eq!(
        missing,
        vec![FormField::Gender, FormField::Height, FormField::Activity, FormField::Goal]
    );
}

#[test]
fn test_invalid_flag_values_fail_submit() {
    let mut form = form_from(&[
        "body-metrics", "--age", "thirty", "--height", "165", "--weight", "70kg",
        "--activity", "sedentary", "--goal", "60",
    ]);
    let errors = form.submit().unwrap_err();
    let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
    assert_eq!(
        messages,
        vec!["Age: Only numbers".to_string(), "Current Weight (kg): Only numbers".to_string()]
    );
}

#[test]
fn test_maintain_flag_uses_prompted_weight() {
    let mut form = form_from(&[
        "body-metrics", "--gender", "woman", "--age", "30", "--height", "165",
        "--activity", "sedentary", "--maintain",
    ]);
    assert_eq!(prompt::missing_fields(&form), vec![FormField::Weight]);

    let mut stdin = std::io::Cursor::new("70\n");
    let mut shown = Vec::new();
    prompt::prompt_missing(&mut form, &mut stdin, &mut shown).unwrap();
    assert_eq!(form.value(FormField::Goal), "70");

    let input = form.submit().unwrap();
    let result = compute_on(&input, reference_date()).unwrap();
    assert_eq!(result.weight_difference.status, WeightStatus::Maintain);
    assert_eq!(result.diet_duration_days, 0);
}
