//! Results panel rendering

use crate::config::{OutputConfig, OutputFormat};
use anyhow::Result;
use body_metrics_engine::{format_completion_date, CalculatorResult, WeightStatus};
use std::fmt::{self, Write};

/// Render the result record in the configured format
pub fn render(result: &CalculatorResult, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(result, config.show_bmi_category)?),
        OutputFormat::Json => render_json(result, config.pretty_json),
    }
}

pub fn render_json(result: &CalculatorResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Human-readable results panel
pub fn render_text(result: &CalculatorResult, show_bmi_category: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let ideal = &result.ideal_weight;
    let calories = &result.calories;

    writeln!(out, "Results")?;
    writeln!(out, "-------")?;
    if show_bmi_category {
        writeln!(out, "BMI:              {:.2} ({})", result.bmi, result.bmi_category.description())?;
    } else {
        writeln!(out, "BMI:              {:.2}", result.bmi)?;
    }
    writeln!(
        out,
        "Ideal weight:     {:.2} kg (Devine {:.2}, Robinson {:.2}, Miller {:.2})",
        ideal.average, ideal.devine, ideal.robinson, ideal.miller
    )?;
    writeln!(out, "Water:            {:.2} l/day", result.water_need)?;
    writeln!(out, "Calories (kcal/day)")?;
    writeln!(out, "  BMR             {}", calories.bmr)?;
    writeln!(out, "  maintain        {}", calories.maintain)?;
    writeln!(out, "  lose 0.5 kg/wk  {}", calories.loose1)?;
    writeln!(out, "  lose 1 kg/wk    {}", calories.loose2)?;
    writeln!(out, "  gain 0.5 kg/wk  {}", calories.gain1)?;
    writeln!(out, "  gain 1 kg/wk    {}", calories.gain2)?;

    match result.weight_difference.status {
        WeightStatus::Maintain => writeln!(out, "Goal:             maintain current weight")?,
        status => {
            writeln!(out, "Goal:             {} {:.2} kg", status, result.weight_difference.diff)?;
            writeln!(out, "Daily deficit:    {} kcal", result.calorie_deficit)?;
            writeln!(
                out,
                "Diet duration:    {} days (until {})",
                result.diet_duration_days,
                format_completion_date(result.diet_completion_date)
            )?;
        }
    }

    Ok(out)
}
