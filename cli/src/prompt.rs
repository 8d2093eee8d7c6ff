//! Interactive prompts for fields not given on the command line

use crate::args::activity_value;
use anyhow::{bail, Context, Result};
use body_metrics_engine::{check_field, ActivityLevel, CalculatorForm, FormField, Gender};
use std::io::{BufRead, Write};

/// Fields that still need a value
pub fn missing_fields(form: &CalculatorForm) -> Vec<FormField> {
    FormField::ALL
        .iter()
        .copied()
        .filter(|field| !form.is_dirty(*field))
        .collect()
}

/// Ask for every missing field until each one passes its rule
pub fn prompt_missing<R: BufRead, W: Write>(
    form: &mut CalculatorForm,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    for field in missing_fields(form) {
        prompt_field(form, field, input, output)?;
    }
    Ok(())
}

fn read_answer<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}: ", question)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Input ended before all fields were entered");
    }
    Ok(line.trim().to_string())
}

fn prompt_field<R: BufRead, W: Write>(
    form: &mut CalculatorForm,
    field: FormField,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    match field {
        FormField::Gender => loop {
            let answer = read_answer("Gender [woman/man] (woman)", input, output)?;
            if answer.is_empty() {
                form.set_field(field, Gender::Woman.as_str());
                return Ok(());
            }
            match answer.parse::<Gender>() {
                Ok(gender) => {
                    form.set_field(field, gender.as_str());
                    return Ok(());
                }
                Err(e) => writeln!(output, "  {}", e)?,
            }
        },
        FormField::Activity => {
            writeln!(output, "Activity level:")?;
            for (i, level) in ActivityLevel::ALL.iter().enumerate() {
                writeln!(output, "  {}. {} ({})", i + 1, level.name(), level.description())?;
            }
            loop {
                let answer = read_answer("Choose 1-5, a preset name, or a raw value", input, output)?;
                let value = match answer.parse::<usize>() {
                    Ok(n) if (1..=ActivityLevel::ALL.len()).contains(&n) => {
                        ActivityLevel::ALL[n - 1].select_value()
                    }
                    _ => activity_value(&answer),
                };
                if accept(form, field, &value, output)? {
                    return Ok(());
                }
            }
        }
        FormField::Goal => loop {
            let answer = read_answer("Goal weight in kg (empty keeps current weight)", input, output)?;
            if answer.is_empty() {
                form.set_use_current_weight(true);
                return Ok(());
            }
            if accept(form, field, &answer, output)? {
                return Ok(());
            }
        },
        _ => loop {
            let answer = read_answer(field.display_label(), input, output)?;
            if accept(form, field, &answer, output)? {
                return Ok(());
            }
        },
    }
}

/// Store the answer when it passes the field rule, otherwise show the message
fn accept<W: Write>(form: &mut CalculatorForm, field: FormField, value: &str, output: &mut W) -> Result<bool> {
    match check_field(field, value) {
        None => {
            form.set_field(field, value);
            Ok(true)
        }
        Some(message) => {
            writeln!(output, "  {}", message)?;
            Ok(false)
        }
    }
}
