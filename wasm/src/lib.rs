//! Body Metrics WASM Module
//!
//! WebAssembly bindings that let a browser form call the calculator and the
//! shared field rules with JSON records.

use body_metrics_engine::{calculator, check_field, ActivityLevel, CalculatorInput, FormField};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Compute the result record from a JSON input record
#[wasm_bindgen]
pub fn compute_metrics(input_json: &str) -> Result<String, JsValue> {
    compute_metrics_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Message of the failing rule for one field, if any
///
/// An unknown field name is reported as a failure rather than passing.
#[wasm_bindgen]
pub fn validate_field(field: &str, value: &str) -> Option<String> {
    match field.parse::<FormField>() {
        Ok(field) => check_field(field, value).map(str::to_string),
        Err(message) => Some(message),
    }
}

/// JSON list of the activity select options
#[wasm_bindgen]
pub fn activity_presets() -> String {
    serde_json::to_string(&presets()).unwrap_or_else(|_| "[]".to_string())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityOption {
    name: &'static str,
    description: &'static str,
    value: String,
}

fn presets() -> Vec<ActivityOption> {
    ActivityLevel::ALL
        .iter()
        .map(|level| ActivityOption {
            name: level.name(),
            description: level.description(),
            value: level.select_value(),
        })
        .collect()
}

fn compute_metrics_json(input_json: &str) -> Result<String, String> {
    let input: CalculatorInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid input record: {}", e))?;
    let result = calculator::compute(&input).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}
