//! Turning raw text into inputs and results into display text

use serde::{Deserialize, Serialize};

use crate::error::CalculationResult;
use crate::request::{CalculationRequest, Scenario, Unknown};

/// Shown for every failure; the error kind stays in the report for diagnostics
pub const INVALID_INPUTS_MESSAGE: &str = "Please enter valid inputs";

/// Parse a form field. Blank or unparsable text becomes 0.0, which the
/// solvers then reject wherever a positive value is required.
pub fn parse_field(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// "Future Value: 1647.01", "Interest Rate: 5.00%", or the invalid-inputs message
pub fn format_result(unknown: Unknown, result: &CalculationResult, decimal_places: usize) -> String {
    match result {
        Ok(value) => format!(
            "{}: {:.*}{}",
            unknown.label(),
            decimal_places,
            value,
            if unknown.is_percentage() { "%" } else { "" }
        ),
        Err(_) => INVALID_INPUTS_MESSAGE.to_string(),
    }
}

/// One evaluated request, flattened for JSON or CSV output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub scenario: Scenario,
    pub solve_for: Unknown,
    pub value: Option<f64>,
    pub error: Option<String>,
    pub display: String,
}

impl CalculationReport {
    pub fn new(request: &CalculationRequest, result: &CalculationResult, decimal_places: usize) -> Self {
        let solve_for = request.solve_for();
        Self {
            scenario: request.scenario(),
            solve_for,
            value: result.as_ref().ok().copied(),
            error: result.as_ref().err().map(|e| e.to_string()),
            display: format_result(solve_for, result, decimal_places),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }
}
