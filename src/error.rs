//! Error types for the formula engine

use thiserror::Error;

/// Result type returned by every solver
pub type CalcResult<T> = Result<T, CalcError>;

/// Outcome of a single calculation: a usable number or the reason there is none
pub type CalculationResult = CalcResult<f64>;

/// Why a calculation produced no usable number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A required input is missing, out of range, or violates a scenario constraint
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Which input failed and how
        reason: String,
    },

    /// The formula produced NaN or an infinity
    #[error("Result is not finite: {value}")]
    NonFinite {
        /// The offending value
        value: f64,
    },

    /// The formula produced a finite value below zero
    #[error("Result is negative: {value}")]
    Negative {
        /// The offending value
        value: f64,
    },
}

impl CalcError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }
}
