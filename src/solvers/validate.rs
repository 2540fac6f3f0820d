//! Input guards and result checks shared by every solver

use crate::error::{CalcError, CalcResult};

/// Reject anything that is not strictly positive (NaN included)
pub fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(format!(
            "{} must be greater than zero, got {}",
            field, value
        )))
    }
}

/// Reject negative values and NaN; zero is allowed
pub fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(format!(
            "{} must not be negative, got {}",
            field, value
        )))
    }
}

/// Gate a computed value before it reaches the caller
pub fn checked(value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        Err(CalcError::NonFinite { value })
    } else if value < 0.0 {
        Err(CalcError::Negative { value })
    } else {
        Ok(value)
    }
}

/// Nominal annual percentage to decimal rate per compounding period
pub fn periodic_rate(annual_rate_percent: f64, periods_per_year: f64) -> f64 {
    annual_rate_percent / 100.0 / periods_per_year
}
