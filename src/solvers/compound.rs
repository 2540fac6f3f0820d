//! Compound growth without periodic contributions
//!
//! FV = P * (1 + r/100/CpY)^(CpY * t)

use serde::{Deserialize, Serialize};

use super::factors::AnnuityFactors;
use super::validate::{checked, periodic_rate, require_positive};
use crate::error::{CalcError, CalcResult};
use crate::request::{Scenario, Unknown};

/// Known values for a compound growth calculation
///
/// Fields that the chosen unknown does not need are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundInputs {
    pub principal: f64,
    pub future_value: f64,
    /// Nominal annual rate as a percentage (5.0 means 5%)
    pub annual_rate_percent: f64,
    pub periods_per_year: f64,
    pub years: f64,
}

/// Solve for `unknown` using whichever inputs it requires
pub fn solve(unknown: Unknown, inputs: &CompoundInputs) -> CalcResult<f64> {
    match unknown {
        Unknown::FutureValue => future_value(
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
            inputs.years,
        ),
        Unknown::InterestRate => interest_rate(
            inputs.future_value,
            inputs.principal,
            inputs.periods_per_year,
            inputs.years,
        ),
        Unknown::Principal => principal(
            inputs.future_value,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
            inputs.years,
        ),
        Unknown::Years => years(
            inputs.future_value,
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
        ),
        other => Err(CalcError::invalid_input(format!(
            "{} cannot be solved for in the {} scenario",
            other.label(),
            Scenario::CompoundGrowth.label()
        ))),
    }
}

pub fn future_value(
    principal: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    require_positive("principal", principal)?;
    require_positive("periods per year", periods_per_year)?;
    require_positive("years", years)?;
    require_positive("interest rate", annual_rate_percent)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    checked(principal * AnnuityFactors::growth(rate, periods_per_year * years))
}

/// Nominal annual rate, as a percentage, that grows `principal` into `future_value`
pub fn interest_rate(
    future_value: f64,
    principal: f64,
    periods_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    require_positive("future value", future_value)?;
    require_positive("principal", principal)?;
    require_positive("periods per year", periods_per_year)?;
    require_positive("years", years)?;

    let per_period = (future_value / principal).powf(1.0 / (periods_per_year * years)) - 1.0;
    checked(100.0 * periods_per_year * per_period)
}

pub fn principal(
    future_value: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    require_positive("future value", future_value)?;
    require_positive("periods per year", periods_per_year)?;
    require_positive("years", years)?;
    require_positive("interest rate", annual_rate_percent)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    checked(future_value / AnnuityFactors::growth(rate, periods_per_year * years))
}

/// Years needed for `principal` to reach `future_value`; not rounded to whole periods
pub fn years(
    future_value: f64,
    principal: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
) -> CalcResult<f64> {
    require_positive("future value", future_value)?;
    require_positive("principal", principal)?;
    require_positive("periods per year", periods_per_year)?;
    require_positive("interest rate", annual_rate_percent)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    checked((future_value / principal).ln() / (periods_per_year * rate.ln_1p()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_future_value_monthly() {
        let fv = future_value(1000.0, 5.0, 12.0, 10.0).unwrap();
        assert!((fv - 1647.01).abs() < 0.005, "Expected ~1647.01, got {}", fv);
    }

    #[test]
    fn test_principal_round_trip() {
        for &(p, r, cpy, t) in &[
            (1000.0, 5.0, 12.0, 10.0),
            (250.0, 0.5, 1.0, 40.0),
            (75_000.0, 12.0, 365.0, 3.5),
            (1.0, 30.0, 4.0, 0.25),
        ] {
            let fv = future_value(p, r, cpy, t).unwrap();
            let back = principal(fv, r, cpy, t).unwrap();
            assert_relative_eq!(back, p, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_interest_rate_and_years_invert_future_value() {
        let fv = future_value(1000.0, 5.0, 12.0, 10.0).unwrap();
        assert_relative_eq!(interest_rate(fv, 1000.0, 12.0, 10.0).unwrap(), 5.0, max_relative = 1e-6);
        assert_relative_eq!(years(fv, 1000.0, 5.0, 12.0).unwrap(), 10.0, max_relative = 1e-6);
    }

    #[test]
    fn test_interest_rate_monotonic_in_growth_ratio() {
        let rates: Vec<f64> = [1.1, 1.5, 2.0, 3.0, 10.0]
            .iter()
            .map(|ratio| interest_rate(1000.0 * ratio, 1000.0, 12.0, 8.0).unwrap())
            .collect();
        assert!(rates.windows(2).all(|w| w[1] > w[0]), "rates not increasing: {:?}", rates);
    }

    #[test]
    fn test_years_rejects_zero_values() {
        assert!(years(0.0, 1000.0, 5.0, 12.0).unwrap_err().is_invalid_input());
        assert!(years(2000.0, 0.0, 5.0, 12.0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_shrinking_value_is_negative() {
        // FV below P implies negative time and a negative rate
        assert!(matches!(years(500.0, 1000.0, 5.0, 12.0), Err(CalcError::Negative { .. })));
        assert!(matches!(interest_rate(500.0, 1000.0, 12.0, 5.0), Err(CalcError::Negative { .. })));
    }

    #[test]
    fn test_overflow_is_non_finite() {
        let result = future_value(1e300, 100.0, 1.0, 1000.0);
        assert!(matches!(result, Err(CalcError::NonFinite { .. })));
    }

    #[test]
    fn test_solve_dispatch() {
        let inputs = CompoundInputs {
            principal: 1000.0,
            annual_rate_percent: 5.0,
            periods_per_year: 12.0,
            years: 10.0,
            ..Default::default()
        };
        let fv = solve(Unknown::FutureValue, &inputs).unwrap();
        assert_relative_eq!(fv, 1647.0095, max_relative = 1e-6);

        // Payment is not part of this scenario
        assert!(solve(Unknown::Payment, &inputs).unwrap_err().is_invalid_input());
        assert!(solve(Unknown::NumberOfPayments, &inputs).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_missing_required_input() {
        // Rate left at its zero default
        let inputs = CompoundInputs {
            principal: 1000.0,
            periods_per_year: 12.0,
            years: 10.0,
            ..Default::default()
        };
        assert!(solve(Unknown::FutureValue, &inputs).unwrap_err().is_invalid_input());
    }
}
