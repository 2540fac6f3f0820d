//! Savings with a regular contribution
//!
//! FV = P*(1+i)^n + PMT*((1+i)^n - 1)/i, with i = r/100/CpY and n = CpY*t.
//! The rate has no closed-form inverse here, so it is not solvable.

use serde::{Deserialize, Serialize};

use super::factors::AnnuityFactors;
use super::validate::{checked, periodic_rate, require_non_negative, require_positive};
use crate::error::{CalcError, CalcResult};
use crate::request::{Scenario, Unknown};

/// Known values for a savings calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsInputs {
    pub principal: f64,
    /// Contribution made at the end of every compounding period
    pub payment: f64,
    pub annual_rate_percent: f64,
    pub periods_per_year: f64,
    pub years: f64,
    pub future_value: f64,
}

pub fn solve(unknown: Unknown, inputs: &SavingsInputs) -> CalcResult<f64> {
    match unknown {
        Unknown::FutureValue => future_value(
            inputs.principal,
            inputs.payment,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
            inputs.years,
        ),
        Unknown::Principal => principal(
            inputs.future_value,
            inputs.payment,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
            inputs.years,
        ),
        Unknown::Payment => payment(
            inputs.future_value,
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
            inputs.years,
        ),
        Unknown::Years => years(
            inputs.future_value,
            inputs.principal,
            inputs.payment,
            inputs.annual_rate_percent,
            inputs.periods_per_year,
        ),
        other => Err(CalcError::invalid_input(format!(
            "{} cannot be solved for in the {} scenario",
            other.label(),
            Scenario::Savings.label()
        ))),
    }
}

fn require_growth_terms(annual_rate_percent: f64, periods_per_year: f64, years: f64) -> CalcResult<()> {
    require_positive("interest rate", annual_rate_percent)?;
    require_positive("periods per year", periods_per_year)?;
    require_positive("years", years)
}

pub fn future_value(
    principal: f64,
    payment: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    require_non_negative("principal", principal)?;
    require_non_negative("payment", payment)?;
    require_growth_terms(annual_rate_percent, periods_per_year, years)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    let n = periods_per_year * years;
    checked(
        principal * AnnuityFactors::growth(rate, n)
            + payment * AnnuityFactors::future_value_annuity(rate, n),
    )
}

/// Lump sum needed today so that it plus the contributions reaches `future_value`
pub fn principal(
    future_value: f64,
    payment: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    require_positive("future value", future_value)?;
    require_non_negative("payment", payment)?;
    require_growth_terms(annual_rate_percent, periods_per_year, years)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    let n = periods_per_year * years;
    let contributions = payment * AnnuityFactors::future_value_annuity(rate, n);
    checked((future_value - contributions) / AnnuityFactors::growth(rate, n))
}

/// Per-period contribution needed on top of `principal` to reach `future_value`
pub fn payment(
    future_value: f64,
    principal: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
    years: f64,
) -> CalcResult<f64> {
    require_positive("future value", future_value)?;
    require_non_negative("principal", principal)?;
    require_growth_terms(annual_rate_percent, periods_per_year, years)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    let n = periods_per_year * years;
    let grown_principal = principal * AnnuityFactors::growth(rate, n);
    checked((future_value - grown_principal) / AnnuityFactors::future_value_annuity(rate, n))
}

pub fn years(
    future_value: f64,
    principal: f64,
    payment: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
) -> CalcResult<f64> {
    require_positive("future value", future_value)?;
    require_non_negative("principal", principal)?;
    require_non_negative("payment", payment)?;
    require_positive("interest rate", annual_rate_percent)?;
    require_positive("periods per year", periods_per_year)?;
    if principal == 0.0 && payment == 0.0 {
        return Err(CalcError::invalid_input(
            "principal and payment cannot both be zero",
        ));
    }

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    let periods = ((future_value * rate + payment) / (principal * rate + payment)).ln() / rate.ln_1p();
    checked(periods / periods_per_year)
}
