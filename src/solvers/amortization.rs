//! Level-payment amortization shared by loans and mortgages
//!
//! With i = r/100/CpY and n the total number of payments:
//! - PMT = P * i * (1+i)^n / ((1+i)^n - 1)
//! - P   = PMT * ((1+i)^n - 1) / (i * (1+i)^n)
//! - n   = ln(PMT / (PMT - P*i)) / ln(1+i), only defined when PMT > P*i

use serde::{Deserialize, Serialize};

use super::factors::AnnuityFactors;
use super::validate::{checked, periodic_rate, require_positive};
use crate::error::{CalcError, CalcResult};
use crate::request::Unknown;

/// Mortgages always compound and pay monthly
pub const MORTGAGE_PERIODS_PER_YEAR: f64 = 12.0;

/// Known values for a loan or mortgage calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmortizationInputs {
    pub principal: f64,
    /// Periodic repayment
    pub payment: f64,
    pub annual_rate_percent: f64,
    pub total_payments: f64,
}

/// Solve a loan whose payments fall `periods_per_year` times a year
pub fn solve(unknown: Unknown, inputs: &AmortizationInputs, periods_per_year: f64) -> CalcResult<f64> {
    match unknown {
        Unknown::Payment => payment(
            inputs.principal,
            inputs.annual_rate_percent,
            inputs.total_payments,
            periods_per_year,
        ),
        Unknown::Principal => principal(
            inputs.payment,
            inputs.annual_rate_percent,
            inputs.total_payments,
            periods_per_year,
        ),
        Unknown::NumberOfPayments => number_of_payments(
            inputs.principal,
            inputs.payment,
            inputs.annual_rate_percent,
            periods_per_year,
        ),
        other => Err(CalcError::invalid_input(format!(
            "{} cannot be solved for in a loan or mortgage",
            other.label()
        ))),
    }
}

/// Solve a mortgage: a loan with monthly payments
pub fn solve_mortgage(unknown: Unknown, inputs: &AmortizationInputs) -> CalcResult<f64> {
    solve(unknown, inputs, MORTGAGE_PERIODS_PER_YEAR)
}

/// Level payment that repays `principal` over `total_payments` periods
pub fn payment(
    principal: f64,
    annual_rate_percent: f64,
    total_payments: f64,
    periods_per_year: f64,
) -> CalcResult<f64> {
    require_positive("principal", principal)?;
    require_positive("interest rate", annual_rate_percent)?;
    require_positive("number of payments", total_payments)?;
    require_positive("periods per year", periods_per_year)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    checked(principal / AnnuityFactors::present_value_annuity(rate, total_payments))
}

/// Amount that `total_payments` payments of `payment` can repay
pub fn principal(
    payment: f64,
    annual_rate_percent: f64,
    total_payments: f64,
    periods_per_year: f64,
) -> CalcResult<f64> {
    require_positive("payment", payment)?;
    require_positive("interest rate", annual_rate_percent)?;
    require_positive("number of payments", total_payments)?;
    require_positive("periods per year", periods_per_year)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    checked(payment * AnnuityFactors::present_value_annuity(rate, total_payments))
}

/// Payments needed to clear `principal`; continuous, not rounded up
pub fn number_of_payments(
    principal: f64,
    payment: f64,
    annual_rate_percent: f64,
    periods_per_year: f64,
) -> CalcResult<f64> {
    require_positive("principal", principal)?;
    require_positive("payment", payment)?;
    require_positive("interest rate", annual_rate_percent)?;
    require_positive("periods per year", periods_per_year)?;

    let rate = periodic_rate(annual_rate_percent, periods_per_year);
    let interest = principal * rate;
    // The loan never amortizes unless each payment covers the interest accrued
    if payment <= interest {
        return Err(CalcError::invalid_input(format!(
            "payment {} must exceed the per-period interest {}",
            payment, interest
        )));
    }

    checked((payment / (payment - interest)).ln() / rate.ln_1p())
}
