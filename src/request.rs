//! Calculation requests: which scenario, which unknown, and the known values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;
use crate::solvers::{AmortizationInputs, CompoundInputs, SavingsInputs};

/// The four calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Lump sum compounding with no contributions
    CompoundGrowth,
    /// Lump sum plus a regular contribution
    Savings,
    /// Amortizing loan with a configurable payment frequency
    Loan,
    /// Amortizing loan paid monthly
    Mortgage,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::CompoundGrowth,
        Scenario::Savings,
        Scenario::Loan,
        Scenario::Mortgage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::CompoundGrowth => "Compound Growth",
            Scenario::Savings => "Savings",
            Scenario::Loan => "Loan",
            Scenario::Mortgage => "Mortgage",
        }
    }

    /// Unknowns a caller may offer for this scenario, in display order
    pub fn supported_unknowns(&self) -> &'static [Unknown] {
        match self {
            Scenario::CompoundGrowth => &[
                Unknown::FutureValue,
                Unknown::InterestRate,
                Unknown::Principal,
                Unknown::Years,
            ],
            Scenario::Savings => &[
                Unknown::FutureValue,
                Unknown::Principal,
                Unknown::Payment,
                Unknown::Years,
            ],
            Scenario::Loan | Scenario::Mortgage => &[
                Unknown::Payment,
                Unknown::Principal,
                Unknown::NumberOfPayments,
            ],
        }
    }

    pub fn supports(&self, unknown: Unknown) -> bool {
        self.supported_unknowns().contains(&unknown)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "compound_growth" | "compound" | "compound_savings" => Ok(Scenario::CompoundGrowth),
            "savings" => Ok(Scenario::Savings),
            "loan" | "loans" => Ok(Scenario::Loan),
            "mortgage" => Ok(Scenario::Mortgage),
            _ => Err(CalcError::invalid_input(format!("unknown scenario: {}", s))),
        }
    }
}

/// The quantity a calculation solves for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unknown {
    FutureValue,
    InterestRate,
    Principal,
    Payment,
    Years,
    NumberOfPayments,
}

impl Unknown {
    pub fn label(&self) -> &'static str {
        match self {
            Unknown::FutureValue => "Future Value",
            Unknown::InterestRate => "Interest Rate",
            Unknown::Principal => "Principal",
            Unknown::Payment => "Payment",
            Unknown::Years => "Years",
            Unknown::NumberOfPayments => "Payments",
        }
    }

    /// Rates are displayed with a trailing `%`
    pub fn is_percentage(&self) -> bool {
        matches!(self, Unknown::InterestRate)
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unknown {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "future_value" | "fv" => Ok(Unknown::FutureValue),
            "interest_rate" | "rate" => Ok(Unknown::InterestRate),
            "principal" => Ok(Unknown::Principal),
            "payment" | "pmt" => Ok(Unknown::Payment),
            "years" => Ok(Unknown::Years),
            "number_of_payments" | "payments" => Ok(Unknown::NumberOfPayments),
            _ => Err(CalcError::invalid_input(format!("unknown quantity: {}", s))),
        }
    }
}

/// "Future Value", "future-value" and "FUTURE_VALUE" all become "future_value"
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// One calculation: scenario, unknown and the known inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum CalculationRequest {
    CompoundGrowth {
        solve_for: Unknown,
        #[serde(default)]
        inputs: CompoundInputs,
    },
    Savings {
        solve_for: Unknown,
        #[serde(default)]
        inputs: SavingsInputs,
    },
    Loan {
        solve_for: Unknown,
        #[serde(default)]
        inputs: AmortizationInputs,
        /// Payments per year; the calculator default applies when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        periods_per_year: Option<f64>,
    },
    Mortgage {
        solve_for: Unknown,
        #[serde(default)]
        inputs: AmortizationInputs,
    },
}

impl CalculationRequest {
    pub fn scenario(&self) -> Scenario {
        match self {
            CalculationRequest::CompoundGrowth { .. } => Scenario::CompoundGrowth,
            CalculationRequest::Savings { .. } => Scenario::Savings,
            CalculationRequest::Loan { .. } => Scenario::Loan,
            CalculationRequest::Mortgage { .. } => Scenario::Mortgage,
        }
    }

    pub fn solve_for(&self) -> Unknown {
        match self {
            CalculationRequest::CompoundGrowth { solve_for, .. }
            | CalculationRequest::Savings { solve_for, .. }
            | CalculationRequest::Loan { solve_for, .. }
            | CalculationRequest::Mortgage { solve_for, .. } => *solve_for,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_and_identifiers() {
        assert_eq!("Future Value".parse::<Unknown>().unwrap(), Unknown::FutureValue);
        assert_eq!("future_value".parse::<Unknown>().unwrap(), Unknown::FutureValue);
        assert_eq!("number-of-payments".parse::<Unknown>().unwrap(), Unknown::NumberOfPayments);
        assert_eq!("Payments".parse::<Unknown>().unwrap(), Unknown::NumberOfPayments);
        assert_eq!(" Interest Rate ".parse::<Unknown>().unwrap(), Unknown::InterestRate);
        assert!("duration".parse::<Unknown>().is_err());

        assert_eq!("Compound Growth".parse::<Scenario>().unwrap(), Scenario::CompoundGrowth);
        assert_eq!("MORTGAGE".parse::<Scenario>().unwrap(), Scenario::Mortgage);
        assert!("annuity".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_labels_parse_back() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.label().parse::<Scenario>().unwrap(), scenario);
            for &unknown in scenario.supported_unknowns() {
                assert_eq!(unknown.label().parse::<Unknown>().unwrap(), unknown);
            }
        }
    }

    #[test]
    fn test_supported_unknowns() {
        assert!(Scenario::CompoundGrowth.supports(Unknown::InterestRate));
        assert!(!Scenario::Savings.supports(Unknown::InterestRate));
        assert!(!Scenario::Loan.supports(Unknown::InterestRate));
        assert!(Scenario::Mortgage.supports(Unknown::NumberOfPayments));
        assert_eq!(Scenario::Savings.supported_unknowns()[0], Unknown::FutureValue);
        assert_eq!(Scenario::Loan.supported_unknowns()[0], Unknown::Payment);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "scenario": "loan",
            "solve_for": "payment",
            "inputs": { "principal": 200000, "annual_rate_percent": 6, "total_payments": 360 }
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.scenario(), Scenario::Loan);
        assert_eq!(request.solve_for(), Unknown::Payment);
        match request {
            CalculationRequest::Loan { inputs, periods_per_year, .. } => {
                assert_eq!(inputs.principal, 200_000.0);
                assert_eq!(inputs.payment, 0.0);
                assert_eq!(periods_per_year, None);
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_json_without_inputs() {
        let json = r#"{ "scenario": "compound_growth", "solve_for": "years" }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request,
            CalculationRequest::CompoundGrowth {
                solve_for: Unknown::Years,
                inputs: CompoundInputs::default(),
            }
        );
    }
}
