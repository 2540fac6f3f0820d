//! Request dispatch
//!
//! Holds the calculator settings and routes each request to its scenario
//! solver. Requests are independent, so batches are evaluated in parallel.

use log::debug;
use rayon::prelude::*;

use crate::config::CalculatorConfig;
use crate::error::CalculationResult;
use crate::report::CalculationReport;
use crate::request::CalculationRequest;
use crate::solvers::{amortization, compound, savings};

/// Evaluates calculation requests under one configuration
///
/// # Example
/// ```
/// use fincalc::{Calculator, CalculationRequest, Unknown};
/// use fincalc::solvers::AmortizationInputs;
///
/// let calculator = Calculator::new();
/// let request = CalculationRequest::Mortgage {
///     solve_for: Unknown::Payment,
///     inputs: AmortizationInputs {
///         principal: 200_000.0,
///         annual_rate_percent: 6.0,
///         total_payments: 360.0,
///         ..Default::default()
///     },
/// };
/// let payment = calculator.evaluate(&request).unwrap();
/// assert!((payment - 1199.10).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Calculator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with settings taken from the environment
    pub fn from_env() -> Self {
        Self::with_config(CalculatorConfig::from_env())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Solve a single request
    pub fn evaluate(&self, request: &CalculationRequest) -> CalculationResult {
        let result = match request {
            CalculationRequest::CompoundGrowth { solve_for, inputs } => {
                compound::solve(*solve_for, inputs)
            }
            CalculationRequest::Savings { solve_for, inputs } => savings::solve(*solve_for, inputs),
            CalculationRequest::Loan {
                solve_for,
                inputs,
                periods_per_year,
            } => {
                let periods_per_year = periods_per_year.unwrap_or(self.config.loan_periods_per_year);
                amortization::solve(*solve_for, inputs, periods_per_year)
            }
            CalculationRequest::Mortgage { solve_for, inputs } => {
                amortization::solve_mortgage(*solve_for, inputs)
            }
        };

        if let Err(ref e) = result {
            debug!(
                "{} / {} rejected: {}",
                request.scenario(),
                request.solve_for(),
                e
            );
        }
        result
    }

    /// Solve many requests; results come back in input order
    pub fn evaluate_batch(&self, requests: &[CalculationRequest]) -> Vec<CalculationResult> {
        requests.par_iter().map(|r| self.evaluate(r)).collect()
    }

    /// Solve and format for display
    pub fn report(&self, request: &CalculationRequest) -> CalculationReport {
        let result = self.evaluate(request);
        CalculationReport::new(request, &result, self.config.decimal_places)
    }

    pub fn report_batch(&self, requests: &[CalculationRequest]) -> Vec<CalculationReport> {
        requests.par_iter().map(|r| self.report(r)).collect()
    }
}

/// Solve a request with the default settings
pub fn evaluate(request: &CalculationRequest) -> CalculationResult {
    Calculator::new().evaluate(request)
}
