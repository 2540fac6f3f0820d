//! Finance Calculator - closed-form solvers for everyday financial questions
//!
//! This library provides:
//! - Compound growth: future value, rate, principal or years for a lump sum
//! - Savings with regular contributions: future value, principal, payment or years
//! - Loans and mortgages: level payment, principal or number of payments
//! - Request dispatch, display formatting and CSV batch processing
//!
//! Every solver is a pure function. A result is either a finite, non-negative
//! number or a [`CalcError`] explaining why there is none.

pub mod batch;
pub mod calculator;
pub mod config;
pub mod error;
pub mod report;
pub mod request;
pub mod solvers;

// Re-export commonly used types
pub use calculator::{evaluate, Calculator};
pub use config::CalculatorConfig;
pub use error::{CalcError, CalcResult, CalculationResult};
pub use report::{format_result, parse_field, CalculationReport};
pub use request::{CalculationRequest, Scenario, Unknown};
