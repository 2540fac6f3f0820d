//! Load calculation requests from CSV and write reports back out
//!
//! Input columns (numeric cells may be left empty):
//! scenario, solve_for, principal, payment, annual_rate_percent,
//! periods_per_year, years, total_payments, future_value

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim, Writer};
use log::info;
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::Path;

use crate::report::CalculationReport;
use crate::request::{CalculationRequest, Scenario, Unknown};
use crate::solvers::{AmortizationInputs, CompoundInputs, SavingsInputs};

/// Raw CSV row; which fields matter depends on the scenario
#[derive(Debug, Deserialize)]
struct CsvRow {
    scenario: String,
    solve_for: String,
    #[serde(default)]
    principal: Option<f64>,
    #[serde(default)]
    payment: Option<f64>,
    #[serde(default)]
    annual_rate_percent: Option<f64>,
    #[serde(default)]
    periods_per_year: Option<f64>,
    #[serde(default)]
    years: Option<f64>,
    #[serde(default)]
    total_payments: Option<f64>,
    #[serde(default)]
    future_value: Option<f64>,
}

impl CsvRow {
    fn into_request(self) -> Result<CalculationRequest> {
        let scenario: Scenario = self.scenario.parse()?;
        let solve_for: Unknown = self.solve_for.parse()?;

        let principal = self.principal.unwrap_or(0.0);
        let payment = self.payment.unwrap_or(0.0);
        let annual_rate_percent = self.annual_rate_percent.unwrap_or(0.0);
        let periods_per_year = self.periods_per_year.unwrap_or(0.0);
        let years = self.years.unwrap_or(0.0);
        let total_payments = self.total_payments.unwrap_or(0.0);
        let future_value = self.future_value.unwrap_or(0.0);

        let amortization = AmortizationInputs {
            principal,
            payment,
            annual_rate_percent,
            total_payments,
        };

        Ok(match scenario {
            Scenario::CompoundGrowth => CalculationRequest::CompoundGrowth {
                solve_for,
                inputs: CompoundInputs {
                    principal,
                    future_value,
                    annual_rate_percent,
                    periods_per_year,
                    years,
                },
            },
            Scenario::Savings => CalculationRequest::Savings {
                solve_for,
                inputs: SavingsInputs {
                    principal,
                    payment,
                    annual_rate_percent,
                    periods_per_year,
                    years,
                    future_value,
                },
            },
            Scenario::Loan => CalculationRequest::Loan {
                solve_for,
                inputs: amortization,
                periods_per_year: self.periods_per_year,
            },
            Scenario::Mortgage => CalculationRequest::Mortgage {
                solve_for,
                inputs: amortization,
            },
        })
    }
}

/// Load requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationRequest>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let requests = load_requests_from_reader(file)
        .with_context(|| format!("Failed to load requests from {}", path.display()))?;
    info!("Loaded {} requests from {}", requests.len(), path.display());
    Ok(requests)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: Read>(reader: R) -> Result<Vec<CalculationRequest>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut requests = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row: CsvRow = result.with_context(|| format!("Malformed row on line {}", line))?;
        let request = row
            .into_request()
            .with_context(|| format!("Invalid request on line {}", line))?;
        requests.push(request);
    }

    Ok(requests)
}

/// Write reports as CSV: scenario, solve_for, value, error, display
pub fn write_reports<W: Write>(writer: W, reports: &[CalculationReport]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for report in reports {
        csv_writer.serialize(report)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Calculator;

    const SAMPLE: &str = "\
scenario,solve_for,principal,payment,annual_rate_percent,periods_per_year,years,total_payments,future_value
compound_growth,future_value,1000,,5,12,10,,
savings,years,1000,100,6,12,,,18207.33
loan,payment,200000,,6,,,360,
loan,payment,200000,,6,26,,360,
Mortgage,Payments,10000,50,6,,,,
";

    #[test]
    fn test_load_requests() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(requests.len(), 5);

        assert_eq!(requests[0].scenario(), Scenario::CompoundGrowth);
        assert_eq!(requests[1].solve_for(), Unknown::Years);
        assert_eq!(requests[4].scenario(), Scenario::Mortgage);
        assert_eq!(requests[4].solve_for(), Unknown::NumberOfPayments);

        match &requests[2] {
            CalculationRequest::Loan { inputs, periods_per_year, .. } => {
                assert_eq!(inputs.total_payments, 360.0);
                assert_eq!(inputs.payment, 0.0);
                assert_eq!(*periods_per_year, None);
            }
            other => panic!("unexpected request: {:?}", other),
        }
        match &requests[3] {
            CalculationRequest::Loan { periods_per_year, .. } => {
                assert_eq!(*periods_per_year, Some(26.0))
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_padded_cells_are_trimmed() {
        let input = "\
scenario, solve_for, principal, payment, annual_rate_percent, periods_per_year, years, total_payments, future_value
loan, payment, 200000,, 6,,, 360,
";
        let requests = load_requests_from_reader(input.as_bytes()).unwrap();
        assert_eq!(requests.len(), 1);
        match &requests[0] {
            CalculationRequest::Loan { solve_for, inputs, periods_per_year } => {
                assert_eq!(*solve_for, Unknown::Payment);
                assert_eq!(inputs.principal, 200_000.0);
                assert_eq!(inputs.annual_rate_percent, 6.0);
                assert_eq!(inputs.total_payments, 360.0);
                assert_eq!(*periods_per_year, None);
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_scenario_names_the_line() {
        let input = "scenario,solve_for,principal\nannuity,payment,100\n";
        let err = load_requests_from_reader(input.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"), "got: {:#}", err);
    }

    #[test]
    fn test_write_reports() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        let reports = Calculator::new().report_batch(&requests);

        let mut out = Vec::new();
        write_reports(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "scenario,solve_for,value,error,display");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("compound_growth,future_value,1647.0"));
        assert!(lines[1].ends_with("Future Value: 1647.01"));
        assert!(lines[3].ends_with("Payment: 1199.10"));
        // Payment equal to the monthly interest never amortizes
        assert!(lines[5].starts_with("mortgage,number_of_payments,,Invalid input"));
        assert!(lines[5].ends_with("Please enter valid inputs"));
    }
}
