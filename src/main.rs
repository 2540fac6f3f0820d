//! Finance Calculator CLI
//!
//! One calculation per invocation. Field values are taken as raw text, the
//! way a form would supply them; anything unparsable counts as 0.
//!
//! ```bash
//! fincalc compound --solve-for future-value --principal 1000 --rate 5 --periods-per-year 12 --years 10
//! fincalc loan --solve-for payment --principal 200000 --rate 6 --total-payments 360
//! fincalc mortgage --solve-for payments --principal 10000 --payment 200 --rate 6 --format json
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use fincalc::solvers::{AmortizationInputs, CompoundInputs, SavingsInputs};
use fincalc::{parse_field, CalculationRequest, Calculator, Scenario, Unknown};

/// Compound growth, savings, loan and mortgage calculator
#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lump sum growing with compound interest
    Compound(FieldArgs),
    /// Lump sum plus a regular contribution
    Savings(FieldArgs),
    /// Amortizing loan (payments per year defaults to 12)
    Loan(FieldArgs),
    /// Amortizing loan with monthly payments
    Mortgage(FieldArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable result line
    Table,
    /// Full report as JSON
    Json,
}

/// Form fields; only those the chosen unknown needs are read
#[derive(Args)]
struct FieldArgs {
    /// Quantity to solve for, e.g. "future-value", "interest-rate", "payments"
    #[arg(short, long)]
    solve_for: Unknown,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    principal: String,

    /// Periodic contribution or repayment
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    payment: String,

    /// Nominal annual rate in percent
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    rate: String,

    /// Compounding (or payment) periods per year
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    periods_per_year: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    years: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    total_payments: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    future_value: String,
}

impl FieldArgs {
    fn amortization(&self) -> AmortizationInputs {
        AmortizationInputs {
            principal: parse_field(&self.principal),
            payment: parse_field(&self.payment),
            annual_rate_percent: parse_field(&self.rate),
            total_payments: parse_field(&self.total_payments),
        }
    }

    fn into_request(self, scenario: Scenario) -> CalculationRequest {
        match scenario {
            Scenario::CompoundGrowth => CalculationRequest::CompoundGrowth {
                solve_for: self.solve_for,
                inputs: CompoundInputs {
                    principal: parse_field(&self.principal),
                    future_value: parse_field(&self.future_value),
                    annual_rate_percent: parse_field(&self.rate),
                    periods_per_year: parse_field(&self.periods_per_year),
                    years: parse_field(&self.years),
                },
            },
            Scenario::Savings => CalculationRequest::Savings {
                solve_for: self.solve_for,
                inputs: SavingsInputs {
                    principal: parse_field(&self.principal),
                    payment: parse_field(&self.payment),
                    annual_rate_percent: parse_field(&self.rate),
                    periods_per_year: parse_field(&self.periods_per_year),
                    years: parse_field(&self.years),
                    future_value: parse_field(&self.future_value),
                },
            },
            Scenario::Loan => CalculationRequest::Loan {
                solve_for: self.solve_for,
                inputs: self.amortization(),
                // Left blank means "use the configured default"
                periods_per_year: match self.periods_per_year.trim() {
                    "" => None,
                    raw => Some(parse_field(raw)),
                },
            },
            Scenario::Mortgage => CalculationRequest::Mortgage {
                solve_for: self.solve_for,
                inputs: self.amortization(),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (scenario, fields) = match cli.command {
        Commands::Compound(args) => (Scenario::CompoundGrowth, args),
        Commands::Savings(args) => (Scenario::Savings, args),
        Commands::Loan(args) => (Scenario::Loan, args),
        Commands::Mortgage(args) => (Scenario::Mortgage, args),
    };

    if !scenario.supports(fields.solve_for) {
        let options: Vec<&str> = scenario
            .supported_unknowns()
            .iter()
            .map(|u| u.label())
            .collect();
        anyhow::bail!(
            "{} cannot be solved for in the {} calculator (choose one of: {})",
            fields.solve_for,
            scenario,
            options.join(", ")
        );
    }

    let calculator = Calculator::from_env();
    let report = calculator.report(&fields.into_request(scenario));

    match cli.format {
        OutputFormat::Table => println!("{}", report.display),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
