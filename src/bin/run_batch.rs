//! Evaluate every calculation in a CSV file
//!
//! Reads requests (see `fincalc::batch` for the columns), solves them in
//! parallel and writes one report row per request, in input order.

use anyhow::{Context, Result};
use clap::Parser;
use fincalc::batch::{load_requests, write_reports};
use fincalc::Calculator;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Evaluate a CSV file of calculation requests")]
struct Args {
    /// Input CSV of requests
    input: PathBuf,

    /// Where to write the reports
    #[arg(short, long, default_value = "calculation_reports.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    println!("Loading requests from {}...", args.input.display());
    let requests = load_requests(&args.input)?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let calculator = Calculator::from_env();
    let eval_start = Instant::now();
    let reports = calculator.report_batch(&requests);
    println!("Evaluated in {:?}", eval_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_reports(BufWriter::new(file), &reports)?;
    println!("Output written to {}", args.output.display());

    let solved = reports.iter().filter(|r| r.is_ok()).count();
    println!("\nSummary:");
    println!("  Requests: {}", reports.len());
    println!("  Solved:   {}", solved);
    println!("  Rejected: {}", reports.len() - solved);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
