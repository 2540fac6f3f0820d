//! Calculator settings
//!
//! Read from the environment when present:
//!   FINCALC_LOAN_PERIODS_PER_YEAR, FINCALC_DECIMAL_PLACES

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_LOAN_PERIODS_PER_YEAR: f64 = 12.0;
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

pub const LOAN_PERIODS_PER_YEAR_VAR: &str = "FINCALC_LOAN_PERIODS_PER_YEAR";
pub const DECIMAL_PLACES_VAR: &str = "FINCALC_DECIMAL_PLACES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Payment frequency for loans that do not state one
    pub loan_periods_per_year: f64,

    /// Precision used when formatting results for display
    pub decimal_places: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            loan_periods_per_year: DEFAULT_LOAN_PERIODS_PER_YEAR,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl CalculatorConfig {
    /// Defaults overridden by whichever environment variables are set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let loan_periods_per_year = match lookup(LOAN_PERIODS_PER_YEAR_VAR) {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v > 0.0 && v.is_finite() => v,
                _ => {
                    warn!(
                        "Ignoring {}={:?}: expected a positive number",
                        LOAN_PERIODS_PER_YEAR_VAR, raw
                    );
                    defaults.loan_periods_per_year
                }
            },
            None => defaults.loan_periods_per_year,
        };

        let decimal_places = match lookup(DECIMAL_PLACES_VAR) {
            Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|_| {
                warn!("Ignoring {}={:?}: expected a whole number", DECIMAL_PLACES_VAR, raw);
                defaults.decimal_places
            }),
            None => defaults.decimal_places,
        };

        Self {
            loan_periods_per_year,
            decimal_places,
        }
    }
}
