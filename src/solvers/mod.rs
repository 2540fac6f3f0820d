//! Closed-form solvers, one module per scenario

pub mod amortization;
pub mod compound;
pub mod savings;
mod factors;
mod validate;

pub use amortization::{AmortizationInputs, MORTGAGE_PERIODS_PER_YEAR};
pub use compound::CompoundInputs;
pub use factors::AnnuityFactors;
pub use savings::SavingsInputs;
