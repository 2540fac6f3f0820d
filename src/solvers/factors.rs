//! Compounding and annuity factors
//!
//! All rates here are decimal rates per period, `n` is a (possibly fractional)
//! number of periods. Callers are expected to have rejected non-positive rates.

/// Helper functions for compounding and level-annuity factors
pub struct AnnuityFactors;

impl AnnuityFactors {
    /// Growth of one unit over `n` periods: (1+i)^n
    pub fn growth(rate: f64, n: f64) -> f64 {
        (1.0 + rate).powf(n)
    }

    /// Future value of one unit paid at the end of each of `n` periods
    pub fn future_value_annuity(rate: f64, n: f64) -> f64 {
        (Self::growth(rate, n) - 1.0) / rate
    }

    /// Present value of one unit paid at the end of each of `n` periods
    pub fn present_value_annuity(rate: f64, n: f64) -> f64 {
        let growth = Self::growth(rate, n);
        (growth - 1.0) / (rate * growth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_growth() {
        assert_relative_eq!(AnnuityFactors::growth(0.01, 0.0), 1.0);
        assert_relative_eq!(AnnuityFactors::growth(0.05, 2.0), 1.1025, epsilon = 1e-12);
    }

    #[test]
    fn test_present_value_annuity() {
        // $100/month for 12 months at 6% annual
        let pv = 100.0 * AnnuityFactors::present_value_annuity(0.06 / 12.0, 12.0);
        assert!((pv - 1161.89).abs() < 0.01, "got {}", pv);
    }

    #[test]
    fn test_factors_are_consistent() {
        let (i, n) = (0.0075, 48.0);
        let fv = AnnuityFactors::future_value_annuity(i, n);
        let pv = AnnuityFactors::present_value_annuity(i, n);
        assert_relative_eq!(fv, pv * AnnuityFactors::growth(i, n), max_relative = 1e-12);
    }
}
