//! Two-sided p-values for Wald-type statistics.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Two-sided p-value of a t statistic with `df` residual degrees of freedom.
///
/// Infinite statistics give 0; NaN statistics or non-positive `df` give NaN.
pub fn pvalue_t(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if t.is_infinite() {
        return 0.0;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    }
}

/// Two-sided p-value of a standard-normal statistic.
pub fn pvalue_z(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z.is_infinite() {
        return 0.0;
    }
    match Normal::new(0.0, 1.0) {
        Ok(dist) => (2.0 * dist.sf(z.abs())).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvalue_z_known_values() {
        assert!((pvalue_z(1.959_963_985) - 0.05).abs() < 1e-6);
        assert!((pvalue_z(0.0) - 1.0).abs() < 1e-12);
        assert_eq!(pvalue_z(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_pvalue_t_known_values() {
        // t_{0.975, 10} = 2.228139
        assert!((pvalue_t(2.228_139, 10.0) - 0.05).abs() < 1e-5);
        assert!((pvalue_t(-2.228_139, 10.0) - 0.05).abs() < 1e-5);
        assert!(pvalue_t(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_t_approaches_normal_for_large_df() {
        assert!((pvalue_t(1.5, 1e6) - pvalue_z(1.5)).abs() < 1e-4);
    }
}
