//! Distribution helpers for estimation and hypothesis testing
//!
//! Thin wrappers around `statrs` that convert construction failures into
//! [`Error::Distribution`] and name the critical-value lookups the inferential
//! crates need.

use crate::{Error, Result};

/// Distribution constructors and critical-value lookups
pub mod distributions {
    use super::*;
    use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, Normal, StudentsT};

    const MAX_BRACKET_DOUBLINGS: usize = 1100;
    const MAX_BISECTIONS: usize = 200;

    /// Standard normal N(0, 1)
    pub fn standard_normal() -> Result<Normal> {
        Normal::new(0.0, 1.0).map_err(Error::distribution)
    }

    /// Normal with the given mean and standard deviation
    pub fn normal(mean: f64, std_dev: f64) -> Result<Normal> {
        if std_dev <= 0.0 || !std_dev.is_finite() {
            return Err(Error::DegenerateInput(format!(
                "normal standard deviation must be positive, got {std_dev}"
            )));
        }
        Normal::new(mean, std_dev).map_err(Error::distribution)
    }

    /// Standard Student-t; `df` may be non-integer (Welch-Satterthwaite)
    pub fn students_t(df: f64) -> Result<StudentsT> {
        check_df(df)?;
        StudentsT::new(0.0, 1.0, df).map_err(Error::distribution)
    }

    /// Chi-square with `df` degrees of freedom
    pub fn chi_squared(df: f64) -> Result<ChiSquared> {
        check_df(df)?;
        ChiSquared::new(df).map_err(Error::distribution)
    }

    /// Fisher-Snedecor F with (`df1`, `df2`) degrees of freedom
    pub fn fisher_snedecor(df1: f64, df2: f64) -> Result<FisherSnedecor> {
        check_df(df1)?;
        check_df(df2)?;
        FisherSnedecor::new(df1, df2).map_err(Error::distribution)
    }

    /// Inverse CDF by bracketing and bisection to full double precision
    ///
    /// The generic `statrs` fallback stops after a fixed 16 halvings, which is
    /// too coarse for comparing a statistic against its critical value. `p`
    /// must lie in (0, 1).
    pub fn inverse_cdf<D: ContinuousCDF<f64, f64>>(dist: &D, p: f64) -> f64 {
        let mut low = -1.0;
        let mut high = 1.0;
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            if dist.cdf(low) <= p {
                break;
            }
            low *= 2.0;
        }
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            if dist.cdf(high) >= p {
                break;
            }
            high *= 2.0;
        }
        for _ in 0..MAX_BISECTIONS {
            let mid = 0.5 * (low + high);
            if dist.cdf(mid) < p {
                low = mid;
            } else {
                high = mid;
            }
            if high - low <= f64::EPSILON * (1.0 + mid.abs()) {
                break;
            }
        }
        0.5 * (low + high)
    }

    /// Value exceeded with probability `alpha`: F⁻¹(1 − α)
    pub fn upper_critical<D: ContinuousCDF<f64, f64>>(dist: &D, alpha: f64) -> f64 {
        inverse_cdf(dist, 1.0 - alpha)
    }

    /// Value undershot with probability `alpha`: F⁻¹(α)
    pub fn lower_critical<D: ContinuousCDF<f64, f64>>(dist: &D, alpha: f64) -> f64 {
        inverse_cdf(dist, alpha)
    }

    /// Two-sided critical pair (F⁻¹(α/2), F⁻¹(1 − α/2))
    pub fn two_sided_critical<D: ContinuousCDF<f64, f64>>(dist: &D, alpha: f64) -> (f64, f64) {
        (
            inverse_cdf(dist, alpha / 2.0),
            inverse_cdf(dist, 1.0 - alpha / 2.0),
        )
    }

    /// P(X > x)
    pub fn upper_tail<D: ContinuousCDF<f64, f64>>(dist: &D, x: f64) -> f64 {
        1.0 - dist.cdf(x)
    }

    fn check_df(df: f64) -> Result<()> {
        if df.is_finite() && df > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidParameter(format!(
                "degrees of freedom must be positive, got {df}"
            )))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_abs_diff_eq;

        #[test]
        fn test_normal_critical_values() {
            let z = standard_normal().unwrap();
            assert_abs_diff_eq!(upper_critical(&z, 0.025), 1.959964, epsilon = 1e-5);
            assert_abs_diff_eq!(lower_critical(&z, 0.025), -1.959964, epsilon = 1e-5);
            let (lo, hi) = two_sided_critical(&z, 0.05);
            assert_abs_diff_eq!(lo, -hi, epsilon = 1e-9);
        }

        #[test]
        fn test_students_t_critical_value() {
            // t(0.95, 4), the 90% two-sided value used for small samples
            let t = students_t(4.0).unwrap();
            assert_abs_diff_eq!(upper_critical(&t, 0.05), 2.131847, epsilon = 1e-4);
        }

        #[test]
        fn test_f_critical_value() {
            let f = fisher_snedecor(6.0, 8.0).unwrap();
            assert_abs_diff_eq!(upper_critical(&f, 0.05), 3.58, epsilon = 0.01);
        }

        #[test]
        fn test_chi_squared_critical_value() {
            let chi = chi_squared(10.0).unwrap();
            assert_abs_diff_eq!(upper_critical(&chi, 0.05), 18.307, epsilon = 1e-2);
        }

        #[test]
        fn test_inverse_cdf_round_trip() {
            let chi = chi_squared(7.0).unwrap();
            for p in [0.001, 0.05, 0.5, 0.95, 0.999] {
                let x = inverse_cdf(&chi, p);
                assert_abs_diff_eq!(chi.cdf(x), p, epsilon = 1e-10);
            }
            let t = students_t(3.5).unwrap();
            let x = inverse_cdf(&t, 0.02);
            assert!(x < 0.0);
            assert_abs_diff_eq!(t.cdf(x), 0.02, epsilon = 1e-10);
        }

        #[test]
        fn test_invalid_parameters() {
            assert!(normal(0.0, 0.0).is_err());
            assert!(students_t(0.0).is_err());
            assert!(chi_squared(f64::NAN).is_err());
            assert!(fisher_snedecor(1.0, -2.0).is_err());
        }
    }
}
