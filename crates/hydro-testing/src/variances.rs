//! Tests on one variance or the ratio of two variances
//!
//! The chi-square and F statistics need at least two degrees of freedom per
//! sample: `N ≥ 3` when the mean is estimated, `N ≥ 2` when it is known.

use crate::evaluate::{check_alpha, evaluate};
use crate::types::{DegreesOfFreedom, Tail, TestKind, TestResult, VarianceSummary};
use hydro_core::math::distributions;
use hydro_core::validate::{check_finite_scalar, check_sample};
use hydro_core::{Error, Result};
use hydro_descriptive::{variance, Ddof};
use tracing::debug;

const MIN_DEGREES_OF_FREEDOM: usize = 2;

fn check_degrees_of_freedom(df: usize) -> Result<()> {
    if df < MIN_DEGREES_OF_FREEDOM {
        return Err(Error::InsufficientData {
            expected: MIN_DEGREES_OF_FREEDOM,
            actual: df,
        });
    }
    Ok(())
}

fn check_variance(value: f64, what: &str) -> Result<()> {
    check_finite_scalar(value)?;
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{what} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Sum of squared deviations and its degrees of freedom
fn squared_deviations(sample: &[f64], known_mean: Option<f64>) -> Result<(f64, usize)> {
    match known_mean {
        Some(mu) => {
            check_sample(sample, MIN_DEGREES_OF_FREEDOM)?;
            check_finite_scalar(mu)?;
            let ss = sample.iter().map(|&x| (x - mu) * (x - mu)).sum();
            Ok((ss, sample.len()))
        }
        None => {
            check_sample(sample, MIN_DEGREES_OF_FREEDOM + 1)?;
            let df = sample.len() - 1;
            Ok((variance(sample, Ddof::Sample)? * df as f64, df))
        }
    }
}

fn chi_square_from_sum(
    sum_of_squares: f64,
    df: usize,
    hypothesized_variance: f64,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    let statistic = sum_of_squares / hypothesized_variance;
    let eval = evaluate(&distributions::chi_squared(df as f64)?, statistic, alpha, tail);
    debug!(statistic, df, p_value = eval.p_value, decision = %eval.decision, "chi-square variance test");
    Ok(TestResult {
        kind: TestKind::ChiSquareVariance,
        statistic,
        critical: eval.critical,
        degrees_of_freedom: DegreesOfFreedom::One(df as f64),
        p_value: eval.p_value,
        significance_level: alpha,
        tail,
        decision: eval.decision,
    })
}

/// Chi-square test of `H0: σ² = hypothesized_variance`
///
/// With `known_mean` the statistic is `Σ(x − μ)² / σ0²` on `N` degrees of
/// freedom; otherwise `(N − 1)s² / σ0²` on `N − 1`.
pub fn chi_square_variance_test(
    sample: &[f64],
    hypothesized_variance: f64,
    known_mean: Option<f64>,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_variance(hypothesized_variance, "hypothesized variance")?;
    let (ss, df) = squared_deviations(sample, known_mean)?;
    check_degrees_of_freedom(df)?;
    chi_square_from_sum(ss, df, hypothesized_variance, alpha, tail)
}

/// Chi-square variance test from a sample size and sample variance
pub fn chi_square_variance_test_summary(
    summary: VarianceSummary,
    hypothesized_variance: f64,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_variance(hypothesized_variance, "hypothesized variance")?;
    check_finite_scalar(summary.variance)?;
    if summary.variance < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "sample variance cannot be negative, got {}",
            summary.variance
        )));
    }
    let df = summary.size.saturating_sub(1);
    check_degrees_of_freedom(df)?;
    chi_square_from_sum(summary.variance * df as f64, df, hypothesized_variance, alpha, tail)
}

fn f_from_variances(
    var_x: f64,
    df_x: usize,
    var_y: f64,
    df_y: usize,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    if var_y <= 0.0 {
        return Err(Error::DegenerateInput(
            "denominator sample has zero variance".to_string(),
        ));
    }
    let statistic = var_x / var_y;
    let (d1, d2) = (df_x as f64, df_y as f64);
    let eval = evaluate(&distributions::fisher_snedecor(d1, d2)?, statistic, alpha, tail);
    debug!(statistic, d1, d2, p_value = eval.p_value, decision = %eval.decision, "variance ratio test");
    Ok(TestResult {
        kind: TestKind::VarianceRatioF,
        statistic,
        critical: eval.critical,
        degrees_of_freedom: DegreesOfFreedom::Two(d1, d2),
        p_value: eval.p_value,
        significance_level: alpha,
        tail,
        decision: eval.decision,
    })
}

/// F test of `H0: σx² = σy²` with statistic `Sx² / Sy²`
///
/// Degrees of freedom are `(N − 1, M − 1)`, or `(N, M)` when both population
/// means are known and the variances use them with divisor `N`.
pub fn f_test(
    xs: &[f64],
    ys: &[f64],
    known_means: Option<(f64, f64)>,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    let (ss_x, df_x) = squared_deviations(xs, known_means.map(|m| m.0))?;
    let (ss_y, df_y) = squared_deviations(ys, known_means.map(|m| m.1))?;
    check_degrees_of_freedom(df_x)?;
    check_degrees_of_freedom(df_y)?;
    f_from_variances(
        ss_x / df_x as f64,
        df_x,
        ss_y / df_y as f64,
        df_y,
        alpha,
        tail,
    )
}

/// F test from sizes and sample variances, `(N − 1, M − 1)` degrees of freedom
pub fn f_test_summary(
    x: VarianceSummary,
    y: VarianceSummary,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_finite_scalar(x.variance)?;
    check_finite_scalar(y.variance)?;
    if x.variance < 0.0 || y.variance < 0.0 {
        return Err(Error::InvalidParameter(
            "variances cannot be negative".to_string(),
        ));
    }
    let df_x = x.size.saturating_sub(1);
    let df_y = y.size.saturating_sub(1);
    check_degrees_of_freedom(df_x)?;
    check_degrees_of_freedom(df_y)?;
    f_from_variances(x.variance, df_x, y.variance, df_y, alpha, tail)
}
