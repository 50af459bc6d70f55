//! Tests on one mean or the difference of two means
//!
//! Every test requires at least two observations per sample.

use crate::evaluate::{check_alpha, evaluate};
use crate::types::{DegreesOfFreedom, Tail, TestKind, TestResult};
use hydro_core::math::distributions;
use hydro_core::validate::{check_finite_scalar, check_sample};
use hydro_core::{Error, Result};
use hydro_descriptive::{mean, variance, Ddof};
use tracing::{debug, instrument};

fn check_sigma(sigma: f64) -> Result<()> {
    check_finite_scalar(sigma)?;
    if sigma <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "population standard deviation must be positive, got {sigma}"
        )));
    }
    Ok(())
}

fn check_standard_error(se: f64) -> Result<()> {
    if se > 0.0 {
        Ok(())
    } else {
        Err(Error::DegenerateInput(
            "standard error is zero: samples have no spread".to_string(),
        ))
    }
}

fn finish(
    kind: TestKind,
    statistic: f64,
    degrees_of_freedom: DegreesOfFreedom,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    let eval = match degrees_of_freedom {
        DegreesOfFreedom::None => {
            evaluate(&distributions::standard_normal()?, statistic, alpha, tail)
        }
        DegreesOfFreedom::One(df) => {
            evaluate(&distributions::students_t(df)?, statistic, alpha, tail)
        }
        DegreesOfFreedom::Two(..) => {
            return Err(Error::InvalidParameter(
                "mean tests use a single degrees-of-freedom value".to_string(),
            ))
        }
    };
    debug!(?kind, statistic, p_value = eval.p_value, decision = %eval.decision, "mean test");
    Ok(TestResult {
        kind,
        statistic,
        critical: eval.critical,
        degrees_of_freedom,
        p_value: eval.p_value,
        significance_level: alpha,
        tail,
        decision: eval.decision,
    })
}

/// One-sample Z test of `H0: μ = hypothesized_mean` with known σ
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn z_test_one_sample(
    sample: &[f64],
    hypothesized_mean: f64,
    population_std_dev: f64,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_sample(sample, 2)?;
    check_finite_scalar(hypothesized_mean)?;
    check_sigma(population_std_dev)?;
    let n = sample.len() as f64;
    let z = (mean(sample)? - hypothesized_mean) / (population_std_dev / n.sqrt());
    finish(TestKind::OneSampleZ, z, DegreesOfFreedom::None, alpha, tail)
}

/// One-sample Student-t test of `H0: μ = hypothesized_mean`, `N − 1` df
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn t_test_one_sample(
    sample: &[f64],
    hypothesized_mean: f64,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_sample(sample, 2)?;
    check_finite_scalar(hypothesized_mean)?;
    let n = sample.len() as f64;
    let se = (variance(sample, Ddof::Sample)? / n).sqrt();
    check_standard_error(se)?;
    let t = (mean(sample)? - hypothesized_mean) / se;
    finish(TestKind::OneSampleT, t, DegreesOfFreedom::One(n - 1.0), alpha, tail)
}

/// Two-sample Z test of `H0: μx = μy` with known σx and σy
#[instrument(skip(xs, ys), fields(n = xs.len(), m = ys.len()))]
pub fn z_test_two_sample(
    xs: &[f64],
    ys: &[f64],
    std_dev_x: f64,
    std_dev_y: f64,
    alpha: f64,
    tail: Tail,
) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_sample(xs, 2)?;
    check_sample(ys, 2)?;
    check_sigma(std_dev_x)?;
    check_sigma(std_dev_y)?;
    let se = (std_dev_x.powi(2) / xs.len() as f64 + std_dev_y.powi(2) / ys.len() as f64).sqrt();
    let z = (mean(xs)? - mean(ys)?) / se;
    finish(TestKind::TwoSampleZ, z, DegreesOfFreedom::None, alpha, tail)
}

/// Two-sample t test of `H0: μx = μy` assuming a common variance
///
/// Uses the pooled variance with `N + M − 2` degrees of freedom.
#[instrument(skip(xs, ys), fields(n = xs.len(), m = ys.len()))]
pub fn pooled_t_test(xs: &[f64], ys: &[f64], alpha: f64, tail: Tail) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_sample(xs, 2)?;
    check_sample(ys, 2)?;
    let n = xs.len() as f64;
    let m = ys.len() as f64;
    let df = n + m - 2.0;
    let pooled =
        ((n - 1.0) * variance(xs, Ddof::Sample)? + (m - 1.0) * variance(ys, Ddof::Sample)?) / df;
    let se = (pooled * (1.0 / n + 1.0 / m)).sqrt();
    check_standard_error(se)?;
    let t = (mean(xs)? - mean(ys)?) / se;
    finish(TestKind::PooledT, t, DegreesOfFreedom::One(df), alpha, tail)
}

/// Welch-Satterthwaite degrees of freedom for two sample variances
pub fn welch_degrees_of_freedom(var_x: f64, n: usize, var_y: f64, m: usize) -> Result<f64> {
    if n < 2 || m < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n.min(m),
        });
    }
    let a = var_x / n as f64;
    let b = var_y / m as f64;
    let denominator = a * a / (n - 1) as f64 + b * b / (m - 1) as f64;
    if denominator <= 0.0 {
        return Err(Error::DegenerateInput(
            "both samples have zero variance".to_string(),
        ));
    }
    Ok((a + b).powi(2) / denominator)
}

/// Two-sample t test of `H0: μx = μy` without assuming equal variances
///
/// Degrees of freedom follow the Welch-Satterthwaite approximation and are
/// not rounded.
#[instrument(skip(xs, ys), fields(n = xs.len(), m = ys.len()))]
pub fn welch_t_test(xs: &[f64], ys: &[f64], alpha: f64, tail: Tail) -> Result<TestResult> {
    check_alpha(alpha)?;
    check_sample(xs, 2)?;
    check_sample(ys, 2)?;
    let var_x = variance(xs, Ddof::Sample)?;
    let var_y = variance(ys, Ddof::Sample)?;
    let se = (var_x / xs.len() as f64 + var_y / ys.len() as f64).sqrt();
    check_standard_error(se)?;
    let df = welch_degrees_of_freedom(var_x, xs.len(), var_y, ys.len())?;
    let t = (mean(xs)? - mean(ys)?) / se;
    finish(TestKind::WelchT, t, DegreesOfFreedom::One(df), alpha, tail)
}
