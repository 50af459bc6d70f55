//! Interval estimates for a population mean

use crate::types::{ConfidenceInterval, ConfidenceLevel};
use hydro_core::math::distributions;
use hydro_core::validate::{check_finite_scalar, check_sample};
use hydro_core::{Error, Result};
use hydro_descriptive::{mean, std_dev, Ddof};
use tracing::{debug, instrument};

/// Confidence interval for the mean of `sample`
///
/// With a known `population_std_dev` σ the interval is `mean ± z·σ/√N` using
/// the Normal critical value. Otherwise the sample standard deviation and the
/// Student-t critical value with `N − 1` degrees of freedom are used, which
/// needs at least two observations.
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn confidence_interval_for_mean(
    sample: &[f64],
    confidence_level: ConfidenceLevel,
    population_std_dev: Option<f64>,
) -> Result<ConfidenceInterval> {
    let tail = confidence_level.tail_probability();
    let (estimate, spread, critical) = match population_std_dev {
        Some(sigma) => {
            check_finite_scalar(sigma)?;
            if sigma <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "population standard deviation must be positive, got {sigma}"
                )));
            }
            check_sample(sample, 1)?;
            let z = distributions::standard_normal()?;
            (mean(sample)?, sigma, distributions::upper_critical(&z, tail))
        }
        None => {
            check_sample(sample, 2)?;
            let s = std_dev(sample, Ddof::Sample)?;
            let t = distributions::students_t((sample.len() - 1) as f64)?;
            (mean(sample)?, s, distributions::upper_critical(&t, tail))
        }
    };
    let margin = critical * spread / (sample.len() as f64).sqrt();
    debug!(estimate, critical, margin, "interval for mean");
    Ok(ConfidenceInterval::symmetric(
        estimate,
        margin,
        confidence_level.value(),
    ))
}

/// Observations needed for a known-σ interval of half-width `margin`
pub fn required_sample_size(
    population_std_dev: f64,
    margin: f64,
    confidence_level: ConfidenceLevel,
) -> Result<usize> {
    check_finite_scalar(population_std_dev)?;
    check_finite_scalar(margin)?;
    if population_std_dev <= 0.0 || margin <= 0.0 {
        return Err(Error::InvalidParameter(
            "standard deviation and margin must be positive".to_string(),
        ));
    }
    let z = distributions::upper_critical(
        &distributions::standard_normal()?,
        confidence_level.tail_probability(),
    );
    Ok((z * population_std_dev / margin).powi(2).ceil() as usize)
}
