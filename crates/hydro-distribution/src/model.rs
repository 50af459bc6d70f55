//! Fitted Normal and Log-Normal models
//!
//! A [`DistributionModel`] is fitted once from a sample and then answers
//! forward (value to probability) and inverse (probability to value) queries.

use hydro_core::math::distributions;
use hydro_core::validate::{check_finite_scalar, check_open_probability, check_positive, check_sample};
use hydro_core::{Error, Result};
use hydro_descriptive::{mean, std_dev, Ddof};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF};
use std::fmt;
use tracing::debug;

/// Base of the logarithm applied before fitting a Log-Normal model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum LogBase {
    #[default]
    Natural,
    Ten,
    Custom(f64),
}

impl LogBase {
    pub fn base(self) -> f64 {
        match self {
            Self::Natural => std::f64::consts::E,
            Self::Ten => 10.0,
            Self::Custom(b) => b,
        }
    }

    pub fn validate(self) -> Result<()> {
        let b = self.base();
        if b.is_finite() && b > 0.0 && b != 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidParameter(format!("invalid logarithm base {b}")))
        }
    }

    /// Logarithm of a positive value in this base
    pub fn log(self, x: f64) -> f64 {
        match self {
            Self::Natural => x.ln(),
            Self::Ten => x.log10(),
            Self::Custom(b) => x.log(b),
        }
    }

    /// Inverse of [`LogBase::log`]
    pub fn exp(self, y: f64) -> f64 {
        match self {
            Self::Natural => y.exp(),
            Self::Ten => 10f64.powf(y),
            Self::Custom(b) => b.powf(y),
        }
    }
}

/// A fitted parametric model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DistributionModel {
    Normal {
        mean: f64,
        std_dev: f64,
    },
    /// Normal in `log_base(x)`
    LogNormal {
        mean_of_logs: f64,
        std_dev_of_logs: f64,
        base: LogBase,
    },
}

impl DistributionModel {
    /// Build a Normal model from known parameters
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        check_parameters(mean, std_dev)?;
        Ok(Self::Normal { mean, std_dev })
    }

    /// Build a Log-Normal model from known parameters of the logs
    pub fn log_normal(mean_of_logs: f64, std_dev_of_logs: f64, base: LogBase) -> Result<Self> {
        check_parameters(mean_of_logs, std_dev_of_logs)?;
        base.validate()?;
        Ok(Self::LogNormal {
            mean_of_logs,
            std_dev_of_logs,
            base,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "normal",
            Self::LogNormal { .. } => "log-normal",
        }
    }

    /// Mean and standard deviation of the underlying Normal
    fn location_scale(&self) -> (f64, f64) {
        match *self {
            Self::Normal { mean, std_dev } => (mean, std_dev),
            Self::LogNormal {
                mean_of_logs,
                std_dev_of_logs,
                ..
            } => (mean_of_logs, std_dev_of_logs),
        }
    }

    /// Map a value onto the axis of the underlying Normal
    fn transform(&self, value: f64) -> Result<f64> {
        check_finite_scalar(value)?;
        match *self {
            Self::Normal { .. } => Ok(value),
            Self::LogNormal { base, .. } => {
                if value <= 0.0 {
                    return Err(Error::NonPositiveValue { index: 0, value });
                }
                Ok(base.log(value))
            }
        }
    }

    /// Standard score `z` of a value
    pub fn standardize(&self, value: f64) -> Result<f64> {
        let (m, s) = self.location_scale();
        Ok((self.transform(value)? - m) / s)
    }

    /// Probability of an outcome less than or equal to `value`
    pub fn cdf(&self, value: f64) -> Result<f64> {
        if matches!(self, Self::LogNormal { .. }) && value <= 0.0 && !value.is_nan() {
            return Ok(0.0);
        }
        let z = self.standardize(value)?;
        Ok(distributions::standard_normal()?.cdf(z))
    }

    /// Probability of an outcome greater than `value`
    pub fn exceedance_probability(&self, value: f64) -> Result<f64> {
        if matches!(self, Self::LogNormal { .. }) && value <= 0.0 && !value.is_nan() {
            return Ok(1.0);
        }
        let z = self.standardize(value)?;
        Ok(distributions::upper_tail(&distributions::standard_normal()?, z))
    }

    /// Density at `value` in the units of the data
    pub fn pdf(&self, value: f64) -> Result<f64> {
        match *self {
            Self::Normal { mean, std_dev } => {
                check_finite_scalar(value)?;
                Ok(distributions::normal(mean, std_dev)?.pdf(value))
            }
            Self::LogNormal {
                std_dev_of_logs,
                base,
                ..
            } => {
                if value <= 0.0 && !value.is_nan() {
                    return Ok(0.0);
                }
                let z = self.standardize(value)?;
                let jacobian = value * std_dev_of_logs * base.base().ln();
                Ok(distributions::standard_normal()?.pdf(z) / jacobian)
            }
        }
    }

    /// Value whose non-exceedance probability is `p`, for `p` in (0, 1)
    pub fn quantile(&self, p: f64) -> Result<f64> {
        check_open_probability(p, "quantile probability")?;
        let (m, s) = self.location_scale();
        let z = distributions::standard_normal()?.inverse_cdf(p);
        let y = m + s * z;
        Ok(match *self {
            Self::Normal { .. } => y,
            Self::LogNormal { base, .. } => base.exp(y),
        })
    }
}

impl fmt::Display for DistributionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal { mean, std_dev } => write!(f, "Normal(mean={mean}, sd={std_dev})"),
            Self::LogNormal {
                mean_of_logs,
                std_dev_of_logs,
                base,
            } => write!(
                f,
                "LogNormal(mean_log={mean_of_logs}, sd_log={std_dev_of_logs}, base={})",
                base.base()
            ),
        }
    }
}

fn check_parameters(location: f64, scale: f64) -> Result<()> {
    check_finite_scalar(location)?;
    if !(scale.is_finite() && scale > 0.0) {
        return Err(Error::DegenerateInput(format!(
            "model standard deviation must be positive, got {scale}"
        )));
    }
    Ok(())
}

/// Fit a Normal model from the sample mean and sample standard deviation
pub fn fit_normal(data: &[f64]) -> Result<DistributionModel> {
    check_sample(data, 2)?;
    let m = mean(data)?;
    let s = std_dev(data, Ddof::Sample)?;
    debug!(mean = m, std_dev = s, n = data.len(), "fitted normal model");
    DistributionModel::normal(m, s)
}

/// Fit a Log-Normal model from the moments of `log_base(x)`
///
/// Fails with `NonPositiveValue` if any element is zero or negative.
pub fn fit_log_normal(data: &[f64], base: LogBase) -> Result<DistributionModel> {
    check_sample(data, 2)?;
    check_positive(data)?;
    base.validate()?;
    let logs: Vec<f64> = data.iter().map(|&x| base.log(x)).collect();
    let m = mean(&logs)?;
    let s = std_dev(&logs, Ddof::Sample)?;
    debug!(mean_of_logs = m, std_dev_of_logs = s, n = data.len(), "fitted log-normal model");
    DistributionModel::log_normal(m, s, base)
}
