//! Central moments: mean, variance, standard deviation and skewness

use hydro_core::validate::check_sample;
use hydro_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Delta degrees of freedom for variance estimates
///
/// There is no default: every caller states which divisor it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ddof {
    /// Divisor `N`
    Population,
    /// Divisor `N - 1`
    Sample,
}

impl Ddof {
    /// Number subtracted from `N` in the divisor
    pub fn value(self) -> usize {
        match self {
            Self::Population => 0,
            Self::Sample => 1,
        }
    }
}

/// Arithmetic mean
pub fn mean(data: &[f64]) -> Result<f64> {
    check_sample(data, 1)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sum of squared deviations from the mean, shifted by the first value
///
/// Exactly zero when every value is equal.
fn sum_of_squares(data: &[f64]) -> f64 {
    let shift = data[0];
    let (s1, s2) = data.iter().fold((0.0, 0.0), |(s1, s2), &x| {
        let d = x - shift;
        (s1 + d, s2 + d * d)
    });
    (s2 - s1 * s1 / data.len() as f64).max(0.0)
}

/// Variance with the stated divisor; requires `N >= 2`
pub fn variance(data: &[f64], ddof: Ddof) -> Result<f64> {
    check_sample(data, 2)?;
    Ok(sum_of_squares(data) / (data.len() - ddof.value()) as f64)
}

/// Square root of [`variance`]
pub fn std_dev(data: &[f64], ddof: Ddof) -> Result<f64> {
    variance(data, ddof).map(f64::sqrt)
}

/// Standard deviation divided by the mean
pub fn coefficient_of_variation(data: &[f64], ddof: Ddof) -> Result<f64> {
    let m = mean(data)?;
    if m == 0.0 {
        return Err(Error::DivisionByZero(
            "coefficient of variation of a zero-mean sample".to_string(),
        ));
    }
    Ok(std_dev(data, ddof)? / m)
}

/// Third standardized moment `m3 / m2^(3/2)` with population moments
///
/// Fails with `DegenerateInput` when every value is equal.
pub fn skewness(data: &[f64]) -> Result<f64> {
    check_sample(data, 2)?;
    let n = data.len() as f64;
    let m = mean(data)?;
    let m2 = sum_of_squares(data) / n;
    if m2 == 0.0 {
        return Err(Error::DegenerateInput(
            "skewness of a constant sample".to_string(),
        ));
    }
    let m3 = data.iter().map(|&x| (x - m).powi(3)).sum::<f64>() / n;
    Ok(m3 / m2.powf(1.5))
}

/// Adjusted skewness coefficient `n / ((n-1)(n-2)) * sum((x - mean)^3) / s^3`
///
/// `s` is the sample standard deviation. Requires `N >= 3`.
pub fn adjusted_skewness(data: &[f64]) -> Result<f64> {
    check_sample(data, 3)?;
    let n = data.len() as f64;
    let m = mean(data)?;
    let s = std_dev(data, Ddof::Sample)?;
    if s == 0.0 {
        return Err(Error::DegenerateInput(
            "skewness of a constant sample".to_string(),
        ));
    }
    let cubes: f64 = data.iter().map(|&x| (x - m).powi(3)).sum();
    Ok(n / ((n - 1.0) * (n - 2.0)) * cubes / s.powi(3))
}
