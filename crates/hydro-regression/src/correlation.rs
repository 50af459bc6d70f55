//! Pearson product-moment correlation

use hydro_core::validate::{check_paired, check_sample};
use hydro_core::{Error, Result};

/// Pearson correlation coefficient of paired samples, in [-1, 1]
///
/// An exact linear relationship gives ±1 only to within floating-point
/// rounding; expect a few ulps of error, e.g. `0.9999999999999998`.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Result<f64> {
    check_paired(xs, ys)?;
    check_sample(xs, 2)?;
    check_sample(ys, 2)?;
    if is_constant(xs) || is_constant(ys) {
        return Err(Error::DegenerateInput(
            "cannot compute correlation: zero variance".to_string(),
        ));
    }

    let n = xs.len() as f64;

    // Calculate means
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    // Calculate correlation components
    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(Error::DegenerateInput(
            "cannot compute correlation: variance underflow".to_string(),
        ));
    }

    Ok((numerator / denominator).clamp(-1.0, 1.0))
}

pub(crate) fn is_constant(data: &[f64]) -> bool {
    data.iter().all(|&v| v == data[0])
}
