//! Least-squares straight line `y = intercept + slope * x`

use crate::correlation::is_constant;
use hydro_core::validate::{check_finite_scalar, check_paired, check_sample};
use hydro_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Slope and intercept of a fitted line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Fitted value at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.4} + {:.4} * x", self.intercept, self.slope)
    }
}

/// Centred sums `Σ(x − x̄)²` and `Σ(x − x̄)(y − ȳ)` with the means
#[derive(Debug, Clone, Copy)]
struct CentredSums {
    mean_x: f64,
    mean_y: f64,
    sxx: f64,
    sxy: f64,
}

impl CentredSums {
    fn new(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len() as f64;
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;
        let (sxx, sxy) = xs.iter().zip(ys).fold((0.0, 0.0), |(sxx, sxy), (&x, &y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });
        Self {
            mean_x,
            mean_y,
            sxx,
            sxy,
        }
    }
}

/// Fit a straight line by solving the normal equations
///
/// The solution `slope = (NΣxy − ΣxΣy) / (NΣx² − (Σx)²)`,
/// `intercept = ȳ − slope · x̄` is evaluated on centred sums,
/// `slope = Σ(x − x̄)(y − ȳ) / Σ(x − x̄)²`, so large offsets in `x` such as
/// timestamps do not cancel. Fails with `DegenerateInput` when every `x` is
/// identical.
pub fn fit_ols(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    check_paired(xs, ys)?;
    check_sample(xs, 2)?;
    check_sample(ys, 2)?;
    if is_constant(xs) {
        return Err(Error::DegenerateInput(
            "all x values are identical".to_string(),
        ));
    }
    let s = CentredSums::new(xs, ys);
    if s.sxx == 0.0 || !s.sxx.is_finite() {
        return Err(Error::DegenerateInput(
            "spread of x underflows or overflows".to_string(),
        ));
    }
    let slope = s.sxy / s.sxx;
    let intercept = s.mean_y - slope * s.mean_x;
    debug!(slope, intercept, n = xs.len(), "fitted least-squares line");
    Ok(LinearFit { slope, intercept })
}

/// Fitted value at `x`
pub fn predict(x: f64, fit: &LinearFit) -> Result<f64> {
    check_finite_scalar(x)?;
    Ok(fit.predict(x))
}

/// Observed minus fitted value for each pair
pub fn residuals(xs: &[f64], ys: &[f64], fit: &LinearFit) -> Result<Vec<f64>> {
    check_paired(xs, ys)?;
    check_sample(xs, 1)?;
    check_sample(ys, 1)?;
    Ok(xs.iter().zip(ys).map(|(&x, &y)| y - fit.predict(x)).collect())
}

/// Coefficient of determination `1 − SSE / SST`
pub fn r_squared(xs: &[f64], ys: &[f64], fit: &LinearFit) -> Result<f64> {
    let res = residuals(xs, ys, fit)?;
    check_sample(ys, 2)?;
    if is_constant(ys) {
        return Err(Error::DegenerateInput(
            "r-squared undefined when all y values are identical".to_string(),
        ));
    }
    let mean_y = ys.iter().sum::<f64>() / ys.len() as f64;
    let sst: f64 = ys.iter().map(|&y| (y - mean_y) * (y - mean_y)).sum();
    let sse: f64 = res.iter().map(|r| r * r).sum();
    Ok(1.0 - sse / sst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let fit = fit_ols(&xs, &ys).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r_squared(&xs, &ys, &fit).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(predict(10.0, &fit).unwrap(), 21.0, epsilon = 1e-10);
    }

    #[test]
    fn test_residuals_sum_to_zero() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.1, 3.9, 6.2, 7.8, 10.1];
        let fit = fit_ols(&xs, &ys).unwrap();
        let res = residuals(&xs, &ys, &fit).unwrap();
        assert_relative_eq!(res.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
        assert!(r_squared(&xs, &ys, &fit).unwrap() > 0.99);
    }

    #[test]
    fn test_offset_x_does_not_cancel() {
        let base = 1e9;
        let xs = [base, base + 1.0, base + 2.0, base + 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let fit = fit_ols(&xs, &ys).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-9);
        assert_relative_eq!(fit.predict(base + 4.0), 9.0, epsilon = 1e-4);
    }

    #[test]
    fn test_vertical_data_is_degenerate() {
        assert!(matches!(
            fit_ols(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_flat_response() {
        let fit = fit_ols(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap();
        assert_relative_eq!(fit.slope, 0.0, epsilon = 1e-12);
        assert!(r_squared(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0], &fit).is_err());
    }

    #[test]
    fn test_display() {
        let fit = LinearFit::new(0.5, -1.25);
        assert_eq!(fit.to_string(), "y = -1.2500 + 0.5000 * x");
    }
}
