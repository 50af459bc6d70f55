//! Prediction intervals around a fitted line

use crate::ols::{fit_ols, LinearFit};
use hydro_core::math::distributions;
use hydro_core::validate::{check_open_probability, check_sample};
use hydro_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Fitted value with lower and upper prediction bounds at one `x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub x: f64,
    pub fitted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Line fit plus per-observation prediction interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionBand {
    pub fit: LinearFit,
    pub confidence_level: f64,
    /// Residual standard error `sqrt(SSE / (N − 2))`
    pub residual_std_error: f64,
    pub points: Vec<PredictionPoint>,
    mean_x: f64,
    sxx: f64,
    n: usize,
    t_critical: f64,
}

impl PredictionBand {
    /// Half-width of the interval for a new observation at `x`
    pub fn margin_at(&self, x: f64) -> f64 {
        let n = self.n as f64;
        let leverage = 1.0 / n + (x - self.mean_x).powi(2) / self.sxx;
        self.t_critical * self.residual_std_error * (1.0 + leverage).sqrt()
    }

    /// Prediction interval for a new observation at `x`
    pub fn at(&self, x: f64) -> PredictionPoint {
        let fitted = self.fit.predict(x);
        let margin = self.margin_at(x);
        PredictionPoint {
            x,
            fitted,
            lower: fitted - margin,
            upper: fitted + margin,
        }
    }
}

/// Fit a line and bound each observation with a two-sided prediction interval
///
/// Uses the Student-t critical value with `N − 2` degrees of freedom, so at
/// least three pairs are required.
#[instrument(skip(xs, ys), fields(n = xs.len()))]
pub fn prediction_band(xs: &[f64], ys: &[f64], confidence_level: f64) -> Result<PredictionBand> {
    check_open_probability(confidence_level, "confidence level")?;
    check_sample(xs, 3)?;
    let fit = fit_ols(xs, ys)?;

    let n = xs.len();
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let sxx: f64 = xs.iter().map(|&x| (x - mean_x).powi(2)).sum();
    let sse: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (y - fit.predict(x)).powi(2))
        .sum();
    let residual_std_error = (sse / (n - 2) as f64).sqrt();

    let t = distributions::students_t((n - 2) as f64)?;
    let t_critical = distributions::upper_critical(&t, (1.0 - confidence_level) / 2.0);
    debug!(residual_std_error, t_critical, "prediction band");

    let mut band = PredictionBand {
        fit,
        confidence_level,
        residual_std_error,
        points: Vec::with_capacity(n),
        mean_x,
        sxx,
        n,
        t_critical,
    };
    band.points = xs.iter().map(|&x| band.at(x)).collect();
    Ok(band)
}
