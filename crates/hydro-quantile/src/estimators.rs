//! Median, quartiles, percentiles and the box-plot summary
//!
//! All estimators use linear interpolation between order statistics: for a
//! probability `q` over `n` sorted values the target position is
//! `h = (n - 1) q` and the estimate is `x[⌊h⌋] + (h - ⌊h⌋)(x[⌊h⌋+1] - x[⌊h⌋])`.
//! This is the common "type 7" rule; it returns the sample minimum at `q = 0`
//! and the maximum at `q = 1`.

use crate::sorting::{sort_in_place, SortOrder};
use hydro_core::{validate::check_sample, Error, Result};
use serde::{Deserialize, Serialize};

/// Quantile of already sorted (ascending, finite) data
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::empty_input());
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidParameter(format!(
            "quantile {q} must be in [0, 1]"
        )));
    }
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Quantile for probability `q ∈ [0, 1]`
pub fn quantile(data: &[f64], q: f64) -> Result<f64> {
    check_sample(data, 1)?;
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted, SortOrder::Ascending);
    quantile_sorted(&sorted, q)
}

/// Percentile for `p ∈ [0, 100]`
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "percentile {p} must be in [0, 100]"
        )));
    }
    quantile(data, p / 100.0)
}

/// Sample median
///
/// # Examples
///
/// ```rust
/// use hydro_quantile::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0, 10.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    quantile(data, 0.5)
}

/// First, second or third quartile (`which ∈ {1, 2, 3}`)
pub fn quartile(data: &[f64], which: u8) -> Result<f64> {
    let q = match which {
        1 => 0.25,
        2 => 0.5,
        3 => 0.75,
        other => {
            return Err(Error::InvalidParameter(format!(
                "quartile index {other} must be 1, 2 or 3"
            )))
        }
    };
    quantile(data, q)
}

/// Interquartile range Q3 - Q1
pub fn interquartile_range(data: &[f64]) -> Result<f64> {
    check_sample(data, 1)?;
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted, SortOrder::Ascending);
    Ok(quantile_sorted(&sorted, 0.75)? - quantile_sorted(&sorted, 0.25)?)
}

/// Five-number summary plus mean, as drawn by a box plot with whiskers at the
/// sample extremes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub mean: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxSummary {
    pub fn new(data: &[f64]) -> Result<Self> {
        check_sample(data, 1)?;
        let mut sorted = data.to_vec();
        sort_in_place(&mut sorted, SortOrder::Ascending);
        Ok(Self {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
            q3: quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
