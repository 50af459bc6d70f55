//! Mean value of each calendar month across all years

use crate::series::DatedSeries;
use chrono::Datelike;
use hydro_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Long-term mean per calendar month, `None` for months without data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRegime {
    means: [Option<f64>; 12],
}

impl MonthlyRegime {
    pub fn from_series(series: &DatedSeries) -> Self {
        let mut sums = [0.0; 12];
        let mut counts = [0usize; 12];
        for obs in series.observations() {
            let i = obs.date.month0() as usize;
            sums[i] += obs.value;
            counts[i] += 1;
        }
        let mut means = [None; 12];
        for (i, mean) in means.iter_mut().enumerate() {
            if counts[i] > 0 {
                *mean = Some(sums[i] / counts[i] as f64);
            }
        }
        Self { means }
    }

    /// Mean for `month` in 1..=12
    pub fn mean(&self, month: u32) -> Result<Option<f64>> {
        check_month(month)?;
        Ok(self.means[(month - 1) as usize])
    }

    /// `(month, mean)` pairs January to December
    pub fn means(&self) -> Vec<(u32, Option<f64>)> {
        (1..=12).zip(self.means).collect()
    }

    /// `(month, mean)` pairs for twelve months beginning at `first_month`
    pub fn starting_at(&self, first_month: u32) -> Result<Vec<(u32, Option<f64>)>> {
        check_month(first_month)?;
        let mut pairs = self.means();
        pairs.rotate_left((first_month - 1) as usize);
        Ok(pairs)
    }

    /// Month with the highest mean
    pub fn wettest_month(&self) -> Option<u32> {
        self.extreme_month(|a, b| a > b)
    }

    /// Month with the lowest mean
    pub fn driest_month(&self) -> Option<u32> {
        self.extreme_month(|a, b| a < b)
    }

    fn extreme_month(&self, better: impl Fn(f64, f64) -> bool) -> Option<u32> {
        let mut best: Option<(u32, f64)> = None;
        for (month, mean) in self.means() {
            if let Some(m) = mean {
                if best.map_or(true, |(_, b)| better(m, b)) {
                    best = Some((month, m));
                }
            }
        }
        best.map(|(month, _)| month)
    }
}

fn check_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "month must be in 1..=12, got {month}"
        )))
    }
}
