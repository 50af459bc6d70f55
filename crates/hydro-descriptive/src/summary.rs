//! Tabular summary of a sample

use crate::location::{max, min};
use crate::moments::{coefficient_of_variation, mean, skewness, std_dev, Ddof};
use hydro_core::Result;
use hydro_quantile::{quantile_sorted, sorted_copy, SortOrder};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Count, moments and five-number summary of a sample
///
/// `std_dev` uses the sample divisor `N - 1`. Ratios that are undefined for
/// the sample (zero mean, zero spread) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub coefficient_of_variation: Option<f64>,
    pub skewness: Option<f64>,
}

impl Summary {
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn interquartile_range(&self) -> f64 {
        self.q3 - self.q1
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count  {}", self.count)?;
        writeln!(f, "mean   {:.4}", self.mean)?;
        writeln!(f, "std    {:.4}", self.std_dev)?;
        writeln!(f, "min    {:.4}", self.min)?;
        writeln!(f, "25%    {:.4}", self.q1)?;
        writeln!(f, "50%    {:.4}", self.median)?;
        writeln!(f, "75%    {:.4}", self.q3)?;
        write!(f, "max    {:.4}", self.max)
    }
}

/// Summarise a sample of at least two values
#[instrument(skip(data), fields(n = data.len()))]
pub fn describe(data: &[f64]) -> Result<Summary> {
    let sd = std_dev(data, Ddof::Sample)?;
    let sorted = sorted_copy(data, SortOrder::Ascending)?;
    let summary = Summary {
        count: data.len(),
        mean: mean(data)?,
        std_dev: sd,
        min: min(&sorted)?,
        q1: quantile_sorted(&sorted, 0.25)?,
        median: quantile_sorted(&sorted, 0.5)?,
        q3: quantile_sorted(&sorted, 0.75)?,
        max: max(&sorted)?,
        coefficient_of_variation: coefficient_of_variation(data, Ddof::Sample).ok(),
        skewness: skewness(data).ok(),
    };
    debug!(mean = summary.mean, std_dev = summary.std_dev, "described sample");
    Ok(summary)
}

/// Summarise several independent samples, keeping input order
///
/// With the `parallel` feature the samples are processed on the rayon pool;
/// results are identical to the sequential path.
pub fn describe_many<S>(samples: &[S]) -> Vec<Result<Summary>>
where
    S: AsRef<[f64]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        samples.par_iter().map(|s| describe(s.as_ref())).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        samples.iter().map(|s| describe(s.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hydro_core::Error;

    #[test]
    fn test_describe() {
        let summary = describe(&[7.0, 4.0, 2.0, 5.0, 7.0]).unwrap();
        assert_eq!(summary.count, 5);
        assert_eq!(summary.mean, 5.0);
        assert_relative_eq!(summary.std_dev, 4.5f64.sqrt());
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.q1, 4.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.q3, 7.0);
        assert_eq!(summary.max, 7.0);
        assert_eq!(summary.range(), 5.0);
        assert!(summary.skewness.unwrap() < 0.0);
    }

    #[test]
    fn test_describe_constant_sample() {
        let summary = describe(&[3.0, 3.0, 3.0]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.skewness, None);
        assert_eq!(summary.coefficient_of_variation, Some(0.0));
    }

    #[test]
    fn test_describe_many_keeps_order() {
        let samples = vec![vec![1.0, 2.0, 3.0], vec![1.0], vec![10.0, 20.0]];
        let results = describe_many(&samples);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().mean, 2.0);
        assert!(matches!(results[1], Err(Error::InsufficientData { .. })));
        assert_eq!(results[2].as_ref().unwrap().mean, 15.0);
    }

    #[test]
    fn test_display() {
        let text = describe(&[1.0, 2.0]).unwrap().to_string();
        assert!(text.starts_with("count  2"));
        assert!(text.contains("mean   1.5000"));
    }
}
