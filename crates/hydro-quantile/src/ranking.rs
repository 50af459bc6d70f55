//! Ranking and empirical plotting positions
//!
//! Extreme-value analysis ranks the annual series with rank 1 at the extreme
//! end (largest flood, smallest low flow) and assigns each observation the
//! Weibull plotting position `p = rank / (N + 1)` and return period `TR = 1/p`.

use crate::sorting::{argsort, SortOrder};
use hydro_core::{validate::check_sample, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which end of the sample receives rank 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RankDirection {
    /// Rank 1 = largest value (flood / maxima analysis)
    #[default]
    LargestFirst,
    /// Rank 1 = smallest value (low-flow / minima analysis)
    SmallestFirst,
}

impl RankDirection {
    fn sort_order(self) -> SortOrder {
        match self {
            Self::LargestFirst => SortOrder::Descending,
            Self::SmallestFirst => SortOrder::Ascending,
        }
    }
}

/// How tied values share ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TieMethod {
    /// Mean of the positions the tied group occupies (may be fractional)
    #[default]
    Average,
    /// Lowest position of the group
    Min,
    /// Highest position of the group
    Max,
    /// Positions in order of appearance
    First,
}

/// Rank every observation; the result is parallel to `data`
///
/// # Examples
///
/// ```rust
/// use hydro_quantile::{rank, RankDirection, TieMethod};
///
/// let ranks = rank(&[10.0, 30.0, 20.0, 30.0], RankDirection::LargestFirst, TieMethod::Average).unwrap();
/// assert_eq!(ranks, vec![4.0, 1.5, 3.0, 1.5]);
/// ```
pub fn rank(data: &[f64], direction: RankDirection, ties: TieMethod) -> Result<Vec<f64>> {
    check_sample(data, 1)?;
    let order = argsort(data, direction.sort_order());
    let mut ranks = vec![0.0; data.len()];

    let mut start = 0;
    while start < order.len() {
        let value = data[order[start]];
        let mut end = start + 1;
        while end < order.len() && data[order[end]] == value {
            end += 1;
        }
        // Positions start..end (0-based) hold one tied group
        let first = (start + 1) as f64;
        let last = end as f64;
        for (offset, &idx) in order[start..end].iter().enumerate() {
            ranks[idx] = match ties {
                TieMethod::Average => (first + last) / 2.0,
                TieMethod::Min => first,
                TieMethod::Max => last,
                TieMethod::First => first + offset as f64,
            };
        }
        start = end;
    }
    Ok(ranks)
}

/// Weibull plotting position `rank / (n + 1)`
pub fn plotting_position(rank: f64, n: usize) -> Result<f64> {
    if n == 0 {
        return Err(Error::empty_input());
    }
    if !(rank >= 1.0 && rank <= n as f64) {
        return Err(Error::InvalidParameter(format!(
            "rank {rank} must lie in [1, {n}]"
        )));
    }
    Ok(rank / (n as f64 + 1.0))
}

/// Return period `1 / p` for an exceedance (or non-exceedance) probability
///
/// # Examples
///
/// ```rust
/// use hydro_quantile::return_period;
///
/// assert_eq!(return_period(0.01).unwrap(), 100.0);
/// assert!(return_period(0.0).is_err());
/// ```
pub fn return_period(probability: f64) -> Result<f64> {
    if probability == 0.0 {
        return Err(Error::DivisionByZero(
            "return period of an event with probability 0".to_string(),
        ));
    }
    if !(probability > 0.0 && probability <= 1.0) {
        return Err(Error::DomainError {
            value: probability,
            context: "probability",
        });
    }
    Ok(1.0 / probability)
}

/// One ranked observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedObservation {
    /// Position in the original sample
    pub index: usize,
    pub value: f64,
    pub rank: f64,
    /// Weibull plotting position
    pub probability: f64,
    pub return_period: f64,
}

/// A sample ordered by rank, with plotting positions and return periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSeries {
    direction: RankDirection,
    observations: Vec<RankedObservation>,
}

impl RankedSeries {
    /// Rank `data` and attach Weibull positions; entries are ordered by rank
    pub fn new(data: &[f64], direction: RankDirection, ties: TieMethod) -> Result<Self> {
        let ranks = rank(data, direction, ties)?;
        let n = data.len();
        let mut observations = Vec::with_capacity(n);
        for (index, (&value, &r)) in data.iter().zip(&ranks).enumerate() {
            let probability = plotting_position(r, n)?;
            observations.push(RankedObservation {
                index,
                value,
                rank: r,
                probability,
                return_period: return_period(probability)?,
            });
        }
        observations.sort_by(|a, b| a.rank.total_cmp(&b.rank).then(a.index.cmp(&b.index)));
        debug!(
            n,
            ?direction,
            max_return_period = observations.first().map(|o| o.return_period),
            "ranked series built"
        );
        Ok(Self {
            direction,
            observations,
        })
    }

    pub fn direction(&self) -> RankDirection {
        self.direction
    }

    pub fn observations(&self) -> &[RankedObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Empirical exceedance probabilities in rank order
    pub fn exceedance_probabilities(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.probability).collect()
    }

    /// Empirical return periods in rank order
    pub fn return_periods(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.return_period).collect()
    }

    /// Values in rank order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }
}

/// Empirical exceedance probability of every entry of a ranked series
pub fn empirical_exceedance_probability(series: &RankedSeries) -> Vec<f64> {
    series.exceedance_probabilities()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rank_tie_methods() {
        let data = [5.0, 7.0, 7.0, 1.0];
        let dir = RankDirection::LargestFirst;
        assert_eq!(rank(&data, dir, TieMethod::Average).unwrap(), vec![3.0, 1.5, 1.5, 4.0]);
        assert_eq!(rank(&data, dir, TieMethod::Min).unwrap(), vec![3.0, 1.0, 1.0, 4.0]);
        assert_eq!(rank(&data, dir, TieMethod::Max).unwrap(), vec![3.0, 2.0, 2.0, 4.0]);
        assert_eq!(rank(&data, dir, TieMethod::First).unwrap(), vec![3.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_rank_smallest_first() {
        let data = [5.0, 7.0, 1.0];
        assert_eq!(
            rank(&data, RankDirection::SmallestFirst, TieMethod::Average).unwrap(),
            vec![2.0, 3.0, 1.0]
        );
    }

    #[test]
    fn test_plotting_position_bounds() {
        assert_relative_eq!(plotting_position(1.0, 9).unwrap(), 0.1);
        assert!(plotting_position(0.0, 9).is_err());
        assert!(plotting_position(10.0, 9).is_err());
        assert!(plotting_position(1.0, 0).is_err());
    }

    #[test]
    fn test_return_period() {
        assert_relative_eq!(return_period(0.5).unwrap(), 2.0);
        assert_relative_eq!(return_period(1.0).unwrap(), 1.0);
        assert!(matches!(return_period(0.0), Err(Error::DivisionByZero(_))));
        assert!(matches!(return_period(1.5), Err(Error::DomainError { .. })));
        assert!(matches!(return_period(f64::NAN), Err(Error::DomainError { .. })));
    }

    #[test]
    fn test_ranked_series_flood() {
        let annual_max = [1200.0, 2400.0, 800.0, 1500.0];
        let series =
            RankedSeries::new(&annual_max, RankDirection::LargestFirst, TieMethod::Average).unwrap();

        assert_eq!(series.values(), vec![2400.0, 1500.0, 1200.0, 800.0]);
        let first = series.observations()[0];
        assert_eq!(first.index, 1);
        assert_relative_eq!(first.probability, 0.2);
        assert_relative_eq!(first.return_period, 5.0);

        let probs = empirical_exceedance_probability(&series);
        assert_relative_eq!(probs[3], 0.8);
    }

    #[test]
    fn test_ranked_series_low_flow() {
        let annual_min = [30.0, 12.0, 18.0];
        let series =
            RankedSeries::new(&annual_min, RankDirection::SmallestFirst, TieMethod::Average).unwrap();
        assert_eq!(series.values(), vec![12.0, 18.0, 30.0]);
        assert_relative_eq!(series.return_periods()[0], 4.0);
    }
}
