//! Tabulation strategies: one row per distinct value, or counts per bin

use crate::ops::{edges_from_range, suggested_bin_count};
use crate::traits::TableBuilder;
use crate::types::{Bin, FrequencyEntry, FrequencyKey, FrequencyTable};
use hydro_core::validate::{check_finite, check_sample};
use hydro_core::{Error, Result};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use tracing::debug;

/// One row per distinct value
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteBuilder;

impl TableBuilder for DiscreteBuilder {
    fn build(&self, sample: &[f64]) -> Result<FrequencyTable> {
        check_sample(sample, 1)?;
        let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
        for &value in sample {
            *counts.entry(OrderedFloat(value)).or_insert(0) += 1;
        }
        let entries = counts
            .into_iter()
            .map(|(value, count)| FrequencyEntry {
                key: FrequencyKey::Value(value.into_inner()),
                count,
            })
            .collect::<Vec<_>>();
        debug!(n = sample.len(), distinct = entries.len(), "tabulated discrete values");
        FrequencyTable::from_sorted_entries(entries, 0)
    }
}

/// Counts per bin for explicit, strictly increasing edges
///
/// `k + 1` edges define `k` bins `[e_i, e_{i+1})`, the last one closed.
/// Values outside `[e_0, e_k]` are excluded from the counts and reported
/// through [`FrequencyTable::excluded`].
#[derive(Debug, Clone)]
pub struct EdgesBuilder {
    edges: Vec<f64>,
}

impl EdgesBuilder {
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "at least two bin edges are required, got {}",
                edges.len()
            )));
        }
        check_finite(&edges)?;
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidParameter(
                "bin edges must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    fn bins(&self) -> Vec<Bin> {
        let last = self.edges.len() - 2;
        self.edges
            .windows(2)
            .enumerate()
            .map(|(i, w)| Bin {
                left: w[0],
                right: w[1],
                closed_right: i == last,
            })
            .collect()
    }

    /// Bin index for a value, `None` if outside the edges
    fn locate(&self, value: f64) -> Option<usize> {
        let k = self.edges.len() - 1;
        // Number of edges <= value
        let idx = self.edges.partition_point(|&e| e <= value);
        match idx {
            0 => None,
            i if i <= k => Some(i - 1),
            _ if value == self.edges[k] => Some(k - 1),
            _ => None,
        }
    }
}

impl TableBuilder for EdgesBuilder {
    fn build(&self, sample: &[f64]) -> Result<FrequencyTable> {
        check_sample(sample, 1)?;
        let mut counts = vec![0usize; self.edges.len() - 1];
        let mut excluded = 0;
        for &value in sample {
            match self.locate(value) {
                Some(i) => counts[i] += 1,
                None => excluded += 1,
            }
        }
        if excluded > 0 {
            debug!(excluded, "values outside bin edges were not counted");
        }
        let entries = self
            .bins()
            .into_iter()
            .zip(counts)
            .map(|(bin, count)| FrequencyEntry {
                key: FrequencyKey::Bin(bin),
                count,
            })
            .collect();
        FrequencyTable::from_sorted_entries(entries, excluded)
    }

    fn target_rows(&self) -> Option<usize> {
        Some(self.edges.len() - 1)
    }
}

/// Equal-width bins spanning the sample range
///
/// Without an explicit count the bin number follows
/// [`suggested_bin_count`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualWidthBuilder {
    num_bins: Option<usize>,
}

impl EqualWidthBuilder {
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: Some(num_bins.max(1)),
        }
    }

    /// Bin count chosen from the sample size
    pub fn suggested() -> Self {
        Self { num_bins: None }
    }
}

impl TableBuilder for EqualWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<FrequencyTable> {
        check_sample(sample, 1)?;
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<FrequencyTable> {
        check_sample(sorted_sample, 1)?;
        // O(1) min/max from sorted data
        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];
        let k = match self.num_bins {
            Some(k) => k,
            None => suggested_bin_count(sorted_sample.len())?,
        };
        let edges = if max > min {
            edges_from_range(min, max, k)?
        } else {
            // All values are the same
            vec![min, min + 1.0]
        };
        EdgesBuilder::new(edges)?.build(sorted_sample)
    }

    fn target_rows(&self) -> Option<usize> {
        self.num_bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_counts() {
        let table = DiscreteBuilder.build(&[3.0, 1.0, 3.0, 2.0, 3.0]).unwrap();
        assert_eq!(table.keys(), vec![
            FrequencyKey::Value(1.0),
            FrequencyKey::Value(2.0),
            FrequencyKey::Value(3.0),
        ]);
        assert_eq!(table.counts(), vec![1, 1, 3]);
    }

    #[test]
    fn test_discrete_rejects_bad_input() {
        assert!(DiscreteBuilder.build(&[]).is_err());
        assert!(DiscreteBuilder.build(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_edges_boundaries() {
        let builder = EdgesBuilder::new(vec![0.0, 10.0, 20.0]).unwrap();
        let table = builder.build(&[0.0, 9.99, 10.0, 20.0, -1.0, 20.5]).unwrap();
        // 10 goes to the upper bin; 20 is kept by the closed last bin
        assert_eq!(table.counts(), vec![2, 2]);
        assert_eq!(table.excluded(), 2);
        assert_eq!(table.total(), 4);
        assert_eq!(table.find_bin(15.0), Some(1));
        assert_eq!(table.find_bin(25.0), None);
    }

    #[test]
    fn test_edges_validation() {
        assert!(EdgesBuilder::new(vec![1.0]).is_err());
        assert!(EdgesBuilder::new(vec![0.0, 1.0, 1.0]).is_err());
        assert!(EdgesBuilder::new(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_all_values_outside_edges() {
        let builder = EdgesBuilder::new(vec![0.0, 1.0]).unwrap();
        assert!(matches!(
            builder.build(&[5.0, 6.0]),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_equal_width() {
        let data: Vec<f64> = (0..=10).map(f64::from).collect();
        let table = EqualWidthBuilder::new(5).build(&data).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 11);
        assert_eq!(table.counts(), vec![2, 2, 2, 2, 3]);
    }

    #[test]
    fn test_equal_width_constant_sample() {
        let table = EqualWidthBuilder::suggested().build(&[4.0; 9]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.counts(), vec![9]);
    }
}
