//! Sorted copies of samples

use hydro_core::{validate::check_sample, Result};
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Return a sorted copy of `data`, leaving the input untouched
///
/// # Examples
///
/// ```rust
/// use hydro_quantile::{sorted_copy, SortOrder};
///
/// let data = [3.0, 1.0, 2.0];
/// assert_eq!(sorted_copy(&data, SortOrder::Descending).unwrap(), vec![3.0, 2.0, 1.0]);
/// ```
pub fn sorted_copy(data: &[f64], order: SortOrder) -> Result<Vec<f64>> {
    check_sample(data, 1)?;
    let mut sorted = data.to_vec();
    sort_in_place(&mut sorted, order);
    Ok(sorted)
}

/// Sort finite values in place; callers validate first
pub(crate) fn sort_in_place(values: &mut [f64], order: SortOrder) {
    match order {
        SortOrder::Ascending => values.sort_by(f64::total_cmp),
        SortOrder::Descending => values.sort_by(|a, b| b.total_cmp(a)),
    }
}

/// Indices of `data` in sorted order; stable, so equal values keep input order
pub(crate) fn argsort(data: &[f64], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    match order {
        SortOrder::Ascending => indices.sort_by(|&a, &b| data[a].total_cmp(&data[b])),
        SortOrder::Descending => indices.sort_by(|&a, &b| data[b].total_cmp(&data[a])),
    }
    indices
}
