//! Tabulation entry points and bin-edge helpers

use crate::builders::{DiscreteBuilder, EdgesBuilder};
use crate::traits::TableBuilder;
use crate::types::{FrequencyKey, FrequencyTable};
use hydro_core::validate::check_finite_scalar;
use hydro_core::{Error, Result};

/// Suggested number of bins for a sample of size `n`: `round(sqrt(n))`
pub fn suggested_bin_count(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::empty_input());
    }
    Ok(((n as f64).sqrt().round() as usize).max(1))
}

/// `k + 1` edges starting at `start` with constant `width`
pub fn equal_width_edges(start: f64, width: f64, k: usize) -> Result<Vec<f64>> {
    check_finite_scalar(start)?;
    check_finite_scalar(width)?;
    if width <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "bin width must be positive, got {width}"
        )));
    }
    if k == 0 {
        return Err(Error::InvalidParameter("bin count must be at least 1".to_string()));
    }
    Ok((0..=k).map(|i| start + i as f64 * width).collect())
}

/// `k + 1` equally spaced edges from `min` to `max`, both included exactly
pub fn edges_from_range(min: f64, max: f64, k: usize) -> Result<Vec<f64>> {
    check_finite_scalar(min)?;
    check_finite_scalar(max)?;
    if max <= min {
        return Err(Error::InvalidParameter(format!(
            "range maximum {max} must exceed minimum {min}"
        )));
    }
    let mut edges = equal_width_edges(min, (max - min) / k.max(1) as f64, k)?;
    // Ensure last edge is exactly the maximum
    edges[k] = max;
    Ok(edges)
}

/// Count occurrences of each distinct value, ascending
pub fn absolute_frequency(data: &[f64]) -> Result<FrequencyTable> {
    DiscreteBuilder.build(data)
}

/// Count observations per bin for strictly increasing `edges`
pub fn binned_frequency(data: &[f64], edges: &[f64]) -> Result<FrequencyTable> {
    EdgesBuilder::new(edges.to_vec())?.build(data)
}

/// Keys paired with `count / total`
pub fn relative_frequency(table: &FrequencyTable) -> Vec<(FrequencyKey, f64)> {
    table.keys().into_iter().zip(table.relative()).collect()
}

/// Keys paired with the running relative frequency
pub fn cumulative_relative_frequency(table: &FrequencyTable) -> Vec<(FrequencyKey, f64)> {
    table
        .keys()
        .into_iter()
        .zip(table.cumulative_relative())
        .collect()
}
