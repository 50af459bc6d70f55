//! Core traits for frequency-table building

use crate::types::FrequencyTable;
use hydro_core::Result;

/// Trait for tabulating a sample into a frequency table
pub trait TableBuilder {
    /// Build a table from the given sample
    fn build(&self, sample: &[f64]) -> Result<FrequencyTable>;

    /// Build a table from pre-sorted data
    ///
    /// Default implementation just calls build().
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<FrequencyTable> {
        self.build(sorted_sample)
    }

    /// Get the target number of rows (if known in advance)
    fn target_rows(&self) -> Option<usize> {
        None
    }
}
