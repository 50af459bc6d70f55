//! Frequency tables for hydrological samples
//!
//! This crate tabulates samples into absolute frequency tables, keyed either
//! by distinct value or by bin, and derives relative and cumulative views.
//!
//! # Overview
//!
//! - Discrete tables come from [`absolute_frequency`]: one row per distinct
//!   value, ascending.
//! - Binned tables come from [`binned_frequency`] with explicit edges, or
//!   from an [`EqualWidthBuilder`]. Bins are `[left, right)` except the last,
//!   which also includes its right edge. Values outside the edges are not
//!   counted and are reported as excluded.
//! - Relative and cumulative frequencies are computed from the counts on
//!   demand; the cumulative relative frequency always ends at exactly 1.
//!
//! # Example
//!
//! ```rust
//! use hydro_frequency::{absolute_frequency, FrequencyKey, ModeTieBreak};
//!
//! let rain_days = [14.0, 12.0, 14.0, 13.0, 15.0, 14.0];
//! let table = absolute_frequency(&rain_days).unwrap();
//! assert_eq!(table.count_of(14.0), 3);
//! assert_eq!(table.mode(ModeTieBreak::Lowest), FrequencyKey::Value(14.0));
//! assert_eq!(table.cumulative_relative().last(), Some(&1.0));
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

pub use builders::{DiscreteBuilder, EdgesBuilder, EqualWidthBuilder};
pub use ops::{
    absolute_frequency, binned_frequency, cumulative_relative_frequency, edges_from_range,
    equal_width_edges, relative_frequency, suggested_bin_count,
};
pub use traits::TableBuilder;
pub use types::{Bin, FrequencyEntry, FrequencyKey, FrequencyTable, ModeTieBreak};

pub use hydro_core::{Error, Result};
