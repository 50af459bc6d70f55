//! Order statistics for hydrological samples
//!
//! This crate provides the order-based tools of exploratory analysis:
//!
//! - **Sorting** into ascending or descending copies
//! - **Ranking** with a selectable tie rule and direction (rank 1 = largest
//!   for flood analysis, smallest for low-flow analysis)
//! - **Plotting positions** (Weibull `rank / (N + 1)`) and return periods
//! - **Quantiles**: median, quartiles and percentiles by linear interpolation
//! - **Flow-duration curves** and box-plot summaries
//!
//! # Example
//!
//! ```rust
//! use hydro_quantile::{median, quartile, RankedSeries, RankDirection, TieMethod};
//!
//! let trial = [48.0, 35.0, 37.0, 52.0, 43.0, 29.0, 61.0, 33.0, 44.0, 55.0,
//!              69.0, 43.0, 22.0, 35.0, 38.0, 57.0, 53.0, 67.0, 62.0, 48.0];
//! assert_eq!(median(&trial).unwrap(), 46.0);
//! assert_eq!(quartile(&trial, 1).unwrap(), 36.5);
//!
//! let floods = [1200.0, 2400.0, 800.0];
//! let ranked = RankedSeries::new(&floods, RankDirection::LargestFirst, TieMethod::Average).unwrap();
//! assert_eq!(ranked.return_periods()[0], 4.0);
//! ```

pub mod duration;
pub mod estimators;
pub mod ranking;
pub mod sorting;

pub use duration::{DurationPoint, FlowDurationCurve};
pub use estimators::{
    interquartile_range, median, percentile, quantile, quantile_sorted, quartile, BoxSummary,
};
pub use ranking::{
    empirical_exceedance_probability, plotting_position, rank, return_period, RankDirection,
    RankedObservation, RankedSeries, TieMethod,
};
pub use sorting::{sorted_copy, SortOrder};

pub use hydro_core::{Error, Result};
