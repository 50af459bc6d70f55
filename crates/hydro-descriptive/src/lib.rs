//! Descriptive statistics for hydrological samples
//!
//! Point summaries of a single sample: mean, variance and standard deviation
//! with an explicit [`Ddof`], coefficient of variation, skewness, extremes,
//! the mode of raw or tabulated data, and a [`Summary`] report.
//!
//! # Example
//!
//! ```rust
//! use hydro_descriptive::{describe, mean, variance, Ddof};
//!
//! let sample = [7.0, 4.0, 2.0, 5.0, 7.0];
//! assert_eq!(mean(&sample).unwrap(), 5.0);
//! assert_eq!(variance(&sample, Ddof::Sample).unwrap(), 4.5);
//! assert_eq!(variance(&sample, Ddof::Population).unwrap(), 3.6);
//!
//! let summary = describe(&sample).unwrap();
//! assert_eq!(summary.median, 5.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: [`describe_many`] runs on the rayon thread pool.

pub mod location;
pub mod moments;
pub mod summary;

pub use location::{max, min, mode, modes, range, table_mode};
pub use moments::{
    adjusted_skewness, coefficient_of_variation, mean, skewness, std_dev, variance, Ddof,
};
pub use summary::{describe, describe_many, Summary};

pub use hydro_core::{Error, Result};
pub use hydro_frequency::ModeTieBreak;
