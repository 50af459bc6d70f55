//! Confidence intervals for the mean
//!
//! [`confidence_interval_for_mean`] uses the Normal critical value when the
//! population standard deviation is known and the Student-t critical value
//! with `N − 1` degrees of freedom otherwise.
//!
//! # Example
//!
//! ```rust
//! use hydro_confidence::{confidence_interval_for_mean, ConfidenceLevel};
//!
//! let sample = [7.0, 4.0, 2.0, 5.0, 7.0];
//! let ci = confidence_interval_for_mean(&sample, ConfidenceLevel::NINETY, None).unwrap();
//! assert!(ci.contains(5.0));
//! assert!((ci.lower - 2.98).abs() < 0.01);
//! assert!((ci.upper - 7.02).abs() < 0.01);
//! ```

pub mod mean;
pub mod types;

pub use mean::{confidence_interval_for_mean, required_sample_size};
pub use types::{ConfidenceInterval, ConfidenceLevel};

pub use hydro_core::{Error, Result};
