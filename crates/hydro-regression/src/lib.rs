//! Correlation and simple linear regression for paired samples
//!
//! - [`pearson_correlation`] measures the strength of a linear relation.
//! - [`fit_ols`] solves the least-squares normal equations for a straight
//!   line; [`predict`], [`residuals`] and [`r_squared`] evaluate it.
//! - [`prediction_band`] adds Student-t prediction intervals.
//!
//! # Example
//!
//! ```rust
//! use hydro_regression::{fit_ols, pearson_correlation, r_squared};
//!
//! // Wind speed (km/h) and wave height (m)
//! let wind = [3.0, 9.0, 15.0, 24.0, 34.0, 45.0, 56.0];
//! let wave = [0.1, 0.5, 1.0, 2.0, 3.2, 4.8, 6.5];
//! let fit = fit_ols(&wind, &wave).unwrap();
//! assert!(fit.slope > 0.0);
//! assert!(pearson_correlation(&wind, &wave).unwrap() > 0.95);
//! assert!(r_squared(&wind, &wave, &fit).unwrap() > 0.9);
//! ```

pub mod correlation;
pub mod ols;
pub mod prediction;

pub use correlation::pearson_correlation;
pub use ols::{fit_ols, predict, r_squared, residuals, LinearFit};
pub use prediction::{prediction_band, PredictionBand, PredictionPoint};

pub use hydro_core::{Error, Result};
