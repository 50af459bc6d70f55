//! Core types for hydrological statistics
//!
//! This crate holds what every component shares: the error taxonomy, the
//! validated [`Sample`] container, input checks, and `statrs`-backed
//! distribution helpers used for critical values and p-values.
//!
//! # Example
//!
//! ```rust
//! use hydro_core::{Sample, Error};
//!
//! let rain_days = Sample::new(vec![14.0, 12.0, 13.0, 11.0]).unwrap();
//! assert_eq!(rain_days.len(), 4);
//!
//! let bad = Sample::new(vec![1.0, f64::NAN]);
//! assert!(matches!(bad, Err(Error::InvalidValue { index: 1, .. })));
//! ```

pub mod error;
pub mod math;
pub mod sample;
pub mod validate;

pub use error::{Error, Result};
pub use sample::Sample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::math::distributions;
    pub use crate::sample::Sample;
    pub use crate::validate::{check_finite, check_min_len, check_sample};
    pub use crate::Result;
}
