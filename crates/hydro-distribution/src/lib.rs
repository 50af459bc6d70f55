//! Distribution fitting and quantile mapping
//!
//! Fits Normal and Log-Normal models from sample moments and answers forward
//! and inverse probability queries against them. Fitting is separate from
//! querying: one fitted [`DistributionModel`] serves any number of lookups,
//! which is how [`ReturnPeriodCurve`]s are built.
//!
//! # Example
//!
//! ```rust
//! use hydro_distribution::{fit_log_normal, value_for_return_period, Extreme, LogBase};
//!
//! let annual_maxima = [1980.0, 2450.0, 1720.0, 3100.0, 2210.0, 2675.0, 1890.0, 2330.0];
//! let model = fit_log_normal(&annual_maxima, LogBase::Ten).unwrap();
//! let q100 = value_for_return_period(&model, 100.0, Extreme::Maxima).unwrap();
//! assert!(q100 > 3100.0);
//! ```

pub mod binomial;
pub mod model;
pub mod return_period;
pub mod simulation;

pub use binomial::{binomial_pmf, risk_of_occurrence};
pub use model::{fit_log_normal, fit_normal, DistributionModel, LogBase};
pub use return_period::{
    return_period_of_value, return_period_range, value_for_return_period, Extreme,
    ReturnPeriodCurve, ReturnPeriodPoint,
};
pub use simulation::{running_frequency, running_heads_frequency};

pub use hydro_core::{Error, Result};
