//! # hydro-stats
//!
//! Statistical estimation and hypothesis testing for hydrological series:
//! descriptive summaries, order statistics, frequency tables, Normal and
//! Log-Normal fitting with return periods, regression, confidence intervals
//! and classical tests on means and variances.
//!
//! Each component lives in its own crate and is re-exported here as a module.
//! The root crate adds [`AnalysisConfig`] and the [`FrequencyAnalysis`]
//! pipeline that ties ranking and model fitting together.
//!
//! ## Example
//!
//! ```rust
//! use hydro_stats::prelude::*;
//!
//! let rain_days = [14.0, 12.0, 13.0, 11.0, 15.0, 14.0, 13.0, 16.0];
//! let summary = describe(&rain_days).unwrap();
//! assert_eq!(summary.median, 13.5);
//!
//! let result = t_test_one_sample(&rain_days, 12.0, 0.05, Tail::TwoSided).unwrap();
//! assert_eq!(result.decision, Decision::Reject);
//! ```
//!
//! ## Features
//!
//! - `parallel`: summarise many samples at once with rayon in
//!   [`descriptive::describe_many`].
//!
//! Logging goes through `tracing`; the library never installs a subscriber.

pub mod analysis;
pub mod config;

pub use analysis::{FrequencyAnalysis, ModelComparison};
pub use config::{AnalysisConfig, DEFAULT_RETURN_PERIODS};

pub use hydro_confidence as confidence;
pub use hydro_core as common;
pub use hydro_descriptive as descriptive;
pub use hydro_distribution as distribution;
pub use hydro_frequency as frequency;
pub use hydro_quantile as quantile;
pub use hydro_regression as regression;
pub use hydro_series as series;
pub use hydro_testing as testing;

pub use hydro_core::{Error, Result, Sample};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analysis::FrequencyAnalysis;
    pub use crate::config::AnalysisConfig;

    pub use hydro_confidence::{confidence_interval_for_mean, ConfidenceInterval, ConfidenceLevel};
    pub use hydro_core::{Error, Result, Sample};
    pub use hydro_descriptive::{
        coefficient_of_variation, describe, mean, mode, skewness, std_dev, variance, Ddof, Summary,
    };
    pub use hydro_distribution::{
        fit_log_normal, fit_normal, DistributionModel, Extreme, LogBase, ReturnPeriodCurve,
    };
    pub use hydro_frequency::{
        absolute_frequency, binned_frequency, FrequencyTable, ModeTieBreak, TableBuilder,
    };
    pub use hydro_quantile::{
        median, percentile, quantile, quartile, RankDirection, RankedSeries, TieMethod,
    };
    pub use hydro_regression::{fit_ols, pearson_correlation, LinearFit};
    pub use hydro_testing::{
        chi_square_variance_test, f_test, pooled_t_test, t_test_one_sample, welch_t_test,
        z_test_one_sample, Decision, Tail, TestResult,
    };
}
