//! Dated hydrological series
//!
//! Groups a [`DatedSeries`] of daily (or irregular) observations into
//! calendar or hydrological years to extract the annual maxima, minima and
//! means that feed frequency analysis, and computes the monthly mean regime.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hydro_series::{annual_maxima, DatedSeries, HydrologicalYear};
//!
//! let start = NaiveDate::from_ymd_opt(2000, 8, 30).unwrap();
//! let series = DatedSeries::daily(start, &[12.0, 30.0, 18.0, 25.0]).unwrap();
//! // Aug 30-31 belong to water year 2000, Sep 1-2 to water year 2001
//! let maxima = annual_maxima(&series, HydrologicalYear::SEPTEMBER);
//! assert_eq!(maxima.len(), 2);
//! assert_eq!(maxima[0].value, 30.0);
//! assert_eq!(maxima[1].value, 25.0);
//! ```

pub mod annual;
pub mod monthly;
pub mod series;
pub mod year;

pub use annual::{
    annual_maxima, annual_means, annual_minima, annual_summaries, complete_years, AnnualSummary,
    DatedValue,
};
pub use monthly::MonthlyRegime;
pub use series::{DatedSeries, Observation};
pub use year::HydrologicalYear;

pub use hydro_core::{Error, Result};
