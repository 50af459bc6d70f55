//! Per-year extremes and means of a dated series

use crate::series::DatedSeries;
use crate::year::HydrologicalYear;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A value together with the date it occurred
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

/// Statistics of one (hydrological) year
///
/// When the extreme value occurs on several days the first date is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub year: i32,
    pub maximum: DatedValue,
    pub minimum: DatedValue,
    pub mean: f64,
    /// Observations that fell in this year
    pub count: usize,
}

/// One summary per year present in the series, in year order
pub fn annual_summaries(series: &DatedSeries, year: HydrologicalYear) -> Vec<AnnualSummary> {
    let mut groups: BTreeMap<i32, (AnnualSummary, f64)> = BTreeMap::new();
    for obs in series.observations() {
        let label = year.year_of(obs.date);
        let here = DatedValue {
            date: obs.date,
            value: obs.value,
        };
        let (summary, sum) = groups.entry(label).or_insert((
            AnnualSummary {
                year: label,
                maximum: here,
                minimum: here,
                mean: 0.0,
                count: 0,
            },
            0.0,
        ));
        // Observations arrive in date order, so strict comparisons keep the first date
        if obs.value > summary.maximum.value {
            summary.maximum = here;
        }
        if obs.value < summary.minimum.value {
            summary.minimum = here;
        }
        summary.count += 1;
        *sum += obs.value;
    }
    debug!(years = groups.len(), start_month = year.start_month(), "grouped annual series");
    groups
        .into_values()
        .map(|(summary, sum)| AnnualSummary {
            mean: sum / summary.count as f64,
            ..summary
        })
        .collect()
}

/// Annual maximum of each year
pub fn annual_maxima(series: &DatedSeries, year: HydrologicalYear) -> Vec<DatedValue> {
    annual_summaries(series, year)
        .into_iter()
        .map(|s| s.maximum)
        .collect()
}

/// Annual minimum of each year
pub fn annual_minima(series: &DatedSeries, year: HydrologicalYear) -> Vec<DatedValue> {
    annual_summaries(series, year)
        .into_iter()
        .map(|s| s.minimum)
        .collect()
}

/// Mean of each year, paired with the year label
pub fn annual_means(series: &DatedSeries, year: HydrologicalYear) -> Vec<(i32, f64)> {
    annual_summaries(series, year)
        .into_iter()
        .map(|s| (s.year, s.mean))
        .collect()
}

/// Keep only years with at least `min_count` observations
pub fn complete_years(summaries: Vec<AnnualSummary>, min_count: usize) -> Vec<AnnualSummary> {
    summaries
        .into_iter()
        .filter(|s| s.count >= min_count)
        .collect()
}
