//! Date-indexed observations

use chrono::NaiveDate;
use hydro_core::{Error, Result};
use hydro_quantile::FlowDurationCurve;
use serde::{Deserialize, Serialize};

/// A value observed on a date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Observations in strictly increasing date order
///
/// Gaps are allowed; a date may appear only once and every value must be
/// finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedSeries {
    observations: Vec<Observation>,
}

impl DatedSeries {
    /// Sort and validate observations
    pub fn new(mut observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(Error::empty_input());
        }
        if let Some(index) = observations.iter().position(|o| !o.value.is_finite()) {
            return Err(Error::InvalidValue {
                index,
                value: observations[index].value,
            });
        }
        observations.sort_by_key(|o| o.date);
        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(Error::InvalidParameter(format!(
                "duplicate observation date {}",
                pair[0].date
            )));
        }
        Ok(Self { observations })
    }

    /// Consecutive daily values starting at `start`
    pub fn daily(start: NaiveDate, values: &[f64]) -> Result<Self> {
        let observations = start
            .iter_days()
            .zip(values)
            .map(|(date, &value)| Observation::new(date, value))
            .collect();
        Self::new(observations)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.observations[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.observations[self.observations.len() - 1].date
    }

    /// Observations with `from <= date <= to`
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        let selected: Vec<Observation> = self
            .observations
            .iter()
            .filter(|o| o.date >= from && o.date <= to)
            .copied()
            .collect();
        Self::new(selected)
    }

    /// Flow-duration curve of every value in the series
    pub fn flow_duration_curve(&self) -> Result<FlowDurationCurve> {
        FlowDurationCurve::new(&self.values())
    }
}
