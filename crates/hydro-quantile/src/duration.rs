//! Flow-duration curves
//!
//! The curve pairs every discharge with the percentage of time it is equalled
//! or exceeded: values are sorted in descending order and the `i`-th value
//! (1-based) is assigned `100 i / N`.

use crate::sorting::{sort_in_place, SortOrder};
use hydro_core::{validate::check_sample, Error, Result};
use serde::{Deserialize, Serialize};

/// A single point of the duration curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationPoint {
    pub value: f64,
    /// Percent of time the value is equalled or exceeded, in (0, 100]
    pub exceedance_percent: f64,
}

/// Empirical flow-duration curve of a discharge series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDurationCurve {
    points: Vec<DurationPoint>,
}

impl FlowDurationCurve {
    pub fn new(discharges: &[f64]) -> Result<Self> {
        check_sample(discharges, 1)?;
        let mut sorted = discharges.to_vec();
        sort_in_place(&mut sorted, SortOrder::Descending);
        let n = sorted.len() as f64;
        let points = sorted
            .into_iter()
            .enumerate()
            .map(|(i, value)| DurationPoint {
                value,
                exceedance_percent: 100.0 * (i + 1) as f64 / n,
            })
            .collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DurationPoint] {
        &self.points
    }

    /// Discharge equalled or exceeded `percent` of the time (e.g. Q90 for 90)
    ///
    /// Interpolates linearly between neighbouring points; below the first
    /// point's percentage the largest discharge is returned.
    pub fn discharge_at(&self, percent: f64) -> Result<f64> {
        if !(percent > 0.0 && percent <= 100.0) {
            return Err(Error::InvalidParameter(format!(
                "exceedance percent {percent} must be in (0, 100]"
            )));
        }
        let first = self.points[0];
        if percent <= first.exceedance_percent {
            return Ok(first.value);
        }
        let pos = self
            .points
            .iter()
            .position(|p| p.exceedance_percent >= percent)
            .unwrap_or(self.points.len() - 1);
        let hi = self.points[pos];
        let lo = self.points[pos - 1];
        let frac =
            (percent - lo.exceedance_percent) / (hi.exceedance_percent - lo.exceedance_percent);
        Ok(lo.value + frac * (hi.value - lo.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_ordering_and_percentages() {
        let curve = FlowDurationCurve::new(&[10.0, 40.0, 20.0, 30.0]).unwrap();
        let values: Vec<f64> = curve.points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![40.0, 30.0, 20.0, 10.0]);
        assert_relative_eq!(curve.points()[0].exceedance_percent, 25.0);
        assert_relative_eq!(curve.points()[3].exceedance_percent, 100.0);
    }

    #[test]
    fn test_discharge_at() {
        let curve = FlowDurationCurve::new(&[10.0, 40.0, 20.0, 30.0]).unwrap();
        assert_relative_eq!(curve.discharge_at(50.0).unwrap(), 30.0);
        assert_relative_eq!(curve.discharge_at(62.5).unwrap(), 25.0);
        assert_relative_eq!(curve.discharge_at(100.0).unwrap(), 10.0);
        assert_relative_eq!(curve.discharge_at(5.0).unwrap(), 40.0);
        assert!(curve.discharge_at(0.0).is_err());
        assert!(curve.discharge_at(101.0).is_err());
    }
}
