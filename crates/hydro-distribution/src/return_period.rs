//! Design values for return periods and the inverse mapping

use crate::model::DistributionModel;
use hydro_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which tail an analysis of annual extremes is concerned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Extreme {
    /// Floods: events equal to or greater than the design value
    #[default]
    Maxima,
    /// Low flows: events equal to or smaller than the design value
    Minima,
}

impl Extreme {
    /// Non-exceedance probability of the design value for return period `tr`
    pub fn design_probability(self, tr: f64) -> Result<f64> {
        if !(tr.is_finite() && tr > 1.0) {
            return Err(Error::InvalidParameter(format!(
                "return period must be finite and greater than 1, got {tr}"
            )));
        }
        Ok(match self {
            Self::Maxima => 1.0 - 1.0 / tr,
            Self::Minima => 1.0 / tr,
        })
    }
}

/// Value with return period `tr` under a fitted model
pub fn value_for_return_period(model: &DistributionModel, tr: f64, extreme: Extreme) -> Result<f64> {
    model.quantile(extreme.design_probability(tr)?)
}

/// Return period of `value`: `1 / P(X > value)` for maxima, `1 / P(X <= value)` for minima
pub fn return_period_of_value(model: &DistributionModel, value: f64, extreme: Extreme) -> Result<f64> {
    let p = match extreme {
        Extreme::Maxima => model.exceedance_probability(value)?,
        Extreme::Minima => model.cdf(value)?,
    };
    if p == 0.0 {
        return Err(Error::DivisionByZero(format!(
            "value {value} has zero probability under the {} model",
            model.name()
        )));
    }
    Ok(1.0 / p)
}

/// One row of a return-period curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPeriodPoint {
    pub return_period: f64,
    pub probability: f64,
    pub value: f64,
}

/// Design values of a fitted model at a list of return periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnPeriodCurve {
    model: DistributionModel,
    extreme: Extreme,
    points: Vec<ReturnPeriodPoint>,
}

impl ReturnPeriodCurve {
    pub fn new(model: DistributionModel, return_periods: &[f64], extreme: Extreme) -> Result<Self> {
        let points = return_periods
            .iter()
            .map(|&tr| {
                let probability = extreme.design_probability(tr)?;
                Ok(ReturnPeriodPoint {
                    return_period: tr,
                    probability,
                    value: model.quantile(probability)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(model = model.name(), points = points.len(), "built return-period curve");
        Ok(Self {
            model,
            extreme,
            points,
        })
    }

    pub fn model(&self) -> &DistributionModel {
        &self.model
    }

    pub fn extreme(&self) -> Extreme {
        self.extreme
    }

    pub fn points(&self) -> &[ReturnPeriodPoint] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Integer return periods `from..=to`, the usual axis of a design chart
pub fn return_period_range(from: u32, to: u32) -> Vec<f64> {
    (from..=to).map(f64::from).collect()
}
