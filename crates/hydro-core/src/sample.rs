//! Validated sample container
//!
//! A [`Sample`] is an ordered, non-empty sequence of finite observations with
//! optional parallel labels (years, dates rendered as text, station ids).
//! Operations across the workspace accept `&[f64]`; a `Sample` derefs to one.

use crate::validate::{check_finite, check_min_len};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An ordered, non-empty sequence of finite observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    values: Vec<f64>,
    labels: Option<Vec<String>>,
}

impl Sample {
    /// Validate and wrap a vector of observations
    pub fn new(values: Vec<f64>) -> Result<Self> {
        check_min_len(&values, 1)?;
        check_finite(&values)?;
        Ok(Self {
            values,
            labels: None,
        })
    }

    /// Validate observations together with one label per observation
    pub fn with_labels(values: Vec<f64>, labels: Vec<String>) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(Error::LengthMismatch {
                left: values.len(),
                right: labels.len(),
            });
        }
        let mut sample = Self::new(values)?;
        sample.labels = Some(labels);
        Ok(sample)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Label of the `index`-th observation, if labels were supplied
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Sample {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}
