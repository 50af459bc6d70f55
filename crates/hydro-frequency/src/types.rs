//! Core types for frequency-table representation

use hydro_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval `[left, right)`; the last bin of a table is closed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Left edge (inclusive)
    pub left: f64,
    /// Right edge (exclusive unless `closed_right`)
    pub right: f64,
    pub closed_right: bool,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && (value < self.right || (self.closed_right && value == self.right))
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed_right { ']' } else { ')' };
        write!(f, "[{}, {}{}", self.left, self.right, close)
    }
}

/// Key of a frequency-table row: a discrete value or a bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrequencyKey {
    Value(f64),
    Bin(Bin),
}

impl FrequencyKey {
    /// Representative position of the key (the value, or the bin's left edge)
    pub fn position(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Bin(bin) => bin.left,
        }
    }

    pub fn as_value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Bin(_) => None,
        }
    }

    pub fn as_bin(&self) -> Option<Bin> {
        match self {
            Self::Value(_) => None,
            Self::Bin(bin) => Some(*bin),
        }
    }
}

impl fmt::Display for FrequencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Bin(bin) => write!(f, "{bin}"),
        }
    }
}

/// One row of a frequency table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub key: FrequencyKey,
    pub count: usize,
}

/// Which key wins when several share the maximum count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ModeTieBreak {
    /// First key in ascending key order
    #[default]
    Lowest,
    /// Last key in ascending key order
    Highest,
}

/// Absolute counts keyed by value or bin, in ascending key order
///
/// Relative and cumulative views are derived on demand from the counts and
/// are never stored. A table always holds at least one counted observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    total: usize,
    excluded: usize,
}

impl FrequencyTable {
    /// Build a table from rows already in ascending key order
    pub(crate) fn from_sorted_entries(entries: Vec<FrequencyEntry>, excluded: usize) -> Result<Self> {
        let total: usize = entries.iter().map(|e| e.count).sum();
        if total == 0 {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self {
            entries,
            total,
            excluded,
        })
    }

    /// Build a discrete table from pre-tabulated `(value, count)` pairs
    ///
    /// Pairs may arrive in any order; duplicate or non-finite keys are rejected.
    pub fn from_counts(counts: &[(f64, usize)]) -> Result<Self> {
        for (index, &(value, _)) in counts.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::InvalidValue { index, value });
            }
        }
        let mut sorted = counts.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = sorted.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(Error::InvalidParameter(format!(
                "duplicate frequency key {}",
                pair[0].0
            )));
        }
        let entries = sorted
            .into_iter()
            .map(|(value, count)| FrequencyEntry {
                key: FrequencyKey::Value(value),
                count,
            })
            .collect();
        Self::from_sorted_entries(entries, 0)
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of counted observations
    pub fn total(&self) -> usize {
        self.total
    }

    /// Observations that fell outside explicit bin edges
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn keys(&self) -> Vec<FrequencyKey> {
        self.entries.iter().map(|e| e.key).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.count).collect()
    }

    /// Count for a discrete value, zero if absent
    pub fn count_of(&self, value: f64) -> usize {
        self.entries
            .iter()
            .find(|e| e.key.as_value() == Some(value))
            .map_or(0, |e| e.count)
    }

    /// Index of the bin containing `value`, for binned tables
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(e.key, FrequencyKey::Bin(bin) if bin.contains(value)))
    }

    /// Relative frequencies `count / total`
    pub fn relative(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.entries.iter().map(|e| e.count as f64 / total).collect()
    }

    /// Running sum of counts in ascending key order
    pub fn cumulative_counts(&self) -> Vec<usize> {
        self.entries
            .iter()
            .scan(0usize, |acc, e| {
                *acc += e.count;
                Some(*acc)
            })
            .collect()
    }

    /// Running relative frequency in ascending key order; the last entry is 1
    pub fn cumulative_relative(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.cumulative_counts()
            .into_iter()
            .map(|c| c as f64 / total)
            .collect()
    }

    /// Every key that attains the maximum count, in ascending order
    pub fn modes(&self) -> Vec<FrequencyKey> {
        let max = self.entries.iter().map(|e| e.count).max().unwrap_or(0);
        self.entries
            .iter()
            .filter(|e| e.count == max)
            .map(|e| e.key)
            .collect()
    }

    /// The key with the maximum count, ties broken by `tie_break`
    pub fn mode(&self, tie_break: ModeTieBreak) -> FrequencyKey {
        let modes = self.modes();
        match tie_break {
            ModeTieBreak::Lowest => modes[0],
            ModeTieBreak::Highest => modes[modes.len() - 1],
        }
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrequencyTable({} rows, n={}, excluded={})",
            self.len(),
            self.total,
            self.excluded
        )
    }
}
