//! Result types shared by every test

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Tail {
    /// H1: parameter differs from the hypothesized value
    #[default]
    TwoSided,
    /// H1: parameter is greater
    Greater,
    /// H1: parameter is less
    Less,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Reject,
    FailToReject,
}

impl Decision {
    pub fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject H0"),
            Self::FailToReject => write!(f, "fail to reject H0"),
        }
    }
}

/// Critical value(s) bounding the rejection region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CriticalValue {
    /// One-sided test: reject beyond this value in the tested direction
    Single(f64),
    /// Two-sided test: reject below `lower` or above `upper`
    Pair { lower: f64, upper: f64 },
}

/// Degrees of freedom of the reference distribution
///
/// Welch-Satterthwaite degrees of freedom are real-valued and never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DegreesOfFreedom {
    /// Standard normal reference, no degrees of freedom
    None,
    One(f64),
    /// Numerator and denominator degrees of freedom of an F distribution
    Two(f64, f64),
}

/// Which test produced a [`TestResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    OneSampleZ,
    OneSampleT,
    TwoSampleZ,
    PooledT,
    WelchT,
    ChiSquareVariance,
    VarianceRatioF,
}

/// Outcome of a single hypothesis test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub kind: TestKind,
    pub statistic: f64,
    pub critical: CriticalValue,
    pub degrees_of_freedom: DegreesOfFreedom,
    /// Probability in [0, 1] of a statistic at least as extreme under H0
    pub p_value: f64,
    pub significance_level: f64,
    pub tail: Tail,
    pub decision: Decision,
}

impl TestResult {
    pub fn is_significant(&self) -> bool {
        self.decision.is_reject()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: statistic={:.4}, p={:.4}, alpha={} => {}",
            self.kind, self.statistic, self.p_value, self.significance_level, self.decision
        )
    }
}

/// Size and variance of a sample when only summary values are available
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceSummary {
    pub size: usize,
    /// Sample variance with divisor `size − 1`
    pub variance: f64,
}

impl VarianceSummary {
    pub fn new(size: usize, variance: f64) -> Self {
        Self { size, variance }
    }

    /// Summary from a standard deviation
    pub fn from_std_dev(size: usize, std_dev: f64) -> Self {
        Self::new(size, std_dev * std_dev)
    }
}
