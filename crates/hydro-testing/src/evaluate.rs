//! Critical values, p-values and the decision for a computed statistic

use crate::types::{CriticalValue, Decision, Tail};
use hydro_core::math::distributions;
use hydro_core::validate::check_open_probability;
use hydro_core::Result;
use statrs::distribution::ContinuousCDF;

/// Rejection region, p-value and decision for `statistic` under `dist`
#[derive(Debug, Clone, Copy)]
pub(crate) struct Evaluation {
    pub critical: CriticalValue,
    pub p_value: f64,
    pub decision: Decision,
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    check_open_probability(alpha, "significance level")
}

/// The decision compares the statistic with the critical value(s); the
/// p-value is computed independently from the same distribution.
pub(crate) fn evaluate<D: ContinuousCDF<f64, f64>>(
    dist: &D,
    statistic: f64,
    alpha: f64,
    tail: Tail,
) -> Evaluation {
    let below = dist.cdf(statistic);
    let above = distributions::upper_tail(dist, statistic);
    match tail {
        Tail::TwoSided => {
            let (lower, upper) = distributions::two_sided_critical(dist, alpha);
            Evaluation {
                critical: CriticalValue::Pair { lower, upper },
                p_value: (2.0 * below.min(above)).min(1.0),
                decision: decide(statistic < lower || statistic > upper),
            }
        }
        Tail::Greater => {
            let c = distributions::upper_critical(dist, alpha);
            Evaluation {
                critical: CriticalValue::Single(c),
                p_value: above,
                decision: decide(statistic > c),
            }
        }
        Tail::Less => {
            let c = distributions::lower_critical(dist, alpha);
            Evaluation {
                critical: CriticalValue::Single(c),
                p_value: below,
                decision: decide(statistic < c),
            }
        }
    }
}

fn decide(in_rejection_region: bool) -> Decision {
    if in_rejection_region {
        Decision::Reject
    } else {
        Decision::FailToReject
    }
}
