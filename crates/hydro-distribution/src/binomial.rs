//! Binomial event counts

use hydro_core::validate::check_finite_scalar;
use hydro_core::{Error, Result};
use statrs::distribution::{Binomial, Discrete};

/// Probability of exactly `k` occurrences in `n` independent trials with
/// per-trial probability `p`
pub fn binomial_pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    check_finite_scalar(p)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::DomainError {
            value: p,
            context: "trial probability",
        });
    }
    if k > n {
        return Ok(0.0);
    }
    let binomial = Binomial::new(p, n).map_err(Error::distribution)?;
    Ok(binomial.pmf(k))
}

/// Probability of at least one occurrence in `n` years of an event with
/// return period `tr`
pub fn risk_of_occurrence(tr: f64, n: u64) -> Result<f64> {
    if !(tr.is_finite() && tr >= 1.0) {
        return Err(Error::InvalidParameter(format!(
            "return period must be finite and at least 1, got {tr}"
        )));
    }
    Ok(1.0 - binomial_pmf(0, n, 1.0 / tr)?)
}
