//! Input validation shared by every component
//!
//! All checks are cheap linear scans; the component crates call them at the
//! top of each public operation so that NaN/Inf never reach the arithmetic.

use crate::{Error, Result};

/// Reject samples shorter than `min_len`
pub fn check_min_len(data: &[f64], min_len: usize) -> Result<()> {
    if data.len() < min_len {
        return Err(Error::InsufficientData {
            expected: min_len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Reject NaN and infinite values, reporting the first offender
pub fn check_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::InvalidValue {
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

/// Combined size and finiteness check used by most operations
pub fn check_sample(data: &[f64], min_len: usize) -> Result<()> {
    check_min_len(data, min_len)?;
    check_finite(data)
}

/// Reject zero or negative values (logarithm domain)
pub fn check_positive(data: &[f64]) -> Result<()> {
    match data.iter().position(|&x| x <= 0.0) {
        Some(index) => Err(Error::NonPositiveValue {
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

/// Reject a scalar that is NaN or infinite
pub fn check_finite_scalar(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidValue { index: 0, value })
    }
}

/// Require `p` to lie strictly inside (0, 1)
pub fn check_open_probability(p: f64, context: &'static str) -> Result<()> {
    if p.is_nan() || p <= 0.0 || p >= 1.0 {
        return Err(Error::DomainError { value: p, context });
    }
    Ok(())
}

/// Paired samples must have the same number of observations
pub fn check_paired(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    Ok(())
}
