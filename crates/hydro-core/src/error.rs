//! Error types for hydrological statistics
//!
//! Provides a unified error type for all hydro-stats crates. Every variant is a
//! deterministic math or input error; nothing here is transient.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Sample smaller than the operation's minimum size
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Non-finite input value
    #[error("Invalid value {value} at index {index}: input must be finite")]
    InvalidValue { index: usize, value: f64 },

    /// Zero or negative value where a logarithm is required
    #[error("Non-positive value {value} at index {index}: logarithm undefined")]
    NonPositiveValue { index: usize, value: f64 },

    /// Zero variance or zero denominator
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Probability argument outside the open interval (0, 1)
    #[error("Domain error: {context} = {value} must lie in (0, 1)")]
    DomainError { value: f64, context: &'static str },

    /// Division by zero in a derived quantity
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Paired samples of different length
    #[error("Length mismatch: paired samples have {left} and {right} elements")]
    LengthMismatch { left: usize, right: usize },

    /// Malformed parameter (bin edges, quartile index, ...)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The underlying distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a probability outside (0, 1)
    pub fn probability(value: f64) -> Self {
        Self::DomainError {
            value,
            context: "probability",
        }
    }

    /// Wrap a `statrs` construction failure
    pub fn distribution(err: impl std::fmt::Display) -> Self {
        Self::Distribution(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::InvalidValue { index: 3, value: f64::NAN };
        assert_eq!(
            err.to_string(),
            "Invalid value NaN at index 3: input must be finite"
        );

        let err = Error::NonPositiveValue { index: 0, value: -1.5 };
        assert_eq!(
            err.to_string(),
            "Non-positive value -1.5 at index 0: logarithm undefined"
        );

        let err = Error::probability(1.0);
        assert_eq!(err.to_string(), "Domain error: probability = 1 must lie in (0, 1)");

        let err = Error::LengthMismatch { left: 3, right: 4 };
        assert_eq!(
            err.to_string(),
            "Length mismatch: paired samples have 3 and 4 elements"
        );
    }

    #[test]
    fn test_empty_input_helper() {
        match Error::empty_input() {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_error_chaining() {
        fn inner() -> Result<f64> {
            Err(Error::DegenerateInput("all x values identical".to_string()))
        }

        fn outer() -> Result<f64> {
            let slope = inner()?;
            Ok(slope * 2.0)
        }

        let err = outer().unwrap_err();
        assert!(err.to_string().contains("all x values identical"));
    }
}
