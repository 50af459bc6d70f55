//! Parameters for an analysis run
//!
//! Nothing here reads files or the environment. A wrapping tool loads the
//! struct from JSON with [`AnalysisConfig::from_json_str`] or builds it in code.

use hydro_confidence::ConfidenceLevel;
use hydro_core::validate::{check_finite_scalar, check_open_probability};
use hydro_core::{Error, Result};
use hydro_distribution::{Extreme, LogBase};
use hydro_frequency::ModeTieBreak;
use hydro_quantile::{RankDirection, TieMethod};
use serde::{Deserialize, Serialize};

/// Return periods tabulated when none are configured, in years
pub const DEFAULT_RETURN_PERIODS: [f64; 7] = [2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 1000.0];

/// Settings shared by the frequency-analysis pipeline and the interval/test helpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub confidence_level: f64,
    pub significance_level: f64,
    pub tie_method: TieMethod,
    pub mode_tie_break: ModeTieBreak,
    pub log_base: LogBase,
    pub return_periods: Vec<f64>,
    pub extreme: Extreme,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            significance_level: 0.05,
            tie_method: TieMethod::Average,
            mode_tie_break: ModeTieBreak::Lowest,
            log_base: LogBase::Ten,
            return_periods: DEFAULT_RETURN_PERIODS.to_vec(),
            extreme: Extreme::Maxima,
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON document and validate it; missing fields take their defaults
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hydro_stats::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::from_json_str(r#"{ "extreme": "Minima" }"#).unwrap();
    /// assert_eq!(config.confidence_level, 0.95);
    ///
    /// assert!(AnalysisConfig::from_json_str(r#"{ "return_periods": [1.0] }"#).is_err());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidParameter(format!("malformed analysis config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::InvalidParameter(format!("cannot serialize analysis config: {e}")))
    }

    /// Check levels, logarithm base and return periods
    pub fn validate(&self) -> Result<()> {
        check_open_probability(self.confidence_level, "confidence level")?;
        check_open_probability(self.significance_level, "significance level")?;
        if self.return_periods.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one return period is required".to_string(),
            ));
        }
        for &tr in &self.return_periods {
            check_finite_scalar(tr)?;
            if tr <= 1.0 {
                return Err(Error::InvalidParameter(format!(
                    "return period must be greater than 1, got {tr}"
                )));
            }
        }
        self.log_base.validate()
    }

    pub fn confidence(&self) -> Result<ConfidenceLevel> {
        ConfidenceLevel::try_new(self.confidence_level)
    }

    /// Rank 1 goes to the most severe event of the configured extreme
    pub fn rank_direction(&self) -> RankDirection {
        match self.extreme {
            Extreme::Maxima => RankDirection::LargestFirst,
            Extreme::Minima => RankDirection::SmallestFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rank_direction(), RankDirection::LargestFirst);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AnalysisConfig::from_json_str(
            r#"{ "confidence_level": 0.9, "log_base": "Natural", "tie_method": "Min" }"#,
        )
        .unwrap();
        assert_eq!(config.confidence_level, 0.9);
        assert_eq!(config.log_base, LogBase::Natural);
        assert_eq!(config.tie_method, TieMethod::Min);
        assert_eq!(config.return_periods, DEFAULT_RETURN_PERIODS.to_vec());
    }

    #[test]
    fn test_custom_log_base_round_trips() {
        let config = AnalysisConfig {
            log_base: LogBase::Custom(2.0),
            ..AnalysisConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(AnalysisConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "confidence_level": 1.0 }"#),
            Err(Error::DomainError { .. })
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "significance_level": 0.0 }"#),
            Err(Error::DomainError { .. })
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "return_periods": [] }"#),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "return_periods": [10.0, 0.5] }"#),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_str(r#"{ "log_base": { "Custom": 1.0 } }"#),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_fields_and_bad_json() {
        assert!(AnalysisConfig::from_json_str(r#"{ "alpha": 0.05 }"#).is_err());
        assert!(AnalysisConfig::from_json_str("{ not json").is_err());
    }
}
