//! End-to-end frequency analysis of a series of annual extremes

use crate::config::AnalysisConfig;
use hydro_confidence::{confidence_interval_for_mean, ConfidenceInterval};
use hydro_core::validate::check_sample;
use hydro_core::Result;
use hydro_descriptive::{describe, mode, Summary};
use hydro_distribution::{fit_log_normal, fit_normal, Extreme, ReturnPeriodCurve};
use hydro_quantile::{RankedObservation, RankedSeries};
use hydro_testing::{welch_t_test, Tail, TestResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Empirical and fitted return periods for one sample of annual extremes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyAnalysis {
    pub extreme: Extreme,
    pub summary: Summary,
    /// Most frequent value under the configured tie-break
    pub mode: f64,
    pub mean_interval: ConfidenceInterval,
    /// Welch test of equal means in the first and second halves of the
    /// record at the configured significance level; `None` below four values
    pub homogeneity: Option<TestResult>,
    pub ranked: RankedSeries,
    pub normal: ReturnPeriodCurve,
    pub log_normal: ReturnPeriodCurve,
}

impl FrequencyAnalysis {
    /// Rank the sample, fit Normal and Log-Normal models and tabulate both
    /// at the configured return periods
    ///
    /// Every observation must be positive for the Log-Normal fit; a sample
    /// with a zero or negative value fails with `NonPositiveValue`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hydro_stats::{AnalysisConfig, FrequencyAnalysis};
    ///
    /// let peaks = [812.0, 1430.0, 975.0, 2210.0, 1104.0, 1688.0, 901.0, 1259.0];
    /// let analysis = FrequencyAnalysis::run(&peaks, &AnalysisConfig::default()).unwrap();
    ///
    /// let largest = &analysis.ranked.observations()[0];
    /// assert_eq!(largest.value, 2210.0);
    /// assert_eq!(largest.return_period, 9.0);
    /// assert_eq!(analysis.normal.points().len(), 7);
    /// ```
    #[instrument(skip(sample, config), fields(n = sample.len(), extreme = ?config.extreme))]
    pub fn run(sample: &[f64], config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        check_sample(sample, 2)?;

        let ranked = RankedSeries::new(sample, config.rank_direction(), config.tie_method)?;
        let summary = describe(sample)?;
        let mode = mode(sample, config.mode_tie_break)?;
        let mean_interval = confidence_interval_for_mean(sample, config.confidence()?, None)?;
        let homogeneity = homogeneity_test(sample, config.significance_level)?;

        let normal = ReturnPeriodCurve::new(
            fit_normal(sample)?,
            &config.return_periods,
            config.extreme,
        )?;
        let log_normal = ReturnPeriodCurve::new(
            fit_log_normal(sample, config.log_base)?,
            &config.return_periods,
            config.extreme,
        )?;

        debug!(
            normal = %normal.model(),
            log_normal = %log_normal.model(),
            "frequency analysis complete"
        );
        Ok(Self {
            extreme: config.extreme,
            summary,
            mode,
            mean_interval,
            homogeneity,
            ranked,
            normal,
            log_normal,
        })
    }

    /// Ranked observations, most severe first
    pub fn empirical(&self) -> &[RankedObservation] {
        self.ranked.observations()
    }

    /// `(return period, observed, normal, log-normal)` for every observation
    ///
    /// Compares the fitted models against the empirical positions.
    pub fn model_comparison(&self) -> Result<Vec<ModelComparison>> {
        self.empirical()
            .iter()
            .map(|obs| {
                let p = self.extreme.design_probability(obs.return_period)?;
                Ok(ModelComparison {
                    return_period: obs.return_period,
                    observed: obs.value,
                    normal: self.normal.model().quantile(p)?,
                    log_normal: self.log_normal.model().quantile(p)?,
                })
            })
            .collect()
    }
}

/// Split the record in two halves and test for a shift in the mean
fn homogeneity_test(sample: &[f64], alpha: f64) -> Result<Option<TestResult>> {
    if sample.len() < 4 {
        return Ok(None);
    }
    let (first, second) = sample.split_at(sample.len() / 2);
    let result = welch_t_test(first, second, alpha, Tail::TwoSided)?;
    debug!(statistic = result.statistic, decision = %result.decision, "homogeneity of the record");
    Ok(Some(result))
}

/// An observation beside the values both models assign to its return period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub return_period: f64,
    pub observed: f64,
    pub normal: f64,
    pub log_normal: f64,
}
