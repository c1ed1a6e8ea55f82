//! The end-to-end analysis pipeline.
//!
//! One parameterized pipeline covers every dataset: the transform and the
//! outlier policy are configuration values, so analyzing a second dataset
//! means running the same pipeline with different inputs rather than
//! duplicating it. Stages run strictly downstream:
//!
//! ```text
//! raw columns
//!     |  Transform (per axis)
//!     v
//! transformed sample
//!     |  OutlierPolicy (y fence)
//!     v
//! clean sample
//!     |  DiagnosticsReport + FitResult (shared OLS)
//!     v
//! TTestResult
//! ```
//!
//! Every run owns its copies of the data; nothing is shared or retained
//! between runs.

use crate::{
    diagnostics::DiagnosticsReport,
    error::AnalysisError,
    outlier::OutlierPolicy,
    regression::FitResult,
    sample::Sample,
    transform::Transform,
    ttest::TTestResult,
};

/// Configuration for one pipeline run.
///
/// # Examples
///
/// ```
/// use trendline_analysis::{pipeline::PipelineConfig, transform::Transform};
///
/// let config = PipelineConfig {
///     transform: Transform::NaturalLog,
///     ..PipelineConfig::default()
/// };
///
/// let x = [1.0, 2.0, 4.0, 8.0, 16.0];
/// let y = [2.0, 4.1, 7.9, 16.5, 31.0];
/// let report = config.run(&x, &y).unwrap();
///
/// assert_eq!(report.observations_used, 5);
/// assert!(report.fit.correlation > 0.99);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Transform applied to both axes before any other stage.
    pub transform: Transform,
    /// Outlier handling applied to the transformed sample.
    pub outlier_policy: OutlierPolicy,
}

/// The full output of one pipeline run.
///
/// Either every field is populated or the run failed; there is no partial
/// result.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    /// Observation count before outlier removal.
    pub observations_total: usize,
    /// Observation count the statistics were computed from.
    pub observations_used: usize,
    /// Configuration the run used.
    pub config: PipelineConfig,
    /// The observations the statistics were computed from, after transform
    /// and outlier removal. Kept so the presentation layer can plot them.
    pub sample: Sample,
    /// Per-axis descriptive statistics and residual analysis.
    pub diagnostics: DiagnosticsReport,
    /// The least-squares fit and its quality metrics.
    pub fit: FitResult,
    /// The slope significance test.
    pub ttest: TTestResult,
}

impl PipelineConfig {
    /// Runs the pipeline over two raw columns.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::MismatchedInputs`] for columns of different length
    /// * [`AnalysisError::NonPositiveValue`] from a log transform on data
    ///   outside its domain
    /// * [`AnalysisError::InsufficientData`] when fewer than 3 observations
    ///   survive outlier removal
    /// * [`AnalysisError::ZeroVariance`] / [`AnalysisError::ZeroResidualVariance`]
    ///   for degenerate inputs
    pub fn run(&self, x: &[f64], y: &[f64]) -> Result<AnalysisReport, AnalysisError> {
        let sample = Sample::from_columns(x.to_vec(), y.to_vec())?;
        let sample = self.transform.apply_sample(&sample)?;
        let observations_total = sample.len();

        let sample = self.outlier_policy.apply(&sample)?;
        let observations_used = sample.len();
        if observations_used < 3 {
            return Err(AnalysisError::InsufficientData {
                got: observations_used,
                min: 3,
            });
        }

        let diagnostics =
            DiagnosticsReport::from_sample(&sample, self.outlier_policy.fence_multiplier())?;
        let fit = FitResult::fit(&sample)?;
        let ttest = TTestResult::from_report(&diagnostics)?;

        Ok(AnalysisReport {
            observations_total,
            observations_used,
            config: *self,
            sample,
            diagnostics,
            fit,
            ttest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_pipeline_end_to_end() {
        // Near power-law data: on the log-log scale the slope is close to 1
        // and the intercept close to ln 2.
        let config = PipelineConfig {
            transform: Transform::NaturalLog,
            ..PipelineConfig::default()
        };
        let x = [1.0, 2.0, 4.0, 8.0, 16.0];
        let y = [2.0, 4.1, 7.9, 16.5, 31.0];
        let report = config.run(&x, &y).unwrap();

        assert_eq!(report.observations_total, 5);
        assert_eq!(report.observations_used, 5);
        assert!(report.fit.slope > 0.9 && report.fit.slope < 1.1);
        assert!(report.fit.intercept > 0.5 && report.fit.intercept < 0.9);
        assert!(report.fit.correlation > 0.995);
        assert!(report.ttest.p_value < 1e-3);
        assert_eq!(report.ttest.degrees_of_freedom, 3);
    }

    #[test]
    fn test_outlier_is_removed_before_fitting() {
        let config = PipelineConfig::default();
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.2, 3.8, 6.1, 8.2, 9.9, 500.0];
        let report = config.run(&x, &y).unwrap();

        assert_eq!(report.observations_total, 6);
        assert_eq!(report.observations_used, 5);
        // Without the outlier the slope is near 2, not dragged toward 500
        assert!(report.fit.slope > 1.5 && report.fit.slope < 2.5);
    }

    #[test]
    fn test_domain_error_propagates() {
        let config = PipelineConfig {
            transform: Transform::NaturalLog,
            ..PipelineConfig::default()
        };
        let result = config.run(&[1.0, 0.0, 3.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::NonPositiveValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_mismatched_columns_are_rejected() {
        let result = PipelineConfig::default().run(&[1.0, 2.0], &[1.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::MismatchedInputs { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn test_too_few_observations() {
        let result = PipelineConfig::default().run(&[1.0, 2.0], &[1.5, 2.5]);
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientData { got: 2, min: 3 })
        ));
    }

    #[test]
    fn test_exactly_collinear_data_is_degenerate() {
        // A full report includes the t-test, which refuses an exact fit
        let result = PipelineConfig::default().run(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!(matches!(result, Err(AnalysisError::ZeroResidualVariance)));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let config = PipelineConfig::default();
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.1, 3.9, 6.2, 7.8, 10.1];
        let report = config.run(&x, &y).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"observations_used\":5"));
    }
}
