//! Two-tailed t-test for slope significance.
//!
//! Tests the null hypothesis that the true slope is zero. The standard error
//! follows the textbook estimator built from the diagnostics report:
//!
//! SE = s_resid / (sqrt(n - 1) * s_x)
//!
//! with s_resid the population residual standard deviation and s_x the sample
//! standard deviation of x. This deliberately differs from the standard error
//! inside [`FitResult`](crate::regression::FitResult) (which divides the
//! residual sum of squares by `n - 2`); the two agree up to a factor of
//! `sqrt(n / (n - 2))` and lead to the same conclusions on any sample large
//! enough to test.

use trendline_stats::student_t::StudentT;

use crate::{diagnostics::DiagnosticsReport, error::AnalysisError, sample::Sample};

/// Result of the slope significance test.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TTestResult {
    /// Standard error of the slope estimate.
    pub standard_error: f64,
    /// Observed t statistic, `slope / standard_error`.
    pub t_statistic: f64,
    /// Degrees of freedom, `n - 2`.
    pub degrees_of_freedom: usize,
    /// Two-tailed p-value against a zero true slope.
    pub p_value: f64,
}

impl TTestResult {
    /// Runs the test from an existing diagnostics report.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::InsufficientData`] when the report covers fewer
    ///   than 3 observations (`df = n - 2` must be positive)
    /// * [`AnalysisError::ZeroVariance`] when x carries no spread
    /// * [`AnalysisError::ZeroResidualVariance`] when the fit is exact and
    ///   the standard error collapses to zero
    #[expect(clippy::cast_precision_loss)]
    pub fn from_report(report: &DiagnosticsReport) -> Result<Self, AnalysisError> {
        let n = report.sample_size();
        if n <= 2 {
            return Err(AnalysisError::InsufficientData { got: n, min: 3 });
        }
        if report.x.std_dev == 0.0 {
            return Err(AnalysisError::ZeroVariance {
                axis: crate::error::Axis::X,
            });
        }

        let standard_error =
            report.residual_std_dev / (((n - 1) as f64).sqrt() * report.x.std_dev);
        if standard_error == 0.0 {
            return Err(AnalysisError::ZeroResidualVariance);
        }

        let degrees_of_freedom = n - 2;
        let t_statistic = report.slope / standard_error;
        let dist = StudentT::new(degrees_of_freedom as f64)
            .ok_or(AnalysisError::InsufficientData { got: n, min: 3 })?;
        let p_value = 2.0 * dist.sf(t_statistic.abs());

        Ok(Self {
            standard_error,
            t_statistic,
            degrees_of_freedom,
            p_value,
        })
    }
}

/// Convenience wrapper: summarizes the sample and tests the slope.
///
/// # Errors
///
/// Propagates the conditions of [`DiagnosticsReport::summarize`] and
/// [`TTestResult::from_report`].
///
/// # Examples
///
/// ```
/// use trendline_analysis::{sample::Sample, ttest};
///
/// let sample = Sample::from_columns(
///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![2.1, 3.9, 6.2, 7.8, 10.1],
/// ).unwrap();
/// let result = ttest::slope_ttest(&sample).unwrap();
///
/// assert_eq!(result.degrees_of_freedom, 3);
/// assert!(result.p_value < 0.001);
/// ```
pub fn slope_ttest(sample: &Sample) -> Result<TTestResult, AnalysisError> {
    let report = DiagnosticsReport::summarize(sample)?;
    TTestResult::from_report(&report)
}
