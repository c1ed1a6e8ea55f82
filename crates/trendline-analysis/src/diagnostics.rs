//! Two-variable descriptive diagnostics around a fitted line.
//!
//! The report carries, for each axis, the classic exploratory summary (mean,
//! sample standard deviation, quartiles, IQR fence) plus the fitted line's
//! residuals. Residuals come from the same [`LineFit`](crate::regression::LineFit)
//! routine the regression result uses, so the slope and intercept embedded
//! here are identical to the regression's, not merely close.
//!
//! Divisor conventions: axis standard deviations use the sample formula
//! (`n - 1`); the residual standard deviation uses the population formula
//! (`n`). The latter feeds the slope t-test's standard error.

use trendline_stats::{
    descriptive::{self, DescriptiveStats},
    quantiles::{Fence, Quartiles},
};

use crate::{
    error::AnalysisError,
    outlier::DEFAULT_FENCE_MULTIPLIER,
    regression::LineFit,
    sample::Sample,
};

/// Descriptive summary of one axis of a sample.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisSummary {
    /// Arithmetic mean of the axis values.
    pub mean: f64,
    /// Sample standard deviation (divisor `n - 1`).
    pub std_dev: f64,
    /// First and third quartiles.
    pub quartiles: Quartiles,
    /// IQR outlier fence. For the x axis this is report-only; filtering is
    /// driven by the y fence alone.
    pub fence: Fence,
}

impl AxisSummary {
    fn from_values(values: &[f64], fence_multiplier: f64) -> Result<Self, AnalysisError> {
        let stats = DescriptiveStats::new(values.iter().copied()).ok_or(
            AnalysisError::InsufficientData { got: 0, min: 1 },
        )?;
        let quartiles = Quartiles::new(values).ok_or(AnalysisError::InsufficientData {
            got: 0,
            min: 1,
        })?;
        Ok(Self {
            mean: stats.mean,
            std_dev: stats.std_dev,
            quartiles,
            fence: quartiles.fence(fence_multiplier),
        })
    }
}

/// Descriptive statistics and residual analysis for one sample.
///
/// # Examples
///
/// ```
/// use trendline_analysis::{diagnostics::DiagnosticsReport, sample::Sample};
///
/// let sample = Sample::from_columns(
///     vec![1.0, 2.0, 3.0],
///     vec![1.0, 2.0, 3.0],
/// ).unwrap();
/// let report = DiagnosticsReport::from_sample(&sample, 1.5).unwrap();
///
/// assert!((report.slope - 1.0).abs() < 1e-12);
/// assert!(report.residuals.iter().all(|r| r.abs() < 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DiagnosticsReport {
    /// Summary of the x axis.
    pub x: AxisSummary,
    /// Summary of the y axis.
    pub y: AxisSummary,
    /// Slope of the least-squares line.
    pub slope: f64,
    /// Intercept of the least-squares line.
    pub intercept: f64,
    /// One residual per observation, in input order.
    pub residuals: Vec<f64>,
    /// Population standard deviation (divisor `n`) of the residuals.
    pub residual_std_dev: f64,
}

impl DiagnosticsReport {
    /// Summarizes a sample with the conventional 1.5 IQR fences.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DiagnosticsReport::from_sample`].
    pub fn summarize(sample: &Sample) -> Result<Self, AnalysisError> {
        Self::from_sample(sample, DEFAULT_FENCE_MULTIPLIER)
    }

    /// Summarizes a sample, reporting fences at the given IQR multiplier.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::InsufficientData`] for fewer than 2 observations
    /// * [`AnalysisError::ZeroVariance`] when all x values coincide
    pub fn from_sample(sample: &Sample, fence_multiplier: f64) -> Result<Self, AnalysisError> {
        if sample.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                got: sample.len(),
                min: 2,
            });
        }

        let line = LineFit::fit(sample.x(), sample.y())?;
        let residuals = line.residuals(sample.x(), sample.y());
        let residual_std_dev = descriptive::population_std_dev(&residuals);

        Ok(Self {
            x: AxisSummary::from_values(sample.x(), fence_multiplier)?,
            y: AxisSummary::from_values(sample.y(), fence_multiplier)?,
            slope: line.slope,
            intercept: line.intercept,
            residuals,
            residual_std_dev,
        })
    }

    /// Number of observations the report was computed from.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.residuals.len()
    }
}
