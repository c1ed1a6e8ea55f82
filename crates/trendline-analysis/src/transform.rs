//! Element-wise transforms applied to raw columns before analysis.
//!
//! Exploratory regression on strongly skewed data (campaign spending, vote
//! counts, prices) is usually run on the log scale. The transform is a
//! configuration value of the pipeline rather than a hard-coded step, so the
//! same pipeline serves both raw and log-scale analyses.

use crate::{error::AnalysisError, sample::Sample};

/// A monotonic transform applied element-wise to a column.
///
/// # Examples
///
/// ```
/// use trendline_analysis::transform::Transform;
///
/// let transformed = Transform::NaturalLog.apply(&[1.0, std::f64::consts::E]).unwrap();
/// assert!((transformed[0] - 0.0).abs() < 1e-12);
/// assert!((transformed[1] - 1.0).abs() < 1e-12);
///
/// assert!(Transform::NaturalLog.apply(&[0.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Leave values unchanged.
    #[default]
    Identity,
    /// Natural logarithm; defined for strictly positive inputs only.
    NaturalLog,
}

impl Transform {
    /// Applies the transform element-wise, preserving order and length.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NonPositiveValue`] naming the first offending
    /// index when [`Transform::NaturalLog`] meets a value `<= 0`.
    pub fn apply(self, values: &[f64]) -> Result<Vec<f64>, AnalysisError> {
        match self {
            Self::Identity => Ok(values.to_vec()),
            Self::NaturalLog => values
                .iter()
                .enumerate()
                .map(|(index, &value)| {
                    if value > 0.0 {
                        Ok(value.ln())
                    } else {
                        Err(AnalysisError::NonPositiveValue { index, value })
                    }
                })
                .collect(),
        }
    }

    /// Applies the transform to both columns of a sample.
    ///
    /// # Errors
    ///
    /// Propagates the first domain error from either column.
    pub fn apply_sample(self, sample: &Sample) -> Result<Sample, AnalysisError> {
        let x = self.apply(sample.x())?;
        let y = self.apply(sample.y())?;
        Sample::from_columns(x, y)
    }
}
