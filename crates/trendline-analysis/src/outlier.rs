//! IQR-based outlier removal.
//!
//! Filtering is asymmetric on purpose: the fence is computed on the response
//! (y) column only, and a pair is dropped when its y value falls outside the
//! fence. The x column participates only through pairing. x fences are still
//! computed for reporting (see [`crate::diagnostics`]), they just never drive
//! filtering.

use trendline_stats::quantiles::{Fence, Quartiles};

use crate::{error::AnalysisError, sample::Sample};

/// Conventional IQR multiplier for outlier fences.
pub const DEFAULT_FENCE_MULTIPLIER: f64 = 1.5;

/// Outlier handling strategy for the pipeline.
///
/// # Examples
///
/// ```
/// use trendline_analysis::{outlier::OutlierPolicy, sample::Sample};
///
/// let sample = Sample::from_columns(
///     vec![1.0, 2.0, 3.0, 4.0],
///     vec![1.0, 2.0, 3.0, 100.0],
/// ).unwrap();
///
/// let filtered = OutlierPolicy::default().apply(&sample).unwrap();
/// assert_eq!(filtered.len(), 3);
/// assert_eq!(filtered.y(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlierPolicy {
    /// Keep every observation.
    None,
    /// Drop pairs whose y value lies outside the IQR fence.
    IqrFence {
        /// IQR multiplier defining the fence width.
        multiplier: f64,
    },
}

impl Default for OutlierPolicy {
    fn default() -> Self {
        Self::IqrFence {
            multiplier: DEFAULT_FENCE_MULTIPLIER,
        }
    }
}

impl OutlierPolicy {
    /// The fence multiplier this policy reports statistics with.
    ///
    /// [`OutlierPolicy::None`] reports the conventional 1.5 fence even though
    /// it never filters.
    #[must_use]
    pub fn fence_multiplier(self) -> f64 {
        match self {
            Self::None => DEFAULT_FENCE_MULTIPLIER,
            Self::IqrFence { multiplier } => multiplier,
        }
    }

    /// Applies the policy, returning the surviving pairs in their original
    /// relative order.
    ///
    /// The returned sample may be empty when every y value is an outlier;
    /// downstream stages reject such samples as insufficient data.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientData`] if the input sample is
    /// empty (no quartiles can be computed).
    pub fn apply(self, sample: &Sample) -> Result<Sample, AnalysisError> {
        match self {
            Self::None => Ok(sample.clone()),
            Self::IqrFence { multiplier } => {
                let fence = y_fence(sample, multiplier)?;
                Ok(Sample::from_pairs(
                    sample.pairs().filter(|&(_, y)| fence.contains(y)),
                ))
            }
        }
    }
}

/// Computes the y-column outlier fence for a sample.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] for an empty sample.
pub fn y_fence(sample: &Sample, multiplier: f64) -> Result<Fence, AnalysisError> {
    let quartiles =
        Quartiles::new(sample.y()).ok_or(AnalysisError::InsufficientData { got: 0, min: 1 })?;
    Ok(quartiles.fence(multiplier))
}
