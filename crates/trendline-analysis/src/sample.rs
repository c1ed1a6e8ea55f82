//! Paired observation sequences.
//!
//! A [`Sample`] holds the aligned x and y columns every pipeline stage
//! operates on. Index alignment is established at construction and preserved
//! by every transform and filter step; the two columns can only be built or
//! rebuilt together.

use crate::error::AnalysisError;

/// An ordered sequence of paired (x, y) observations.
///
/// The two columns always have equal length; construction fails otherwise.
///
/// # Examples
///
/// ```
/// use trendline_analysis::sample::Sample;
///
/// let sample = Sample::from_columns(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.x(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Sample {
    /// Builds a sample from two aligned columns.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MismatchedInputs`] if the columns differ in
    /// length.
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Result<Self, AnalysisError> {
        if x.len() != y.len() {
            return Err(AnalysisError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Builds a sample from (x, y) pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendline_analysis::sample::Sample;
    ///
    /// let sample = Sample::from_pairs([(1.0, 1.0), (2.0, 4.0)]);
    /// assert_eq!(sample.y(), &[1.0, 4.0]);
    /// ```
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y) = pairs.into_iter().unzip();
        Self { x, y }
    }

    /// The x column.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y column.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The number of paired observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the sample holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the paired observations in order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_rejects_mismatched_lengths() {
        let result = Sample::from_columns(vec![1.0, 2.0], vec![1.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::MismatchedInputs { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let sample = Sample::from_pairs([(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(sample.x(), &[3.0, 1.0, 2.0]);
        assert_eq!(sample.y(), &[30.0, 10.0, 20.0]);
    }

    #[test]
    fn test_empty_sample() {
        let sample = Sample::from_columns(vec![], vec![]).unwrap();
        assert!(sample.is_empty());
        assert_eq!(sample.len(), 0);
    }

    #[test]
    fn test_pairs_iterates_aligned() {
        let sample = Sample::from_columns(vec![1.0, 2.0], vec![10.0, 20.0]).unwrap();
        let pairs = sample.pairs().collect::<Vec<_>>();
        assert_eq!(pairs, vec![(1.0, 10.0), (2.0, 20.0)]);
    }
}
