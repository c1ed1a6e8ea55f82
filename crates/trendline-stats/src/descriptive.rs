use crate::quantiles;

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and dispersion
/// for a dataset of `f64` values. The variance and standard deviation use the
/// sample formula (divisor `n - 1`); the population counterpart (divisor `n`)
/// is available through [`population_std_dev`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DescriptiveStats {
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset (interpolated for even counts).
    pub median: f64,
    /// The sample variance of the dataset (divisor `n - 1`; `0.0` for `n = 1`).
    pub variance: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use trendline_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trendline_stats::descriptive::DescriptiveStats;
    /// let mut values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// values.sort_by(f64::total_cmp);
    /// let stats = DescriptiveStats::from_sorted(&values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = quantiles::quantile_from_sorted(sorted_values, 0.5);
        let variance = if count > 1 {
            sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };
        let std_dev = variance.sqrt();

        Some(Self {
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

/// Computes the population standard deviation (divisor `n`) of the values.
///
/// Returns `0.0` for an empty slice. The input does not need to be sorted.
///
/// # Examples
///
/// ```
/// use trendline_stats::descriptive::population_std_dev;
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_std_dev(&values) - 2.0).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_sample_variance_divisor() {
        // Sample variance of [1, 2, 3, 4, 5] is 10 / 4 = 2.5
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((stats.variance - 2.5).abs() < 1e-12);
        assert!((stats.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_median_interpolates_even_counts() {
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.median - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_population_vs_sample_std_dev() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = DescriptiveStats::new(values).unwrap();
        // Population divisor n, sample divisor n - 1
        let expected_pop = (10.0f64 / 5.0).sqrt();
        assert!((population_std_dev(&values) - expected_pop).abs() < 1e-12);
        assert!(population_std_dev(&values) < stats.std_dev);
    }

    #[test]
    fn test_population_std_dev_empty() {
        assert_eq!(population_std_dev(&[]), 0.0);
    }
}
