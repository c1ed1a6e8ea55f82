use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the data range into equal-width bins and counts the
/// frequency of values falling into each bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
///
/// Each bin represents a range of values and the count of data points falling
/// within that range.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// Bins are equal-width over `[min, max]`; the last bin's upper edge is
    /// widened by one ULP so the maximum value is counted.
    ///
    /// # Arguments
    ///
    /// * `values` - The data points to create the histogram from. Will be sorted internally.
    /// * `num_bins` - The number of bins to create.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trendline_stats::histogram::Histogram;
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
    /// let histogram = Histogram::new(values, 5);
    /// assert_eq!(histogram.bins.len(), 5);
    /// assert_eq!(histogram.total_count(), 10);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, num_bins: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], num_bins: usize) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() || num_bins == 0 {
            return Self { bins: vec![] };
        }

        let min = sorted_values[0];
        let max = sorted_values[sorted_values.len() - 1];

        // Degenerate range: all mass lands in one bin of nominal width 1
        let width = if (max - min).abs() < f64::EPSILON {
            1.0
        } else {
            (max - min) / num_bins as f64
        };

        let mut bins = (0..num_bins)
            .map(|bin_idx| {
                let start = min + bin_idx as f64 * width;
                let mut end = min + (bin_idx + 1) as f64 * width;
                if bin_idx == num_bins - 1 {
                    // Widen the final edge so values equal to max are binned
                    end = end.max(max).next_up();
                }
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &val in sorted_values {
            let idx = (((val - min) / width).floor() as usize).min(num_bins - 1);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Returns the total number of values counted across all bins.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Returns the largest single-bin count, or `0` for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
