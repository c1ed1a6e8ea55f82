/// First and third quartiles of a dataset.
///
/// Quartiles are computed with linear interpolation between closest ranks,
/// the same convention pandas' `quantile` uses. The interquartile range
/// derived from them defines the outlier [`Fence`].
///
/// # Examples
///
/// ```
/// use trendline_stats::quantiles::Quartiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let quartiles = Quartiles::new(&values).unwrap();
/// assert_eq!(quartiles.q1, 2.0);
/// assert_eq!(quartiles.q3, 4.0);
/// assert_eq!(quartiles.iqr(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Quartiles {
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
}

impl Quartiles {
    /// Computes quartiles from pre-sorted values.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(Quartiles)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendline_stats::quantiles::Quartiles;
    ///
    /// let mut values = [4.0, 1.0, 3.0, 2.0];
    /// values.sort_by(f64::total_cmp);
    /// let quartiles = Quartiles::from_sorted(&values).unwrap();
    /// assert_eq!(quartiles.q1, 1.75);
    /// assert_eq!(quartiles.q3, 3.25);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        if sorted_values.is_empty() {
            return None;
        }
        Some(Self {
            q1: quantile_from_sorted(sorted_values, 0.25),
            q3: quantile_from_sorted(sorted_values, 0.75),
        })
    }

    /// Computes quartiles from unsorted values.
    ///
    /// This method will sort the values internally before computing quartiles.
    ///
    /// # Returns
    ///
    /// * `Some(Quartiles)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use trendline_stats::quantiles::Quartiles;
    ///
    /// let values = [3.0, 1.0, 4.0, 2.0, 5.0];
    /// let quartiles = Quartiles::new(&values).unwrap();
    /// assert_eq!(quartiles.q1, 2.0);
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Returns the interquartile range `q3 - q1`.
    #[must_use]
    pub fn iqr(self) -> f64 {
        self.q3 - self.q1
    }

    /// Returns the outlier fence at the given IQR multiplier.
    ///
    /// The fence spans `[q1 - multiplier * iqr, q3 + multiplier * iqr]`.
    /// The conventional multiplier for outlier classification is `1.5`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendline_stats::quantiles::Quartiles;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let fence = Quartiles::new(&values).unwrap().fence(1.5);
    /// assert_eq!(fence.lower, -1.0);
    /// assert_eq!(fence.upper, 7.0);
    /// ```
    #[must_use]
    pub fn fence(self, multiplier: f64) -> Fence {
        let iqr = self.iqr();
        Fence {
            lower: self.q1 - multiplier * iqr,
            upper: self.q3 + multiplier * iqr,
        }
    }
}

/// Lower and upper bounds beyond which a value is classified as an outlier.
///
/// Both bounds are inclusive: a value exactly at a bound is an inlier.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fence {
    /// The lower inlier bound.
    pub lower: f64,
    /// The upper inlier bound.
    pub upper: f64,
}

impl Fence {
    /// Returns `true` if `value` lies within the fence, bounds included.
    ///
    /// # Examples
    ///
    /// ```
    /// use trendline_stats::quantiles::Fence;
    ///
    /// let fence = Fence { lower: -1.0, upper: 7.0 };
    /// assert!(fence.contains(-1.0));
    /// assert!(fence.contains(7.0));
    /// assert!(!fence.contains(7.1));
    /// ```
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Computes a single quantile from sorted data.
///
/// This function uses linear interpolation between closest ranks: for a
/// dataset with n values, quantile `q` sits at rank `q * (n - 1)`, and
/// fractional ranks interpolate between the neighboring values.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `q` - The quantile to compute, in `[0, 1]`
///
/// # Returns
///
/// The interpolated value at the quantile. Returns `f64::NAN` if the input
/// is empty.
///
/// # Panics
///
/// Panics if `q` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use trendline_stats::quantiles::quantile_from_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_from_sorted(&values, 0.5), 2.5);
/// assert_eq!(quantile_from_sorted(&values, 0.25), 1.75);
/// assert_eq!(quantile_from_sorted(&values, 1.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_from_sorted(sorted_values: &[f64], q: f64) -> f64 {
    assert!((0.0..=1.0).contains(&q), "quantile must be in [0, 1]");

    if sorted_values.is_empty() {
        return f64::NAN;
    }
    if sorted_values.len() == 1 {
        return sorted_values[0];
    }

    let rank = q * (sorted_values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let fraction = rank - rank.floor();
    sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * fraction
}
