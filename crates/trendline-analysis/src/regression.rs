//! Ordinary least-squares line fitting.
//!
//! [`LineFit`] is the single OLS routine the whole pipeline shares: the
//! regression result and the diagnostics residuals are both computed from it,
//! so the two always carry the same slope and intercept. [`FitResult`] wraps
//! the line with its quality metrics (Pearson correlation, standard error of
//! the slope, and the two-tailed p-value against a zero true slope).

use trendline_stats::student_t::StudentT;

use crate::{
    error::{AnalysisError, Axis},
    sample::Sample,
};

/// A fitted first-degree polynomial `y = slope * x + intercept`.
///
/// # Examples
///
/// ```
/// use trendline_analysis::regression::LineFit;
///
/// let line = LineFit::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
/// assert!((line.slope - 1.0).abs() < 1e-12);
/// assert!((line.intercept).abs() < 1e-12);
/// assert!((line.predict(10.0) - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

impl LineFit {
    /// Fits a least-squares line through the observations.
    ///
    /// slope = S_xy / S_xx, intercept = mean(y) - slope * mean(x), with
    /// S_xy = sum((x - mean(x)) * (y - mean(y))) and
    /// S_xx = sum((x - mean(x))^2).
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::MismatchedInputs`] for columns of different length
    /// * [`AnalysisError::InsufficientData`] for fewer than 2 observations
    /// * [`AnalysisError::ZeroVariance`] when all x values coincide
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, AnalysisError> {
        if x.len() != y.len() {
            return Err(AnalysisError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                got: x.len(),
                min: 2,
            });
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let mut s_xx = 0.0;
        let mut s_xy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            s_xx += (xi - mean_x) * (xi - mean_x);
            s_xy += (xi - mean_x) * (yi - mean_y);
        }

        if s_xx == 0.0 {
            return Err(AnalysisError::ZeroVariance { axis: Axis::X });
        }

        let slope = s_xy / s_xx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Evaluates the line at `x`.
    #[must_use]
    pub fn predict(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Residuals `y - predict(x)` for each observation, in input order.
    #[must_use]
    pub fn residuals(self, x: &[f64], y: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(y)
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }
}

/// A least-squares fit with its quality and significance metrics.
///
/// Mirrors the classic five-value regression summary: slope, intercept,
/// Pearson correlation, two-tailed p-value for the slope, and the standard
/// error of the slope estimate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitResult {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Pearson correlation coefficient between x and y.
    pub correlation: f64,
    /// Two-tailed p-value for the null hypothesis of a zero true slope.
    pub p_value: f64,
    /// Standard error of the slope estimate.
    pub standard_error: f64,
}

impl FitResult {
    /// Fits the sample and derives the fit's significance byproducts.
    ///
    /// The standard error is `sqrt(SSE / (n - 2)) / sqrt(S_xx)` and the
    /// p-value is `2 * SF_t(|slope| / SE, n - 2)`, both computed from this
    /// fit's own residual variance.
    ///
    /// An exactly collinear sample has zero residual variance; the result
    /// then reports `standard_error = 0` together with `p_value = 0` for a
    /// non-zero slope (the relationship is exact) or `p_value = 1` for a zero
    /// slope (constant y carries no evidence against the null), rather than
    /// propagating infinities.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::InsufficientData`] for fewer than 3 observations
    ///   (the p-value needs `df = n - 2 >= 1`)
    /// * [`AnalysisError::ZeroVariance`] when all x values coincide
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(sample: &Sample) -> Result<Self, AnalysisError> {
        let n = sample.len();
        if n < 3 {
            return Err(AnalysisError::InsufficientData { got: n, min: 3 });
        }

        let (x, y) = (sample.x(), sample.y());
        let line = LineFit::fit(x, y)?;

        let nf = n as f64;
        let mean_x = x.iter().sum::<f64>() / nf;
        let mean_y = y.iter().sum::<f64>() / nf;
        let mut s_xx = 0.0;
        let mut s_yy = 0.0;
        let mut s_xy = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            s_xx += (xi - mean_x) * (xi - mean_x);
            s_yy += (yi - mean_y) * (yi - mean_y);
            s_xy += (xi - mean_x) * (yi - mean_y);
        }

        // Constant y yields an undefined Pearson denominator; report r = 0
        let correlation = if s_yy == 0.0 {
            0.0
        } else {
            s_xy / (s_xx * s_yy).sqrt()
        };

        let sse = line
            .residuals(x, y)
            .iter()
            .map(|r| r * r)
            .sum::<f64>();
        let df = nf - 2.0;

        let (standard_error, p_value) = if sse == 0.0 {
            (0.0, if line.slope == 0.0 { 1.0 } else { 0.0 })
        } else {
            let se = (sse / df / s_xx).sqrt();
            let t = line.slope / se;
            let dist = StudentT::new(df)
                .ok_or(AnalysisError::InsufficientData { got: n, min: 3 })?;
            (se, 2.0 * dist.sf(t.abs()))
        };

        Ok(Self {
            slope: line.slope,
            intercept: line.intercept,
            correlation,
            p_value,
            standard_error,
        })
    }

    /// The fitted line alone, without the quality metrics.
    #[must_use]
    pub fn line(&self) -> LineFit {
        LineFit {
            slope: self.slope,
            intercept: self.intercept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: &[f64], y: &[f64]) -> Sample {
        Sample::from_columns(x.to_vec(), y.to_vec()).unwrap()
    }

    #[test]
    fn test_line_fit_requires_two_points() {
        let result = LineFit::fit(&[1.0], &[1.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientData { got: 1, min: 2 })
        ));
    }

    #[test]
    fn test_line_fit_rejects_constant_x() {
        let result = LineFit::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(AnalysisError::ZeroVariance { axis: Axis::X })
        ));
    }

    #[test]
    fn test_exact_line_through_origin() {
        let line = LineFit::fit(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!((line.slope - 1.0).abs() < 1e-12);
        assert!(line.intercept.abs() < 1e-12);
        for r in line.residuals(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]) {
            assert!(r.abs() < 1e-12);
        }
    }

    #[test]
    fn test_known_slope_and_intercept() {
        // y = 2x + 1 exactly
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = x.map(|v| 2.0 * v + 1.0);
        let fit = FitResult::fit(&sample(&x, &y)).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.correlation - 1.0).abs() < 1e-12);
        assert_eq!(fit.standard_error, 0.0);
        assert_eq!(fit.p_value, 0.0);
    }

    #[test]
    fn test_noisy_fit_matches_closed_form() {
        // x = [1..5], y = [2.1, 3.9, 6.2, 7.8, 10.1]:
        // S_xy = 19.9, S_xx = 10, so slope = 1.99 and intercept = 0.05.
        // SSE = 0.107, df = 3, so SE = sqrt(0.107 / 3 / 10) = 0.0597215...
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.1, 3.9, 6.2, 7.8, 10.1];
        let fit = FitResult::fit(&sample(&x, &y)).unwrap();
        assert!((fit.slope - 1.99).abs() < 1e-9);
        assert!((fit.intercept - 0.05).abs() < 1e-9);
        assert!((fit.correlation - 0.998_652).abs() < 1e-5);
        assert!((fit.standard_error - 0.059_721_5).abs() < 1e-5);
        // t = slope / SE is about 33.3; at df = 3 the two-tailed p sits
        // just below 1e-4
        assert!(fit.p_value > 1e-6 && fit.p_value < 1e-4);
    }

    #[test]
    fn test_three_point_exact_line() {
        let fit = FitResult::fit(&sample(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(fit.slope, 1.0);
        assert_eq!(fit.intercept, 0.0);
        assert_eq!(fit.correlation, 1.0);
        assert_eq!(fit.standard_error, 0.0);
        assert_eq!(fit.p_value, 0.0);
    }

    #[test]
    fn test_fit_result_requires_three_points() {
        let result = FitResult::fit(&sample(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientData { got: 2, min: 3 })
        ));
    }

    #[test]
    fn test_constant_y_reports_zero_correlation() {
        let fit = FitResult::fit(&sample(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0])).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.correlation, 0.0);
        assert_eq!(fit.p_value, 1.0);
    }

    #[test]
    fn test_negative_relationship() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.1, 3.9, 2.0];
        let fit = FitResult::fit(&sample(&x, &y)).unwrap();
        assert!(fit.slope < 0.0);
        assert!(fit.correlation < -0.99);
        assert!(fit.p_value < 0.01);
    }

    #[test]
    fn test_line_accessor_round_trips() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.1, 3.9, 6.2, 7.8, 10.1];
        let fit = FitResult::fit(&sample(&x, &y)).unwrap();
        let line = fit.line();
        assert_eq!(line.slope, fit.slope);
        assert_eq!(line.intercept, fit.intercept);
    }
}
