//! Exploratory linear regression over paired observations
//!
//! This crate implements the statistical pipeline behind trendline: cleaning
//! a bivariate dataset, fitting an ordinary least-squares line, summarizing
//! both axes, and testing whether the fitted slope is significantly different
//! from zero.
//!
//! # Overview
//!
//! The pipeline runs strictly downstream, with no state held between stages:
//!
//! 1. **Transform** ([`transform::Transform`]): optional natural-log transform
//!    of both axes, for data whose relationship is linear on the log scale
//! 2. **Outlier removal** ([`outlier::OutlierPolicy`]): IQR fences on the
//!    response column; pairs whose y value falls outside are dropped
//! 3. **Regression** ([`regression::FitResult`]): least-squares slope,
//!    intercept, Pearson correlation, standard error, and p-value
//! 4. **Diagnostics** ([`diagnostics::DiagnosticsReport`]): per-axis means,
//!    standard deviations, quartiles, fences, and the fit's residuals
//! 5. **Significance** ([`ttest::TTestResult`]): two-tailed t-test of the
//!    null hypothesis that the true slope is zero
//!
//! Both the regression and the diagnostics derive their line from the single
//! shared OLS routine ([`regression::LineFit`]), so their coefficients agree
//! exactly rather than within a tolerance.
//!
//! Every stage is a pure function of its inputs. All failures are
//! deterministic precondition violations reported as [`error::AnalysisError`];
//! nothing is retried, and no partial report is ever produced.
//!
//! # Examples
//!
//! ## Running the full pipeline
//!
//! ```
//! use trendline_analysis::{pipeline::PipelineConfig, transform::Transform};
//!
//! // Spending-style data: log-log linear
//! let x = [1.0, 2.0, 4.0, 8.0, 16.0];
//! let y = [2.0, 4.1, 7.9, 16.5, 31.0];
//!
//! let config = PipelineConfig {
//!     transform: Transform::NaturalLog,
//!     ..PipelineConfig::default()
//! };
//! let report = config.run(&x, &y).unwrap();
//!
//! println!(
//!     "y = {:.3}x + {:.3} (r = {:.4}, p = {:.2e})",
//!     report.fit.slope, report.fit.intercept, report.fit.correlation, report.ttest.p_value,
//! );
//! ```
//!
//! ## Using the stages directly
//!
//! ```
//! use trendline_analysis::{
//!     diagnostics::DiagnosticsReport, outlier::OutlierPolicy, regression::FitResult,
//!     sample::Sample, ttest,
//! };
//!
//! let sample = Sample::from_columns(
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![1.1, 1.9, 3.2, 100.0],
//! ).unwrap();
//!
//! let clean = OutlierPolicy::default().apply(&sample).unwrap();
//! assert_eq!(clean.len(), 3);
//!
//! let fit = FitResult::fit(&clean).unwrap();
//! let report = DiagnosticsReport::summarize(&clean).unwrap();
//! assert_eq!(fit.slope, report.slope);
//! ```

pub mod diagnostics;
pub mod error;
pub mod outlier;
pub mod pipeline;
pub mod regression;
pub mod sample;
pub mod transform;
pub mod ttest;
