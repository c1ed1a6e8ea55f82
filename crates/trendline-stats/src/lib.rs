//! Numeric statistics utilities for the trendline project.
//!
//! This crate provides the domain-independent statistical tools the analysis
//! pipeline is built from:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation
//! - **Quantiles**: interpolated quantiles, quartiles, and IQR outlier fences
//! - **Histogram generation**: equal-width frequency distributions
//! - **Student's t distribution**: CDF/SF for slope significance testing
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`quantiles`]: Quantile computation, quartiles, and outlier fences
//! - [`histogram`]: Histogram construction for inspecting distributions
//! - [`student_t`]: Student's t distribution
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use trendline_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing quartiles and fences
//!
//! ```
//! use trendline_stats::quantiles::Quartiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let quartiles = Quartiles::new(&values).unwrap();
//! assert_eq!(quartiles.q1, 2.0);
//! assert_eq!(quartiles.q3, 4.0);
//!
//! let fence = quartiles.fence(1.5);
//! assert!(fence.contains(3.0));
//! assert!(!fence.contains(100.0));
//! ```
//!
//! ## Tail probabilities of the t distribution
//!
//! ```
//! use trendline_stats::student_t::StudentT;
//!
//! let t = StudentT::new(10.0).unwrap();
//! assert!((t.cdf(0.0) - 0.5).abs() < 1e-12);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod quantiles;
pub mod student_t;
