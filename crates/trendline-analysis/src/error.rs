//! Error types for the analysis pipeline.
//!
//! Every failure the pipeline can produce is a deterministic precondition
//! violation of the input data. Errors are reported synchronously to the
//! caller; nothing is retried and no partially-populated result is returned.

/// The axis a per-axis error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    #[display("x")]
    X,
    #[display("y")]
    Y,
}

/// Errors produced by the statistical pipeline.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    /// A logarithmic transform was applied to a value outside its domain.
    #[display("cannot take the logarithm of non-positive value {value} at index {index}")]
    NonPositiveValue { index: usize, value: f64 },

    /// The x and y columns have different lengths.
    #[display("input columns differ in length: x has {x_len} values, y has {y_len}")]
    MismatchedInputs { x_len: usize, y_len: usize },

    /// Too few observations for the requested computation.
    #[display("insufficient data: {got} observations, at least {min} required")]
    InsufficientData { got: usize, min: usize },

    /// All observations on one axis share a single value.
    #[display("the {axis} values have zero variance; no line can be fitted")]
    ZeroVariance { axis: Axis },

    /// The fit is exact, so the slope test's standard error is zero.
    #[display("residuals have zero variance; the slope test is degenerate")]
    ZeroResidualVariance,
}
