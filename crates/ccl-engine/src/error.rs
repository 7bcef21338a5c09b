//! Error types for the reconciliation engine.

use thiserror::Error;

/// Errors raised by engine computations.
///
/// All variants are raised synchronously at the point of the offending
/// computation and propagate unmodified. The engine never coerces invalid
/// inputs (a non-positive sigma is rejected, not clamped). A failing
/// validation verdict is deliberately *not* an error; see
/// [`crate::ValidationVerdict`].
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A measurement has a non-positive or non-finite sigma, or a non-finite value.
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    /// A penalty scale constant is negative or non-finite.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A reduction or leave-one-out step received too few measurements.
    #[error("insufficient data: required {required} measurements, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;
