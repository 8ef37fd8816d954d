//! Error types for the anofox-anomaly library.

use crate::core::RepresentationKind;
use thiserror::Error;

/// Result type alias for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

/// Errors that can occur while building or running an anomaly detector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnomalyError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// A component could not be configured from the given options.
    #[error("invalid configuration for `{parameter}`: {message}")]
    Configuration { parameter: String, message: String },

    /// Subsequence bounds are given in the wrong order.
    #[error("subsequence order is wrong: [{start}, {end}]")]
    SubsequenceOrder { start: usize, end: usize },

    /// Subsequence is not contained in the sequence.
    #[error("subsequence [{start}, {end}] not in sequence interval [0, {sequence_end}]")]
    SubsequenceBounds {
        start: usize,
        end: usize,
        sequence_end: usize,
    },

    /// Representation target dimension is not smaller than the source dimension.
    #[error("target dimension ({target}) must be smaller than original dimension ({original})")]
    Dimension { target: usize, original: usize },

    /// Continuous distance given inputs of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Input has the wrong representation kind.
    #[error("type mismatch: expected {expected} input, got {got}")]
    TypeMismatch {
        expected: RepresentationKind,
        got: RepresentationKind,
    },

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl AnomalyError {
    /// Shorthand for a configuration error.
    pub fn config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        AnomalyError::Configuration {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Qualify a configuration error with the component it came from.
    ///
    /// `width` raised while building `reference_filter` becomes
    /// `reference_filter.width`. Other variants are returned unchanged.
    pub fn in_component(self, component: &str) -> Self {
        match self {
            AnomalyError::Configuration { parameter, message } => AnomalyError::Configuration {
                parameter: format!("{component}.{parameter}"),
                message,
            },
            other => other,
        }
    }
}
