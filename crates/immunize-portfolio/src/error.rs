//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the portfolio crate.

use immunize_analytics::AnalyticsError;
use immunize_math::MathError;
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Parallel value and metric arrays are not positionally aligned.
    #[error("Length mismatch: {values} values but {metrics} metrics")]
    LengthMismatch {
        /// Number of present values supplied.
        values: usize,
        /// Number of per-instrument metrics supplied.
        metrics: usize,
    },

    /// Division by zero in aggregation.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// The immunization system has no unique solution.
    #[error("Singular immunization system: {source}")]
    SingularMatrix {
        /// Underlying elimination failure.
        #[source]
        source: MathError,
    },

    /// The solved allocation does not reproduce the targets.
    #[error("Allocation residual {residual:.2e} exceeds tolerance {tolerance:.2e}")]
    ResidualTooLarge {
        /// Largest absolute component of `M x - b`.
        residual: f64,
        /// Configured tolerance.
        tolerance: f64,
    },

    /// Invalid problem definition.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// The reason the input is invalid.
        reason: String,
    },

    /// Numerical failure in the linear solve other than singularity.
    #[error("Numerical failure: {0}")]
    Math(#[source] MathError),

    /// Failure while computing instrument analytics.
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

impl PortfolioError {
    /// Create a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for PortfolioError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::SingularMatrix { .. } => Self::SingularMatrix { source: err },
            other => Self::Math(other),
        }
    }
}
