//! Error types for the analytics engine.

use immunize_math::MathError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for accrual, pricing, yield and risk calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Input outside the domain of the calculation (e.g. zero compounding frequency).
    #[error("domain error: {reason}")]
    Domain {
        /// What was out of range.
        reason: String,
    },

    /// A present value used as a divisor is zero.
    #[error("division by zero in {operation}: present value is zero")]
    DivisionByZero {
        /// The calculation that needed the divisor.
        operation: String,
    },

    /// The yield root finder hit its iteration cap or diverged.
    #[error("yield solver failed to converge: {source}")]
    Convergence {
        /// Underlying solver failure.
        #[source]
        source: MathError,
    },
}

impl AnalyticsError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Wraps a root-finder failure.
    #[must_use]
    pub fn convergence(source: MathError) -> Self {
        Self::Convergence { source }
    }
}
