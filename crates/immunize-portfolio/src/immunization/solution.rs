//! Solved immunization allocation.

use immunize_math::linear_algebra::max_abs_residual;
use nalgebra::{DMatrix, DVector};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{InstrumentMetrics, PortfolioMetrics};

/// The allocation that immunizes a liability, together with the system it solves.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmunizationSolution {
    /// Present value of the liability (`P0`).
    pub liability_value: f64,
    /// Present value to hold in each candidate. Negative entries are short positions.
    pub allocations: Vec<f64>,
    /// Face value to hold in each candidate (`allocation / P_j`).
    pub face_amounts: Vec<f64>,
    /// Metrics of one unit of face value of each candidate.
    pub candidates: Vec<InstrumentMetrics>,
    /// Coefficient matrix of the moment-matching system.
    pub matrix: DMatrix<f64>,
    /// Targets: `[P0, 0, 0, ...]`.
    pub rhs: DVector<f64>,
    /// `‖M x - b‖∞` at the solution.
    pub residual_norm: f64,
    /// Residual tolerance [`verify`](Self::verify) applies, relative to `max(1, ‖b‖∞)`.
    pub residual_tolerance: f64,
}

impl ImmunizationSolution {
    /// Total present value invested across all candidates.
    #[must_use]
    pub fn total_invested(&self) -> f64 {
        self.allocations.iter().sum()
    }

    /// Recomputes `‖M x - b‖∞` for the current allocations and checks it
    /// against `residual_tolerance × max(1, ‖b‖∞)`.
    ///
    /// Only the budget row scales with the liability, so an absolute bound
    /// would reject exact rescalings of a unit solution.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::ResidualTooLarge`] if the allocations no
    /// longer reproduce the targets.
    pub fn verify(&self) -> PortfolioResult<()> {
        let x = DVector::from_column_slice(&self.allocations);
        let residual = max_abs_residual(&self.matrix, &x, &self.rhs)?;
        let tolerance = self.residual_tolerance * self.rhs.amax().max(1.0);

        if residual.is_finite() && residual <= tolerance {
            Ok(())
        } else {
            Err(PortfolioError::ResidualTooLarge {
                residual,
                tolerance,
            })
        }
    }

    /// Per-candidate positions: unit metrics scaled by the face amounts held.
    #[must_use]
    pub fn holdings(&self) -> Vec<InstrumentMetrics> {
        self.candidates
            .iter()
            .zip(&self.face_amounts)
            .map(|(metrics, &face)| metrics.scaled(face))
            .collect()
    }

    /// Aggregated value, duration and convexity of the immunizing portfolio.
    pub fn portfolio_metrics(&self) -> PortfolioResult<PortfolioMetrics> {
        PortfolioMetrics::aggregate(&self.holdings())
    }
}
