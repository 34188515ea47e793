//! Bond immunization.
//!
//! Chooses present-value allocations across candidate bonds so the portfolio
//! is worth the liability today and its rate sensitivities (duration,
//! convexity and, with more candidates, higher moments) match the targets.
//! The allocations come from one dense linear solve; a degenerate candidate
//! set is reported as [`PortfolioError::SingularMatrix`](crate::PortfolioError::SingularMatrix).

mod problem;
mod solution;

pub use problem::{Candidate, ImmunizationProblem, Liability};
pub use solution::ImmunizationSolution;
