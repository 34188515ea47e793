//! # Immunize Portfolio
//!
//! Portfolio aggregation and bond immunization.
//!
//! This crate combines single-instrument figures from `immunize-analytics`:
//!
//! - **Aggregation**: value-weighted portfolio duration and convexity
//! - **Metric records**: [`InstrumentMetrics`](types::InstrumentMetrics) keeps
//!   each instrument's value, duration and convexity together so they cannot
//!   drift out of alignment
//! - **Immunization**: allocations across candidate bonds that match a
//!   liability's present value and rate moments
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all calculations are stateless with explicit inputs
//! - **Explicit failure**: misaligned inputs, zero totals and singular systems
//!   are errors, never NaN or an arbitrary answer
//!
//! ## Quick Start
//!
//! ```rust
//! use immunize_portfolio::prelude::*;
//!
//! let problem = ImmunizationProblem::new(
//!     Liability::zero_coupon(1.0, 7, 0.08),
//!     vec![
//!         Candidate::bond(0.07, 6),
//!         Candidate::bond(0.10, 6),
//!         Candidate::bond(0.02, 9),
//!     ],
//! )?;
//!
//! let solution = problem.solve()?;
//! let metrics = solution.portfolio_metrics()?;
//! assert!(metrics.duration.abs() < 1e-9);
//! # Ok::<(), PortfolioError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Portfolio present value, duration and convexity
//! - [`immunization`] - Liability, candidates, problem and solution
//! - [`types`] - Metric records and solver configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

pub mod analytics;
pub mod error;
pub mod immunization;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{portfolio_convexity, portfolio_duration, portfolio_present_value};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::immunization::{Candidate, ImmunizationProblem, ImmunizationSolution, Liability};
    pub use crate::types::{ImmunizationConfig, InstrumentMetrics, PortfolioMetrics};
}
