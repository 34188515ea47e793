//! # Immunize Math
//!
//! Numerical building blocks for the Immunize fixed income library.
//!
//! This crate provides:
//!
//! - **Solvers**: Local root-finding (Newton-Raphson, Brent, Newton with Brent fallback)
//! - **Linear Algebra**: Dense Gaussian elimination with partial pivoting
//!
//! Every algorithm here has a bounded iteration count and reports failure
//! (non-convergence, singular systems) through [`MathError`] rather than
//! returning NaN.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod linear_algebra;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{max_abs_residual, solve_linear_system, LinearSystem};
    pub use crate::solvers::{
        brent, hybrid, newton_raphson, RootMethod, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
