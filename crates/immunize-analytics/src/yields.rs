//! Yield-to-maturity.
//!
//! The yield is the rate `r` at which the present value of the cash flows
//! equals the observed price. It is found with a local root finder started
//! from a configurable guess (5% by default) and capped at a fixed number of
//! iterations, so the call always terminates.
//!
//! For flows whose sign changes more than once, `PV(r) - price` can have
//! several roots. The solver returns whichever root its iteration reaches
//! from the initial guess; it does not search for all of them.
//!
//! # Usage
//!
//! ```rust
//! use immunize_analytics::cashflows::bond_cash_flow;
//! use immunize_analytics::yields::{yield_to_maturity, YieldSolver};
//! use immunize_math::solvers::RootMethod;
//!
//! let flows = bond_cash_flow(0.07, 6, 1.0, 1).unwrap();
//! let ytm = yield_to_maturity(0.953_771_203_360_387_8, &flows).unwrap();
//! assert!((ytm - 0.08).abs() < 1e-8);
//!
//! let result = YieldSolver::new()
//!     .with_initial_guess(0.10)
//!     .with_method(RootMethod::Hybrid)
//!     .solve(0.953_771_203_360_387_8, &flows)
//!     .unwrap();
//! assert!((result.yield_value - 0.08).abs() < 1e-8);
//! ```

use immunize_math::solvers::{hybrid, newton_raphson, RootMethod, SolverConfig, SolverResult};
use immunize_math::MathError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::accrual::Compounding;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::{present_value, present_value_derivative};

/// Default starting rate for the yield iteration.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Settings for [`YieldSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldConfig {
    /// Starting rate for the iteration.
    pub initial_guess: f64,
    /// Compounding used when discounting.
    pub compounding: Compounding,
    /// Root finder to run.
    pub method: RootMethod,
    /// Bracket for the Brent fallback of [`RootMethod::Hybrid`].
    pub bounds: Option<(f64, f64)>,
    /// Tolerance and iteration cap.
    pub solver: SolverConfig,
}

impl Default for YieldConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            compounding: Compounding::Annual,
            method: RootMethod::Newton,
            bounds: None,
            solver: SolverConfig::default(),
        }
    }
}

/// Outcome of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// The solved annual rate.
    pub yield_value: f64,
    /// Root-finder iterations used.
    pub iterations: u32,
    /// `PV(yield) - price` at the solution.
    pub residual: f64,
}

impl From<SolverResult> for YieldResult {
    fn from(result: SolverResult) -> Self {
        Self {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        }
    }
}

/// Solves for the rate that prices a cash-flow sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YieldSolver {
    config: YieldConfig,
}

impl YieldSolver {
    /// Creates a solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver from explicit settings.
    #[must_use]
    pub fn with_config(config: YieldConfig) -> Self {
        Self { config }
    }

    /// Sets the starting rate.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.config.initial_guess = guess;
        self
    }

    /// Sets the compounding frequency used for discounting.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.config.compounding = compounding;
        self
    }

    /// Sets the root finder.
    #[must_use]
    pub fn with_method(mut self, method: RootMethod) -> Self {
        self.config.method = method;
        self
    }

    /// Sets the Brent fallback bracket.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.config.bounds = Some((lower, upper));
        self
    }

    /// Sets tolerance and iteration cap.
    #[must_use]
    pub fn with_solver_config(mut self, solver: SolverConfig) -> Self {
        self.config.solver = solver;
        self
    }

    /// The active settings.
    #[must_use]
    pub fn config(&self) -> &YieldConfig {
        &self.config
    }

    /// Finds `r` such that `present_value(cash_flows, r, m) == price`.
    ///
    /// # Errors
    ///
    /// - [`AnalyticsError::Domain`] for a non-finite price or guess, or zero frequency
    /// - [`AnalyticsError::Convergence`] if the root finder fails or the
    ///   iteration cap is reached
    pub fn solve(&self, price: f64, cash_flows: &[f64]) -> AnalyticsResult<YieldResult> {
        if !price.is_finite() {
            return Err(AnalyticsError::domain(format!("price {price} is not finite")));
        }
        if !self.config.initial_guess.is_finite() {
            return Err(AnalyticsError::domain("initial yield guess is not finite"));
        }
        let m = self.config.compounding.periods_per_year();
        // Validates m once so the closures below cannot fail on it
        present_value(cash_flows, self.config.initial_guess, m)?;

        let f = |r: f64| present_value(cash_flows, r, m).map_or(f64::NAN, |pv| pv - price);
        let df = |r: f64| present_value_derivative(cash_flows, r, m).unwrap_or(f64::NAN);

        let outcome = match self.config.method {
            RootMethod::Newton => {
                newton_raphson(f, df, self.config.initial_guess, &self.config.solver)
            }
            RootMethod::Hybrid => hybrid(
                f,
                df,
                self.config.initial_guess,
                self.config.bounds,
                &self.config.solver,
            ),
        };

        match outcome {
            Ok(result) if result.root.is_finite() => {
                debug!(
                    "yield solved: {:.10} after {} iterations (residual {:.2e})",
                    result.root, result.iterations, result.residual
                );
                Ok(result.into())
            }
            Ok(result) => Err(AnalyticsError::convergence(MathError::convergence_failed(
                result.iterations,
                result.residual,
            ))),
            Err(e) => {
                warn!("yield solver failed for price {price}: {e}");
                Err(AnalyticsError::convergence(e))
            }
        }
    }
}

/// Yield-to-maturity with default settings: annual compounding, 5% initial
/// guess, Newton-Raphson, tolerance `1e-10`, at most 100 iterations.
///
/// # Errors
///
/// Returns [`AnalyticsError::Convergence`] if no root is reached.
pub fn yield_to_maturity(price: f64, cash_flows: &[f64]) -> AnalyticsResult<f64> {
    Ok(YieldSolver::default().solve(price, cash_flows)?.yield_value)
}
