//! Hybrid root-finding algorithm.
//!
//! Combines Newton-Raphson with Brent's method for robust convergence.

use log::{debug, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// Newton iterations allowed before handing over to Brent.
const NEWTON_PHASE_MAX_ITERATIONS: u32 = 20;

/// Consecutive residual blow-ups tolerated in the Newton phase.
const MAX_DIVERGENCE: u32 = 3;

/// Hybrid root-finding algorithm.
///
/// Starts with Newton-Raphson for fast quadratic convergence, and falls back
/// to Brent's method if Newton diverges, hits a zero derivative, or produces
/// a non-finite iterate.
///
/// # Strategy
///
/// 1. Run Newton-Raphson for at most 20 iterations
/// 2. If the residual grows three times in a row, abandon Newton
/// 3. Run Brent on `bounds`, or on a bracket found by expanding around the guess
///
/// # Example
///
/// ```rust
/// use immunize_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();
/// assert!((f(result.root)).abs() < 1e-9);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let newton_error = match newton_with_monitoring(&f, &df, initial_guess, config) {
        Ok(result) => return Ok(result),
        Err(e) => e,
    };

    warn!("Newton phase failed ({newton_error}), falling back to Brent");

    let (a, b) = match bounds.or_else(|| find_bracket(&f, initial_guess)) {
        Some(bracket) => bracket,
        None => {
            return Err(MathError::invalid_input(
                "Newton-Raphson failed and no bracketing interval was found for Brent",
            ))
        }
    };

    debug!("Brent fallback on [{a}, {b}]");
    brent(&f, a, b, config)
}

/// Newton-Raphson with divergence detection.
fn newton_with_monitoring<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut prev_residual = f64::MAX;
    let mut divergence_count = 0;

    let max_iter = config.max_iterations.min(NEWTON_PHASE_MAX_ITERATIONS);

    for iteration in 0..max_iter {
        let fx = f(x);
        let residual = fx.abs();

        if !fx.is_finite() {
            return Err(MathError::convergence_failed(iteration, fx));
        }

        if residual < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if residual > prev_residual * 2.0 {
            divergence_count += 1;
            if divergence_count >= MAX_DIVERGENCE {
                return Err(MathError::convergence_failed(iteration, residual));
            }
        } else {
            divergence_count = 0;
        }
        prev_residual = residual;

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::convergence_failed(iteration + 1, residual));
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(max_iter, f(x).abs()))
}

/// Attempts to find a bracketing interval for the root.
///
/// Expands geometrically around the initial guess, skipping points where
/// `f` is not finite, and gives up once the half-width exceeds `1e6`.
pub fn find_bracket<F>(f: &F, initial_guess: f64) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let f_init = f(initial_guess);
    if !f_init.is_finite() {
        return None;
    }

    let mut delta = 0.1;
    while delta <= 1e6 {
        let left = initial_guess - delta;
        let right = initial_guess + delta;
        let f_left = f(left);
        let f_right = f(right);

        if f_left.is_finite() && f_left * f_init <= 0.0 {
            return Some((left, initial_guess));
        }
        if f_right.is_finite() && f_right * f_init <= 0.0 {
            return Some((initial_guess, right));
        }

        delta *= 2.0;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_fallback_to_brent() {
        // Zero derivative at the guess forces the fallback
        let f = |x: f64| x * x * x - 2.0 * x - 5.0;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let guess = (2.0_f64 / 3.0).sqrt();

        let result = hybrid(f, df, guess, Some((1.0, 3.0)), &SolverConfig::default()).unwrap();

        assert!(f(result.root).abs() < 1e-9);
    }

    #[test]
    fn test_auto_bracket_finding() {
        let f = |x: f64| x * x - 2.0;
        let df = |_x: f64| 0.0;

        let result = hybrid(f, df, 1.5, None, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_no_bracket_available() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 0.5, None, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_find_bracket() {
        let f = |x: f64| x - 10.0;
        let (a, b) = find_bracket(&f, 0.0).unwrap();

        assert!(f(a) * f(b) <= 0.0);
    }
}
