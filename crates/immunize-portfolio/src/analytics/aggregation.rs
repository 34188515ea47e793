//! Value-weighted aggregation of instrument metrics.
//!
//! Portfolio duration and convexity are the present-value weighted averages
//! of the instruments' figures:
//!
//! ```text
//! Metric_portfolio = Σ(v_i × metric_i) / Σ(v_i)
//! ```
//!
//! Values may be negative (short positions). The inputs are parallel slices,
//! so each function checks that they line up before combining them.

use crate::error::{PortfolioError, PortfolioResult};

/// A net value is treated as zero when it is this small relative to the
/// gross value `Σ|v_i|`.
const ZERO_TOTAL_RELATIVE: f64 = 1e-12;

/// Sum of the instrument present values. Zero for an empty portfolio.
#[must_use]
pub fn portfolio_present_value(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Value-weighted portfolio duration.
///
/// # Errors
///
/// - [`PortfolioError::LengthMismatch`] if the slices differ in length
/// - [`PortfolioError::DivisionByZero`] if the values net to zero, or to a
///   remainder negligible against their gross size
///
/// # Example
///
/// ```rust
/// use immunize_portfolio::analytics::portfolio_duration;
///
/// let d = portfolio_duration(&[60.0, 40.0], &[2.0, 7.0]).unwrap();
/// assert!((d - 4.0).abs() < 1e-12);
/// ```
pub fn portfolio_duration(values: &[f64], durations: &[f64]) -> PortfolioResult<f64> {
    weighted_average(values, durations, "portfolio duration")
}

/// Value-weighted portfolio convexity.
///
/// # Errors
///
/// - [`PortfolioError::LengthMismatch`] if the slices differ in length
/// - [`PortfolioError::DivisionByZero`] if the values net to zero, or to a
///   remainder negligible against their gross size
pub fn portfolio_convexity(values: &[f64], convexities: &[f64]) -> PortfolioResult<f64> {
    weighted_average(values, convexities, "portfolio convexity")
}

pub(crate) fn weighted_average(
    values: &[f64],
    metrics: &[f64],
    operation: &str,
) -> PortfolioResult<f64> {
    if values.len() != metrics.len() {
        return Err(PortfolioError::LengthMismatch {
            values: values.len(),
            metrics: metrics.len(),
        });
    }

    let total = portfolio_present_value(values);
    let gross: f64 = values.iter().map(|v| v.abs()).sum();
    if !total.is_finite() || gross == 0.0 || total.abs() <= ZERO_TOTAL_RELATIVE * gross {
        return Err(PortfolioError::division_by_zero(operation));
    }

    let weighted: f64 = values.iter().zip(metrics).map(|(v, m)| v * m).sum();
    Ok(weighted / total)
}
