//! Convexity and second-order price estimates.
//!
//! ## Formula
//!
//! ```text
//! C = (1/(P a^2)) Σ_{i=1..N} i(i+1) c_i / (m^2 a^i)
//! ```
//!
//! where `a = 1 + r/m`.

use super::moments::rate_moment;
use crate::error::AnalyticsResult;

/// Convexity of `cash_flows` at rate `r`.
///
/// # Errors
///
/// - [`AnalyticsError::Domain`](crate::AnalyticsError::Domain) if `m == 0`
/// - [`AnalyticsError::DivisionByZero`](crate::AnalyticsError::DivisionByZero)
///   if the present value is zero
pub fn convexity(cash_flows: &[f64], r: f64, m: u32) -> AnalyticsResult<f64> {
    rate_moment(cash_flows, r, m, 2)
}

/// Second-order Taylor estimate of the change in `price` for a yield move `dy`.
///
/// `ΔP ≈ P (-D_mod dy + ½ C dy²)`
pub fn price_change_estimate(price: f64, modified_duration: f64, convexity: f64, dy: f64) -> f64 {
    price * (-modified_duration * dy + 0.5 * convexity * dy * dy)
}
