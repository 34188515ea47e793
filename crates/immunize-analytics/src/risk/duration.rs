//! Macaulay and modified duration.
//!
//! ## Formula
//!
//! ```text
//! D_mac = (1/P) Σ_{i=1..N} (i/m) c_i / a^i
//! D_mod = D_mac / a
//! ```
//!
//! where `a = 1 + r/m`. Index 0 ("now") carries no time weight.

use super::moments::rate_moment;
use crate::accrual::accrue_one_period;
use crate::error::AnalyticsResult;

/// Macaulay duration of `cash_flows` in years.
///
/// # Errors
///
/// - [`AnalyticsError::Domain`](crate::AnalyticsError::Domain) if `m == 0`
/// - [`AnalyticsError::DivisionByZero`](crate::AnalyticsError::DivisionByZero)
///   if the present value is zero
///
/// # Example
///
/// ```rust
/// use immunize_analytics::cashflows::zero_coupon_cash_flow;
/// use immunize_analytics::risk::duration;
///
/// // A zero coupon bond's duration is its maturity
/// let flows = zero_coupon_cash_flow(5, 1.0);
/// assert!((duration(&flows, 0.05, 1).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn duration(cash_flows: &[f64], r: f64, m: u32) -> AnalyticsResult<f64> {
    rate_moment(cash_flows, r, m, 1)
}

/// Modified duration: Macaulay duration divided by `1 + r/m`.
pub fn modified_duration(cash_flows: &[f64], r: f64, m: u32) -> AnalyticsResult<f64> {
    Ok(duration(cash_flows, r, m)? / accrue_one_period(r, m)?)
}
