//! Generalized rate-sensitivity moments.
//!
//! ## Formula
//!
//! ```text
//! order 1 : (1/P)       Σ_{i=1..N} (i/m) c_i / a^i
//! order n : (1/(P a^n)) Σ_{i=1..N} i(i+1)…(i+n-1) c_i / (m^n a^i)
//! ```
//!
//! where `a = 1 + r/m` and `P` is the present value. Order 1 is Macaulay
//! duration and order 2 is convexity; higher orders supply extra matching
//! conditions when immunizing with more than three bonds.

use crate::accrual::{accrue_one_period, check_frequency};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::nonzero_present_value;

/// Order-`order` rate-sensitivity moment of `cash_flows` at rate `r`.
///
/// # Errors
///
/// - [`AnalyticsError::Domain`] if `m == 0` or `order == 0`
/// - [`AnalyticsError::DivisionByZero`] if the present value is zero
pub fn rate_moment(cash_flows: &[f64], r: f64, m: u32, order: u32) -> AnalyticsResult<f64> {
    if order == 0 {
        return Err(AnalyticsError::domain("moment order must be at least 1"));
    }
    let exponent = i32::try_from(order)
        .map_err(|_| AnalyticsError::domain(format!("moment order {order} is too large")))?;
    check_frequency(m)?;

    let operation = match order {
        1 => "duration",
        2 => "convexity",
        _ => "rate moment",
    };
    let price = nonzero_present_value(cash_flows, r, m, operation)?;
    let period = accrue_one_period(r, m)?;
    let scale = f64::from(m).powi(exponent);

    let mut discount = 1.0;
    let mut sum = 0.0;
    for (i, c) in cash_flows.iter().enumerate().skip(1) {
        discount *= period;
        sum += rising_factorial(i, order) * c / (scale * discount);
    }

    let normalizer = if order == 1 {
        price
    } else {
        price * period.powi(exponent)
    };
    Ok(sum / normalizer)
}

/// `i (i+1) … (i+n-1)`.
fn rising_factorial(i: usize, n: u32) -> f64 {
    (0..n).map(|k| (i + k as usize) as f64).product()
}
