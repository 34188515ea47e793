//! Present value of periodic cash flows.
//!
//! Period `i` is discounted by the `i`-th power of the *annual* growth factor
//! `A = (1 + r/m)^m`:
//!
//! ```text
//! PV = Σ_{i=0..N} c_i / A^i
//! ```

use crate::accrual::{accrue_one_period, accrue_one_year, check_frequency};
use crate::error::{AnalyticsError, AnalyticsResult};

/// A present value is treated as zero when it is this small relative to the
/// gross discounted magnitude of the flows.
const ZERO_PRICE_RELATIVE: f64 = 1e-12;

/// Present value of `cash_flows` at annual rate `r` compounded `m` times per year.
///
/// An empty or all-zero sequence has present value 0.
///
/// # Errors
///
/// - [`AnalyticsError::Domain`] if `m == 0`
/// - [`AnalyticsError::DivisionByZero`] if the annual growth factor is zero
///   and the flows are non-trivial
///
/// # Example
///
/// ```rust
/// use immunize_analytics::cashflows::bond_cash_flow;
/// use immunize_analytics::pricing::present_value;
///
/// let flows = bond_cash_flow(0.07, 6, 1.0, 1).unwrap();
/// let pv = present_value(&flows, 0.08, 1).unwrap();
/// assert!((pv - 0.9538).abs() < 1e-4);
/// ```
pub fn present_value(cash_flows: &[f64], r: f64, m: u32) -> AnalyticsResult<f64> {
    Ok(discounted_sums(cash_flows, r, m)?.0)
}

/// Derivative of [`present_value`] with respect to `r`.
///
/// ```text
/// dPV/dr = -Σ i c_i A^{-(i+1)} (1 + r/m)^{m-1}
/// ```
pub fn present_value_derivative(cash_flows: &[f64], r: f64, m: u32) -> AnalyticsResult<f64> {
    let periods = check_frequency(m)?;
    let annual = accrue_one_year(r, m)?;
    let slope = accrue_one_period(r, m)?.powi(periods - 1);
    if annual == 0.0 {
        return Err(AnalyticsError::division_by_zero("present value derivative"));
    }

    let mut discount = annual;
    let mut sum = 0.0;
    for (i, c) in cash_flows.iter().enumerate().skip(1) {
        discount *= annual;
        sum -= i as f64 * c / discount;
    }
    Ok(sum * slope)
}

/// Present value for use as a divisor.
///
/// Fails with [`AnalyticsError::DivisionByZero`] when the value is zero, or
/// so small against the gross flows that dividing by it is meaningless.
pub(crate) fn nonzero_present_value(
    cash_flows: &[f64],
    r: f64,
    m: u32,
    operation: &str,
) -> AnalyticsResult<f64> {
    let (pv, gross) = discounted_sums(cash_flows, r, m)?;
    if !pv.is_finite() {
        return Err(AnalyticsError::domain(format!(
            "present value is not finite at rate {r} in {operation}"
        )));
    }
    if gross == 0.0 || pv.abs() <= ZERO_PRICE_RELATIVE * gross {
        return Err(AnalyticsError::division_by_zero(operation));
    }
    Ok(pv)
}

/// Returns (Σ c_i / A^i, Σ |c_i| / A^i).
fn discounted_sums(cash_flows: &[f64], r: f64, m: u32) -> AnalyticsResult<(f64, f64)> {
    let annual = accrue_one_year(r, m)?;

    let mut discount = 1.0;
    let mut pv = 0.0;
    let mut gross = 0.0;
    for (i, c) in cash_flows.iter().enumerate() {
        if i > 0 {
            discount *= annual;
        }
        if *c == 0.0 {
            continue;
        }
        if discount == 0.0 {
            return Err(AnalyticsError::division_by_zero("present value"));
        }
        pv += c / discount;
        gross += c.abs() / discount.abs();
    }
    Ok((pv, gross))
}
