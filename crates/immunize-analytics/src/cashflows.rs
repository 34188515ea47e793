//! Periodic cash-flow sequences.
//!
//! A cash-flow sequence is indexed by period: entry `i` is the amount paid at
//! the end of period `i`, and entry 0 is "now" (conventionally zero). A
//! sequence of length `N + 1` therefore describes an instrument with `N`
//! remaining periods.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::accrual::check_frequency;
use crate::error::AnalyticsResult;

/// An immutable sequence of periodic cash flows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlows(Vec<f64>);

impl CashFlows {
    /// Wraps a vector of per-period amounts.
    #[must_use]
    pub fn new(amounts: Vec<f64>) -> Self {
        Self(amounts)
    }

    /// The amounts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of periods after "now" (length minus one).
    #[must_use]
    pub fn periods(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// True if every amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    /// A copy with every amount multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|c| c * factor).collect())
    }

    /// Consumes the sequence and returns the amounts.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for CashFlows {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for CashFlows {
    fn from(amounts: Vec<f64>) -> Self {
        Self(amounts)
    }
}

impl FromIterator<f64> for CashFlows {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Builds the cash flows of a fixed coupon bond.
///
/// The result has `periods + 1` entries: index 0 is zero, indices
/// `1..=periods` each pay `coupon / m`, and the last index additionally
/// repays `face_value`.
///
/// `coupon` is an absolute annual amount, not a rate. A bond with face 100
/// and a 7% coupon takes `coupon = 7.0`. Scaling the face value alone does
/// not scale the coupon; the caller scales both when needed.
///
/// # Errors
///
/// Returns a domain error if `m == 0`.
///
/// # Example
///
/// ```rust
/// use immunize_analytics::cashflows::bond_cash_flow;
///
/// let flows = bond_cash_flow(0.07, 3, 1.0, 1).unwrap();
/// assert_eq!(flows.len(), 4);
/// assert_eq!(flows[0], 0.0);
/// assert!((flows[3] - 1.07).abs() < 1e-15);
/// ```
pub fn bond_cash_flow(coupon: f64, periods: usize, face_value: f64, m: u32) -> AnalyticsResult<CashFlows> {
    check_frequency(m)?;
    let per_period = coupon / f64::from(m);

    let mut flows = vec![per_period; periods + 1];
    flows[0] = 0.0;
    flows[periods] += face_value;

    Ok(CashFlows(flows))
}

/// Cash flows of a zero coupon instrument paying `face_value` at `periods`.
#[must_use]
pub fn zero_coupon_cash_flow(periods: usize, face_value: f64) -> CashFlows {
    let mut flows = vec![0.0; periods + 1];
    flows[periods] = face_value;
    CashFlows(flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annual_coupon_bond() {
        let flows = bond_cash_flow(0.07, 6, 1.0, 1).unwrap();
        let expected = [0.0, 0.07, 0.07, 0.07, 0.07, 0.07, 1.07];

        assert_eq!(flows.len(), expected.len());
        for (got, want) in flows.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-15);
        }
        assert_eq!(flows.periods(), 6);
    }

    #[test]
    fn test_zero_coupon_per_dollar() {
        let flows = bond_cash_flow(0.0, 7, 1.0, 1).unwrap();

        assert_eq!(flows.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(flows, zero_coupon_cash_flow(7, 1.0));
    }

    #[test]
    fn test_semi_annual_coupon_is_split() {
        let flows = bond_cash_flow(6.0, 4, 100.0, 2).unwrap();

        assert_eq!(flows.as_slice(), &[0.0, 3.0, 3.0, 3.0, 103.0]);
    }

    #[test]
    fn test_face_scaling_requires_coupon_scaling() {
        let unit = bond_cash_flow(0.05, 5, 1.0, 1).unwrap();
        let scaled = bond_cash_flow(0.05 * 250.0, 5, 250.0, 1).unwrap();
        let face_only = bond_cash_flow(0.05, 5, 250.0, 1).unwrap();

        for (a, b) in unit.scaled(250.0).iter().zip(scaled.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        assert!((face_only[1] - unit.scaled(250.0)[1]).abs() > 1.0);
    }

    #[test]
    fn test_zero_periods() {
        let flows = bond_cash_flow(0.05, 0, 1.0, 1).unwrap();
        assert_eq!(flows.as_slice(), &[1.0]);
        assert_eq!(flows.periods(), 0);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert!(bond_cash_flow(0.05, 5, 1.0, 0).is_err());
    }

    #[test]
    fn test_is_zero_and_serde() {
        let flows = CashFlows::new(vec![0.0; 4]);
        assert!(flows.is_zero());

        let json = serde_json::to_string(&CashFlows::from(vec![0.0, 1.5])).unwrap();
        assert_eq!(json, "[0.0,1.5]");
        let back: CashFlows = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_inner(), vec![0.0, 1.5]);
    }
}
