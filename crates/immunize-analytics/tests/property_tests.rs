//! Property-based tests for accrual and cash-flow invariants.
//!
//! These tests verify identities that should hold for any valid input:
//! - One-year growth is the per-period factor raised to the frequency
//! - Present value is linear in the cash flows
//! - Yield solving inverts present value for single-sign-change flows
//! - Duration and convexity of non-negative flows are bounded by maturity

use immunize_analytics::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn accrual_factors_compose(r in -0.5_f64..1.0, m in 1_u32..=365) {
        let period = accrue_one_period(r, m).unwrap();
        let year = accrue_one_year(r, m).unwrap();

        prop_assert_eq!(year, period.powi(m as i32));
        prop_assert_eq!(accrue(r, 1.0, m).unwrap(), year);
    }

    #[test]
    fn effective_with_annual_compounding_is_nominal(r in -0.9_f64..2.0) {
        prop_assert!((effective(r, 1).unwrap() - r).abs() < 1e-14);
    }

    #[test]
    fn zero_flows_have_zero_value(r in -0.5_f64..1.0, m in 1_u32..=12, n in 0_usize..40) {
        prop_assert_eq!(present_value(&vec![0.0; n], r, m).unwrap(), 0.0);
    }

    #[test]
    fn present_value_is_linear(
        flows in prop::collection::vec(-10.0_f64..10.0, 1..30),
        k in -5.0_f64..5.0,
        r in 0.0_f64..0.2,
    ) {
        let base = present_value(&flows, r, 1).unwrap();
        let scaled: Vec<f64> = flows.iter().map(|c| c * k).collect();
        let scaled_pv = present_value(&scaled, r, 1).unwrap();

        prop_assert!((scaled_pv - k * base).abs() <= 1e-9 * (1.0 + base.abs() * k.abs()));
    }

    #[test]
    fn yield_round_trip(coupon in 0.0_f64..0.15, periods in 1_usize..30, r in 0.0_f64..0.2) {
        let flows = bond_cash_flow(coupon, periods, 1.0, 1).unwrap();
        let price = present_value(&flows, r, 1).unwrap();

        let ytm = yield_to_maturity(price, &flows).unwrap();

        prop_assert!((present_value(&flows, ytm, 1).unwrap() - price).abs() < 1e-8);
    }

    #[test]
    fn zero_coupon_bond_is_single_payment(periods in 0_usize..50) {
        let flows = bond_cash_flow(0.0, periods, 1.0, 1).unwrap();

        prop_assert_eq!(flows.len(), periods + 1);
        prop_assert_eq!(flows[periods], 1.0);
        prop_assert!(flows[..periods].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn duration_within_maturity(coupon in 0.0_f64..0.2, periods in 1_usize..40, r in 0.0_f64..0.2) {
        let flows = bond_cash_flow(coupon, periods, 1.0, 1).unwrap();
        let d = duration(&flows, r, 1).unwrap();
        let c = convexity(&flows, r, 1).unwrap();

        prop_assert!(d > 0.0);
        prop_assert!(d <= periods as f64 + 1e-9);
        prop_assert!(c > 0.0);
    }
}
