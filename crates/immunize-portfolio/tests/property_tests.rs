//! Property-based tests for portfolio aggregation and immunization.
//!
//! These tests verify invariants that should hold for any valid input:
//! - Aggregated duration lies between the smallest and largest instrument duration
//! - Scaling every position leaves weighted averages unchanged
//! - Solved allocations always sum to the liability value

use immunize_portfolio::prelude::*;
use proptest::prelude::*;

fn instrument() -> impl Strategy<Value = InstrumentMetrics> {
    (0.01_f64..100.0, 0.0_f64..30.0, 0.0_f64..900.0)
        .prop_map(|(pv, d, c)| InstrumentMetrics::new(pv, d, c))
}

proptest! {
    #[test]
    fn long_only_duration_is_bounded(instruments in prop::collection::vec(instrument(), 1..20)) {
        let metrics = PortfolioMetrics::aggregate(&instruments).unwrap();

        let lo = instruments.iter().map(|i| i.duration).fold(f64::INFINITY, f64::min);
        let hi = instruments.iter().map(|i| i.duration).fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(metrics.duration >= lo - 1e-9);
        prop_assert!(metrics.duration <= hi + 1e-9);
        prop_assert_eq!(metrics.instrument_count, instruments.len());
    }

    #[test]
    fn weighted_average_is_scale_invariant(
        instruments in prop::collection::vec(instrument(), 1..20),
        k in 0.1_f64..50.0,
    ) {
        let scaled: Vec<InstrumentMetrics> = instruments.iter().map(|i| i.scaled(k)).collect();

        let base = PortfolioMetrics::aggregate(&instruments).unwrap();
        let grown = PortfolioMetrics::aggregate(&scaled).unwrap();

        prop_assert!((grown.duration - base.duration).abs() < 1e-9 * (1.0 + base.duration));
        prop_assert!((grown.convexity - base.convexity).abs() < 1e-9 * (1.0 + base.convexity));
        prop_assert!((grown.present_value - k * base.present_value).abs() < 1e-9 * grown.present_value);
    }

    #[test]
    fn misaligned_slices_are_rejected(
        values in prop::collection::vec(0.1_f64..10.0, 0..10),
        extra in 1_usize..5,
    ) {
        let durations = vec![1.0; values.len() + extra];
        let is_length_mismatch = matches!(
            portfolio_duration(&values, &durations),
            Err(PortfolioError::LengthMismatch { .. })
        );
        prop_assert!(is_length_mismatch);
    }

    #[test]
    fn two_bond_allocation_sums_to_liability(
        ytm in 0.01_f64..0.15,
        liability_periods in 3_usize..15,
        short_coupon in 0.0_f64..0.12,
        long_coupon in 0.0_f64..0.12,
    ) {
        // The 1-period bond has duration exactly 1, the 20-period bond more than 1
        let problem = ImmunizationProblem::new(
            Liability::zero_coupon(1.0, liability_periods, ytm),
            vec![Candidate::bond(short_coupon, 1), Candidate::bond(long_coupon, 20)],
        )
        .unwrap();

        let solution = problem.solve().unwrap();

        prop_assert!((solution.total_invested() - solution.liability_value).abs() < 1e-9);
        prop_assert!(solution.verify().is_ok());
    }
}
