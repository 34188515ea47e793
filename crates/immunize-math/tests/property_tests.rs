//! Property-based tests for the numerical solvers.

use immunize_math::prelude::*;
use nalgebra::{DMatrix, DVector};
use proptest::prelude::*;

proptest! {
    #[test]
    fn newton_finds_square_roots(a in 0.01_f64..1e4) {
        let result = newton_raphson(
            |x| x * x - a,
            |x| 2.0 * x,
            1.0 + a / 2.0,
            &SolverConfig::default(),
        )
        .unwrap();

        prop_assert!((result.root - a.sqrt()).abs() <= 1e-8 * (1.0 + a.sqrt()));
    }

    #[test]
    fn brent_stays_inside_bracket(shift in -5.0_f64..5.0) {
        let result = brent(|x| x.powi(3) - shift, -10.0, 10.0, &SolverConfig::default()).unwrap();

        prop_assert!((-10.0..=10.0).contains(&result.root));
        prop_assert!((result.root.powi(3) - shift).abs() < 1e-6);
    }

    #[test]
    fn diagonally_dominant_systems_solve(
        entries in prop::collection::vec(-1.0_f64..1.0, 16),
        rhs in prop::collection::vec(-10.0_f64..10.0, 4),
    ) {
        // |a_ii| > Σ|a_ij| keeps the matrix well conditioned
        let a = DMatrix::from_fn(4, 4, |i, j| {
            let v = entries[i * 4 + j];
            if i == j { 5.0 + v.abs() } else { v }
        });
        let b = DVector::from_vec(rhs);

        let x = solve_linear_system(&a, &b).unwrap();

        prop_assert!(max_abs_residual(&a, &x, &b).unwrap() < 1e-10);
    }

    #[test]
    fn repeated_column_is_singular(col in prop::collection::vec(0.5_f64..2.0, 3)) {
        let a = DMatrix::from_fn(3, 3, |i, j| if j == 2 { col[i] * 3.0 + 1.0 } else { col[i] });
        let b = DVector::from_vec(vec![1.0, 0.0, 0.0]);

        let is_singular = matches!(
            solve_linear_system(&a, &b),
            Err(MathError::SingularMatrix { .. })
        );
        prop_assert!(is_singular);
    }
}
