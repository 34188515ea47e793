//! Linear algebra utilities.
//!
//! Dense direct solvers for the small square systems that appear in
//! moment-matching problems. Elimination uses partial pivoting and treats a
//! pivot as zero when it is small relative to the largest matrix entry, so a
//! singular system is reported instead of returning an arbitrary answer.

use log::trace;
use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};

/// Default relative pivot threshold below which a matrix is treated as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// A square system `A x = b`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl LinearSystem {
    /// Creates a system after checking that `matrix` is square and matches `rhs`.
    pub fn new(matrix: DMatrix<f64>, rhs: DVector<f64>) -> MathResult<Self> {
        let n = matrix.nrows();
        if n != matrix.ncols() {
            return Err(MathError::invalid_input("Matrix must be square"));
        }
        if n != rhs.len() {
            return Err(MathError::DimensionMismatch {
                rows1: n,
                cols1: n,
                rows2: rhs.len(),
                cols2: 1,
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Creates a system from row slices.
    pub fn from_rows(rows: &[Vec<f64>], rhs: &[f64]) -> MathResult<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(MathError::DimensionMismatch {
                rows1: n,
                cols1: bad.len(),
                rows2: rhs.len(),
                cols2: 1,
            });
        }
        let matrix = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Self::new(matrix, DVector::from_column_slice(rhs))
    }

    /// The coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The right-hand side.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }

    /// Solves the system by Gaussian elimination with partial pivoting.
    pub fn solve(&self, pivot_tolerance: f64) -> MathResult<DVector<f64>> {
        gaussian_elimination(&self.matrix, &self.rhs, pivot_tolerance)
    }

    /// Largest absolute component of `A x - b`.
    pub fn residual(&self, x: &DVector<f64>) -> MathResult<f64> {
        max_abs_residual(&self.matrix, x, &self.rhs)
    }
}

/// Solves `A x = b` with the default pivot tolerance.
///
/// # Example
///
/// ```rust
/// use immunize_math::linear_algebra::solve_linear_system;
/// use nalgebra::{DMatrix, DVector};
///
/// let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
/// let b = DVector::from_vec(vec![5.0, 5.0]);
///
/// let x = solve_linear_system(&a, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve_linear_system(a: &DMatrix<f64>, b: &DVector<f64>) -> MathResult<DVector<f64>> {
    LinearSystem::new(a.clone(), b.clone())?.solve(DEFAULT_PIVOT_TOLERANCE)
}

/// Largest absolute component of `A x - b`.
pub fn max_abs_residual(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> MathResult<f64> {
    if a.ncols() != x.len() || a.nrows() != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: a.nrows(),
            cols1: a.ncols(),
            rows2: x.len(),
            cols2: 1,
        });
    }
    Ok((a * x - b).amax())
}

fn gaussian_elimination(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    pivot_tolerance: f64,
) -> MathResult<DVector<f64>> {
    let n = b.len();
    let mut u = a.clone();
    let mut y = b.clone();

    if u.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(MathError::invalid_input("System contains non-finite entries"));
    }

    let scale = u.amax();
    if n > 0 && scale == 0.0 {
        return Err(MathError::SingularMatrix {
            pivot: 0.0,
            column: 0,
        });
    }
    let threshold = pivot_tolerance * scale;

    for k in 0..n {
        // Partial pivoting: largest magnitude in column k at or below row k
        let (offset, pivot) = u
            .view((k, k), (n - k, 1))
            .iter()
            .map(|v| v.abs())
            .enumerate()
            .fold((0, 0.0_f64), |best, (i, v)| if v > best.1 { (i, v) } else { best });

        if pivot <= threshold {
            return Err(MathError::SingularMatrix { pivot, column: k });
        }

        let p = k + offset;
        if p != k {
            trace!("pivot swap rows {k} <-> {p}");
            u.swap_rows(k, p);
            y.swap_rows(k, p);
        }

        for i in k + 1..n {
            let factor = u[(i, k)] / u[(k, k)];
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                u[(i, j)] -= factor * u[(k, j)];
            }
            y[i] -= factor * y[k];
        }
    }

    // Back substitution
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in i + 1..n {
            sum -= u[(i, j)] * x[j];
        }
        x[i] = sum / u[(i, i)];
    }

    Ok(x)
}
