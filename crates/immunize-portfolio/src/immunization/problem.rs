//! Immunization problem definition and solve.

use immunize_analytics::cashflows::{bond_cash_flow, zero_coupon_cash_flow, CashFlows};
use immunize_analytics::accrual::discount_factor;
use immunize_analytics::risk::rate_moment;
use immunize_math::linear_algebra::LinearSystem;
use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use super::solution::ImmunizationSolution;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{ImmunizationConfig, InstrumentMetrics};

/// A single obligation paid at maturity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    /// Amount due at maturity.
    pub face_value: f64,
    /// Number of compounding periods until the payment.
    pub periods: usize,
    /// Yield at which the liability and all candidates are valued.
    pub ytm: f64,
}

impl Liability {
    /// A zero coupon obligation of `face_value` due after `periods` periods.
    #[must_use]
    pub fn zero_coupon(face_value: f64, periods: usize, ytm: f64) -> Self {
        Self {
            face_value,
            periods,
            ytm,
        }
    }

    /// The liability's cash-flow sequence.
    #[must_use]
    pub fn cash_flows(&self) -> CashFlows {
        zero_coupon_cash_flow(self.periods, self.face_value)
    }

    /// Present value at the liability's own yield: `face / accrue(ytm, periods, m)`.
    pub fn present_value(&self, m: u32) -> PortfolioResult<f64> {
        Ok(self.face_value * discount_factor(self.ytm, self.periods as f64, m)?)
    }
}

/// A coupon bond available for purchase, quoted per unit of face value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Annual coupon rate.
    pub coupon: f64,
    /// Number of coupon periods to maturity.
    pub periods: usize,
}

impl Candidate {
    /// A bond paying `coupon` a year over `periods` periods.
    #[must_use]
    pub fn bond(coupon: f64, periods: usize) -> Self {
        Self { coupon, periods }
    }

    /// Cash flows of one unit of face value paid `m` times a year.
    pub fn cash_flows(&self, m: u32) -> PortfolioResult<CashFlows> {
        Ok(bond_cash_flow(self.coupon, self.periods, 1.0, m)?)
    }
}

/// Match a liability's present value and rate moments with a candidate portfolio.
///
/// For `k` candidates the solver builds the `k × k` system
///
/// ```text
/// Σ x_j               = P0
/// Σ x_j · D_j / P0    = 0
/// Σ x_j · C_j / P0    = 0
/// Σ x_j · M_j(n) / P0 = 0      n = 3 .. k-1
/// ```
///
/// where `x_j` is the present value allocated to candidate `j`, `P0` the
/// liability value and `D_j`, `C_j`, `M_j(n)` the candidate's duration,
/// convexity and higher rate moments at the liability's yield. With fewer
/// than three candidates only the leading rows are used.
///
/// # Example
///
/// ```rust
/// use immunize_portfolio::immunization::{Candidate, ImmunizationProblem, Liability};
///
/// let problem = ImmunizationProblem::new(
///     Liability::zero_coupon(1.0, 7, 0.08),
///     vec![
///         Candidate::bond(0.07, 6),
///         Candidate::bond(0.10, 6),
///         Candidate::bond(0.02, 9),
///     ],
/// )?;
///
/// let solution = problem.solve()?;
/// assert!((solution.total_invested() - solution.liability_value).abs() < 1e-9);
/// # Ok::<(), immunize_portfolio::PortfolioError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmunizationProblem {
    liability: Liability,
    candidates: Vec<Candidate>,
    #[serde(default)]
    config: ImmunizationConfig,
}

impl ImmunizationProblem {
    /// Creates a problem with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidInput`] if there are no candidates,
    /// the liability face value is zero or not finite, or a rate is not finite.
    pub fn new(liability: Liability, candidates: Vec<Candidate>) -> PortfolioResult<Self> {
        if candidates.is_empty() {
            return Err(PortfolioError::invalid_input("No candidate bonds"));
        }
        if !liability.face_value.is_finite() || liability.face_value == 0.0 {
            return Err(PortfolioError::invalid_input(format!(
                "Liability face value {} must be finite and non-zero",
                liability.face_value
            )));
        }
        if !liability.ytm.is_finite() {
            return Err(PortfolioError::invalid_input("Liability yield is not finite"));
        }
        if let Some(bad) = candidates.iter().position(|c| !c.coupon.is_finite()) {
            return Err(PortfolioError::invalid_input(format!(
                "Candidate {bad} has a non-finite coupon"
            )));
        }

        Ok(Self {
            liability,
            candidates,
            config: ImmunizationConfig::default(),
        })
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: ImmunizationConfig) -> Self {
        self.config = config;
        self
    }

    /// The liability being immunized.
    pub fn liability(&self) -> &Liability {
        &self.liability
    }

    /// The candidate bonds.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The active configuration.
    pub fn config(&self) -> &ImmunizationConfig {
        &self.config
    }

    /// Builds and solves the moment-matching system.
    ///
    /// # Errors
    ///
    /// - [`PortfolioError::InvalidInput`] if there are no candidates
    /// - [`PortfolioError::Analytics`] if a candidate cannot be priced
    /// - [`PortfolioError::DivisionByZero`] if the liability is worth nothing
    /// - [`PortfolioError::SingularMatrix`] if the candidates do not admit a
    ///   unique allocation
    /// - [`PortfolioError::ResidualTooLarge`] if the allocation misses the targets
    pub fn solve(&self) -> PortfolioResult<ImmunizationSolution> {
        if self.candidates.is_empty() {
            return Err(PortfolioError::invalid_input("No candidate bonds"));
        }
        let m = self.config.frequency.periods_per_year();
        let ytm = self.liability.ytm;
        let target = self.liability.present_value(m)?;
        if target == 0.0 || !target.is_finite() {
            return Err(PortfolioError::division_by_zero("liability present value"));
        }

        let k = self.candidates.len();
        let mut candidates = Vec::with_capacity(k);
        let mut columns = Vec::with_capacity(k);
        for candidate in &self.candidates {
            let flows = candidate.cash_flows(m)?;
            let metrics = InstrumentMetrics::compute(&flows, ytm, m)?;

            let mut column = Vec::with_capacity(k);
            column.push(1.0);
            for row in 1..k {
                let moment = match row {
                    1 => metrics.duration,
                    2 => metrics.convexity,
                    n => {
                        let order = u32::try_from(n).map_err(|_| {
                            PortfolioError::invalid_input(format!("Too many candidates: {k}"))
                        })?;
                        rate_moment(&flows, ytm, m, order)?
                    }
                };
                column.push(moment / target);
            }

            candidates.push(metrics);
            columns.push(column);
        }

        let matrix = DMatrix::from_fn(k, k, |i, j| columns[j][i]);
        let mut rhs = DVector::zeros(k);
        rhs[0] = target;

        debug!("immunization system: {k} candidates, liability value {target:.10}");
        for (i, row) in matrix.row_iter().enumerate() {
            trace!("row {i}: {:?} = {}", row.iter().collect::<Vec<_>>(), rhs[i]);
        }

        let system = LinearSystem::new(matrix, rhs)?;
        let allocations = system.solve(self.config.pivot_tolerance).map_err(|e| {
            warn!("immunization system has no unique solution: {e}");
            PortfolioError::from(e)
        })?;
        let residual_norm = system.residual(&allocations)?;

        let face_amounts = allocations
            .iter()
            .zip(&candidates)
            .map(|(x, c)| x / c.present_value)
            .collect();
        let (matrix, rhs) = (system.matrix().clone(), system.rhs().clone());

        let solution = ImmunizationSolution {
            liability_value: target,
            allocations: allocations.iter().copied().collect(),
            face_amounts,
            candidates,
            matrix,
            rhs,
            residual_norm,
            residual_tolerance: self.config.residual_tolerance,
        };
        solution.verify()?;

        debug!(
            "immunization solved: allocations {:?}, residual {residual_norm:.2e}",
            solution.allocations
        );
        Ok(solution)
    }
}
