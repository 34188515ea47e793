//! Configuration for the immunization solver.

use immunize_analytics::accrual::Compounding;
use immunize_math::linear_algebra::DEFAULT_PIVOT_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Default tolerance on `‖M x - b‖∞` accepted for a solved allocation,
/// relative to `max(1, ‖b‖∞)`.
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Configuration for [`ImmunizationProblem::solve`](crate::immunization::ImmunizationProblem::solve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImmunizationConfig {
    /// Compounding frequency used for pricing the liability and candidates.
    /// Candidate coupons are paid at the same frequency.
    pub frequency: Compounding,

    /// Relative pivot threshold below which the system is treated as singular.
    pub pivot_tolerance: f64,

    /// Largest acceptable residual of the solved system, relative to
    /// `max(1, ‖b‖∞)` so it holds for any liability size.
    pub residual_tolerance: f64,
}

impl Default for ImmunizationConfig {
    fn default() -> Self {
        Self {
            frequency: Compounding::Annual,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }
}

impl ImmunizationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compounding frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<Compounding>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Sets the pivot tolerance.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImmunizationConfig::default();
        assert_eq!(config.frequency.periods_per_year(), 1);
        assert_eq!(config.pivot_tolerance, 1e-12);
        assert_eq!(config.residual_tolerance, 1e-6);
    }

    #[test]
    fn test_builder() {
        let config = ImmunizationConfig::new()
            .with_frequency(Compounding::SemiAnnual)
            .with_residual_tolerance(1e-8);

        assert_eq!(config.frequency.periods_per_year(), 2);
        assert_eq!(config.residual_tolerance, 1e-8);
        assert_eq!(config.pivot_tolerance, DEFAULT_PIVOT_TOLERANCE);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ImmunizationConfig =
            serde_json::from_str(r#"{"frequency": "quarterly"}"#).unwrap();

        assert_eq!(config.frequency, Compounding::Quarterly);
        assert_eq!(config.residual_tolerance, DEFAULT_RESIDUAL_TOLERANCE);

        let json = serde_json::to_string(&config).unwrap();
        let back: ImmunizationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
