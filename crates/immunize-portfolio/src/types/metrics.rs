//! Per-instrument and aggregated metric records.

use immunize_analytics::pricing::present_value;
use immunize_analytics::risk::{convexity, duration};
use serde::{Deserialize, Serialize};

use crate::analytics::aggregation::{portfolio_present_value, weighted_average};
use crate::error::PortfolioResult;

/// Present value, duration and convexity of one instrument, computed at a
/// common rate so they can be combined positionally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstrumentMetrics {
    /// Present value of the position.
    pub present_value: f64,
    /// Macaulay duration in years.
    pub duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
}

impl InstrumentMetrics {
    /// Creates a record from precomputed figures.
    #[must_use]
    pub fn new(present_value: f64, duration: f64, convexity: f64) -> Self {
        Self {
            present_value,
            duration,
            convexity,
        }
    }

    /// Computes all three figures for a cash-flow sequence at rate `r`,
    /// compounded `m` times a year.
    ///
    /// # Errors
    ///
    /// Propagates the analytics error if the present value is zero or the
    /// inputs are outside the domain.
    pub fn compute(cash_flows: &[f64], r: f64, m: u32) -> PortfolioResult<Self> {
        Ok(Self {
            present_value: present_value(cash_flows, r, m)?,
            duration: duration(cash_flows, r, m)?,
            convexity: convexity(cash_flows, r, m)?,
        })
    }

    /// The same instrument held in `quantity` units.
    ///
    /// Duration and convexity are per unit of value and do not change.
    #[must_use]
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            present_value: self.present_value * quantity,
            ..*self
        }
    }
}

/// Aggregated figures for a set of instruments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Total present value.
    pub present_value: f64,
    /// Value-weighted duration.
    pub duration: f64,
    /// Value-weighted convexity.
    pub convexity: f64,
    /// Number of instruments aggregated.
    pub instrument_count: usize,
}

impl PortfolioMetrics {
    /// Aggregates instrument records in one pass over the slice.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::DivisionByZero`](crate::PortfolioError::DivisionByZero)
    /// if the values sum to zero, which includes the empty slice.
    pub fn aggregate(instruments: &[InstrumentMetrics]) -> PortfolioResult<Self> {
        let (values, (durations, convexities)): (Vec<f64>, (Vec<f64>, Vec<f64>)) = instruments
            .iter()
            .map(|i| (i.present_value, (i.duration, i.convexity)))
            .unzip();

        Ok(Self {
            present_value: portfolio_present_value(&values),
            duration: weighted_average(&values, &durations, "portfolio duration")?,
            convexity: weighted_average(&values, &convexities, "portfolio convexity")?,
            instrument_count: instruments.len(),
        })
    }
}
