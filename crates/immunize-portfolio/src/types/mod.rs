//! Core types: metric records and solver configuration.

mod config;
mod metrics;

pub use config::{ImmunizationConfig, DEFAULT_RESIDUAL_TOLERANCE};
pub use metrics::{InstrumentMetrics, PortfolioMetrics};
