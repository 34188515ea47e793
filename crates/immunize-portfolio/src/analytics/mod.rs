//! Portfolio-level analytics.
//!
//! - [`aggregation`] - Present value, duration and convexity across instruments

pub mod aggregation;

pub use aggregation::{portfolio_convexity, portfolio_duration, portfolio_present_value};
