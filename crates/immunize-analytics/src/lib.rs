//! # Immunize Analytics
//!
//! Single-instrument analytics for periodic cash flows.
//!
//! This crate provides:
//! - **Accrual**: per-period, per-year and multi-year growth factors, effective rates
//! - **Cash Flows**: coupon and zero coupon bond cash-flow construction
//! - **Pricing**: present value and its rate derivative
//! - **Yields**: yield-to-maturity with a bounded local root finder
//! - **Risk**: Macaulay and modified duration, convexity, higher rate moments
//!
//! Everything is a stateless function of its inputs. Portfolio aggregation
//! and immunization live in `immunize-portfolio`.
//!
//! ## Usage
//!
//! ```rust
//! use immunize_analytics::prelude::*;
//!
//! let flows = bond_cash_flow(0.07, 6, 1.0, 1)?;
//! let pv = present_value(&flows, 0.08, 1)?;
//! let d = duration(&flows, 0.08, 1)?;
//! let c = convexity(&flows, 0.08, 1)?;
//!
//! assert!((pv - 0.9538).abs() < 1e-4);
//! assert!(d < 6.0 && c > d);
//! # Ok::<(), AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accrual;
pub mod cashflows;
pub mod error;
pub mod pricing;
pub mod risk;
pub mod yields;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::{
        accrue, accrue_one_period, accrue_one_year, discount_factor, effective,
        nominal_from_effective, Compounding,
    };
    pub use crate::cashflows::{bond_cash_flow, zero_coupon_cash_flow, CashFlows};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pricing::{present_value, present_value_derivative};
    pub use crate::risk::{
        convexity, duration, modified_duration, price_change_estimate, rate_moment,
    };
    pub use crate::yields::{yield_to_maturity, YieldConfig, YieldResult, YieldSolver};
}
