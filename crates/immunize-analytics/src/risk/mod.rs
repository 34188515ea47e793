//! Rate sensitivity of periodic cash flows.
//!
//! - **Duration**: Macaulay and modified duration
//! - **Convexity**: second-order sensitivity, and the Taylor price estimate
//! - **Moments**: the general order-`n` sensitivity that both of the above
//!   are special cases of
//!
//! Within a sum, period `i` is discounted by the *per-period* factor
//! `a = 1 + r/m` raised to `i`, while the normalizing present value uses the
//! annual factor. Every metric divides by the present value and fails with
//! [`AnalyticsError::DivisionByZero`](crate::AnalyticsError::DivisionByZero)
//! when it is zero.

pub mod convexity;
pub mod duration;
pub mod moments;

pub use convexity::{convexity, price_change_estimate};
pub use duration::{duration, modified_duration};
pub use moments::rate_moment;
