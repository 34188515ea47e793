//! Interest accrual factors.
//!
//! A nominal annual rate `r` compounded `m` times per year grows one unit of
//! money by `1 + r/m` per period. Every other factor here is a power of that
//! single-period factor:
//!
//! ```text
//! one period : a = 1 + r/m
//! one year   : A = a^m
//! n years    : A^n
//! ```
//!
//! The only domain restriction is `m >= 1`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Interest compounding frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// Once per year
    #[default]
    Annual,
    /// Twice per year
    SemiAnnual,
    /// Four times per year
    Quarterly,
    /// Twelve times per year
    Monthly,
    /// Any other number of periods per year
    Periods(u32),
}

impl Compounding {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Annual => 1,
            Compounding::SemiAnnual => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
            Compounding::Periods(m) => *m,
        }
    }
}

impl From<u32> for Compounding {
    fn from(m: u32) -> Self {
        match m {
            1 => Compounding::Annual,
            2 => Compounding::SemiAnnual,
            4 => Compounding::Quarterly,
            12 => Compounding::Monthly,
            other => Compounding::Periods(other),
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Annual => write!(f, "Annual"),
            Compounding::SemiAnnual => write!(f, "Semi-Annual"),
            Compounding::Quarterly => write!(f, "Quarterly"),
            Compounding::Monthly => write!(f, "Monthly"),
            Compounding::Periods(m) => write!(f, "{m}x per year"),
        }
    }
}

/// Checks `m >= 1` and returns it as an exponent.
pub(crate) fn check_frequency(m: u32) -> AnalyticsResult<i32> {
    if m == 0 {
        return Err(AnalyticsError::domain(
            "compounding frequency must be at least 1",
        ));
    }
    i32::try_from(m)
        .map_err(|_| AnalyticsError::domain(format!("compounding frequency {m} is too large")))
}

/// Effective annual rate of nominal rate `r` compounded `m` times per year.
///
/// `(1 + r/m)^m - 1`
///
/// # Errors
///
/// Returns [`AnalyticsError::Domain`] if `m == 0`.
pub fn effective(r: f64, m: u32) -> AnalyticsResult<f64> {
    Ok(accrue_one_year(r, m)? - 1.0)
}

/// Nominal rate compounded `m` times per year equivalent to the effective
/// annual rate `effective_rate`. Inverse of [`effective`].
pub fn nominal_from_effective(effective_rate: f64, m: u32) -> AnalyticsResult<f64> {
    let periods = check_frequency(m)?;
    if effective_rate <= -1.0 {
        return Err(AnalyticsError::domain(format!(
            "effective rate {effective_rate} must be greater than -1"
        )));
    }
    let m = f64::from(periods);
    Ok(m * ((1.0 + effective_rate).powf(1.0 / m) - 1.0))
}

/// Growth factor over a single compounding period: `1 + r/m`.
pub fn accrue_one_period(r: f64, m: u32) -> AnalyticsResult<f64> {
    check_frequency(m)?;
    Ok(1.0 + r / f64::from(m))
}

/// Growth factor over one year: `accrue_one_period(r, m)^m`.
pub fn accrue_one_year(r: f64, m: u32) -> AnalyticsResult<f64> {
    let periods = check_frequency(m)?;
    Ok(accrue_one_period(r, m)?.powi(periods))
}

/// Growth factor over `n` years: `accrue_one_year(r, m)^n`.
///
/// `n` may be fractional but must be non-negative.
pub fn accrue(r: f64, n: f64, m: u32) -> AnalyticsResult<f64> {
    if !n.is_finite() || n < 0.0 {
        return Err(AnalyticsError::domain(format!(
            "accrual horizon {n} must be a non-negative number of years"
        )));
    }
    Ok(accrue_one_year(r, m)?.powf(n))
}

/// Discount factor over `n` years: `1 / accrue(r, n, m)`.
pub fn discount_factor(r: f64, n: f64, m: u32) -> AnalyticsResult<f64> {
    let growth = accrue(r, n, m)?;
    if growth == 0.0 || !growth.is_finite() {
        return Err(AnalyticsError::domain(format!(
            "rate {r} gives a degenerate growth factor over {n} years"
        )));
    }
    Ok(1.0 / growth)
}
