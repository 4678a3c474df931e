//! Money types with deterministic cent arithmetic
//!
//! This module provides the fixed-point dollar type used for every cost in
//! the system. Amounts are stored as integer cents; arithmetic that involves
//! a scalar factor goes through `f64` with a `+0.5`-and-truncate rounding
//! step. Statements the club has already issued were produced with exactly
//! that rule, so it must not be replaced with banker's or decimal rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// The text could not be read as a dollar amount. Surfaced to the
    /// caller, never coerced to `$0.00`.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A US dollar amount stored as integer cents
///
/// All public APIs accept and return values already rounded to the cent.
///
/// # Examples
///
/// ```
/// use core_kernel::Usd;
///
/// let rate = Usd::from_cents(58);
/// assert_eq!(rate.scale(10.0), Usd::from_cents(580));
/// assert_eq!(rate.to_string(), "$0.58");
/// assert_eq!("$5.80".parse::<Usd>().unwrap(), Usd::from_cents(580));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Usd(i64);

impl Usd {
    pub const ZERO: Usd = Usd(0);

    /// Creates an amount from integer cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from a dollar value, rounding to the nearest cent
    ///
    /// The rounding is `(dollars * 100) + 0.5` truncated toward zero.
    pub fn from_dollars(dollars: f64) -> Self {
        Self(((dollars * 100.0) + 0.5) as i64)
    }

    /// Returns the raw value in cents
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the amount as a dollar value
    pub fn to_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns true if the amount is zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is positive
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiplies by a scalar (e.g., a rate times a distance), rounding to
    /// the nearest cent
    pub fn scale(self, factor: f64) -> Self {
        Self(((self.0 as f64 * factor) + 0.5) as i64)
    }

    /// Divides by a scalar (e.g., an even split across riders), rounding to
    /// the nearest cent
    pub fn split(self, divisor: f64) -> Result<Self, MoneyError> {
        if divisor == 0.0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(((self.0 as f64 / divisor) + 0.5) as i64))
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0 as f64 / 100.0)
    }
}

impl Add for Usd {
    type Output = Usd;

    // Addition runs through the dollar representation so that running
    // totals stay cent-for-cent compatible with previously issued
    // statements.
    fn add(self, rhs: Usd) -> Usd {
        Usd::from_dollars(self.to_dollars() + rhs.to_dollars())
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Usd) {
        *self = *self + rhs;
    }
}

impl From<i64> for Usd {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<Usd> for i64 {
    fn from(value: Usd) -> Self {
        value.0
    }
}

impl FromStr for Usd {
    type Err = MoneyError;

    /// Parses a decimal dollar string, with an optional `$` symbol
    ///
    /// Unparsable input is an error; it is never read as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.replace('$', "");
        let dollars: f64 = bare
            .trim()
            .parse()
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))?;
        if !dollars.is_finite() {
            return Err(MoneyError::InvalidAmount(s.to_string()));
        }
        Ok(Self::from_dollars(dollars))
    }
}
