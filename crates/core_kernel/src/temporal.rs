//! Calendar period types for billing
//!
//! Mileage logs and billing statements are keyed by calendar month. This
//! module provides the year/month value object shared by both domains.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to billing period handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid billing period: {0} (expected YYYY-MM)")]
    Unparsable(String),
}

/// A calendar month used to scope mileage logs and billing statements
///
/// Ordering is chronological, so periods sort naturally in reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BillingPeriod {
    pub year: i32,
    pub month: u32,
}

impl BillingPeriod {
    /// Creates a new billing period
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the period containing the given date
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the preceding calendar month
    ///
    /// The billing index defaults to the month before the current one,
    /// since statements are produced after a month closes.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns true if the given date falls inside this period
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the first day of the period
    pub fn first_day(self) -> NaiveDate {
        // month is validated to 1-12 at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingPeriod {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || TemporalError::Unparsable(s.to_string());

        let (year_str, month_str) = s.split_once('-').ok_or_else(unparsable)?;
        let year: i32 = year_str.trim().parse().map_err(|_| unparsable())?;
        let month: u32 = month_str.trim().parse().map_err(|_| unparsable())?;

        Self::new(year, month)
    }
}
