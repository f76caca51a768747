//! `MonthDay` — a (month, day-of-month) pair with no year.
//!
//! The key type for recurring annual holidays: Christmas is `(12, 25)` in
//! every year. February 29 is a valid month-day even though it only occurs
//! in leap years.

use chrono::{Datelike, NaiveDate};
use finlib_core::errors::{Error, Result};

/// Longest length of each month in any year (February in a leap year).
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month and day-of-month, independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Create a month-day pair.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidMonthDay`] if the month is outside 1–12 or
    /// the day does not exist in that month in any year.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > MAX_DAYS[month as usize - 1] {
            return Err(Error::InvalidMonthDay { month, day });
        }
        Ok(Self { month, day })
    }

    /// The month-day of the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// The month (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}
