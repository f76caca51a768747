//! Error types for finlib-rs.
//!
//! Every error in this library is a caller-input error: a precondition the
//! caller must satisfy, detected eagerly at the API boundary. Nothing is
//! transient or retryable, and nothing is logged or swallowed internally —
//! propagation is the caller's responsibility.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type used throughout finlib-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A frequency amount that is zero or negative.
    #[error("frequency amount must be positive, got {0}")]
    NonPositiveAmount(i32),

    /// A convenience-constructor amount beyond the supported maximum
    /// (1,000 years / 12,000 months).
    #[error("{label} must not exceed {max}, got {value}")]
    AmountOutOfBounds {
        /// Which count overflowed ("years" or "months").
        label: &'static str,
        /// The rejected value.
        value: i32,
        /// The maximum allowed value.
        max: i32,
    },

    /// A calendar period mixing more than one non-zero unit, which cannot be
    /// expressed as a single-unit frequency.
    #[error("multi-unit period {0} not supported")]
    UnsupportedMultiUnitPeriod(String),

    /// A textual tenor that does not match `[P]<amount><unit symbol>`.
    #[error("malformed frequency {0:?}")]
    MalformedFrequency(String),

    /// A unit symbol outside `D`, `W`, `M`, `Q`, `H`, `Y`.
    #[error("unknown time unit symbol {0:?}")]
    UnknownUnitSymbol(String),

    /// A date range whose lower bound is after its upper bound.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// The lower bound of the rejected range.
        start: NaiveDate,
        /// The upper bound of the rejected range.
        end: NaiveDate,
    },

    /// A (month, day-of-month) pair that exists in no year.
    #[error("invalid month-day: month {month}, day {day}")]
    InvalidMonthDay {
        /// The month value (1–12 expected).
        month: u32,
        /// The day-of-month value.
        day: u32,
    },

    /// Date arithmetic left the representable range of the date type.
    #[error("date arithmetic out of range starting from {0}")]
    DateOutOfRange(NaiveDate),

    /// A business-day search walked past the consecutive-holiday safety
    /// limit without finding a business day.
    #[error("no business day within {limit} days of {start}")]
    HolidaySearchExhausted {
        /// The date the search started from.
        start: NaiveDate,
        /// The number of days scanned before giving up.
        limit: u32,
    },
}

/// Shorthand `Result` type used throughout finlib-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return the given error if a precondition does not hold.
///
/// # Example
/// ```
/// use finlib_core::{ensure, errors::Error};
/// fn positive(amount: i32) -> finlib_core::Result<i32> {
///     ensure!(amount > 0, Error::NonPositiveAmount(amount));
///     Ok(amount)
/// }
/// assert!(positive(3).is_ok());
/// assert_eq!(positive(0), Err(Error::NonPositiveAmount(0)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::NonPositiveAmount(-2).to_string(),
            "frequency amount must be positive, got -2"
        );
        assert_eq!(
            Error::AmountOutOfBounds {
                label: "years",
                value: 1500,
                max: 1000,
            }
            .to_string(),
            "years must not exceed 1000, got 1500"
        );
        assert_eq!(
            Error::UnknownUnitSymbol("X".into()).to_string(),
            "unknown time unit symbol \"X\""
        );
    }

    #[test]
    fn invalid_range_message_carries_both_bounds() {
        let start = NaiveDate::from_ymd_opt(2019, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let msg = Error::InvalidRange { start, end }.to_string();
        assert!(msg.contains("2019-02-01"));
        assert!(msg.contains("2019-01-01"));
    }
}
