//! # finlib-time
//!
//! Business-day calendars, holiday policies, and periodic-frequency
//! (tenor) arithmetic for financial date calculations.
//!
//! The two halves of the crate are independent: holiday policies compose
//! into a [`BusinessDayCalendar`] answering "what is the next good date",
//! while [`Frequency`] answers "how many times per year does this tenor
//! occur" and advances dates by whole periods. They share only the
//! [`TimeUnit`] / [`Period`] vocabulary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day calendar over a holiday policy.
pub mod calendar;

/// Closed / closed-open date ranges.
pub mod date_range;

/// Periodic frequency (tenor) type and registry.
pub mod frequency;

/// Month-day pairs for recurring annual holidays.
pub mod month_day;

/// Generic calendar periods.
pub mod period;

/// Holiday policy primitives and composition.
pub mod policy;

/// Time units and date-shifting.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::BusinessDayCalendar;
pub use date_range::{DateRange, Dates};
pub use frequency::{Frequency, FrequencyRegistry};
pub use month_day::MonthDay;
pub use period::Period;
pub use policy::{DatePart, DatePartPolicy, HolidayPolicy, WeekdayPolicy};
pub use time_unit::{BaseUnit, DateShift, TimeUnit};
