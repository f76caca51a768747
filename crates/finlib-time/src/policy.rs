//! Holiday policies — predicates classifying a date as a holiday.
//!
//! Three primitive policies test a part of the date (weekday, month-day, or
//! the full date) against a membership set; two composite policies combine
//! existing policies by logical OR. The whole family is a closed set of
//! variants behind [`HolidayPolicy::is_holiday`], so composition nests
//! freely without trait objects.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::{Datelike, NaiveDate, Weekday};
use log::trace;

use crate::month_day::MonthDay;

/// A part of a date that can be extracted and tested for set membership.
///
/// The three implementations are the standard extractors: the weekday (for
/// weekend policies), the month-day (for recurring annual holidays), and the
/// date itself (for one-off holidays).
pub trait DatePart: Copy + Eq + Hash + std::fmt::Debug {
    /// Extract this part from a date. Pure and total.
    fn extract(date: NaiveDate) -> Self;
}

impl DatePart for Weekday {
    fn extract(date: NaiveDate) -> Self {
        date.weekday()
    }
}

impl DatePart for MonthDay {
    fn extract(date: NaiveDate) -> Self {
        MonthDay::from_date(date)
    }
}

impl DatePart for NaiveDate {
    fn extract(date: NaiveDate) -> Self {
        date
    }
}

/// A primitive holiday policy: a date is a holiday when its extracted part
/// is in the membership set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePartPolicy<P: DatePart> {
    parts: HashSet<P>,
}

impl<P: DatePart> DatePartPolicy<P> {
    /// Build a policy from the holiday parts.
    pub fn new(parts: impl IntoIterator<Item = P>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// Whether `date`'s extracted part is a member of the holiday set.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        let holiday = self.parts.contains(&P::extract(date));
        trace!("date-part check: date={date}, holiday={holiday}");
        holiday
    }

    /// Number of entries in the membership set.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the membership set is empty.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// A weekday-membership policy; the usual weekend definitions are provided
/// as presets.
pub type WeekdayPolicy = DatePartPolicy<Weekday>;

impl WeekdayPolicy {
    /// Saturday/Sunday weekend.
    pub fn sat_sun() -> Self {
        Self::new([Weekday::Sat, Weekday::Sun])
    }

    /// Friday/Saturday weekend.
    pub fn fri_sat() -> Self {
        Self::new([Weekday::Fri, Weekday::Sat])
    }

    /// Thursday/Friday weekend.
    pub fn thu_fri() -> Self {
        Self::new([Weekday::Thu, Weekday::Fri])
    }
}

/// A holiday policy: the capability "is this date a holiday".
///
/// Composite variants hold ordered lists of policies and evaluate them in
/// order with short-circuiting, but the result is a plain logical OR —
/// member order is never observable in the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum HolidayPolicy {
    /// Dates whose weekday is in the set (weekends).
    Weekdays(WeekdayPolicy),
    /// Dates whose month-day is in the set (recurring annual holidays).
    MonthDays(DatePartPolicy<MonthDay>),
    /// Dates in the set (one-off holidays).
    Dates(DatePartPolicy<NaiveDate>),
    /// A date is a holiday if any member policy says so. Members may
    /// themselves be composites; nesting needs no flattening.
    Combined(Vec<HolidayPolicy>),
    /// Like [`Combined`](Self::Combined), with an explicit fallback policy
    /// consulted only when every listed policy said "business day".
    Chained {
        /// The policies consulted first, in order.
        policies: Vec<HolidayPolicy>,
        /// The fallback policy; absent means no fallback.
        next: Option<Box<HolidayPolicy>>,
    },
}

impl HolidayPolicy {
    /// A weekday-set policy.
    pub fn weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self::Weekdays(WeekdayPolicy::new(days))
    }

    /// A recurring-annual-holiday policy keyed by month and day.
    pub fn month_days(days: impl IntoIterator<Item = MonthDay>) -> Self {
        Self::MonthDays(DatePartPolicy::new(days))
    }

    /// A one-off-holiday policy keyed by exact date.
    pub fn dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self::Dates(DatePartPolicy::new(dates))
    }

    /// The union of the given policies. An empty list classifies no date as
    /// a holiday.
    pub fn combined(policies: impl IntoIterator<Item = HolidayPolicy>) -> Self {
        Self::Combined(policies.into_iter().collect())
    }

    /// The union of the given policies with an optional fallback consulted
    /// when none of them matched.
    pub fn chained(
        policies: impl IntoIterator<Item = HolidayPolicy>,
        next: Option<HolidayPolicy>,
    ) -> Self {
        Self::Chained {
            policies: policies.into_iter().collect(),
            next: next.map(Box::new),
        }
    }

    /// Whether `date` is a holiday under this policy.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        match self {
            HolidayPolicy::Weekdays(policy) => policy.is_holiday(date),
            HolidayPolicy::MonthDays(policy) => policy.is_holiday(date),
            HolidayPolicy::Dates(policy) => policy.is_holiday(date),
            HolidayPolicy::Combined(policies) => {
                policies.iter().any(|policy| policy.is_holiday(date))
            }
            HolidayPolicy::Chained { policies, next } => {
                policies.iter().any(|policy| policy.is_holiday(date))
                    || next.as_ref().is_some_and(|policy| policy.is_holiday(date))
            }
        }
    }
}
