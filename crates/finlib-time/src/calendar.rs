//! `BusinessDayCalendar` — business-day predicates and day-shifting built
//! on a single [`HolidayPolicy`].
//!
//! A business day is any date the policy does not classify as a holiday.
//! All searching operations walk one day at a time with a safety bound, so
//! a policy that marks every date a holiday fails fast instead of looping.

use chrono::{Datelike, NaiveDate};
use finlib_core::errors::{Error, Result};

use crate::date_range::DateRange;
use crate::policy::HolidayPolicy;

/// Longest run of consecutive holidays a search will cross before failing
/// with [`Error::HolidaySearchExhausted`].
const HOLIDAY_SCAN_LIMIT: u32 = 10_000;

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn end_of_month(date: NaiveDate) -> Result<NaiveDate> {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or(Error::DateOutOfRange(date))
}

/// A calendar of business days defined by one holiday policy.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessDayCalendar {
    policy: HolidayPolicy,
}

impl BusinessDayCalendar {
    /// Create a calendar over the given policy.
    pub fn new(policy: HolidayPolicy) -> Self {
        Self { policy }
    }

    /// The wrapped holiday policy.
    pub fn policy(&self) -> &HolidayPolicy {
        &self.policy
    }

    /// Whether `date` is a holiday. The opposite of
    /// [`is_business_day`](Self::is_business_day).
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.policy.is_holiday(date)
    }

    /// Whether `date` is a business day. The opposite of
    /// [`is_holiday`](Self::is_holiday).
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_holiday(date)
    }

    fn walk(&self, start: NaiveDate, forward: bool) -> Result<NaiveDate> {
        let mut date = start;
        for _ in 0..HOLIDAY_SCAN_LIMIT {
            let step = if forward {
                date.succ_opt()
            } else {
                date.pred_opt()
            };
            date = step.ok_or(Error::DateOutOfRange(date))?;
            if self.is_business_day(date) {
                return Ok(date);
            }
        }
        Err(Error::HolidaySearchExhausted {
            start,
            limit: HOLIDAY_SCAN_LIMIT,
        })
    }

    /// The first business day strictly after `date`.
    pub fn next(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.walk(date, true)
    }

    /// The n-th business day strictly after `date`. `n = 0` returns the
    /// input unchanged, even when it is a holiday.
    pub fn next_n(&self, date: NaiveDate, n: u32) -> Result<NaiveDate> {
        let mut adjusted = date;
        for _ in 0..n {
            adjusted = self.next(adjusted)?;
        }
        Ok(adjusted)
    }

    /// The first business day strictly before `date`.
    pub fn previous(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.walk(date, false)
    }

    /// The n-th business day strictly before `date`. `n = 0` returns the
    /// input unchanged, even when it is a holiday.
    pub fn previous_n(&self, date: NaiveDate, n: u32) -> Result<NaiveDate> {
        let mut adjusted = date;
        for _ in 0..n {
            adjusted = self.previous(adjusted)?;
        }
        Ok(adjusted)
    }

    /// `date` itself when it is a business day, otherwise the next one.
    pub fn next_or_same(&self, date: NaiveDate) -> Result<NaiveDate> {
        if self.is_holiday(date) {
            self.next(date)
        } else {
            Ok(date)
        }
    }

    /// `date` itself when it is a business day, otherwise the previous one.
    pub fn previous_or_same(&self, date: NaiveDate) -> Result<NaiveDate> {
        if self.is_holiday(date) {
            self.previous(date)
        } else {
            Ok(date)
        }
    }

    /// Shift by `amount` business days: positive amounts move forward,
    /// negative backward, zero returns the input unchanged.
    pub fn shift(&self, date: NaiveDate, amount: i32) -> Result<NaiveDate> {
        if amount >= 0 {
            self.next_n(date, amount as u32)
        } else {
            self.previous_n(date, amount.unsigned_abs())
        }
    }

    /// The business day on or after `date` within the same month, or — when
    /// the forward search would leave the month — the last business day of
    /// `date`'s month. The result may be earlier than the input.
    pub fn next_same_or_last_in_month(&self, date: NaiveDate) -> Result<NaiveDate> {
        let adjusted = self.next_or_same(date)?;
        if same_month(adjusted, date) {
            Ok(adjusted)
        } else {
            self.previous(adjusted)
        }
    }

    /// Mirror image of
    /// [`next_same_or_last_in_month`](Self::next_same_or_last_in_month) for
    /// the beginning of the month: the business day on or before `date`
    /// within the same month, or the first business day after `date` when
    /// the backward search would leave the month.
    pub fn previous_same_or_last_in_month(&self, date: NaiveDate) -> Result<NaiveDate> {
        let adjusted = self.previous_or_same(date)?;
        if same_month(adjusted, date) {
            Ok(adjusted)
        } else {
            self.next(date)
        }
    }

    /// Whether `date` is a business day and the last one of its month.
    pub fn is_last_business_day_of_month(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.is_business_day(date) && !same_month(self.next(date)?, date))
    }

    /// The last business day of the month containing `date`.
    pub fn last_business_day_of_month(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.previous_or_same(end_of_month(date)?)
    }

    /// The business days within `range`, in ascending order, produced
    /// lazily. Whether the range's end date can appear follows the range's
    /// own inclusivity.
    pub fn business_days(&self, range: DateRange) -> impl Iterator<Item = NaiveDate> + '_ {
        range.iter().filter(move |date| self.is_business_day(*date))
    }

    /// The holidays within `range`, in ascending order, produced lazily.
    pub fn holidays(&self, range: DateRange) -> impl Iterator<Item = NaiveDate> + '_ {
        range.iter().filter(move |date| self.is_holiday(*date))
    }

    /// Number of business days within `range`.
    pub fn business_days_count(&self, range: DateRange) -> usize {
        self.business_days(range).count()
    }

    /// Number of holidays within `range`.
    pub fn holidays_count(&self, range: DateRange) -> usize {
        self.holidays(range).count()
    }
}
