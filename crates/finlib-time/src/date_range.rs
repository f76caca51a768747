//! `DateRange` — an ordered span of calendar dates with closed or
//! closed-open bounds, iterated lazily one day at a time.

use chrono::NaiveDate;
use finlib_core::ensure;
use finlib_core::errors::{Error, Result};

/// A validated date range. The lower bound is always inclusive; the upper
/// bound is inclusive for [`closed`](DateRange::closed) ranges and exclusive
/// for [`closed_open`](DateRange::closed_open) ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    end_inclusive: bool,
}

impl DateRange {
    /// A range containing every date from `start` through `end` inclusive.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidRange`] if `start` is after `end`.
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        ensure!(start <= end, Error::InvalidRange { start, end });
        Ok(Self {
            start,
            end,
            end_inclusive: true,
        })
    }

    /// A range containing every date from `start` inclusive to `end`
    /// exclusive. Equal bounds give an empty range.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidRange`] if `start` is after `end`.
    pub fn closed_open(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        ensure!(start <= end, Error::InvalidRange { start, end });
        Ok(Self {
            start,
            end,
            end_inclusive: false,
        })
    }

    /// The inclusive lower bound.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The upper bound (see [`is_end_inclusive`](Self::is_end_inclusive)).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the upper bound itself belongs to the range.
    pub fn is_end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// Whether `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && (date < self.end || (self.end_inclusive && date == self.end))
    }

    /// Lazy iterator over the dates of the range in ascending order.
    pub fn iter(&self) -> Dates {
        let last = if self.end_inclusive {
            Some(self.end)
        } else {
            self.end.pred_opt()
        };
        Dates {
            cursor: Some(self.start),
            last,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Dates {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Dates {
    cursor: Option<NaiveDate>,
    last: Option<NaiveDate>,
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.cursor?;
        if current > self.last? {
            self.cursor = None;
            return None;
        }
        self.cursor = current.succ_opt();
        Some(current)
    }
}
