//! `TimeUnit` — calendar granularities used in period and tenor arithmetic.
//!
//! Each unit is a fixed pair of a base chronological unit and a multiplier
//! (a quarter is three months, a half-year six). Date normalization — adding
//! a month to Jan 31 lands on the last valid day of February — is delegated
//! to the underlying date type, never re-implemented here.

use chrono::{Days, Months, NaiveDate};
use finlib_core::errors::{Error, Result};

/// A chronological unit the date type can add directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl BaseUnit {
    /// Advance `date` by `count` of this unit (negative counts retreat).
    ///
    /// Month and year additions clamp to the last valid day of the target
    /// month. Fails with [`Error::DateOutOfRange`] only at the limits of the
    /// representable date range.
    pub fn add_to(self, date: NaiveDate, count: i64) -> Result<NaiveDate> {
        match self {
            BaseUnit::Days => add_days(date, count),
            BaseUnit::Weeks => add_days(date, count * 7),
            BaseUnit::Months => add_months(date, count),
            BaseUnit::Years => add_months(date, count * 12),
        }
    }
}

fn add_days(date: NaiveDate, count: i64) -> Result<NaiveDate> {
    let shifted = if count >= 0 {
        date.checked_add_days(Days::new(count as u64))
    } else {
        date.checked_sub_days(Days::new(count.unsigned_abs()))
    };
    shifted.ok_or(Error::DateOutOfRange(date))
}

fn add_months(date: NaiveDate, count: i64) -> Result<NaiveDate> {
    let magnitude = u32::try_from(count.unsigned_abs()).map_err(|_| Error::DateOutOfRange(date))?;
    let shifted = if count >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or(Error::DateOutOfRange(date))
}

/// A calendar granularity: day, week, month, quarter, half-year, or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// One calendar day (`D`).
    Day,
    /// One calendar week (`W`).
    Week,
    /// One calendar month (`M`).
    Month,
    /// Three calendar months (`Q`).
    Quarter,
    /// Six calendar months (`H`).
    HalfYear,
    /// One calendar year (`Y`).
    Year,
}

impl TimeUnit {
    /// All units, in increasing length.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Quarter,
        TimeUnit::HalfYear,
        TimeUnit::Year,
    ];

    /// One-letter symbol used in the compact tenor notation (`3M`, `2Y`).
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Day => "D",
            TimeUnit::Week => "W",
            TimeUnit::Month => "M",
            TimeUnit::Quarter => "Q",
            TimeUnit::HalfYear => "H",
            TimeUnit::Year => "Y",
        }
    }

    /// Human-readable unit name.
    pub fn unit_name(&self) -> &'static str {
        match self {
            TimeUnit::Day => "Day",
            TimeUnit::Week => "Week",
            TimeUnit::Month => "Month",
            TimeUnit::Quarter => "Quarter",
            TimeUnit::HalfYear => "Half-Year",
            TimeUnit::Year => "Year",
        }
    }

    /// The base chronological unit this unit is expressed in.
    pub fn base_unit(&self) -> BaseUnit {
        match self {
            TimeUnit::Day => BaseUnit::Days,
            TimeUnit::Week => BaseUnit::Weeks,
            TimeUnit::Month | TimeUnit::Quarter | TimeUnit::HalfYear => BaseUnit::Months,
            TimeUnit::Year => BaseUnit::Years,
        }
    }

    /// Multiplier against [`base_unit`](Self::base_unit): 3 for a quarter,
    /// 6 for a half-year, 1 otherwise.
    pub fn base_unit_count(&self) -> i32 {
        match self {
            TimeUnit::Quarter => 3,
            TimeUnit::HalfYear => 6,
            _ => 1,
        }
    }

    /// Whether end-of-month alignment applies to this unit. Day and week
    /// additions never need month-end anchoring.
    pub fn supports_eom_adjust(&self) -> bool {
        !matches!(self, TimeUnit::Day | TimeUnit::Week)
    }

    /// Look up a unit by its one-letter symbol.
    ///
    /// # Errors
    /// Fails with [`Error::UnknownUnitSymbol`] for anything other than the
    /// six symbols `D`, `W`, `M`, `Q`, `H`, `Y`.
    pub fn of_symbol(symbol: &str) -> Result<TimeUnit> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| Error::UnknownUnitSymbol(symbol.to_string()))
    }

    /// Advance `date` by `count` whole units, where `count` has already been
    /// scaled by any caller-side multiplier.
    pub(crate) fn add_scaled(&self, date: NaiveDate, count: i64) -> Result<NaiveDate> {
        self.base_unit()
            .add_to(date, count * i64::from(self.base_unit_count()))
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unit_name())
    }
}

/// A value that can shift dates by whole periods: a [`TimeUnit`], or a
/// [`Frequency`](crate::frequency::Frequency) scaling its unit by its amount.
/// Schedule-generation callers accept either through this trait.
pub trait DateShift {
    /// Advance `date` by `n` periods (negative `n` retreats).
    fn add_to(&self, date: NaiveDate, n: i32) -> Result<NaiveDate>;

    /// Retreat `date` by `n` periods (negative `n` advances).
    fn subtract_from(&self, date: NaiveDate, n: i32) -> Result<NaiveDate>;

    /// Advance `date` by `n` periods with optional end-of-month anchoring.
    ///
    /// When `eom_adjust` is set and the period's unit supports it, the
    /// result is computed as `(date + 1 day) + n periods - 1 day`, which
    /// pins month-end inputs to the end of the resulting month and leaves
    /// mid-month inputs untouched. Otherwise plain addition is used.
    fn add_with_eom_adjust(&self, date: NaiveDate, n: i32, eom_adjust: bool) -> Result<NaiveDate>;
}

impl DateShift for TimeUnit {
    fn add_to(&self, date: NaiveDate, n: i32) -> Result<NaiveDate> {
        self.add_scaled(date, i64::from(n))
    }

    fn subtract_from(&self, date: NaiveDate, n: i32) -> Result<NaiveDate> {
        self.add_scaled(date, -i64::from(n))
    }

    fn add_with_eom_adjust(&self, date: NaiveDate, n: i32, eom_adjust: bool) -> Result<NaiveDate> {
        if eom_adjust && self.supports_eom_adjust() {
            let shifted = date.succ_opt().ok_or(Error::DateOutOfRange(date))?;
            let shifted = self.add_scaled(shifted, i64::from(n))?;
            shifted.pred_opt().ok_or(Error::DateOutOfRange(date))
        } else {
            self.add_to(date, n)
        }
    }
}
