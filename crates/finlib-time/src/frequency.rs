//! `Frequency` — a canonical periodic descriptor (tenor) of an amount and a
//! [`TimeUnit`], with derived annualization data.
//!
//! A frequency knows how many times per year it occurs — exactly, when its
//! length divides the annualization base (364 days, 12 months, 4 quarters,
//! 2 half-years, 1 year), and as an estimate otherwise — and can advance or
//! retreat dates by whole periods.
//!
//! Well-known tenors are held in a [`FrequencyRegistry`] so that repeated
//! construction of, say, `3M` yields a canonical, comparison-stable value.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use finlib_core::ensure;
use finlib_core::errors::{Error, Result};

use crate::period::Period;
use crate::time_unit::{DateShift, TimeUnit};

/// Maximum length of an ordinary tenor in years.
const MAX_YEARS: i32 = 1_000;
/// Maximum length of an ordinary tenor in months.
const MAX_MONTHS: i32 = MAX_YEARS * 12;
/// Artificial year count of the whole-deal-term frequency.
const TERM_YEARS: i32 = 10_000;
/// Day count of the annualization year used for day/week tenors.
const DAYS_PER_YEAR: i32 = 364;

/// A periodic frequency: a positive amount of a single time unit.
///
/// Equality and hashing consider only `(unit, amount)`; the display name and
/// the derived annualization fields are determined by them.
#[derive(Debug, Clone)]
pub struct Frequency {
    unit: TimeUnit,
    amount: i32,
    name: String,
    is_annual: bool,
    months: i32,
    events_per_year: i32,
    events_per_year_estimate: f64,
}

impl PartialEq for Frequency {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.amount == other.amount
    }
}

impl Eq for Frequency {}

impl std::hash::Hash for Frequency {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.amount.hash(state);
    }
}

impl Frequency {
    /// Build a frequency with all derived fields, without amount checks.
    /// Callers validate `amount > 0` first.
    fn of_unchecked(amount: i32, unit: TimeUnit) -> Self {
        let (is_annual, months, events_per_year, events_per_year_estimate) =
            derive_events(amount, unit);
        Self {
            unit,
            amount,
            name: format!("{amount}{}", unit.symbol()),
            is_annual,
            months,
            events_per_year,
            events_per_year_estimate,
        }
    }

    /// A frequency of `amount` × `unit`.
    ///
    /// Common tenors resolve to canonical registry instances; any other
    /// positive amount builds a fresh value.
    ///
    /// # Errors
    /// Fails with [`Error::NonPositiveAmount`] if `amount ≤ 0`.
    pub fn of(amount: i32, unit: TimeUnit) -> Result<Self> {
        ensure!(amount > 0, Error::NonPositiveAmount(amount));
        Ok(FrequencyRegistry::standard().resolve(amount, unit))
    }

    /// A frequency of `days` calendar days. Multiples of seven normalize to
    /// the equivalent week frequency, so `of_days(14)` equals `of_weeks(2)`.
    pub fn of_days(days: i32) -> Result<Self> {
        if days > 0 && days % 7 == 0 {
            Self::of_weeks(days / 7)
        } else {
            Self::of(days, TimeUnit::Day)
        }
    }

    /// A frequency of `days` calendar days with no normalization to weeks.
    pub fn of_days_unaligned(days: i32) -> Result<Self> {
        Self::of(days, TimeUnit::Day)
    }

    /// A frequency of `weeks` calendar weeks.
    pub fn of_weeks(weeks: i32) -> Result<Self> {
        Self::of(weeks, TimeUnit::Week)
    }

    /// A frequency of `months` calendar months. Multiples of twelve
    /// normalize to the equivalent year frequency.
    ///
    /// # Errors
    /// Fails with [`Error::NonPositiveAmount`] for `months ≤ 0` and
    /// [`Error::AmountOutOfBounds`] for more than 12,000 months.
    pub fn of_months(months: i32) -> Result<Self> {
        ensure!(months > 0, Error::NonPositiveAmount(months));
        if months % 12 == 0 {
            return Self::of_years(months / 12);
        }
        ensure!(
            months <= MAX_MONTHS,
            Error::AmountOutOfBounds {
                label: "months",
                value: months,
                max: MAX_MONTHS,
            }
        );
        Self::of(months, TimeUnit::Month)
    }

    /// A frequency of `years` calendar years.
    ///
    /// # Errors
    /// Fails with [`Error::NonPositiveAmount`] for `years ≤ 0` and
    /// [`Error::AmountOutOfBounds`] for more than 1,000 years.
    pub fn of_years(years: i32) -> Result<Self> {
        ensure!(years > 0, Error::NonPositiveAmount(years));
        ensure!(
            years <= MAX_YEARS,
            Error::AmountOutOfBounds {
                label: "years",
                value: years,
                max: MAX_YEARS,
            }
        );
        Self::of(years, TimeUnit::Year)
    }

    /// A frequency derived from a single-unit calendar period.
    ///
    /// # Errors
    /// Fails with [`Error::UnsupportedMultiUnitPeriod`] when more than one
    /// of the period's components is non-zero, and with the usual amount
    /// errors otherwise.
    pub fn of_period(period: Period) -> Result<Self> {
        ensure!(
            period.unit_count() <= 1,
            Error::UnsupportedMultiUnitPeriod(period.to_string())
        );
        if period.years() != 0 {
            Self::of_years(period.years())
        } else if period.months() != 0 {
            Self::of_months(period.months())
        } else {
            Self::of_days(period.days())
        }
    }

    /// Parse the compact tenor notation: decimal digits followed by a
    /// one-letter unit symbol, with an optional leading `P` marker
    /// (`"3M"`, `"P14D"`).
    ///
    /// # Errors
    /// Fails with [`Error::MalformedFrequency`] on any other shape, with
    /// [`Error::UnknownUnitSymbol`] for an unrecognized unit letter, and
    /// with [`Error::NonPositiveAmount`] for a zero amount.
    pub fn parse(text: &str) -> Result<Self> {
        let body = text.strip_prefix('P').unwrap_or(text);
        let (symbol_at, _) = body
            .char_indices()
            .last()
            .ok_or_else(|| Error::MalformedFrequency(text.to_string()))?;
        let digits = &body[..symbol_at];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::MalformedFrequency(text.to_string()));
        }
        let amount: i32 = digits
            .parse()
            .map_err(|_| Error::MalformedFrequency(text.to_string()))?;
        let unit = TimeUnit::of_symbol(&body[symbol_at..])?;
        Self::of(amount, unit)
    }

    /// The reserved frequency matching the whole deal term, represented as
    /// 10,000 years with the display name `TERM`. It is excluded from the
    /// annual / events-per-year classification of ordinary tenors.
    pub fn term() -> Self {
        TERM.clone()
    }

    /// The unit of the period.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The positive number of units per period.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// The display name (`"3M"`, or `"TERM"` for the term frequency).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the frequency occurs a whole number of times at most once
    /// per year: every year count, months in multiples of 12, quarters in
    /// multiples of 4, half-years in multiples of 2. Day and week tenors
    /// are never annual.
    pub fn is_annual(&self) -> bool {
        self.is_annual
    }

    /// The period length in whole months; zero for day and week tenors.
    pub fn months(&self) -> i32 {
        self.months
    }

    /// Exact number of events per year, or zero when the period does not
    /// evenly divide the annualization base.
    pub fn events_per_year(&self) -> i32 {
        self.events_per_year
    }

    /// Approximate number of events per year; defined for every tenor.
    pub fn events_per_year_estimate(&self) -> f64 {
        self.events_per_year_estimate
    }

    /// The equivalent calendar period.
    pub fn to_period(&self) -> Period {
        match self.unit {
            TimeUnit::Day => Period::of_days(self.amount),
            TimeUnit::Week => Period::of_weeks(self.amount),
            TimeUnit::Month => Period::of_months(self.amount),
            TimeUnit::Quarter => Period::of_months(self.amount * 3),
            TimeUnit::HalfYear => Period::of_months(self.amount * 6),
            TimeUnit::Year => Period::of_years(self.amount),
        }
    }

    fn scaled(&self, date: NaiveDate, n: i32) -> Result<i64> {
        i64::from(n)
            .checked_mul(i64::from(self.amount))
            .ok_or(Error::DateOutOfRange(date))
    }
}

impl DateShift for Frequency {
    fn add_to(&self, date: NaiveDate, n: i32) -> Result<NaiveDate> {
        self.unit.add_scaled(date, self.scaled(date, n)?)
    }

    fn subtract_from(&self, date: NaiveDate, n: i32) -> Result<NaiveDate> {
        self.unit.add_scaled(date, -self.scaled(date, n)?)
    }

    fn add_with_eom_adjust(&self, date: NaiveDate, n: i32, eom_adjust: bool) -> Result<NaiveDate> {
        if eom_adjust && self.unit.supports_eom_adjust() {
            let shifted = date.succ_opt().ok_or(Error::DateOutOfRange(date))?;
            let shifted = self.unit.add_scaled(shifted, self.scaled(date, n)?)?;
            shifted.pred_opt().ok_or(Error::DateOutOfRange(date))
        } else {
            self.add_to(date, n)
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Derived annualization fields for `amount` of `unit`:
/// `(is_annual, months, events_per_year, events_per_year_estimate)`.
fn derive_events(amount: i32, unit: TimeUnit) -> (bool, i32, i32, f64) {
    let exact = |base: i32, length: i32| {
        if base % length == 0 {
            base / length
        } else {
            0
        }
    };
    match unit {
        TimeUnit::Day => (
            false,
            0,
            exact(DAYS_PER_YEAR, amount),
            f64::from(DAYS_PER_YEAR) / f64::from(amount),
        ),
        TimeUnit::Week => {
            let days = amount * 7;
            (
                false,
                0,
                exact(DAYS_PER_YEAR, days),
                f64::from(DAYS_PER_YEAR) / f64::from(days),
            )
        }
        TimeUnit::Month => (
            amount % 12 == 0,
            amount,
            exact(12, amount),
            12.0 / f64::from(amount),
        ),
        TimeUnit::Quarter => (
            amount % 4 == 0,
            amount * 3,
            exact(4, amount),
            4.0 / f64::from(amount),
        ),
        TimeUnit::HalfYear => (
            amount % 2 == 0,
            amount * 6,
            exact(2, amount),
            2.0 / f64::from(amount),
        ),
        TimeUnit::Year => (true, amount * 12, exact(1, amount), 1.0 / f64::from(amount)),
    }
}

/// The whole-deal-term frequency. Built directly so its derived fields stay
/// zero and its bounds-exempt year count never passes through `of_years`.
static TERM: LazyLock<Frequency> = LazyLock::new(|| Frequency {
    unit: TimeUnit::Year,
    amount: TERM_YEARS,
    name: "TERM".to_string(),
    is_annual: false,
    months: 0,
    events_per_year: 0,
    events_per_year_estimate: 0.0,
});

static STANDARD: LazyLock<FrequencyRegistry> = LazyLock::new(|| {
    FrequencyRegistry::new(
        [
            (1, TimeUnit::Day),
            (1, TimeUnit::Week),
            (2, TimeUnit::Week),
            (4, TimeUnit::Week),
            (13, TimeUnit::Week),
            (26, TimeUnit::Week),
            (52, TimeUnit::Week),
            (1, TimeUnit::Month),
            (2, TimeUnit::Month),
            (3, TimeUnit::Month),
            (4, TimeUnit::Month),
            (6, TimeUnit::Month),
            (9, TimeUnit::Month),
            (1, TimeUnit::Year),
            (2, TimeUnit::Year),
            (3, TimeUnit::Year),
            (5, TimeUnit::Year),
        ]
        .map(|(amount, unit)| Frequency::of_unchecked(amount, unit)),
    )
});

/// A registry of canonical [`Frequency`] instances keyed by amount and
/// unit, populated at construction and read-only thereafter.
///
/// The process-wide [`standard`](Self::standard) registry holds the
/// well-known tenors and is initialized at most once on first use; tests can
/// build isolated registries instead of relying on it.
#[derive(Debug, Clone, Default)]
pub struct FrequencyRegistry {
    entries: HashMap<(i32, TimeUnit), Frequency>,
}

impl FrequencyRegistry {
    /// Build a registry holding the given frequencies.
    pub fn new(entries: impl IntoIterator<Item = Frequency>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|frequency| ((frequency.amount(), frequency.unit()), frequency))
                .collect(),
        }
    }

    /// The process-wide registry of well-known tenors.
    pub fn standard() -> &'static FrequencyRegistry {
        &STANDARD
    }

    /// The canonical instance for `(amount, unit)`, if registered.
    pub fn get(&self, amount: i32, unit: TimeUnit) -> Option<&Frequency> {
        self.entries.get(&(amount, unit))
    }

    /// Number of registered tenors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no tenors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The canonical instance for `(amount, unit)`, or a freshly derived
    /// value-equal frequency when none is registered.
    pub fn resolve(&self, amount: i32, unit: TimeUnit) -> Frequency {
        self.get(amount, unit)
            .cloned()
            .unwrap_or_else(|| Frequency::of_unchecked(amount, unit))
    }
}
