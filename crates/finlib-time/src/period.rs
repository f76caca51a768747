//! `Period` — a generic calendar period of years, months, and days.
//!
//! Unlike a [`Frequency`](crate::frequency::Frequency), a period may mix
//! units; only single-unit periods can be converted into a frequency.

/// A span of calendar time split into year, month, and day components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The zero-length period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Create a period from explicit components.
    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A period of `days` calendar days.
    pub fn of_days(days: i32) -> Self {
        Self::new(0, 0, days)
    }

    /// A period of `weeks` calendar weeks, stored as `7 × weeks` days.
    pub fn of_weeks(weeks: i32) -> Self {
        Self::new(0, 0, weeks * 7)
    }

    /// A period of `months` calendar months.
    pub fn of_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// A period of `years` calendar years.
    pub fn of_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// The year component.
    pub fn years(&self) -> i32 {
        self.years
    }

    /// The month component.
    pub fn months(&self) -> i32 {
        self.months
    }

    /// The day component.
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Total months across the year and month components.
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Whether all components are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Number of non-zero components.
    pub fn unit_count(&self) -> usize {
        [self.years, self.months, self.days]
            .iter()
            .filter(|component| **component != 0)
            .count()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Period::of_days(30).to_string(), "P30D");
        assert_eq!(Period::of_weeks(2).to_string(), "P14D");
        assert_eq!(Period::of_months(2).to_string(), "P2M");
        assert_eq!(Period::of_years(2).to_string(), "P2Y");
        assert_eq!(Period::new(1, 2, 0).to_string(), "P1Y2M");
        assert_eq!(Period::ZERO.to_string(), "P0D");
    }

    #[test]
    fn weeks_are_days() {
        assert_eq!(Period::of_weeks(2), Period::of_days(14));
    }

    #[test]
    fn unit_count() {
        assert_eq!(Period::ZERO.unit_count(), 0);
        assert_eq!(Period::of_months(3).unit_count(), 1);
        assert_eq!(Period::new(1, 2, 0).unit_count(), 2);
        assert_eq!(Period::new(1, 2, 3).unit_count(), 3);
    }

    #[test]
    fn total_months() {
        assert_eq!(Period::new(2, 5, 0).total_months(), 29);
        assert_eq!(Period::of_days(10).total_months(), 0);
    }
}
