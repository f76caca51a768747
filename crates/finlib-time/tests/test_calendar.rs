//! Integration tests for holiday policies and the business-day calendar:
//! day-walking over a fixed holiday set, composition equivalence, and
//! range counting.

use chrono::NaiveDate;
use finlib_time::{BusinessDayCalendar, DateRange, HolidayPolicy, MonthDay, WeekdayPolicy};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month_day(m: u32, d: u32) -> MonthDay {
    MonthDay::new(m, d).unwrap()
}

/// Calendar whose only holidays are 2019-05-15, 2019-05-16 and 2019-06-15.
fn fixed_holidays_calendar() -> BusinessDayCalendar {
    BusinessDayCalendar::new(HolidayPolicy::combined([HolidayPolicy::dates([
        date(2019, 5, 15),
        date(2019, 5, 16),
        date(2019, 6, 15),
    ])]))
}

#[test]
fn next_or_same_over_fixed_holidays() {
    let cal = fixed_holidays_calendar();
    assert_eq!(cal.next_or_same(date(2019, 5, 14)).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.next_or_same(date(2019, 5, 15)).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.next_or_same(date(2019, 5, 16)).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.next_or_same(date(2019, 6, 15)).unwrap(), date(2019, 6, 16));
    assert_eq!(cal.next_or_same(date(2019, 6, 16)).unwrap(), date(2019, 6, 16));
    assert_eq!(cal.next_or_same(date(2019, 6, 17)).unwrap(), date(2019, 6, 17));
}

#[test]
fn next_over_fixed_holidays() {
    let cal = fixed_holidays_calendar();
    assert_eq!(cal.next(date(2019, 5, 13)).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.next(date(2019, 5, 14)).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.next(date(2019, 5, 15)).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.next(date(2019, 6, 15)).unwrap(), date(2019, 6, 16));
}

#[test]
fn previous_over_fixed_holidays() {
    let cal = fixed_holidays_calendar();
    assert_eq!(cal.previous(date(2019, 5, 14)).unwrap(), date(2019, 5, 13));
    assert_eq!(cal.previous(date(2019, 5, 15)).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.previous(date(2019, 5, 16)).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.previous(date(2019, 5, 17)).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.previous(date(2019, 6, 18)).unwrap(), date(2019, 6, 17));
}

#[test]
fn nth_walks_over_fixed_holidays() {
    let cal = fixed_holidays_calendar();
    assert_eq!(cal.next_n(date(2019, 5, 10), 1).unwrap(), date(2019, 5, 11));
    assert_eq!(cal.next_n(date(2019, 5, 10), 2).unwrap(), date(2019, 5, 12));
    assert_eq!(cal.next_n(date(2019, 5, 10), 3).unwrap(), date(2019, 5, 13));
    assert_eq!(cal.next_n(date(2019, 5, 13), 1).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.next_n(date(2019, 5, 13), 2).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.next_n(date(2019, 5, 13), 3).unwrap(), date(2019, 5, 18));
    assert_eq!(cal.previous_n(date(2019, 5, 10), 1).unwrap(), date(2019, 5, 9));
    assert_eq!(cal.previous_n(date(2019, 5, 10), 2).unwrap(), date(2019, 5, 8));
    assert_eq!(cal.previous_n(date(2019, 5, 10), 3).unwrap(), date(2019, 5, 7));
    assert_eq!(cal.previous_n(date(2019, 5, 18), 1).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.previous_n(date(2019, 5, 18), 2).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.previous_n(date(2019, 5, 18), 3).unwrap(), date(2019, 5, 13));
}

#[test]
fn shift_over_fixed_holidays() {
    let cal = fixed_holidays_calendar();
    assert_eq!(cal.shift(date(2019, 5, 10), 1).unwrap(), date(2019, 5, 11));
    assert_eq!(cal.shift(date(2019, 5, 10), 2).unwrap(), date(2019, 5, 12));
    assert_eq!(cal.shift(date(2019, 5, 10), 3).unwrap(), date(2019, 5, 13));
    assert_eq!(cal.shift(date(2019, 5, 18), -1).unwrap(), date(2019, 5, 17));
    assert_eq!(cal.shift(date(2019, 5, 18), -2).unwrap(), date(2019, 5, 14));
    assert_eq!(cal.shift(date(2019, 5, 18), -3).unwrap(), date(2019, 5, 13));
}

#[test]
fn shift_round_trip_returns_to_start_from_business_days() {
    let cal = fixed_holidays_calendar();
    for day in [10, 13, 14, 17, 20] {
        let start = date(2019, 5, day);
        assert!(cal.is_business_day(start));
        for k in 1..=5 {
            let there = cal.shift(start, k).unwrap();
            assert_eq!(cal.shift(there, -k).unwrap(), start);
        }
    }
}

#[test]
fn or_same_is_idempotent_on_business_days() {
    let cal = fixed_holidays_calendar();
    let mut d = date(2019, 5, 1);
    while d <= date(2019, 6, 30) {
        let forward = cal.next_or_same(d).unwrap();
        assert_eq!(cal.next_or_same(forward).unwrap(), forward);
        let backward = cal.previous_or_same(d).unwrap();
        assert_eq!(cal.previous_or_same(backward).unwrap(), backward);
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn holidays_listed_in_order() {
    let cal = fixed_holidays_calendar();
    let may = DateRange::closed(date(2019, 5, 1), date(2019, 5, 31)).unwrap();
    let holidays: Vec<_> = cal.holidays(may).collect();
    assert_eq!(holidays, vec![date(2019, 5, 15), date(2019, 5, 16)]);
    assert_eq!(cal.business_days_count(may), 29);
}

#[test]
fn counting_january_2019_with_weekend_policy() {
    let weekend = BusinessDayCalendar::new(HolidayPolicy::Weekdays(WeekdayPolicy::sat_sun()));
    let no_holidays = BusinessDayCalendar::new(HolidayPolicy::combined([]));
    let closed = DateRange::closed(date(2019, 1, 1), date(2019, 1, 31)).unwrap();
    let closed_open = DateRange::closed_open(date(2019, 1, 1), date(2019, 1, 31)).unwrap();
    assert_eq!(no_holidays.business_days_count(closed_open), 30);
    assert_eq!(no_holidays.business_days_count(closed), 31);
    assert_eq!(weekend.business_days_count(closed_open), 22);
    assert_eq!(weekend.business_days_count(closed), 23);
    assert_eq!(
        weekend.holidays_count(closed) + weekend.business_days_count(closed),
        31
    );
}

#[test]
fn last_business_day_of_month_properties() {
    let policy = HolidayPolicy::combined([
        HolidayPolicy::Weekdays(WeekdayPolicy::sat_sun()),
        HolidayPolicy::month_days([month_day(12, 31), month_day(5, 31)]),
    ]);
    let cal = BusinessDayCalendar::new(policy);
    for month in 1..=12 {
        let probe = date(2019, month, 10);
        let last = cal.last_business_day_of_month(probe).unwrap();
        assert!(cal.is_business_day(last));
        assert_eq!(last.format("%Y-%m").to_string(), probe.format("%Y-%m").to_string());
        assert!(cal.is_last_business_day_of_month(last).unwrap());
        let next = cal.next(last).unwrap();
        assert_ne!(
            next.format("%Y-%m").to_string(),
            last.format("%Y-%m").to_string()
        );
    }
    // Dec 31 2019 is an explicit holiday on a Tuesday; the last business
    // day of December is Monday the 30th.
    assert_eq!(
        cal.last_business_day_of_month(date(2019, 12, 15)).unwrap(),
        date(2019, 12, 30)
    );
    // May 31 2019 is an explicit holiday on a Friday.
    assert_eq!(
        cal.last_business_day_of_month(date(2019, 5, 15)).unwrap(),
        date(2019, 5, 30)
    );
}

/// The same primitive set composed through `Combined` and through `Chained`
/// must classify every date identically across a full year and its month
/// boundaries.
#[test]
fn combined_and_chained_compositions_agree() {
    let weekends = || HolidayPolicy::Weekdays(WeekdayPolicy::sat_sun());
    let recurring = || {
        HolidayPolicy::month_days([
            month_day(1, 1),
            month_day(5, 1),
            month_day(12, 25),
            month_day(12, 26),
        ])
    };
    let one_off = || HolidayPolicy::dates([date(2019, 4, 19), date(2019, 8, 15)]);

    let combined = HolidayPolicy::combined([weekends(), recurring(), one_off()]);
    let chained = HolidayPolicy::chained(
        [weekends(), recurring()],
        Some(HolidayPolicy::chained([one_off()], None)),
    );
    let nested = HolidayPolicy::combined([
        HolidayPolicy::combined([weekends()]),
        HolidayPolicy::combined([recurring(), one_off()]),
    ]);

    let mut d = date(2018, 12, 15);
    let end = date(2020, 1, 15);
    while d <= end {
        let expected = combined.is_holiday(d);
        assert_eq!(chained.is_holiday(d), expected, "chained differs at {d}");
        assert_eq!(nested.is_holiday(d), expected, "nested differs at {d}");
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn exactly_one_of_holiday_and_business_day() {
    let cal = BusinessDayCalendar::new(HolidayPolicy::combined([
        HolidayPolicy::Weekdays(WeekdayPolicy::sat_sun()),
        HolidayPolicy::month_days([month_day(1, 1)]),
    ]));
    let mut d = date(2019, 1, 1);
    while d <= date(2019, 12, 31) {
        assert_ne!(cal.is_holiday(d), cal.is_business_day(d));
        d = d.succ_opt().unwrap();
    }
}
