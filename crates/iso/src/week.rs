//! ISO 8601 week numbering.

use crate::date::PlainDate;
use crate::epoch;
use crate::year;

/// An ISO week-numbering year together with a week number (1..=53).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearWeek {
    /// Week-numbering year; differs from the calendar year near year ends.
    pub year: i32,
    /// Week within the week-numbering year.
    pub week: u8,
}

/// An ISO year has 53 weeks if it starts on a Thursday, or if it is a leap
/// year starting on a Wednesday.
fn is_long_year(year: i64) -> bool {
    let start = epoch::day_of_week(epoch::epoch_day(year, 1, 1));
    start == 4 || (start == 3 && year::is_leap_year(year))
}

/// Returns the ISO week-numbering year and week of `date`.
pub fn week_of_year(date: PlainDate) -> YearWeek {
    let year = date.year();
    let doy = i32::from(date.day_of_year());
    let dow = i32::from(date.day_of_week());

    let week = (10 + doy - dow) / 7;
    debug_assert!((0..=53).contains(&week));

    // Belongs to the last week (52 or 53) of the previous year.
    if week == 0 {
        let prev = i64::from(year) - 1;
        return YearWeek {
            year: year - 1,
            week: 52 + u8::from(is_long_year(prev)),
        };
    }

    // Belongs to week 1 of the next year unless this year is long.
    if week == 53 && !is_long_year(i64::from(year)) {
        return YearWeek {
            year: year + 1,
            week: 1,
        };
    }

    YearWeek {
        year,
        week: week as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yw(y: i32, m: u8, d: u8) -> YearWeek {
        week_of_year(PlainDate::new(y, m, d).unwrap())
    }

    #[test]
    fn january_first_1977_is_week_53_of_1976() {
        assert_eq!(yw(1977, 1, 1), YearWeek { year: 1976, week: 53 });
    }

    #[test]
    fn previous_year_week_52() {
        // 2021-01-03 is a Sunday; 2020 is a leap year starting on Wednesday
        // so it has 53 weeks.
        assert_eq!(yw(2021, 1, 3), YearWeek { year: 2020, week: 53 });
        // 2022-01-01 is a Saturday; 2021 has 52 weeks.
        assert_eq!(yw(2022, 1, 1), YearWeek { year: 2021, week: 52 });
    }

    #[test]
    fn rolls_into_next_year() {
        // 2024-12-30 is a Monday in week 1 of 2025.
        assert_eq!(yw(2024, 12, 30), YearWeek { year: 2025, week: 1 });
        assert_eq!(yw(2018, 12, 31), YearWeek { year: 2019, week: 1 });
    }

    #[test]
    fn ordinary_dates() {
        assert_eq!(yw(2021, 6, 15), YearWeek { year: 2021, week: 24 });
        assert_eq!(yw(2020, 12, 31), YearWeek { year: 2020, week: 53 });
        assert_eq!(yw(2024, 1, 1), YearWeek { year: 2024, week: 1 });
    }

    #[test]
    fn long_years() {
        assert!(is_long_year(2015)); // starts Thursday
        assert!(is_long_year(2020)); // leap, starts Wednesday
        assert!(!is_long_year(2021));
        assert!(is_long_year(1976)); // leap, starts Thursday
    }
}
