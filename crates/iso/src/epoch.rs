//! Conversions between calendar dates and days since 1970-01-01.

use crate::year::day_of_year;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_FROM_0000_03_01_TO_EPOCH: i64 = 719_468;

/// Number of the first day of `year`, counted from 1970-01-01.
fn day_from_year(year: i64) -> i64 {
    365 * (year - 1970) + (year - 1969).div_euclid(4) - (year - 1901).div_euclid(100)
        + (year - 1601).div_euclid(400)
}

/// Returns the number of days between 1970-01-01 and `(year, month, day)`.
///
/// Negative for dates before the epoch. `month` must be in 1..=12; `day` is
/// not checked against the month length, so `(2021, 1, 32)` is 2021-02-01.
pub fn epoch_day(year: i64, month: u8, day: u8) -> i64 {
    day_from_year(year) + i64::from(day_of_year(year, month, day)) - 1
}

/// Returns the `(year, month, day)` that lies `days` days after 1970-01-01.
pub fn from_epoch_day(days: i64) -> (i64, u8, u8) {
    // ref: http://howardhinnant.github.io/date_algorithms.html
    let shifted = days + DAYS_FROM_0000_03_01_TO_EPOCH;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / (DAYS_PER_ERA - 1))
            / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month as u8, day as u8)
}

/// Returns the ISO day of week for an epoch day: 1 = Monday, ..., 7 = Sunday.
pub fn day_of_week(epoch_day: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    let weekday = (epoch_day + 4).rem_euclid(7);
    if weekday == 0 { 7 } else { weekday as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(epoch_day(1970, 1, 1), 0);
        assert_eq!(from_epoch_day(0), (1970, 1, 1));
    }

    #[test]
    fn known_epoch_days() {
        assert_eq!(epoch_day(2000, 1, 1), 10_957);
        assert_eq!(epoch_day(1969, 12, 31), -1);
        assert_eq!(epoch_day(2021, 2, 28), 18_686);
        assert_eq!(epoch_day(0, 1, 1), -719_528);
    }

    #[test]
    fn inverse_of_known_days() {
        assert_eq!(from_epoch_day(10_957), (2000, 1, 1));
        assert_eq!(from_epoch_day(-1), (1969, 12, 31));
        assert_eq!(from_epoch_day(-719_528), (0, 1, 1));
        assert_eq!(from_epoch_day(-719_529), (-1, 12, 31));
    }

    #[test]
    fn day_overflow_rolls_into_next_month() {
        assert_eq!(epoch_day(2021, 1, 32), epoch_day(2021, 2, 1));
    }

    #[test]
    fn weekdays() {
        assert_eq!(day_of_week(0), 4); // Thursday
        assert_eq!(day_of_week(epoch_day(2024, 1, 1)), 1); // Monday
        assert_eq!(day_of_week(epoch_day(2023, 12, 31)), 7); // Sunday
        assert_eq!(day_of_week(-1), 3); // Wednesday
        assert_eq!(day_of_week(-4), 7);
    }
}
