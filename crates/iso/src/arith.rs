//! Adding durations to dates and differencing two dates.

use crate::date::PlainDate;
use crate::duration::{DateDuration, DateUnit};
use crate::epoch;
use crate::error::IsoError;
use crate::regulate::{Overflow, regulate_iso_date};
use crate::year::days_in_month;

/// Normalizes a month that may lie outside 1..=12 into the adjacent years.
fn balance_iso_year_month(year: i64, month: i64) -> (i64, i64) {
    (year + (month - 1).div_euclid(12), (month - 1).rem_euclid(12) + 1)
}

/// Returns `true` if `(year, month, day)` lies strictly past `target` in the
/// direction given by `sign`. `day` is not checked against the month length.
fn surpasses(sign: i64, year: i64, month: i64, day: u8, target: PlainDate) -> bool {
    let candidate = (year, month, day);
    let target = (
        i64::from(target.year()),
        i64::from(target.month()),
        target.day(),
    );
    match sign {
        1 => candidate > target,
        _ => candidate < target,
    }
}

/// Adds `duration` to `date`.
///
/// Years and months are applied first, the day is regulated under
/// `overflow`, and weeks and days are added last.
///
/// # Errors
///
/// Returns [`IsoError::OverflowRejected`] if the intermediate day does not
/// exist under [`Overflow::Reject`], [`IsoError::DurationOutOfRange`] if the
/// arithmetic overflows, and [`IsoError::DateOutOfRange`] if the result lies
/// outside the ISO limits.
pub fn add_iso_date(
    date: PlainDate,
    duration: &DateDuration,
    overflow: Overflow,
) -> Result<PlainDate, IsoError> {
    let too_large = || IsoError::DurationOutOfRange {
        reason: "date arithmetic overflows",
    };

    let year = i64::from(date.year())
        .checked_add(duration.years)
        .ok_or_else(too_large)?;
    let month = i64::from(date.month())
        .checked_add(duration.months)
        .ok_or_else(too_large)?;
    let (year, month) = balance_iso_year_month(year, month);
    if i32::try_from(year).is_err() {
        return Err(IsoError::DateOutOfRange {
            year,
            month: month as u8,
            day: date.day(),
        });
    }

    let intermediate = regulate_iso_date(year, month, i64::from(date.day()), overflow)?;

    let days = duration
        .weeks
        .checked_mul(7)
        .and_then(|w| w.checked_add(duration.days))
        .ok_or_else(too_large)?;
    let target = epoch::epoch_day(intermediate.year, intermediate.month, intermediate.day)
        .checked_add(days)
        .ok_or_else(too_large)?;
    PlainDate::from_epoch_day(target)
}

/// Returns the duration from `one` to `two`, expressed in units no larger
/// than `largest_unit`.
///
/// The result is positive when `two` is later than `one`.
pub fn difference_iso_date(one: PlainDate, two: PlainDate, largest_unit: DateUnit) -> DateDuration {
    let sign: i64 = match two.cmp(&one) {
        std::cmp::Ordering::Equal => return DateDuration::default(),
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
    };

    let (y1, m1, d1) = (i64::from(one.year()), i64::from(one.month()), one.day());
    let (y2, m2) = (i64::from(two.year()), i64::from(two.month()));

    let mut years = 0;
    if largest_unit == DateUnit::Year {
        // Start one year short of the plain year difference and step forward.
        let mut candidate = y2 - y1;
        if candidate != 0 {
            candidate -= sign;
        }
        while !surpasses(sign, y1 + candidate, m1, d1, two) {
            years = candidate;
            candidate += sign;
        }
    }

    let mut months = 0;
    if matches!(largest_unit, DateUnit::Year | DateUnit::Month) {
        let mut candidate = (y2 * 12 + m2) - ((y1 + years) * 12 + m1);
        if candidate != 0 {
            candidate -= sign;
        }
        loop {
            let (y, m) = balance_iso_year_month(y1 + years, m1 + candidate);
            if surpasses(sign, y, m, d1, two) {
                break;
            }
            months = candidate;
            candidate += sign;
        }
    }

    let (y, m) = balance_iso_year_month(y1 + years, m1 + months);
    let constrained_day = d1.min(days_in_month(y, m as u8));
    let days = two.epoch_day() - epoch::epoch_day(y, m as u8, constrained_day);

    let (weeks, days) = match largest_unit {
        DateUnit::Week => (days / 7, days % 7),
        _ => (0, days),
    };

    DateDuration::new(years, months, weeks, days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> PlainDate {
        PlainDate::new(y, m, d).unwrap()
    }

    fn months(n: i64) -> DateDuration {
        DateDuration::new(0, n, 0, 0)
    }

    #[test]
    fn add_month_constrains_end_of_month() {
        assert_eq!(
            add_iso_date(date(2021, 1, 31), &months(1), Overflow::Constrain).unwrap(),
            date(2021, 2, 28)
        );
        assert_eq!(
            add_iso_date(date(2020, 1, 31), &months(1), Overflow::Constrain).unwrap(),
            date(2020, 2, 29)
        );
    }

    #[test]
    fn add_month_rejects_missing_day() {
        assert!(matches!(
            add_iso_date(date(2021, 1, 31), &months(1), Overflow::Reject),
            Err(IsoError::OverflowRejected { field: "day", .. })
        ));
    }

    #[test]
    fn add_crosses_year_boundary() {
        assert_eq!(
            add_iso_date(date(2021, 11, 15), &months(3), Overflow::Constrain).unwrap(),
            date(2022, 2, 15)
        );
        assert_eq!(
            add_iso_date(date(2021, 2, 15), &months(-3), Overflow::Constrain).unwrap(),
            date(2020, 11, 15)
        );
    }

    #[test]
    fn add_weeks_and_days() {
        let d = DateDuration::new(0, 0, 2, 3);
        assert_eq!(
            add_iso_date(date(2021, 12, 20), &d, Overflow::Constrain).unwrap(),
            date(2022, 1, 6)
        );
    }

    #[test]
    fn add_out_of_range() {
        let d = DateDuration::new(0, 0, 0, 1);
        assert!(matches!(
            add_iso_date(date(275_760, 9, 13), &d, Overflow::Constrain),
            Err(IsoError::DateOutOfRange { .. })
        ));
        let d = DateDuration::new(i64::MAX, 0, 0, 0);
        assert!(add_iso_date(date(2000, 1, 1), &d, Overflow::Constrain).is_err());
    }

    #[test]
    fn difference_in_days() {
        assert_eq!(
            difference_iso_date(date(2021, 1, 1), date(2021, 3, 1), DateUnit::Day),
            DateDuration::new(0, 0, 0, 59)
        );
        assert_eq!(
            difference_iso_date(date(2021, 3, 1), date(2021, 1, 1), DateUnit::Day),
            DateDuration::new(0, 0, 0, -59)
        );
    }

    #[test]
    fn difference_in_weeks() {
        assert_eq!(
            difference_iso_date(date(2021, 1, 1), date(2021, 1, 20), DateUnit::Week),
            DateDuration::new(0, 0, 2, 5)
        );
    }

    #[test]
    fn difference_in_months_and_years() {
        assert_eq!(
            difference_iso_date(date(2019, 1, 31), date(2021, 3, 1), DateUnit::Year),
            DateDuration::new(2, 1, 0, 1)
        );
        assert_eq!(
            difference_iso_date(date(2019, 1, 31), date(2021, 3, 1), DateUnit::Month),
            DateDuration::new(0, 25, 0, 1)
        );
        assert_eq!(
            difference_iso_date(date(2021, 3, 1), date(2019, 1, 31), DateUnit::Year),
            DateDuration::new(-2, -1, 0, -1)
        );
    }

    #[test]
    fn difference_end_of_month() {
        // One month after Jan 31 constrains to Feb 28.
        assert_eq!(
            difference_iso_date(date(2021, 1, 31), date(2021, 2, 28), DateUnit::Month),
            DateDuration::new(0, 0, 0, 28)
        );
        assert_eq!(
            difference_iso_date(date(2021, 1, 31), date(2021, 3, 31), DateUnit::Month),
            DateDuration::new(0, 2, 0, 0)
        );
    }

    #[test]
    fn difference_same_date() {
        let d = date(2000, 6, 1);
        assert_eq!(difference_iso_date(d, d, DateUnit::Year), DateDuration::default());
    }

    #[test]
    fn balance_year_month() {
        assert_eq!(balance_iso_year_month(2021, 13), (2022, 1));
        assert_eq!(balance_iso_year_month(2021, 0), (2020, 12));
        assert_eq!(balance_iso_year_month(2021, -12), (2019, 12));
    }
}
