//! Leap-year rules and per-month tables for the proleptic Gregorian calendar.

/// Number of days in each month, indexed by `[is_leap][month]`
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [[u8; 13]; 2] = [
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Days elapsed before the first of each month, indexed by
/// `[is_leap][month - 1]`. Entry 12 is the length of the year.
pub(crate) const DAYS_BEFORE_MONTH: [[u16; 13]; 2] = [
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365],
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366],
];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// `month` must be in 1..=12.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month), "month {month} out of range");
    DAYS_PER_MONTH[usize::from(is_leap_year(year))][usize::from(month)]
}

/// Returns 366 for leap years and 365 otherwise.
pub fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the 1-based ordinal day of `(year, month, day)` within its year.
///
/// Looks up the first day of the month instead of counting days.
pub fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    debug_assert!((1..=12).contains(&month), "month {month} out of range");
    DAYS_BEFORE_MONTH[usize::from(is_leap_year(year))][usize::from(month - 1)] + u16::from(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(2021, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn day_of_year_boundaries() {
        assert_eq!(day_of_year(2021, 1, 1), 1);
        assert_eq!(day_of_year(2021, 12, 31), 365);
        assert_eq!(day_of_year(2020, 12, 31), 366);
        assert_eq!(day_of_year(2020, 3, 1), 61);
        assert_eq!(day_of_year(2021, 3, 1), 60);
    }

    #[test]
    fn table_integrity_days_per_month() {
        for leap in 0..2 {
            let total: u16 = DAYS_PER_MONTH[leap][1..=12]
                .iter()
                .copied()
                .map(u16::from)
                .sum();
            assert_eq!(total, 365 + leap as u16);
        }
    }

    #[test]
    fn table_integrity_days_before_month() {
        for leap in 0..2 {
            for m in 1..=12usize {
                assert_eq!(
                    DAYS_BEFORE_MONTH[leap][m - 1] + u16::from(DAYS_PER_MONTH[leap][m]),
                    DAYS_BEFORE_MONTH[leap][m],
                    "DAYS_BEFORE_MONTH mismatch at leap={leap} month={m}"
                );
            }
        }
    }
}
