//! Validated ISO dates, year-months and month-days.

use std::fmt;
use std::str::FromStr;

use crate::epoch;
use crate::error::IsoError;
use crate::week::{YearWeek, week_of_year};
use crate::year;

/// Smallest epoch day a date may occupy (-271821-04-19).
pub const MIN_EPOCH_DAY: i64 = -100_000_001;

/// Largest epoch day a date may occupy (+275760-09-13).
pub const MAX_EPOCH_DAY: i64 = 100_000_000;

/// Reference year used for month-days; a leap year so that `--02-29` exists.
pub const REFERENCE_ISO_YEAR: i32 = 1972;

const MIN_YEAR_MONTH: (i64, u8) = (-271_821, 4);
const MAX_YEAR_MONTH: (i64, u8) = (275_760, 9);

/// A date in the proleptic Gregorian calendar.
///
/// Always holds a valid month/day combination within the ISO date-time
/// limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PlainDate {
    /// Creates a new `PlainDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::OverflowRejected`] if the month or day is not a
    /// valid calendar component, or [`IsoError::DateOutOfRange`] if the date
    /// lies outside the representable range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, IsoError> {
        check_month(i64::from(month))?;
        let max_day = year::days_in_month(i64::from(year), month);
        if !(1..=max_day).contains(&day) {
            return Err(IsoError::OverflowRejected {
                field: "day",
                value: i64::from(day),
                min: 1,
                max: i64::from(max_day),
            });
        }
        Self::within_limits(i64::from(year), month, day)
    }

    /// Creates a date from components that are already known to form a
    /// valid month/day pair, checking only the representable range.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::DateOutOfRange`] if the year does not fit or the
    /// date lies outside the ISO limits.
    pub(crate) fn within_limits(year: i64, month: u8, day: u8) -> Result<Self, IsoError> {
        let out_of_range = || IsoError::DateOutOfRange { year, month, day };
        let year32 = i32::try_from(year).map_err(|_| out_of_range())?;
        let days = epoch::epoch_day(year, month, day);
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&days) {
            return Err(out_of_range());
        }
        Ok(Self {
            year: year32,
            month,
            day,
        })
    }

    /// Creates the date lying `days` days after 1970-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::DateOutOfRange`] outside the ISO limits.
    pub fn from_epoch_day(days: i64) -> Result<Self, IsoError> {
        let (year, month, day) = epoch::from_epoch_day(days);
        Self::within_limits(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month code, e.g. `"M02"` for February.
    pub fn month_code(self) -> String {
        month_code(self.month)
    }

    /// Returns the number of days since 1970-01-01.
    pub fn epoch_day(self) -> i64 {
        epoch::epoch_day(i64::from(self.year), self.month, self.day)
    }

    /// Returns the ISO day of week (1 = Monday, ..., 7 = Sunday).
    pub fn day_of_week(self) -> u8 {
        epoch::day_of_week(self.epoch_day())
    }

    /// Returns the ordinal day within the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        year::day_of_year(i64::from(self.year), self.month, self.day)
    }

    /// Returns the ISO week-numbering year and week.
    pub fn week_of_year(self) -> YearWeek {
        week_of_year(self)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        year::days_in_month(i64::from(self.year), self.month)
    }

    /// Returns the number of days in this date's year.
    pub fn days_in_year(self) -> u16 {
        year::days_in_year(i64::from(self.year))
    }

    /// Returns `true` if this date's year is a leap year.
    pub fn in_leap_year(self) -> bool {
        year::is_leap_year(i64::from(self.year))
    }
}

impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for PlainDate {
    type Err = IsoError;

    /// Parses `YYYY-MM-DD` or `±YYYYYY-MM-DD`, ignoring any trailing time
    /// (`T...`) or bracketed annotations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || IsoError::ParseDate {
            input: s.to_string(),
        };
        let date_part = s
            .split(['T', 't', '['])
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(parse_err)?;

        let (sign, rest) = match date_part.as_bytes()[0] {
            b'+' => (1, &date_part[1..]),
            b'-' => (-1, &date_part[1..]),
            _ => (0, date_part),
        };
        let mut parts = rest.split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err());
        };
        let expanded = sign != 0;
        if (expanded && y.len() != 6) || (!expanded && y.len() != 4) || m.len() != 2 || d.len() != 2
        {
            return Err(parse_err());
        }
        if ![y, m, d].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
            return Err(parse_err());
        }
        if sign == -1 && y == "000000" {
            return Err(parse_err());
        }
        let year: i32 = y.parse().map_err(|_| parse_err())?;
        let month: u8 = m.parse().map_err(|_| parse_err())?;
        let day: u8 = d.parse().map_err(|_| parse_err())?;
        let year = if sign == -1 { -year } else { year };
        Self::new(year, month, day)
    }
}

/// A year and month, stored with a reference day of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainYearMonth {
    year: i32,
    month: u8,
}

impl PlainYearMonth {
    /// Creates a new `PlainYearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::OverflowRejected`] for a month outside 1..=12 and
    /// [`IsoError::YearMonthOutOfRange`] outside the ISO year-month limits.
    pub fn new(year: i32, month: u8) -> Result<Self, IsoError> {
        check_month(i64::from(month))?;
        Self::within_limits(i64::from(year), month)
    }

    pub(crate) fn within_limits(year: i64, month: u8) -> Result<Self, IsoError> {
        if !(MIN_YEAR_MONTH..=MAX_YEAR_MONTH).contains(&(year, month)) {
            return Err(IsoError::YearMonthOutOfRange { year, month });
        }
        let year = i32::try_from(year).map_err(|_| IsoError::YearMonthOutOfRange { year, month })?;
        Ok(Self { year, month })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the ISO date of the reference day (the first of the month).
    pub fn iso_date(self) -> PlainDate {
        PlainDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }
}

impl fmt::Display for PlainYearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}", self.month)
    }
}

/// A month and day anchored to [`REFERENCE_ISO_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainMonthDay {
    month: u8,
    day: u8,
}

impl PlainMonthDay {
    /// Creates a new `PlainMonthDay`, validated against the reference year.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::OverflowRejected`] if the month or day is invalid.
    pub fn new(month: u8, day: u8) -> Result<Self, IsoError> {
        let date = PlainDate::new(REFERENCE_ISO_YEAR, month, day)?;
        Ok(Self {
            month: date.month,
            day: date.day,
        })
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month code, e.g. `"M02"` for February.
    pub fn month_code(self) -> String {
        month_code(self.month)
    }

    /// Returns the ISO date in the reference year.
    pub fn iso_date(self) -> PlainDate {
        PlainDate {
            year: REFERENCE_ISO_YEAR,
            month: self.month,
            day: self.day,
        }
    }
}

impl fmt::Display for PlainMonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

/// Formats `month` (1..=12) as a month code: `"M"` followed by two digits.
pub fn month_code(month: u8) -> String {
    debug_assert!((1..=12).contains(&month), "month {month} out of range");
    format!("M{month:02}")
}

fn check_month(month: i64) -> Result<(), IsoError> {
    if !(1..=12).contains(&month) {
        return Err(IsoError::OverflowRejected {
            field: "month",
            value: month,
            min: 1,
            max: 12,
        });
    }
    Ok(())
}

fn write_year(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
    if (0..=9999).contains(&year) {
        write!(f, "{year:04}")
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        write!(f, "{sign}{:06}", year.unsigned_abs())
    }
}
