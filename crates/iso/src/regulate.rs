//! Overflow policy and regulation of raw year/month/day components.

use std::fmt;
use std::str::FromStr;

use crate::date::{PlainDate, PlainYearMonth};
use crate::error::IsoError;
use crate::year::days_in_month;

/// How out-of-range components are handled when building a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Clamp components into their valid range.
    #[default]
    Constrain,
    /// Fail with [`IsoError::OverflowRejected`].
    Reject,
}

impl Overflow {
    /// Returns the option string for this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Overflow::Constrain => "constrain",
            Overflow::Reject => "reject",
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overflow {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constrain" => Ok(Overflow::Constrain),
            "reject" => Ok(Overflow::Reject),
            other => Err(IsoError::InvalidOverflow {
                value: other.to_string(),
            }),
        }
    }
}

/// A regulated year/month/day whose year has not yet been range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDateRecord {
    /// Year, possibly outside the representable range.
    pub year: i64,
    /// Month in 1..=12.
    pub month: u8,
    /// Day in 1..=days_in_month(year, month).
    pub day: u8,
}

impl IsoDateRecord {
    /// Converts the record into a [`PlainDate`], checking the ISO limits.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::DateOutOfRange`] outside the representable range.
    pub fn to_plain_date(self) -> Result<PlainDate, IsoError> {
        PlainDate::within_limits(self.year, self.month, self.day)
    }
}

fn rejected(field: &'static str, value: i64, max: i64) -> IsoError {
    IsoError::OverflowRejected {
        field,
        value,
        min: 1,
        max,
    }
}

/// Regulates a year/month/day triple under `overflow`.
///
/// `month` and `day` are expected to be positive integers. Under
/// [`Overflow::Constrain`] the month is clamped to 1..=12 and the day to the
/// length of the clamped month; under [`Overflow::Reject`] any out-of-range
/// component is an error.
///
/// # Errors
///
/// Returns [`IsoError::OverflowRejected`] under `Reject`.
pub fn regulate_iso_date(
    year: i64,
    month: i64,
    day: i64,
    overflow: Overflow,
) -> Result<IsoDateRecord, IsoError> {
    match overflow {
        Overflow::Constrain => {
            let month = month.clamp(1, 12) as u8;
            let max_day = days_in_month(year, month);
            let day = day.clamp(1, i64::from(max_day)) as u8;
            Ok(IsoDateRecord { year, month, day })
        }
        Overflow::Reject => {
            if !(1..=12).contains(&month) {
                return Err(rejected("month", month, 12));
            }
            let month = month as u8;
            let max_day = i64::from(days_in_month(year, month));
            if !(1..=max_day).contains(&day) {
                return Err(rejected("day", day, max_day));
            }
            Ok(IsoDateRecord {
                year,
                month,
                day: day as u8,
            })
        }
    }
}

/// Regulates a year/month pair under `overflow` and builds the year-month.
///
/// # Errors
///
/// Returns [`IsoError::OverflowRejected`] under `Reject` and
/// [`IsoError::YearMonthOutOfRange`] outside the ISO limits.
pub fn regulate_iso_year_month(
    year: i64,
    month: i64,
    overflow: Overflow,
) -> Result<PlainYearMonth, IsoError> {
    let month = match overflow {
        Overflow::Constrain => month.clamp(1, 12),
        Overflow::Reject if (1..=12).contains(&month) => month,
        Overflow::Reject => return Err(rejected("month", month, 12)),
    };
    PlainYearMonth::within_limits(year, month as u8)
}
