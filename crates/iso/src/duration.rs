//! Durations and the date units used to express them.

use std::fmt;
use std::str::FromStr;

use crate::error::IsoError;

const NANOS_PER_DAY: i128 = 86_400_000_000_000;

/// The calendar-relevant part of a duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateDuration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl DateDuration {
    /// Creates a date duration from its four components.
    pub fn new(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Returns -1, 0 or 1 depending on the sign of the first non-zero component.
    pub fn sign(&self) -> i8 {
        [self.years, self.months, self.weeks, self.days]
            .into_iter()
            .find(|v| *v != 0)
            .map_or(0, |v| v.signum() as i8)
    }

    /// Returns the duration with every component negated.
    pub fn negated(&self) -> Self {
        Self::new(-self.years, -self.months, -self.weeks, -self.days)
    }
}

impl fmt::Display for DateDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Duration::from(*self).fmt(f)
    }
}

/// A full duration, from years down to nanoseconds.
///
/// All components share the same sign; see [`Duration::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

impl Duration {
    fn components(&self) -> [i64; 10] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
            self.nanoseconds,
        ]
    }

    /// Checks that no two non-zero components have opposite signs.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::DurationOutOfRange`] for mixed signs.
    pub fn validate(&self) -> Result<(), IsoError> {
        let components = self.components();
        let positive = components.iter().any(|v| *v > 0);
        let negative = components.iter().any(|v| *v < 0);
        if positive && negative {
            return Err(IsoError::DurationOutOfRange {
                reason: "components have mixed signs",
            });
        }
        Ok(())
    }

    /// Returns the year/month/week/day part, ignoring sub-day components.
    pub fn date_part(&self) -> DateDuration {
        DateDuration::new(self.years, self.months, self.weeks, self.days)
    }

    /// Folds hours and smaller units into whole days, truncating toward zero.
    ///
    /// Any remainder below one day is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`IsoError::DurationOutOfRange`] if the day count overflows.
    pub fn balance_to_days(&self) -> Result<DateDuration, IsoError> {
        let nanos = i128::from(self.hours) * 3_600_000_000_000
            + i128::from(self.minutes) * 60_000_000_000
            + i128::from(self.seconds) * 1_000_000_000
            + i128::from(self.milliseconds) * 1_000_000
            + i128::from(self.microseconds) * 1_000
            + i128::from(self.nanoseconds);
        let overflow = || IsoError::DurationOutOfRange {
            reason: "day count overflows",
        };
        let extra = i64::try_from(nanos / NANOS_PER_DAY).map_err(|_| overflow())?;
        let days = self.days.checked_add(extra).ok_or_else(overflow)?;
        Ok(DateDuration::new(self.years, self.months, self.weeks, days))
    }
}

impl From<DateDuration> for Duration {
    fn from(d: DateDuration) -> Self {
        Self {
            years: d.years,
            months: d.months,
            weeks: d.weeks,
            days: d.days,
            ..Self::default()
        }
    }
}

impl fmt::Display for Duration {
    /// Formats as an ISO 8601 duration such as `P1Y2M3DT4H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.components();
        if components.iter().any(|v| *v < 0) {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        let date = [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ];
        for (value, unit) in date {
            if value != 0 {
                write!(f, "{}{unit}", value.unsigned_abs())?;
            }
        }
        let sub_second = u128::from(self.milliseconds.unsigned_abs()) * 1_000_000
            + u128::from(self.microseconds.unsigned_abs()) * 1_000
            + u128::from(self.nanoseconds.unsigned_abs());
        let has_time = self.hours != 0 || self.minutes != 0 || self.seconds != 0 || sub_second != 0;
        if has_time {
            f.write_str("T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours.unsigned_abs())?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes.unsigned_abs())?;
            }
            if self.seconds != 0 || sub_second != 0 {
                let seconds = u128::from(self.seconds.unsigned_abs()) + sub_second / 1_000_000_000;
                let fraction = sub_second % 1_000_000_000;
                if fraction == 0 {
                    write!(f, "{seconds}S")?;
                } else {
                    let digits = format!("{fraction:09}");
                    write!(f, "{seconds}.{}S", digits.trim_end_matches('0'))?;
                }
            }
        } else if components.iter().all(|v| *v == 0) {
            f.write_str("T0S")?;
        }
        Ok(())
    }
}

/// Largest unit allowed when differencing two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    Year,
    Month,
    Week,
    Day,
}

impl DateUnit {
    /// Returns the singular unit name.
    pub fn as_str(self) -> &'static str {
        match self {
            DateUnit::Year => "year",
            DateUnit::Month => "month",
            DateUnit::Week => "week",
            DateUnit::Day => "day",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateUnit {
    type Err = IsoError;

    /// Accepts singular and plural unit names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" | "years" => Ok(DateUnit::Year),
            "month" | "months" => Ok(DateUnit::Month),
            "week" | "weeks" => Ok(DateUnit::Week),
            "day" | "days" => Ok(DateUnit::Day),
            other => Err(IsoError::InvalidUnit {
                unit: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_day_parts_truncate_toward_zero() {
        let d = Duration {
            days: 1,
            hours: 47,
            ..Duration::default()
        };
        assert_eq!(d.balance_to_days().unwrap(), DateDuration::new(0, 0, 0, 2));

        let d = Duration {
            hours: -25,
            ..Duration::default()
        };
        assert_eq!(d.balance_to_days().unwrap(), DateDuration::new(0, 0, 0, -1));
    }

    #[test]
    fn balance_combines_units() {
        let d = Duration {
            hours: 23,
            minutes: 59,
            seconds: 59,
            milliseconds: 1_000,
            ..Duration::default()
        };
        assert_eq!(d.balance_to_days().unwrap().days, 1);
    }

    #[test]
    fn balance_overflow() {
        let d = Duration {
            days: i64::MAX,
            hours: 24,
            ..Duration::default()
        };
        assert!(matches!(
            d.balance_to_days(),
            Err(IsoError::DurationOutOfRange { .. })
        ));
    }

    #[test]
    fn mixed_signs_are_invalid() {
        let d = Duration {
            years: 1,
            days: -1,
            ..Duration::default()
        };
        assert!(d.validate().is_err());
        assert!(Duration::default().validate().is_ok());
    }

    #[test]
    fn sign() {
        assert_eq!(DateDuration::new(0, -1, 0, 0).sign(), -1);
        assert_eq!(DateDuration::default().sign(), 0);
        assert_eq!(DateDuration::new(0, 0, 0, 3).sign(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(DateDuration::new(1, 2, 0, 3).to_string(), "P1Y2M3D");
        assert_eq!(DateDuration::new(0, 0, -2, 0).to_string(), "-P2W");
        assert_eq!(Duration::default().to_string(), "PT0S");
        let d = Duration {
            hours: 4,
            seconds: 1,
            milliseconds: 500,
            ..Duration::default()
        };
        assert_eq!(d.to_string(), "PT4H1.5S");
    }

    #[test]
    fn unit_parse() {
        assert_eq!("years".parse::<DateUnit>().unwrap(), DateUnit::Year);
        assert_eq!("week".parse::<DateUnit>().unwrap(), DateUnit::Week);
        assert_eq!(
            "hour".parse::<DateUnit>().unwrap_err(),
            IsoError::InvalidUnit {
                unit: "hour".to_string()
            }
        );
    }
}
