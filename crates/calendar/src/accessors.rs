//! Per-field calendar accessors: `year`, `month`, `dayOfWeek` and friends.
//!
//! Every accessor except [`calendar_day`] looks its method up afresh on an
//! external provider. Results of external calls are checked against the
//! kind each accessor promises.

use tracing::trace;

use crate::builtin::{is_builtin_fast_path, iso_accessor};
use crate::error::CalendarError;
use crate::method::{CalendarMethod, MethodSet};
use crate::provider::CalendarProvider;
use crate::record::MethodsRecord;
use crate::value::{DateLike, DateObject, FieldBag, Value};

type Convert<T> = fn(CalendarMethod, Value) -> Result<T, CalendarError>;

fn unexpected(method: CalendarMethod, expected: &'static str, found: &Value) -> CalendarError {
    CalendarError::UnexpectedResultType {
        method: method.name(),
        expected,
        found: found.describe(),
    }
}

fn integral(method: CalendarMethod, value: Value) -> Result<i64, CalendarError> {
    match value {
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 => Ok(n as i64),
        other => Err(unexpected(method, "an integer", &other)),
    }
}

fn positive_integral(method: CalendarMethod, value: Value) -> Result<i64, CalendarError> {
    match value {
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n > 0.0 => Ok(n as i64),
        other => Err(unexpected(method, "a positive integer", &other)),
    }
}

fn string(method: CalendarMethod, value: Value) -> Result<String, CalendarError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(unexpected(method, "a string", &other)),
    }
}

fn boolean(method: CalendarMethod, value: Value) -> Result<bool, CalendarError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(unexpected(method, "a boolean", &other)),
    }
}

fn call_accessor<T>(
    provider: &CalendarProvider,
    date: &DateLike,
    method: CalendarMethod,
    convert: Convert<T>,
) -> Result<T, CalendarError> {
    let CalendarProvider::External(cal) = provider else {
        return convert(method, iso_accessor(method, date.iso_date()));
    };
    let f = cal.get_method(method)?;
    if cal.as_builtin().is_some() && f.is_builtin(method) {
        trace!(method = method.name(), "accessor: built-in instance fast path");
        return convert(method, iso_accessor(method, date.iso_date()));
    }
    trace!(method = method.name(), "accessor: calling external capability");
    convert(method, f.call(&provider.to_value(), &[date.to_value()])?)
}

macro_rules! accessor {
    ($(#[$doc:meta])* $name:ident, $method:ident, $ty:ty, $convert:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Propagates lookup and call failures of an external provider and
        /// returns [`CalendarError::UnexpectedResultType`] for a result of
        /// the wrong kind.
        pub fn $name(provider: &CalendarProvider, date: &DateLike) -> Result<$ty, CalendarError> {
            call_accessor(provider, date, CalendarMethod::$method, $convert)
        }
    };
}

accessor!(
    /// The calendar year.
    calendar_year, Year, i64, integral
);
accessor!(
    /// The ordinal month, starting at 1.
    calendar_month, Month, i64, positive_integral
);
accessor!(
    /// The month code, e.g. `"M02"`.
    calendar_month_code, MonthCode, String, string
);
accessor!(
    /// The day of the week, 1 for Monday through 7 for Sunday in ISO.
    calendar_day_of_week, DayOfWeek, i64, positive_integral
);
accessor!(
    /// The day of the year, starting at 1.
    calendar_day_of_year, DayOfYear, i64, positive_integral
);
accessor!(
    /// The week of the week-numbering year.
    calendar_week_of_year, WeekOfYear, i64, positive_integral
);
accessor!(
    /// The week-numbering year, which differs from the calendar year near
    /// year boundaries.
    calendar_year_of_week, YearOfWeek, i64, integral
);
accessor!(
    /// Days in a week.
    calendar_days_in_week, DaysInWeek, i64, positive_integral
);
accessor!(
    /// Days in the month of the date.
    calendar_days_in_month, DaysInMonth, i64, positive_integral
);
accessor!(
    /// Days in the year of the date.
    calendar_days_in_year, DaysInYear, i64, positive_integral
);
accessor!(
    /// Months in the year of the date.
    calendar_months_in_year, MonthsInYear, i64, positive_integral
);
accessor!(
    /// Whether the year of the date is a leap year.
    calendar_in_leap_year, InLeapYear, bool, boolean
);

/// The day of the month, dispatched through a methods record that has
/// looked up `day`.
///
/// # Errors
///
/// Propagates call failures of an external capability and returns
/// [`CalendarError::UnexpectedResultType`] unless it returns a positive
/// integer.
pub fn calendar_day(record: &MethodsRecord, date: &DateLike) -> Result<i64, CalendarError> {
    let method = CalendarMethod::Day;
    match record.method(method) {
        None => positive_integral(method, iso_accessor(method, date.iso_date())),
        Some(f) => {
            trace!("day: calling external capability");
            positive_integral(method, f.call(&record.receiver(), &[date.to_value()])?)
        }
    }
}

/// Reads `day`, `month`, `monthCode` and `year` of `date` into a field bag.
///
/// Unmodified built-in calendars are read directly; anything else goes
/// through the accessors.
///
/// # Errors
///
/// As the individual accessors.
pub fn calendar_date_fields(
    provider: &CalendarProvider,
    date: &DateObject,
) -> Result<FieldBag, CalendarError> {
    let methods = MethodSet::of(&[
        CalendarMethod::Day,
        CalendarMethod::Month,
        CalendarMethod::MonthCode,
        CalendarMethod::Year,
    ]);
    let fast = match provider {
        CalendarProvider::Iso8601 => true,
        CalendarProvider::External(cal) => is_builtin_fast_path(cal, methods),
    };
    if fast {
        trace!("date fields: built-in fast path");
        let d = date.date;
        return Ok(FieldBag::new()
            .with("day", i32::from(d.day()))
            .with("month", i32::from(d.month()))
            .with("monthCode", d.month_code())
            .with("year", d.year()));
    }

    let like = DateLike::from(date.clone());
    let record = MethodsRecord::new(provider.clone(), MethodSet::of(&[CalendarMethod::Day]))?;
    let day = calendar_day(&record, &like)?;
    let month = calendar_month(provider, &like)?;
    let month_code = calendar_month_code(provider, &like)?;
    let year = calendar_year(provider, &like)?;
    Ok(FieldBag::new()
        .with("day", day as f64)
        .with("month", month as f64)
        .with("monthCode", month_code)
        .with("year", year as f64))
}
