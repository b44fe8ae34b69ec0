//! Calendar providers and their resolution from caller values.

use std::str::FromStr;

use crate::builtin::ISO8601;
use crate::error::CalendarError;
use crate::method::CalendarMethod;
use crate::object::ProviderRef;
use crate::value::{Object, Value};

/// The calendar a date-like value is expressed in.
///
/// `Iso8601` is the built-in calendar named by its identifier; it never
/// performs observable operations. `External` is a calendar object, which
/// may be a built-in calendar instance or caller-supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarProvider {
    Iso8601,
    External(ProviderRef),
}

impl CalendarProvider {
    /// Resolves a calendar identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCalendarIdentifier`] unless `id`
    /// names the ISO calendar, ignoring ASCII case.
    pub fn from_identifier(id: &str) -> Result<Self, CalendarError> {
        canonicalize_identifier(id)?;
        Ok(CalendarProvider::Iso8601)
    }

    /// Returns the calendar identifier.
    ///
    /// For external providers this reads the `id` property.
    ///
    /// # Errors
    ///
    /// Propagates lookup failures and returns
    /// [`CalendarError::UnexpectedResultType`] when `id` is not a string.
    pub fn identifier(&self) -> Result<String, CalendarError> {
        match self {
            CalendarProvider::Iso8601 => Ok(ISO8601.to_string()),
            CalendarProvider::External(cal) => match cal.get("id")? {
                Value::String(id) => Ok(id),
                other => Err(CalendarError::UnexpectedResultType {
                    method: "id",
                    expected: "a string",
                    found: other.describe(),
                }),
            },
        }
    }

    /// Returns `true` for the identifier-only built-in provider.
    pub fn is_builtin(&self) -> bool {
        matches!(self, CalendarProvider::Iso8601)
    }

    /// The value a capability receives as its receiver: the identifier
    /// string or the calendar object.
    pub fn to_value(&self) -> Value {
        match self {
            CalendarProvider::Iso8601 => Value::from(ISO8601),
            CalendarProvider::External(cal) => Value::from(cal.clone()),
        }
    }
}

impl FromStr for CalendarProvider {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s)
    }
}

/// Returns the canonical form of a built-in calendar identifier.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCalendarIdentifier`] for non-ASCII
/// input or any identifier other than `iso8601`.
pub(crate) fn canonicalize_identifier(id: &str) -> Result<&'static str, CalendarError> {
    if id.is_ascii() && id.eq_ignore_ascii_case(ISO8601) {
        Ok(ISO8601)
    } else {
        Err(CalendarError::InvalidCalendarIdentifier { id: id.to_string() })
    }
}

/// Extracts the calendar name from a calendar string.
///
/// ISO date strings name their `u-ca` annotation, or `iso8601` when they
/// have none. Anything else is taken as a calendar identifier.
fn parse_calendar_string(s: &str) -> &str {
    if s.parse::<kalends_iso::PlainDate>().is_err() {
        return s;
    }
    s.split('[')
        .skip(1)
        .filter_map(|a| a.strip_suffix(']'))
        .map(|a| a.trim_start_matches('!'))
        .find_map(|a| a.strip_prefix("u-ca="))
        .unwrap_or(ISO8601)
}

/// Checks that an arbitrary object implements the calendar protocol.
fn check_protocol(object: &ProviderRef) -> Result<(), CalendarError> {
    for method in CalendarMethod::ALL {
        if !object.has_property(method.name())? {
            return Err(CalendarError::InvalidCalendarObject {
                missing: method.name(),
            });
        }
    }
    if !object.has_property("id")? {
        return Err(CalendarError::InvalidCalendarObject { missing: "id" });
    }
    Ok(())
}

/// Resolves a caller value into a calendar provider.
///
/// `Undefined` resolves to `default` when given. Calendar objects pass
/// through, date-like values pass their calendar through, plain objects
/// must implement the full calendar protocol and strings are parsed as
/// calendar strings.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCalendarIdentifier`] for unknown
/// identifiers and values that cannot name a calendar, and
/// [`CalendarError::InvalidCalendarObject`] for objects missing part of the
/// protocol.
pub fn resolve_provider(
    value: &Value,
    default: Option<&str>,
) -> Result<CalendarProvider, CalendarError> {
    match value {
        Value::Undefined => match default {
            Some(id) => CalendarProvider::from_identifier(id),
            None => Err(CalendarError::InvalidCalendarIdentifier {
                id: value.describe(),
            }),
        },
        Value::String(s) => CalendarProvider::from_identifier(parse_calendar_string(s)),
        Value::Object(Object::Calendar(cal)) => Ok(CalendarProvider::External(cal.clone())),
        Value::Object(Object::Date(d)) => Ok(d.calendar.clone()),
        Value::Object(Object::YearMonth(ym)) => Ok(ym.calendar.clone()),
        Value::Object(Object::MonthDay(md)) => Ok(md.calendar.clone()),
        Value::Object(Object::Fields(bag)) => {
            let object = ProviderRef::new(bag.clone());
            check_protocol(&object)?;
            Ok(CalendarProvider::External(object))
        }
        // Remaining object kinds expose no properties at all.
        Value::Object(_) => Err(CalendarError::InvalidCalendarObject {
            missing: CalendarMethod::ALL[0].name(),
        }),
        other => Err(CalendarError::InvalidCalendarIdentifier {
            id: other.describe(),
        }),
    }
}
