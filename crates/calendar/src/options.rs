//! Reading `overflow` and `largestUnit` from options bags.

use kalends_iso::{DateUnit, Overflow};

use crate::error::CalendarError;
use crate::value::{FieldBag, Value};

fn option_string<'a>(
    options: Option<&'a FieldBag>,
    option: &'static str,
) -> Result<Option<&'a str>, CalendarError> {
    match options.and_then(|bag| bag.get(option)) {
        None | Some(Value::Undefined) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(CalendarError::InvalidOption {
            option,
            value: other.describe(),
        }),
    }
}

/// Reads the `overflow` option. Absent options mean [`Overflow::Constrain`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidOption`] for anything other than
/// `"constrain"` or `"reject"`.
pub fn to_overflow(options: Option<&FieldBag>) -> Result<Overflow, CalendarError> {
    let Some(value) = option_string(options, "overflow")? else {
        return Ok(Overflow::Constrain);
    };
    value.parse().map_err(|_| CalendarError::InvalidOption {
        option: "overflow",
        value: format!("\"{value}\""),
    })
}

/// Reads the `largestUnit` option for a date difference. Absent or
/// `"auto"` means [`DateUnit::Day`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidOption`] for time units and unknown
/// strings.
pub fn to_largest_unit(options: Option<&FieldBag>) -> Result<DateUnit, CalendarError> {
    match option_string(options, "largestUnit")? {
        None | Some("auto") => Ok(DateUnit::Day),
        Some(value) => value.parse().map_err(|_| CalendarError::InvalidOption {
            option: "largestUnit",
            value: format!("\"{value}\""),
        }),
    }
}
