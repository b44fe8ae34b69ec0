//! Calendar fields: extraction, month-code resolution and merging.

use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::value::{FieldBag, Object, Value};

/// One of the ISO calendar fields.
///
/// Variants are declared in property-name order so that sorting fields
/// sorts their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarField {
    Day,
    Month,
    MonthCode,
    Year,
}

impl CalendarField {
    /// Every field, in property-name order.
    pub const ALL: [CalendarField; 4] = [
        CalendarField::Day,
        CalendarField::Month,
        CalendarField::MonthCode,
        CalendarField::Year,
    ];

    /// Returns the property name of the field.
    pub fn name(self) -> &'static str {
        match self {
            CalendarField::Day => "day",
            CalendarField::Month => "month",
            CalendarField::MonthCode => "monthCode",
            CalendarField::Year => "year",
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarField {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| CalendarError::InvalidField {
                field: s.to_string(),
            })
    }
}

/// Fields read from a field source.
///
/// After [`resolve_month`] succeeds, `month` is present and agrees with
/// `month_code`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemporalFields {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub month_code: Option<String>,
    pub day: Option<i64>,
    /// Requested names outside the ISO field set, copied through unchanged.
    pub extra: FieldBag,
}

impl TemporalFields {
    /// Returns the field bag holding every present field.
    pub fn to_field_bag(&self) -> FieldBag {
        let mut bag = self.extra.clone();
        if let Some(day) = self.day {
            bag.set("day", day as f64);
        }
        if let Some(month) = self.month {
            bag.set("month", month as f64);
        }
        if let Some(code) = &self.month_code {
            bag.set("monthCode", code.as_str());
        }
        if let Some(year) = self.year {
            bag.set("year", year as f64);
        }
        bag
    }
}

/// Unwraps a field that has already been checked for presence.
pub(crate) fn require<T>(value: Option<T>, field: CalendarField) -> Result<T, CalendarError> {
    value.ok_or_else(|| CalendarError::MissingRequiredField {
        field: field.name().to_string(),
    })
}

fn invalid(field: &str, reason: impl Into<String>) -> CalendarError {
    CalendarError::InvalidFieldValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn to_number(field: &str, value: &Value) -> Result<f64, CalendarError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                trimmed
                    .parse::<f64>()
                    .map_err(|_| invalid(field, format!("{} is not a number", value.describe())))
            }
        }
        other => Err(invalid(field, format!("{} is not a number", other.describe()))),
    }
}

fn to_integer_with_truncation(field: &str, value: &Value) -> Result<i64, CalendarError> {
    let n = to_number(field, value)?;
    if !n.is_finite() {
        return Err(invalid(field, format!("{} is not finite", value.describe())));
    }
    Ok(n.trunc() as i64)
}

fn to_positive_integer_with_truncation(field: &str, value: &Value) -> Result<i64, CalendarError> {
    let n = to_integer_with_truncation(field, value)?;
    if n <= 0 {
        return Err(invalid(field, format!("{} is not positive", value.describe())));
    }
    Ok(n)
}

/// Reads `field_names` from `source` into a [`TemporalFields`].
///
/// Names are visited in sorted order with repeats skipped. `year` is
/// truncated to an integer, `month` and `day` must be positive after
/// truncation and `monthCode` must be a string. Names outside the ISO field
/// set are copied into [`TemporalFields::extra`] as they are.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidField`] for `constructor` or
/// `__proto__`, [`CalendarError::InvalidFieldValue`] for a value of the
/// wrong type or range, and [`CalendarError::MissingRequiredField`] when a
/// field of `required` is absent.
pub fn prepare_temporal_fields(
    source: &Object,
    field_names: &[impl AsRef<str>],
    required: &[CalendarField],
) -> Result<TemporalFields, CalendarError> {
    let mut names: Vec<&str> = field_names.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();
    names.dedup();

    let mut fields = TemporalFields::default();
    for name in names {
        if name == "constructor" || name == "__proto__" {
            return Err(CalendarError::InvalidField {
                field: name.to_string(),
            });
        }
        let value = source.get_property(name);
        if value.is_undefined() {
            continue;
        }
        match name.parse::<CalendarField>() {
            Ok(CalendarField::Year) => fields.year = Some(to_integer_with_truncation(name, &value)?),
            Ok(CalendarField::Month) => {
                fields.month = Some(to_positive_integer_with_truncation(name, &value)?)
            }
            Ok(CalendarField::Day) => {
                fields.day = Some(to_positive_integer_with_truncation(name, &value)?)
            }
            Ok(CalendarField::MonthCode) => match value {
                Value::String(code) => fields.month_code = Some(code),
                other => {
                    return Err(invalid(name, format!("{} is not a string", other.describe())));
                }
            },
            Err(_) => fields.extra.set(name, value),
        }
    }

    for field in required {
        let present = match field {
            CalendarField::Day => fields.day.is_some(),
            CalendarField::Month => fields.month.is_some(),
            CalendarField::MonthCode => fields.month_code.is_some(),
            CalendarField::Year => fields.year.is_some(),
        };
        if !present {
            return Err(CalendarError::MissingRequiredField {
                field: field.name().to_string(),
            });
        }
    }
    Ok(fields)
}

/// Parses a month code of the form `M01`..`M12`.
fn parse_month_code(code: &str) -> Option<i64> {
    let digits = code.strip_prefix('M')?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: i64 = digits.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Resolves `month` from `monthCode`.
///
/// # Errors
///
/// Returns [`CalendarError::MissingRequiredField`] when neither field is
/// present, and [`CalendarError::InvalidMonthCode`] for a malformed code or
/// one that disagrees with an explicit `month`.
pub fn resolve_month(fields: &mut TemporalFields) -> Result<(), CalendarError> {
    let Some(code) = &fields.month_code else {
        if fields.month.is_none() {
            return Err(CalendarError::MissingRequiredField {
                field: "monthCode".to_string(),
            });
        }
        return Ok(());
    };
    let invalid_code = || CalendarError::InvalidMonthCode { code: code.clone() };
    let number = parse_month_code(code).ok_or_else(invalid_code)?;
    if fields.month.is_some_and(|month| month != number) {
        return Err(invalid_code());
    }
    fields.month = Some(number);
    Ok(())
}

/// Keys of `base` that a merge must not copy once `key` was contributed by
/// the overrides. `month` and `monthCode` shadow each other.
pub fn iso_field_keys_to_ignore(key: &str) -> &'static [&'static str] {
    match key {
        "month" | "monthCode" => &["month", "monthCode"],
        _ => &[],
    }
}

/// Own enumerable property keys of an object. Only plain field bags have
/// any.
pub(crate) fn own_keys(object: &Object) -> Vec<String> {
    match object {
        Object::Fields(bag) => bag.keys().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// The default merge: defined properties of `overrides` win, and
/// properties of `base` are copied unless an override shadowed them.
pub fn default_merge_fields(base: &Object, overrides: &Object) -> FieldBag {
    let mut merged = FieldBag::new();
    let mut ignored: Vec<String> = Vec::new();

    for key in own_keys(overrides) {
        let value = overrides.get_property(&key);
        if value.is_undefined() {
            continue;
        }
        let shadowed = iso_field_keys_to_ignore(&key);
        if shadowed.is_empty() {
            ignored.push(key.clone());
        } else {
            ignored.extend(shadowed.iter().map(|k| k.to_string()));
        }
        merged.set(key, value);
    }

    for key in own_keys(base) {
        if ignored.contains(&key) {
            continue;
        }
        let value = base.get_property(&key);
        if !value.is_undefined() {
            merged.set(key, value);
        }
    }
    merged
}
