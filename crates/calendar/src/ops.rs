//! Calendar operations dispatched through a [`MethodsRecord`].
//!
//! Each operation runs the built-in ISO algorithm when the record holds no
//! external function for it, and otherwise calls out and checks the shape
//! of the result.

use kalends_iso::{DateUnit, Duration};
use tracing::trace;

use crate::builtin::{
    iso_date_add, iso_date_from_fields, iso_date_until, iso_month_day_from_fields,
    iso_year_month_from_fields,
};
use crate::error::CalendarError;
use crate::field::{CalendarField, default_merge_fields};
use crate::iter::for_each_value;
use crate::method::{CalendarMethod, Function};
use crate::options::to_largest_unit;
use crate::provider::CalendarProvider;
use crate::record::MethodsRecord;
use crate::value::{DateObject, FieldBag, MonthDayObject, Object, Value, YearMonthObject};

fn unexpected(method: CalendarMethod, expected: &'static str, found: &Value) -> CalendarError {
    CalendarError::UnexpectedResultType {
        method: method.name(),
        expected,
        found: found.describe(),
    }
}

fn options_value(options: Option<&FieldBag>) -> Value {
    options.map_or(Value::Undefined, |bag| Value::from(bag.clone()))
}

/// Returns the property names a calendar uses for `field_names`.
///
/// `field_names` must be sorted and free of repeats. When the record runs
/// the built-in `fields` and nothing observable can intervene, the names
/// are returned as they are. Otherwise the `fields` capability is called
/// and its result, an iterable of strings, is collected and sorted.
///
/// # Errors
///
/// Propagates failures of the capability, and returns
/// [`CalendarError::NotAnIterable`] or [`CalendarError::NotAString`] for a
/// malformed result. Iteration of the result is closed on error.
#[tracing::instrument(skip_all)]
pub fn collect_fields(
    record: &MethodsRecord,
    field_names: &[CalendarField],
) -> Result<Vec<String>, CalendarError> {
    let external = record.method(CalendarMethod::Fields);
    let sane = record.provider().is_builtin() || record.realm().is_array_iteration_sane();
    if external.is_none() && sane {
        trace!("fields: built-in fast path");
        return Ok(field_names.iter().map(|f| f.name().to_string()).collect());
    }

    let names: Vec<Value> = field_names.iter().map(|f| Value::from(f.name())).collect();
    let fields = match external {
        Some(f) => {
            trace!("fields: calling external capability");
            f.clone()
        }
        None => {
            trace!("fields: built-in with observable array iteration");
            Function::Builtin(CalendarMethod::Fields)
        }
    };
    let result = fields.call(&record.receiver(), &[Value::from(names)])?;

    let mut iter = record.realm().iterate(&result)?;
    let mut collected = Vec::new();
    for_each_value(iter.as_mut(), |value| match value {
        Value::String(name) => {
            collected.push(name);
            Ok(())
        }
        other => Err(CalendarError::NotAString {
            found: other.describe(),
        }),
    })?;
    collected.sort_unstable();
    Ok(collected)
}

/// Merges `additional_fields` over `fields`.
///
/// # Errors
///
/// Propagates failures of the capability and returns
/// [`CalendarError::UnexpectedResultType`] when it returns a primitive.
pub fn merge_fields(
    record: &MethodsRecord,
    fields: &Object,
    additional_fields: &Object,
) -> Result<Object, CalendarError> {
    let Some(f) = record.method(CalendarMethod::MergeFields) else {
        trace!("mergeFields: built-in");
        return Ok(Object::from(default_merge_fields(fields, additional_fields)));
    };
    trace!("mergeFields: calling external capability");
    let args = [Value::from(fields.clone()), Value::from(additional_fields.clone())];
    match f.call(&record.receiver(), &args)? {
        Value::Object(object) => Ok(object),
        other => Err(unexpected(CalendarMethod::MergeFields, "an object", &other)),
    }
}

fn call_from_fields(
    record: &MethodsRecord,
    method: CalendarMethod,
    f: &Function,
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<Value, CalendarError> {
    trace!(method = method.name(), "calling external capability");
    f.call(
        &record.receiver(),
        &[Value::from(fields.clone()), options_value(options)],
    )
}

/// Builds a date from fields.
///
/// # Errors
///
/// Returns field, option and regulation errors of the built-in algorithm,
/// propagates failures of the capability and returns
/// [`CalendarError::UnexpectedResultType`] unless it returns a date.
pub fn date_from_fields(
    record: &MethodsRecord,
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<DateObject, CalendarError> {
    let method = CalendarMethod::DateFromFields;
    let Some(f) = record.method(method) else {
        trace!("dateFromFields: built-in");
        return Ok(DateObject::iso(iso_date_from_fields(fields, options)?));
    };
    match call_from_fields(record, method, f, fields, options)? {
        Value::Object(Object::Date(date)) => Ok(date),
        other => Err(unexpected(method, "a PlainDate object", &other)),
    }
}

/// Builds a year-month from fields.
///
/// # Errors
///
/// As [`date_from_fields`], expecting a year-month result.
pub fn year_month_from_fields(
    record: &MethodsRecord,
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<YearMonthObject, CalendarError> {
    let method = CalendarMethod::YearMonthFromFields;
    let Some(f) = record.method(method) else {
        trace!("yearMonthFromFields: built-in");
        let ym = iso_year_month_from_fields(fields, options)?;
        return Ok(YearMonthObject::new(ym, CalendarProvider::Iso8601));
    };
    match call_from_fields(record, method, f, fields, options)? {
        Value::Object(Object::YearMonth(ym)) => Ok(ym),
        other => Err(unexpected(method, "a PlainYearMonth object", &other)),
    }
}

/// Builds a month-day from fields.
///
/// # Errors
///
/// As [`date_from_fields`], expecting a month-day result.
pub fn month_day_from_fields(
    record: &MethodsRecord,
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<MonthDayObject, CalendarError> {
    let method = CalendarMethod::MonthDayFromFields;
    let Some(f) = record.method(method) else {
        trace!("monthDayFromFields: built-in");
        let md = iso_month_day_from_fields(fields, options)?;
        return Ok(MonthDayObject::new(md, CalendarProvider::Iso8601));
    };
    match call_from_fields(record, method, f, fields, options)? {
        Value::Object(Object::MonthDay(md)) => Ok(md),
        other => Err(unexpected(method, "a PlainMonthDay object", &other)),
    }
}

/// Adds `duration` to `date`.
///
/// # Errors
///
/// Returns overflow and range errors of the built-in algorithm, propagates
/// failures of the capability and returns
/// [`CalendarError::UnexpectedResultType`] unless it returns a date.
pub fn date_add(
    record: &MethodsRecord,
    date: &DateObject,
    duration: &Duration,
    options: Option<&FieldBag>,
) -> Result<DateObject, CalendarError> {
    let method = CalendarMethod::DateAdd;
    let Some(f) = record.method(method) else {
        trace!("dateAdd: built-in");
        return Ok(DateObject::iso(iso_date_add(date.date, duration, options)?));
    };
    trace!("dateAdd: calling external capability");
    let args = [
        Value::from(date.clone()),
        Value::from(*duration),
        options_value(options),
    ];
    match f.call(&record.receiver(), &args)? {
        Value::Object(Object::Date(result)) => Ok(result),
        other => Err(unexpected(method, "a PlainDate object", &other)),
    }
}

fn call_date_until(
    f: &Function,
    record: &MethodsRecord,
    one: &DateObject,
    two: &DateObject,
    options: FieldBag,
) -> Result<Duration, CalendarError> {
    trace!("dateUntil: calling external capability");
    let args = [
        Value::from(one.clone()),
        Value::from(two.clone()),
        Value::from(options),
    ];
    match f.call(&record.receiver(), &args)? {
        Value::Object(Object::Duration(d)) => Ok(d),
        other => Err(unexpected(CalendarMethod::DateUntil, "a Duration object", &other)),
    }
}

/// Computes the difference from `one` to `two`, reading `largestUnit` from
/// `options`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidOption`] for an unsupported unit on the
/// built-in path, propagates failures of the capability and returns
/// [`CalendarError::UnexpectedResultType`] unless it returns a duration.
#[tracing::instrument(skip_all)]
pub fn date_until(
    record: &MethodsRecord,
    one: &DateObject,
    two: &DateObject,
    options: &FieldBag,
) -> Result<Duration, CalendarError> {
    match record.method(CalendarMethod::DateUntil) {
        None => {
            let unit = to_largest_unit(Some(options))?;
            trace!(largest_unit = unit.as_str(), "dateUntil: built-in");
            Ok(iso_date_until(one.date, two.date, unit))
        }
        Some(f) => call_date_until(f, record, one, two, options.clone()),
    }
}

/// Computes the difference from `one` to `two` down to `largest_unit`.
///
/// An external capability receives a fresh options bag holding only
/// `largestUnit`.
///
/// # Errors
///
/// As [`date_until`].
#[tracing::instrument(skip_all, fields(largest_unit = largest_unit.as_str()))]
pub fn date_until_with_unit(
    record: &MethodsRecord,
    one: &DateObject,
    two: &DateObject,
    largest_unit: DateUnit,
) -> Result<Duration, CalendarError> {
    match record.method(CalendarMethod::DateUntil) {
        None => {
            trace!("dateUntil: built-in");
            Ok(iso_date_until(one.date, two.date, largest_unit))
        }
        Some(f) => {
            let options = FieldBag::new().with("largestUnit", largest_unit.as_str());
            call_date_until(f, record, one, two, options)
        }
    }
}
