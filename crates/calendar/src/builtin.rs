//! The built-in ISO 8601 calendar.
//!
//! [`BuiltinCalendar`] is the calendar object behind `"iso8601"` when it
//! is materialized as an object. Its methods live on the realm's calendar
//! prototype; [`call_builtin`] runs them.

use std::collections::BTreeSet;
use std::sync::Arc;

use kalends_iso::{
    DateUnit, Duration, PlainDate, PlainMonthDay, PlainYearMonth, REFERENCE_ISO_YEAR,
    add_iso_date, difference_iso_date, regulate_iso_date, regulate_iso_year_month,
};

use crate::error::CalendarError;
use crate::field::{
    CalendarField, default_merge_fields, prepare_temporal_fields, require, resolve_month,
};
use crate::iter::for_each_value;
use crate::method::{CalendarMethod, MethodSet};
use crate::object::{CalendarObject, ProviderRef};
use crate::options::{to_largest_unit, to_overflow};
use crate::provider::{CalendarProvider, canonicalize_identifier};
use crate::realm::Realm;
use crate::value::{DateObject, FieldBag, MonthDayObject, Object, Value, YearMonthObject};

/// Identifier of the built-in calendar.
pub const ISO8601: &str = "iso8601";

/// State of a built-in calendar instance.
#[derive(Debug, Clone)]
pub struct BuiltinCalendar {
    own: FieldBag,
    subclass_prototype: Option<FieldBag>,
    realm: Arc<Realm>,
}

impl BuiltinCalendar {
    /// Creates a built-in calendar for `id` in the shared realm.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCalendarIdentifier`] unless `id`
    /// names the ISO calendar.
    pub fn new(id: &str) -> Result<Self, CalendarError> {
        canonicalize_identifier(id)?;
        Ok(Self {
            own: FieldBag::new(),
            subclass_prototype: None,
            realm: Realm::shared(),
        })
    }

    /// Returns the calendar bound to `realm`.
    pub fn in_realm(mut self, realm: Arc<Realm>) -> Self {
        self.realm = realm;
        self
    }

    /// Returns the calendar with an own property `key` set to `value`.
    pub fn with_own_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.own.set(key, value);
        self
    }

    /// Returns the calendar as an instance of a subclass whose prototype
    /// holds `prototype`.
    pub fn with_subclass_prototype(mut self, prototype: FieldBag) -> Self {
        self.subclass_prototype = Some(prototype);
        self
    }

    /// The identifier, always `"iso8601"`.
    pub fn identifier(&self) -> &'static str {
        ISO8601
    }

    pub fn realm(&self) -> &Arc<Realm> {
        &self.realm
    }

    /// Wraps the calendar in a shared handle.
    pub fn into_provider(self) -> ProviderRef {
        ProviderRef::new(self)
    }
}

impl CalendarObject for BuiltinCalendar {
    fn get(&self, key: &str) -> Result<Value, CalendarError> {
        if let Some(v) = self.own.get(key) {
            return Ok(v.clone());
        }
        if let Some(v) = self.subclass_prototype.as_ref().and_then(|p| p.get(key)) {
            return Ok(v.clone());
        }
        if key == "id" {
            return Ok(Value::from(ISO8601));
        }
        Ok(CalendarMethod::from_name(key)
            .map(|m| Value::from(self.realm.prototype_method(m).clone()))
            .unwrap_or_default())
    }

    fn as_builtin(&self) -> Option<&BuiltinCalendar> {
        Some(self)
    }
}

/// Methods that the field-based fast paths rely on besides the requested
/// ones.
const FIELD_METHODS: [CalendarMethod; 5] = [
    CalendarMethod::DateFromFields,
    CalendarMethod::Fields,
    CalendarMethod::MergeFields,
    CalendarMethod::MonthDayFromFields,
    CalendarMethod::YearMonthFromFields,
];

/// Returns `true` when `calendar` is an unmodified built-in calendar
/// instance whose `methods` can be run without observable lookups.
///
/// Holds only if the instance has no own properties, its prototype is the
/// built-in calendar prototype, every method in `methods` and the
/// field-related methods are the built-in ones, and array iteration is
/// untouched.
pub fn is_builtin_fast_path(calendar: &ProviderRef, methods: MethodSet) -> bool {
    let Some(builtin) = calendar.as_builtin() else {
        return false;
    };
    if !builtin.own.is_empty() || builtin.subclass_prototype.is_some() {
        return false;
    }
    let realm = builtin.realm();
    methods
        .union(MethodSet::of(&FIELD_METHODS))
        .iter()
        .all(|m| realm.prototype_method(m).is_builtin(m))
        && realm.is_array_iteration_sane()
}

const DATE_FIELD_NAMES: [CalendarField; 4] = [
    CalendarField::Day,
    CalendarField::Month,
    CalendarField::MonthCode,
    CalendarField::Year,
];

fn names(fields: &[CalendarField]) -> Vec<&'static str> {
    fields.iter().map(|f| f.name()).collect()
}

/// ISO `dateFromFields`.
pub(crate) fn iso_date_from_fields(
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<PlainDate, CalendarError> {
    let mut prepared = prepare_temporal_fields(
        fields,
        &names(&DATE_FIELD_NAMES),
        &[CalendarField::Day, CalendarField::Year],
    )?;
    let overflow = to_overflow(options)?;
    resolve_month(&mut prepared)?;
    let year = require(prepared.year, CalendarField::Year)?;
    let month = require(prepared.month, CalendarField::Month)?;
    let day = require(prepared.day, CalendarField::Day)?;
    Ok(regulate_iso_date(year, month, day, overflow)?.to_plain_date()?)
}

/// ISO `yearMonthFromFields`.
pub(crate) fn iso_year_month_from_fields(
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<PlainYearMonth, CalendarError> {
    let mut prepared = prepare_temporal_fields(
        fields,
        &names(&[CalendarField::Month, CalendarField::MonthCode, CalendarField::Year]),
        &[CalendarField::Year],
    )?;
    let overflow = to_overflow(options)?;
    resolve_month(&mut prepared)?;
    let year = require(prepared.year, CalendarField::Year)?;
    let month = require(prepared.month, CalendarField::Month)?;
    Ok(regulate_iso_year_month(year, month, overflow)?)
}

/// ISO `monthDayFromFields`. A supplied `year` only selects the month
/// lengths used for regulation; the result uses the reference year.
pub(crate) fn iso_month_day_from_fields(
    fields: &Object,
    options: Option<&FieldBag>,
) -> Result<PlainMonthDay, CalendarError> {
    let mut prepared =
        prepare_temporal_fields(fields, &names(&DATE_FIELD_NAMES), &[CalendarField::Day])?;
    let overflow = to_overflow(options)?;
    resolve_month(&mut prepared)?;
    let month = require(prepared.month, CalendarField::Month)?;
    let day = require(prepared.day, CalendarField::Day)?;
    let year = prepared.year.unwrap_or(i64::from(REFERENCE_ISO_YEAR));
    let regulated = regulate_iso_date(year, month, day, overflow)?;
    Ok(PlainMonthDay::new(regulated.month, regulated.day)?)
}

/// ISO `dateAdd`: sub-day components are folded into days first.
pub(crate) fn iso_date_add(
    date: PlainDate,
    duration: &Duration,
    options: Option<&FieldBag>,
) -> Result<PlainDate, CalendarError> {
    let overflow = to_overflow(options)?;
    duration.validate()?;
    let balanced = duration.balance_to_days()?;
    Ok(add_iso_date(date, &balanced, overflow)?)
}

/// ISO `dateUntil` for an already resolved largest unit.
pub(crate) fn iso_date_until(one: PlainDate, two: PlainDate, largest_unit: DateUnit) -> Duration {
    Duration::from(difference_iso_date(one, two, largest_unit))
}

/// ISO `fields`: validates and copies an iterable of field names.
fn iso_fields(realm: &Realm, names: &Value) -> Result<Vec<Value>, CalendarError> {
    let mut iter = realm.iterate(names)?;
    let mut seen = BTreeSet::new();
    let mut result = Vec::new();
    for_each_value(iter.as_mut(), |value| {
        let Value::String(name) = &value else {
            return Err(CalendarError::NotAString {
                found: value.describe(),
            });
        };
        name.parse::<CalendarField>()?;
        if !seen.insert(name.clone()) {
            return Err(CalendarError::DuplicateField {
                field: name.clone(),
            });
        }
        result.push(value);
        Ok(())
    })?;
    Ok(result)
}

/// Computes the value of an accessor method for an ISO date.
///
/// `method` must be one of the per-field accessors.
pub(crate) fn iso_accessor(method: CalendarMethod, date: PlainDate) -> Value {
    match method {
        CalendarMethod::Year => Value::from(date.year()),
        CalendarMethod::Month => Value::from(i32::from(date.month())),
        CalendarMethod::MonthCode => Value::from(date.month_code()),
        CalendarMethod::Day => Value::from(i32::from(date.day())),
        CalendarMethod::DayOfWeek => Value::from(i32::from(date.day_of_week())),
        CalendarMethod::DayOfYear => Value::from(i32::from(date.day_of_year())),
        CalendarMethod::WeekOfYear => Value::from(i32::from(date.week_of_year().week)),
        CalendarMethod::YearOfWeek => Value::from(date.week_of_year().year),
        CalendarMethod::DaysInWeek => Value::from(i32::from(kalends_iso::DAYS_IN_WEEK)),
        CalendarMethod::DaysInMonth => Value::from(i32::from(date.days_in_month())),
        CalendarMethod::DaysInYear => Value::from(i32::from(date.days_in_year())),
        CalendarMethod::MonthsInYear => Value::from(i32::from(kalends_iso::MONTHS_IN_YEAR)),
        CalendarMethod::InLeapYear => Value::from(date.in_leap_year()),
        _ => Value::Undefined,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    Date,
    YearMonth,
    MonthDay,
}

/// Argument kinds each accessor accepts, besides ISO date strings.
fn accepted_kinds(method: CalendarMethod) -> (&'static [ArgKind], &'static str) {
    use ArgKind::{Date, MonthDay, YearMonth};
    match method {
        CalendarMethod::Year
        | CalendarMethod::Month
        | CalendarMethod::MonthsInYear
        | CalendarMethod::InLeapYear
        | CalendarMethod::DaysInMonth
        | CalendarMethod::DaysInYear => (
            &[Date, YearMonth],
            "a PlainDate or PlainYearMonth object or a date string",
        ),
        CalendarMethod::MonthCode => (
            &[Date, YearMonth, MonthDay],
            "a PlainDate, PlainYearMonth or PlainMonthDay object or a date string",
        ),
        CalendarMethod::Day => (
            &[Date, MonthDay],
            "a PlainDate or PlainMonthDay object or a date string",
        ),
        _ => (&[Date], "a PlainDate object or a date string"),
    }
}

fn invalid_argument(
    method: CalendarMethod,
    argument: &'static str,
    expected: &'static str,
    value: &Value,
) -> CalendarError {
    CalendarError::InvalidArgument {
        method: method.name(),
        argument,
        expected,
        found: value.describe(),
    }
}

fn date_like_argument(
    method: CalendarMethod,
    argument: &'static str,
    value: &Value,
    accepts: &[ArgKind],
    expected: &'static str,
) -> Result<PlainDate, CalendarError> {
    let (kind, date) = match value {
        Value::String(s) => return Ok(s.parse::<PlainDate>()?),
        Value::Object(Object::Date(d)) => (ArgKind::Date, d.date),
        Value::Object(Object::YearMonth(ym)) => (ArgKind::YearMonth, ym.year_month.iso_date()),
        Value::Object(Object::MonthDay(md)) => (ArgKind::MonthDay, md.month_day.iso_date()),
        other => return Err(invalid_argument(method, argument, expected, other)),
    };
    if accepts.contains(&kind) {
        Ok(date)
    } else {
        Err(invalid_argument(method, argument, expected, value))
    }
}

fn date_argument(
    method: CalendarMethod,
    argument: &'static str,
    value: &Value,
) -> Result<PlainDate, CalendarError> {
    date_like_argument(
        method,
        argument,
        value,
        &[ArgKind::Date],
        "a PlainDate object or a date string",
    )
}

fn object_argument<'a>(
    method: CalendarMethod,
    argument: &'static str,
    value: &'a Value,
) -> Result<&'a Object, CalendarError> {
    value
        .as_object()
        .ok_or_else(|| invalid_argument(method, argument, "an object", value))
}

fn options_argument<'a>(
    method: CalendarMethod,
    value: &'a Value,
) -> Result<Option<&'a FieldBag>, CalendarError> {
    match value {
        Value::Undefined => Ok(None),
        Value::Object(Object::Fields(bag)) => Ok(Some(bag)),
        other => Err(invalid_argument(method, "options", "an options object", other)),
    }
}

/// Runs the built-in implementation of `method` with receiver `this`.
///
/// # Errors
///
/// Returns [`CalendarError::IncompatibleReceiver`] unless `this` is a
/// built-in calendar instance, [`CalendarError::InvalidArgument`] for
/// arguments of the wrong kind, and any error of the ISO algorithm.
pub(crate) fn call_builtin(
    method: CalendarMethod,
    this: &Value,
    args: &[Value],
) -> Result<Value, CalendarError> {
    let calendar = match this {
        Value::Object(Object::Calendar(cal)) => cal.as_builtin(),
        _ => None,
    }
    .ok_or_else(|| CalendarError::IncompatibleReceiver {
        method: method.name(),
        found: this.describe(),
    })?;

    static UNDEFINED: Value = Value::Undefined;
    let arg = |i: usize| args.get(i).unwrap_or(&UNDEFINED);

    match method {
        CalendarMethod::Fields => {
            let names = iso_fields(calendar.realm(), arg(0))?;
            Ok(Value::from(names))
        }
        CalendarMethod::MergeFields => {
            let base = object_argument(method, "fields", arg(0))?;
            let overrides = object_argument(method, "additionalFields", arg(1))?;
            Ok(Value::from(default_merge_fields(base, overrides)))
        }
        CalendarMethod::DateFromFields => {
            let fields = object_argument(method, "fields", arg(0))?;
            let options = options_argument(method, arg(1))?;
            let date = iso_date_from_fields(fields, options)?;
            Ok(Value::from(DateObject::iso(date)))
        }
        CalendarMethod::YearMonthFromFields => {
            let fields = object_argument(method, "fields", arg(0))?;
            let options = options_argument(method, arg(1))?;
            let ym = iso_year_month_from_fields(fields, options)?;
            Ok(Value::from(YearMonthObject::new(ym, CalendarProvider::Iso8601)))
        }
        CalendarMethod::MonthDayFromFields => {
            let fields = object_argument(method, "fields", arg(0))?;
            let options = options_argument(method, arg(1))?;
            let md = iso_month_day_from_fields(fields, options)?;
            Ok(Value::from(MonthDayObject::new(md, CalendarProvider::Iso8601)))
        }
        CalendarMethod::DateAdd => {
            let date = date_argument(method, "date", arg(0))?;
            let duration = match arg(1) {
                Value::Object(Object::Duration(d)) => d,
                other => {
                    return Err(invalid_argument(method, "duration", "a Duration object", other));
                }
            };
            let options = options_argument(method, arg(2))?;
            let result = iso_date_add(date, duration, options)?;
            Ok(Value::from(DateObject::iso(result)))
        }
        CalendarMethod::DateUntil => {
            let one = date_argument(method, "one", arg(0))?;
            let two = date_argument(method, "two", arg(1))?;
            let options = options_argument(method, arg(2))?;
            let largest_unit = to_largest_unit(options)?;
            Ok(Value::from(iso_date_until(one, two, largest_unit)))
        }
        accessor => {
            let (accepts, expected) = accepted_kinds(accessor);
            let date = date_like_argument(accessor, "dateLike", arg(0), accepts, expected)?;
            Ok(iso_accessor(accessor, date))
        }
    }
}

#[cfg(test)]
mod tests {
    use kalends_iso::IsoError;

    use super::*;
    use crate::iter::ListIterator;
    use crate::method::Function;

    fn receiver() -> Value {
        Value::from(BuiltinCalendar::new("iso8601").unwrap().into_provider())
    }

    fn date(y: i32, m: u8, d: u8) -> Value {
        Value::from(DateObject::iso(PlainDate::new(y, m, d).unwrap()))
    }

    #[test]
    fn new_validates_identifier() {
        assert!(BuiltinCalendar::new("ISO8601").is_ok());
        assert!(matches!(
            BuiltinCalendar::new("gregory"),
            Err(CalendarError::InvalidCalendarIdentifier { .. })
        ));
    }

    #[test]
    fn get_resolves_own_then_prototype() {
        let f = Function::native(|_, _| Ok(Value::from(1)));
        let cal = BuiltinCalendar::new("iso8601")
            .unwrap()
            .with_own_property("day", f.clone());
        assert_eq!(cal.get("day").unwrap(), Value::from(f));
        assert_eq!(
            cal.get("year").unwrap(),
            Value::from(Function::Builtin(CalendarMethod::Year))
        );
        assert_eq!(cal.get("id").unwrap(), Value::from("iso8601"));
        assert_eq!(cal.get("toString").unwrap(), Value::Undefined);
    }

    #[test]
    fn fast_path_requires_pristine_instance() {
        let all = MethodSet::of(&[CalendarMethod::Day]);
        let plain = BuiltinCalendar::new("iso8601").unwrap().into_provider();
        assert!(is_builtin_fast_path(&plain, all));

        let own = BuiltinCalendar::new("iso8601")
            .unwrap()
            .with_own_property("x", 1)
            .into_provider();
        assert!(!is_builtin_fast_path(&own, all));

        let sub = BuiltinCalendar::new("iso8601")
            .unwrap()
            .with_subclass_prototype(FieldBag::new())
            .into_provider();
        assert!(!is_builtin_fast_path(&sub, all));

        let patched = Realm::default().with_prototype_method(
            CalendarMethod::MergeFields,
            Function::native(|_, _| Ok(Value::Undefined)),
        );
        let cal = BuiltinCalendar::new("iso8601")
            .unwrap()
            .in_realm(Arc::new(patched))
            .into_provider();
        assert!(!is_builtin_fast_path(&cal, all));

        let tampered = Realm::default().with_array_iterator(|v| Box::new(ListIterator::new(v)));
        let cal = BuiltinCalendar::new("iso8601")
            .unwrap()
            .in_realm(Arc::new(tampered))
            .into_provider();
        assert!(!is_builtin_fast_path(&cal, all));

        let bag = ProviderRef::new(FieldBag::new());
        assert!(!is_builtin_fast_path(&bag, all));
    }

    #[test]
    fn builtin_rejects_foreign_receiver() {
        let err = call_builtin(CalendarMethod::Day, &Value::from(FieldBag::new()), &[]).unwrap_err();
        assert_eq!(
            err,
            CalendarError::IncompatibleReceiver {
                method: "day",
                found: "an object".to_string()
            }
        );
    }

    #[test]
    fn builtin_accessors_on_date() {
        let this = receiver();
        let d = date(1977, 1, 1);
        let call = |m| call_builtin(m, &this, std::slice::from_ref(&d)).unwrap();
        assert_eq!(call(CalendarMethod::WeekOfYear), Value::from(53));
        assert_eq!(call(CalendarMethod::YearOfWeek), Value::from(1976));
        assert_eq!(call(CalendarMethod::DayOfWeek), Value::from(6));
        assert_eq!(call(CalendarMethod::MonthCode), Value::from("M01"));
        assert_eq!(call(CalendarMethod::InLeapYear), Value::from(false));
        assert_eq!(call(CalendarMethod::DaysInWeek), Value::from(7));
    }

    #[test]
    fn builtin_accessor_argument_kinds() {
        let this = receiver();
        let md = Value::from(MonthDayObject::new(
            PlainMonthDay::new(2, 29).unwrap(),
            CalendarProvider::Iso8601,
        ));
        assert_eq!(
            call_builtin(CalendarMethod::Day, &this, std::slice::from_ref(&md)).unwrap(),
            Value::from(29)
        );
        assert!(matches!(
            call_builtin(CalendarMethod::Month, &this, std::slice::from_ref(&md)),
            Err(CalendarError::InvalidArgument { method: "month", .. })
        ));
        assert_eq!(
            call_builtin(CalendarMethod::DaysInMonth, &this, &[Value::from("2024-02-10")]).unwrap(),
            Value::from(29)
        );
        assert!(matches!(
            call_builtin(CalendarMethod::Year, &this, &[Value::from("not a date")]),
            Err(CalendarError::Iso(IsoError::ParseDate { .. }))
        ));
    }

    #[test]
    fn builtin_date_from_fields() {
        let this = receiver();
        let fields = FieldBag::new()
            .with("year", 2021)
            .with("monthCode", "M02")
            .with("day", 31);
        let result = call_builtin(CalendarMethod::DateFromFields, &this, &[Value::from(fields.clone())])
            .unwrap();
        assert_eq!(result, date(2021, 2, 28));

        let reject = FieldBag::new().with("overflow", "reject");
        let err = call_builtin(
            CalendarMethod::DateFromFields,
            &this,
            &[Value::from(fields), Value::from(reject)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Iso(IsoError::OverflowRejected { field: "day", .. })
        ));
    }

    #[test]
    fn builtin_month_day_uses_reference_year() {
        let fields = Object::from(FieldBag::new().with("monthCode", "M02").with("day", 29));
        let md = iso_month_day_from_fields(&fields, None).unwrap();
        assert_eq!((md.month(), md.day()), (2, 29));

        let with_year = Object::from(
            FieldBag::new()
                .with("year", 2021)
                .with("month", 2)
                .with("day", 29),
        );
        let md = iso_month_day_from_fields(&with_year, None).unwrap();
        assert_eq!((md.month(), md.day()), (2, 28));
    }

    #[test]
    fn builtin_year_month_from_fields() {
        let fields = Object::from(FieldBag::new().with("year", 2021).with("month", 14));
        let ym = iso_year_month_from_fields(&fields, None).unwrap();
        assert_eq!((ym.year(), ym.month()), (2021, 12));
    }

    #[test]
    fn builtin_date_add_balances_time() {
        let this = receiver();
        let duration = Duration {
            months: 1,
            hours: 48,
            ..Duration::default()
        };
        let result = call_builtin(
            CalendarMethod::DateAdd,
            &this,
            &[date(2021, 1, 31), Value::from(duration)],
        )
        .unwrap();
        assert_eq!(result, date(2021, 3, 2));
    }

    #[test]
    fn builtin_date_until_reads_largest_unit() {
        let this = receiver();
        let options = FieldBag::new().with("largestUnit", "month");
        let result = call_builtin(
            CalendarMethod::DateUntil,
            &this,
            &[date(2021, 1, 31), date(2021, 3, 1), Value::from(options)],
        )
        .unwrap();
        let expected = Duration {
            months: 1,
            days: 1,
            ..Duration::default()
        };
        assert_eq!(result, Value::from(expected));
    }

    #[test]
    fn builtin_fields_validates_names() {
        let this = receiver();
        let ok = Value::from(vec![Value::from("year"), Value::from("day")]);
        assert_eq!(
            call_builtin(CalendarMethod::Fields, &this, &[ok.clone()]).unwrap(),
            ok
        );
        let dup = Value::from(vec![Value::from("day"), Value::from("day")]);
        assert_eq!(
            call_builtin(CalendarMethod::Fields, &this, &[dup]),
            Err(CalendarError::DuplicateField {
                field: "day".to_string()
            })
        );
        let unknown = Value::from(vec![Value::from("era")]);
        assert!(matches!(
            call_builtin(CalendarMethod::Fields, &this, &[unknown]),
            Err(CalendarError::InvalidField { .. })
        ));
        let number = Value::from(vec![Value::from(1)]);
        assert!(matches!(
            call_builtin(CalendarMethod::Fields, &this, &[number]),
            Err(CalendarError::NotAString { .. })
        ));
    }

    #[test]
    fn builtin_merge_fields() {
        let this = receiver();
        let base = Value::from(FieldBag::new().with("year", 2000).with("month", 1));
        let overrides = Value::from(FieldBag::new().with("monthCode", "M05"));
        let merged = call_builtin(CalendarMethod::MergeFields, &this, &[base, overrides]).unwrap();
        assert_eq!(
            merged,
            Value::from(FieldBag::new().with("year", 2000).with("monthCode", "M05"))
        );
        assert!(matches!(
            call_builtin(CalendarMethod::MergeFields, &this, &[Value::from(1)]),
            Err(CalendarError::InvalidArgument { argument: "fields", .. })
        ));
    }
}
