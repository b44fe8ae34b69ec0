//! The value model exchanged with calendar providers.

use std::collections::BTreeMap;
use std::fmt;

use kalends_iso::{Duration, PlainDate, PlainMonthDay, PlainYearMonth};

use crate::iter::Iterable;
use crate::method::Function;
use crate::object::ProviderRef;
use crate::provider::CalendarProvider;

/// A dynamically typed value passed to and returned from capabilities.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(Object),
}

impl Value {
    /// Returns `true` for [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns the string contents of a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the object of a [`Value::Object`].
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Short description used in error messages, e.g. `number 5` or
    /// `a PlainDate object`.
    pub fn describe(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => format!("boolean {b}"),
            Value::Number(n) => format!("number {n}"),
            Value::String(s) => format!("string \"{s}\""),
            Value::Object(o) => o.kind().to_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

macro_rules! object_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Object(Object::from(v))
                }
            }
        )*
    };
}

object_value_from!(
    FieldBag,
    DateObject,
    YearMonthObject,
    MonthDayObject,
    Duration,
    ProviderRef,
    Function,
    Vec<Value>,
    Iterable,
);

/// An object value.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A plain property bag.
    Fields(FieldBag),
    Date(DateObject),
    YearMonth(YearMonthObject),
    MonthDay(MonthDayObject),
    Duration(Duration),
    /// A calendar object, either built-in or caller-supplied.
    Calendar(ProviderRef),
    Function(Function),
    /// An array; iterated through the realm's array iteration.
    List(Vec<Value>),
    /// A caller-supplied iterable.
    Iterable(Iterable),
}

impl Object {
    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Fields(_) => "an object",
            Object::Date(_) => "a PlainDate object",
            Object::YearMonth(_) => "a PlainYearMonth object",
            Object::MonthDay(_) => "a PlainMonthDay object",
            Object::Duration(_) => "a Duration object",
            Object::Calendar(_) => "a calendar object",
            Object::Function(_) => "a function",
            Object::List(_) => "an array",
            Object::Iterable(_) => "an iterable",
        }
    }

    /// Reads the property `key`, returning [`Value::Undefined`] when absent.
    ///
    /// Date-like objects expose their ISO `year`, `month`, `monthCode` and
    /// `day` the way the corresponding plain types do.
    pub fn get_property(&self, key: &str) -> Value {
        match self {
            Object::Fields(bag) => bag.get(key).cloned().unwrap_or_default(),
            Object::Date(d) => date_property(d.date, key, true, true),
            Object::YearMonth(ym) => date_property(ym.year_month.iso_date(), key, true, false),
            Object::MonthDay(md) => date_property(md.month_day.iso_date(), key, false, true),
            _ => Value::Undefined,
        }
    }
}

fn date_property(date: PlainDate, key: &str, has_year: bool, has_day: bool) -> Value {
    match key {
        "year" if has_year => Value::from(date.year()),
        "month" if has_year => Value::from(i32::from(date.month())),
        "monthCode" => Value::String(date.month_code()),
        "day" if has_day => Value::from(i32::from(date.day())),
        _ => Value::Undefined,
    }
}

impl From<FieldBag> for Object {
    fn from(bag: FieldBag) -> Self {
        Object::Fields(bag)
    }
}

impl From<DateObject> for Object {
    fn from(d: DateObject) -> Self {
        Object::Date(d)
    }
}

impl From<YearMonthObject> for Object {
    fn from(d: YearMonthObject) -> Self {
        Object::YearMonth(d)
    }
}

impl From<MonthDayObject> for Object {
    fn from(d: MonthDayObject) -> Self {
        Object::MonthDay(d)
    }
}

impl From<Duration> for Object {
    fn from(d: Duration) -> Self {
        Object::Duration(d)
    }
}

impl From<ProviderRef> for Object {
    fn from(r: ProviderRef) -> Self {
        Object::Calendar(r)
    }
}

impl From<Function> for Object {
    fn from(f: Function) -> Self {
        Object::Function(f)
    }
}

impl From<Vec<Value>> for Object {
    fn from(items: Vec<Value>) -> Self {
        Object::List(items)
    }
}

impl From<Iterable> for Object {
    fn from(i: Iterable) -> Self {
        Object::Iterable(i)
    }
}

/// A plain object: string keys mapped to values, in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldBag(BTreeMap<String, Value>);

impl FieldBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bag with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` has an entry, even an undefined one.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates the own property keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of own properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag has no own properties.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FieldBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A date paired with the calendar it is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct DateObject {
    pub date: PlainDate,
    pub calendar: CalendarProvider,
}

impl DateObject {
    pub fn new(date: PlainDate, calendar: CalendarProvider) -> Self {
        Self { date, calendar }
    }

    /// A date in the built-in ISO calendar.
    pub fn iso(date: PlainDate) -> Self {
        Self::new(date, CalendarProvider::Iso8601)
    }
}

impl fmt::Display for DateObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.date.fmt(f)
    }
}

/// A year-month paired with its calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct YearMonthObject {
    pub year_month: PlainYearMonth,
    pub calendar: CalendarProvider,
}

impl YearMonthObject {
    pub fn new(year_month: PlainYearMonth, calendar: CalendarProvider) -> Self {
        Self {
            year_month,
            calendar,
        }
    }
}

/// A month-day paired with its calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthDayObject {
    pub month_day: PlainMonthDay,
    pub calendar: CalendarProvider,
}

impl MonthDayObject {
    pub fn new(month_day: PlainMonthDay, calendar: CalendarProvider) -> Self {
        Self {
            month_day,
            calendar,
        }
    }
}

/// Any of the date-like values the per-field accessors accept.
#[derive(Debug, Clone, PartialEq)]
pub enum DateLike {
    Date(DateObject),
    YearMonth(YearMonthObject),
    MonthDay(MonthDayObject),
}

impl DateLike {
    /// The ISO date backing the value; year-months use day 1 and
    /// month-days use the reference year.
    pub fn iso_date(&self) -> PlainDate {
        match self {
            DateLike::Date(d) => d.date,
            DateLike::YearMonth(ym) => ym.year_month.iso_date(),
            DateLike::MonthDay(md) => md.month_day.iso_date(),
        }
    }

    /// The calendar the value is expressed in.
    pub fn calendar(&self) -> &CalendarProvider {
        match self {
            DateLike::Date(d) => &d.calendar,
            DateLike::YearMonth(ym) => &ym.calendar,
            DateLike::MonthDay(md) => &md.calendar,
        }
    }

    /// The value handed to external accessors.
    pub fn to_value(&self) -> Value {
        match self {
            DateLike::Date(d) => Value::from(d.clone()),
            DateLike::YearMonth(ym) => Value::from(ym.clone()),
            DateLike::MonthDay(md) => Value::from(md.clone()),
        }
    }
}

impl From<DateObject> for DateLike {
    fn from(d: DateObject) -> Self {
        DateLike::Date(d)
    }
}

impl From<YearMonthObject> for DateLike {
    fn from(d: YearMonthObject) -> Self {
        DateLike::YearMonth(d)
    }
}

impl From<MonthDayObject> for DateLike {
    fn from(d: MonthDayObject) -> Self {
        DateLike::MonthDay(d)
    }
}
