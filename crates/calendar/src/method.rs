//! Calendar protocol methods, method sets and callable handles.

use std::fmt;
use std::sync::Arc;

use crate::builtin;
use crate::error::CalendarError;
use crate::value::Value;

/// A method of the calendar protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarMethod {
    DateAdd,
    DateFromFields,
    DateUntil,
    Day,
    DayOfWeek,
    DayOfYear,
    DaysInMonth,
    DaysInWeek,
    DaysInYear,
    Fields,
    InLeapYear,
    MergeFields,
    Month,
    MonthCode,
    MonthDayFromFields,
    MonthsInYear,
    WeekOfYear,
    Year,
    YearMonthFromFields,
    YearOfWeek,
}

impl CalendarMethod {
    /// Number of protocol methods.
    pub const COUNT: usize = 20;

    /// Every protocol method, in property-name order.
    pub const ALL: [CalendarMethod; Self::COUNT] = [
        CalendarMethod::DateAdd,
        CalendarMethod::DateFromFields,
        CalendarMethod::DateUntil,
        CalendarMethod::Day,
        CalendarMethod::DayOfWeek,
        CalendarMethod::DayOfYear,
        CalendarMethod::DaysInMonth,
        CalendarMethod::DaysInWeek,
        CalendarMethod::DaysInYear,
        CalendarMethod::Fields,
        CalendarMethod::InLeapYear,
        CalendarMethod::MergeFields,
        CalendarMethod::Month,
        CalendarMethod::MonthCode,
        CalendarMethod::MonthDayFromFields,
        CalendarMethod::MonthsInYear,
        CalendarMethod::WeekOfYear,
        CalendarMethod::Year,
        CalendarMethod::YearMonthFromFields,
        CalendarMethod::YearOfWeek,
    ];

    /// Returns the property name of the method, e.g. `"dateAdd"`.
    pub fn name(self) -> &'static str {
        match self {
            CalendarMethod::DateAdd => "dateAdd",
            CalendarMethod::DateFromFields => "dateFromFields",
            CalendarMethod::DateUntil => "dateUntil",
            CalendarMethod::Day => "day",
            CalendarMethod::DayOfWeek => "dayOfWeek",
            CalendarMethod::DayOfYear => "dayOfYear",
            CalendarMethod::DaysInMonth => "daysInMonth",
            CalendarMethod::DaysInWeek => "daysInWeek",
            CalendarMethod::DaysInYear => "daysInYear",
            CalendarMethod::Fields => "fields",
            CalendarMethod::InLeapYear => "inLeapYear",
            CalendarMethod::MergeFields => "mergeFields",
            CalendarMethod::Month => "month",
            CalendarMethod::MonthCode => "monthCode",
            CalendarMethod::MonthDayFromFields => "monthDayFromFields",
            CalendarMethod::MonthsInYear => "monthsInYear",
            CalendarMethod::WeekOfYear => "weekOfYear",
            CalendarMethod::Year => "year",
            CalendarMethod::YearMonthFromFields => "yearMonthFromFields",
            CalendarMethod::YearOfWeek => "yearOfWeek",
        }
    }

    /// Looks up a method by property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

impl fmt::Display for CalendarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`CalendarMethod`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MethodSet(u32);

impl MethodSet {
    /// The empty set.
    pub const EMPTY: MethodSet = MethodSet(0);

    /// Creates a set from a slice of methods.
    pub fn of(methods: &[CalendarMethod]) -> Self {
        methods.iter().copied().collect()
    }

    /// Returns `true` if `method` is in the set.
    pub fn contains(self, method: CalendarMethod) -> bool {
        self.0 & method.bit() != 0
    }

    /// Returns the set with `method` added.
    pub fn with(self, method: CalendarMethod) -> Self {
        Self(self.0 | method.bit())
    }

    /// Returns the union of two sets.
    pub fn union(self, other: MethodSet) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of methods in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the methods in property-name order.
    pub fn iter(self) -> impl Iterator<Item = CalendarMethod> {
        CalendarMethod::ALL
            .into_iter()
            .filter(move |m| self.contains(*m))
    }
}

impl FromIterator<CalendarMethod> for MethodSet {
    fn from_iter<I: IntoIterator<Item = CalendarMethod>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, MethodSet::with)
    }
}

impl fmt::Debug for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(CalendarMethod::name)).finish()
    }
}

/// Signature of caller-supplied capability code: `(receiver, arguments)`.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, CalendarError> + Send + Sync;

/// A callable value.
///
/// `Builtin` is the engine's own implementation of a protocol method; two
/// builtin handles are identical when they name the same method. `Native`
/// wraps caller code and is identical only to clones of itself.
#[derive(Clone)]
pub enum Function {
    Builtin(CalendarMethod),
    Native(Arc<NativeFn>),
}

impl Function {
    /// Wraps a closure as a callable value.
    pub fn native(
        f: impl Fn(&Value, &[Value]) -> Result<Value, CalendarError> + Send + Sync + 'static,
    ) -> Self {
        Function::Native(Arc::new(f))
    }

    /// Returns `true` if this is the engine's own implementation of `method`.
    pub fn is_builtin(&self, method: CalendarMethod) -> bool {
        matches!(self, Function::Builtin(m) if *m == method)
    }

    /// Invokes the function with `this` as receiver.
    ///
    /// # Errors
    ///
    /// Propagates whatever the function returns. Builtin methods fail with
    /// [`CalendarError::IncompatibleReceiver`] unless `this` is a built-in
    /// calendar instance.
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, CalendarError> {
        match self {
            Function::Builtin(method) => builtin::call_builtin(*method, this, args),
            Function::Native(f) => f(this, args),
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Function::Builtin(a), Function::Builtin(b)) => a == b,
            (Function::Native(a), Function::Native(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(m) => write!(f, "Function::Builtin({m})"),
            Function::Native(_) => f.write_str("Function::Native(..)"),
        }
    }
}
