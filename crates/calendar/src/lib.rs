//! # kalends-calendar
//!
//! Calendar providers, methods records and calendar-aware date operations
//! on top of `kalends-iso`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Value"] -->|"resolve_provider()"| B["CalendarProvider"]
//!     B -->|"MethodsRecord::new()"| C["MethodsRecord"]
//!     C -->|"collect_fields()"| D["field names"]
//!     C -->|"merge_fields()"| E["Object"]
//!     C -->|"date_from_fields()"| F["DateObject"]
//!     C -->|"date_add()"| F
//!     C -->|"date_until()"| G["Duration"]
//!     B -->|"calendar_year() ..."| H["accessor values"]
//!     B -->|"consolidate()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kalends_calendar::{
//!     CalendarMethod, FieldBag, MethodSet, MethodsRecord, Object, Value, date_from_fields,
//!     resolve_provider,
//! };
//!
//! let provider = resolve_provider(&Value::from("ISO8601"), None).unwrap();
//! let record = MethodsRecord::new(provider, MethodSet::of(&[CalendarMethod::DateFromFields])).unwrap();
//!
//! let fields = Object::from(FieldBag::new().with("year", 2021).with("monthCode", "M02").with("day", 31));
//! let date = date_from_fields(&record, &fields, None).unwrap();
//! assert_eq!(date.to_string(), "2021-02-28");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `value` | Values, objects and field bags exchanged with providers |
//! | `method` | Protocol methods, method sets and callable handles |
//! | `iter` | Closable iteration over values |
//! | `object` | Calendar objects and shared references |
//! | `realm` | Built-in prototype and array iteration state |
//! | `builtin` | The built-in ISO calendar and its methods |
//! | `provider` | Provider resolution from identifiers and objects |
//! | `record` | Methods records |
//! | `field` | Field extraction, month codes and merging |
//! | `options` | `overflow` and `largestUnit` options |
//! | `ops` | Record-dispatched field and date operations |
//! | `accessors` | Per-field accessors |
//! | `identity` | Calendar equality and consolidation |
//! | `error` | Error types |

mod accessors;
mod builtin;
mod error;
mod field;
mod identity;
mod iter;
mod method;
mod object;
mod ops;
mod options;
mod provider;
mod realm;
mod record;
mod value;

pub use accessors::{
    calendar_date_fields, calendar_day, calendar_day_of_week, calendar_day_of_year,
    calendar_days_in_month, calendar_days_in_week, calendar_days_in_year, calendar_in_leap_year,
    calendar_month, calendar_month_code, calendar_months_in_year, calendar_week_of_year,
    calendar_year, calendar_year_of_week,
};
pub use builtin::{BuiltinCalendar, ISO8601, is_builtin_fast_path};
pub use error::CalendarError;
pub use field::{
    CalendarField, TemporalFields, default_merge_fields, iso_field_keys_to_ignore,
    prepare_temporal_fields, resolve_month,
};
pub use identity::{consolidate, equals, equals_or_throw};
pub use iter::{Iterable, ListIterator, ValueIterator};
pub use method::{CalendarMethod, Function, MethodSet, NativeFn};
pub use object::{CalendarObject, ProviderRef};
pub use ops::{
    collect_fields, date_add, date_from_fields, date_until, date_until_with_unit, merge_fields,
    month_day_from_fields, year_month_from_fields,
};
pub use options::{to_largest_unit, to_overflow};
pub use provider::{CalendarProvider, resolve_provider};
pub use realm::Realm;
pub use record::MethodsRecord;
pub use value::{
    DateLike, DateObject, FieldBag, MonthDayObject, Object, Value, YearMonthObject,
};
