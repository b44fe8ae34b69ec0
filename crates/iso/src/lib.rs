//! # kalends-iso
//!
//! Proleptic Gregorian (ISO 8601) calendar math.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"regulate_iso_date()"| B["IsoDateRecord"]
//!     B -->|".to_plain_date()"| C["PlainDate"]
//!     C -->|".epoch_day()"| D["epoch day"]
//!     D -->|"PlainDate::from_epoch_day()"| C
//!     C -->|".week_of_year()"| E["YearWeek"]
//!     C -->|"add_iso_date()"| C
//!     C -->|"difference_iso_date()"| F["DateDuration"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kalends_iso::{DateDuration, DateUnit, Overflow, PlainDate, add_iso_date, difference_iso_date};
//!
//! let start = PlainDate::new(2021, 1, 31).unwrap();
//! let end = add_iso_date(start, &DateDuration::new(0, 1, 0, 0), Overflow::Constrain).unwrap();
//! assert_eq!(end.to_string(), "2021-02-28");
//!
//! let diff = difference_iso_date(start, end, DateUnit::Day);
//! assert_eq!(diff.days, 28);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Leap years and month-length tables |
//! | `epoch` | Epoch-day conversion and day of week |
//! | `week` | ISO week numbering |
//! | `date` | `PlainDate`, `PlainYearMonth`, `PlainMonthDay` |
//! | `regulate` | Overflow policy and component regulation |
//! | `duration` | `Duration`, `DateDuration`, `DateUnit` |
//! | `arith` | Date addition and difference |
//! | `error` | Error types |

mod arith;
mod date;
mod duration;
mod epoch;
mod error;
mod regulate;
mod week;
mod year;

pub use arith::{add_iso_date, difference_iso_date};
pub use date::{
    MAX_EPOCH_DAY, MIN_EPOCH_DAY, PlainDate, PlainMonthDay, PlainYearMonth, REFERENCE_ISO_YEAR,
    month_code,
};
pub use duration::{DateDuration, DateUnit, Duration};
pub use epoch::{day_of_week, epoch_day, from_epoch_day};
pub use error::IsoError;
pub use regulate::{IsoDateRecord, Overflow, regulate_iso_date, regulate_iso_year_month};
pub use week::{YearWeek, week_of_year};
pub use year::{day_of_year, days_in_month, days_in_year, is_leap_year};

/// Days in an ISO week.
pub const DAYS_IN_WEEK: u8 = 7;

/// Months in an ISO year.
pub const MONTHS_IN_YEAR: u8 = 12;
