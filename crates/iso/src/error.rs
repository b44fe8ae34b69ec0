//! Error types for the kalends-iso crate.

/// Error type for all fallible operations in the kalends-iso crate.
///
/// This enum covers overflow rejection during field regulation, dates
/// outside the representable ISO range, durations whose arithmetic leaves
/// the supported range, and malformed date strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IsoError {
    /// Returned under [`Overflow::Reject`](crate::Overflow::Reject) when a
    /// component lies outside its valid range.
    #[error("{field} {value} is out of range (must be {min}..={max})")]
    OverflowRejected {
        /// Name of the rejected component (`"month"` or `"day"`).
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// Returned when a date lies outside the ISO date-time limits.
    #[error("date {year:+}-{month:02}-{day:02} is outside the representable range")]
    DateOutOfRange {
        /// Year of the rejected date.
        year: i64,
        /// Month of the rejected date.
        month: u8,
        /// Day of the rejected date.
        day: u8,
    },

    /// Returned when a year-month lies outside the ISO year-month limits.
    #[error("year-month {year:+}-{month:02} is outside the representable range")]
    YearMonthOutOfRange {
        /// Year of the rejected year-month.
        year: i64,
        /// Month of the rejected year-month.
        month: u8,
    },

    /// Returned when date arithmetic overflows the supported integer range.
    #[error("duration is out of range: {reason}")]
    DurationOutOfRange {
        /// Short description of the overflowing step.
        reason: &'static str,
    },

    /// Returned when a string cannot be parsed as an ISO 8601 calendar date.
    #[error("invalid ISO date string: \"{input}\"")]
    ParseDate {
        /// The rejected input.
        input: String,
    },

    /// Returned when a string does not name a date unit.
    #[error("invalid date unit: \"{unit}\"")]
    InvalidUnit {
        /// The rejected unit name.
        unit: String,
    },

    /// Returned when a string does not name an overflow policy.
    #[error("invalid overflow policy: \"{value}\" (expected \"constrain\" or \"reject\")")]
    InvalidOverflow {
        /// The rejected policy name.
        value: String,
    },
}
