//! Error types for the kalends-calendar crate.

use kalends_iso::IsoError;

/// Error type for all fallible operations in the kalends-calendar crate.
///
/// This enum covers calendar identifier resolution, capability lookups on
/// external providers, field extraction and validation, option parsing,
/// and validation of values returned by external capabilities. Errors from
/// the ISO layer are carried through unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string does not name a supported calendar.
    #[error("invalid calendar identifier: \"{id}\"")]
    InvalidCalendarIdentifier {
        /// The rejected identifier, as given.
        id: String,
    },

    /// Returned when an external provider has no property for a capability.
    #[error("calendar object does not implement \"{method}\"")]
    MissingCapability {
        /// Name of the missing capability.
        method: &'static str,
    },

    /// Returned when a capability property holds something other than a function.
    #[error("calendar property \"{method}\" is not a function")]
    NotCallable {
        /// Name of the capability property.
        method: &'static str,
    },

    /// Returned when a field holds a value of the wrong type or range.
    #[error("invalid value for \"{field}\": {reason}")]
    InvalidFieldValue {
        /// Name of the offending field.
        field: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// Returned for a malformed month code, or one that disagrees with `month`.
    #[error("invalid month code: \"{code}\"")]
    InvalidMonthCode {
        /// The rejected month code.
        code: String,
    },

    /// Returned when a required field is absent.
    #[error("missing required field \"{field}\"")]
    MissingRequiredField {
        /// Name of the missing field.
        field: String,
    },

    /// Returned when two calendars that must agree have different identifiers.
    #[error("calendars \"{one}\" and \"{two}\" are incompatible")]
    IncompatibleCalendars {
        /// Identifier of the first calendar.
        one: String,
        /// Identifier of the second calendar.
        two: String,
    },

    /// Returned when an external capability returns a value of the wrong shape.
    #[error("\"{method}\" returned {found}, expected {expected}")]
    UnexpectedResultType {
        /// Name of the capability that was called.
        method: &'static str,
        /// Description of the accepted result.
        expected: &'static str,
        /// Description of the value actually returned.
        found: String,
    },

    /// Returned when a value that must be iterated is not iterable.
    #[error("{found} is not iterable")]
    NotAnIterable {
        /// Description of the value.
        found: String,
    },

    /// Returned when iteration over field names produces a non-string.
    #[error("field name {found} is not a string")]
    NotAString {
        /// Description of the offending element.
        found: String,
    },

    /// Returned when a field name is not one of the ISO calendar fields.
    #[error("invalid calendar field \"{field}\"")]
    InvalidField {
        /// The rejected field name.
        field: String,
    },

    /// Returned when a field name appears twice in a field list.
    #[error("duplicate calendar field \"{field}\"")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },

    /// Returned when an options bag holds an unsupported value.
    #[error("invalid value {value} for option \"{option}\"")]
    InvalidOption {
        /// Name of the option.
        option: &'static str,
        /// Description of the rejected value.
        value: String,
    },

    /// Returned when an object lacks part of the calendar protocol.
    #[error("object does not implement the calendar protocol (missing \"{missing}\")")]
    InvalidCalendarObject {
        /// The first protocol property found missing.
        missing: &'static str,
    },

    /// Returned when a built-in calendar method runs on a foreign receiver.
    #[error("calendar method \"{method}\" called on incompatible receiver {found}")]
    IncompatibleReceiver {
        /// Name of the method.
        method: &'static str,
        /// Description of the receiver.
        found: String,
    },

    /// Returned when a built-in calendar method receives a bad argument.
    #[error("invalid argument \"{argument}\" for \"{method}\": expected {expected}, got {found}")]
    InvalidArgument {
        /// Name of the method.
        method: &'static str,
        /// Name of the argument.
        argument: &'static str,
        /// Description of the accepted values.
        expected: &'static str,
        /// Description of the value passed.
        found: String,
    },

    /// Free-form failure raised by caller-supplied capability code.
    #[error("{message}")]
    External {
        /// Message supplied by the external code.
        message: String,
    },

    /// Error raised by the ISO date layer.
    #[error(transparent)]
    Iso(#[from] IsoError),
}

impl CalendarError {
    /// Creates an [`CalendarError::External`] from any message.
    pub fn external(message: impl Into<String>) -> Self {
        Self::External {
            message: message.into(),
        }
    }
}
