//! Calendar equality and consolidation.

use crate::builtin::ISO8601;
use crate::error::CalendarError;
use crate::provider::CalendarProvider;

fn same_object(one: &CalendarProvider, two: &CalendarProvider) -> bool {
    match (one, two) {
        (CalendarProvider::External(a), CalendarProvider::External(b)) => a.ptr_eq(b),
        _ => false,
    }
}

/// Returns `true` if both providers are the same calendar object or have
/// the same identifier.
///
/// # Errors
///
/// Propagates failures reading an external identifier.
pub fn equals(one: &CalendarProvider, two: &CalendarProvider) -> Result<bool, CalendarError> {
    if same_object(one, two) {
        return Ok(true);
    }
    Ok(one.identifier()? == two.identifier()?)
}

/// Like [`equals`], failing when the calendars differ.
///
/// # Errors
///
/// Returns [`CalendarError::IncompatibleCalendars`] naming both
/// identifiers.
pub fn equals_or_throw(one: &CalendarProvider, two: &CalendarProvider) -> Result<(), CalendarError> {
    if same_object(one, two) {
        return Ok(());
    }
    let (a, b) = (one.identifier()?, two.identifier()?);
    if a == b {
        Ok(())
    } else {
        Err(CalendarError::IncompatibleCalendars { one: a, two: b })
    }
}

/// Picks the calendar to use when combining values in `one` and `two`.
///
/// Equal calendars yield `two`. The ISO calendar yields to any other
/// calendar, while two distinct non-ISO calendars are incompatible.
///
/// # Errors
///
/// Returns [`CalendarError::IncompatibleCalendars`] for two distinct
/// non-ISO calendars.
pub fn consolidate(
    one: &CalendarProvider,
    two: &CalendarProvider,
) -> Result<CalendarProvider, CalendarError> {
    if same_object(one, two) {
        return Ok(two.clone());
    }
    let (a, b) = (one.identifier()?, two.identifier()?);
    if a == b || a == ISO8601 {
        return Ok(two.clone());
    }
    if b == ISO8601 {
        return Ok(one.clone());
    }
    Err(CalendarError::IncompatibleCalendars { one: a, two: b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ProviderRef;
    use crate::value::FieldBag;

    fn custom(id: &str) -> CalendarProvider {
        CalendarProvider::External(ProviderRef::new(FieldBag::new().with("id", id)))
    }

    #[test]
    fn equals_by_identifier() {
        let iso = CalendarProvider::Iso8601;
        assert_eq!(equals(&iso, &iso), Ok(true));
        assert_eq!(equals(&iso, &custom("iso8601")), Ok(true));
        assert_eq!(equals(&iso, &custom("x")), Ok(false));
        let x = custom("x");
        assert_eq!(equals(&x, &x.clone()), Ok(true));
    }

    #[test]
    fn equals_or_throw_quotes_both() {
        let err = equals_or_throw(&custom("x"), &custom("y")).unwrap_err();
        assert_eq!(err.to_string(), "calendars \"x\" and \"y\" are incompatible");
    }

    #[test]
    fn same_object_skips_identifier_lookup() {
        let broken = CalendarProvider::External(ProviderRef::new(FieldBag::new()));
        assert_eq!(equals(&broken, &broken.clone()), Ok(true));
        assert!(equals(&broken, &CalendarProvider::Iso8601).is_err());
    }

    #[test]
    fn consolidate_precedence() {
        let iso = CalendarProvider::Iso8601;
        let x = custom("x");
        let y = custom("y");
        assert_eq!(consolidate(&iso, &iso), Ok(iso.clone()));
        assert_eq!(consolidate(&iso, &x), Ok(x.clone()));
        assert_eq!(consolidate(&x, &iso), Ok(x.clone()));
        let x2 = custom("x");
        assert_eq!(consolidate(&x, &x2), Ok(x2.clone()));
        assert_eq!(
            consolidate(&x, &y),
            Err(CalendarError::IncompatibleCalendars {
                one: "x".to_string(),
                two: "y".to_string()
            })
        );
    }
}
