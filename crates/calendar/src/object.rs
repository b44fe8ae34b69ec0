//! Calendar objects and shared references to them.

use std::fmt;
use std::sync::Arc;

use crate::builtin::BuiltinCalendar;
use crate::error::CalendarError;
use crate::method::{CalendarMethod, Function};
use crate::value::{FieldBag, Object, Value};

/// An object that can serve as a calendar.
///
/// Implementations answer property lookups; a lookup may run caller code
/// and is therefore fallible and observable.
pub trait CalendarObject: Send + Sync {
    /// Reads the property `key`, returning [`Value::Undefined`] when absent.
    ///
    /// # Errors
    ///
    /// Propagates failures of the lookup itself.
    fn get(&self, key: &str) -> Result<Value, CalendarError>;

    /// Returns `true` if the property `key` exists on the object or its
    /// prototype chain.
    ///
    /// # Errors
    ///
    /// Propagates failures of the lookup itself.
    fn has_property(&self, key: &str) -> Result<bool, CalendarError> {
        Ok(!self.get(key)?.is_undefined())
    }

    /// Returns the built-in calendar state when this is a built-in
    /// calendar instance.
    fn as_builtin(&self) -> Option<&BuiltinCalendar> {
        None
    }
}

impl CalendarObject for FieldBag {
    fn get(&self, key: &str) -> Result<Value, CalendarError> {
        Ok(FieldBag::get(self, key).cloned().unwrap_or_default())
    }

    fn has_property(&self, key: &str) -> Result<bool, CalendarError> {
        Ok(self.contains_key(key))
    }
}

/// A shared handle to a calendar object, compared by identity.
#[derive(Clone)]
pub struct ProviderRef(Arc<dyn CalendarObject>);

impl ProviderRef {
    pub fn new(object: impl CalendarObject + 'static) -> Self {
        Self(Arc::new(object))
    }

    pub fn from_arc(object: Arc<dyn CalendarObject>) -> Self {
        Self(object)
    }

    /// Returns `true` if both handles point at the same object.
    pub fn ptr_eq(&self, other: &ProviderRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Reads the property `key`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the lookup itself.
    pub fn get(&self, key: &str) -> Result<Value, CalendarError> {
        self.0.get(key)
    }

    /// Returns `true` if the property `key` exists.
    ///
    /// # Errors
    ///
    /// Propagates failures of the lookup itself.
    pub fn has_property(&self, key: &str) -> Result<bool, CalendarError> {
        self.0.has_property(key)
    }

    /// Looks up the protocol method `method` and checks that it is callable.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingCapability`] when the property is
    /// undefined or null, and [`CalendarError::NotCallable`] when it holds
    /// anything other than a function.
    pub fn get_method(&self, method: CalendarMethod) -> Result<Function, CalendarError> {
        match self.get(method.name())? {
            Value::Object(Object::Function(f)) => Ok(f),
            Value::Undefined | Value::Null => Err(CalendarError::MissingCapability {
                method: method.name(),
            }),
            _ => Err(CalendarError::NotCallable {
                method: method.name(),
            }),
        }
    }

    /// Returns the built-in calendar state of the object, if any.
    pub fn as_builtin(&self) -> Option<&BuiltinCalendar> {
        self.0.as_builtin()
    }
}

impl PartialEq for ProviderRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ProviderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.as_builtin().is_some() {
            f.write_str("ProviderRef(builtin)")
        } else {
            f.write_str("ProviderRef(..)")
        }
    }
}
