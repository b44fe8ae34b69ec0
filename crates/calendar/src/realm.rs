//! The host realm: the built-in calendar prototype and array iteration.
//!
//! Built-in calendar instances hold an `Arc<Realm>`. A realm whose
//! prototype methods or array iteration have been replaced disables the
//! fast paths that would otherwise skip observable calls.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::CalendarError;
use crate::iter::{ListIterator, ValueIterator};
use crate::method::{CalendarMethod, Function};
use crate::value::{Object, Value};

type ArrayIteratorFn = dyn Fn(Vec<Value>) -> Box<dyn ValueIterator> + Send + Sync;

static SHARED: LazyLock<Arc<Realm>> = LazyLock::new(|| Arc::new(Realm::default()));

/// Host state consulted by built-in calendars.
#[derive(Clone)]
pub struct Realm {
    prototype: [Function; CalendarMethod::COUNT],
    array_iterator: Option<Arc<ArrayIteratorFn>>,
}

impl Default for Realm {
    fn default() -> Self {
        Self {
            prototype: CalendarMethod::ALL.map(Function::Builtin),
            array_iterator: None,
        }
    }
}

impl Realm {
    /// The pristine realm shared by calendars that were not given one.
    pub fn shared() -> Arc<Realm> {
        Arc::clone(&SHARED)
    }

    /// Returns the realm with the prototype's `method` replaced by `f`.
    pub fn with_prototype_method(mut self, method: CalendarMethod, f: Function) -> Self {
        self.prototype[method as usize] = f;
        self
    }

    /// Returns the realm with array iteration replaced by `f`.
    pub fn with_array_iterator(
        mut self,
        f: impl Fn(Vec<Value>) -> Box<dyn ValueIterator> + Send + Sync + 'static,
    ) -> Self {
        self.array_iterator = Some(Arc::new(f));
        self
    }

    /// The function the built-in calendar prototype holds for `method`.
    pub fn prototype_method(&self, method: CalendarMethod) -> &Function {
        &self.prototype[method as usize]
    }

    /// Returns `true` while array iteration has not been replaced.
    pub fn is_array_iteration_sane(&self) -> bool {
        self.array_iterator.is_none()
    }

    /// Starts iterating `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotAnIterable`] for anything other than a
    /// list or an iterable.
    pub(crate) fn iterate(&self, value: &Value) -> Result<Box<dyn ValueIterator>, CalendarError> {
        match value {
            Value::Object(Object::List(items)) => Ok(match &self.array_iterator {
                Some(f) => f(items.clone()),
                None => Box::new(ListIterator::new(items.clone())),
            }),
            Value::Object(Object::Iterable(iterable)) => Ok(iterable.iterate()),
            other => Err(CalendarError::NotAnIterable {
                found: other.describe(),
            }),
        }
    }
}

impl fmt::Debug for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patched: Vec<_> = CalendarMethod::ALL
            .into_iter()
            .filter(|m| !self.prototype_method(*m).is_builtin(*m))
            .map(CalendarMethod::name)
            .collect();
        f.debug_struct("Realm")
            .field("patched_methods", &patched)
            .field("array_iteration_sane", &self.is_array_iteration_sane())
            .finish()
    }
}
