//! Explicit, closable iteration over values.
//!
//! Field-name lists returned by external providers are consumed one value
//! at a time. When consumption stops early because of an error, the
//! iterator is closed so that the producer can release its state.

use std::fmt;
use std::sync::Arc;

use crate::error::CalendarError;
use crate::value::Value;

/// A finite, non-restartable sequence of values.
pub trait ValueIterator: Send {
    /// Produces the next value, or `None` once exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the producer.
    fn next_value(&mut self) -> Result<Option<Value>, CalendarError>;

    /// Abandons the iteration before it is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the producer's close step.
    fn close(&mut self) -> Result<(), CalendarError> {
        Ok(())
    }
}

/// Iterates a list of values in order.
#[derive(Debug, Clone)]
pub struct ListIterator {
    items: std::vec::IntoIter<Value>,
}

impl ListIterator {
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl ValueIterator for ListIterator {
    fn next_value(&mut self) -> Result<Option<Value>, CalendarError> {
        Ok(self.items.next())
    }
}

type IteratorFactory = dyn Fn() -> Box<dyn ValueIterator> + Send + Sync;

/// A caller-supplied iterable: each call to [`Iterable::iterate`] starts a
/// fresh iteration.
#[derive(Clone)]
pub struct Iterable(Arc<IteratorFactory>);

impl Iterable {
    pub fn new(factory: impl Fn() -> Box<dyn ValueIterator> + Send + Sync + 'static) -> Self {
        Self(Arc::new(factory))
    }

    /// Starts a new iteration.
    pub fn iterate(&self) -> Box<dyn ValueIterator> {
        (self.0)()
    }
}

impl PartialEq for Iterable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Iterable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Iterable(..)")
    }
}

/// Runs `step` on every value of `iter`, closing the iterator if `step`
/// fails. The error from `step` wins over any error from closing.
pub(crate) fn for_each_value(
    iter: &mut dyn ValueIterator,
    mut step: impl FnMut(Value) -> Result<(), CalendarError>,
) -> Result<(), CalendarError> {
    while let Some(value) = iter.next_value()? {
        if let Err(e) = step(value) {
            let _ = iter.close();
            return Err(e);
        }
    }
    Ok(())
}
