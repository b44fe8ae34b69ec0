//! Methods records: capabilities of a provider, resolved once.

use std::sync::Arc;

use tracing::debug;

use crate::error::CalendarError;
use crate::method::{CalendarMethod, Function, MethodSet};
use crate::provider::CalendarProvider;
use crate::realm::Realm;
use crate::value::Value;

/// A provider together with the capabilities looked up on it.
///
/// Built once per use site and read-only afterwards. A slot holds a
/// function only when the provider is a calendar object whose property is
/// not the built-in implementation; an empty slot for a looked-up method
/// means the built-in algorithm runs.
#[derive(Debug, Clone)]
pub struct MethodsRecord {
    provider: CalendarProvider,
    looked_up: MethodSet,
    slots: [Option<Function>; CalendarMethod::COUNT],
    realm: Arc<Realm>,
}

impl MethodsRecord {
    /// Looks up every method of `methods` on `provider`.
    ///
    /// The identifier-only built-in provider performs no lookups. For a
    /// calendar object each method is read exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MissingCapability`] or
    /// [`CalendarError::NotCallable`] when a method cannot be resolved, and
    /// propagates failing lookups.
    pub fn new(provider: CalendarProvider, methods: MethodSet) -> Result<Self, CalendarError> {
        let mut slots: [Option<Function>; CalendarMethod::COUNT] = Default::default();
        let realm = match &provider {
            CalendarProvider::Iso8601 => Realm::shared(),
            CalendarProvider::External(cal) => {
                let builtin = cal.as_builtin();
                for method in methods.iter() {
                    let f = cal.get_method(method)?;
                    if builtin.is_some() && f.is_builtin(method) {
                        continue;
                    }
                    slots[method as usize] = Some(f);
                }
                builtin.map_or_else(Realm::shared, |b| Arc::clone(b.realm()))
            }
        };

        let resolved: MethodSet = methods
            .iter()
            .filter(|m| slots[*m as usize].is_some())
            .collect();
        let kind = if provider.is_builtin() { "iso8601" } else { "object" };
        debug!(
            provider = kind,
            requested = ?methods,
            resolved = ?resolved,
            "built calendar methods record"
        );

        Ok(Self {
            provider,
            looked_up: methods,
            slots,
            realm,
        })
    }

    pub fn provider(&self) -> &CalendarProvider {
        &self.provider
    }

    /// The receiver passed to external capabilities.
    pub fn receiver(&self) -> Value {
        self.provider.to_value()
    }

    /// Returns `true` if `method` was requested when the record was built.
    pub fn has_looked_up(&self, method: CalendarMethod) -> bool {
        self.looked_up.contains(method)
    }

    /// The external function for `method`, or `None` when the built-in
    /// algorithm applies.
    pub fn method(&self, method: CalendarMethod) -> Option<&Function> {
        debug_assert!(
            self.has_looked_up(method),
            "{method} was not looked up for this record"
        );
        self.slots[method as usize].as_ref()
    }

    /// Returns `true` when `method` runs the built-in algorithm.
    pub fn is_builtin(&self, method: CalendarMethod) -> bool {
        self.method(method).is_none()
    }

    /// The realm consulted for array iteration.
    pub fn realm(&self) -> &Realm {
        &self.realm
    }
}
