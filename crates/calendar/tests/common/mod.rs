#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use kalends_calendar::{
    BuiltinCalendar, CalendarError, CalendarMethod, CalendarObject, FieldBag, Function,
    ProviderRef, Value,
};

/// Property reads and capability calls observed on a [`CountingCalendar`].
#[derive(Debug, Default)]
pub struct Counters {
    gets: Mutex<BTreeMap<String, usize>>,
    calls: Mutex<BTreeMap<String, usize>>,
}

impl Counters {
    fn bump(map: &Mutex<BTreeMap<String, usize>>, key: &str) {
        let mut map = map.lock().unwrap();
        *map.entry(key.to_string()).or_default() += 1;
    }

    pub fn gets(&self, key: &str) -> usize {
        self.gets.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    pub fn calls(&self, key: &str) -> usize {
        self.calls.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    pub fn total_gets(&self) -> usize {
        self.gets.lock().unwrap().values().sum()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

/// A caller-supplied calendar that behaves like ISO 8601 but records every
/// property read and capability call.
pub struct CountingCalendar {
    properties: FieldBag,
    counters: Arc<Counters>,
}

impl CountingCalendar {
    /// A calendar with identifier `id` whose methods delegate to the
    /// built-in algorithms.
    pub fn new(id: &str) -> Self {
        let counters = Arc::new(Counters::default());
        let builtin = Value::from(BuiltinCalendar::new("iso8601").unwrap().into_provider());
        let mut properties = FieldBag::new().with("id", id);
        for method in CalendarMethod::ALL {
            let counters = Arc::clone(&counters);
            let builtin = builtin.clone();
            properties.set(
                method.name(),
                Function::native(move |_, args| {
                    Counters::bump(&counters.calls, method.name());
                    Function::Builtin(method).call(&builtin, args)
                }),
            );
        }
        Self {
            properties,
            counters,
        }
    }

    /// Replaces `method` with `f`; calls are still counted.
    pub fn with_method(
        mut self,
        method: CalendarMethod,
        f: impl Fn(&Value, &[Value]) -> Result<Value, CalendarError> + Send + Sync + 'static,
    ) -> Self {
        let counters = Arc::clone(&self.counters);
        self.properties.set(
            method.name(),
            Function::native(move |this, args| {
                Counters::bump(&counters.calls, method.name());
                f(this, args)
            }),
        );
        self
    }

    /// Sets a raw property.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.set(key, value);
        self
    }

    pub fn counters(&self) -> Arc<Counters> {
        Arc::clone(&self.counters)
    }

    pub fn into_provider(self) -> ProviderRef {
        ProviderRef::new(self)
    }
}

impl CalendarObject for CountingCalendar {
    fn get(&self, key: &str) -> Result<Value, CalendarError> {
        Counters::bump(&self.counters.gets, key);
        Ok(self.properties.get(key).cloned().unwrap_or_default())
    }
}
