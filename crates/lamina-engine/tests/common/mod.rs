//! Shared host fixtures for the integration suites.

#![allow(dead_code)]

use std::sync::Arc;

use lamina_engine::{BaseCallResult, BaseClass, BaseObject, NoopBaseObject, Value};

/// Bare root type: no native methods at all.
pub struct ObjectClass;

impl BaseClass for ObjectClass {
    fn name(&self) -> &str {
        "lang.Object"
    }
    fn construct(&self) -> Box<dyn BaseObject> {
        Box::new(NoopBaseObject)
    }
}

/// Stateful native counter with `get`/`set`, starting at 0 — the stand-in
/// for the original corpus's AtomicInteger base.
pub struct CounterClass;

struct CounterObject(i64);

impl BaseClass for CounterClass {
    fn name(&self) -> &str {
        "util.Counter"
    }
    fn construct(&self) -> Box<dyn BaseObject> {
        Box::new(CounterObject(0))
    }
}

impl BaseObject for CounterObject {
    fn invoke(&mut self, name: &str, args: &[Value]) -> BaseCallResult {
        match name {
            "get" => BaseCallResult::int(self.0),
            "set" => match args.first().and_then(Value::as_int) {
                Some(v) => {
                    self.0 = v;
                    BaseCallResult::null()
                }
                None => BaseCallResult::Error("set expects an int".to_string()),
            },
            _ => BaseCallResult::Unhandled,
        }
    }
}

pub fn object_class() -> Arc<dyn BaseClass> {
    Arc::new(ObjectClass)
}

pub fn counter_class() -> Arc<dyn BaseClass> {
    Arc::new(CounterClass)
}
