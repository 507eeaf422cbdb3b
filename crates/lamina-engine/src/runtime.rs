//! Runtime — the script-bootstrap facade over name registries
//!
//! Hosts register their base classes once at startup; script-level code then
//! builds extension chains by name. Types are defined once at load time and
//! read from anywhere afterwards, so both registries sit behind read-write
//! locks and every lookup is a read.
//!
//! This is the only dynamically typed entry point: a parent is a string that
//! must name either a registered base class or a previously named type
//! definition. Anything else is [`ExtendError::InvalidParent`] — the typed
//! core API ([`TypeDef::extend`]) cannot express an invalid parent at all.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use lamina_sdk::{BaseClass, BaseClassRegistry};

use crate::error::ExtendError;
use crate::instance::Instance;
use crate::table::MethodTable;
use crate::typedef::{Parent, TypeDef};

/// Name-based registry of base classes and named type definitions.
pub struct Runtime {
    bases: RwLock<BaseClassRegistry>,
    types: RwLock<FxHashMap<String, Arc<TypeDef>>>,
}

impl Runtime {
    /// Create an empty runtime
    pub fn new() -> Self {
        Self {
            bases: RwLock::new(BaseClassRegistry::new()),
            types: RwLock::new(FxHashMap::default()),
        }
    }

    /// Register a host base class under its own name
    pub fn register_base(&self, class: Arc<dyn BaseClass>) {
        self.bases.write().register(class);
    }

    /// Build an anonymous type definition whose parent is resolved by name.
    pub fn extend(&self, parent: &str, table: MethodTable) -> Result<Arc<TypeDef>, ExtendError> {
        let parent = self.resolve_parent(parent)?;
        Ok(TypeDef::extend(parent, table))
    }

    /// Build a named type definition and record it so later extends (and
    /// [`Runtime::new_instance`]) can refer to it by name.
    pub fn extend_named(
        &self,
        parent: &str,
        table: MethodTable,
        name: &str,
    ) -> Result<Arc<TypeDef>, ExtendError> {
        let parent = self.resolve_parent(parent)?;
        let def = TypeDef::extend_named(parent, table, name);
        self.types.write().insert(name.to_string(), Arc::clone(&def));
        Ok(def)
    }

    /// Look up a named type definition
    pub fn type_def(&self, name: &str) -> Option<Arc<TypeDef>> {
        self.types.read().get(name).cloned()
    }

    /// Instantiate a named type definition
    pub fn new_instance(&self, name: &str) -> Result<Instance, ExtendError> {
        let def = self.type_def(name).ok_or_else(|| ExtendError::UnknownType {
            name: name.to_string(),
        })?;
        Ok(def.instantiate())
    }

    /// Resolve a parent name: named type definitions first, then base
    /// classes.
    fn resolve_parent(&self, name: &str) -> Result<Parent, ExtendError> {
        if let Some(def) = self.types.read().get(name) {
            return Ok(Parent::Type(Arc::clone(def)));
        }
        if let Some(class) = self.bases.read().get(name) {
            return Ok(Parent::Base(class));
        }
        Err(ExtendError::InvalidParent {
            name: name.to_string(),
        })
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_sdk::{BaseObject, NoopBaseObject, Value};

    struct Root;

    impl BaseClass for Root {
        fn name(&self) -> &str {
            "lang.Object"
        }
        fn construct(&self) -> Box<dyn BaseObject> {
            Box::new(NoopBaseObject)
        }
    }

    #[test]
    fn test_invalid_parent_name() {
        let rt = Runtime::new();
        let err = rt.extend("lang.Object", MethodTable::new()).unwrap_err();
        assert_eq!(
            err,
            ExtendError::InvalidParent {
                name: "lang.Object".to_string()
            }
        );
    }

    #[test]
    fn test_named_chain_by_name() {
        let rt = Runtime::new();
        rt.register_base(Arc::new(Root));

        rt.extend_named(
            "lang.Object",
            MethodTable::new().method("get", |_s, _a| Ok(Value::str("A"))),
            "Container",
        )
        .unwrap();
        rt.extend_named(
            "Container",
            MethodTable::new().method("get", |scope, _a| {
                let inner = scope.call_super("get", &[])?;
                Ok(Value::str(format!("{} B", inner)))
            }),
            "Container2",
        )
        .unwrap();

        let instance = rt.new_instance("Container2").unwrap();
        assert_eq!(instance.call("get", &[]).unwrap(), Value::str("A B"));
        assert_eq!(instance.type_name(), Some("Container2"));
    }

    #[test]
    fn test_unknown_instance_name() {
        let rt = Runtime::new();
        let err = rt.new_instance("Nope").unwrap_err();
        assert_eq!(
            err,
            ExtendError::UnknownType {
                name: "Nope".to_string()
            }
        );
    }
}
