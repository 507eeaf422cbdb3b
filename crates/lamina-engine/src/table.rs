//! MethodTable — the member map one extension layer contributes
//!
//! A table collects callable members (methods) and data members (fields with
//! initial values). Handing the table to [`TypeDef::extend`] moves it, so the
//! caller keeps no handle that could mutate the layer afterwards; a type
//! definition's members never change once built.
//!
//! Fields are per-instance, per-layer state: each instantiation gets its own
//! copy of the initial values, visible to that layer's methods through
//! [`Scope::get`]/[`Scope::set`].
//!
//! [`TypeDef::extend`]: crate::typedef::TypeDef::extend
//! [`Scope::get`]: crate::dispatch::Scope::get
//! [`Scope::set`]: crate::dispatch::Scope::set

use std::sync::Arc;

use rustc_hash::FxHashMap;

use lamina_sdk::Value;

use crate::dispatch::Scope;
use crate::error::DispatchError;

/// A layer method body.
///
/// Bodies receive the per-call [`Scope`] (bound to the full instance for
/// `this` dispatch and to this layer for `super` and field access) and the
/// positional call arguments. Tables are shared between every instance of a
/// type definition, so bodies must be `Send + Sync`.
pub type MethodFn =
    Arc<dyn Fn(&Scope<'_>, &[Value]) -> Result<Value, DispatchError> + Send + Sync>;

/// Member map for one behavior layer: methods plus field initial values.
///
/// Built with chainable calls:
///
/// ```ignore
/// let table = MethodTable::new()
///     .field("val", Value::int(-1))
///     .method("get", |scope, _args| Ok(scope.get("val").unwrap_or_default()))
///     .method("set", |scope, args| {
///         scope.set("val", args[0].clone());
///         Ok(Value::null())
///     });
/// ```
pub struct MethodTable {
    methods: FxHashMap<String, MethodFn>,
    fields: FxHashMap<String, Value>,
}

impl MethodTable {
    /// Create an empty table (a pass-through layer adds no members)
    pub fn new() -> Self {
        Self {
            methods: FxHashMap::default(),
            fields: FxHashMap::default(),
        }
    }

    /// Add a method. Redefining a name already present in an ancestor layer
    /// is an intentional override, not an error.
    pub fn method(
        mut self,
        name: impl Into<String>,
        body: impl Fn(&Scope<'_>, &[Value]) -> Result<Value, DispatchError> + Send + Sync + 'static,
    ) -> Self {
        self.methods.insert(name.into(), Arc::new(body));
        self
    }

    /// Add a field with its per-instance initial value
    pub fn field(mut self, name: impl Into<String>, initial: Value) -> Self {
        self.fields.insert(name.into(), initial);
        self
    }

    /// Look up a method by name
    pub fn get_method(&self, name: &str) -> Option<&MethodFn> {
        self.methods.get(name)
    }

    /// Check whether this table defines `name` as a method
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Number of methods in this table
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Field initial values for this layer
    pub(crate) fn fields(&self) -> &FxHashMap<String, Value> {
        &self.fields
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.methods.len())
            .field("fields", &self.fields.len())
            .finish()
    }
}
