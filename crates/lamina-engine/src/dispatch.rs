//! Virtual dispatch, super delegation, and the per-call scope binding
//!
//! Resolution is one rule applied over one data structure: scan the
//! instance's layer stack downward from a starting position, run the first
//! method table that defines the name, and fall through to the base object
//! when none does.
//!
//! - A direct call on the instance, and every `this` call inside any layer
//!   body, starts the scan at the leaf. Lookup never starts at the calling
//!   layer itself — that is what lets a layer low in the chain call a method
//!   a more-derived layer overrides and have the override take effect.
//! - A `super` call from layer `k` starts the scan at `k-1` and never
//!   re-enters `k` or anything above it. The body it lands in still gets a
//!   scope whose `this` dispatch starts at the leaf, so nested `this` calls
//!   inside a super-invoked method use full virtual lookup.
//!
//! If the base object also reports the name unhandled, the call fails with
//! [`DispatchError::UnresolvedMethod`]; a base method that runs and fails
//! surfaces separately as [`DispatchError::Provider`].

use lamina_sdk::{BaseCallResult, Value};

use crate::error::DispatchError;
use crate::instance::Instance;

impl Instance {
    /// Call a method on this instance via virtual dispatch (leaf-first scan,
    /// base fall-through).
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        self.dispatch_below(self.layers.len(), name, args)
    }

    /// Invoke a base-object method directly, bypassing every layer.
    ///
    /// The script corpus's `super$name` form: an explicit escape hatch to the
    /// native method even when layers override it.
    pub fn call_base(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        self.invoke_base(name, args)
    }

    /// Scan layers `start-1 .. 0` for `name`; fall through to the base.
    ///
    /// `start == layers.len()` is a full virtual dispatch; `start == k` is
    /// the super dispatch for a caller at layer `k`.
    pub(crate) fn dispatch_below(
        &self,
        start: usize,
        name: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        for k in (0..start).rev() {
            let layer = &self.layers[k];
            if let Some(method) = layer.typedef.members().get_method(name) {
                let scope = Scope { instance: self, layer: k };
                return method(&scope, args);
            }
        }
        self.invoke_base(name, args)
    }

    fn invoke_base(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        match self.base.borrow_mut().invoke(name, args) {
            BaseCallResult::Value(value) => Ok(value),
            BaseCallResult::Unhandled => Err(DispatchError::UnresolvedMethod {
                type_name: self.describe(),
                method: name.to_string(),
            }),
            BaseCallResult::Error(message) => Err(DispatchError::Provider(message)),
        }
    }
}

/// The context binding a method body runs under.
///
/// A scope is built per call, borrowing the finished instance: `self` is
/// always the fully assembled object, however deep in the chain the body
/// lives. It exposes the three things a body can reach — `this` dispatch,
/// `super` delegation, and this layer's own fields.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
    pub(crate) instance: &'a Instance,
    pub(crate) layer: usize,
}

impl<'a> Scope<'a> {
    /// `this.name(args)` — full virtual dispatch, starting at the leaf.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        self.instance.call(name, args)
    }

    /// `this.super.name(args)` — dispatch starting one layer toward the root.
    pub fn call_super(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        self.instance.dispatch_below(self.layer, name, args)
    }

    /// The super proxy for this layer, as a first-class value.
    pub fn super_ref(&self) -> SuperRef<'a> {
        SuperRef {
            instance: self.instance,
            start: self.layer,
        }
    }

    /// Read a field of this layer's per-instance state.
    pub fn get(&self, field: &str) -> Option<Value> {
        self.instance.layers[self.layer]
            .fields
            .borrow()
            .get(field)
            .cloned()
    }

    /// Write a field of this layer's per-instance state.
    pub fn set(&self, field: &str, value: Value) {
        self.instance.layers[self.layer]
            .fields
            .borrow_mut()
            .insert(field.to_string(), value);
    }

    /// The instance this call is running on.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

impl std::fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("type_name", &self.instance.type_name())
            .field("layer", &self.layer)
            .finish()
    }
}

/// Explicit super delegation for one instance layer.
///
/// A plain `{instance, start}` view: dispatch for `start-1` toward the root
/// with base fall-through. It borrows the instance and can never outlive it.
#[derive(Clone, Copy)]
pub struct SuperRef<'a> {
    instance: &'a Instance,
    start: usize,
}

impl SuperRef<'_> {
    /// Call `name` starting the scan one layer inward from the owner.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, DispatchError> {
        self.instance.dispatch_below(self.start, name, args)
    }

    /// The chain position whose super this proxy represents.
    pub fn start_layer(&self) -> usize {
        self.start
    }
}

impl std::fmt::Debug for SuperRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuperRef")
            .field("type_name", &self.instance.type_name())
            .field("start", &self.start)
            .finish()
    }
}
