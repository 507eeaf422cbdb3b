//! Instance — a constructed object over an extension chain
//!
//! Instantiation collects the chain root-first, constructs a fresh base
//! object, and builds one context per layer holding that layer's definition
//! and its per-instance field state. Every `instantiate` call yields an
//! independent instance: contexts and the base object are owned exclusively,
//! so two instances of the same definition never observe each other's state.
//!
//! There is no stored back-reference from a context to its instance. The
//! `self` a method body sees is bound late, at call time, when dispatch
//! borrows the finished instance to build the call's [`Scope`] — which is
//! what makes the forward-reference problem of assembling contexts before
//! the instance exists disappear entirely.
//!
//! [`Scope`]: crate::dispatch::Scope

use std::cell::RefCell;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use lamina_sdk::{BaseObject, Value};

use crate::typedef::TypeDef;

/// Per-instance, per-layer context: the layer's definition plus its own
/// mutable field state.
pub(crate) struct LayerContext {
    pub(crate) typedef: Arc<TypeDef>,
    pub(crate) fields: RefCell<FxHashMap<String, Value>>,
}

/// A constructed object: one context per chain layer plus an exclusively
/// owned base object.
///
/// Instances are single-threaded by design (interior mutability for layer
/// fields and the base object); the runtime provides no internal
/// synchronization for concurrent calls on one instance. Type definitions,
/// by contrast, stay freely shareable.
pub struct Instance {
    /// Layer contexts in root-first order, mirroring the extension chain
    pub(crate) layers: Vec<LayerContext>,
    /// The base object every unresolved lookup falls through to
    pub(crate) base: RefCell<Box<dyn BaseObject>>,
    /// Leaf display name, for diagnostics
    pub(crate) type_name: Option<String>,
}

impl Instance {
    /// Build a fresh instance from a leaf type definition.
    pub fn new(leaf: &Arc<TypeDef>) -> Self {
        let (chain, base_class) = leaf.chain();
        let base = base_class.construct();
        let layers = chain
            .into_iter()
            .map(|typedef| LayerContext {
                fields: RefCell::new(typedef.members().fields().clone()),
                typedef,
            })
            .collect();
        Self {
            layers,
            base: RefCell::new(base),
            type_name: leaf.display_name().map(str::to_string),
        }
    }

    /// Number of layers in this instance's chain
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The leaf type's display name, if it was named at extend time
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Name used in diagnostics for this instance's type
    pub(crate) fn describe(&self) -> String {
        self.type_name
            .clone()
            .unwrap_or_else(|| "<anonymous>".to_string())
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .field("layers", &self.layers.len())
            .finish()
    }
}
