//! Base capability provider traits — the opaque host surface
//!
//! The engine treats the host's base object as a black box supporting exactly
//! two capabilities: construction, and invocation of a named method with
//! positional arguments. The engine never enumerates the base object's
//! methods in advance; absence is discovered lazily, on the first unmatched
//! call, via [`BaseCallResult::Unhandled`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::value::Value;

// ============================================================================
// BaseCallResult
// ============================================================================

/// Result of invoking a named method on a base object.
pub enum BaseCallResult {
    /// Call handled successfully, returned a value
    Value(Value),
    /// The base object has no method with the requested name
    Unhandled,
    /// The method exists but failed
    Error(String),
}

impl BaseCallResult {
    /// Create a successful result with null value
    #[inline]
    pub fn null() -> Self {
        Self::Value(Value::null())
    }

    /// Create a successful result with an integer value
    #[inline]
    pub fn int(val: i64) -> Self {
        Self::Value(Value::int(val))
    }

    /// Create a successful result with a float value
    #[inline]
    pub fn float(val: f64) -> Self {
        Self::Value(Value::float(val))
    }

    /// Create a successful result with a bool value
    #[inline]
    pub fn bool(val: bool) -> Self {
        Self::Value(Value::bool(val))
    }

    /// Create a successful result with a string value
    #[inline]
    pub fn str(val: impl Into<String>) -> Self {
        Self::Value(Value::str(val))
    }
}

// ============================================================================
// Provider traits
// ============================================================================

/// A host-registered base type: the root every extension chain bottoms out on.
///
/// Implementations are shared (`Arc<dyn BaseClass>`) between every type
/// definition extending them, so they must be `Send + Sync`. Construction is
/// infallible; a constructed [`BaseObject`] is owned exclusively by one
/// instance.
pub trait BaseClass: Send + Sync {
    /// Fully qualified type name the host registers this class under
    fn name(&self) -> &str;

    /// Construct a fresh base object for one instance
    fn construct(&self) -> Box<dyn BaseObject>;
}

/// A constructed base object: named-method invocation with positional args.
///
/// `invoke` takes `&mut self` — base objects may carry per-instance state
/// (the engine gives each instance its own object, so there is no sharing to
/// guard against).
pub trait BaseObject {
    /// Invoke the native method `name`, returning [`BaseCallResult::Unhandled`]
    /// if no such method exists.
    fn invoke(&mut self, name: &str, args: &[Value]) -> BaseCallResult;
}

/// A base object with no methods at all — every call is `Unhandled`.
///
/// Useful as the analogue of extending a bare `Object` root.
pub struct NoopBaseObject;

impl BaseObject for NoopBaseObject {
    fn invoke(&mut self, _name: &str, _args: &[Value]) -> BaseCallResult {
        BaseCallResult::Unhandled
    }
}

// ============================================================================
// Base class registry (name-based lookup)
// ============================================================================

/// Registry of base classes indexed by their qualified names.
///
/// Hosts populate this once at startup; the runtime resolves the parent of a
/// root-level extension against it (the script-facing equivalent of looking
/// up a native type by name).
pub struct BaseClassRegistry {
    classes: FxHashMap<String, Arc<dyn BaseClass>>,
}

impl BaseClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: FxHashMap::default(),
        }
    }

    /// Register a base class under its own name
    pub fn register(&mut self, class: Arc<dyn BaseClass>) {
        self.classes.insert(class.name().to_string(), class);
    }

    /// Get a base class by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn BaseClass>> {
        self.classes.get(name).cloned()
    }

    /// Check if a base class is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Get the number of registered base classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for BaseClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}
