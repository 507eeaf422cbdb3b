//! Error types for type extension and method dispatch
//!
//! Both kinds are raised synchronously at the call site; there is no retry
//! inside the runtime. Lookup is read-only until the one matching body runs,
//! so failures leave no partial state behind.

use lamina_sdk::ValueError;

/// Errors raised while building or resolving type definitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtendError {
    /// The named parent is neither a registered base class nor a named type
    /// definition.
    #[error("invalid parent `{name}`: not a registered base class or named type definition")]
    InvalidParent {
        /// The parent name that failed to resolve
        name: String,
    },

    /// Instantiation by name referenced a type definition that was never
    /// registered.
    #[error("unknown type definition `{name}`")]
    UnknownType {
        /// The type name that failed to resolve
        name: String,
    },
}

/// Errors raised by method dispatch on an instance.
///
/// An unresolved method is deliberately distinct from "method found but
/// failed": [`DispatchError::UnresolvedMethod`] means no layer and no base
/// method matched, while [`DispatchError::Provider`] and
/// [`DispatchError::Fault`] carry failures from bodies that did run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    /// The method name is absent from every layer in the search range and
    /// from the base provider.
    #[error("no method `{method}` on `{type_name}` or its base provider")]
    UnresolvedMethod {
        /// Display name of the instance's leaf type
        type_name: String,
        /// The method name that failed to resolve
        method: String,
    },

    /// The base provider found the method but it failed.
    #[error("base provider error: {0}")]
    Provider(String),

    /// A layer method rejected its arguments.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A layer method body failed.
    #[error("{0}")]
    Fault(String),
}
