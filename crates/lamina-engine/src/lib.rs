//! Lamina extension runtime
//!
//! Script-defined behavior layers composed on top of an opaque host base
//! object, producing instantiable types that behave like subclasses with
//! correct virtual dispatch and explicit super delegation across arbitrarily
//! many extension levels:
//!
//! - [`TypeDef`] — one immutable behavior layer plus its parent link
//! - [`MethodTable`] — the builder collecting a layer's methods and fields
//! - [`Instance`] — a constructed object: one context per chain layer plus an
//!   exclusively owned base object
//! - [`Scope`] / [`SuperRef`] — the per-call bindings a method body uses for
//!   `this` dispatch, `super` delegation, and layer-local state
//! - [`Runtime`] — the script-bootstrap facade resolving parents by name
//!
//! Method lookup is an explicit linear scan over an ordered stack of method
//! tables, leaf to root, falling through to the base provider. There is no
//! property interception anywhere; the resolution order is a plain, testable
//! algorithm.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod dispatch;
pub mod error;
pub mod instance;
pub mod runtime;
pub mod table;
pub mod typedef;

pub use dispatch::{Scope, SuperRef};
pub use error::{DispatchError, ExtendError};
pub use instance::Instance;
pub use runtime::Runtime;
pub use table::{MethodFn, MethodTable};
pub use typedef::{Parent, TypeDef};

// Re-export SDK types (canonical definitions live in lamina-sdk)
pub use lamina_sdk::{
    Args, BaseCallResult, BaseClass, BaseClassRegistry, BaseObject, NoopBaseObject, Value,
    ValueError,
};
