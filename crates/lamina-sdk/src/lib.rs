//! Lamina SDK - host capability interface for the extension runtime
//!
//! This crate provides the minimal types and traits a host needs to expose a
//! base capability provider to the Lamina engine, without depending on the
//! engine itself:
//!
//! - [`Value`] — the dynamic value passed through method dispatch
//! - [`BaseClass`] / [`BaseObject`] — the opaque base provider surface
//!   (construction plus named-method invocation)
//! - [`BaseClassRegistry`] — name-based lookup of registered base types
//! - [`Args`] — typed positional argument extraction for method bodies
//!
//! # Example
//!
//! ```ignore
//! use lamina_sdk::{BaseClass, BaseObject, BaseCallResult, Value};
//!
//! struct Counter;
//!
//! impl BaseClass for Counter {
//!     fn name(&self) -> &str { "host.Counter" }
//!     fn construct(&self) -> Box<dyn BaseObject> { Box::new(CounterObject(0)) }
//! }
//!
//! struct CounterObject(i64);
//!
//! impl BaseObject for CounterObject {
//!     fn invoke(&mut self, name: &str, args: &[Value]) -> BaseCallResult {
//!         match name {
//!             "get" => BaseCallResult::int(self.0),
//!             "set" => { self.0 = args[0].as_int().unwrap_or(0); BaseCallResult::null() }
//!             _ => BaseCallResult::Unhandled,
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod args;
mod error;
mod provider;
mod value;

pub use args::Args;
pub use error::ValueError;
pub use provider::{BaseCallResult, BaseClass, BaseClassRegistry, BaseObject, NoopBaseObject};
pub use value::Value;
