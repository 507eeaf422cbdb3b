//! Args — typed positional argument extraction
//!
//! Method bodies receive `&[Value]`; this wrapper turns positional access
//! into precise [`ValueError`]s instead of ad hoc `unwrap`s.

use crate::error::ValueError;
use crate::value::Value;

/// View over a method call's positional arguments.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    /// Wrap a slice of call arguments
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    /// Number of arguments supplied
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the raw value at `index`
    pub fn value(&self, index: usize) -> Result<&'a Value, ValueError> {
        self.values
            .get(index)
            .ok_or(ValueError::MissingArgument { index })
    }

    /// Get the argument at `index` as an integer
    pub fn int(&self, index: usize) -> Result<i64, ValueError> {
        let v = self.value(index)?;
        v.as_int().ok_or(ValueError::TypeMismatch {
            expected: "int",
            got: v.type_name(),
        })
    }

    /// Get the argument at `index` as a float (integers widen)
    pub fn float(&self, index: usize) -> Result<f64, ValueError> {
        let v = self.value(index)?;
        v.as_float().ok_or(ValueError::TypeMismatch {
            expected: "float",
            got: v.type_name(),
        })
    }

    /// Get the argument at `index` as a boolean
    pub fn bool(&self, index: usize) -> Result<bool, ValueError> {
        let v = self.value(index)?;
        v.as_bool().ok_or(ValueError::TypeMismatch {
            expected: "bool",
            got: v.type_name(),
        })
    }

    /// Get the argument at `index` as a string slice
    pub fn str(&self, index: usize) -> Result<&'a str, ValueError> {
        let v = self.value(index)?;
        v.as_str().ok_or(ValueError::TypeMismatch {
            expected: "string",
            got: v.type_name(),
        })
    }
}
