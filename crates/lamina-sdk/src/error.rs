//! Error types for the SDK surface

/// Errors raised while reading dynamic values or method arguments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// Type mismatch during extraction
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: &'static str,
        /// Actual type name
        got: &'static str,
    },

    /// A positional argument was not supplied
    #[error("missing argument at index {index}")]
    MissingArgument {
        /// Zero-based argument position
        index: usize,
    },
}
