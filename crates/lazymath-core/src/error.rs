//! Error type for node evaluation.

use std::error::Error as StdError;

use lazymath_value::ValueError;
use thiserror::Error;

/// Errors produced while evaluating a node.
///
/// Errors from value arithmetic and from wrapped functions pass through
/// unchanged: their messages are displayed as-is and the original error can
/// be recovered with [`LazyError::downcast_ref`].
#[derive(Debug, Error)]
pub enum LazyError {
    /// Arithmetic, comparison or conversion of an evaluated value failed.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// A wrapped function asked for a positional argument it was not given.
    #[error("{function}() missing positional argument {index}")]
    MissingArgument {
        /// Name of the wrapped function.
        function: String,
        /// Index of the missing argument.
        index: usize,
    },

    /// A wrapped function asked for a keyword argument it was not given.
    #[error("{function}() missing keyword argument '{name}'")]
    MissingKeyword {
        /// Name of the wrapped function.
        function: String,
        /// Name of the missing keyword.
        name: String,
    },

    /// The operation is not supported on nodes.
    #[error("unsupported operation on lazy node: {operation}")]
    Unsupported {
        /// Name of the operation.
        operation: &'static str,
    },

    /// An error raised by a wrapped function.
    #[error(transparent)]
    Raised(Box<dyn StdError + Send + Sync + 'static>),
}

impl LazyError {
    /// Wraps an error raised inside a wrapped function.
    pub fn raise<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Raised(Box::new(err))
    }

    /// Returns the underlying error if it is of type `E`.
    ///
    /// Works for errors passed to [`LazyError::raise`] and for
    /// [`ValueError`]s.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let inner: &(dyn StdError + 'static) = match self {
            Self::Raised(err) => &**err,
            Self::Value(err) => err,
            other => other,
        };
        inner.downcast_ref()
    }

    /// Returns true if this is the [`LazyError::Unsupported`] failure.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazymath_value::ValueType;

    #[derive(Debug, Error, PartialEq)]
    #[error("sqrt of negative number {0}")]
    struct NegativeInput(i64);

    #[test]
    fn test_raised_is_transparent() {
        let err = LazyError::raise(NegativeInput(-4));
        assert_eq!(err.to_string(), "sqrt of negative number -4");
        assert_eq!(err.downcast_ref::<NegativeInput>(), Some(&NegativeInput(-4)));
        assert!(err.downcast_ref::<ValueError>().is_none());
    }

    #[test]
    fn test_value_error_downcast() {
        let value_err = ValueError::UnsupportedOperand {
            op: "-",
            operand: ValueType::Bytes,
        };
        let err = LazyError::from(value_err.clone());
        assert_eq!(err.to_string(), value_err.to_string());
        assert_eq!(err.downcast_ref::<ValueError>(), Some(&value_err));
    }

    #[test]
    fn test_unsupported() {
        let err = LazyError::Unsupported { operation: "hash" };
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported operation on lazy node: hash");
    }
}
