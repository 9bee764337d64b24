//! Error types for value arithmetic, comparison and conversion.

use thiserror::Error;

use crate::value::ValueType;

/// Errors raised by operations on [`Value`](crate::Value)s.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A binary operator is not defined for the operand types.
    #[error("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperands {
        /// The operator symbol.
        op: &'static str,
        /// Type of the left operand.
        lhs: ValueType,
        /// Type of the right operand.
        rhs: ValueType,
    },

    /// A unary operator is not defined for the operand type.
    #[error("bad operand type for unary {op}: '{operand}'")]
    UnsupportedOperand {
        /// The operator symbol.
        op: &'static str,
        /// Type of the operand.
        operand: ValueType,
    },

    /// Integer arithmetic left the range of `i64`.
    #[error("integer overflow in {op}")]
    Overflow {
        /// The operator symbol.
        op: &'static str,
    },

    /// The result would not fit in memory.
    #[error("result of {op} is too large")]
    TooLarge {
        /// The operator or conversion producing the result.
        op: &'static str,
    },

    /// A conversion is not defined for the value.
    #[error("cannot convert '{from}' to {to}: {reason}")]
    InvalidConversion {
        /// Type of the converted value.
        from: ValueType,
        /// Name of the target type.
        to: &'static str,
        /// Why the conversion failed.
        reason: &'static str,
    },

    /// The operands have no ordering.
    #[error("ordering not supported between '{lhs}' and '{rhs}'")]
    Unorderable {
        /// Type of the left operand.
        lhs: ValueType,
        /// Type of the right operand.
        rhs: ValueType,
    },
}

impl ValueError {
    pub(crate) fn conversion(from: ValueType, to: &'static str, reason: &'static str) -> Self {
        Self::InvalidConversion { from, to, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValueError::UnsupportedOperands {
            op: "+",
            lhs: ValueType::Bytes,
            rhs: ValueType::Int,
        };
        assert_eq!(
            err.to_string(),
            "unsupported operand type(s) for +: 'bytes' and 'int'"
        );

        let err = ValueError::UnsupportedOperand {
            op: "-",
            operand: ValueType::Bytes,
        };
        assert_eq!(err.to_string(), "bad operand type for unary -: 'bytes'");

        let err = ValueError::TooLarge { op: "*" };
        assert_eq!(err.to_string(), "result of * is too large");
    }
}
