//! Fallible arithmetic on values.
//!
//! Numbers are promoted along the tower `Int < Float < Complex` before the
//! operator is applied. Byte strings support concatenation with `+` and
//! repetition by an integer with `*`.

use num_complex::Complex64;

use crate::error::ValueError;
use crate::value::{Number, Value};

/// The binary operators a value supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
}

impl BinaryOp {
    /// Returns the operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }

    fn apply_int(self, x: i64, y: i64) -> Option<i64> {
        match self {
            BinaryOp::Add => x.checked_add(y),
            BinaryOp::Sub => x.checked_sub(y),
            BinaryOp::Mul => x.checked_mul(y),
        }
    }

    fn apply_float(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
        }
    }

    fn apply_complex(self, x: Complex64, y: Complex64) -> Complex64 {
        match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
        }
    }
}

impl Value {
    /// Applies a binary operator.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::UnsupportedOperands`] when the operator is not
    /// defined for the operand types and [`ValueError::Overflow`] when integer
    /// arithmetic leaves the `i64` range.
    pub fn binary(&self, op: BinaryOp, rhs: &Value) -> Result<Value, ValueError> {
        match (self.as_number(), rhs.as_number()) {
            (Some(a), Some(b)) => numeric(op, a, b),
            _ => sequence(op, self, rhs),
        }
    }

    /// Computes `self + rhs`.
    ///
    /// # Errors
    ///
    /// See [`Value::binary`].
    pub fn try_add(&self, rhs: &Value) -> Result<Value, ValueError> {
        self.binary(BinaryOp::Add, rhs)
    }

    /// Computes `self - rhs`.
    ///
    /// # Errors
    ///
    /// See [`Value::binary`].
    pub fn try_sub(&self, rhs: &Value) -> Result<Value, ValueError> {
        self.binary(BinaryOp::Sub, rhs)
    }

    /// Computes `self * rhs`.
    ///
    /// # Errors
    ///
    /// See [`Value::binary`].
    pub fn try_mul(&self, rhs: &Value) -> Result<Value, ValueError> {
        self.binary(BinaryOp::Mul, rhs)
    }

    /// Computes `-self`.
    ///
    /// # Errors
    ///
    /// Fails for byte strings and for `-i64::MIN`.
    pub fn try_neg(&self) -> Result<Value, ValueError> {
        match self {
            Value::Int(x) => x
                .checked_neg()
                .map(Value::Int)
                .ok_or(ValueError::Overflow { op: "-" }),
            Value::Bool(b) => Ok(Value::Int(-i64::from(*b))),
            Value::Float(x) => Ok(Value::Float(-x)),
            Value::Complex(z) => Ok(Value::Complex(-z)),
            Value::Bytes(_) => Err(ValueError::UnsupportedOperand {
                op: "-",
                operand: self.value_type(),
            }),
        }
    }
}

fn numeric(op: BinaryOp, a: Number, b: Number) -> Result<Value, ValueError> {
    match Number::promote(a, b) {
        (Number::Int(x), Number::Int(y)) => op
            .apply_int(x, y)
            .map(Value::Int)
            .ok_or(ValueError::Overflow { op: op.symbol() }),
        (Number::Float(x), Number::Float(y)) => Ok(Value::Float(op.apply_float(x, y))),
        (Number::Complex(x), Number::Complex(y)) => Ok(Value::Complex(op.apply_complex(x, y))),
        // promote always yields a matching pair
        (x, y) => Ok(Value::Complex(
            op.apply_complex(x.to_complex(), y.to_complex()),
        )),
    }
}

fn sequence(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, ValueError> {
    match (op, lhs, rhs) {
        (BinaryOp::Add, Value::Bytes(a), Value::Bytes(b)) => {
            let mut out = Vec::with_capacity(a.len() + b.len());
            out.extend_from_slice(a);
            out.extend_from_slice(b);
            Ok(Value::Bytes(out))
        }
        (BinaryOp::Mul, Value::Bytes(bytes), count) | (BinaryOp::Mul, count, Value::Bytes(bytes))
            if count.as_index().is_some() =>
        {
            let times = count
                .as_index()
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0);
            repeat_bytes(bytes, times).map(Value::Bytes)
        }
        _ => Err(ValueError::UnsupportedOperands {
            op: op.symbol(),
            lhs: lhs.value_type(),
            rhs: rhs.value_type(),
        }),
    }
}

/// Reserves room for `len` bytes, failing instead of aborting.
pub(crate) fn reserve_bytes(len: usize, op: &'static str) -> Result<Vec<u8>, ValueError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| ValueError::TooLarge { op })?;
    Ok(out)
}

fn repeat_bytes(bytes: &[u8], times: usize) -> Result<Vec<u8>, ValueError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let len = bytes
        .len()
        .checked_mul(times)
        .ok_or(ValueError::TooLarge { op: "*" })?;
    let mut out = reserve_bytes(len, "*")?;
    for _ in 0..times {
        out.extend_from_slice(bytes);
    }
    Ok(out)
}
