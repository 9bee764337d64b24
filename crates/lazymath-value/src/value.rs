//! The dynamic value type.
//!
//! Every node in an expression graph evaluates to a [`Value`]. The variants
//! cover the numeric tower plus byte strings, which give the graph a
//! non-commutative payload for `+`.

use std::fmt;

use num_complex::Complex64;

/// A runtime value produced by evaluating a node.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Complex number with `f64` parts.
    Complex(Complex64),
    /// Boolean, numerically `0` or `1`.
    Bool(bool),
    /// Byte string.
    Bytes(Vec<u8>),
}

/// Type tag for values, used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Integer.
    Int,
    /// Float.
    Float,
    /// Complex number.
    Complex,
    /// Boolean.
    Bool,
    /// Byte string.
    Bytes,
}

/// A value viewed as a member of the numeric tower.
///
/// Booleans are folded into `Int` here.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
    Complex(Complex64),
}

impl Number {
    /// Lifts both numbers to the wider of their two kinds.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn promote(a: Self, b: Self) -> (Self, Self) {
        match (a, b) {
            (Number::Int(x), Number::Float(_)) => (Number::Float(x as f64), b),
            (Number::Float(_), Number::Int(y)) => (a, Number::Float(y as f64)),
            (Number::Complex(_), Number::Complex(_)) => (a, b),
            (Number::Complex(_), other) => (a, Number::Complex(other.to_complex())),
            (other, Number::Complex(_)) => (Number::Complex(other.to_complex()), b),
            _ => (a, b),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn to_complex(self) -> Complex64 {
        match self {
            Number::Int(x) => Complex64::new(x as f64, 0.0),
            Number::Float(x) => Complex64::new(x, 0.0),
            Number::Complex(z) => z,
        }
    }
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Complex(_) => ValueType::Complex,
            Value::Bool(_) => ValueType::Bool,
            Value::Bytes(_) => ValueType::Bytes,
        }
    }

    /// Returns true for integers, floats, complex numbers and booleans.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns true for the integer or float zero (and `false`).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self.as_number() {
            Some(Number::Int(x)) => x == 0,
            Some(Number::Float(x)) => x == 0.0,
            Some(Number::Complex(z)) => z.re == 0.0 && z.im == 0.0,
            None => false,
        }
    }

    pub(crate) fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(x) => Some(Number::Int(*x)),
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Float(x) => Some(Number::Float(*x)),
            Value::Complex(z) => Some(Number::Complex(*z)),
            Value::Bytes(_) => None,
        }
    }

    /// The integer a value stands for when used as a repeat count.
    pub(crate) fn as_index(&self) -> Option<i64> {
        match self {
            Value::Int(x) => Some(*x),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Int => write!(f, "int"),
            ValueType::Float => write!(f, "float"),
            ValueType::Complex => write!(f, "complex"),
            ValueType::Bool => write!(f, "bool"),
            ValueType::Bytes => write!(f, "bytes"),
        }
    }
}

/// Writes a float so integral values keep a trailing `.0`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return write!(f, "nan");
    }
    if x.is_infinite() {
        return write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" });
    }
    let text = x.to_string();
    if text.contains('.') {
        write!(f, "{text}")
    } else {
        write!(f, "{text}.0")
    }
}

/// Writes one part of a complex number, dropping a redundant `.0`.
fn write_part(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
    } else {
        write!(f, "{x}")
    }
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "b'")?;
    for &b in bytes {
        match b {
            b'\\' => write!(f, "\\\\")?,
            b'\'' => write!(f, "\\'")?,
            b'\t' => write!(f, "\\t")?,
            b'\n' => write!(f, "\\n")?,
            b'\r' => write!(f, "\\r")?,
            0x20..=0x7e => write!(f, "{}", char::from(b))?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    write!(f, "'")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(x) => write!(f, "{x}"),
            Value::Float(x) => write_float(f, *x),
            Value::Complex(z) => {
                write!(f, "(")?;
                write_part(f, z.re)?;
                if z.im >= 0.0 || z.im.is_nan() {
                    write!(f, "+")?;
                }
                write_part(f, z.im)?;
                write!(f, "j)")
            }
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Bytes(bytes) => write_bytes(f, bytes),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Complex64> for Value {
    fn from(v: Complex64) -> Self {
        Value::Complex(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}
