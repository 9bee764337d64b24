//! Conversions from values to native types.
//!
//! Each conversion either succeeds with the native value or reports an
//! [`ValueError::InvalidConversion`] naming the source type and the target.

use num_complex::Complex64;
use num_traits::ToPrimitive;

use crate::arith::reserve_bytes;
use crate::error::ValueError;
use crate::value::{Number, Value};

impl Value {
    /// Converts to an integer, truncating floats toward zero.
    ///
    /// # Errors
    ///
    /// Fails for complex numbers, byte strings, and floats that are NaN,
    /// infinite or out of the `i64` range.
    pub fn to_int(&self) -> Result<i64, ValueError> {
        match self {
            Value::Int(x) => Ok(*x),
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Float(x) if x.is_nan() => Err(ValueError::conversion(
                self.value_type(),
                "int",
                "cannot convert NaN",
            )),
            Value::Float(x) if x.is_infinite() => Err(ValueError::conversion(
                self.value_type(),
                "int",
                "cannot convert infinity",
            )),
            Value::Float(x) => x.trunc().to_i64().ok_or_else(|| {
                ValueError::conversion(self.value_type(), "int", "out of range")
            }),
            Value::Complex(_) | Value::Bytes(_) => Err(ValueError::conversion(
                self.value_type(),
                "int",
                "not a real number",
            )),
        }
    }

    /// Converts to a float.
    ///
    /// # Errors
    ///
    /// Fails for complex numbers and byte strings.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_float(&self) -> Result<f64, ValueError> {
        match self {
            Value::Int(x) => Ok(*x as f64),
            Value::Bool(b) => Ok(f64::from(u8::from(*b))),
            Value::Float(x) => Ok(*x),
            Value::Complex(_) | Value::Bytes(_) => Err(ValueError::conversion(
                self.value_type(),
                "float",
                "not a real number",
            )),
        }
    }

    /// Converts to a complex number.
    ///
    /// # Errors
    ///
    /// Fails for byte strings.
    pub fn to_complex(&self) -> Result<Complex64, ValueError> {
        self.as_number().map(Number::to_complex).ok_or_else(|| {
            ValueError::conversion(self.value_type(), "complex", "not a number")
        })
    }

    /// Returns the truthiness of the value.
    ///
    /// Numbers are true when non-zero, byte strings when non-empty.
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Bytes(bytes) => !bytes.is_empty(),
            other => !other.is_zero(),
        }
    }

    /// Converts to a byte sequence.
    ///
    /// An integer `n` gives `n` zero bytes.
    ///
    /// # Errors
    ///
    /// Fails for negative integers, floats and complex numbers, and with
    /// [`ValueError::TooLarge`] when the buffer cannot be allocated.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ValueError> {
        match self {
            Value::Bytes(bytes) => Ok(bytes.clone()),
            Value::Int(_) | Value::Bool(_) => {
                let n = self.as_index().unwrap_or_default();
                let len = usize::try_from(n).map_err(|_| {
                    ValueError::conversion(self.value_type(), "bytes", "negative count")
                })?;
                let mut out = reserve_bytes(len, "bytes()")?;
                out.resize(len, 0);
                Ok(out)
            }
            Value::Float(_) | Value::Complex(_) => Err(ValueError::conversion(
                self.value_type(),
                "bytes",
                "not an integer or byte string",
            )),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_int()
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_float()
    }
}

impl TryFrom<&Value> for Complex64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_complex()
    }
}

impl From<&Value> for bool {
    fn from(value: &Value) -> Self {
        value.to_bool()
    }
}

impl TryFrom<&Value> for Vec<u8> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_int() {
        assert_eq!(Value::Float(-2.9).to_int().unwrap(), -2);
        assert_eq!(Value::Bool(true).to_int().unwrap(), 1);
        assert!(Value::Float(f64::NAN).to_int().is_err());
        assert!(Value::Float(1e300).to_int().is_err());
        assert!(Value::Complex(Complex64::new(1.0, 0.0)).to_int().is_err());
    }

    #[test]
    fn test_to_float() {
        assert_eq!(Value::Int(3).to_float().unwrap(), 3.0);
        assert_eq!(Value::Bool(false).to_float().unwrap(), 0.0);
        assert!(Value::Bytes(b"1".to_vec()).to_float().is_err());
    }

    #[test]
    fn test_to_complex() {
        assert_eq!(Value::Int(2).to_complex().unwrap(), Complex64::new(2.0, 0.0));
        assert!(Value::Bytes(Vec::new()).to_complex().is_err());
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Int(-1).to_bool());
        assert!(!Value::Float(0.0).to_bool());
        assert!(!Value::Bytes(Vec::new()).to_bool());
        assert!(Value::Bytes(vec![0]).to_bool());
        assert!(Value::Complex(Complex64::new(0.0, 1.0)).to_bool());
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(Value::Int(3).to_bytes().unwrap(), vec![0, 0, 0]);
        assert_eq!(Value::Bytes(b"ab".to_vec()).to_bytes().unwrap(), b"ab");
        let err = Value::Int(-1).to_bytes().unwrap_err();
        assert_eq!(
            err,
            ValueError::InvalidConversion {
                from: crate::ValueType::Int,
                to: "bytes",
                reason: "negative count",
            }
        );
        assert!(Value::Float(1.0).to_bytes().is_err());
    }

    #[test]
    fn test_to_bytes_too_large() {
        let err = Value::Int(i64::MAX).to_bytes().unwrap_err();
        assert_eq!(err, ValueError::TooLarge { op: "bytes()" });
    }
}
