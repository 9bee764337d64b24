//! Equality and ordering across value types.
//!
//! Numbers compare by numeric value regardless of representation, so
//! `Int(5) == Float(5.0)` and `Bool(true) == Int(1)`. Byte strings only
//! equal byte strings. Ordering is defined between real numbers and between
//! byte strings.

use std::cmp::Ordering;

use crate::error::ValueError;
use crate::value::{Number, Value};

/// Exact ordering of an integer against a float.
#[allow(clippy::cast_possible_truncation)]
fn int_cmp_float(x: i64, y: f64) -> Option<Ordering> {
    // 2^63 is exactly representable; anything at or past it is out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if y.is_nan() {
        return None;
    }
    if y >= LIMIT {
        return Some(Ordering::Less);
    }
    if y < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = y.trunc() as i64;
    let fract = y.fract();
    Some(x.cmp(&whole).then(if fract > 0.0 {
        Ordering::Less
    } else if fract < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }))
}

fn int_eq_float(x: i64, y: f64) -> bool {
    int_cmp_float(x, y) == Some(Ordering::Equal)
}

fn numbers_eq(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x == y,
        (Number::Int(x), Number::Float(y)) | (Number::Float(y), Number::Int(x)) => {
            int_eq_float(x, y)
        }
        (Number::Float(x), Number::Float(y)) => x == y,
        (Number::Complex(z), Number::Complex(w)) => z == w,
        (Number::Complex(z), Number::Int(x)) | (Number::Int(x), Number::Complex(z)) => {
            z.im == 0.0 && int_eq_float(x, z.re)
        }
        (Number::Complex(z), Number::Float(x)) | (Number::Float(x), Number::Complex(z)) => {
            z.im == 0.0 && z.re == x
        }
    }
}

fn numbers_cmp(a: Number, b: Number) -> Option<Ordering> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Some(x.cmp(&y)),
        (Number::Int(x), Number::Float(y)) => int_cmp_float(x, y),
        (Number::Float(x), Number::Int(y)) => int_cmp_float(y, x).map(Ordering::reverse),
        (Number::Float(x), Number::Float(y)) => x.partial_cmp(&y),
        // complex operands are rejected before this point
        _ => None,
    }
}

impl Value {
    /// Compares two values.
    ///
    /// Returns `Ok(None)` when the operands are orderable in principle but
    /// unordered in fact (a NaN is involved).
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Unorderable`] for complex numbers and for a byte
    /// string compared with a number.
    pub fn try_cmp(&self, other: &Value) -> Result<Option<Ordering>, ValueError> {
        let unorderable = || ValueError::Unorderable {
            lhs: self.value_type(),
            rhs: other.value_type(),
        };
        match (self, other) {
            (Value::Bytes(a), Value::Bytes(b)) => Ok(Some(a.cmp(b))),
            (Value::Complex(_), _) | (_, Value::Complex(_)) => Err(unorderable()),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => Ok(numbers_cmp(a, b)),
                _ => Err(unorderable()),
            },
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => numbers_eq(a, b),
                _ => false,
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok().flatten()
    }
}

macro_rules! impl_raw_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<$t> for Value {
                fn eq(&self, other: &$t) -> bool {
                    *self == Value::from(*other)
                }
            }

            impl PartialEq<Value> for $t {
                fn eq(&self, other: &Value) -> bool {
                    Value::from(*self) == *other
                }
            }
        )*
    };
}

impl_raw_eq!(i64, i32, f64, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_cross_type_equality() {
        assert_eq!(Value::Int(5), Value::Float(5.0));
        assert_eq!(Value::Bool(true), Value::Int(1));
        assert_eq!(Value::Complex(Complex64::new(5.0, 0.0)), Value::Int(5));
        assert_ne!(Value::Complex(Complex64::new(5.0, 1.0)), Value::Int(5));
        assert_ne!(Value::Int(5), Value::Float(5.5));
        assert_ne!(Value::Bytes(b"5".to_vec()), Value::Int(5));
        assert!(Value::Int(5) == 5.0);
        assert!(4 != Value::Int(5));
    }

    #[test]
    fn test_large_int_float_equality() {
        assert_ne!(Value::Int(i64::MAX), Value::Float(9.3e18));
        assert_ne!(Value::Int(1 << 53 | 1), Value::Float((1_i64 << 53) as f64));
    }

    #[test]
    fn test_large_int_float_ordering() {
        let big = Value::Int((1 << 53) + 1);
        let float = Value::Float((1_i64 << 53) as f64);
        assert_eq!(big.try_cmp(&float).unwrap(), Some(Ordering::Greater));
        assert_eq!(float.try_cmp(&big).unwrap(), Some(Ordering::Less));
        assert!(big > float);
        assert_ne!(big, float);

        assert!(Value::Int(i64::MAX) < Value::Float(9.3e18));
        assert!(Value::Int(i64::MIN) > Value::Float(f64::NEG_INFINITY));
        assert!(Value::Int(-3) < Value::Float(-2.5));
        assert!(Value::Int(-2) > Value::Float(-2.5));
        assert_eq!(
            Value::Int(-3).try_cmp(&Value::Float(-3.0)).unwrap(),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_nan() {
        let nan = Value::Float(f64::NAN);
        assert_ne!(nan, nan.clone());
        assert_eq!(nan.try_cmp(&Value::Int(1)).unwrap(), None);
    }

    #[test]
    fn test_ordering() {
        assert!(Value::Int(1) < Value::Float(1.5));
        assert!(Value::Bool(true) > Value::Int(0));
        assert!(Value::Bytes(b"ab".to_vec()) < Value::Bytes(b"b".to_vec()));
        assert_eq!(
            Value::Int(3).try_cmp(&Value::Int(3)).unwrap(),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_unorderable() {
        let z = Value::Complex(Complex64::new(1.0, 0.0));
        assert!(matches!(
            z.try_cmp(&Value::Int(1)),
            Err(ValueError::Unorderable { .. })
        ));
        assert!(Value::Bytes(Vec::new()).try_cmp(&Value::Int(1)).is_err());
        assert_eq!(z.partial_cmp(&Value::Int(1)), None);
    }
}
