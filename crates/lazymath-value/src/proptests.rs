//! Property-based tests for value arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Value;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn small_float() -> impl Strategy<Value = f64> {
        -1000.0f64..1000.0f64
    }

    fn bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(any::<u8>(), 0..16)
    }

    proptest! {
        #[test]
        fn int_arithmetic_matches_native(a in small_int(), b in small_int()) {
            let (x, y) = (Value::Int(a), Value::Int(b));
            prop_assert_eq!(x.try_add(&y).unwrap(), Value::Int(a + b));
            prop_assert_eq!(x.try_sub(&y).unwrap(), Value::Int(a - b));
            prop_assert_eq!(x.try_mul(&y).unwrap(), Value::Int(a * b));
        }

        #[test]
        fn int_add_commutative(a in small_int(), b in small_int()) {
            let (x, y) = (Value::Int(a), Value::Int(b));
            prop_assert_eq!(x.try_add(&y).unwrap(), y.try_add(&x).unwrap());
        }

        #[test]
        fn sub_is_add_of_negation(a in small_int(), b in small_float()) {
            let (x, y) = (Value::Int(a), Value::Float(b));
            prop_assert_eq!(
                x.try_sub(&y).unwrap(),
                x.try_add(&y.try_neg().unwrap()).unwrap()
            );
        }

        #[test]
        fn int_equals_its_float(a in small_int()) {
            #[allow(clippy::cast_precision_loss)]
            let as_float = a as f64;
            prop_assert_eq!(Value::Int(a), Value::Float(as_float));
            prop_assert_eq!(Value::Int(a).to_float().unwrap(), as_float);
            prop_assert_eq!(Value::Float(as_float).to_int().unwrap(), a);
        }

        #[test]
        fn bytes_concat_preserves_order(a in bytes(), b in bytes()) {
            let joined = Value::Bytes(a.clone()).try_add(&Value::Bytes(b.clone())).unwrap();
            let mut expected = a;
            expected.extend_from_slice(&b);
            prop_assert_eq!(joined, Value::Bytes(expected));
        }

        #[test]
        fn double_negation_is_identity(a in small_int()) {
            let x = Value::Int(a);
            prop_assert_eq!(x.try_neg().unwrap().try_neg().unwrap(), x);
        }
    }
}
