//! Property-based tests for composition and memoization.

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use crate::{Arguments, Lazy, LazyFn, Value};

    fn small_ints() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(-1000i64..1000i64, 1..32)
    }

    proptest! {
        #[test]
        fn running_sum_is_flat(values in small_ints()) {
            let mut total = Lazy::constant(values[0]);
            for &v in &values[1..] {
                total = total + v;
            }
            if values.len() == 1 {
                prop_assert!(total.is_atom());
            } else {
                prop_assert_eq!(total.terms().map(<[Lazy]>::len), Some(values.len()));
            }
            prop_assert_eq!(total.evaluate().unwrap(), Value::Int(values.iter().sum()));
        }

        #[test]
        fn sum_association_is_irrelevant(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
            let (x, y, z) = (Lazy::constant(a), Lazy::constant(b), Lazy::constant(c));
            let left = (&x + &y) + &z;
            let right = &x + (&y + &z);
            prop_assert_eq!(left.terms().map(<[Lazy]>::len), Some(3));
            prop_assert_eq!(right.terms().map(<[Lazy]>::len), Some(3));
            prop_assert!(left == right);
        }

        #[test]
        fn running_product_is_flat(values in proptest::collection::vec(-9i64..9, 2..12)) {
            let mut product = Lazy::constant(values[0]);
            for &v in &values[1..] {
                product = product * v;
            }
            prop_assert_eq!(product.terms().map(<[Lazy]>::len), Some(values.len()));
            prop_assert_eq!(product.evaluate().unwrap(), Value::Int(values.iter().product()));
        }

        #[test]
        fn difference_matches_native(a in -1000i64..1000, b in -1000i64..1000) {
            prop_assert!(Lazy::constant(a) - b == a - b);
            prop_assert!(a - Lazy::constant(b) == a - b);
        }

        #[test]
        fn shared_node_is_computed_once(parents in 1usize..8) {
            let calls = Rc::new(Cell::new(0));
            let counter = Rc::clone(&calls);
            let shared = LazyFn::new("tick", move |_: &Arguments<'_>| {
                counter.set(counter.get() + 1);
                Ok(Value::Int(1))
            })
            .call(Vec::<Lazy>::new());

            let total = (0..parents).fold(Lazy::constant(0), |acc, _| acc + &shared);
            prop_assert_eq!(total.evaluate().unwrap(), Value::Int(i64::try_from(parents).unwrap()));
            prop_assert_eq!(calls.get(), 1);
        }
    }
}
