//! Operator composition of nodes.
//!
//! `+`, `-`, `*` and unary `-` never evaluate anything: they build new nodes
//! and leave their operands untouched. Composing a sum with `+` (or a product
//! with `*`) splices its terms into the new node instead of nesting it, so a
//! running total built in a loop stays one level deep.
//!
//! - `a + b` is `Sum(a, b)`, with either side flattened if it is a `Sum`
//! - `a * b` is `Product(a, b)`, likewise for `Product`
//! - `a - b` is `a + Negation(b)`
//! - `-a` is `Negation(a)`
//!
//! A raw left operand is wrapped in a constant first, so `1 + a` is
//! `Sum(Constant(1), a)`.

use std::ops::{Add, Mul, Neg, Sub};

use lazymath_value::{Complex64, Value};

use crate::node::{to_node, IntoLazy, Lazy, NodeKind, Terms};

/// The kind of chain an operator builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chain {
    Sum,
    Product,
}

impl Chain {
    /// Returns the terms of `node` if it is a chain of this kind.
    fn terms_of(self, node: &Lazy) -> Option<&Terms> {
        match (self, node.kind()) {
            (Chain::Sum, NodeKind::Sum(terms)) | (Chain::Product, NodeKind::Product(terms)) => {
                Some(terms)
            }
            _ => None,
        }
    }

    fn push(self, terms: &mut Terms, node: Lazy) {
        if self.terms_of(&node).is_none() {
            terms.push(node);
            return;
        }
        match node.try_into_terms() {
            Ok(inner) => terms.extend(inner),
            Err(shared) => {
                if let Some(inner) = self.terms_of(&shared) {
                    terms.extend(inner.iter().cloned());
                }
            }
        }
    }

    fn build(self, lhs: Lazy, rhs: Lazy) -> Lazy {
        let mut terms = Terms::new();
        self.push(&mut terms, lhs);
        self.push(&mut terms, rhs);
        match self {
            Chain::Sum => Lazy::from_terms_sum(terms),
            Chain::Product => Lazy::from_terms_product(terms),
        }
    }
}

impl<R: IntoLazy> Add<R> for Lazy {
    type Output = Lazy;

    fn add(self, rhs: R) -> Lazy {
        Chain::Sum.build(self, rhs.into_lazy())
    }
}

impl<R: IntoLazy> Add<R> for &Lazy {
    type Output = Lazy;

    fn add(self, rhs: R) -> Lazy {
        Chain::Sum.build(self.clone(), rhs.into_lazy())
    }
}

impl<R: IntoLazy> Sub<R> for Lazy {
    type Output = Lazy;

    fn sub(self, rhs: R) -> Lazy {
        Chain::Sum.build(self, Lazy::negation(rhs))
    }
}

impl<R: IntoLazy> Sub<R> for &Lazy {
    type Output = Lazy;

    fn sub(self, rhs: R) -> Lazy {
        Chain::Sum.build(self.clone(), Lazy::negation(rhs))
    }
}

impl<R: IntoLazy> Mul<R> for Lazy {
    type Output = Lazy;

    fn mul(self, rhs: R) -> Lazy {
        Chain::Product.build(self, rhs.into_lazy())
    }
}

impl<R: IntoLazy> Mul<R> for &Lazy {
    type Output = Lazy;

    fn mul(self, rhs: R) -> Lazy {
        Chain::Product.build(self.clone(), rhs.into_lazy())
    }
}

impl Neg for Lazy {
    type Output = Lazy;

    fn neg(self) -> Lazy {
        Lazy::negation(self)
    }
}

impl Neg for &Lazy {
    type Output = Lazy;

    fn neg(self) -> Lazy {
        Lazy::negation(self)
    }
}

// Raw values on the left of an operator.
macro_rules! impl_raw_lhs_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl Add<Lazy> for $t {
                type Output = Lazy;

                fn add(self, rhs: Lazy) -> Lazy {
                    to_node(self) + rhs
                }
            }

            impl Add<&Lazy> for $t {
                type Output = Lazy;

                fn add(self, rhs: &Lazy) -> Lazy {
                    to_node(self) + rhs
                }
            }

            impl Sub<Lazy> for $t {
                type Output = Lazy;

                fn sub(self, rhs: Lazy) -> Lazy {
                    to_node(self) - rhs
                }
            }

            impl Sub<&Lazy> for $t {
                type Output = Lazy;

                fn sub(self, rhs: &Lazy) -> Lazy {
                    to_node(self) - rhs
                }
            }

            impl Mul<Lazy> for $t {
                type Output = Lazy;

                fn mul(self, rhs: Lazy) -> Lazy {
                    to_node(self) * rhs
                }
            }

            impl Mul<&Lazy> for $t {
                type Output = Lazy;

                fn mul(self, rhs: &Lazy) -> Lazy {
                    to_node(self) * rhs
                }
            }
        )*
    };
}

impl_raw_lhs_ops!(Value, i64, i32, f64, bool, Complex64);
