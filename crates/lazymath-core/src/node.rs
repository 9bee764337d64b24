//! Lazy expression nodes.
//!
//! A [`Lazy`] is a reference-counted handle to an immutable node. Nodes form
//! a DAG: children may be shared by several parents, and there are no back
//! references. Each node owns a write-once cache cell, so a node is computed
//! at most once no matter how many parents reach it.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use lazymath_value::{Complex64, Value, ValueError};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::LazyError;
use crate::function::{Call, LazyFn};

/// Inline storage for the terms of a sum or product.
pub type Terms = SmallVec<[Lazy; 4]>;

/// The variant of a node.
///
/// Composition inspects this tag to decide whether an operand can be
/// flattened into a new sum or product.
pub enum NodeKind {
    /// A fixed value.
    Constant(Value),

    /// Sum of the terms, left to right.
    ///
    /// An empty sum evaluates to `0`.
    Sum(Terms),

    /// Product of the factors, left to right.
    ///
    /// An empty product evaluates to `1`.
    Product(Terms),

    /// Arithmetic negation of the evaluated child.
    Negation(Lazy),

    /// A deferred call of a wrapped function.
    Call(Call),
}

impl NodeKind {
    /// Returns the variant name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Constant(_) => "Constant",
            NodeKind::Sum(_) => "Sum",
            NodeKind::Product(_) => "Product",
            NodeKind::Negation(_) => "Negation",
            NodeKind::Call(_) => "Call",
        }
    }
}

struct Node {
    kind: NodeKind,
    cache: OnceCell<Value>,
}

/// A handle to a lazily evaluated expression node.
///
/// Cloning a `Lazy` is cheap and yields a handle to the *same* node, sharing
/// its cache.
#[derive(Clone)]
pub struct Lazy(Rc<Node>);

impl Lazy {
    fn from_kind(kind: NodeKind) -> Self {
        Self(Rc::new(Node {
            kind,
            cache: OnceCell::new(),
        }))
    }

    /// Creates a constant node.
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::from_kind(NodeKind::Constant(value.into()))
    }

    /// Creates a sum of the given terms.
    pub fn sum<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoLazy,
    {
        Self::from_kind(NodeKind::Sum(
            terms.into_iter().map(IntoLazy::into_lazy).collect(),
        ))
    }

    /// Creates a product of the given factors.
    pub fn product<I>(factors: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoLazy,
    {
        Self::from_kind(NodeKind::Product(
            factors.into_iter().map(IntoLazy::into_lazy).collect(),
        ))
    }

    /// Creates the negation of `child`.
    pub fn negation(child: impl IntoLazy) -> Self {
        Self::from_kind(NodeKind::Negation(child.into_lazy()))
    }

    pub(crate) fn from_terms_sum(terms: Terms) -> Self {
        Self::from_kind(NodeKind::Sum(terms))
    }

    pub(crate) fn from_terms_product(terms: Terms) -> Self {
        Self::from_kind(NodeKind::Product(terms))
    }

    /// Takes the terms of a sum or product if this is the only handle to it.
    pub(crate) fn try_into_terms(self) -> Result<Terms, Lazy> {
        match Rc::try_unwrap(self.0) {
            Ok(Node {
                kind: NodeKind::Sum(terms) | NodeKind::Product(terms),
                ..
            }) => Ok(terms),
            Ok(node) => Err(Self(Rc::new(node))),
            Err(shared) => Err(Self(shared)),
        }
    }

    pub(crate) fn call(call: Call) -> Self {
        Self::from_kind(NodeKind::Call(call))
    }

    // === Evaluation ===

    /// Evaluates the node, computing it on first use.
    ///
    /// Later calls return the cached value without recomputing. A failed
    /// evaluation caches nothing.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while computing this node or its
    /// children.
    pub fn evaluate(&self) -> Result<Value, LazyError> {
        self.force().cloned()
    }

    /// Evaluates the node and borrows the cached value.
    ///
    /// # Errors
    ///
    /// See [`Lazy::evaluate`].
    pub fn force(&self) -> Result<&Value, LazyError> {
        if let Some(value) = self.0.cache.get() {
            trace!(kind = self.kind().name(), "cache hit");
            return Ok(value);
        }
        trace!(kind = self.kind().name(), "cache miss");
        let value = self.calculate()?;
        Ok(self.0.cache.get_or_init(|| value))
    }

    fn calculate(&self) -> Result<Value, LazyError> {
        match self.kind() {
            NodeKind::Constant(value) => Ok(value.clone()),
            NodeKind::Sum(terms) => fold(terms, Value::Int(0), Value::try_add),
            NodeKind::Product(factors) => fold(factors, Value::Int(1), Value::try_mul),
            NodeKind::Negation(child) => Ok(child.force()?.try_neg()?),
            NodeKind::Call(call) => call.invoke(),
        }
    }

    // === Introspection ===

    /// Returns the variant of this node.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.0.kind
    }

    /// Returns true if this is a constant.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self.kind(), NodeKind::Constant(_))
    }

    /// Returns the terms of a sum or the factors of a product.
    #[must_use]
    pub fn terms(&self) -> Option<&[Lazy]> {
        match self.kind() {
            NodeKind::Sum(terms) | NodeKind::Product(terms) => Some(terms),
            _ => None,
        }
    }

    /// Returns the wrapped function of a call node.
    #[must_use]
    pub fn function(&self) -> Option<&LazyFn> {
        match self.kind() {
            NodeKind::Call(call) => Some(call.function()),
            _ => None,
        }
    }

    /// Returns the children of this node.
    ///
    /// For a call these are the positional arguments followed by the keyword
    /// arguments.
    #[must_use]
    pub fn children(&self) -> Terms {
        match self.kind() {
            NodeKind::Constant(_) => SmallVec::new(),
            NodeKind::Sum(terms) | NodeKind::Product(terms) => terms.clone(),
            NodeKind::Negation(child) => smallvec::smallvec![child.clone()],
            NodeKind::Call(call) => call.arguments().cloned().collect(),
        }
    }

    /// Returns true once the node has been evaluated.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.0.cache.get().is_some()
    }

    /// Returns the cached value without evaluating.
    #[must_use]
    pub fn cached(&self) -> Option<&Value> {
        self.0.cache.get()
    }

    /// Returns true if both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(a: &Lazy, b: &Lazy) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

type Fold = fn(&Value, &Value) -> Result<Value, ValueError>;

fn fold(terms: &[Lazy], identity: Value, op: Fold) -> Result<Value, LazyError> {
    let mut iter = terms.iter();
    let Some(first) = iter.next() else {
        return Ok(identity);
    };
    let mut acc = first.force()?.clone();
    for term in iter {
        acc = op(&acc, term.force()?)?;
    }
    Ok(acc)
}

/// Conversion into a node.
///
/// Raw values become constants; nodes are passed through unchanged, so the
/// same node can be shared by several parents.
pub trait IntoLazy {
    /// Converts `self` into a node.
    fn into_lazy(self) -> Lazy;
}

impl IntoLazy for Lazy {
    fn into_lazy(self) -> Lazy {
        self
    }
}

impl IntoLazy for &Lazy {
    fn into_lazy(self) -> Lazy {
        self.clone()
    }
}

macro_rules! impl_into_lazy_for_raw {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoLazy for $t {
                fn into_lazy(self) -> Lazy {
                    Lazy::constant(self)
                }
            }

            impl From<$t> for Lazy {
                fn from(value: $t) -> Self {
                    Lazy::constant(value)
                }
            }
        )*
    };
}

impl_into_lazy_for_raw!(Value, i64, i32, f64, bool, Complex64, Vec<u8>, &[u8]);

/// Wraps a raw value in a constant node, passing nodes through.
pub fn to_node(value: impl IntoLazy) -> Lazy {
    value.into_lazy()
}

impl fmt::Debug for Lazy {
    /// Shows the structure and cache state without evaluating.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            NodeKind::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            NodeKind::Sum(terms) | NodeKind::Product(terms) => f
                .debug_struct(self.kind().name())
                .field("terms", terms)
                .field("cache", &self.cached())
                .finish(),
            NodeKind::Negation(child) => f
                .debug_struct("Negation")
                .field("child", child)
                .field("cache", &self.cached())
                .finish(),
            NodeKind::Call(call) => f
                .debug_struct("Call")
                .field("function", call.function())
                .field("args", &call.positional())
                .field("kwargs", &call.keywords())
                .field("cache", &self.cached())
                .finish(),
        }
    }
}

impl fmt::Display for Lazy {
    /// Evaluates the node and prints its value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.force() {
            Ok(value) => write!(f, "{value}"),
            Err(err) => write!(f, "<error: {err}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant() {
        let five = Lazy::constant(5);
        assert!(five.is_atom());
        assert!(!five.is_evaluated());
        assert_eq!(five.evaluate().unwrap(), Value::Int(5));
        assert!(five.is_evaluated());
        assert!(five.children().is_empty());
    }

    #[test]
    fn test_sum_and_product() {
        let sum = Lazy::sum([1, 2, 3]);
        assert_eq!(sum.terms().map(<[Lazy]>::len), Some(3));
        assert_eq!(sum.evaluate().unwrap(), Value::Int(6));

        let product = Lazy::product([2.0, 0.5, 3.0]);
        assert_eq!(product.evaluate().unwrap(), Value::Float(3.0));
    }

    #[test]
    fn test_empty_is_identity() {
        assert_eq!(Lazy::sum(Vec::<Lazy>::new()).evaluate().unwrap(), Value::Int(0));
        assert_eq!(Lazy::product(Vec::<Lazy>::new()).evaluate().unwrap(), Value::Int(1));
    }

    #[test]
    fn test_sum_preserves_order() {
        let sum = Lazy::sum([b"ab".to_vec(), b"cd".to_vec()]);
        assert_eq!(sum.evaluate().unwrap(), Value::Bytes(b"abcd".to_vec()));
    }

    #[test]
    fn test_negation_evaluates_child() {
        let inner = Lazy::sum([2, 3]);
        let neg = Lazy::negation(&inner);
        assert_eq!(neg.evaluate().unwrap(), Value::Int(-5));
        assert!(inner.is_evaluated());
        assert!(Lazy::ptr_eq(&neg.children()[0], &inner));
    }

    #[test]
    fn test_to_node_passes_nodes_through() {
        let node = Lazy::constant(1);
        assert!(Lazy::ptr_eq(&to_node(&node), &node));
        assert!(to_node(2.5).is_atom());
    }

    #[test]
    fn test_error_is_not_cached() {
        let bad = Lazy::negation(b"x".to_vec());
        assert!(bad.evaluate().is_err());
        assert!(!bad.is_evaluated());
        assert!(matches!(
            bad.evaluate(),
            Err(LazyError::Value(ValueError::UnsupportedOperand { .. }))
        ));
    }

    #[test]
    fn test_debug_does_not_evaluate() {
        let sum = Lazy::sum([1, 2]);
        let text = format!("{sum:?}");
        assert!(text.starts_with("Sum"));
        assert!(text.contains("cache: None"));
        assert!(!sum.is_evaluated());
    }

    #[test]
    fn test_display_evaluates() {
        let sum = Lazy::sum([1, 2]);
        assert_eq!(sum.to_string(), "3");
        assert!(sum.is_evaluated());
        assert_eq!(
            Lazy::negation(b"x".to_vec()).to_string(),
            "<error: bad operand type for unary -: 'bytes'>"
        );
    }
}
