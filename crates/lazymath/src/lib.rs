//! # lazymath
//!
//! Deferred computation with cached, composable expression nodes.
//!
//! Build an expression graph out of constants, sums, products, negations
//! and wrapped function calls without evaluating anything, then force it
//! once with [`Lazy::evaluate`]. Branches that are never forced are never
//! computed.
//!
//! ## Features
//!
//! - **Memoized nodes**: every node computes at most once and caches its value
//! - **Flat chains**: `a + b + c` is a single three-term sum, not a tree
//! - **Wrapped functions**: [`LazyFn`] turns any function into a constructor
//!   of deferred calls
//! - **Transparent errors**: errors raised while computing reach the caller
//!   unchanged
//!
//! ## Quick Start
//!
//! ```rust
//! use lazymath::prelude::*;
//!
//! let slow_double = LazyFn::new("slow_double", |args: &Arguments<'_>| {
//!     Ok(args.get(0)?.try_mul(&Value::Int(2))?)
//! });
//!
//! let pick = |choice: bool, if_true: Lazy, if_false: Lazy| {
//!     if choice { if_true } else { if_false }
//! };
//!
//! let unused = slow_double.call([5]);
//! let chosen = pick(false, unused.clone(), Lazy::constant(-1));
//! assert_eq!(chosen.evaluate().unwrap(), Value::Int(-1));
//! assert!(!unused.is_evaluated());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lazymath_core as core;
pub use lazymath_value as value;

pub use lazymath_core::{
    lazy_fn, to_node, Arguments, IntoLazy, Lazy, LazyError, LazyFn, NodeKind,
};
pub use lazymath_value::{Complex64, Value, ValueError, ValueType};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lazymath_core::{
        lazy_fn, to_node, Arguments, IntoLazy, Lazy, LazyError, LazyFn, NodeKind,
    };
    pub use lazymath_value::{Complex64, Value, ValueError};
}
