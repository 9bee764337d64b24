//! # lazymath-core
//!
//! Lazy expression nodes for the lazymath framework.
//!
//! This crate provides:
//! - [`Lazy`]: a shared handle to an immutable, memoized expression node
//! - Five node variants: constant, sum, product, negation and function call
//! - Operator composition (`+`, `-`, `*`, unary `-`) that flattens
//!   same-kind chains instead of nesting them
//! - Comparisons and conversions that defer to the evaluated value
//! - [`LazyFn`]: wraps any function so calling it builds a deferred call
//!
//! ## Design Principles
//!
//! - **Build, then force**: composing nodes never evaluates anything
//! - **Compute once**: each node caches its value in a write-once cell
//! - **Pass-through errors**: failures from values and wrapped functions
//!   reach the caller of [`Lazy::evaluate`] unchanged
//!
//! ```
//! use lazymath_core::{Lazy, Value};
//!
//! let total = Lazy::constant(1) + 2 + 3;
//! assert_eq!(total.terms().map(<[Lazy]>::len), Some(3));
//! assert_eq!(total.evaluate().unwrap(), Value::Int(6));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compose;
pub mod delegate;
pub mod error;
pub mod function;
pub mod node;

#[cfg(test)]
mod proptests;

pub use error::LazyError;
pub use function::{Arguments, Call, LazyFn};
pub use lazymath_value::{Complex64, Value, ValueError, ValueType};
pub use node::{to_node, IntoLazy, Lazy, NodeKind, Terms};
