//! # lazymath-value
//!
//! The dynamic numeric domain that flows through lazymath expression graphs.
//!
//! This crate provides:
//! - [`Value`]: integers, floats, complex numbers, booleans and byte strings
//! - Fallible arithmetic following the usual numeric tower
//! - Cross-type equality and ordering
//! - Conversions to integer, float, complex, boolean and byte sequence
//!
//! ## Numeric Tower
//!
//! - `Bool` behaves as the integer `0` or `1`
//! - `Int` op `Int` stays `Int` (checked, overflow is an error)
//! - Mixing in a `Float` yields `Float`, mixing in a `Complex` yields `Complex`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod cmp;
pub mod convert;
pub mod error;
pub mod value;

#[cfg(test)]
mod proptests;

pub use arith::BinaryOp;
pub use error::ValueError;
pub use num_complex::Complex64;
pub use value::{Value, ValueType};
