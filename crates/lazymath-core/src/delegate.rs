//! Comparisons and conversions that defer to the evaluated value.
//!
//! Every comparison or conversion forces evaluation and then hands the work
//! to [`Value`]. The fallible `try_*` methods report evaluation errors; the
//! std operator traits are built on top of them and treat an error as "not
//! equal" or "unordered".
//!
//! Equality and ordering short-circuit on identity: a node always equals
//! itself, even if evaluating it would fail or yield NaN.

use std::cmp::Ordering;

use lazymath_value::{Complex64, Value};

use crate::error::LazyError;
use crate::node::{IntoLazy, Lazy};

impl Lazy {
    // === Comparisons ===

    /// Tests equality, evaluating both sides unless they are the same node.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors of either side.
    pub fn try_eq(&self, other: impl IntoLazy) -> Result<bool, LazyError> {
        let other = other.into_lazy();
        if Lazy::ptr_eq(self, &other) {
            return Ok(true);
        }
        Ok(self.force()? == other.force()?)
    }

    /// Tests inequality; the negation of [`Lazy::try_eq`].
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors of either side.
    pub fn try_ne(&self, other: impl IntoLazy) -> Result<bool, LazyError> {
        self.try_eq(other).map(|eq| !eq)
    }

    /// Compares the evaluated values.
    ///
    /// A node compared with itself is `Equal` without being evaluated.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors and
    /// [`ValueError::Unorderable`](lazymath_value::ValueError::Unorderable).
    pub fn try_cmp(&self, other: impl IntoLazy) -> Result<Option<Ordering>, LazyError> {
        let other = other.into_lazy();
        if Lazy::ptr_eq(self, &other) {
            return Ok(Some(Ordering::Equal));
        }
        Ok(self.force()?.try_cmp(other.force()?)?)
    }

    /// Tests `self < other`.
    ///
    /// # Errors
    ///
    /// See [`Lazy::try_cmp`].
    pub fn try_lt(&self, other: impl IntoLazy) -> Result<bool, LazyError> {
        Ok(matches!(self.try_cmp(other)?, Some(Ordering::Less)))
    }

    /// Tests `self <= other`.
    ///
    /// # Errors
    ///
    /// See [`Lazy::try_cmp`].
    pub fn try_le(&self, other: impl IntoLazy) -> Result<bool, LazyError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    /// Tests `self > other`.
    ///
    /// # Errors
    ///
    /// See [`Lazy::try_cmp`].
    pub fn try_gt(&self, other: impl IntoLazy) -> Result<bool, LazyError> {
        Ok(matches!(self.try_cmp(other)?, Some(Ordering::Greater)))
    }

    /// Tests `self >= other`.
    ///
    /// # Errors
    ///
    /// See [`Lazy::try_cmp`].
    pub fn try_ge(&self, other: impl IntoLazy) -> Result<bool, LazyError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    // === Conversions ===

    /// Evaluates and converts to an integer.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors and the value's conversion error.
    pub fn to_int(&self) -> Result<i64, LazyError> {
        Ok(self.force()?.to_int()?)
    }

    /// Evaluates and converts to a float.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors and the value's conversion error.
    pub fn to_float(&self) -> Result<f64, LazyError> {
        Ok(self.force()?.to_float()?)
    }

    /// Evaluates and converts to a complex number.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors and the value's conversion error.
    pub fn to_complex(&self) -> Result<Complex64, LazyError> {
        Ok(self.force()?.to_complex()?)
    }

    /// Evaluates and returns the truthiness of the value.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors.
    pub fn to_bool(&self) -> Result<bool, LazyError> {
        Ok(self.force()?.to_bool())
    }

    /// Evaluates and converts to a byte sequence.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors and the value's conversion error.
    pub fn to_bytes(&self) -> Result<Vec<u8>, LazyError> {
        Ok(self.force()?.to_bytes()?)
    }

    // === Hashing ===

    /// Always fails: nodes cannot be hashed.
    ///
    /// Equality compares evaluated values while identity compares nodes, so
    /// no hash is consistent with both. `Lazy` does not implement
    /// [`Hash`](std::hash::Hash) for the same reason.
    ///
    /// # Errors
    ///
    /// Always returns [`LazyError::Unsupported`].
    pub fn try_hash(&self) -> Result<u64, LazyError> {
        Err(LazyError::Unsupported { operation: "hash" })
    }
}

impl PartialEq for Lazy {
    fn eq(&self, other: &Lazy) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for Lazy {
    fn partial_cmp(&self, other: &Lazy) -> Option<Ordering> {
        self.try_cmp(other).ok().flatten()
    }
}

macro_rules! impl_raw_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl PartialEq<$t> for Lazy {
                fn eq(&self, other: &$t) -> bool {
                    self.try_eq(other.clone()).unwrap_or(false)
                }
            }

            impl PartialEq<Lazy> for $t {
                fn eq(&self, other: &Lazy) -> bool {
                    other == self
                }
            }

            impl PartialOrd<$t> for Lazy {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.try_cmp(other.clone()).ok().flatten()
                }
            }

            impl PartialOrd<Lazy> for $t {
                fn partial_cmp(&self, other: &Lazy) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    };
}

impl_raw_cmp!(Value, i64, i32, f64, bool);

macro_rules! impl_try_from_lazy {
    ($($t:ty => $method:ident),* $(,)?) => {
        $(
            impl TryFrom<&Lazy> for $t {
                type Error = LazyError;

                fn try_from(node: &Lazy) -> Result<Self, Self::Error> {
                    node.$method()
                }
            }
        )*
    };
}

impl_try_from_lazy!(
    i64 => to_int,
    f64 => to_float,
    Complex64 => to_complex,
    bool => to_bool,
    Vec<u8> => to_bytes,
);
