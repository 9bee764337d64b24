//! Wrapping arbitrary functions as lazy call nodes.
//!
//! A [`LazyFn`] captures a function together with its name and
//! documentation. Calling it does not run the function: it returns a call
//! node holding the (possibly lazy) arguments. Evaluating that node resolves
//! every argument and then runs the function once.
//!
//! # Examples
//!
//! ```
//! use lazymath_core::{Arguments, LazyError, LazyFn, Value};
//!
//! let double = LazyFn::new("double", |args: &Arguments<'_>| {
//!     args.get(0)?.try_mul(&Value::Int(2)).map_err(LazyError::from)
//! });
//!
//! let node = double.call([5]);
//! assert!(!node.is_evaluated());
//! assert_eq!(node.evaluate().unwrap(), Value::Int(10));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use lazymath_value::Value;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::LazyError;
use crate::node::{IntoLazy, Lazy};

type Callable = dyn for<'a> Fn(&Arguments<'a>) -> Result<Value, LazyError>;

/// Descriptive metadata of a wrapped function.
#[derive(Clone, Debug)]
struct Signature {
    name: Cow<'static, str>,
    qualified_name: Option<String>,
    doc: Option<String>,
}

/// A function wrapped for deferred calls.
///
/// Cloning is cheap; clones share the same function.
#[derive(Clone)]
pub struct LazyFn {
    signature: Rc<Signature>,
    callable: Rc<Callable>,
}

impl LazyFn {
    /// Wraps `f` under the given name.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<Value, LazyError> + 'static,
    {
        Self {
            signature: Rc::new(Signature {
                name: name.into(),
                qualified_name: None,
                doc: None,
            }),
            callable: Rc::new(f),
        }
    }

    /// Sets the fully qualified name, e.g. `crate::module::double`.
    #[must_use]
    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        Rc::make_mut(&mut self.signature).qualified_name = Some(qualified_name.into());
        self
    }

    /// Sets the documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        Rc::make_mut(&mut self.signature).doc = Some(doc.into());
        self
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Returns the qualified name, falling back to the plain name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        self.signature
            .qualified_name
            .as_deref()
            .unwrap_or(&self.signature.name)
    }

    /// Returns the documentation string, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.signature.doc.as_deref()
    }

    /// Builds a deferred call with positional arguments.
    pub fn call<I>(&self, args: I) -> Lazy
    where
        I: IntoIterator,
        I::Item: IntoLazy,
    {
        self.call_with(args, std::iter::empty::<(String, Lazy)>())
    }

    /// Builds a deferred call with positional and keyword arguments.
    ///
    /// A keyword given twice keeps its first position and its last value.
    pub fn call_with<I, K, S, V>(&self, args: I, kwargs: K) -> Lazy
    where
        I: IntoIterator,
        I::Item: IntoLazy,
        K: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: IntoLazy,
    {
        let mut keywords: SmallVec<[(String, Lazy); 2]> = SmallVec::new();
        for (name, value) in kwargs {
            let name = name.into();
            let value = value.into_lazy();
            match keywords.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => keywords.push((name, value)),
            }
        }
        Lazy::call(Call {
            function: self.clone(),
            positional: args.into_iter().map(IntoLazy::into_lazy).collect(),
            keywords,
        })
    }

    fn apply(&self, args: &Arguments<'_>) -> Result<Value, LazyError> {
        (self.callable)(args)
    }
}

impl fmt::Debug for LazyFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyFn")
            .field("name", &self.qualified_name())
            .field("doc", &self.doc())
            .finish_non_exhaustive()
    }
}

/// The data of a call node.
pub struct Call {
    function: LazyFn,
    positional: SmallVec<[Lazy; 2]>,
    keywords: SmallVec<[(String, Lazy); 2]>,
}

impl Call {
    /// Returns the wrapped function.
    #[must_use]
    pub fn function(&self) -> &LazyFn {
        &self.function
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn positional(&self) -> &[Lazy] {
        &self.positional
    }

    /// Returns the keyword arguments in the order they were given.
    #[must_use]
    pub fn keywords(&self) -> &[(String, Lazy)] {
        &self.keywords
    }

    /// Iterates over all argument nodes, positional first.
    pub fn arguments(&self) -> impl Iterator<Item = &Lazy> {
        self.positional
            .iter()
            .chain(self.keywords.iter().map(|(_, node)| node))
    }

    pub(crate) fn invoke(&self) -> Result<Value, LazyError> {
        let positional = self
            .positional
            .iter()
            .map(Lazy::evaluate)
            .collect::<Result<Vec<_>, _>>()?;
        let keywords = self
            .keywords
            .iter()
            .map(|(name, node)| Ok((name.as_str(), node.evaluate()?)))
            .collect::<Result<Vec<_>, LazyError>>()?;

        trace!(function = self.function.qualified_name(), "invoking wrapped function");
        self.function.apply(&Arguments {
            function: self.function.name(),
            positional,
            keywords,
        })
    }
}

/// Resolved arguments handed to a wrapped function.
#[derive(Debug)]
pub struct Arguments<'a> {
    function: &'a str,
    positional: Vec<Value>,
    keywords: Vec<(&'a str, Value)>,
}

impl<'a> Arguments<'a> {
    /// Returns the name of the function being called.
    #[must_use]
    pub fn function(&self) -> &'a str {
        self.function
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the number of positional arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    /// Returns true if there are no positional arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Returns the positional argument at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::MissingArgument`] if there is no such argument.
    pub fn get(&self, index: usize) -> Result<&Value, LazyError> {
        self.positional
            .get(index)
            .ok_or_else(|| LazyError::MissingArgument {
                function: self.function.to_owned(),
                index,
            })
    }

    /// Returns the keyword argument `name`, if given.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Returns the keyword argument `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::MissingKeyword`] if it was not given.
    pub fn require_keyword(&self, name: &str) -> Result<&Value, LazyError> {
        self.keyword(name).ok_or_else(|| LazyError::MissingKeyword {
            function: self.function.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Iterates over keyword arguments in the order they were given.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keywords.iter().map(|(name, value)| (*name, value))
    }
}

/// Wraps a function item as a [`LazyFn`], naming it after its path.
///
/// ```
/// use lazymath_core::{lazy_fn, Arguments, LazyError, Value};
///
/// fn square(args: &Arguments<'_>) -> Result<Value, LazyError> {
///     let x = args.get(0)?;
///     Ok(x.try_mul(x)?)
/// }
///
/// let lazy_square = lazy_fn!(square);
/// assert_eq!(lazy_square.name(), "square");
/// assert_eq!(lazy_square.call([4]).evaluate().unwrap(), Value::Int(16));
/// ```
#[macro_export]
macro_rules! lazy_fn {
    ($func:path) => {
        $crate::LazyFn::new(stringify!($func), $func)
            .with_qualified_name(concat!(module_path!(), "::", stringify!($func)))
    };
    ($func:path, $doc:expr) => {
        $crate::lazy_fn!($func).with_doc($doc)
    };
}
