//! Partial functions and lifting of fallible functions.
//!
//! A [`PartialFunction`] is defined only on part of its input type. The
//! `collect` operations of [`Maybe`] and of
//! [`Traversable`](crate::typeclass::Traversable) keep the images of the
//! elements inside its domain and skip the rest.
//!
//! [`lift`] and [`lift_try`] turn a fallible `Fn(A) -> Result<B, E>` into a
//! total function, and [`memoized`] caches a zero-argument supplier.
//! Composition, argument flipping, tupling, partial application and
//! currying live in [`combinators`].
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::{Maybe, Try};
//! use fpcore::function::{lift, lift_try};
//!
//! let parse = lift(|text: &str| text.parse::<i32>());
//! assert_eq!(parse("12"), Maybe::some(12));
//! assert_eq!(parse("twelve"), Maybe::none());
//!
//! let checked = lift_try(|text: &str| text.parse::<i32>());
//! assert!(checked("x").is_failure());
//! ```

use std::fmt;

use crate::control::{Lazy, Maybe, Try};
use crate::error::{Cause, Error, Result};

pub mod combinators;

pub use combinators::{
    and_then, and_then2, compose, flip, partial2, partial3, tupled2, tupled3, untupled2,
    untupled3,
};

type Domain<A> = Box<dyn Fn(&A) -> bool + Send + Sync>;
type Mapping<A, B> = Box<dyn Fn(A) -> B + Send + Sync>;

/// A function defined on a subset of its input type.
///
/// # Examples
///
/// ```rust
/// use fpcore::Error;
/// use fpcore::function::PartialFunction;
///
/// let halve = PartialFunction::new(|n: &u32| n % 2 == 0, |n: u32| n / 2);
/// assert!(halve.is_defined_at(&4));
/// assert_eq!(halve.apply(4), Ok(2));
/// assert!(matches!(halve.apply(3), Err(Error::NotDefinedAt { .. })));
/// ```
pub struct PartialFunction<A, B> {
    domain: Domain<A>,
    mapping: Mapping<A, B>,
}

impl<A, B> PartialFunction<A, B> {
    /// Creates a partial function from its domain predicate and mapping.
    pub fn new<D, M>(domain: D, mapping: M) -> Self
    where
        D: Fn(&A) -> bool + Send + Sync + 'static,
        M: Fn(A) -> B + Send + Sync + 'static,
    {
        Self {
            domain: Box::new(domain),
            mapping: Box::new(mapping),
        }
    }

    /// Returns `true` if `value` lies in the domain.
    pub fn is_defined_at(&self, value: &A) -> bool {
        (self.domain)(value)
    }

    /// Applies the function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDefinedAt`] when `value` is outside the domain.
    pub fn apply(&self, value: A) -> Result<B>
    where
        A: fmt::Debug,
    {
        if self.is_defined_at(&value) {
            Ok((self.mapping)(value))
        } else {
            Err(Error::not_defined_at(&value))
        }
    }

    /// Returns a total function that yields `Maybe::None` outside the domain.
    pub fn lift(&self) -> impl Fn(A) -> Maybe<B> + '_ {
        move |value| self.apply_if_defined(value)
    }

    pub(crate) fn apply_if_defined(&self, value: A) -> Maybe<B> {
        if self.is_defined_at(&value) {
            Maybe::Some((self.mapping)(value))
        } else {
            Maybe::None
        }
    }
}

impl<A, B> fmt::Debug for PartialFunction<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PartialFunction(<fn>)")
    }
}

/// Lifts a fallible function into one returning `Maybe`.
///
/// Any `Err` becomes `Maybe::None`.
pub fn lift<A, B, E, F>(function: F) -> impl Fn(A) -> Maybe<B>
where
    F: Fn(A) -> std::result::Result<B, E>,
{
    move |value| Maybe::of(function(value).ok())
}

/// Lifts a fallible function into one returning `Try`.
///
/// An `Err` becomes a `Failure` carrying the error as its cause.
pub fn lift_try<A, B, E, F>(function: F) -> impl Fn(A) -> Try<B>
where
    E: Into<Cause>,
    F: Fn(A) -> std::result::Result<B, E>,
{
    move |value| Try::of(|| function(value))
}

/// Memoizes a zero-argument function: the supplier runs once, on first
/// access.
///
/// # Examples
///
/// ```rust
/// use fpcore::function::memoized;
///
/// let answer = memoized(|| 6 * 7);
/// assert!(!answer.is_evaluated());
/// assert_eq!(*answer.get(), 42);
/// ```
pub fn memoized<T, F>(supplier: F) -> Lazy<T>
where
    F: FnOnce() -> T + Send + 'static,
{
    Lazy::of(supplier)
}
