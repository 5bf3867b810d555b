//! Semigroup type class - types with an associative binary operation.
//!
//! `Validation::zip_with` accumulates errors through this trait, and the
//! numeric aggregates of [`Traversable`](super::Traversable) combine
//! elements through the [`Sum`] and [`Product`] wrappers.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::Semigroup;
//!
//! let errors = vec!["too short"].combine(vec!["no digits"]);
//! assert_eq!(errors, vec!["too short", "no digits"]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};
use crate::control::Maybe;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements of an iterator, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Semigroup;
    ///
    /// let joined = String::reduce_all(["a", "b", "c"].map(String::from));
    /// assert_eq!(joined.as_deref(), Some("abc"));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Some(a).combine(Some(b))` is `Some(a.combine(b))`; an empty side is skipped.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product forms a semigroup under multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}
