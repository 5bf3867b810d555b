//! Either type - a right-biased value that is one of two types.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. By convention
//! `Left` holds a failure or alternative and `Right` holds the success value;
//! `map`, `flat_map` and `filter` operate on the right side only, and a
//! `Left` passes through them unchanged.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Either;
//!
//! let parsed: Either<String, i32> = Either::right(21);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Either::right(42));
//!
//! let failed: Either<String, i32> = Either::left(String::from("not a number"));
//! let rendered = failed.fold(|error| format!("error: {error}"), |n| n.to_string());
//! assert_eq!(rendered, "error: not a number");
//! ```

use std::fmt;

use super::{Maybe, Validation};
use crate::error::Error;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use fpcore::control::Either;
///
/// let value: Either<&str, i32> = Either::right(1);
/// assert!(value.is_right());
/// assert_eq!(value.swap(), Either::left(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure or alternative.
    Left(L),
    /// The right variant, conventionally the success value.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction & Type Checking
    // =========================================================================

    /// Creates a `Left`.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right`.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the right value, or [`Error::EmptyValue`] for a `Left`.
    ///
    /// # Errors
    ///
    /// Fails when this is a `Left`.
    pub fn get(self) -> crate::Result<R> {
        match self {
            Self::Left(_) => Err(Error::empty("Either::get")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the left value, or [`Error::EmptyValue`] for a `Right`.
    ///
    /// # Errors
    ///
    /// Fails when this is a `Right`.
    pub fn get_left(self) -> crate::Result<L> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(Error::empty("Either::get_left")),
        }
    }

    /// Converts into the left value, if any.
    #[inline]
    pub fn left_option(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Converts into the right value, if any.
    #[inline]
    pub fn right_option(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the right value or `other`.
    pub fn get_or_else(self, other: R) -> R {
        match self {
            Self::Left(_) => other,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or computes one from the left value.
    pub fn get_or_else_get<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or an error built from the left value.
    ///
    /// # Errors
    ///
    /// Returns `function(left)` for a `Left`.
    pub fn get_or_else_throw<E, F>(self, function: F) -> Result<R, E>
    where
        F: FnOnce(L) -> E,
    {
        match self {
            Self::Left(value) => Err(function(value)),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the right value, or runs a fallible fallback.
    ///
    /// # Errors
    ///
    /// The fallback's error propagates unchanged.
    pub fn get_or_else_try<E, F>(self, fallback: F) -> Result<R, E>
    where
        F: FnOnce() -> Result<R, E>,
    {
        match self {
            Self::Left(_) => fallback(),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the right value.
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the left value.
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever side is present.
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the right value.
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Folds both sides into one value.
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns `None` for a `Right` failing `predicate`, `Some(self)` otherwise.
    ///
    /// A `Left` is always kept.
    pub fn filter<P>(self, predicate: P) -> Maybe<Self>
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => Maybe::Some(self),
            Self::Right(value) => {
                if predicate(&value) {
                    Maybe::Some(Self::Right(value))
                } else {
                    Maybe::None
                }
            }
        }
    }

    /// Turns a `Right` failing `predicate` into a `Left` built from it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let adult: Either<String, u32> = Either::right(12);
    /// let checked = adult.filter_or_else(|age| *age >= 18, |age| format!("{age} is too young"));
    /// assert_eq!(checked, Either::left(String::from("12 is too young")));
    /// ```
    pub fn filter_or_else<P, F>(self, predicate: P, left_builder: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(_) => self,
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(left_builder(value))
                }
            }
        }
    }

    /// Returns `self` if `Right`, otherwise the supplied alternative.
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(_) => self,
        }
    }

    // =========================================================================
    // Side Effects & Conversions
    // =========================================================================

    /// Runs `action` on the right value and returns `self` unchanged.
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the left value and returns `self` unchanged.
    #[must_use]
    pub fn peek_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            action(value);
        }
        self
    }

    /// Converts into a `Validation`: `Right` is valid, `Left` is invalid.
    pub fn to_validation(self) -> Validation<L, R> {
        match self {
            Self::Left(error) => Validation::Invalid(error),
            Self::Right(value) => Validation::Valid(value),
        }
    }

    /// Sequences right values, stopping at the first `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Either;
    ///
    /// let all = Either::sequence_right(vec![Either::<&str, i32>::right(1), Either::right(2)]);
    /// assert_eq!(all, Either::right(vec![1, 2]));
    ///
    /// let first = Either::sequence_right(vec![Either::right(1), Either::left("a"), Either::left("b")]);
    /// assert_eq!(first, Either::left("a"));
    /// ```
    pub fn sequence_right<I>(values: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .map(Result::from)
            .collect::<Result<Vec<R>, L>>()
            .into()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
