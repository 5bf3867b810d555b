//! Maybe type - an optional value with a rich combinator surface.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. Unlike [`Option`], a `Maybe`
//! participates in the crate's shared algorithms
//! ([`Traversable`](crate::typeclass::Traversable)) and in structural pattern
//! matching, and its forcing accessor [`Maybe::get`] reports absence as an
//! [`Error`] rather than panicking.
//!
//! # Presence is independent of the payload
//!
//! `Maybe::some(value)` is always present, even when `value` is itself an
//! empty [`Option`]. Only [`Maybe::of`] maps the absent `Option` to
//! `Maybe::None`:
//!
//! ```rust
//! use fpcore::control::Maybe;
//!
//! assert!(Maybe::some(None::<i32>).is_defined());
//! assert!(Maybe::of(None::<i32>).is_empty());
//! ```
//!
//! Consequently [`Maybe::map`] never changes the tag, and code mapping over a
//! `Maybe<Option<T>>` must expect to observe the inner `None`. Use
//! [`Maybe::flat_map`] when the mapping may produce absence.

use std::fmt;

use crate::error::{Error, Result};
use crate::function::PartialFunction;

/// An optional value.
///
/// # Examples
///
/// ```rust
/// use fpcore::control::Maybe;
///
/// let name = Maybe::some("ada");
/// assert_eq!(name.map(str::len), Maybe::some(3));
/// assert_eq!(Maybe::<i32>::none().get_or_else(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value; the result is always present.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts an [`Option`], mapping `None` to `Maybe::None`.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    /// Returns `Some(value)` if `condition` holds, otherwise `None`.
    pub fn when(condition: bool, value: T) -> Self {
        if condition { Self::Some(value) } else { Self::None }
    }

    /// Returns `Some(supplier())` if `condition` holds; `supplier` is not
    /// called otherwise.
    pub fn when_with<F>(condition: bool, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if condition {
            Self::Some(supplier())
        } else {
            Self::None
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the value is present and equal to `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Some(value) if value == element)
    }

    /// Borrows the payload.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Iterates over the zero or one present values.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().to_option().into_iter()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or [`Error::EmptyValue`] when absent.
    ///
    /// # Errors
    ///
    /// Fails when the `Maybe` is empty.
    pub fn get(self) -> Result<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::empty("Maybe::get")),
        }
    }

    /// Returns the value or `other`.
    pub fn get_or_else(self, other: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => other,
        }
    }

    /// Returns the value or computes a fallback.
    pub fn get_or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Returns the value, or the error built by `error_supplier`.
    ///
    /// # Errors
    ///
    /// Returns `error_supplier()` when the `Maybe` is empty.
    pub fn get_or_else_throw<E, F>(self, error_supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error_supplier()),
        }
    }

    /// Returns the value, or runs a fallible fallback.
    ///
    /// # Errors
    ///
    /// The fallback's error propagates unchanged.
    pub fn get_or_else_try<E, F>(self, fallback: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => fallback(),
        }
    }

    /// Folds both cases into one value.
    pub fn fold<U, E, P>(self, on_empty: E, on_present: P) -> U
    where
        E: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => on_present(value),
            Self::None => on_empty(),
        }
    }

    /// Converts into an [`Option`].
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the present value; the tag never changes.
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself be absent.
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => Self::when(predicate(&value), value),
            Self::None => Self::None,
        }
    }

    /// Keeps the value only if it does not satisfy `predicate`.
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn or_else(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if present, otherwise the supplied alternative.
    pub fn or_else_get<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => supplier(),
        }
    }

    /// Applies a partial function, keeping only results inside its domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Maybe;
    /// use fpcore::function::PartialFunction;
    ///
    /// let reciprocal = PartialFunction::new(|n: &i32| *n != 0, |n: i32| 1.0 / f64::from(n));
    /// assert_eq!(Maybe::some(4).collect(&reciprocal), Maybe::some(0.25));
    /// assert_eq!(Maybe::some(0).collect(&reciprocal), Maybe::none());
    /// ```
    pub fn collect<U>(self, partial_function: &PartialFunction<T, U>) -> Maybe<U> {
        self.flat_map(|value| partial_function.apply_if_defined(value))
    }

    /// Passes `self` to `function` and returns its result.
    pub fn transform<U, F>(self, function: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        function(self)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the present value and returns `self` unchanged.
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` when empty and returns `self` unchanged.
    #[must_use]
    pub fn on_empty<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_empty() {
            action();
        }
        self
    }

    // =========================================================================
    // Sequences
    // =========================================================================

    /// Turns a sequence of `Maybe`s into a `Maybe` of all values.
    ///
    /// The result is empty as soon as any element is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Maybe;
    ///
    /// assert_eq!(Maybe::sequence(vec![Maybe::some(1), Maybe::some(2)]), Maybe::some(vec![1, 2]));
    /// assert_eq!(Maybe::sequence(vec![Maybe::some(1), Maybe::none()]), Maybe::none());
    /// ```
    pub fn sequence<I>(values: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .map(Self::to_option)
            .collect::<Option<Vec<T>>>()
            .into()
    }

    /// Maps every element to a `Maybe` and sequences the results.
    pub fn traverse<A, I, F>(values: I, function: F) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::sequence(values.into_iter().map(function))
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.to_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}
