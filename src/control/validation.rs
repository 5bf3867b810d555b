//! Validation type - error-accumulating validation of independent inputs.
//!
//! A [`Validation`] is either `Valid(T)` or `Invalid(E)`. Unlike
//! [`Either`](super::Either), combining several validations with
//! [`Validation::combine`] reports *every* error instead of stopping at the
//! first one.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Validation;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn validate_name(name: &str) -> Validation<String, String> {
//!     if name.chars().all(char::is_alphabetic) {
//!         Validation::valid(name.to_string())
//!     } else {
//!         Validation::invalid(format!("invalid name: {name}"))
//!     }
//! }
//!
//! fn validate_age(age: i64) -> Validation<String, u32> {
//!     u32::try_from(age)
//!         .ok()
//!         .filter(|age| *age < 130)
//!         .map_or_else(|| Validation::invalid(format!("invalid age: {age}")), Validation::valid)
//! }
//!
//! let person = Validation::combine(validate_name("Ada"), validate_age(36))
//!     .ap(|name, age| Person { name, age });
//! assert!(person.is_valid());
//!
//! let rejected = Validation::combine(validate_name("Ada 2"), validate_age(-1))
//!     .ap(|name, age| Person { name, age });
//! assert_eq!(
//!     rejected,
//!     Validation::invalid(vec![
//!         "invalid name: Ada 2".to_string(),
//!         "invalid age: -1".to_string(),
//!     ])
//! );
//! ```

use std::fmt;

use super::{Either, Maybe};
use crate::error::Error;
use crate::typeclass::Semigroup;

/// A validated value or the error that invalidated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E, T> {
    /// The input passed validation.
    Valid(T),
    /// The input failed validation.
    Invalid(E),
}

impl<E, T> Validation<E, T> {
    // =========================================================================
    // Construction & Inspection
    // =========================================================================

    /// Creates a valid value.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value.
    #[inline]
    pub const fn invalid(error: E) -> Self {
        Self::Invalid(error)
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Iterates over the valid value, if any.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Valid(value) => Some(value).into_iter(),
            Self::Invalid(_) => None.into_iter(),
        }
    }

    /// Returns the valid value, or [`Error::EmptyValue`].
    ///
    /// # Errors
    ///
    /// Fails for `Invalid`.
    pub fn get(self) -> crate::Result<T> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(_) => Err(Error::empty("Validation::get")),
        }
    }

    /// Returns the error, or [`Error::EmptyValue`].
    ///
    /// # Errors
    ///
    /// Fails for `Valid`.
    pub fn get_error(self) -> crate::Result<E> {
        match self {
            Self::Valid(_) => Err(Error::empty("Validation::get_error")),
            Self::Invalid(error) => Ok(error),
        }
    }

    /// Returns the valid value or `other`.
    pub fn get_or_else(self, other: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => other,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the valid value.
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(error) => Validation::Invalid(error),
        }
    }

    /// Transforms the error.
    pub fn map_error<G, F>(self, function: F) -> Validation<G, T>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(error) => Validation::Invalid(function(error)),
        }
    }

    /// Transforms whichever side is present.
    pub fn bimap<G, U, F, M>(self, error_function: F, value_function: M) -> Validation<G, U>
    where
        F: FnOnce(E) -> G,
        M: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value_function(value)),
            Self::Invalid(error) => Validation::Invalid(error_function(error)),
        }
    }

    /// Chains a dependent validation; the first error short-circuits.
    pub fn flat_map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(error) => Validation::Invalid(error),
        }
    }

    /// Folds both cases into one value.
    pub fn fold<U, F, M>(self, on_invalid: F, on_valid: M) -> U
    where
        F: FnOnce(E) -> U,
        M: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(error) => on_invalid(error),
        }
    }

    /// Returns `None` for a `Valid` failing `predicate`, `Some(self)` otherwise.
    pub fn filter<P>(self, predicate: P) -> Maybe<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Valid(value) => Maybe::when(predicate(&value), Self::Valid(value)),
            Self::Invalid(_) => Maybe::Some(self),
        }
    }

    /// Combines with another validation, merging both errors through their
    /// [`Semigroup`] when both are invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Validation;
    ///
    /// let left: Validation<Vec<&str>, i32> = Validation::invalid(vec!["a"]);
    /// let right: Validation<Vec<&str>, i32> = Validation::invalid(vec!["b"]);
    /// assert_eq!(left.zip_with(right, |x, y| x + y), Validation::invalid(vec!["a", "b"]));
    /// ```
    pub fn zip_with<U, R, F>(self, other: Validation<E, U>, function: F) -> Validation<E, R>
    where
        E: Semigroup,
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid(function(left, right)),
            (Self::Invalid(left), Validation::Invalid(right)) => Validation::Invalid(left.combine(right)),
            (Self::Invalid(error), Validation::Valid(_)) | (Self::Valid(_), Validation::Invalid(error)) => {
                Validation::Invalid(error)
            }
        }
    }

    /// `Valid` becomes `Right`, `Invalid` becomes `Left`.
    pub fn to_either(self) -> Either<E, T> {
        match self {
            Self::Valid(value) => Either::Right(value),
            Self::Invalid(error) => Either::Left(error),
        }
    }

    /// Keeps the valid value, dropping the error.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Valid(value) => Maybe::Some(value),
            Self::Invalid(_) => Maybe::None,
        }
    }

    // =========================================================================
    // Accumulation
    // =========================================================================

    /// Starts combining independent validations.
    ///
    /// Extend the builder with `.combine(..)` (up to eight inputs) and finish
    /// with `.ap(constructor)`.
    pub fn combine<T2>(first: Self, second: Validation<E, T2>) -> Builder2<E, T, T2> {
        Builder2 { v1: first, v2: second }
    }

    /// Collects every valid value, or every error in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Validation;
    ///
    /// let inputs = vec![Validation::valid(1), Validation::invalid("x"), Validation::invalid("y")];
    /// assert_eq!(Validation::sequence(inputs), Validation::invalid(vec!["x", "y"]));
    /// ```
    pub fn sequence<I>(values: I) -> Validation<Vec<E>, Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut valid = Vec::new();
        let mut errors = Vec::new();
        for value in values {
            match value {
                Self::Valid(value) => valid.push(value),
                Self::Invalid(error) => errors.push(error),
            }
        }
        if errors.is_empty() {
            Validation::Valid(valid)
        } else {
            Validation::Invalid(errors)
        }
    }

    /// Validates every element with `function` and sequences the results.
    pub fn traverse<A, I, F>(values: I, function: F) -> Validation<Vec<E>, Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::sequence(values.into_iter().map(function))
    }
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Validation<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write!(formatter, "Valid({value})"),
            Self::Invalid(error) => write!(formatter, "Invalid({error})"),
        }
    }
}

// =============================================================================
// Builders
// =============================================================================

macro_rules! define_builder {
    ($name:ident { $($field:ident: $ty:ident),+ }) => {
        /// Accumulates independent validations until `ap` is called.
        #[must_use = "a builder does nothing until `ap` is called"]
        #[derive(Debug, Clone)]
        pub struct $name<E, $($ty),+> {
            $($field: Validation<E, $ty>),+
        }

        impl<E, $($ty),+> $name<E, $($ty),+> {
            /// Applies `constructor` to the valid values, or returns every
            /// error in input order.
            pub fn ap<R, F>(self, constructor: F) -> Validation<Vec<E>, R>
            where
                F: FnOnce($($ty),+) -> R,
            {
                match ($(self.$field,)+) {
                    ($(Validation::Valid($field),)+) => Validation::Valid(constructor($($field),+)),
                    ($($field,)+) => {
                        let mut errors = Vec::new();
                        $(
                            if let Validation::Invalid(error) = $field {
                                errors.push(error);
                            }
                        )+
                        Validation::Invalid(errors)
                    }
                }
            }
        }
    };
}

macro_rules! impl_combine {
    ($name:ident { $($field:ident: $ty:ident),+ } => $next:ident { $new_field:ident: $new_ty:ident }) => {
        impl<E, $($ty),+> $name<E, $($ty),+> {
            /// Adds one more validation to the builder.
            pub fn combine<$new_ty>(self, $new_field: Validation<E, $new_ty>) -> $next<E, $($ty,)+ $new_ty> {
                $next {
                    $($field: self.$field,)+
                    $new_field,
                }
            }
        }
    };
}

define_builder!(Builder2 { v1: T1, v2: T2 });
define_builder!(Builder3 { v1: T1, v2: T2, v3: T3 });
define_builder!(Builder4 { v1: T1, v2: T2, v3: T3, v4: T4 });
define_builder!(Builder5 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5 });
define_builder!(Builder6 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6 });
define_builder!(Builder7 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7 });
define_builder!(Builder8 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7, v8: T8 });
impl_combine!(Builder2 { v1: T1, v2: T2 } => Builder3 { v3: T3 });
impl_combine!(Builder3 { v1: T1, v2: T2, v3: T3 } => Builder4 { v4: T4 });
impl_combine!(Builder4 { v1: T1, v2: T2, v3: T3, v4: T4 } => Builder5 { v5: T5 });
impl_combine!(Builder5 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5 } => Builder6 { v6: T6 });
impl_combine!(Builder6 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6 } => Builder7 { v7: T7 });
impl_combine!(Builder7 { v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7 } => Builder8 { v8: T8 });
