//! Atomic and decomposition patterns.
//!
//! A pattern tests a value and, on success, yields the part it binds: atomic
//! patterns bind the whole value, decomposition patterns bind whatever their
//! inner patterns bind.

use std::marker::PhantomData;

use super::Tagged;
use crate::control::{Either, Maybe, Try, Validation};
use crate::error::Cause;
use crate::tuple::{Tuple2, Tuple3};

/// A test over values of type `T` that extracts an output on success.
pub trait Pattern<T> {
    /// What a successful match binds.
    type Output;

    /// Returns the bound output if `value` matches.
    fn apply(&self, value: &T) -> Option<Self::Output>;
}

// =============================================================================
// Atomic Patterns
// =============================================================================

/// Matches every value. Created by [`any`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl<T: Clone> Pattern<T> for Any {
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        Some(value.clone())
    }
}

/// Matches values equal to a constant. Created by [`eq`].
#[derive(Debug, Clone)]
pub struct Equal<T> {
    expected: T,
}

impl<T: PartialEq + Clone> Pattern<T> for Equal<T> {
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        (*value == self.expected).then(|| value.clone())
    }
}

/// Matches values satisfying a predicate. Created by [`when`].
pub struct When<T, P> {
    predicate: P,
    subject: PhantomData<fn(&T)>,
}

impl<T: Clone, P: Fn(&T) -> bool> Pattern<T> for When<T, P> {
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        (self.predicate)(value).then(|| value.clone())
    }
}

/// Matches values equal to one of a set of candidates. Created by [`is_in`].
#[derive(Debug, Clone)]
pub struct IsIn<T> {
    candidates: Vec<T>,
}

impl<T: PartialEq + Clone> Pattern<T> for IsIn<T> {
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        self.candidates
            .contains(value)
            .then(|| value.clone())
    }
}

/// Matches values of one variant. Created by [`tag`].
#[derive(Debug, Clone)]
pub struct TagIs<G> {
    expected: G,
}

impl<T, G> Pattern<T> for TagIs<G>
where
    T: Tagged<Tag = G> + Clone,
    G: PartialEq,
{
    type Output = T;

    fn apply(&self, value: &T) -> Option<T> {
        (value.tag() == self.expected).then(|| value.clone())
    }
}

/// The wildcard: matches anything and binds the whole value.
#[must_use]
pub const fn any() -> Any {
    Any
}

/// Matches values equal to `expected`.
pub const fn eq<T>(expected: T) -> Equal<T> {
    Equal { expected }
}

/// Matches values for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use fpcore::pattern::{Pattern, when};
///
/// let even = when(|n: &i32| n % 2 == 0);
/// assert_eq!(even.apply(&4), Some(4));
/// assert_eq!(even.apply(&3), None);
/// ```
pub const fn when<T, P>(predicate: P) -> When<T, P>
where
    P: Fn(&T) -> bool,
{
    When {
        predicate,
        subject: PhantomData,
    }
}

/// Matches values equal to any of `candidates`.
pub fn is_in<T, I>(candidates: I) -> IsIn<T>
where
    I: IntoIterator<Item = T>,
{
    IsIn {
        candidates: candidates.into_iter().collect(),
    }
}

/// Matches values whose [`Tagged::tag`] equals `expected`.
pub const fn tag<G>(expected: G) -> TagIs<G> {
    TagIs { expected }
}

// =============================================================================
// Decomposition Patterns
// =============================================================================

macro_rules! define_decomposition {
    ($(#[$meta:meta])* $name:ident, $constructor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<P> {
            inner: P,
        }

        $(#[$meta])*
        pub const fn $constructor<P>(inner: P) -> $name<P> {
            $name { inner }
        }
    };
}

define_decomposition!(
    /// Matches `Maybe::Some` whose value matches the inner pattern.
    SomeOf,
    some
);
define_decomposition!(
    /// Matches `Either::Left` whose value matches the inner pattern.
    LeftOf,
    left
);
define_decomposition!(
    /// Matches `Either::Right` whose value matches the inner pattern.
    RightOf,
    right
);
define_decomposition!(
    /// Matches `Try::Success` whose value matches the inner pattern.
    SuccessOf,
    success
);
define_decomposition!(
    /// Matches `Try::Failure` whose cause matches the inner pattern.
    FailureOf,
    failure
);
define_decomposition!(
    /// Matches `Validation::Valid` whose value matches the inner pattern.
    ValidOf,
    valid
);
define_decomposition!(
    /// Matches `Validation::Invalid` whose error matches the inner pattern.
    InvalidOf,
    invalid
);

impl<T, P: Pattern<T>> Pattern<Maybe<T>> for SomeOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Maybe<T>) -> Option<P::Output> {
        match value {
            Maybe::Some(inner) => self.inner.apply(inner),
            Maybe::None => None,
        }
    }
}

impl<L, R, P: Pattern<L>> Pattern<Either<L, R>> for LeftOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Either<L, R>) -> Option<P::Output> {
        match value {
            Either::Left(inner) => self.inner.apply(inner),
            Either::Right(_) => None,
        }
    }
}

impl<L, R, P: Pattern<R>> Pattern<Either<L, R>> for RightOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Either<L, R>) -> Option<P::Output> {
        match value {
            Either::Right(inner) => self.inner.apply(inner),
            Either::Left(_) => None,
        }
    }
}

impl<T, P: Pattern<T>> Pattern<Try<T>> for SuccessOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Try<T>) -> Option<P::Output> {
        match value {
            Try::Success(inner) => self.inner.apply(inner),
            Try::Failure(_) => None,
        }
    }
}

impl<T, P: Pattern<Cause>> Pattern<Try<T>> for FailureOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Try<T>) -> Option<P::Output> {
        match value {
            Try::Failure(cause) => self.inner.apply(cause),
            Try::Success(_) => None,
        }
    }
}

impl<E, T, P: Pattern<T>> Pattern<Validation<E, T>> for ValidOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Validation<E, T>) -> Option<P::Output> {
        match value {
            Validation::Valid(inner) => self.inner.apply(inner),
            Validation::Invalid(_) => None,
        }
    }
}

impl<E, T, P: Pattern<E>> Pattern<Validation<E, T>> for InvalidOf<P> {
    type Output = P::Output;

    fn apply(&self, value: &Validation<E, T>) -> Option<P::Output> {
        match value {
            Validation::Invalid(error) => self.inner.apply(error),
            Validation::Valid(_) => None,
        }
    }
}

/// Matches `Maybe::None`. Created by [`none`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneOf;

impl<T> Pattern<Maybe<T>> for NoneOf {
    type Output = ();

    fn apply(&self, value: &Maybe<T>) -> Option<()> {
        value.is_empty().then_some(())
    }
}

/// Matches `Maybe::None`.
#[must_use]
pub const fn none() -> NoneOf {
    NoneOf
}

/// Matches a [`Tuple2`] whose components match the component patterns.
#[derive(Debug, Clone)]
pub struct Tuple2Of<P1, P2> {
    first: P1,
    second: P2,
}

impl<A, B, P1, P2> Pattern<Tuple2<A, B>> for Tuple2Of<P1, P2>
where
    P1: Pattern<A>,
    P2: Pattern<B>,
{
    type Output = Tuple2<P1::Output, P2::Output>;

    fn apply(&self, value: &Tuple2<A, B>) -> Option<Self::Output> {
        let first = self.first.apply(&value._1)?;
        let second = self.second.apply(&value._2)?;
        Some(Tuple2::new(first, second))
    }
}

/// Matches a [`Tuple3`] whose components match the component patterns.
#[derive(Debug, Clone)]
pub struct Tuple3Of<P1, P2, P3> {
    first: P1,
    second: P2,
    third: P3,
}

impl<A, B, C, P1, P2, P3> Pattern<Tuple3<A, B, C>> for Tuple3Of<P1, P2, P3>
where
    P1: Pattern<A>,
    P2: Pattern<B>,
    P3: Pattern<C>,
{
    type Output = Tuple3<P1::Output, P2::Output, P3::Output>;

    fn apply(&self, value: &Tuple3<A, B, C>) -> Option<Self::Output> {
        let first = self.first.apply(&value._1)?;
        let second = self.second.apply(&value._2)?;
        let third = self.third.apply(&value._3)?;
        Some(Tuple3::new(first, second, third))
    }
}

/// Matches a pair component-wise.
pub const fn tuple2<P1, P2>(first: P1, second: P2) -> Tuple2Of<P1, P2> {
    Tuple2Of { first, second }
}

/// Matches a triple component-wise.
pub const fn tuple3<P1, P2, P3>(first: P1, second: P2, third: P3) -> Tuple3Of<P1, P2, P3> {
    Tuple3Of {
        first,
        second,
        third,
    }
}
