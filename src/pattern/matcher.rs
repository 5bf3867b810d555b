//! The `Match` builder and its cases.

use std::fmt;

use super::Pattern;
use crate::control::Maybe;
use crate::error::{Error, MatchError, Result};

/// One arm of a match: a pattern paired with the handler for its output.
///
/// Created by [`case`].
pub struct Case<'a, T, R> {
    run: Box<dyn FnOnce(&T) -> Option<R> + 'a>,
}

impl<T, R> Case<'_, T, R> {
    fn try_apply(self, value: &T) -> Option<R> {
        (self.run)(value)
    }
}

impl<T, R> fmt::Debug for Case<'_, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Case(..)")
    }
}

/// Pairs `pattern` with the `handler` receiving what the pattern binds.
pub fn case<'a, T, P, H, R>(pattern: P, handler: H) -> Case<'a, T, R>
where
    T: 'a,
    R: 'a,
    P: Pattern<T> + 'a,
    H: FnOnce(P::Output) -> R + 'a,
{
    Case {
        run: Box::new(move |value: &T| pattern.apply(value).map(handler)),
    }
}

/// A value awaiting its cases.
///
/// # Examples
///
/// ```rust
/// use fpcore::pattern::{Match, any, case, eq, when};
///
/// let describe = |n: i32| {
///     Match::new(n).of([
///         case(eq(0), |_| String::from("zero")),
///         case(when(|n: &i32| *n < 0), |_| String::from("negative")),
///         case(any(), |n: i32| format!("positive {n}")),
///     ])
/// };
///
/// assert_eq!(describe(0), Ok(String::from("zero")));
/// assert_eq!(describe(-3), Ok(String::from("negative")));
/// assert_eq!(describe(5), Ok(String::from("positive 5")));
/// ```
#[derive(Debug, Clone)]
#[must_use = "a match does nothing until its cases are given"]
pub struct Match<T> {
    value: T,
}

/// Begins a match on `value`; same as [`Match::new`].
pub const fn matching<T>(value: T) -> Match<T> {
    Match::new(value)
}

impl<T> Match<T> {
    /// Begins a match on `value`.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Runs the handler of the first matching case, or returns `None` when no
    /// case matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Maybe;
    /// use fpcore::pattern::{Match, case, eq};
    ///
    /// let hit = Match::new(2).option([case(eq(1), |_| "one")]);
    /// assert_eq!(hit, Maybe::none());
    /// ```
    pub fn option<'a, R, I>(self, cases: I) -> Maybe<R>
    where
        I: IntoIterator<Item = Case<'a, T, R>>,
        T: 'a,
    {
        for case in cases {
            if let Some(result) = case.try_apply(&self.value) {
                return Maybe::Some(result);
            }
        }
        Maybe::None
    }
}

impl<T: fmt::Debug> Match<T> {
    /// Runs the handler of the first matching case.
    ///
    /// Cases are tried in order; later cases are never evaluated once one
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Match`] when no case matches.
    pub fn of<'a, R, I>(self, cases: I) -> Result<R>
    where
        I: IntoIterator<Item = Case<'a, T, R>>,
        T: 'a,
    {
        for case in cases {
            if let Some(result) = case.try_apply(&self.value) {
                return Ok(result);
            }
        }
        let error = MatchError::new(&self.value);
        tracing::debug!(value = %error.value, "no case matched");
        Err(Error::Match(error))
    }
}
