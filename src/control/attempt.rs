//! Try type - the captured outcome of a computation that may fail.
//!
//! A [`Try`] is either `Success(T)` or `Failure(Cause)`. [`Try::of`] runs a
//! fallible supplier and captures its `Err`; [`Try::catching`] also captures
//! panics, which are the recoverable failure signal of Rust code.
//!
//! Some failures must never be captured. A panic whose payload is a
//! [`FatalSignal`] resumes unwinding through every capturing operation, and
//! process-level failures (stack overflow, allocation failure) abort before
//! any handler could observe them.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::{Either, Try};
//! use fpcore::error::PanicFailure;
//!
//! let divided = Try::catching(|| {
//!     let divisor = std::hint::black_box(0);
//!     1 / divisor
//! });
//! assert!(divided.is_failure());
//!
//! let either = divided.to_either();
//! assert!(matches!(either, Either::Left(ref cause) if cause.is::<PanicFailure>()));
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::{Either, Maybe, Validation};
use crate::error::{Cause, Error, FatalSignal};

/// The outcome of a computation: a value or the cause of its failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Cause),
}

/// Turns a caught panic payload into a failure cause.
///
/// A [`FatalSignal`] payload is never captured: unwinding resumes.
fn capture(payload: Box<dyn Any + Send>) -> Cause {
    if FatalSignal::is_payload(&*payload) {
        tracing::warn!("fatal signal is not captured, resuming unwind");
        panic::resume_unwind(payload);
    }
    let cause = Cause::from_panic(&*payload);
    tracing::debug!(%cause, "captured panic as failure");
    cause
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs `supplier` now and captures its `Err` as a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Try;
    /// use std::num::ParseIntError;
    ///
    /// let parsed = Try::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed, Try::success(42));
    ///
    /// let failed = Try::of(|| "x".parse::<i32>());
    /// assert!(failed.get_cause().is_ok_and(|cause| cause.is::<ParseIntError>()));
    /// ```
    pub fn of<E, F>(supplier: F) -> Self
    where
        E: Into<Cause>,
        F: FnOnce() -> Result<T, E>,
    {
        match supplier() {
            Ok(value) => Self::Success(value),
            Err(error) => {
                let cause = error.into();
                tracing::debug!(%cause, "captured error as failure");
                Self::Failure(cause)
            }
        }
    }

    /// Runs `supplier` now and captures a panic as a failure.
    ///
    /// # Panics
    ///
    /// A panic carrying a [`FatalSignal`] payload is resumed, not captured.
    pub fn catching<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(capture(payload)),
        }
    }

    /// Creates a success.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure from any error.
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Self::Failure(cause.into())
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Iterates over the value of a success.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        match self {
            Self::Success(value) => Some(value).into_iter(),
            Self::Failure(_) => None.into_iter(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or [`Error::Failure`] carrying the cause.
    ///
    /// # Errors
    ///
    /// Fails for a `Failure`.
    pub fn get(self) -> crate::Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(Error::Failure(cause)),
        }
    }

    /// Returns the cause, or [`Error::EmptyValue`] for a success.
    ///
    /// # Errors
    ///
    /// Fails for a `Success`.
    pub fn get_cause(self) -> crate::Result<Cause> {
        match self {
            Self::Success(_) => Err(Error::empty("Try::get_cause")),
            Self::Failure(cause) => Ok(cause),
        }
    }

    /// Returns the value or `other`.
    pub fn get_or_else(self, other: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// Returns the value, or computes one from the cause.
    pub fn get_or_else_get<F>(self, function: F) -> T
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => function(cause),
        }
    }

    /// Returns the value, or an error built from the cause.
    ///
    /// # Errors
    ///
    /// Returns `function(cause)` for a `Failure`.
    pub fn get_or_else_throw<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce(Cause) -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(function(cause)),
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
            Self::Success(value) => Ok(value),
            Self::Failure(_) => fallback(),
        }
    }

    /// Folds both cases into one value.
    pub fn fold<U, F, S>(self, on_failure: F, on_success: S) -> U
    where
        F: FnOnce(Cause) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the value of a success.
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transforms the value with a fallible mapper, capturing its `Err`.
    pub fn map_try<U, E, F>(self, function: F) -> Try<U>
    where
        E: Into<Cause>,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => Try::of(|| function(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Chains a computation that may itself fail.
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Turns a success failing `predicate` into a failure.
    ///
    /// The new failure's cause is an [`Error::EmptyValue`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(Cause::new(Error::empty("Try::filter")))
                }
            }
            Self::Failure(_) => self,
        }
    }

    /// Replaces a failure with a value computed from its cause.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(cause) => Self::Success(function(cause)),
        }
    }

    /// Replaces a failure with another `Try` computed from its cause.
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(cause) => function(cause),
        }
    }

    // =========================================================================
    // Side Effects & Conversions
    // =========================================================================

    /// Runs `action` on the value of a success and returns `self` unchanged.
    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the cause of a failure and returns `self` unchanged.
    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Cause),
    {
        if let Self::Failure(cause) = &self {
            action(cause);
        }
        self
    }

    /// `Success` becomes `Right`, `Failure` becomes `Left(cause)`.
    pub fn to_either(self) -> Either<Cause, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(cause) => Either::Left(cause),
        }
    }

    /// `Success` becomes `Valid`, `Failure` becomes `Invalid(cause)`.
    pub fn to_validation(self) -> Validation<Cause, T> {
        match self {
            Self::Success(value) => Validation::Valid(value),
            Self::Failure(cause) => Validation::Invalid(cause),
        }
    }

    /// Keeps the value of a success, dropping the cause of a failure.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }
}

impl<T, E: Into<Cause>> From<Result<T, E>> for Try<T> {
    fn from(result: Result<T, E>) -> Self {
        Self::of(|| result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MessageFailure, PanicFailure};
    use rstest::rstest;
    use std::num::ParseIntError;

    fn failed() -> Try<i32> {
        Try::failure(MessageFailure("boom".to_string()))
    }

    #[rstest]
    fn of_captures_error() {
        let result = Try::of(|| "nope".parse::<i32>());
        assert!(result.is_failure());
        assert!(result.get_cause().is_ok_and(|cause| cause.is::<ParseIntError>()));
    }

    #[rstest]
    fn catching_captures_panic_message() {
        let result: Try<i32> = Try::catching(|| panic!("kaput"));
        let cause = result.get_cause().expect("failure expected");
        assert_eq!(
            cause.downcast_ref::<PanicFailure>().map(|failure| failure.message.as_str()),
            Some("kaput")
        );
    }

    #[rstest]
    fn catching_resumes_fatal_signal() {
        let outcome = panic::catch_unwind(|| {
            Try::catching(|| -> i32 { FatalSignal::raise("out of memory") })
        });
        let payload = outcome.expect_err("fatal signal must propagate");
        assert!(FatalSignal::is_payload(&*payload));
    }

    #[rstest]
    fn get_returns_failure_error() {
        assert_eq!(Try::success(1).get(), Ok(1));
        assert!(matches!(failed().get(), Err(Error::Failure(cause)) if cause.to_string() == "boom"));
        assert_eq!(Try::success(1).get_cause(), Err(Error::empty("Try::get_cause")));
    }

    #[rstest]
    fn fallbacks_receive_cause() {
        assert_eq!(failed().get_or_else(0), 0);
        assert_eq!(failed().get_or_else_get(|cause| cause.to_string().len() as i32), 4);
        assert_eq!(failed().get_or_else_throw(|cause| cause.to_string()), Err("boom".to_string()));
        assert_eq!(failed().get_or_else_try(|| Err::<i32, _>("fallback failed")), Err("fallback failed"));
    }

    #[rstest]
    fn map_try_captures_mapper_error() {
        let mapped = Try::success("12x").map_try(str::parse::<i32>);
        assert!(mapped.is_failure());
        assert_eq!(Try::success("12").map_try(str::parse::<i32>), Try::success(12));
    }

    #[rstest]
    #[case(4, true)]
    #[case(3, false)]
    fn filter_failure_is_empty_value(#[case] value: i32, #[case] kept: bool) {
        let filtered = Try::success(value).filter(|n| n % 2 == 0);
        assert_eq!(filtered.is_success(), kept);
        if !kept {
            let cause = filtered.get_cause().expect("failure expected");
            assert_eq!(cause.downcast_ref::<Error>(), Some(&Error::empty("Try::filter")));
        }
    }

    #[rstest]
    fn recover_replaces_failure_only() {
        assert_eq!(failed().recover(|_| 7), Try::success(7));
        assert_eq!(Try::success(1).recover(|_| 7), Try::success(1));
        assert_eq!(failed().recover_with(|_| Try::success(8)), Try::success(8));
    }

    #[rstest]
    fn callbacks_fire_on_matching_case() {
        let mut log = Vec::new();
        let _ = Try::success(1).on_success(|_| log.push("success")).on_failure(|_| log.push("failure"));
        let _ = failed().on_success(|_| log.push("success")).on_failure(|_| log.push("failure"));
        assert_eq!(log, vec!["success", "failure"]);
    }

    #[rstest]
    fn conversions() {
        assert_eq!(Try::success(1).to_either(), Either::right(1));
        assert!(failed().to_either().is_left());
        assert_eq!(failed().to_maybe(), Maybe::none());
        assert!(failed().to_validation().is_invalid());
        assert_eq!(Try::from(Ok::<_, ParseIntError>(3)), Try::success(3));
    }
}
