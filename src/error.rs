//! Error types shared by every component of the crate.
//!
//! Most operations in this crate report failure as data (an empty
//! [`Maybe`](crate::control::Maybe), a `Left`, a `Failure` or an `Invalid`).
//! The few *forcing* accessors that have no fallback (`get`, `reduce`,
//! `head`, ...) return [`Result`] with the [`Error`] defined here.
//!
//! # Failure classes
//!
//! - [`Error::EmptyValue`]: a forcing accessor was called on an empty,
//!   absent or failed value.
//! - [`Error::NotDefinedAt`]: a [`PartialFunction`](crate::function::PartialFunction)
//!   was applied outside its domain.
//! - [`Error::Match`]: a match expression ran out of cases.
//! - [`Error::Failure`]: the [`Cause`] captured by a `Try` failure.
//!
//! [`FatalSignal`] is not an error value at all: it is a panic payload that
//! [`Try::catching`](crate::control::Try::catching) refuses to capture.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Result alias used by the forcing accessors of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error returned by forcing accessors.
///
/// # Examples
///
/// ```rust
/// use fpcore::Error;
/// use fpcore::control::Maybe;
///
/// let empty: Maybe<i32> = Maybe::none();
/// assert!(matches!(empty.get(), Err(Error::EmptyValue { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A forcing accessor was invoked on an empty value.
    #[error("{operation} on empty value")]
    EmptyValue {
        /// The accessor that failed, e.g. `"Maybe::get"`.
        operation: &'static str,
    },
    /// A partial function was applied outside of its domain.
    #[error("partial function is not defined at {value}")]
    NotDefinedAt {
        /// Debug rendering of the rejected argument.
        value: String,
    },
    /// No case of a match expression matched.
    #[error(transparent)]
    Match(#[from] MatchError),
    /// The failure captured by a `Try`.
    #[error("captured failure: {0}")]
    Failure(Cause),
}

impl Error {
    /// Creates an [`Error::EmptyValue`] for the given accessor.
    #[inline]
    pub const fn empty(operation: &'static str) -> Self {
        Self::EmptyValue { operation }
    }

    /// Creates an [`Error::NotDefinedAt`] from the rejected argument.
    pub fn not_defined_at<A: fmt::Debug>(value: &A) -> Self {
        Self::NotDefinedAt {
            value: format!("{value:?}"),
        }
    }
}

/// Raised when `Match::of` exhausts its cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no case matched value {value}")]
pub struct MatchError {
    /// Debug rendering of the unmatched value.
    pub value: String,
}

impl MatchError {
    /// Creates a match error for the given value.
    pub fn new<T: fmt::Debug>(value: &T) -> Self {
        Self {
            value: format!("{value:?}"),
        }
    }
}

// =============================================================================
// Cause
// =============================================================================

/// The failure payload carried by a `Try` failure.
///
/// A `Cause` is a cheaply cloneable, shared handle to any
/// `std::error::Error + Send + Sync`. Its class can be inspected with
/// [`Cause::is`] and [`Cause::downcast_ref`].
///
/// # Examples
///
/// ```rust
/// use fpcore::error::{Cause, PanicFailure};
/// use std::num::ParseIntError;
///
/// let cause = Cause::new("x".parse::<i32>().unwrap_err());
/// assert!(cause.is::<ParseIntError>());
/// assert!(!cause.is::<PanicFailure>());
/// ```
#[derive(Clone)]
pub struct Cause {
    error: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Cause {
    /// Wraps an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            error: Arc::new(error),
        }
    }

    /// Creates a cause from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(MessageFailure(message.into()))
    }

    /// Converts a caught panic payload into a cause.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::new(PanicFailure::from_payload(payload))
    }

    /// Returns `true` if the wrapped error is of type `E`.
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.error.is::<E>()
    }

    /// Returns the wrapped error as `E` if it has that type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// Returns the wrapped error.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.error
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Cause").field(&self.error).finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, formatter)
    }
}

/// Two causes are equal when they share the same error or render the same.
impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.error, &other.error) || self.to_string() == other.to_string()
    }
}

impl Eq for Cause {}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// A failure described only by a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MessageFailure(pub String);

/// A recoverable panic captured by `Try::catching`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct PanicFailure {
    /// The panic message, or a placeholder for non-string payloads.
    pub message: String,
}

impl PanicFailure {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string panic payload>".to_string());
        Self { message }
    }
}

// =============================================================================
// FatalSignal
// =============================================================================

/// A panic payload that must never be captured.
///
/// Raise it with [`FatalSignal::raise`]; `Try::catching` resumes the unwind
/// instead of turning it into a `Failure`.
///
/// # Examples
///
/// ```rust
/// use fpcore::control::Try;
/// use fpcore::error::FatalSignal;
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// let outcome = catch_unwind(AssertUnwindSafe(|| {
///     Try::catching(|| -> i32 { FatalSignal::raise("resources exhausted") })
/// }));
/// assert!(outcome.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fatal signal: {reason}")]
pub struct FatalSignal {
    /// Why the computation cannot continue.
    pub reason: String,
}

impl FatalSignal {
    /// Creates a fatal signal.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Unwinds the current thread with a `FatalSignal` payload.
    pub fn raise(reason: impl Into<String>) -> ! {
        std::panic::panic_any(Self::new(reason))
    }

    /// Returns `true` if a caught panic payload is a fatal signal.
    pub fn is_payload(payload: &(dyn Any + Send)) -> bool {
        payload.is::<Self>()
    }
}
