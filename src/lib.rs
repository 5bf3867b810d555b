//! # fpcore
//!
//! Immutable, composable value types and the algorithms shared over them.
//!
//! ## Overview
//!
//! - **Tuples**: [`tuple::Tuple1`] through [`tuple::Tuple8`] with per-component
//!   mapping, concatenation and the [`tuple!`] macro
//! - **Control values**: [`control::Maybe`], [`control::Either`],
//!   [`control::Try`], [`control::Validation`] and the memoizing
//!   [`control::Lazy`]
//! - **Persistent stream**: [`persistent::Stream`], a lazily evaluated
//!   cons-list that may be unbounded
//! - **Traversable**: [`typeclass::Traversable`], one algorithm set for
//!   streams, vectors and the control values
//! - **Pattern matching**: `pattern::Match` with atomic and decomposition
//!   patterns
//! - **Functions**: partial functions, lifting, memoization, composition and currying
//!
//! ## Feature Flags
//!
//! - `pattern` (default): the pattern matching engine
//! - `serde`: `Serialize`/`Deserialize` for tuples, `Maybe`, `Either` and
//!   `Validation`
//! - `full`: every feature
//!
//! ## Logging
//!
//! Lazy evaluation, captured failures and failed matches are reported through
//! [`tracing`] events. The crate never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use fpcore::prelude::*;
//!
//! let evens: Stream<u32> = Stream::from(0).filter(|n| n % 2 == 0);
//! let first = evens.take(4);
//! assert_eq!(first.sum(), 12);
//! assert_eq!(first.mk_string_with(","), "0,2,4,6");
//!
//! let parsed = Try::of(|| "42".parse::<i32>());
//! assert_eq!(parsed.to_maybe(), Maybe::some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types, the algorithm traits and, with the `pattern`
/// feature, the matching engine.
///
/// # Usage
///
/// ```rust
/// use fpcore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::{Cause, Error, Result};
    pub use crate::function::{
        PartialFunction, and_then, compose, flip, lift, lift_try, memoized, partial2, tupled2,
    };
    pub use crate::persistent::Stream;
    pub use crate::tuple::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "pattern")]
    pub use crate::pattern::*;
}

pub mod control;
pub mod error;
pub mod function;
pub mod persistent;
pub mod tuple;
pub mod typeclass;

#[cfg(feature = "pattern")]
pub mod pattern;

pub use error::{Error, Result};
