//! Control values: optional, disjunctive, captured and validated results, plus
//! a thread-safe lazy cell.
//!
//! - [`Maybe`]: an optional value
//! - [`Either`]: a right-biased value of one of two types
//! - [`Try`]: a computation outcome capturing errors and recoverable panics
//! - [`Validation`]: a validated value accumulating every error on combine
//! - [`Lazy`]: a memoizing deferred value
//!
//! Each of them is also a sequence of zero or one element (exactly one for
//! `Lazy`) and implements [`Traversable`](crate::typeclass::Traversable).
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::{Either, Maybe, Try};
//!
//! let parsed = Try::of(|| "7".parse::<i32>());
//! let doubled: Maybe<i32> = parsed.map(|n| n * 2).to_maybe();
//! assert_eq!(doubled, Maybe::some(14));
//!
//! let either: Either<String, i32> = Either::right(1);
//! assert_eq!(either.right_option(), Maybe::some(1));
//! ```

mod attempt;
mod either;
mod lazy;
mod maybe;
mod validation;

pub use attempt::Try;
pub use either::Either;
pub use lazy::Lazy;
pub use maybe::Maybe;
pub use validation::{
    Builder2, Builder3, Builder4, Builder5, Builder6, Builder7, Builder8, Validation,
};
