//! Structural pattern matching over values and control types.
//!
//! A [`Match`] tries its [`Case`]s in order. Each case pairs a [`Pattern`]
//! with a handler; the first pattern that matches hands what it binds to its
//! handler. [`Match::of`] fails with [`Error::Match`](crate::Error::Match)
//! when nothing matches, [`Match::option`] returns `Maybe::None` instead.
//!
//! Patterns:
//!
//! - atomic: [`any`], [`eq`], [`when`], [`is_in`], [`tag`]
//! - decomposition: [`some`], [`none`], [`left`], [`right`], [`success`],
//!   [`failure`], [`valid`], [`invalid`], [`tuple2`], [`tuple3`]
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Try;
//! use fpcore::error::Cause;
//! use fpcore::pattern::{Match, any, case, failure, is_in, success, tuple2};
//! use fpcore::tuple::Tuple2;
//!
//! let greeting = Try::success(Tuple2::new("hello", 3_usize));
//! let rendered = Match::new(greeting).of([
//!     case(
//!         success(tuple2(is_in(["hello", "world"]), any())),
//!         |pair: Tuple2<&str, usize>| pair._1.repeat(pair._2),
//!     ),
//!     case(failure(any()), |cause: Cause| cause.to_string()),
//! ]);
//! assert_eq!(rendered, Ok(String::from("hellohellohello")));
//! ```

mod matcher;
mod patterns;
mod tag;

pub use matcher::{Case, Match, case, matching};
pub use patterns::{
    Any, Equal, FailureOf, InvalidOf, IsIn, LeftOf, NoneOf, Pattern, RightOf, SomeOf, SuccessOf,
    TagIs, Tuple2Of, Tuple3Of, ValidOf, When, any, eq, failure, invalid, is_in, left, none, right,
    some, success, tag, tuple2, tuple3, valid, when,
};
pub use tag::{Tag, Tagged};
