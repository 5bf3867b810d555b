//! Algebraic traits and the shared sequence algorithms.
//!
//! - [`Semigroup`]: types with an associative `combine`
//! - [`Monoid`]: semigroups with an identity element
//! - [`Sum`], [`Product`]: numeric wrappers selecting the additive or
//!   multiplicative monoid
//! - [`Traversable`]: the algorithm set shared by `Stream`, `Vec` and the
//!   control values
//! - [`Integral`], [`AsFloat`]: numeric capabilities for ranges and averages
//!
//! # Examples
//!
//! ```rust
//! use fpcore::typeclass::{Monoid, Semigroup, Sum};
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//!
//! let numbers = [1, 2, 3].map(Sum::from);
//! assert_eq!(Sum::combine_all(numbers).into_inner(), 6);
//! ```
//!
//! # Method resolution
//!
//! Inherent methods win over trait methods, and `Ord::min`/`Ord::max` are
//! found before [`Traversable::min`]/[`Traversable::max`] on an `Ord`
//! receiver. Use the qualified form `Traversable::max(&values)` there.

mod monoid;
mod numeric;
mod semigroup;
mod traversable;
mod windows;
mod wrappers;

pub use monoid::Monoid;
pub use numeric::{AsFloat, Integral};
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use windows::{SlideBy, Sliding};
pub use wrappers::{Product, Sum};
