//! Persistent (immutable) data structures.
//!
//! - [`Stream`]: persistent lazy sequence, finite or unbounded
//!
//! # Structural Sharing
//!
//! Prepending, appending and every lazy transformation return a new stream
//! that shares the nodes of its source. Forcing a shared node caches its tail
//! for every stream that refers to it.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::persistent::Stream;
//!
//! let evens = Stream::from(0).filter(|n| n % 2 == 0);
//! assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
//! ```

mod stream;

pub use stream::{IntoIter, Iter, Stream};
