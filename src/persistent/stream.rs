//! Persistent lazy sequence.
//!
//! This module provides [`Stream`], an immutable cons-list whose tails are
//! computed on demand. A stream can be finite or unbounded; an unbounded
//! stream only realizes the positions a consumer actually pulls.
//!
//! # Overview
//!
//! Every node holds its head eagerly and its tail as a [`Lazy`] cell:
//!
//! - forcing a tail caches the next node on the current one, so traversing
//!   the same stream twice (or from several threads) runs each generator step
//!   at most once
//! - transformations such as [`Stream::map`], [`Stream::take`] and
//!   [`Stream::zip`] return new streams sharing the source nodes and force
//!   nothing beyond what their own consumer requests
//! - the empty stream carries no node at all
//!
//! # Examples
//!
//! ```rust
//! use fpcore::persistent::Stream;
//!
//! let naturals = Stream::from(0);
//! let squares = naturals.map(|n| n * n).take(4);
//! assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
//!
//! // Only the forced prefix is shown
//! let lazy = Stream::cons(1, || Stream::of([2, 3]));
//! assert_eq!(lazy.to_string(), "Stream(1, ?)");
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! s1: 1 -> [2 -> ?]
//! s2 = s1.prepend(0): 0 -> [1 -> [2 -> ?]]  // shares every node of s1
//! ```

use std::fmt;
use std::sync::Arc;

use crate::control::{Lazy, Maybe};
use crate::error::{Error, Result};
use crate::tuple::Tuple2;
use crate::typeclass::{Integral, Traversable};

/// A non-empty position: the head value and the deferred rest.
struct Cons<T> {
    head: T,
    tail: Lazy<Stream<T>>,
}

/// A persistent, lazily evaluated sequence.
///
/// Cloning a stream is O(1) and shares every node, evaluated or not.
///
/// # Time Complexity
///
/// | Operation  | Complexity           |
/// |------------|----------------------|
/// | `empty`    | O(1)                 |
/// | `cons`     | O(1)                 |
/// | `head`     | O(1)                 |
/// | `tail`     | O(1) plus one step   |
/// | `take`     | O(1) until consumed  |
/// | `map`      | O(1) until consumed  |
/// | `drop(n)`  | O(n)                 |
/// | `reverse`  | O(n)                 |
pub struct Stream<T> {
    node: Option<Arc<Cons<T>>>,
}

/// Where a progression stops.
#[derive(Clone, Copy)]
enum Limit<N> {
    Unbounded,
    Exclusive(N),
    Inclusive(N),
}

impl<N: Integral> Limit<N> {
    fn admits(self, value: N, ascending: bool) -> bool {
        match (self, ascending) {
            (Self::Unbounded, _) => true,
            (Self::Exclusive(end), true) => value < end,
            (Self::Exclusive(end), false) => value > end,
            (Self::Inclusive(end), true) => value <= end,
            (Self::Inclusive(end), false) => value >= end,
        }
    }
}

impl<T> Stream<T> {
    /// Creates the empty stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let stream: Stream<i32> = Stream::empty();
    /// assert!(stream.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// Creates a stream from a head and a thunk computing the rest.
    ///
    /// The thunk runs at most once, the first time the tail is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let stream = Stream::cons(1, || Stream::cons(2, Stream::empty));
    /// assert_eq!(stream.to_vec(), vec![1, 2]);
    /// ```
    pub fn cons<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self::linked(head, Lazy::of(tail))
    }

    fn strict_cons(head: T, tail: Self) -> Self {
        Self::linked(head, Lazy::evaluated(tail))
    }

    fn linked(head: T, tail: Lazy<Self>) -> Self {
        Self {
            node: Some(Arc::new(Cons { head, tail })),
        }
    }

    /// Creates a fully evaluated stream from the given values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let stream = Stream::of(vec!['a', 'b']);
    /// assert_eq!(stream.head(), Ok(&'a'));
    /// ```
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(Self::empty(), |tail, head| Self::strict_cons(head, tail))
    }

    /// Builds a finite stream from a seed, emitting values in the reverse of
    /// the order they were generated.
    ///
    /// `step` returns `None` to stop, or the next seed paired with a value.
    /// Generation runs eagerly until `step` stops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Maybe;
    /// use fpcore::persistent::Stream;
    /// use fpcore::tuple::Tuple2;
    ///
    /// let stream = Stream::unfold_left(3, |n| Maybe::when(n > 0, Tuple2::new(n - 1, n)));
    /// assert_eq!(stream.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn unfold_left<S, F>(seed: S, mut step: F) -> Self
    where
        F: FnMut(S) -> Maybe<Tuple2<S, T>>,
    {
        let mut stream = Self::empty();
        let mut seed = seed;
        while let Maybe::Some(Tuple2 { _1: next, _2: value }) = step(seed) {
            stream = Self::strict_cons(value, stream);
            seed = next;
        }
        stream
    }

    /// Creates a stream of `count` values from repeated calls to `supplier`.
    pub fn fill<F>(count: usize, mut supplier: F) -> Self
    where
        F: FnMut() -> T,
    {
        Self::of((0..count).map(|_| supplier()))
    }

    /// Creates a stream of `function(0)` through `function(count - 1)`.
    pub fn tabulate<F>(count: usize, function: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::of((0..count).map(function))
    }

    /// Returns `true` if the stream has no elements. Never forces anything.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] on the empty stream.
    pub fn head(&self) -> Result<&T> {
        self.node
            .as_deref()
            .map(|cons| &cons.head)
            .ok_or(Error::empty("Stream::head"))
    }

    /// Returns every element after the first, forcing the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] on the empty stream.
    pub fn tail(&self) -> Result<Self> {
        self.node
            .as_deref()
            .map(|cons| cons.tail.get().clone())
            .ok_or(Error::empty("Stream::tail"))
    }

    /// Returns every element after the first, or `None` on the empty stream.
    pub fn tail_option(&self) -> Maybe<Self> {
        Maybe::of(self.tail().ok())
    }

    /// Iterates over references to the elements, forcing each tail only when
    /// the next element is requested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let total: u64 = Stream::range(1u64, 5).iter().sum();
    /// assert_eq!(total, 10);
    /// ```
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            pending: Pending::Start(self),
        }
    }
}

impl<N: Integral> Stream<N> {
    fn progression(start: N, step: N, limit: Limit<N>) -> Self {
        let ascending = step >= N::ZERO;
        if !limit.admits(start, ascending) {
            return Self::empty();
        }
        Self::cons(start, move || match start.checked_step(step) {
            Some(next) => Self::progression(next, step, limit),
            None => Self::empty(),
        })
    }

    /// Creates the unbounded progression `start, start + 1, ...`.
    ///
    /// The progression ends at the numeric type's maximum instead of
    /// wrapping around.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    /// use fpcore::typeclass::Traversable;
    ///
    /// let naturals = Stream::from(0);
    /// assert!(!naturals.has_definite_size());
    /// assert_eq!(naturals.take(4).to_vec(), vec![0, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from(start: N) -> Self {
        Self::progression(start, N::ONE, Limit::Unbounded)
    }

    /// Creates the unbounded progression `start, start + step, ...`.
    #[must_use]
    pub fn from_by(start: N, step: N) -> Self {
        Self::progression(start, step, Limit::Unbounded)
    }

    /// Creates `from, from + 1, ...` up to but excluding `to_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// assert_eq!(Stream::range(0, 3).to_vec(), vec![0, 1, 2]);
    /// assert!(Stream::range(3, 3).is_empty());
    /// ```
    #[must_use]
    pub fn range(from: N, to_exclusive: N) -> Self {
        Self::range_by(from, to_exclusive, N::ONE)
    }

    /// Creates `from, from + 1, ...` up to and including `to_inclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// assert_eq!(Stream::range_closed(0, 3).to_vec(), vec![0, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn range_closed(from: N, to_inclusive: N) -> Self {
        Self::range_closed_by(from, to_inclusive, N::ONE)
    }

    /// Creates `from, from + step, ...` while before `to_exclusive`.
    ///
    /// A negative step counts down. A zero step yields the empty stream.
    #[must_use]
    pub fn range_by(from: N, to_exclusive: N, step: N) -> Self {
        if step == N::ZERO {
            return Self::empty();
        }
        Self::progression(from, step, Limit::Exclusive(to_exclusive))
    }

    /// Creates `from, from + step, ...` while not past `to_inclusive`.
    ///
    /// A negative step counts down. A zero step yields the empty stream.
    #[must_use]
    pub fn range_closed_by(from: N, to_inclusive: N, step: N) -> Self {
        if step == N::ZERO {
            return Self::empty();
        }
        Self::progression(from, step, Limit::Inclusive(to_inclusive))
    }
}

impl<T: Clone + Send + Sync + 'static> Stream<T> {
    // =========================================================================
    // Generators
    // =========================================================================

    /// Creates the unbounded stream `seed, next(seed), next(next(seed)), ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let powers = Stream::iterate(1u32, |n| n * 2);
    /// assert_eq!(powers.take(5).to_vec(), vec![1, 2, 4, 8, 16]);
    /// ```
    pub fn iterate<F>(seed: T, next: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        Self::iterate_shared(seed, Arc::new(next))
    }

    fn iterate_shared<F>(seed: T, next: Arc<F>) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        let head = seed.clone();
        Self::cons(head, move || {
            let following = next(&seed);
            Self::iterate_shared(following, next)
        })
    }

    /// Creates an unbounded stream calling `supplier` once per position.
    pub fn continually<F>(supplier: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::continually_shared(Arc::new(supplier))
    }

    fn continually_shared<F>(supplier: Arc<F>) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::cons(supplier(), move || Self::continually_shared(supplier))
    }

    /// Creates a stream from a seed, lazily.
    ///
    /// `step` returns `None` to stop, or a value paired with the next seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Maybe;
    /// use fpcore::persistent::Stream;
    /// use fpcore::tuple::Tuple2;
    ///
    /// let countdown = Stream::unfold_right(3, |n| Maybe::when(n > 0, Tuple2::new(n, n - 1)));
    /// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn unfold_right<S, F>(seed: S, step: F) -> Self
    where
        S: Send + 'static,
        F: Fn(S) -> Maybe<Tuple2<T, S>> + Send + Sync + 'static,
    {
        Self::unfold_shared(seed, Arc::new(step))
    }

    fn unfold_shared<S, F>(seed: S, step: Arc<F>) -> Self
    where
        S: Send + 'static,
        F: Fn(S) -> Maybe<Tuple2<T, S>> + Send + Sync + 'static,
    {
        match step(seed) {
            Maybe::Some(Tuple2 { _1: value, _2: next }) => {
                Self::cons(value, move || Self::unfold_shared(next, step))
            }
            Maybe::None => Self::empty(),
        }
    }

    // =========================================================================
    // Lazy Transformations
    // =========================================================================

    /// Returns the first `count` elements.
    ///
    /// The element after the last one taken is never computed.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        match self.node.as_deref() {
            None => Self::empty(),
            Some(_) if count == 0 => Self::empty(),
            Some(cons) if count == 1 => Self::strict_cons(cons.head.clone(), Self::empty()),
            Some(cons) => {
                let tail = cons.tail.clone();
                Self::cons(cons.head.clone(), move || tail.get().take(count - 1))
            }
        }
    }

    /// Returns the longest prefix whose elements satisfy `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.take_while_shared(Arc::new(predicate))
    }

    fn take_while_shared<P>(&self, predicate: Arc<P>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        match self.node.as_deref() {
            Some(cons) if predicate(&cons.head) => {
                let tail = cons.tail.clone();
                Self::cons(cons.head.clone(), move || {
                    tail.get().take_while_shared(predicate)
                })
            }
            _ => Self::empty(),
        }
    }

    /// Skips the first `count` elements, forcing only those.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        let mut current = self;
        for _ in 0..count {
            match current.node.as_deref() {
                Some(cons) => current = cons.tail.get(),
                None => break,
            }
        }
        current.clone()
    }

    /// Skips the longest prefix whose elements satisfy `predicate`.
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Some(cons) = current.node.as_deref() {
            if !predicate(&cons.head) {
                break;
            }
            current = cons.tail.get();
        }
        current.clone()
    }

    /// Applies `mapper` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let labels = Stream::of([1, 2]).map(|n| format!("#{n}"));
    /// assert_eq!(labels.to_vec(), vec!["#1", "#2"]);
    /// ```
    pub fn map<U, F>(&self, mapper: F) -> Stream<U>
    where
        U: Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.map_shared(Arc::new(mapper))
    }

    fn map_shared<U, F>(&self, mapper: Arc<F>) -> Stream<U>
    where
        U: Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        match self.node.as_deref() {
            None => Stream::empty(),
            Some(cons) => {
                let tail = cons.tail.clone();
                let head = mapper(cons.head.clone());
                Stream::cons(head, move || tail.get().map_shared(mapper))
            }
        }
    }

    /// Keeps the elements satisfying `predicate`.
    ///
    /// Finding the first kept element forces every element before it; on an
    /// unbounded stream with no further matches this never returns.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter_shared(Arc::new(predicate))
    }

    fn filter_shared<P>(&self, predicate: Arc<P>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let mut current = self;
        while let Some(cons) = current.node.as_deref() {
            if predicate(&cons.head) {
                let tail = cons.tail.clone();
                return Self::cons(cons.head.clone(), move || {
                    tail.get().filter_shared(predicate)
                });
            }
            current = cons.tail.get();
        }
        Self::empty()
    }

    /// Maps every element to a stream and concatenates the results lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// let repeated = Stream::from(1).flat_map(|n| Stream::fill(n, || n)).take(6);
    /// assert_eq!(repeated.to_vec(), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<U, F>(&self, mapper: F) -> Stream<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T) -> Stream<U> + Send + Sync + 'static,
    {
        self.flat_map_shared(Arc::new(mapper))
    }

    fn flat_map_shared<U, F>(&self, mapper: Arc<F>) -> Stream<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T) -> Stream<U> + Send + Sync + 'static,
    {
        let mut current = self;
        while let Some(cons) = current.node.as_deref() {
            let inner = mapper(cons.head.clone());
            if !inner.is_empty() {
                let tail = cons.tail.clone();
                return inner.append_lazy(Lazy::of(move || tail.get().flat_map_shared(mapper)));
            }
            current = cons.tail.get();
        }
        Stream::empty()
    }

    /// Pairs the elements with those of `other`, stopping at the shorter
    /// stream.
    pub fn zip<U>(&self, other: &Stream<U>) -> Stream<Tuple2<T, U>>
    where
        U: Clone + Send + Sync + 'static,
    {
        match (self.node.as_deref(), other.node.as_deref()) {
            (Some(left), Some(right)) => {
                let left_tail = left.tail.clone();
                let right_tail = right.tail.clone();
                Stream::cons(
                    Tuple2::new(left.head.clone(), right.head.clone()),
                    move || left_tail.get().zip(right_tail.get()),
                )
            }
            _ => Stream::empty(),
        }
    }

    /// Pairs the elements with those of `other`, padding the shorter stream
    /// with `this_pad` or `that_pad`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    /// use fpcore::tuple::Tuple2;
    ///
    /// let zipped = Stream::of([1, 2, 3]).zip_all(&Stream::of(['a']), 0, '_');
    /// assert_eq!(
    ///     zipped.to_vec(),
    ///     vec![Tuple2::new(1, 'a'), Tuple2::new(2, '_'), Tuple2::new(3, '_')]
    /// );
    /// ```
    pub fn zip_all<U>(&self, other: &Stream<U>, this_pad: T, that_pad: U) -> Stream<Tuple2<T, U>>
    where
        U: Clone + Send + Sync + 'static,
    {
        let (left, right) = (self.node.as_deref(), other.node.as_deref());
        if left.is_none() && right.is_none() {
            return Stream::empty();
        }
        let head = Tuple2::new(
            left.map_or_else(|| this_pad.clone(), |cons| cons.head.clone()),
            right.map_or_else(|| that_pad.clone(), |cons| cons.head.clone()),
        );
        let left_tail = left.map_or_else(|| Lazy::evaluated(Self::empty()), |cons| cons.tail.clone());
        let right_tail =
            right.map_or_else(|| Lazy::evaluated(Stream::empty()), |cons| cons.tail.clone());
        Stream::cons(head, move || {
            left_tail.get().zip_all(right_tail.get(), this_pad, that_pad)
        })
    }

    /// Pairs every element with its index.
    #[must_use]
    pub fn zip_with_index(&self) -> Stream<Tuple2<T, usize>> {
        self.zip(&Stream::from(0))
    }

    /// Adds `element` after the last element.
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        self.append_all(Self::strict_cons(element, Self::empty()))
    }

    /// Concatenates `other` after the last element, lazily.
    #[must_use]
    pub fn append_all(&self, other: Self) -> Self {
        self.append_lazy(Lazy::evaluated(other))
    }

    fn append_lazy(&self, rest: Lazy<Self>) -> Self {
        match self.node.as_deref() {
            None => rest.get().clone(),
            Some(cons) => {
                let tail = cons.tail.clone();
                Self::cons(cons.head.clone(), move || tail.get().append_lazy(rest))
            }
        }
    }

    /// Adds `element` before the first element, sharing every node.
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self::strict_cons(element, self.clone())
    }

    /// Inserts `separator` between consecutive elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::persistent::Stream;
    ///
    /// assert_eq!(Stream::of([1, 2, 3]).intersperse(0).to_vec(), vec![1, 0, 2, 0, 3]);
    /// ```
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self {
        match self.node.as_deref() {
            None => Self::empty(),
            Some(cons) => {
                let tail = cons.tail.clone();
                Self::cons(cons.head.clone(), move || {
                    let rest = tail.get();
                    if rest.is_empty() {
                        Self::empty()
                    } else {
                        rest.intersperse(separator.clone()).prepend(separator)
                    }
                })
            }
        }
    }

    // =========================================================================
    // Eager Operations
    // =========================================================================

    /// Reverses the stream, forcing every element.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(Self::empty(), |reversed, element| {
                Self::strict_cons(element.clone(), reversed)
            })
    }

    /// Collects the elements, forcing every one of them.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

enum Pending<'a, T> {
    Start(&'a Stream<T>),
    After(&'a Cons<T>),
    Finished,
}

/// An iterator over references to elements of a [`Stream`].
///
/// The tail of an element is forced only when the following element is
/// requested.
pub struct Iter<'a, T> {
    pending: Pending<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let stream = match self.pending {
            Pending::Start(stream) => stream,
            Pending::After(cons) => cons.tail.get(),
            Pending::Finished => return None,
        };
        if let Some(cons) = stream.node.as_deref() {
            self.pending = Pending::After(cons);
            Some(&cons.head)
        } else {
            self.pending = Pending::Finished;
            None
        }
    }
}

/// An owning iterator over elements of a [`Stream`].
pub struct IntoIter<T> {
    pending: Lazy<Stream<T>>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, tail) = {
            let cons = self.pending.get().node.as_deref()?;
            (cons.head.clone(), cons.tail.clone())
        };
        self.pending = tail;
        Some(head)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

/// Unlinks evaluated nodes one at a time so that dropping a long stream
/// does not recurse once per element.
impl<T> Drop for Stream<T> {
    fn drop(&mut self) {
        let mut node = self.node.take();
        while let Some(shared) = node {
            node = Arc::try_unwrap(shared).ok().and_then(|cons| {
                cons.tail
                    .into_evaluated()
                    .and_then(|mut rest| rest.node.take())
            });
        }
    }
}

impl<T> Default for Stream<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            pending: Lazy::evaluated(self),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compares element by element, forcing both streams as far as they agree.
impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stream<T> {}

impl<T> Stream<T> {
    fn render(
        &self,
        formatter: &mut fmt::Formatter<'_>,
        mut write_element: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        write!(formatter, "Stream(")?;
        let mut current = self;
        let mut first = true;
        while let Some(cons) = current.node.as_deref() {
            if !first {
                write!(formatter, ", ")?;
            }
            first = false;
            write_element(&cons.head, formatter)?;
            match cons.tail.evaluated_value() {
                Some(rest) => current = rest,
                None => {
                    write!(formatter, ", ?")?;
                    break;
                }
            }
        }
        write!(formatter, ")")
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(formatter, |element, formatter| write!(formatter, "{element:?}"))
    }
}

impl<T: fmt::Display> fmt::Display for Stream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(formatter, |element, formatter| write!(formatter, "{element}"))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Clone> Traversable for Stream<T> {
    type Item = T;
    type Elements<'a>
        = std::iter::Cloned<Iter<'a, T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }

    /// Always `false`: a stream cannot know its extent without forcing it.
    fn has_definite_size(&self) -> bool {
        false
    }
}

static_assertions::assert_impl_all!(Stream<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Stream<String>: Send, Sync);
