//! Traversable - one algorithm set shared by every sequence-like type.
//!
//! An implementor only exposes its elements as a forward iterator of owned
//! items; every inspection, fold, window, selection, aggregate, zip and
//! rendering operation is provided on top of that. `Stream` and `Vec` are
//! the many-element implementors; the control values are sequences of zero
//! or one element (`Either`, `Try` and `Validation` expose their success
//! side) and a [`Lazy`] is a sequence of exactly one element.
//!
//! Selection operations return a `Vec` of the selected elements. Types with
//! a richer native version (for example the lazy `Stream::take`) keep it as
//! an inherent method, which takes precedence in method-call syntax.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Maybe;
//! use fpcore::persistent::Stream;
//! use fpcore::typeclass::Traversable;
//!
//! let numbers = Stream::of([1, 2, 3, 4, 5]);
//! assert_eq!(numbers.sum(), 15);
//! assert_eq!(numbers.scan_right(0, |n, total| n + total), vec![15, 14, 12, 9, 5, 0]);
//! assert_eq!(numbers.mk_string_delimited("[", ",", "]"), "[1,2,3,4,5]");
//!
//! let single = Maybe::some(4);
//! assert_eq!(single.length(), 1);
//! assert_eq!(single.average(), Maybe::some(4.0));
//! ```

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;
use std::iter::Cloned;

use super::numeric::AsFloat;
use super::windows::{SlideBy, Sliding};
use super::{Monoid, Product, Sum};
use crate::control::{Either, Lazy, Maybe, Try, Validation};
use crate::error::{Cause, Error, Result};
use crate::function::PartialFunction;
use crate::tuple::{Tuple2, Tuple3};

/// The shared algorithm set over a sequence of elements.
///
/// Only [`Traversable::elements`] must be implemented.
pub trait Traversable {
    /// The element type.
    type Item: Clone;

    /// The iterator returned by [`Traversable::elements`].
    type Elements<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Iterates over the elements in order.
    fn elements(&self) -> Self::Elements<'_>;

    /// Returns `true` if the number of elements is known without forcing
    /// anything.
    fn has_definite_size(&self) -> bool {
        true
    }

    /// Returns `true` if the elements can be traversed more than once.
    fn is_traversable_again(&self) -> bool {
        true
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.elements().next().is_none()
    }

    /// Counts the elements.
    fn length(&self) -> usize {
        self.elements().count()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] when there are no elements.
    fn head(&self) -> Result<Self::Item> {
        self.elements().next().ok_or(Error::empty("head"))
    }

    /// Returns the first element, if any.
    fn head_option(&self) -> Maybe<Self::Item> {
        Maybe::of(self.elements().next())
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] when there are no elements.
    fn last(&self) -> Result<Self::Item> {
        self.elements().last().ok_or(Error::empty("last"))
    }

    /// Returns the last element, if any.
    fn last_option(&self) -> Maybe<Self::Item> {
        Maybe::of(self.elements().last())
    }

    /// Returns every element but the last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] when there are no elements.
    fn init(&self) -> Result<Vec<Self::Item>> {
        self.init_option().get().map_err(|_| Error::empty("init"))
    }

    /// Returns every element but the last, or `None` when empty.
    fn init_option(&self) -> Maybe<Vec<Self::Item>> {
        let mut elements: Vec<Self::Item> = self.elements().collect();
        elements.pop().map_or(Maybe::None, |_| Maybe::Some(elements))
    }

    /// Returns `true` if some element equals `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.elements().any(|item| item == *element)
    }

    /// Returns `true` if some element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().any(|item| predicate(&item))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().all(|item| predicate(&item))
    }

    /// Returns `true` if exactly one element satisfies `predicate`.
    fn exists_unique<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matching = self.elements().filter(|item| predicate(item));
        matching.next().is_some() && matching.next().is_none()
    }

    /// Counts the elements satisfying `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().filter(|item| predicate(item)).count()
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::of(self.elements().find(|item| predicate(item)))
    }

    /// Returns the last element satisfying `predicate`.
    fn find_last<P>(&self, mut predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::of(self.elements().filter(|item| predicate(item)).last())
    }

    /// Calls `action` with each element and its index.
    fn for_each_with_index<F>(&self, mut action: F)
    where
        F: FnMut(Self::Item, usize),
    {
        for (index, item) in self.elements().enumerate() {
            action(item, index);
        }
    }

    // =========================================================================
    // Folds
    // =========================================================================

    /// Folds the elements with an operation on the element type.
    fn fold<F>(&self, zero: Self::Item, operation: F) -> Self::Item
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.elements().fold(zero, operation)
    }

    /// Folds from the first element to the last.
    fn fold_left<U, F>(&self, zero: U, operation: F) -> U
    where
        F: FnMut(U, Self::Item) -> U,
    {
        self.elements().fold(zero, operation)
    }

    /// Folds from the last element to the first.
    fn fold_right<U, F>(&self, zero: U, mut operation: F) -> U
    where
        F: FnMut(Self::Item, U) -> U,
    {
        let elements: Vec<Self::Item> = self.elements().collect();
        elements
            .into_iter()
            .rev()
            .fold(zero, |accumulator, item| operation(item, accumulator))
    }

    /// Alias of [`Traversable::reduce_left`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] when there are no elements.
    fn reduce<F>(&self, operation: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce_left(operation)
    }

    /// Combines the elements from the first to the last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] when there are no elements.
    fn reduce_left<F>(&self, operation: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce_left_option(operation)
            .get()
            .map_err(|_| Error::empty("reduce"))
    }

    /// Combines the elements from the last to the first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyValue`] when there are no elements.
    fn reduce_right<F>(&self, operation: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce_right_option(operation)
            .get()
            .map_err(|_| Error::empty("reduce_right"))
    }

    /// Alias of [`Traversable::reduce_left_option`].
    fn reduce_option<F>(&self, operation: F) -> Maybe<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.reduce_left_option(operation)
    }

    /// Combines the elements from the first to the last, or `None` when empty.
    fn reduce_left_option<F>(&self, operation: F) -> Maybe<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        Maybe::of(self.elements().reduce(operation))
    }

    /// Combines the elements from the last to the first, or `None` when empty.
    fn reduce_right_option<F>(&self, mut operation: F) -> Maybe<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let elements: Vec<Self::Item> = self.elements().collect();
        Maybe::of(
            elements
                .into_iter()
                .rev()
                .reduce(|accumulator, item| operation(item, accumulator)),
        )
    }

    /// Alias of [`Traversable::scan_left`] over the element type.
    fn scan<F>(&self, zero: Self::Item, mut operation: F) -> Vec<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.scan_left(zero, |accumulator, item| operation(accumulator.clone(), item))
    }

    /// Returns every intermediate result of a left fold, starting with `zero`.
    fn scan_left<U, F>(&self, zero: U, mut operation: F) -> Vec<U>
    where
        U: Clone,
        F: FnMut(&U, Self::Item) -> U,
    {
        let mut current = zero;
        let mut results = vec![current.clone()];
        for item in self.elements() {
            current = operation(&current, item);
            results.push(current.clone());
        }
        results
    }

    /// Returns every intermediate result of a right fold, ending with `zero`.
    fn scan_right<U, F>(&self, zero: U, mut operation: F) -> Vec<U>
    where
        U: Clone,
        F: FnMut(Self::Item, &U) -> U,
    {
        let elements: Vec<Self::Item> = self.elements().collect();
        let mut current = zero;
        let mut results = vec![current.clone()];
        for item in elements.into_iter().rev() {
            current = operation(item, &current);
            results.push(current.clone());
        }
        results.reverse();
        results
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Splits the elements into consecutive groups of `size`; the last group
    /// may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn grouped(&self, size: usize) -> Sliding<Self::Elements<'_>> {
        Sliding::new(self.elements(), size, size)
    }

    /// Windows of `size` elements advancing one element at a time.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    fn sliding(&self, size: usize) -> Sliding<Self::Elements<'_>> {
        Sliding::new(self.elements(), size, 1)
    }

    /// Windows of up to `size` elements advancing `step` elements at a time.
    ///
    /// # Panics
    ///
    /// Panics if `size` or `step` is zero.
    fn sliding_by(&self, size: usize, step: usize) -> Sliding<Self::Elements<'_>> {
        Sliding::new(self.elements(), size, step)
    }

    /// Groups runs of consecutive elements with equal classification.
    fn slide_by<K, F>(&self, classifier: F) -> SlideBy<Self::Elements<'_>, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        SlideBy::new(self.elements(), classifier)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns the elements satisfying `predicate`.
    fn filter<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().filter(|item| predicate(item)).collect()
    }

    /// Returns the elements not satisfying `predicate`.
    fn reject<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().filter(|item| !predicate(item)).collect()
    }

    /// Returns the first `count` elements.
    fn take(&self, count: usize) -> Vec<Self::Item> {
        self.elements().take(count).collect()
    }

    /// Returns the last `count` elements.
    fn take_right(&self, count: usize) -> Vec<Self::Item> {
        let mut elements: Vec<Self::Item> = self.elements().collect();
        let start = elements.len().saturating_sub(count);
        elements.split_off(start)
    }

    /// Returns the longest prefix satisfying `predicate`.
    fn take_while<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().take_while(|item| predicate(item)).collect()
    }

    /// Returns the longest prefix not satisfying `predicate`.
    fn take_until<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().take_while(|item| !predicate(item)).collect()
    }

    /// Returns every element after the first `count`.
    fn drop(&self, count: usize) -> Vec<Self::Item> {
        self.elements().skip(count).collect()
    }

    /// Returns every element but the last `count`.
    fn drop_right(&self, count: usize) -> Vec<Self::Item> {
        let mut elements: Vec<Self::Item> = self.elements().collect();
        elements.truncate(elements.len().saturating_sub(count));
        elements
    }

    /// Drops the longest prefix satisfying `predicate`.
    fn drop_while<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().skip_while(|item| predicate(item)).collect()
    }

    /// Drops the longest prefix not satisfying `predicate`.
    fn drop_until<P>(&self, mut predicate: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.elements().skip_while(|item| !predicate(item)).collect()
    }

    /// Keeps only the elements that also occur in `elements`.
    fn retain_all<I>(&self, elements: I) -> Vec<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        let retained: Vec<Self::Item> = elements.into_iter().collect();
        self.elements().filter(|item| retained.contains(item)).collect()
    }

    /// Replaces the first element equal to `current` with `replacement`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::typeclass::Traversable;
    ///
    /// assert_eq!(vec![1, 2, 2, 3].replace(2, 0), vec![1, 0, 2, 3]);
    /// assert_eq!(vec![1, 2, 2, 3].replace_all(2, 0), vec![1, 0, 0, 3]);
    /// ```
    fn replace(&self, current: Self::Item, replacement: Self::Item) -> Vec<Self::Item>
    where
        Self::Item: PartialEq,
    {
        let mut replaced = false;
        self.elements()
            .map(|item| {
                if !replaced && item == current {
                    replaced = true;
                    replacement.clone()
                } else {
                    item
                }
            })
            .collect()
    }

    /// Replaces every element equal to `current` with `replacement`.
    fn replace_all(&self, current: Self::Item, replacement: Self::Item) -> Vec<Self::Item>
    where
        Self::Item: PartialEq,
    {
        self.elements()
            .map(|item| if item == current { replacement.clone() } else { item })
            .collect()
    }

    /// Removes repeated elements, keeping first occurrences in order.
    fn distinct(&self) -> Vec<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        let mut seen = HashSet::new();
        self.elements()
            .filter(|item| seen.insert(item.clone()))
            .collect()
    }

    /// Removes elements whose key was already seen.
    fn distinct_by_key<K, F>(&self, mut key: F) -> Vec<Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut seen = HashSet::new();
        self.elements().filter(|item| seen.insert(key(item))).collect()
    }

    /// Removes elements `equivalent` to an earlier kept element.
    fn distinct_by<F>(&self, mut equivalent: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut kept: Vec<Self::Item> = Vec::new();
        for item in self.elements() {
            if !kept.iter().any(|existing| equivalent(existing, &item)) {
                kept.push(item);
            }
        }
        kept
    }

    /// Splits the elements into those satisfying `predicate` and the rest.
    fn partition<P>(&self, mut predicate: P) -> Tuple2<Vec<Self::Item>, Vec<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let (matching, rest) = self.elements().partition(|item| predicate(item));
        Tuple2::new(matching, rest)
    }

    /// Splits the elements into the longest prefix satisfying `predicate`
    /// and the remainder.
    fn span<P>(&self, mut predicate: P) -> Tuple2<Vec<Self::Item>, Vec<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut elements = self.elements();
        let mut prefix = Vec::new();
        let mut rest = Vec::new();
        for item in elements.by_ref() {
            if predicate(&item) {
                prefix.push(item);
            } else {
                rest.push(item);
                break;
            }
        }
        rest.extend(elements);
        Tuple2::new(prefix, rest)
    }

    /// Groups the elements by key, preserving element order inside groups.
    fn group_by<K, F>(&self, mut classifier: F) -> HashMap<K, Vec<Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: HashMap<K, Vec<Self::Item>> = HashMap::new();
        for item in self.elements() {
            groups.entry(classifier(&item)).or_default().push(item);
        }
        groups
    }

    /// Maps the elements inside the domain of `partial_function`, skipping
    /// the rest.
    fn collect<U>(&self, partial_function: &PartialFunction<Self::Item, U>) -> Vec<U> {
        self.elements()
            .filter_map(|item| partial_function.apply_if_defined(item).to_option())
            .collect()
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Adds the elements; an empty sequence sums to zero.
    fn sum(&self) -> Self::Item
    where
        Sum<Self::Item>: Monoid,
    {
        Sum::combine_all(self.elements().map(Sum::<Self::Item>::from)).into_inner()
    }

    /// Multiplies the elements; an empty sequence has product one.
    fn product(&self) -> Self::Item
    where
        Product<Self::Item>: Monoid,
    {
        Product::combine_all(self.elements().map(Product::<Self::Item>::from)).into_inner()
    }

    /// Returns the smallest element; the first one wins ties.
    fn min(&self) -> Maybe<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        Maybe::of(
            self.elements()
                .reduce(|smallest, item| if item < smallest { item } else { smallest }),
        )
    }

    /// Returns the largest element; the first one wins ties.
    fn max(&self) -> Maybe<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        Maybe::of(
            self.elements()
                .reduce(|largest, item| if item > largest { item } else { largest }),
        )
    }

    /// Returns the smallest element according to `comparator`.
    fn min_by<F>(&self, mut comparator: F) -> Maybe<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Maybe::of(self.elements().reduce(|smallest, item| {
            if comparator(&item, &smallest) == Ordering::Less {
                item
            } else {
                smallest
            }
        }))
    }

    /// Returns the largest element according to `comparator`.
    fn max_by<F>(&self, mut comparator: F) -> Maybe<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Maybe::of(self.elements().reduce(|largest, item| {
            if comparator(&item, &largest) == Ordering::Greater {
                item
            } else {
                largest
            }
        }))
    }

    /// Returns the element with the smallest key.
    fn min_by_key<K, F>(&self, mut key: F) -> Maybe<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.min_by(|left, right| key(left).cmp(&key(right)))
    }

    /// Returns the element with the largest key.
    fn max_by_key<K, F>(&self, mut key: F) -> Maybe<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.max_by(|left, right| key(left).cmp(&key(right)))
    }

    /// Returns the arithmetic mean, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Maybe;
    /// use fpcore::typeclass::Traversable;
    ///
    /// assert_eq!(Traversable::average(&vec![0, -3, 2, 0]), Maybe::some(-0.25));
    /// assert_eq!(Traversable::average(&Vec::<i32>::new()), Maybe::none());
    /// ```
    fn average(&self) -> Maybe<f64>
    where
        Self::Item: AsFloat,
    {
        let (total, count) = self
            .elements()
            .fold((0.0, 0_u64), |(total, count), item| (total + item.as_f64(), count + 1));
        #[allow(clippy::cast_precision_loss)]
        let count_as_float = count as f64;
        Maybe::when(count > 0, total / count_as_float)
    }

    // =========================================================================
    // Zipping
    // =========================================================================

    /// Pairs the elements with those of `other`, stopping at the shorter side.
    fn zip<U, I>(&self, other: I) -> Vec<Tuple2<Self::Item, U>>
    where
        I: IntoIterator<Item = U>,
    {
        self.elements()
            .zip(other)
            .map(|(left, right)| Tuple2::new(left, right))
            .collect()
    }

    /// Pairs the elements with those of `other`, padding the shorter side.
    fn zip_all<U, I>(&self, other: I, this_pad: Self::Item, that_pad: U) -> Vec<Tuple2<Self::Item, U>>
    where
        U: Clone,
        I: IntoIterator<Item = U>,
    {
        let mut left = self.elements();
        let mut right = other.into_iter();
        let mut pairs = Vec::new();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return pairs,
                (first, second) => pairs.push(Tuple2::new(
                    first.unwrap_or_else(|| this_pad.clone()),
                    second.unwrap_or_else(|| that_pad.clone()),
                )),
            }
        }
    }

    /// Pairs every element with its index.
    fn zip_with_index(&self) -> Vec<Tuple2<Self::Item, usize>> {
        self.elements()
            .enumerate()
            .map(|(index, item)| Tuple2::new(item, index))
            .collect()
    }

    /// Splits every element into a pair and collects both sides.
    fn unzip<A, B, F>(&self, unzipper: F) -> Tuple2<Vec<A>, Vec<B>>
    where
        F: FnMut(Self::Item) -> Tuple2<A, B>,
    {
        Tuple2::sequence(self.elements().map(unzipper))
    }

    /// Splits every element into a triple and collects the three sides.
    fn unzip3<A, B, C, F>(&self, unzipper: F) -> Tuple3<Vec<A>, Vec<B>, Vec<C>>
    where
        F: FnMut(Self::Item) -> Tuple3<A, B, C>,
    {
        Tuple3::sequence(self.elements().map(unzipper))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Concatenates the rendered elements.
    fn mk_string(&self) -> String
    where
        Self::Item: Display,
    {
        self.mk_string_delimited("", "", "")
    }

    /// Joins the rendered elements with `separator`.
    fn mk_string_with(&self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        self.mk_string_delimited("", separator, "")
    }

    /// Joins the rendered elements with `separator` between `prefix` and
    /// `suffix`.
    fn mk_string_delimited(&self, prefix: &str, separator: &str, suffix: &str) -> String
    where
        Self::Item: Display,
    {
        let mut rendered = String::from(prefix);
        for (index, item) in self.elements().enumerate() {
            if index > 0 {
                rendered.push_str(separator);
            }
            // writing into a String cannot fail
            let _ = fmt::write(&mut rendered, format_args!("{item}"));
        }
        rendered.push_str(suffix);
        rendered
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Collects the elements into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.elements().collect()
    }

    /// Returns the first element, if any.
    fn to_maybe(&self) -> Maybe<Self::Item> {
        self.head_option()
    }

    /// Returns the first element as `Right`, or `Left(left)` when empty.
    fn to_right_or<L>(&self, left: L) -> Either<L, Self::Item> {
        match self.elements().next() {
            Some(item) => Either::Right(item),
            None => Either::Left(left),
        }
    }

    /// Returns the first element as a success, or a failure with an
    /// [`Error::EmptyValue`] cause when empty.
    fn to_try(&self) -> Try<Self::Item> {
        self.to_success_or(Error::empty("to_try"))
    }

    /// Returns the first element as a success, or a failure with `cause`.
    fn to_success_or<C>(&self, cause: C) -> Try<Self::Item>
    where
        C: Into<Cause>,
    {
        match self.elements().next() {
            Some(item) => Try::Success(item),
            None => Try::failure(cause),
        }
    }

    /// Returns the first element as valid, or `Invalid(error)` when empty.
    fn to_valid_or<E>(&self, error: E) -> Validation<E, Self::Item> {
        match self.elements().next() {
            Some(item) => Validation::Valid(item),
            None => Validation::Invalid(error),
        }
    }
}

// =============================================================================
// Implementations
// =============================================================================

/// With [`Traversable`] in scope, `vec.last()` and `vec.contains(..)` resolve
/// to the trait methods, because `&Vec<T>` is tried before `&[T]`. `last`
/// then returns `Result<T>` instead of `Option<&T>`; call
/// `vec.as_slice().last()` for the slice method.
impl<T: Clone> Traversable for Vec<T> {
    type Item = T;
    type Elements<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Traversable for Maybe<T> {
    type Item = T;
    type Elements<'a>
        = Cloned<std::option::IntoIter<&'a T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }
}

/// An `Either` traverses its right value.
impl<L, R: Clone> Traversable for Either<L, R> {
    type Item = R;
    type Elements<'a>
        = Cloned<std::option::IntoIter<&'a R>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.right_ref().into_iter().cloned()
    }
}

/// A `Try` traverses the value of a success.
impl<T: Clone> Traversable for Try<T> {
    type Item = T;
    type Elements<'a>
        = Cloned<std::option::IntoIter<&'a T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }
}

/// A `Validation` traverses its valid value.
impl<E, T: Clone> Traversable for Validation<E, T> {
    type Item = T;
    type Elements<'a>
        = Cloned<std::option::IntoIter<&'a T>>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }
}

/// A `Lazy` is a sequence of exactly one element; traversing it forces it.
impl<T: Clone> Traversable for Lazy<T> {
    type Item = T;
    type Elements<'a>
        = std::iter::Once<T>
    where
        Self: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        std::iter::once(self.get().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[rstest]
    fn inspection_on_vec() {
        let values = vec![1, 2, 3];
        assert_eq!(Traversable::length(&values), 3);
        assert_eq!(Traversable::head(&values), Ok(1));
        assert_eq!(Traversable::last(&values), Ok(3));
        assert_eq!(Traversable::init(&values), Ok(vec![1, 2]));
        assert!(Traversable::exists_unique(&values, |n| *n == 2));
        assert!(!Traversable::exists_unique(&values, |n| *n > 1));
    }

    #[rstest]
    fn empty_sequences_fail_forcing_accessors() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(Traversable::head(&empty), Err(Error::empty("head")));
        assert_eq!(Traversable::init(&empty), Err(Error::empty("init")));
        assert_eq!(empty.reduce(|a, b| a + b), Err(Error::empty("reduce")));
        assert_eq!(empty.reduce_option(|a, b| a + b), Maybe::none());
        assert_eq!(Traversable::head_option(&empty), Maybe::none());
    }

    #[rstest]
    fn scans_include_zero() {
        let values = vec![1, 2, 3, 4, 5];
        assert_eq!(values.scan_left(0, |total, n| total + n), vec![0, 1, 3, 6, 10, 15]);
        assert_eq!(values.scan_right(0, |n, total| n + total), vec![15, 14, 12, 9, 5, 0]);
        assert_eq!(values.scan(0, |a, b| a + b), vec![0, 1, 3, 6, 10, 15]);
    }

    #[rstest]
    fn scans_thread_an_owned_accumulator() {
        let words = vec!["a", "b", "c"];
        assert_eq!(
            words.scan_left(String::new(), |acc, word| format!("{acc}{word}")),
            vec!["", "a", "ab", "abc"]
        );
        assert_eq!(
            words.scan_right(String::new(), |word, acc| format!("{word}{acc}")),
            vec!["abc", "bc", "c", ""]
        );
    }

    #[rstest]
    #[case(vec![1, 2, 2, 2, 3], vec![1, 0, 2, 2, 3], vec![1, 0, 0, 0, 3])]
    #[case(vec![4, 5], vec![4, 5], vec![4, 5])]
    #[case(vec![], vec![], vec![])]
    fn replace_first_or_every_occurrence(
        #[case] values: Vec<i32>,
        #[case] first: Vec<i32>,
        #[case] every: Vec<i32>,
    ) {
        assert_eq!(values.replace(2, 0), first);
        assert_eq!(values.replace_all(2, 0), every);
    }

    #[rstest]
    fn fold_right_runs_from_the_end() {
        let rendered = chars("abc").fold_right(String::new(), |c, acc| format!("{acc}{c}"));
        assert_eq!(rendered, "cba");
        assert_eq!(chars("abc").reduce_right(|c, acc| if c < acc { c } else { acc }), Ok('a'));
    }

    #[rstest]
    fn windows_follow_step_semantics() {
        let values = chars("abc$");
        let sliding: Vec<Vec<char>> = values.sliding(3).collect();
        assert_eq!(sliding, vec![chars("abc"), chars("bc$")]);
        let gapped: Vec<Vec<char>> = values.sliding_by(2, 3).collect();
        assert_eq!(gapped, vec![chars("ab"), chars("$")]);
        let groups: Vec<Vec<char>> = values.grouped(3).collect();
        assert_eq!(groups, vec![chars("abc"), chars("$")]);
    }

    #[rstest]
    fn selection_operations() {
        let values = vec![1, 2, 3, 4, 5];
        assert_eq!(values.take_right(2), vec![4, 5]);
        assert_eq!(values.drop_right(2), vec![1, 2, 3]);
        assert_eq!(values.take_until(|n| *n > 2), vec![1, 2]);
        assert_eq!(values.drop_until(|n| *n > 2), vec![3, 4, 5]);
        assert_eq!(values.reject(|n| n % 2 == 0), vec![1, 3, 5]);
        assert_eq!(values.retain_all(vec![5, 1, 9]), vec![1, 5]);
        assert_eq!(values.span(|n| *n < 3), Tuple2::new(vec![1, 2], vec![3, 4, 5]));
        assert_eq!(values.partition(|n| n % 2 == 0), Tuple2::new(vec![2, 4], vec![1, 3, 5]));
    }

    #[rstest]
    fn distinct_variants_keep_first_occurrence() {
        let words = vec!["apple", "avocado", "banana", "apple", "blueberry"];
        assert_eq!(words.distinct(), vec!["apple", "avocado", "banana", "blueberry"]);
        assert_eq!(words.distinct_by_key(|word| word.chars().next()), vec!["apple", "banana"]);
        assert_eq!(
            words.distinct_by(|left, right| left.len() == right.len()),
            vec!["apple", "avocado", "banana", "blueberry"]
        );
    }

    #[rstest]
    fn group_by_preserves_order_within_groups() {
        let groups = vec![1, 2, 3, 4, 5, 6].group_by(|n| n % 3);
        assert_eq!(groups.get(&0), Some(&vec![3, 6]));
        assert_eq!(groups.get(&1), Some(&vec![1, 4]));
        assert_eq!(groups.len(), 3);
    }

    #[rstest]
    fn aggregates() {
        let values = vec![3, 1, 4, 1, 5];
        assert_eq!(values.sum(), 14);
        assert_eq!(values.product(), 60);
        assert_eq!(Traversable::min(&values), Maybe::some(1));
        assert_eq!(Traversable::max(&values), Maybe::some(5));
        assert_eq!(Vec::<i64>::new().sum(), 0);
        assert_eq!(Vec::<i64>::new().product(), 1);
        let words = vec!["ccc", "a", "bb"];
        assert_eq!(words.min_by_key(|word| word.len()), Maybe::some("a"));
        assert_eq!(words.max_by(|left, right| left.len().cmp(&right.len())), Maybe::some("ccc"));
    }

    #[rstest]
    #[case(vec![4], Maybe::some(4.0))]
    #[case(vec![1, 2, 3, 4], Maybe::some(2.5))]
    #[case((0..100_000).collect(), Maybe::some(49_999.5))]
    #[case(vec![], Maybe::none())]
    fn average_divides_by_element_count(#[case] values: Vec<u32>, #[case] expected: Maybe<f64>) {
        assert_eq!(values.average(), expected);
    }

    #[rstest]
    fn zipping() {
        let values = vec!['a', 'b', 'c'];
        assert_eq!(
            values.zip(vec![1, 2]),
            vec![Tuple2::new('a', 1), Tuple2::new('b', 2)]
        );
        assert_eq!(
            values.zip_all(vec![1], 'z', 0),
            vec![Tuple2::new('a', 1), Tuple2::new('b', 0), Tuple2::new('c', 0)]
        );
        assert_eq!(values.zip_with_index()[2], Tuple2::new('c', 2));
        let unzipped = values.unzip(|c| Tuple2::new(c, c.is_ascii_lowercase()));
        assert_eq!(unzipped._2, vec![true, true, true]);
    }

    #[rstest]
    #[case("", "", "", "abc$")]
    #[case("", "+", "", "a+b+c+$")]
    #[case("[", ",", "]", "[a,b,c,$]")]
    fn mk_string_variants(
        #[case] prefix: &str,
        #[case] separator: &str,
        #[case] suffix: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(chars("abc$").mk_string_delimited(prefix, separator, suffix), expected);
    }

    #[rstest]
    fn collect_skips_values_outside_domain() {
        let halves = PartialFunction::new(|n: &i32| n % 2 == 0, |n: i32| n / 2);
        assert_eq!(vec![1, 2, 3, 4].collect(&halves), vec![1, 2]);
    }

    #[rstest]
    fn control_values_are_zero_or_one_element_sequences() {
        assert_eq!(Maybe::some(1).length(), 1);
        assert_eq!(Either::<&str, i32>::left("x").length(), 0);
        assert_eq!(Either::<&str, i32>::right(2).to_vec(), vec![2]);
        assert!(Try::<i32>::failure(Error::empty("test")).is_empty());
        assert_eq!(Validation::<&str, i32>::valid(3).head(), Ok(3));
        assert_eq!(Lazy::of(|| 4).to_vec(), vec![4]);
    }

    #[rstest]
    fn conversions_pick_first_element() {
        let values = vec![1, 2, 3];
        assert_eq!(values.to_maybe(), Maybe::some(1));
        assert_eq!(values.to_right_or("empty"), Either::right(1));
        assert_eq!(values.to_try(), Try::success(1));
        assert_eq!(values.to_valid_or("empty"), Validation::valid(1));
        let empty: Vec<i32> = Vec::new();
        assert_eq!(empty.to_right_or("empty"), Either::left("empty"));
        assert!(empty.to_try().is_failure());
        assert_eq!(empty.to_valid_or("empty"), Validation::invalid("empty"));
    }

    mod law_property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_fold_left_matches_sum(values in prop::collection::vec(-1000i64..1000, 0..50)) {
                prop_assert_eq!(values.fold_left(0, |total, n| total + n), values.sum());
            }

            #[test]
            fn prop_grouped_concatenates_back(values in prop::collection::vec(any::<u8>(), 0..40), size in 1usize..6) {
                let regrouped: Vec<u8> = values.grouped(size).flatten().collect();
                prop_assert_eq!(regrouped, values);
            }

            #[test]
            fn prop_span_concatenates_back(values in prop::collection::vec(0u8..10, 0..40)) {
                let Tuple2 { _1: prefix, _2: rest } = values.span(|n| *n < 5);
                let joined: Vec<u8> = prefix.into_iter().chain(rest).collect();
                prop_assert_eq!(joined, values);
            }
        }
    }
}
