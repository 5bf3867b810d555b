//! Lazy window iterators: fixed-size groups, sliding windows and runs of
//! elements sharing a classification.
//!
//! These adaptors pull from their source only as far as the window being
//! produced requires, so they work on unbounded streams.

use std::collections::VecDeque;
use std::iter::{Fuse, Peekable};
use std::marker::PhantomData;

/// Windows of up to `size` elements, each starting `step` elements after the
/// previous one.
///
/// Iteration ends once a window reaches the end of the input, so the last
/// window may be shorter than `size`.
///
/// Created by [`Traversable::sliding`](super::Traversable::sliding),
/// [`Traversable::sliding_by`](super::Traversable::sliding_by) and
/// [`Traversable::grouped`](super::Traversable::grouped).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Sliding<I: Iterator> {
    source: Fuse<I>,
    buffer: VecDeque<I::Item>,
    size: usize,
    step: usize,
    finished: bool,
}

impl<I: Iterator> Sliding<I> {
    /// # Panics
    ///
    /// Panics if `size` or `step` is zero.
    pub(crate) fn new(source: I, size: usize, step: usize) -> Self {
        assert!(size > 0, "window size must be positive");
        assert!(step > 0, "window step must be positive");
        Self {
            source: source.fuse(),
            buffer: VecDeque::with_capacity(size + 1),
            size,
            step,
            finished: false,
        }
    }

    fn fill(&mut self, target: usize) -> bool {
        while self.buffer.len() < target {
            match self.source.next() {
                Some(item) => self.buffer.push_back(item),
                None => return false,
            }
        }
        true
    }

    fn advance(&mut self) {
        for _ in 0..self.step {
            if self.buffer.pop_front().is_none() && self.source.next().is_none() {
                break;
            }
        }
    }
}

impl<I> Iterator for Sliding<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        // one element past the window tells whether anything remains after it
        let has_remainder = self.fill(self.size + 1);
        if self.buffer.is_empty() {
            self.finished = true;
            return None;
        }
        let window: Vec<I::Item> = self.buffer.iter().take(self.size).cloned().collect();
        if has_remainder {
            self.advance();
        } else {
            self.finished = true;
        }
        Some(window)
    }
}

/// Runs of consecutive elements with equal classification.
///
/// Created by [`Traversable::slide_by`](super::Traversable::slide_by).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SlideBy<I: Iterator, F, K> {
    source: Peekable<I>,
    classifier: F,
    key: PhantomData<fn() -> K>,
}

impl<I: Iterator, F, K> SlideBy<I, F, K> {
    pub(crate) fn new(source: I, classifier: F) -> Self {
        Self {
            source: source.peekable(),
            classifier,
            key: PhantomData,
        }
    }
}

impl<I, F, K> Iterator for SlideBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.source.next()?;
        let key = (self.classifier)(&first);
        let mut window = vec![first];
        while let Some(item) = self
            .source
            .next_if(|candidate| (self.classifier)(candidate) == key)
        {
            window.push(item);
        }
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn windows(input: &str, size: usize, step: usize) -> Vec<String> {
        Sliding::new(input.chars(), size, step)
            .map(|window| window.into_iter().collect())
            .collect()
    }

    #[rstest]
    #[case("abc$", 3, 1, vec!["abc", "bc$"])]
    #[case("abc$", 2, 3, vec!["ab", "$"])]
    #[case("abc$", 3, 3, vec!["abc", "$"])]
    #[case("abc", 2, 5, vec!["ab"])]
    #[case("ab", 5, 1, vec!["ab"])]
    #[case("abcd", 2, 2, vec!["ab", "cd"])]
    #[case("", 2, 1, vec![])]
    fn sliding_windows(
        #[case] input: &str,
        #[case] size: usize,
        #[case] step: usize,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(windows(input, size, step), expected);
    }

    #[rstest]
    fn sliding_pulls_lazily_from_unbounded_source() {
        let first_two: Vec<Vec<u64>> = Sliding::new(0u64.., 3, 2).take(2).collect();
        assert_eq!(first_two, vec![vec![0, 1, 2], vec![2, 3, 4]]);
    }

    #[rstest]
    #[should_panic(expected = "window size must be positive")]
    fn zero_size_panics() {
        let _ = Sliding::new(0..3, 0, 1);
    }

    #[rstest]
    fn slide_by_groups_runs() {
        let runs: Vec<Vec<i32>> =
            SlideBy::new(vec![1, 2, 4, 10, 11, 3, 4].into_iter(), |n: &i32| n / 10).collect();
        assert_eq!(runs, vec![vec![1, 2, 4], vec![10, 11], vec![3, 4]]);
    }
}
