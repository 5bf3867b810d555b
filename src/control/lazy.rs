//! Thread-safe lazy evaluation with memoization.
//!
//! A [`Lazy`] holds a deferred computation (a *thunk*) that runs on the first
//! call to [`Lazy::get`] and is cached for every later access. Clones share
//! the same cell, so the thunk runs at most once no matter how many handles
//! or threads force it.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::control::Lazy;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let lazy = Lazy::of(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     42
//! });
//!
//! assert!(!lazy.is_evaluated());
//! assert_eq!(*lazy.get(), 42);
//! assert_eq!(*lazy.get(), 42);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use super::Maybe;

type Thunk<T> = Box<dyn FnOnce() -> T + Send>;

/// The shared state behind every clone of a [`Lazy`].
///
/// `value` is written exactly once; `thunk` is taken by the thread that wins
/// the initialization. A cell whose value is unset and whose thunk is gone
/// has been poisoned by a panicking thunk.
struct Cell<T> {
    value: OnceLock<T>,
    thunk: Mutex<Option<Thunk<T>>>,
}

/// A memoizing, thread-safe deferred value.
///
/// `Lazy<T>` is `Send + Sync` whenever `T` is. Concurrent first access blocks
/// every caller but one, which runs the thunk; all of them then observe the
/// same cached value.
///
/// # Panics
///
/// If the thunk panics the cell is poisoned, and every later forcing panics
/// with `"Lazy instance has been poisoned"`.
pub struct Lazy<T> {
    cell: Arc<Cell<T>>,
}

impl<T> Lazy<T> {
    /// Creates an unevaluated cell from a thunk.
    pub fn of<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self {
            cell: Arc::new(Cell {
                value: OnceLock::new(),
                thunk: Mutex::new(Some(Box::new(thunk))),
            }),
        }
    }

    /// Alias of [`Lazy::of`].
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::of(thunk)
    }

    /// Creates a cell that is already evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Lazy;
    ///
    /// let lazy = Lazy::evaluated("ready");
    /// assert!(lazy.is_evaluated());
    /// ```
    pub fn evaluated(value: T) -> Self {
        Self {
            cell: Arc::new(Cell {
                value: OnceLock::from(value),
                thunk: Mutex::new(None),
            }),
        }
    }

    /// Forces the cell and returns a reference to the cached value.
    ///
    /// Only the first call runs the thunk.
    ///
    /// # Panics
    ///
    /// Panics if the thunk panics, or if an earlier thunk run panicked.
    pub fn get(&self) -> &T {
        self.cell.value.get_or_init(|| {
            let thunk = self.cell.thunk.lock().take();
            match thunk {
                Some(thunk) => {
                    tracing::trace!("evaluating lazy value");
                    thunk()
                }
                None => panic!("Lazy instance has been poisoned"),
            }
        })
    }

    /// Always `true`: a `Lazy` defers its value even once evaluated.
    #[allow(clippy::unused_self)]
    pub const fn is_lazy(&self) -> bool {
        true
    }

    /// Returns `true` once the value has been computed.
    pub fn is_evaluated(&self) -> bool {
        self.cell.value.get().is_some()
    }

    /// Returns the cached value without forcing the cell.
    pub fn evaluated_value(&self) -> Option<&T> {
        self.cell.value.get()
    }

    /// Forces the cell and invokes `action` with the value.
    pub fn peek<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&T),
    {
        action(self.get());
        self
    }

    /// Forces the cell and keeps the value only if it satisfies `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Maybe<T>
    where
        T: Clone,
        P: FnOnce(&T) -> bool,
    {
        let value = self.get();
        if predicate(value) {
            Maybe::Some(value.clone())
        } else {
            Maybe::None
        }
    }

    /// Takes the cached value out of a uniquely owned, evaluated cell.
    ///
    /// Returns `None` without forcing anything when the cell is shared with
    /// another handle or has not been evaluated.
    pub(crate) fn into_evaluated(self) -> Option<T> {
        Arc::try_unwrap(self.cell)
            .ok()
            .and_then(|cell| cell.value.into_inner())
    }
}

impl<T: Send + Sync + 'static> Lazy<T> {
    /// Returns a cell that applies `function` to this value when forced.
    ///
    /// Neither cell is forced by `map` itself; forcing the result forces the
    /// source first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::control::Lazy;
    ///
    /// let source = Lazy::of(|| 21);
    /// let doubled = source.map(|value| value * 2);
    /// assert!(!source.is_evaluated());
    /// assert_eq!(*doubled.get(), 42);
    /// assert!(source.is_evaluated());
    /// ```
    pub fn map<U, F>(&self, function: F) -> Lazy<U>
    where
        F: FnOnce(&T) -> U + Send + 'static,
    {
        let source = self.clone();
        Lazy::of(move || function(source.get()))
    }

    /// Returns a cell that forces the cell produced by `function` when forced.
    pub fn flat_map<U, F>(&self, function: F) -> Lazy<U>
    where
        U: Clone,
        F: FnOnce(&T) -> Lazy<U> + Send + 'static,
    {
        let source = self.clone();
        Lazy::of(move || function(source.get()).get().clone())
    }

    /// Combines two cells lazily.
    pub fn zip_with<U, R, F>(&self, other: &Lazy<U>, function: F) -> Lazy<R>
    where
        U: Send + Sync + 'static,
        F: FnOnce(&T, &U) -> R + Send + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Lazy::of(move || function(left.get(), right.get()))
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.evaluated_value() {
            Some(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            None => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
        }
    }
}

impl<T: PartialEq> PartialEq for Lazy<T> {
    /// Forces both cells and compares the values.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell) || self.get() == other.get()
    }
}

static_assertions::assert_impl_all!(Lazy<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Lazy<String>: Send, Sync);
