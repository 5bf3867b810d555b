//! Numeric wrapper types for the additive and multiplicative monoids.
//!
//! The same number can be combined by addition ([`Sum`], identity 0) or by
//! multiplication ([`Product`], identity 1). The numeric aggregates of
//! [`Traversable`](super::Traversable) fold their elements through these
//! wrappers.

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use fpcore::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i64>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_round_trips_inner_value() {
        assert_eq!(Sum(42).into_inner(), 42);
        assert_eq!(Sum::from(7), Sum(7));
    }

    #[rstest]
    fn product_round_trips_inner_value() {
        assert_eq!(Product::from(2.5).into_inner(), 2.5);
    }

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<u8>::default(), Sum(0));
    }
}
