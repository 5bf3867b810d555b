//! Property-based tests for the control values.
//!
//! Verifies for `Maybe`, `Either`, `Try` and `Validation`:
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! plus the accumulation law of `Validation::combine`.

use fpcore::control::{Either, Maybe, Try, Validation};
use fpcore::error::MessageFailure;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::of)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    any::<Result<i32, String>>().prop_map(Either::from)
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    any::<Result<i32, String>>().prop_map(|result| Try::from(result.map_err(MessageFailure)))
}

fn halve_maybe(n: i32) -> Maybe<i32> {
    Maybe::when(n % 2 == 0, n / 2)
}

fn positive_maybe(n: i32) -> Maybe<i32> {
    Maybe::when(n > 0, n)
}

fn halve_either(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::right(n / 2)
    } else {
        Either::left(format!("{n} is odd"))
    }
}

fn positive_either(n: i32) -> Either<String, i32> {
    if n > 0 {
        Either::right(n)
    } else {
        Either::left(format!("{n} is not positive"))
    }
}

// =============================================================================
// Maybe<T> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        prop_assert_eq!(value.map(function1).map(function2), value.map(|x| function2(function1(x))));
    }

    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::some(value).flat_map(halve_maybe), halve_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.flat_map(Maybe::some), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = value.flat_map(halve_maybe).flat_map(positive_maybe);
        let right = value.flat_map(|x| halve_maybe(x).flat_map(positive_maybe));
        prop_assert_eq!(left, right);
    }

    /// Mapping never changes the variant, even to an absent payload.
    #[test]
    fn prop_maybe_map_preserves_tag(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|_| None::<i32>).is_defined(), value.is_defined());
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            Either::<String, i32>::right(value).flat_map(halve_either),
            halve_either(value)
        );
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Either::right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().flat_map(halve_either).flat_map(positive_either);
        let right = value.flat_map(|x| halve_either(x).flat_map(positive_either));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_swap_is_involutive(value in either_strategy()) {
        prop_assert_eq!(value.clone().swap().swap(), value);
    }

    #[test]
    fn prop_either_filter_or_else_on_rejected_right(value in any::<i32>()) {
        let checked = Either::<String, i32>::right(value)
            .filter_or_else(|_| false, |n| format!("rejected {n}"));
        prop_assert_eq!(checked, Either::left(format!("rejected {value}")));
    }
}

// =============================================================================
// Try<T> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_try_identity_law(value in try_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_try_right_identity(value in try_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Try::success), value);
    }

    #[test]
    fn prop_try_to_either_keeps_success(value in any::<i32>()) {
        prop_assert_eq!(Try::success(value).to_either(), Either::right(value));
    }
}

// =============================================================================
// Validation<E, T> Property Tests
// =============================================================================

proptest! {
    /// Combining two invalid inputs keeps every error of both, in order.
    #[test]
    fn prop_validation_combine_accumulates(
        first in prop::collection::vec("[a-z]{1,4}", 1..4),
        second in prop::collection::vec("[a-z]{1,4}", 1..4),
    ) {
        let combined = Validation::combine(
            Validation::<Vec<String>, i32>::invalid(first.clone()),
            Validation::<Vec<String>, i32>::invalid(second.clone()),
        )
        .ap(|a, b| a + b);
        let errors: Vec<String> = combined.get_error().unwrap_or_default().concat();
        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(errors.len(), expected.len());
        prop_assert_eq!(errors, expected);
    }

    #[test]
    fn prop_validation_combine_of_valid_values(first in any::<i16>(), second in any::<i16>()) {
        let combined = Validation::combine(
            Validation::<String, i16>::valid(first),
            Validation::<String, i16>::valid(second),
        )
        .ap(|a, b| i32::from(a) + i32::from(b));
        prop_assert_eq!(combined, Validation::valid(i32::from(first) + i32::from(second)));
    }
}
