//! Integration tests for `Try<T>`.
//!
//! Try captures the outcome of a computation:
//! - `Success(T)`: the computed value
//! - `Failure(Cause)`: a returned error or a recoverable panic

use fpcore::Error;
use fpcore::control::{Either, Maybe, Try, Validation};
use fpcore::error::{Cause, FatalSignal, MessageFailure, PanicFailure};
use fpcore::typeclass::Traversable;
use rstest::rstest;
use std::num::ParseIntError;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn divide(numerator: i32, denominator: i32) -> Try<i32> {
    Try::catching(|| numerator / denominator)
}

// =============================================================================
// Capturing
// =============================================================================

#[rstest]
fn of_captures_returned_errors() {
    let failed = Try::of(|| "x".parse::<i32>());
    assert!(failed.is_failure());
    let cause = failed.get_cause();
    assert!(cause.is_ok_and(|cause| cause.is::<ParseIntError>()));
}

#[rstest]
fn catching_captures_panics() {
    let failed = divide(1, 0);
    let cause = failed.get_cause();
    assert!(cause.as_ref().is_ok_and(|cause| cause.is::<PanicFailure>()));
    let message = cause.map(|cause| cause.to_string()).unwrap_or_default();
    assert!(message.contains("divide by zero"), "{message}");
}

#[rstest]
fn catching_resumes_fatal_signals() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        Try::catching(|| -> i32 { FatalSignal::raise("out of memory") })
    }));
    let payload = outcome.err();
    assert!(payload.is_some_and(|payload| FatalSignal::is_payload(&*payload)));
}

#[rstest]
fn from_result_captures_err() {
    let failed: Try<i32> = Err::<i32, _>(MessageFailure(String::from("boom"))).into();
    assert_eq!(failed.get_cause().map(|cause| cause.to_string()), Ok(String::from("boom")));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_propagates_the_cause() {
    assert_eq!(divide(6, 3).get(), Ok(2));
    assert!(matches!(divide(1, 0).get(), Err(Error::Failure(_))));
    assert_eq!(divide(6, 3).get_cause(), Err(Error::empty("Try::get_cause")));
}

#[rstest]
fn fallbacks_on_failure() {
    assert_eq!(divide(1, 0).get_or_else(-1), -1);
    assert!(divide(1, 0).get_or_else_get(|cause| i32::from(cause.is::<PanicFailure>())) == 1);
    assert!(divide(1, 0).get_or_else_throw(|_| "failed").is_err());
    assert_eq!(divide(1, 0).get_or_else_try(|| Ok::<_, ()>(0)), Ok(0));
    assert_eq!(divide(1, 0).fold(|_| "failure", |_| "success"), "failure");
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_and_flat_map_chain_successes() {
    assert_eq!(divide(8, 2).map(|n| n + 1), Try::success(5));
    assert_eq!(divide(8, 2).flat_map(|n| divide(n, 2)), Try::success(2));
    assert!(divide(8, 0).flat_map(|n| divide(n, 2)).is_failure());
}

#[rstest]
fn map_try_captures_errors_of_the_mapping() {
    let parsed = Try::success("12x").map_try(|text| text.parse::<i32>());
    assert!(parsed.get_cause().is_ok_and(|cause| cause.is::<ParseIntError>()));
}

#[rstest]
fn filter_turns_rejection_into_failure() {
    assert_eq!(Try::success(3).filter(|n| *n > 1), Try::success(3));
    let rejected = Try::success(0).filter(|n| *n > 1);
    assert!(rejected.get_cause().is_ok_and(|cause| cause.is::<Error>()));
}

#[rstest]
fn recover_replaces_failures_only() {
    assert_eq!(divide(1, 0).recover(|_| 0), Try::success(0));
    assert_eq!(divide(4, 2).recover(|_| 0), Try::success(2));
    assert_eq!(divide(1, 0).recover_with(|_| divide(9, 3)), Try::success(3));
}

#[rstest]
fn callbacks_observe_the_matching_variant() {
    let mut successes = 0;
    let mut failures = 0;
    let _ = divide(4, 2)
        .on_success(|_| successes += 1)
        .on_failure(|_| failures += 1);
    assert_eq!((successes, failures), (1, 0));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn to_either_keeps_the_failure_class_on_the_left() {
    let either = divide(1, 0).to_either();
    let left = either.left_option();
    assert!(left.as_ref().fold(|| false, |cause: &Cause| cause.is::<PanicFailure>()));
    assert_eq!(divide(2, 1).to_either(), Either::right(2));
}

#[rstest]
fn conversions_to_other_control_values() {
    assert_eq!(divide(2, 1).to_maybe(), Maybe::some(2));
    assert_eq!(divide(2, 0).to_maybe(), Maybe::none());
    assert_eq!(divide(2, 1).to_validation(), Validation::valid(2));
    assert_eq!(divide(2, 1).to_vec(), vec![2]);
    assert!(Traversable::is_empty(&divide(2, 0)));
}
