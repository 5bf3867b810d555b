//! Integration tests for `Either<L, R>`.
//!
//! Either is right-biased: transformations act on `Right` and pass `Left`
//! through unchanged.

use fpcore::Error;
use fpcore::control::{Either, Maybe, Validation};
use fpcore::typeclass::Traversable;
use rstest::rstest;
use std::cell::Cell;

type Parsed = Either<String, i32>;

fn parse(text: &str) -> Parsed {
    text.parse::<i32>().map_err(|error| error.to_string()).into()
}

// =============================================================================
// Construction and Extraction
// =============================================================================

#[rstest]
fn from_result_maps_ok_to_right() {
    assert_eq!(parse("12"), Either::right(12));
    assert!(parse("twelve").is_left());
}

#[rstest]
fn get_on_left_is_empty_value() {
    assert_eq!(parse("x").get(), Err(Error::empty("Either::get")));
    assert_eq!(Parsed::left(String::from("e")).get_left(), Ok(String::from("e")));
    assert_eq!(Parsed::right(1).get_left(), Err(Error::empty("Either::get_left")));
}

#[rstest]
fn options_expose_one_side() {
    assert_eq!(Parsed::right(1).right_option(), Maybe::some(1));
    assert_eq!(Parsed::right(1).left_option(), Maybe::none());
    assert_eq!(Parsed::right(1).right_ref(), Some(&1));
}

#[rstest]
fn fallbacks_receive_left_value() {
    assert_eq!(parse("x").get_or_else(0), 0);
    assert_eq!(Parsed::left(String::from("abc")).get_or_else_get(|left| left.len() as i32), 3);
    assert_eq!(Parsed::left(String::from("e")).get_or_else_throw(|left| left.len()), Err(1));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_is_right_biased() {
    assert_eq!(parse("2").map(|n| n * 3), Either::right(6));
    let left = Parsed::left(String::from("e"));
    assert_eq!(left.clone().map(|n| n * 3), left);
    assert_eq!(left.map_left(|error| error.len()), Either::left(1));
}

#[rstest]
fn bimap_and_fold_handle_both_sides() {
    let right = Parsed::right(4).bimap(|error| error.len(), |n| n > 3);
    assert_eq!(right, Either::right(true));
    assert_eq!(Parsed::left(String::from("ee")).fold(|error| error.len() as i32, |n| n), 2);
}

#[rstest]
fn flat_map_short_circuits() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Parsed::right(n / 2)
        } else {
            Parsed::left(format!("{n} is odd"))
        }
    };
    assert_eq!(Parsed::right(8).flat_map(halve).flat_map(halve), Either::right(2));
    assert_eq!(
        Parsed::right(6).flat_map(halve).flat_map(halve),
        Either::left(String::from("3 is odd"))
    );
}

#[rstest]
fn swap_exchanges_sides() {
    assert_eq!(Parsed::right(1).swap(), Either::<i32, String>::left(1));
}

#[rstest]
fn filter_keeps_left_and_tests_right() {
    assert_eq!(Parsed::right(5).filter(|n| *n > 3), Maybe::some(Either::right(5)));
    assert_eq!(Parsed::right(1).filter(|n| *n > 3), Maybe::none());
    let left = Parsed::left(String::from("e"));
    assert_eq!(left.clone().filter(|n| *n > 3), Maybe::some(left));
}

#[rstest]
fn filter_or_else_builds_left_from_rejected_value() {
    let checked = Parsed::right(1).filter_or_else(|n| *n > 3, |n| format!("{n} too small"));
    assert_eq!(checked, Either::left(String::from("1 too small")));
}

#[rstest]
fn or_else_replaces_left_only() {
    assert_eq!(parse("x").or_else(|| Parsed::right(0)), Either::right(0));
    assert_eq!(parse("1").or_else(|| Parsed::right(0)), Either::right(1));
}

#[rstest]
fn peek_observes_the_matching_side() {
    let right_seen = Cell::new(0);
    let left_seen = Cell::new(0);
    let _ = Parsed::right(3)
        .peek(|n| right_seen.set(*n))
        .peek_left(|_| left_seen.set(1));
    assert_eq!(right_seen.get(), 3);
    assert_eq!(left_seen.get(), 0);
}

// =============================================================================
// Conversions and Sequences
// =============================================================================

#[rstest]
fn to_validation_maps_sides() {
    assert_eq!(Parsed::right(1).to_validation(), Validation::valid(1));
    assert_eq!(
        Parsed::left(String::from("e")).to_validation(),
        Validation::invalid(String::from("e"))
    );
}

#[rstest]
fn sequence_right_stops_at_first_left() {
    assert_eq!(
        Either::sequence_right(vec![parse("1"), parse("2")]),
        Either::right(vec![1, 2])
    );
    assert!(Either::sequence_right(vec![parse("1"), parse("x"), parse("y")]).is_left());
}

#[rstest]
fn either_traverses_its_right_value() {
    assert_eq!(Parsed::right(2).to_vec(), vec![2]);
    assert!(Traversable::is_empty(&parse("x")));
    assert_eq!(Parsed::right(2).to_maybe(), Maybe::some(2));
}
