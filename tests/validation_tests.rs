//! Integration tests for `Validation<E, T>`.
//!
//! Validation accumulates every error when independent inputs are combined,
//! instead of stopping at the first one.

use fpcore::Error;
use fpcore::control::{Either, Maybe, Validation};
use rstest::rstest;

#[derive(Debug, PartialEq)]
struct Account {
    name: String,
    age: u32,
    email: String,
}

fn validate_name(name: &str) -> Validation<String, String> {
    if !name.is_empty() && name.chars().all(char::is_alphabetic) {
        Validation::valid(name.to_string())
    } else {
        Validation::invalid(format!("invalid name: {name:?}"))
    }
}

fn validate_age(age: i64) -> Validation<String, u32> {
    match u32::try_from(age) {
        Ok(age) if age < 150 => Validation::valid(age),
        _ => Validation::invalid(format!("invalid age: {age}")),
    }
}

fn validate_email(email: &str) -> Validation<String, String> {
    if email.contains('@') {
        Validation::valid(email.to_string())
    } else {
        Validation::invalid(format!("invalid email: {email}"))
    }
}

fn account(name: &str, age: i64, email: &str) -> Validation<Vec<String>, Account> {
    Validation::combine(validate_name(name), validate_age(age))
        .combine(validate_email(email))
        .ap(|name, age, email| Account { name, age, email })
}

// =============================================================================
// Accumulation
// =============================================================================

#[rstest]
fn all_valid_inputs_build_the_value() {
    assert_eq!(
        account("Ada", 36, "ada@example.com"),
        Validation::valid(Account {
            name: String::from("Ada"),
            age: 36,
            email: String::from("ada@example.com"),
        })
    );
}

#[rstest]
fn every_error_is_reported_in_input_order() {
    assert_eq!(
        account("", -1, "nowhere"),
        Validation::invalid(vec![
            String::from("invalid name: \"\""),
            String::from("invalid age: -1"),
            String::from("invalid email: nowhere"),
        ])
    );
}

#[rstest]
#[case("Ada", 200, vec!["invalid age: 200"])]
#[case("Ada1", 20, vec!["invalid name: \"Ada1\""])]
fn single_errors(#[case] name: &str, #[case] age: i64, #[case] expected: Vec<&str>) {
    let errors = account(name, age, "a@b").get_error().unwrap_or_default();
    assert_eq!(errors, expected);
}

#[rstest]
fn eight_inputs_can_be_combined() {
    let total = Validation::combine(Validation::<String, i32>::valid(1), Validation::valid(2))
        .combine(Validation::valid(3))
        .combine(Validation::valid(4))
        .combine(Validation::valid(5))
        .combine(Validation::valid(6))
        .combine(Validation::valid(7))
        .combine(Validation::valid(8))
        .ap(|a, b, c, d, e, f, g, h| a + b + c + d + e + f + g + h);
    assert_eq!(total, Validation::valid(36));
}

#[rstest]
fn zip_with_combines_errors_through_semigroup() {
    let both: Validation<String, i32> = Validation::invalid(String::from("a"));
    let zipped = both.zip_with(Validation::<String, i32>::invalid(String::from("b")), |x, y| x + y);
    assert_eq!(zipped, Validation::invalid(String::from("ab")));
}

#[rstest]
fn sequence_and_traverse_collect_all_errors() {
    let results = Validation::traverse([10, -3, 40, -7], validate_age);
    assert_eq!(
        results,
        Validation::invalid(vec![
            String::from("invalid age: -3"),
            String::from("invalid age: -7"),
        ])
    );
    assert_eq!(
        Validation::sequence(vec![validate_age(1), validate_age(2)]),
        Validation::valid(vec![1, 2])
    );
}

// =============================================================================
// Single-value Operations
// =============================================================================

#[rstest]
fn map_and_flat_map_act_on_valid() {
    assert_eq!(validate_age(20).map(|age| age + 1), Validation::valid(21));
    assert_eq!(
        validate_age(20).flat_map(|age| validate_age(i64::from(age) * 10)),
        Validation::invalid(String::from("invalid age: 200"))
    );
    assert_eq!(validate_age(-1).map_error(|error| error.len()), Validation::invalid(15));
}

#[rstest]
fn bimap_and_fold() {
    let rendered = validate_age(-1).fold(|error| error, |age| age.to_string());
    assert_eq!(rendered, "invalid age: -1");
    assert_eq!(
        validate_age(3).bimap(|error| error.len(), |age| age * 2),
        Validation::valid(6)
    );
}

#[rstest]
fn filter_returns_none_for_rejected_valid_value() {
    assert_eq!(validate_age(3).filter(|age| *age > 5), Maybe::none());
    assert!(validate_age(-3).filter(|age| *age > 5).is_defined());
}

#[rstest]
fn extraction_reports_empty_value() {
    assert_eq!(validate_age(3).get(), Ok(3));
    assert_eq!(validate_age(-3).get(), Err(Error::empty("Validation::get")));
    assert!(validate_age(3).get_error().is_err());
    assert_eq!(validate_age(-3).get_or_else(0), 0);
}

#[rstest]
fn conversions() {
    assert_eq!(validate_age(3).to_either(), Either::right(3));
    assert_eq!(validate_age(3).to_maybe(), Maybe::some(3));
    assert_eq!(validate_age(-3).to_maybe(), Maybe::none());
    assert_eq!(validate_age(3).to_string(), "Valid(3)");
}
