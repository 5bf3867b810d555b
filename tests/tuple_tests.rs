//! Integration tests for the tuple family.

use fpcore::tuple;
use fpcore::tuple::{Concat, Tuple1, Tuple2, Tuple3, Tuple4, Tuple8};
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Construction and Access
// =============================================================================

#[rstest]
fn components_are_public_fields() {
    let triple = Tuple3::new(1, "two", 3.0);
    assert_eq!(triple._1, 1);
    assert_eq!(triple._2, "two");
    assert!((triple._3 - 3.0_f64).abs() < f64::EPSILON);
    assert_eq!(triple.arity(), 3);
}

#[rstest]
fn macro_and_native_tuple_conversions_agree() {
    let from_native: Tuple2<i32, char> = (1, 'a').into();
    assert_eq!(from_native, tuple!(1, 'a'));
    assert_eq!(tuple!(1, 'a').into_tuple(), (1, 'a'));
    assert_eq!(Tuple1::new("only").into_tuple(), ("only",));
}

#[rstest]
fn eight_components_are_supported() {
    let octuple = tuple!(1, 2, 3, 4, 5, 6, 7, 8);
    assert_eq!(octuple.arity(), 8);
    assert_eq!(octuple.map8(|n| n * 10)._8, 80);
    assert_eq!(octuple, Tuple8::new(1, 2, 3, 4, 5, 6, 7, 8));
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn map_component_leaves_others_unchanged() {
    let original = tuple!("java", 1989, true);
    let mapped = original.map2(|year| year.to_string());
    assert_eq!(mapped, tuple!("java", String::from("1989"), true));
    assert_eq!(original._2, 1989);
}

#[rstest]
fn update_replaces_a_component_with_a_new_type() {
    let updated = tuple!(1, 2, 3, 4).update3("three");
    assert_eq!(updated, Tuple4::new(1, 2, "three", 4));
}

#[rstest]
fn map_each_and_whole_tuple_map() {
    let each = tuple!(1, "a").map_each(|n| n + 1, |s: &str| s.to_uppercase());
    assert_eq!(each, tuple!(2, String::from("A")));
    let whole = tuple!(2, 3).map(|a, b| tuple!(a * b, a + b));
    assert_eq!(whole, tuple!(6, 5));
}

#[rstest]
fn apply_reduces_to_a_value() {
    assert_eq!(tuple!("x", 3).apply(|text, times| text.repeat(times)), "xxx");
}

#[rstest]
fn swap_exchanges_components() {
    assert_eq!(tuple!(1, 'a').swap(), tuple!('a', 1));
}

// =============================================================================
// Concatenation
// =============================================================================

#[rstest]
fn concat_preserves_order() {
    let joined = tuple!(1, 2).concat(tuple!('a', 'b', 'c'));
    assert_eq!(joined, tuple!(1, 2, 'a', 'b', 'c'));
}

#[rstest]
fn concat_is_associative() {
    let left = tuple!(1).concat(tuple!(2)).concat(tuple!(3));
    let right = tuple!(1).concat(tuple!(2).concat(tuple!(3)));
    assert_eq!(left, right);
}

// =============================================================================
// Standard Traits
// =============================================================================

#[rstest]
#[case(tuple!(1, 2), tuple!(1, 3))]
#[case(tuple!(0, 9), tuple!(1, 0))]
fn ordering_is_lexicographic(#[case] smaller: Tuple2<i32, i32>, #[case] larger: Tuple2<i32, i32>) {
    assert!(smaller < larger);
}

#[rstest]
fn equal_tuples_hash_equally() {
    let set: HashSet<Tuple2<i32, &str>> = [tuple!(1, "a"), tuple!(1, "a"), tuple!(2, "a")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn display_renders_components() {
    assert_eq!(tuple!(1, "a", 'c').to_string(), "(1, a, c)");
    assert_eq!(Tuple1::new(7).to_string(), "(7)");
}

#[rstest]
fn sequence_unzips_pairs() {
    let pairs = vec![tuple!(1, 'a'), tuple!(2, 'b'), tuple!(3, 'c')];
    assert_eq!(Tuple2::sequence(pairs), tuple!(vec![1, 2, 3], vec!['a', 'b', 'c']));
}
