//! Combinators over plain Rust closures.
//!
//! - [`compose`] / [`and_then`] / [`and_then2`]: sequencing
//! - [`flip`]: reverses the arguments of a binary function
//! - [`tupled2`] / [`tupled3`] / [`untupled2`] / [`untupled3`]: move
//!   between positional arguments and a [`Tuple2`] / [`Tuple3`]
//! - [`partial2`] / [`partial3`]: bind the first argument
//! - [`curry2!`](crate::curry2) / [`curry3!`](crate::curry3): one argument
//!   at a time
//!
//! # Examples
//!
//! ```rust
//! use fpcore::function::{and_then2, flip, partial3};
//!
//! let sum_then_triple = and_then2(|x: i32, y: i32| x + y, |n: i32| n * 3);
//! assert_eq!(sum_then_triple(1, 2), 9);
//!
//! let reversed_div = flip(|x: f32, y: f32| x / y);
//! assert_eq!(reversed_div(2.0, 3.0), 3.0 / 2.0);
//!
//! let add_to_ten = partial3(|x: i32, y: i32, z: i32| x + y + z, 10);
//! assert_eq!(add_to_ten(3, 4), 17);
//! ```

use crate::tuple::{Tuple2, Tuple3};

// =============================================================================
// Sequencing
// =============================================================================

/// Returns `outer(inner(x))`.
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Returns `then(first(x))`; the argument order of [`compose`] reversed.
pub fn and_then<A, B, C, F, G>(first: F, then: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| then(first(input))
}

/// Feeds the result of a binary function into a unary one.
pub fn and_then2<A, B, C, D, F, G>(first: F, then: G) -> impl Fn(A, B) -> D
where
    F: Fn(A, B) -> C,
    G: Fn(C) -> D,
{
    move |left, right| then(first(left, right))
}

/// Swaps the arguments of a binary function.
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

// =============================================================================
// Tupling
// =============================================================================

/// Turns a binary function into one taking a [`Tuple2`].
pub fn tupled2<A, B, C, F>(function: F) -> impl Fn(Tuple2<A, B>) -> C
where
    F: Fn(A, B) -> C,
{
    move |arguments| arguments.apply(&function)
}

/// Turns a ternary function into one taking a [`Tuple3`].
pub fn tupled3<A, B, C, D, F>(function: F) -> impl Fn(Tuple3<A, B, C>) -> D
where
    F: Fn(A, B, C) -> D,
{
    move |arguments| arguments.apply(&function)
}

/// Inverse of [`tupled2`].
pub fn untupled2<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(Tuple2<A, B>) -> C,
{
    move |first, second| function(Tuple2::new(first, second))
}

/// Inverse of [`tupled3`].
pub fn untupled3<A, B, C, D, F>(function: F) -> impl Fn(A, B, C) -> D
where
    F: Fn(Tuple3<A, B, C>) -> D,
{
    move |first, second, third| function(Tuple3::new(first, second, third))
}

// =============================================================================
// Partial Application
// =============================================================================

/// Binds the first argument of a binary function.
pub fn partial2<A, B, C, F>(function: F, first: A) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |second| function(first.clone(), second)
}

/// Binds the first argument of a ternary function.
pub fn partial3<A, B, C, D, F>(function: F, first: A) -> impl Fn(B, C) -> D
where
    A: Clone,
    F: Fn(A, B, C) -> D,
{
    move |second, third| function(first.clone(), second, third)
}

/// Curries a binary function: `curry2!(f)(a)(b) == f(a, b)`.
///
/// Every argument but the last must be `Clone`, since each partial
/// application can be called again.
///
/// # Examples
///
/// ```rust
/// use fpcore::curry2;
///
/// let divide = curry2!(|x: f32, y: f32| x / y);
/// let three_over = divide(3.0);
/// assert_eq!(three_over(4.0), 0.75);
/// assert_eq!(three_over(2.0), 1.5);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a ternary function: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use fpcore::curry3;
///
/// let render = curry3!(|flag: bool, count: i64, mark: char| format!("{flag}{count}{mark}"));
/// assert_eq!(render(true)(1)('A'), "true1A");
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Maybe, Try};
    use crate::error::MessageFailure;
    use crate::function::{lift, lift_try};
    use rstest::rstest;

    fn divide(x: f32, y: f32) -> f32 {
        x / y
    }

    fn checked_div(x: i32, y: i32) -> Result<i32, MessageFailure> {
        x.checked_div(y)
            .ok_or_else(|| MessageFailure(String::from("division by zero")))
    }

    #[rstest]
    fn and_then_runs_left_to_right() {
        let sum_then_triple = and_then2(|x: i32, y: i32| x + y, |n: i32| n * 3);
        assert_eq!(sum_then_triple(1, 2), (1 + 2) * 3);
        let increment_then_double = and_then(|n: i32| n + 1, |n: i32| n * 2);
        let double_then_increment = compose(|n: i32| n + 1, |n: i32| n * 2);
        assert_eq!(increment_then_double(5), 12);
        assert_eq!(double_then_increment(5), 11);
    }

    #[rstest]
    #[case(2.0, 3.0)]
    #[case(9.0, 4.5)]
    fn flip_reverses_arguments(#[case] x: f32, #[case] y: f32) {
        let reversed = flip(divide);
        assert_eq!(divide(x, y), x / y);
        assert_eq!(reversed(x, y), y / x);
    }

    #[rstest]
    fn curried_division_takes_one_argument_at_a_time() {
        let curried = curry2!(divide);
        assert_eq!(curried(3.0)(4.0), 3.0 / 4.0);
        let sum = curry3!(|x: i32, y: i32, z: i32| x + y + z);
        let partially = sum(1)(2);
        assert_eq!(partially(3), 6);
        assert_eq!(partially(10), 13);
    }

    #[rstest]
    fn tupled_and_untupled_are_inverse() {
        let tupled = tupled2(divide);
        assert_eq!(tupled(Tuple2::new(2.0, 3.0)), 2.0 / 3.0);
        let positional = untupled2(tupled);
        assert_eq!(positional(2.0, 3.0), 2.0 / 3.0);
        let rendered = tupled3(|flag: bool, count: i64, mark: char| format!("{flag}{count}{mark}"));
        assert_eq!(rendered(Tuple3::new(true, 1, 'A')), "true1A");
        assert_eq!(untupled3(rendered)(false, 2, 'B'), "false2B");
    }

    #[rstest]
    fn partial_application_binds_the_first_argument() {
        let add_to_ten = partial3(|x: i32, y: i32, z: i32| x + y + z, 10);
        assert_eq!(add_to_ten(3, 4), 10 + 3 + 4);
        let halve = partial2(flip(divide), 2.0);
        assert_eq!(halve(7.0), 3.5);
    }

    #[rstest]
    fn binary_functions_lift_through_tupling() {
        let lifted = lift(tupled2(checked_div));
        assert_eq!(lifted(Tuple2::new(6, 3)), Maybe::some(2));
        assert_eq!(lifted(Tuple2::new(1, 0)), Maybe::none());
        let attempted = lift_try(tupled2(checked_div));
        assert!(attempted(Tuple2::new(1, 0)).is_failure());
        assert_eq!(attempted(Tuple2::new(8, 2)), Try::success(4));
    }
}
