//! Runtime variant tags for sum types.

use std::fmt::Debug;

use crate::control::{Either, Maybe, Try, Validation};

/// The variant of one of the crate's control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `Maybe::Some`.
    Some,
    /// `Maybe::None`.
    None,
    /// `Either::Left`.
    Left,
    /// `Either::Right`.
    Right,
    /// `Try::Success`.
    Success,
    /// `Try::Failure`.
    Failure,
    /// `Validation::Valid`.
    Valid,
    /// `Validation::Invalid`.
    Invalid,
}

/// A value whose variant can be tested at runtime with
/// [`tag`](super::tag).
///
/// User sum types participate by choosing their own tag type.
///
/// # Examples
///
/// ```rust
/// use fpcore::pattern::{Match, Tagged, case, tag};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// #[derive(Debug, PartialEq)]
/// enum ShapeTag {
///     Circle,
///     Square,
/// }
///
/// impl Tagged for Shape {
///     type Tag = ShapeTag;
///
///     fn tag(&self) -> ShapeTag {
///         match self {
///             Self::Circle(_) => ShapeTag::Circle,
///             Self::Square(_) => ShapeTag::Square,
///         }
///     }
/// }
///
/// let kind = Match::new(Shape::Square(2.0))
///     .of([
///         case(tag(ShapeTag::Circle), |_| "round"),
///         case(tag(ShapeTag::Square), |_| "angular"),
///     ]);
/// assert_eq!(kind, Ok("angular"));
/// ```
pub trait Tagged {
    /// The type identifying each variant.
    type Tag: PartialEq + Debug;

    /// Returns the variant of this value.
    fn tag(&self) -> Self::Tag;
}

impl<T> Tagged for Maybe<T> {
    type Tag = Tag;

    fn tag(&self) -> Tag {
        match self {
            Self::Some(_) => Tag::Some,
            Self::None => Tag::None,
        }
    }
}

impl<L, R> Tagged for Either<L, R> {
    type Tag = Tag;

    fn tag(&self) -> Tag {
        match self {
            Self::Left(_) => Tag::Left,
            Self::Right(_) => Tag::Right,
        }
    }
}

impl<T> Tagged for Try<T> {
    type Tag = Tag;

    fn tag(&self) -> Tag {
        match self {
            Self::Success(_) => Tag::Success,
            Self::Failure(_) => Tag::Failure,
        }
    }
}

impl<E, T> Tagged for Validation<E, T> {
    type Tag = Tag;

    fn tag(&self) -> Tag {
        match self {
            Self::Valid(_) => Tag::Valid,
            Self::Invalid(_) => Tag::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(1).tag(), Tag::Some)]
    #[case(Maybe::<i32>::none().tag(), Tag::None)]
    #[case(Either::<i32, i32>::left(1).tag(), Tag::Left)]
    #[case(Either::<i32, i32>::right(1).tag(), Tag::Right)]
    #[case(Try::success(1).tag(), Tag::Success)]
    #[case(Try::<i32>::failure(Error::empty("test")).tag(), Tag::Failure)]
    #[case(Validation::<i32, i32>::valid(1).tag(), Tag::Valid)]
    #[case(Validation::<i32, i32>::invalid(1).tag(), Tag::Invalid)]
    fn control_values_report_their_variant(#[case] actual: Tag, #[case] expected: Tag) {
        assert_eq!(actual, expected);
    }
}
