//! Fixed-arity tuples with immutable, component-wise transformations.
//!
//! `Tuple1` through `Tuple8` expose their components as public fields
//! `_1` .. `_8`. Every transformation consumes the tuple and returns a new
//! one; equality, ordering and hashing are component-wise.
//!
//! # Examples
//!
//! ```rust
//! use fpcore::tuple;
//! use fpcore::tuple::{Concat, Tuple2};
//!
//! let pair = tuple!(1, "one");
//! assert_eq!(pair.arity(), 2);
//! assert_eq!(pair.map1(|n| n * 10), Tuple2::new(10, "one"));
//! assert_eq!(pair.swap(), tuple!("one", 1));
//! assert_eq!(pair.concat(tuple!('x')), tuple!(1, "one", 'x'));
//! assert_eq!(tuple!(2, 3).apply(|a, b| a * b), 6);
//! ```

#![allow(clippy::pub_underscore_fields, clippy::used_underscore_binding)]

mod concat;

pub use concat::Concat;

use std::fmt;

use paste::paste;

macro_rules! define_tuple {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal,
        ($($field:ident: $ty:ident => $u:ident, $f:ident);+), $fields:tt;
        $($index:literal: $target:ident: $target_ty:ident => <$($out:ident),+>;)+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<$($ty),+> {
            $(
                #[allow(missing_docs)]
                pub $field: $ty,
            )+
        }

        impl<$($ty),+> $name<$($ty),+> {
            /// Creates a tuple from its components.
            #[inline]
            pub const fn new($($field: $ty),+) -> Self {
                Self { $($field),+ }
            }

            /// Returns the number of components.
            #[inline]
            pub const fn arity(&self) -> usize {
                $arity
            }

            /// Maps all components at once with a single function.
            pub fn map<$($u),+>(self, mapper: impl FnOnce($($ty),+) -> $name<$($u),+>) -> $name<$($u),+> {
                mapper($(self.$field),+)
            }

            /// Maps every component with its own function.
            pub fn map_each<$($u),+>(self, $($f: impl FnOnce($ty) -> $u),+) -> $name<$($u),+> {
                $name { $($field: $f(self.$field)),+ }
            }

            /// Applies a function to the components as positional arguments.
            pub fn apply<R>(self, function: impl FnOnce($($ty),+) -> R) -> R {
                function($(self.$field),+)
            }

            /// Converts into the native Rust tuple.
            pub fn into_tuple(self) -> ($($ty,)+) {
                ($(self.$field,)+)
            }

            $(
                paste! {
                    #[doc = "Transforms component " $index ", leaving the others unchanged."]
                    pub fn [<map $index>]<U>(self, mapper: impl FnOnce($target_ty) -> U) -> $name<$($out),+> {
                        let $name $fields = self;
                        let $target = mapper($target);
                        $name $fields
                    }

                    #[doc = "Replaces component " $index "."]
                    pub fn [<update $index>]<U>(self, value: U) -> $name<$($out),+> {
                        self.[<map $index>](|_| value)
                    }
                }
            )+
        }

        impl<$($ty),+> From<($($ty,)+)> for $name<$($ty),+> {
            fn from(($($field,)+): ($($ty,)+)) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$($ty: fmt::Display),+> fmt::Display for $name<$($ty),+> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                let rendered = [$(self.$field.to_string()),+];
                write!(formatter, "({})", rendered.join(", "))
            }
        }
    };
}

define_tuple! {
    /// A tuple of one element.
    Tuple1, 1, (_1: T1 => U1, f1), { _1 };
    1: _1: T1 => <U>;
}

define_tuple! {
    /// A tuple of two elements.
    Tuple2, 2, (_1: T1 => U1, f1; _2: T2 => U2, f2), { _1, _2 };
    1: _1: T1 => <U, T2>;
    2: _2: T2 => <T1, U>;
}

define_tuple! {
    /// A tuple of three elements.
    Tuple3, 3, (_1: T1 => U1, f1; _2: T2 => U2, f2; _3: T3 => U3, f3), { _1, _2, _3 };
    1: _1: T1 => <U, T2, T3>;
    2: _2: T2 => <T1, U, T3>;
    3: _3: T3 => <T1, T2, U>;
}

define_tuple! {
    /// A tuple of four elements.
    Tuple4, 4, (_1: T1 => U1, f1; _2: T2 => U2, f2; _3: T3 => U3, f3; _4: T4 => U4, f4), { _1, _2, _3, _4 };
    1: _1: T1 => <U, T2, T3, T4>;
    2: _2: T2 => <T1, U, T3, T4>;
    3: _3: T3 => <T1, T2, U, T4>;
    4: _4: T4 => <T1, T2, T3, U>;
}

define_tuple! {
    /// A tuple of five elements.
    Tuple5, 5, (_1: T1 => U1, f1; _2: T2 => U2, f2; _3: T3 => U3, f3; _4: T4 => U4, f4; _5: T5 => U5, f5), { _1, _2, _3, _4, _5 };
    1: _1: T1 => <U, T2, T3, T4, T5>;
    2: _2: T2 => <T1, U, T3, T4, T5>;
    3: _3: T3 => <T1, T2, U, T4, T5>;
    4: _4: T4 => <T1, T2, T3, U, T5>;
    5: _5: T5 => <T1, T2, T3, T4, U>;
}

define_tuple! {
    /// A tuple of six elements.
    Tuple6, 6, (_1: T1 => U1, f1; _2: T2 => U2, f2; _3: T3 => U3, f3; _4: T4 => U4, f4; _5: T5 => U5, f5; _6: T6 => U6, f6), { _1, _2, _3, _4, _5, _6 };
    1: _1: T1 => <U, T2, T3, T4, T5, T6>;
    2: _2: T2 => <T1, U, T3, T4, T5, T6>;
    3: _3: T3 => <T1, T2, U, T4, T5, T6>;
    4: _4: T4 => <T1, T2, T3, U, T5, T6>;
    5: _5: T5 => <T1, T2, T3, T4, U, T6>;
    6: _6: T6 => <T1, T2, T3, T4, T5, U>;
}

define_tuple! {
    /// A tuple of seven elements.
    Tuple7, 7, (_1: T1 => U1, f1; _2: T2 => U2, f2; _3: T3 => U3, f3; _4: T4 => U4, f4; _5: T5 => U5, f5; _6: T6 => U6, f6; _7: T7 => U7, f7), { _1, _2, _3, _4, _5, _6, _7 };
    1: _1: T1 => <U, T2, T3, T4, T5, T6, T7>;
    2: _2: T2 => <T1, U, T3, T4, T5, T6, T7>;
    3: _3: T3 => <T1, T2, U, T4, T5, T6, T7>;
    4: _4: T4 => <T1, T2, T3, U, T5, T6, T7>;
    5: _5: T5 => <T1, T2, T3, T4, U, T6, T7>;
    6: _6: T6 => <T1, T2, T3, T4, T5, U, T7>;
    7: _7: T7 => <T1, T2, T3, T4, T5, T6, U>;
}

define_tuple! {
    /// A tuple of eight elements.
    Tuple8, 8, (_1: T1 => U1, f1; _2: T2 => U2, f2; _3: T3 => U3, f3; _4: T4 => U4, f4; _5: T5 => U5, f5; _6: T6 => U6, f6; _7: T7 => U7, f7; _8: T8 => U8, f8), { _1, _2, _3, _4, _5, _6, _7, _8 };
    1: _1: T1 => <U, T2, T3, T4, T5, T6, T7, T8>;
    2: _2: T2 => <T1, U, T3, T4, T5, T6, T7, T8>;
    3: _3: T3 => <T1, T2, U, T4, T5, T6, T7, T8>;
    4: _4: T4 => <T1, T2, T3, U, T5, T6, T7, T8>;
    5: _5: T5 => <T1, T2, T3, T4, U, T6, T7, T8>;
    6: _6: T6 => <T1, T2, T3, T4, T5, U, T7, T8>;
    7: _7: T7 => <T1, T2, T3, T4, T5, T6, U, T8>;
    8: _8: T8 => <T1, T2, T3, T4, T5, T6, T7, U>;
}
impl<T1, T2> Tuple2<T1, T2> {
    /// Exchanges the two components.
    pub fn swap(self) -> Tuple2<T2, T1> {
        Tuple2::new(self._2, self._1)
    }
}

impl<T1, T2> Tuple2<Vec<T1>, Vec<T2>> {
    /// Unzips pairs into a pair of vectors in a single pass, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpcore::tuple::Tuple2;
    ///
    /// let pairs = vec![Tuple2::new(1, 'a'), Tuple2::new(2, 'b')];
    /// assert_eq!(Tuple2::sequence(pairs), Tuple2::new(vec![1, 2], vec!['a', 'b']));
    /// ```
    pub fn sequence<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = Tuple2<T1, T2>>,
    {
        let (firsts, seconds) = pairs.into_iter().map(Tuple2::into_tuple).unzip();
        Self::new(firsts, seconds)
    }
}

impl<T1, T2, T3> Tuple3<Vec<T1>, Vec<T2>, Vec<T3>> {
    /// Unzips triples into a triple of vectors in a single pass, preserving order.
    pub fn sequence<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Tuple3<T1, T2, T3>>,
    {
        let iterator = triples.into_iter();
        let capacity = iterator.size_hint().0;
        let mut result = Self::new(
            Vec::with_capacity(capacity),
            Vec::with_capacity(capacity),
            Vec::with_capacity(capacity),
        );
        for Tuple3 { _1, _2, _3 } in iterator {
            result._1.push(_1);
            result._2.push(_2);
            result._3.push(_3);
        }
        result
    }
}

/// Builds a `Tuple1` .. `Tuple8` from its components.
///
/// # Examples
///
/// ```rust
/// use fpcore::tuple;
/// use fpcore::tuple::Tuple3;
///
/// assert_eq!(tuple!(1, 'b', "c"), Tuple3::new(1, 'b', "c"));
/// ```
#[macro_export]
macro_rules! tuple {
    ($a:expr $(,)?) => {
        $crate::tuple::Tuple1::new($a)
    };
    ($a:expr, $b:expr $(,)?) => {
        $crate::tuple::Tuple2::new($a, $b)
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::tuple::Tuple3::new($a, $b, $c)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::tuple::Tuple4::new($a, $b, $c, $d)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::tuple::Tuple5::new($a, $b, $c, $d, $e)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr $(,)?) => {
        $crate::tuple::Tuple6::new($a, $b, $c, $d, $e, $f)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr $(,)?) => {
        $crate::tuple::Tuple7::new($a, $b, $c, $d, $e, $f, $g)
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr, $h:expr $(,)?) => {
        $crate::tuple::Tuple8::new($a, $b, $c, $d, $e, $f, $g, $h)
    };
}
