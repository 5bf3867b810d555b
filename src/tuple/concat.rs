//! Concatenation of tuples into a wider tuple.

use super::{Tuple1, Tuple2, Tuple3, Tuple4, Tuple5, Tuple6, Tuple7, Tuple8};

/// Joins two tuples, keeping the components of `self` first.
///
/// Implemented for every pair of tuples whose combined arity is at most 8.
/// Concatenation is associative but not commutative.
///
/// # Examples
///
/// ```rust
/// use fpcore::tuple::{Concat, Tuple1, Tuple2, Tuple3};
///
/// let joined = Tuple2::new(1, 'a').concat(Tuple1::new("z"));
/// assert_eq!(joined, Tuple3::new(1, 'a', "z"));
/// ```
pub trait Concat<Rhs> {
    /// The tuple produced by the concatenation.
    type Output;

    /// Appends the components of `other` after the components of `self`.
    fn concat(self, other: Rhs) -> Self::Output;
}

macro_rules! impl_concat {
    ($left:ident<$($l:ident),+> [$($lf:ident),+] + $right:ident<$($r:ident),+> [$($rf:ident),+] => $out:ident) => {
        impl<$($l,)+ $($r),+> Concat<$right<$($r),+>> for $left<$($l),+> {
            type Output = $out<$($l,)+ $($r),+>;

            #[inline]
            fn concat(self, other: $right<$($r),+>) -> Self::Output {
                $out::new($(self.$lf,)+ $(other.$rf),+)
            }
        }
    };
}

impl_concat!(Tuple1<A1> [_1] + Tuple1<B1> [_1] => Tuple2);
impl_concat!(Tuple1<A1> [_1] + Tuple2<B1, B2> [_1, _2] => Tuple3);
impl_concat!(Tuple1<A1> [_1] + Tuple3<B1, B2, B3> [_1, _2, _3] => Tuple4);
impl_concat!(Tuple1<A1> [_1] + Tuple4<B1, B2, B3, B4> [_1, _2, _3, _4] => Tuple5);
impl_concat!(Tuple1<A1> [_1] + Tuple5<B1, B2, B3, B4, B5> [_1, _2, _3, _4, _5] => Tuple6);
impl_concat!(Tuple1<A1> [_1] + Tuple6<B1, B2, B3, B4, B5, B6> [_1, _2, _3, _4, _5, _6] => Tuple7);
impl_concat!(Tuple1<A1> [_1] + Tuple7<B1, B2, B3, B4, B5, B6, B7> [_1, _2, _3, _4, _5, _6, _7] => Tuple8);
impl_concat!(Tuple2<A1, A2> [_1, _2] + Tuple1<B1> [_1] => Tuple3);
impl_concat!(Tuple2<A1, A2> [_1, _2] + Tuple2<B1, B2> [_1, _2] => Tuple4);
impl_concat!(Tuple2<A1, A2> [_1, _2] + Tuple3<B1, B2, B3> [_1, _2, _3] => Tuple5);
impl_concat!(Tuple2<A1, A2> [_1, _2] + Tuple4<B1, B2, B3, B4> [_1, _2, _3, _4] => Tuple6);
impl_concat!(Tuple2<A1, A2> [_1, _2] + Tuple5<B1, B2, B3, B4, B5> [_1, _2, _3, _4, _5] => Tuple7);
impl_concat!(Tuple2<A1, A2> [_1, _2] + Tuple6<B1, B2, B3, B4, B5, B6> [_1, _2, _3, _4, _5, _6] => Tuple8);
impl_concat!(Tuple3<A1, A2, A3> [_1, _2, _3] + Tuple1<B1> [_1] => Tuple4);
impl_concat!(Tuple3<A1, A2, A3> [_1, _2, _3] + Tuple2<B1, B2> [_1, _2] => Tuple5);
impl_concat!(Tuple3<A1, A2, A3> [_1, _2, _3] + Tuple3<B1, B2, B3> [_1, _2, _3] => Tuple6);
impl_concat!(Tuple3<A1, A2, A3> [_1, _2, _3] + Tuple4<B1, B2, B3, B4> [_1, _2, _3, _4] => Tuple7);
impl_concat!(Tuple3<A1, A2, A3> [_1, _2, _3] + Tuple5<B1, B2, B3, B4, B5> [_1, _2, _3, _4, _5] => Tuple8);
impl_concat!(Tuple4<A1, A2, A3, A4> [_1, _2, _3, _4] + Tuple1<B1> [_1] => Tuple5);
impl_concat!(Tuple4<A1, A2, A3, A4> [_1, _2, _3, _4] + Tuple2<B1, B2> [_1, _2] => Tuple6);
impl_concat!(Tuple4<A1, A2, A3, A4> [_1, _2, _3, _4] + Tuple3<B1, B2, B3> [_1, _2, _3] => Tuple7);
impl_concat!(Tuple4<A1, A2, A3, A4> [_1, _2, _3, _4] + Tuple4<B1, B2, B3, B4> [_1, _2, _3, _4] => Tuple8);
impl_concat!(Tuple5<A1, A2, A3, A4, A5> [_1, _2, _3, _4, _5] + Tuple1<B1> [_1] => Tuple6);
impl_concat!(Tuple5<A1, A2, A3, A4, A5> [_1, _2, _3, _4, _5] + Tuple2<B1, B2> [_1, _2] => Tuple7);
impl_concat!(Tuple5<A1, A2, A3, A4, A5> [_1, _2, _3, _4, _5] + Tuple3<B1, B2, B3> [_1, _2, _3] => Tuple8);
impl_concat!(Tuple6<A1, A2, A3, A4, A5, A6> [_1, _2, _3, _4, _5, _6] + Tuple1<B1> [_1] => Tuple7);
impl_concat!(Tuple6<A1, A2, A3, A4, A5, A6> [_1, _2, _3, _4, _5, _6] + Tuple2<B1, B2> [_1, _2] => Tuple8);
impl_concat!(Tuple7<A1, A2, A3, A4, A5, A6, A7> [_1, _2, _3, _4, _5, _6, _7] + Tuple1<B1> [_1] => Tuple8);
