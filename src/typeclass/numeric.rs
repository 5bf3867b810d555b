//! Numeric capabilities used by ranges and aggregates.
//!
//! - [`Integral`]: integer primitives that can step through a range
//! - [`AsFloat`]: numeric primitives that can be averaged as `f64`

/// Integer types usable as stream range bounds and steps.
///
/// Stepping is checked: a progression ends instead of wrapping around.
pub trait Integral: Copy + PartialOrd + Send + Sync + 'static {
    /// The additive identity.
    const ZERO: Self;
    /// The unit step.
    const ONE: Self;

    /// Adds `step`, returning `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_integral {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Integral for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )+
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Numeric types whose values can be averaged in floating point.
pub trait AsFloat {
    /// Converts to `f64`, possibly losing precision.
    fn as_f64(&self) -> f64;
}

macro_rules! impl_as_float {
    ($($numeric:ty),+ $(,)?) => {
        $(
            impl AsFloat for $numeric {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )+
    };
}

impl_as_float!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1u8, 1u8, Some(2u8))]
    #[case(255u8, 1u8, None)]
    fn checked_step_stops_at_overflow(#[case] value: u8, #[case] step: u8, #[case] expected: Option<u8>) {
        assert_eq!(value.checked_step(step), expected);
    }

    #[rstest]
    fn signed_step_can_descend() {
        assert_eq!(5i32.checked_step(-2), Some(3));
        assert_eq!(i64::MIN.checked_step(-1), None);
    }

    #[rstest]
    fn as_f64_converts_every_primitive() {
        assert!((3u16.as_f64() - 3.0).abs() < f64::EPSILON);
        assert!((-2.5f32.as_f64() + 2.5).abs() < f64::EPSILON);
    }
}
