//! Compile-time dispatch between integer and real uniform sampling.
//!
//! Integers sample the closed interval `[min, max]`, reals the half-open
//! interval `[min, max)`. Generic code that only knows "some scalar" bounds
//! on [`SampleScalar`] and gets the right rule for the concrete type.

use std::fmt::Debug;

use rand::RngCore;

use crate::error::RandomError;
use crate::source::RandomSource;

/// Scalar types that can be drawn uniformly from a [`RandomSource`].
///
/// Implemented for every primitive integer and float type.
///
/// # Examples
///
/// ```
/// use banan_rng::{RandomSource, SampleScalar};
///
/// fn pick<T: SampleScalar>(source: &mut RandomSource, lo: T, hi: T) -> T {
///     T::sample_uniform(source, lo, hi).unwrap()
/// }
///
/// let mut source = RandomSource::from_seed(8);
/// assert!((0..=9).contains(&pick(&mut source, 0_u32, 9)));
/// assert!((0.0..1.0).contains(&pick(&mut source, 0.0_f64, 1.0)));
/// ```
pub trait SampleScalar: Copy + PartialOrd + Debug {
    /// Draws a value uniformly between `min` and `max`.
    fn sample_uniform<R: RngCore>(
        source: &mut RandomSource<R>,
        min: Self,
        max: Self,
    ) -> Result<Self, RandomError>;
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl SampleScalar for $t {
                #[inline]
                fn sample_uniform<R: RngCore>(
                    source: &mut RandomSource<R>,
                    min: Self,
                    max: Self,
                ) -> Result<Self, RandomError> {
                    source.uniform_int(min, max)
                }
            }
        )*
    };
}

macro_rules! impl_sample_real {
    ($($t:ty),*) => {
        $(
            impl SampleScalar for $t {
                #[inline]
                fn sample_uniform<R: RngCore>(
                    source: &mut RandomSource<R>,
                    min: Self,
                    max: Self,
                ) -> Result<Self, RandomError> {
                    source.uniform_real(min, max)
                }
            }
        )*
    };
}

impl_sample_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sample_real!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_upper_bound_reachable() {
        let mut source = RandomSource::from_seed(42);
        let hit_max = (0..500).any(|_| u8::sample_uniform(&mut source, 0, 1).unwrap() == 1);
        assert!(hit_max);
    }

    #[test]
    fn test_real_upper_bound_excluded() {
        let mut source = RandomSource::from_seed(42);
        for _ in 0..10_000 {
            let v = f32::sample_uniform(&mut source, 0.0, 1.0).unwrap();
            assert!(v < 1.0);
        }
    }

    #[test]
    fn test_errors_propagate() {
        let mut source = RandomSource::from_seed(42);
        assert!(i64::sample_uniform(&mut source, 1, 0).is_err());
        assert!(f64::sample_uniform(&mut source, 1.0, 0.0).is_err());
    }
}
