//! Random construction of vectors.
//!
//! All constructors take the [`RandomSource`] explicitly. The bounded
//! geometric ones delegate to [`UnitSampler::default`]; build a
//! [`UnitSampler`] directly to choose a different attempt cap.

use num_traits::Float;
use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};

use banan_rng::{RandomSource, SampleScalar};

use crate::error::VectorError;
use crate::sampler::UnitSampler;
use crate::scalar::Scalar;
use crate::vector::Vector;

impl<T: Scalar + SampleScalar, const N: usize> Vector<T, N> {
    /// Draws every component independently and uniformly between `min` and
    /// `max` (`[min, max]` for integers, `[min, max)` for floats).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Random`] if the bounds are rejected by the
    /// source (e.g. `min > max`).
    ///
    /// # Examples
    ///
    /// ```
    /// use banan_rng::RandomSource;
    /// use banan_vec::Vec3i;
    ///
    /// let mut source = RandomSource::from_seed(1);
    /// let v = Vec3i::random(&mut source, -5, 5).unwrap();
    /// assert!(v.iter().all(|c| (-5..=5).contains(c)));
    /// ```
    pub fn random<R: RngCore>(
        source: &mut RandomSource<R>,
        min: T,
        max: T,
    ) -> Result<Self, VectorError> {
        let mut v = Self::zero();
        for c in v.iter_mut() {
            *c = source.uniform(min, max)?;
        }
        Ok(v)
    }
}

impl<T: Scalar + Float, const N: usize> Vector<T, N>
where
    StandardNormal: Distribution<T>,
{
    /// Draws a direction uniformly distributed on the unit hypersphere.
    ///
    /// Components are standard normal variates, then the vector is
    /// normalised; every returned sample has unit magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SamplingFailure`] only if the source keeps
    /// producing the zero vector (or `N == 0`).
    pub fn random_unit<R: RngCore>(source: &mut RandomSource<R>) -> Result<Self, VectorError> {
        UnitSampler::default().on_unit_sphere(source)
    }
}

impl<T: Scalar + Float + SampleScalar> Vector<T, 2> {
    /// Draws a point uniformly from the inside of the unit disc.
    ///
    /// ```
    /// use banan_rng::RandomSource;
    /// use banan_vec::Vec2f;
    ///
    /// let mut source = RandomSource::from_seed(5);
    /// let p = Vec2f::random_in_unit_disc(&mut source).unwrap();
    /// assert!(p.mag_sq() <= 1.0);
    /// ```
    pub fn random_in_unit_disc<R: RngCore>(
        source: &mut RandomSource<R>,
    ) -> Result<Self, VectorError> {
        UnitSampler::default().in_unit_disc(source)
    }
}

impl<T: Scalar + Float + SampleScalar> Vector<T, 3> {
    /// Draws a point uniformly from the inside of the unit ball.
    pub fn random_in_unit_sphere<R: RngCore>(
        source: &mut RandomSource<R>,
    ) -> Result<Self, VectorError> {
        UnitSampler::default().in_unit_sphere(source)
    }
}
