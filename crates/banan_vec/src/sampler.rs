//! Geometric samplers: points in the unit ball and directions on the unit
//! sphere.
//!
//! ## Algorithms
//!
//! - **In the ball** (rejection sampling): draw components uniformly from
//!   `[-1, 1)` and keep the first candidate with `|p|² <= 1`. Expected draws
//!   are `4/π ≈ 1.27` for the disc and `6/π ≈ 1.91` for the 3D ball, but the
//!   acceptance rate falls quickly with dimension.
//! - **On the sphere** (normalised Gaussians): draw independent standard
//!   normal components and normalise. The result is uniform on the surface
//!   of the unit hypersphere in any dimension.
//!
//! Both loops are capped by [`SamplerConfig::max_attempts`]; running out
//! means the random source is broken and is reported as
//! [`VectorError::SamplingFailure`].

use num_traits::Float;
use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};
use tracing::{trace, warn};

use banan_rng::{RandomSource, SampleScalar};

use crate::error::VectorError;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Configuration for the bounded sampling loops.
///
/// # Example
///
/// ```
/// use banan_vec::SamplerConfig;
///
/// let config = SamplerConfig::default();
/// assert_eq!(config.max_attempts, 1000);
///
/// let custom = SamplerConfig::new(50);
/// assert_eq!(custom.max_attempts, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Maximum number of candidates drawn before giving up.
    pub max_attempts: usize,
}

impl Default for SamplerConfig {
    /// Default values:
    /// - `max_attempts`: 1000
    fn default() -> Self {
        Self { max_attempts: 1000 }
    }
}

impl SamplerConfig {
    /// Create a configuration with the given attempt cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts == 0`.
    pub fn new(max_attempts: usize) -> Self {
        assert!(max_attempts > 0, "max_attempts must be > 0");
        Self { max_attempts }
    }

    /// A tight cap (100 attempts) that surfaces a defective source quickly.
    pub fn strict() -> Self {
        Self { max_attempts: 100 }
    }

    /// A generous cap (100 000 attempts) for rejection sampling in higher
    /// dimensions, where most candidates fall outside the ball.
    pub fn patient() -> Self {
        Self {
            max_attempts: 100_000,
        }
    }
}

/// Bounded sampler for unit-ball points and unit-sphere directions.
///
/// # Example
///
/// ```
/// use banan_rng::RandomSource;
/// use banan_vec::{SamplerConfig, UnitSampler, Vec3d, Vector};
///
/// let mut source = RandomSource::from_seed(7);
/// let sampler = UnitSampler::new(SamplerConfig::default());
///
/// let p: Vec3d = sampler.in_unit_sphere(&mut source).unwrap();
/// assert!(p.mag_sq() <= 1.0);
///
/// let d: Vector<f64, 6> = sampler.on_unit_sphere(&mut source).unwrap();
/// assert!((d.mag() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitSampler {
    config: SamplerConfig,
}

impl UnitSampler {
    /// Create a sampler with the given configuration.
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Returns the sampler configuration.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draws a point uniformly from the inside of the `N`-dimensional unit
    /// ball by rejection sampling.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SamplingFailure`] if no candidate lands inside
    /// the ball within the attempt cap.
    pub fn in_unit_ball<T, R, const N: usize>(
        &self,
        source: &mut RandomSource<R>,
    ) -> Result<Vector<T, N>, VectorError>
    where
        T: Scalar + Float + SampleScalar,
        R: RngCore,
    {
        let one = T::one();
        for attempt in 1..=self.config.max_attempts {
            let candidate = Vector::<T, N>::random(source, -one, one)?;
            if candidate.mag_sq() <= one {
                return Ok(candidate);
            }
            trace!(attempt, dimension = N, "candidate outside unit ball");
        }
        Err(self.exhausted(N))
    }

    /// Draws a point uniformly from the inside of the unit disc.
    #[inline]
    pub fn in_unit_disc<T, R>(
        &self,
        source: &mut RandomSource<R>,
    ) -> Result<Vector<T, 2>, VectorError>
    where
        T: Scalar + Float + SampleScalar,
        R: RngCore,
    {
        self.in_unit_ball(source)
    }

    /// Draws a point uniformly from the inside of the 3D unit ball.
    #[inline]
    pub fn in_unit_sphere<T, R>(
        &self,
        source: &mut RandomSource<R>,
    ) -> Result<Vector<T, 3>, VectorError>
    where
        T: Scalar + Float + SampleScalar,
        R: RngCore,
    {
        self.in_unit_ball(source)
    }

    /// Draws a direction uniformly from the surface of the `N`-dimensional
    /// unit sphere.
    ///
    /// A candidate that is exactly zero cannot be normalised and is redrawn.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::SamplingFailure`] if every candidate within the
    /// attempt cap was zero (including always for `N == 0`).
    pub fn on_unit_sphere<T, R, const N: usize>(
        &self,
        source: &mut RandomSource<R>,
    ) -> Result<Vector<T, N>, VectorError>
    where
        T: Scalar + Float,
        R: RngCore,
        StandardNormal: Distribution<T>,
    {
        for attempt in 1..=self.config.max_attempts {
            let mut candidate = Vector::<T, N>::zero();
            for c in candidate.iter_mut() {
                *c = source.standard_normal();
            }
            if candidate.mag_sq() > T::zero() {
                candidate.normalize();
                return Ok(candidate);
            }
            trace!(attempt, dimension = N, "zero-length gaussian candidate");
        }
        Err(self.exhausted(N))
    }

    fn exhausted(&self, dimension: usize) -> VectorError {
        warn!(
            attempts = self.config.max_attempts,
            dimension, "sampling exhausted its attempt cap"
        );
        VectorError::SamplingFailure {
            attempts: self.config.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec2d, Vec3f};
    use approx::assert_relative_eq;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_default_config() {
        let config = SamplerConfig::default();
        assert_eq!(config.max_attempts, 1000);
        assert_eq!(UnitSampler::default().config(), &config);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SamplerConfig::strict().max_attempts, 100);
        assert_eq!(SamplerConfig::patient().max_attempts, 100_000);
    }

    #[test]
    #[should_panic(expected = "max_attempts must be > 0")]
    fn test_zero_attempts_panics() {
        let _ = SamplerConfig::new(0);
    }

    #[test]
    fn test_in_unit_disc_bounded() {
        let mut source = RandomSource::from_seed(42);
        let sampler = UnitSampler::default();
        for _ in 0..10_000 {
            let p: Vec2d = sampler.in_unit_disc(&mut source).unwrap();
            assert!(p.mag_sq() <= 1.0);
        }
    }

    #[test]
    fn test_in_unit_sphere_bounded() {
        let mut source = RandomSource::from_seed(42);
        let sampler = UnitSampler::default();
        for _ in 0..10_000 {
            let p: Vec3f = sampler.in_unit_sphere(&mut source).unwrap();
            assert!(p.mag_sq() <= 1.0);
        }
    }

    #[test]
    fn test_in_unit_ball_higher_dimension() {
        let mut source = RandomSource::from_seed(3);
        let sampler = UnitSampler::new(SamplerConfig::patient());
        for _ in 0..100 {
            let p: Vector<f64, 6> = sampler.in_unit_ball(&mut source).unwrap();
            assert!(p.mag_sq() <= 1.0);
        }
    }

    #[test]
    fn test_on_unit_sphere_has_unit_length() {
        let mut source = RandomSource::from_seed(42);
        let sampler = UnitSampler::default();
        for _ in 0..1000 {
            let d: Vector<f64, 5> = sampler.on_unit_sphere(&mut source).unwrap();
            assert_relative_eq!(d.mag(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_on_unit_sphere_zero_dimension_fails() {
        let mut source = RandomSource::from_seed(42);
        let sampler = UnitSampler::new(SamplerConfig::new(5));
        let result: Result<Vector<f64, 0>, _> = sampler.on_unit_sphere(&mut source);
        assert_eq!(result, Err(VectorError::SamplingFailure { attempts: 5 }));
    }

    #[test]
    fn test_broken_source_reports_failure() {
        // A generator stuck at u64::MAX maps every uniform draw to the top of
        // the range, so every candidate sits in the corner of the square.
        let mut source = RandomSource::from_generator(StepRng::new(u64::MAX, 0), 0);

        let sampler = UnitSampler::new(SamplerConfig::strict());
        let result: Result<Vec2d, _> = sampler.in_unit_disc(&mut source);
        assert_eq!(result, Err(VectorError::SamplingFailure { attempts: 100 }));
    }
}
