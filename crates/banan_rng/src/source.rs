//! Seeded random source with uniform and normal sampling.
//!
//! This module provides [`RandomSource`], an explicitly owned generator that
//! replaces a process-wide PRNG. Callers hold one per simulation (or one per
//! thread, see [`thread`](crate::thread)) and pass it to whatever needs
//! randomness.

use std::fmt;

use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use tracing::debug;

use crate::config::{RngConfig, SeedPolicy};
use crate::error::RandomError;
use crate::scalar::SampleScalar;

/// Seeded pseudo-random number source.
///
/// Wraps a `rand` generator (by default [`StdRng`]) together with the seed it
/// was initialised from. Distribution parameters are never cached: every
/// call validates its arguments, draws from the generator and returns, so
/// only the generator's bit-stream state advances.
///
/// # Examples
///
/// ```rust
/// use banan_rng::RandomSource;
///
/// let mut source = RandomSource::from_seed(42);
///
/// let die: i32 = source.uniform_int(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
///
/// let x: f64 = source.uniform_real(-1.0, 1.0).unwrap();
/// assert!((-1.0..1.0).contains(&x));
///
/// let n: f64 = source.normal(10.0, 2.0).unwrap();
/// assert!(n.is_finite());
/// ```
#[derive(Clone)]
pub struct RandomSource<R = StdRng> {
    /// The underlying PRNG instance.
    inner: R,
    /// The seed used for the most recent initialisation.
    seed: u64,
}

impl<R> fmt::Debug for RandomSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RandomSource {
    /// Creates a [`StdRng`]-backed source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// ```rust
    /// use banan_rng::RandomSource;
    ///
    /// let mut a = RandomSource::from_seed(12345);
    /// let mut b = RandomSource::from_seed(12345);
    /// assert_eq!(a.gen_uniform(), b.gen_uniform());
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self::seeded(seed)
    }

    /// Creates a [`StdRng`]-backed source seeded from the operating system's
    /// entropy device.
    ///
    /// The drawn seed is kept and available through [`seed`](Self::seed), so
    /// a run can be replayed with [`from_seed`](Self::from_seed).
    pub fn from_entropy() -> Self {
        Self::entropy_seeded()
    }

    /// Creates a [`StdRng`]-backed source according to a [`RngConfig`].
    pub fn from_config(config: &RngConfig) -> Self {
        Self::configured(config)
    }
}

impl<R: RngCore + SeedableRng> RandomSource<R> {
    /// Creates a source over generator `R` initialised with the given seed.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeding random source");
        Self {
            inner: R::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source over generator `R` seeded from entropy.
    pub fn entropy_seeded() -> Self {
        let seed = entropy_seed();
        debug!(seed, "drew seed from entropy");
        Self::seeded(seed)
    }

    /// Creates a source over generator `R` according to a [`RngConfig`].
    pub fn configured(config: &RngConfig) -> Self {
        match config.seed {
            SeedPolicy::Entropy => Self::entropy_seeded(),
            SeedPolicy::Fixed(seed) => Self::seeded(seed),
        }
    }

    /// Reinitialises the generator state from `seed`.
    ///
    /// Everything drawn afterwards matches a fresh source seeded with `seed`.
    pub fn reseed(&mut self, seed: u64) {
        debug!(previous = self.seed, seed, "reseeding random source");
        self.inner = R::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Reinitialises the generator state from fresh entropy and returns the
    /// seed that was drawn.
    pub fn reseed_from_entropy(&mut self) -> u64 {
        let seed = entropy_seed();
        self.reseed(seed);
        seed
    }
}

impl<R: RngCore + SeedableRng> Default for RandomSource<R> {
    fn default() -> Self {
        Self::entropy_seeded()
    }
}

impl<R: RngCore> RandomSource<R> {
    /// Wraps an already-initialised generator.
    ///
    /// `seed` is recorded for reporting only; it is not applied to
    /// `generator`.
    pub fn from_generator(generator: R, seed: u64) -> Self {
        Self {
            inner: generator,
            seed,
        }
    }

    /// Returns the seed used for the most recent initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws an integer uniformly from the closed interval `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `min > max`.
    ///
    /// ```rust
    /// use banan_rng::RandomSource;
    ///
    /// let mut source = RandomSource::from_seed(1);
    /// assert_eq!(source.uniform_int(3_u8, 3).unwrap(), 3);
    /// assert!(source.uniform_int(5, 1).is_err());
    /// ```
    pub fn uniform_int<T>(&mut self, min: T, max: T) -> Result<T, RandomError>
    where
        T: PrimInt + SampleUniform + fmt::Debug,
    {
        if min > max {
            return Err(RandomError::invalid_range(min, max));
        }
        Ok(self.inner.gen_range(min..=max))
    }

    /// Draws a real value uniformly from the half-open interval `[min, max)`.
    ///
    /// A degenerate interval (`min == max`) returns `min`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `min > max`, if either bound
    /// is NaN or infinite, or if `max - min` overflows.
    pub fn uniform_real<T>(&mut self, min: T, max: T) -> Result<T, RandomError>
    where
        T: Float + SampleUniform + fmt::Debug,
    {
        let finite = min.is_finite() && max.is_finite() && (max - min).is_finite();
        if !finite || min > max {
            return Err(RandomError::invalid_range(min, max));
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.inner.gen_range(min..max))
    }

    /// Draws uniformly from `[min, max]` for integers or `[min, max)` for
    /// reals, chosen by the scalar type.
    #[inline]
    pub fn uniform<T: SampleScalar>(&mut self, min: T, max: T) -> Result<T, RandomError> {
        T::sample_uniform(self, min, max)
    }

    /// Draws from a normal distribution with the given mean and standard
    /// deviation.
    ///
    /// Computed as `mean + std_dev * z` with `z` a standard normal variate
    /// (Ziggurat, via `rand_distr::StandardNormal`). A zero standard
    /// deviation returns `mean` exactly and consumes no randomness.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidStdDev`] if `std_dev` is negative, NaN
    /// or infinite.
    pub fn normal<T>(&mut self, mean: T, std_dev: T) -> Result<T, RandomError>
    where
        T: Float + fmt::Debug,
        StandardNormal: Distribution<T>,
    {
        if !std_dev.is_finite() || std_dev < T::zero() {
            return Err(RandomError::InvalidStdDev {
                std_dev: format!("{:?}", std_dev),
            });
        }
        if std_dev == T::zero() {
            return Ok(mean);
        }
        let z: T = StandardNormal.sample(&mut self.inner);
        Ok(mean + std_dev * z)
    }

    /// Draws a standard normal variate (mean 0, standard deviation 1).
    #[inline]
    pub fn standard_normal<T>(&mut self) -> T
    where
        StandardNormal: Distribution<T>,
    {
        StandardNormal.sample(&mut self.inner)
    }

    /// Draws a single `f64` uniformly from `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Fills the buffer with uniform values in `[0, 1)`.
    ///
    /// No allocation; an empty buffer is a no-op.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// No allocation; an empty buffer is a no-op.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl<R: RngCore> RngCore for RandomSource<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

fn entropy_seed() -> u64 {
    OsRng.next_u64()
}
