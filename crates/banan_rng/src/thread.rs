//! Per-thread random sources.
//!
//! Each OS thread owns one lazily-initialised [`RandomSource`], so code that
//! does not want to thread a source through its call graph can still sample
//! without locks or data races. The first use on a thread seeds it from
//! [`RngConfig::from_env`]: a fixed seed if [`SEED_ENV_VAR`] is set, entropy
//! otherwise.
//!
//! Sources on different threads are independent; reseeding one thread never
//! affects another.

use std::cell::RefCell;
use std::fmt::Debug;

use num_traits::Float;
use rand_distr::{Distribution, StandardNormal};
use tracing::{debug, warn};

use crate::config::{RngConfig, SEED_ENV_VAR};
use crate::error::RandomError;
use crate::scalar::SampleScalar;
use crate::source::RandomSource;

thread_local! {
    static THREAD_SOURCE: RefCell<RandomSource> = RefCell::new(init_thread_source());
}

fn init_thread_source() -> RandomSource {
    let config = RngConfig::from_env().unwrap_or_else(|err| {
        warn!(%err, var = SEED_ENV_VAR, "ignoring seed override, using entropy");
        RngConfig::default()
    });
    let source = RandomSource::from_config(&config);
    debug!(seed = source.seed(), "initialised thread-local random source");
    source
}

/// Runs `f` with exclusive access to the calling thread's random source.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
///
/// # Examples
///
/// ```
/// use banan_rng::thread::{reseed_thread_source, with_thread_source};
///
/// reseed_thread_source(42);
/// let roll: i32 = with_thread_source(|source| source.uniform_int(1, 6)).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub fn with_thread_source<F, T>(f: F) -> T
where
    F: FnOnce(&mut RandomSource) -> T,
{
    THREAD_SOURCE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Reseeds the calling thread's random source.
pub fn reseed_thread_source(seed: u64) {
    with_thread_source(|source| source.reseed(seed));
}

/// Reseeds the calling thread's random source from entropy, returning the
/// drawn seed.
pub fn reseed_thread_source_from_entropy() -> u64 {
    with_thread_source(RandomSource::reseed_from_entropy)
}

/// Returns the seed the calling thread's random source was last seeded with.
pub fn thread_seed() -> u64 {
    with_thread_source(|source| source.seed())
}

/// Draws uniformly from the calling thread's source.
///
/// See [`RandomSource::uniform`].
pub fn uniform<T: SampleScalar>(min: T, max: T) -> Result<T, RandomError> {
    with_thread_source(|source| source.uniform(min, max))
}

/// Draws a normal variate from the calling thread's source.
///
/// See [`RandomSource::normal`].
pub fn normal<T>(mean: T, std_dev: T) -> Result<T, RandomError>
where
    T: Float + Debug,
    StandardNormal: Distribution<T>,
{
    with_thread_source(|source| source.normal(mean, std_dev))
}
