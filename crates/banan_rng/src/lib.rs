//! # banan_rng: Random Sampling (L1: Leaf)
//!
//! Seeded pseudo-random sources with the distribution sampling that the
//! vector layer builds on.
//!
//! This crate provides:
//! - [`RandomSource`]: an explicitly owned generator (default `StdRng`)
//!   remembering the seed it was initialised from
//! - Uniform sampling: integers on `[min, max]`, reals on `[min, max)`
//! - Normal sampling with arbitrary mean and standard deviation
//! - [`SampleScalar`]: compile-time choice of the uniform rule by scalar type
//! - [`thread`]: one independent source per OS thread
//! - [`RngConfig`]: entropy or fixed seeding, optionally from `BANAN_RNG_SEED`
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every source can be built from, and reports, a `u64` seed
//! - **No global state**: callers own their source; the thread-local instance
//!   is a convenience, not a requirement
//! - **Fail fast**: reversed or non-finite ranges and negative standard
//!   deviations are rejected with [`RandomError`] instead of being patched up
//!
//! ## Usage Example
//!
//! ```rust
//! use banan_rng::RandomSource;
//!
//! let mut source = RandomSource::from_seed(12345);
//!
//! let n: u32 = source.uniform_int(0, 10).unwrap();
//! let u: f64 = source.uniform_real(0.0, 1.0).unwrap();
//! let g: f64 = source.normal(0.0, 1.0).unwrap();
//!
//! let mut buffer = vec![0.0; 1000];
//! source.fill_normal(&mut buffer);
//! # assert!(n <= 10 && (0.0..1.0).contains(&u) && g.is_finite());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod scalar;
pub mod source;
pub mod thread;

// Public re-exports
pub use config::{RngConfig, SeedPolicy, SEED_ENV_VAR};
pub use error::RandomError;
pub use scalar::SampleScalar;
pub use source::RandomSource;
