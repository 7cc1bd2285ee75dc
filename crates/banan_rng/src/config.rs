//! Seeding configuration for random sources.

use crate::error::RandomError;

/// Environment variable that fixes the seed of new random sources.
///
/// Accepts a decimal `u64` or a `0x`-prefixed hexadecimal one.
pub const SEED_ENV_VAR: &str = "BANAN_RNG_SEED";

/// How a random source obtains its initial seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Draw the seed from the operating system's entropy device.
    #[default]
    Entropy,
    /// Use a fixed seed, giving a reproducible sequence.
    Fixed(u64),
}

/// Configuration for constructing a [`RandomSource`](crate::RandomSource).
///
/// # Example
///
/// ```
/// use banan_rng::{RandomSource, RngConfig, SeedPolicy};
///
/// // Entropy seeding by default
/// let config = RngConfig::default();
/// assert_eq!(config.seed, SeedPolicy::Entropy);
///
/// // Reproducible configuration for tests
/// let config = RngConfig::fixed(42);
/// let source = RandomSource::from_config(&config);
/// assert_eq!(source.seed(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RngConfig {
    /// Seeding policy applied at construction.
    pub seed: SeedPolicy,
}

impl RngConfig {
    /// Create a configuration with the given seeding policy.
    pub fn new(seed: SeedPolicy) -> Self {
        Self { seed }
    }

    /// Create a configuration with a fixed seed.
    pub fn fixed(seed: u64) -> Self {
        Self {
            seed: SeedPolicy::Fixed(seed),
        }
    }

    /// Create a configuration from the [`SEED_ENV_VAR`] environment variable.
    ///
    /// An unset or empty variable selects [`SeedPolicy::Entropy`].
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidSeed`] if the variable is set but is not
    /// a valid `u64`.
    pub fn from_env() -> Result<Self, RandomError> {
        let value = std::env::var(SEED_ENV_VAR).ok();
        Self::from_env_value(value.as_deref())
    }

    /// Parse a configuration from the raw value of [`SEED_ENV_VAR`].
    pub fn from_env_value(value: Option<&str>) -> Result<Self, RandomError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => parse_seed(raw).map(Self::fixed),
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64, RandomError> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.map_err(|e| RandomError::InvalidSeed(format!("{:?}: {}", raw, e)))
}
