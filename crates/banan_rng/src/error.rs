//! Error types for random sampling.
//!
//! Every error here is a precondition violation by the caller: the sampling
//! functions fail fast instead of swapping bounds or clamping parameters.

use thiserror::Error;

/// Sampling errors.
///
/// # Variants
/// - `InvalidRange`: uniform bounds reversed, NaN, non-finite or overflowing
/// - `InvalidStdDev`: negative or non-finite standard deviation
/// - `InvalidSeed`: seed configuration could not be parsed
///
/// # Examples
/// ```
/// use banan_rng::RandomError;
///
/// let err = RandomError::InvalidRange {
///     min: "5".to_string(),
///     max: "1".to_string(),
/// };
/// assert_eq!(format!("{}", err), "Invalid range: min 5 exceeds max 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// Uniform sampling bounds do not form a valid range.
    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound as supplied
        min: String,
        /// Upper bound as supplied
        max: String,
    },

    /// Normal sampling called with a negative or non-finite standard deviation.
    #[error("Invalid standard deviation: {std_dev} (must be finite and non-negative)")]
    InvalidStdDev {
        /// Standard deviation as supplied
        std_dev: String,
    },

    /// Seed value could not be parsed.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}

impl RandomError {
    /// Builds an [`RandomError::InvalidRange`] from any debuggable bounds.
    pub(crate) fn invalid_range<T: std::fmt::Debug>(min: T, max: T) -> Self {
        RandomError::InvalidRange {
            min: format!("{:?}", min),
            max: format!("{:?}", max),
        }
    }
}
