//! Error types for vector operations and sampling.

use banan_rng::RandomError;
use thiserror::Error;

/// Vector errors.
///
/// # Variants
/// - `Random`: a component draw was rejected by the random source
/// - `DegenerateVector`: a zero-length vector was asked for its direction
/// - `SamplingFailure`: rejection sampling hit its attempt cap
///
/// # Examples
/// ```
/// use banan_vec::VectorError;
///
/// let err = VectorError::SamplingFailure { attempts: 1000 };
/// assert!(format!("{}", err).contains("1000 attempts"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Invalid parameters passed to the random source.
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Zero-length vector has no direction.
    #[error("Degenerate vector: zero-length vector cannot be normalised")]
    DegenerateVector,

    /// Rejection sampling did not accept any candidate.
    #[error("Sampling failed: no candidate accepted after {attempts} attempts")]
    SamplingFailure {
        /// Number of candidates drawn
        attempts: usize,
    },
}
