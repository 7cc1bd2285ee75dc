//! Integration tests for module exports.
//!
//! Verify that the public modules and types are accessible via absolute
//! paths and through the crate-root re-exports.

/// Test that the source and its configuration are accessible.
#[test]
fn test_source_exports() {
    use banan_rng::config::{RngConfig, SeedPolicy, SEED_ENV_VAR};
    use banan_rng::source::RandomSource;

    assert_eq!(SEED_ENV_VAR, "BANAN_RNG_SEED");
    assert_eq!(RngConfig::default().seed, SeedPolicy::Entropy);

    let mut source = RandomSource::from_config(&RngConfig::fixed(3));
    assert_eq!(source.seed(), 3);
    let x: f64 = source.uniform(0.0, 1.0).unwrap();
    assert!((0.0..1.0).contains(&x));
}

/// Test that errors are accessible and displayable.
#[test]
fn test_error_exports() {
    use banan_rng::error::RandomError;
    use banan_rng::RandomSource;

    let mut source = RandomSource::from_seed(0);
    let err = source.uniform(10_u32, 1).unwrap_err();
    assert!(matches!(err, RandomError::InvalidRange { .. }));
    assert_eq!(err.to_string(), "Invalid range: min 10 exceeds max 1");

    let err = source.normal(0.0_f64, -1.0).unwrap_err();
    assert!(matches!(err, RandomError::InvalidStdDev { .. }));
}

/// Test that the scalar dispatch trait works in downstream generic code.
#[test]
fn test_sample_scalar_export() {
    use banan_rng::{RandomError, RandomSource, SampleScalar};

    fn draw_pair<T: SampleScalar>(
        source: &mut RandomSource,
        min: T,
        max: T,
    ) -> Result<(T, T), RandomError> {
        Ok((source.uniform(min, max)?, source.uniform(min, max)?))
    }

    let mut source = RandomSource::from_seed(9);
    let (a, b) = draw_pair(&mut source, 1_i16, 6).unwrap();
    assert!((1..=6).contains(&a) && (1..=6).contains(&b));
    let (x, y) = draw_pair(&mut source, -0.5_f32, 0.5).unwrap();
    assert!((-0.5..0.5).contains(&x) && (-0.5..0.5).contains(&y));
}

/// Test that the thread-local helpers are accessible via absolute path.
#[test]
fn test_thread_exports() {
    use banan_rng::thread::{
        normal, reseed_thread_source, reseed_thread_source_from_entropy, thread_seed, uniform,
        with_thread_source,
    };

    reseed_thread_source(11);
    assert_eq!(thread_seed(), 11);
    let first: i32 = uniform(0, 100).unwrap();
    reseed_thread_source(11);
    assert_eq!(uniform::<i32>(0, 100).unwrap(), first);

    let z: f64 = normal(5.0, 0.0).unwrap();
    assert_eq!(z, 5.0);

    let seed = reseed_thread_source_from_entropy();
    assert_eq!(with_thread_source(|s| s.seed()), seed);
}
