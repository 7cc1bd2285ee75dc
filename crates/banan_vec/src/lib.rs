//! # banan_vec: Fixed-Size Vectors (L2)
//!
//! Generic `N`-dimensional vectors for rendering and simulation code.
//!
//! This crate provides:
//! - [`Vector<T, N>`]: value-type vector over any primitive number, with the
//!   arithmetic operators, `dot`, `mag_sq`/`mag` and zero-safe `normalize`
//! - Named components for 2, 3 and 4 dimensions (`x()`, `r()`, ...) and the
//!   3D cross product
//! - Free functions: [`dot`], [`cross`], [`elem_mult`], [`unit`],
//!   [`reflect`], [`refract`]
//! - Random construction from a [`banan_rng::RandomSource`]: uniform
//!   components, uniform directions, points in the unit disc/ball
//! - [`UnitSampler`]: the bounded sampling loops behind the geometric
//!   constructors
//!
//! ## Layering
//!
//! Depends only on `banan_rng` among workspace crates; the vector type itself
//! never touches randomness unless one of the `random*` constructors is
//! called.
//!
//! ## Usage Example
//!
//! ```rust
//! use banan_rng::RandomSource;
//! use banan_vec::{reflect, Vec3d};
//!
//! let a = Vec3d::new(1.0, 0.0, 0.0);
//! let b = Vec3d::new(0.0, 1.0, 0.0);
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vec3d::new(0.0, 0.0, 1.0));
//!
//! let mirrored = reflect(&Vec3d::new(1.0, -1.0, 0.0), &b);
//! assert_eq!(mirrored, Vec3d::new(1.0, 1.0, 0.0));
//!
//! let mut source = RandomSource::from_seed(42);
//! let p = Vec3d::random_in_unit_sphere(&mut source).unwrap();
//! assert!(p.mag_sq() <= 1.0);
//! ```

#![warn(missing_docs)]

pub mod dims;
pub mod error;
pub mod geometry;
pub mod ops;
pub mod random;
pub mod sampler;
pub mod scalar;
pub mod vector;

pub use error::VectorError;
pub use geometry::{cross, dot, elem_mult, reflect, refract, unit};
pub use sampler::{SamplerConfig, UnitSampler};
pub use scalar::Scalar;
pub use vector::Vector;

/// 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;
/// 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;
/// 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;

/// 2D vector of `i32`.
pub type Vec2i = Vector<i32, 2>;
/// 2D vector of `f32`.
pub type Vec2f = Vector<f32, 2>;
/// 2D vector of `f64`.
pub type Vec2d = Vector<f64, 2>;

/// 3D vector of `i32`.
pub type Vec3i = Vector<i32, 3>;
/// 3D vector of `f32`.
pub type Vec3f = Vector<f32, 3>;
/// 3D vector of `f64`.
pub type Vec3d = Vector<f64, 3>;

/// 4D vector of `i32`.
pub type Vec4i = Vector<i32, 4>;
/// 4D vector of `f32`.
pub type Vec4f = Vector<f32, 4>;
/// 4D vector of `f64`.
pub type Vec4d = Vector<f64, 4>;
