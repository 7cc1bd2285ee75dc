//! Scalar bound for vector components.

use std::fmt::Debug;

use num_traits::{Num, NumAssignOps};

/// Numeric type usable as a vector component.
///
/// Any copyable, ordered number with the four arithmetic operators and their
/// compound-assignment forms qualifies, which covers every primitive integer
/// and float. Operations that need a square root additionally require
/// [`num_traits::Float`]; negation requires `Neg<Output = T>`.
///
/// This trait is blanket-implemented and cannot be implemented manually.
///
/// # Examples
/// ```
/// use banan_vec::Scalar;
///
/// fn twice<T: Scalar>(x: T) -> T {
///     x + x
/// }
///
/// assert_eq!(twice(3_i32), 6);
/// assert_eq!(twice(1.5_f32), 3.0);
/// ```
pub trait Scalar: Copy + PartialOrd + Debug + Num + NumAssignOps {}

impl<T> Scalar for T where T: Copy + PartialOrd + Debug + Num + NumAssignOps {}
