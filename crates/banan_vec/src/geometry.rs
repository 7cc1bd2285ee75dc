//! Free-standing geometric operations.
//!
//! Function forms of the vector products plus the optics helpers used by
//! ray tracers: mirror reflection about a surface normal and Snell's-law
//! refraction through it.

use num_traits::Float;

use crate::scalar::Scalar;
use crate::vector::Vector;

/// Dot product of two vectors of the same dimension.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.dot(b)
}

/// Right-handed cross product; defined for 3D vectors only.
#[inline]
pub fn cross<T: Scalar>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// Component-wise (Hadamard) product.
#[inline]
pub fn elem_mult<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Vector<T, N> {
    a.elem_mult(b)
}

/// Unit-length copy of `v`; a zero vector is returned unchanged.
#[inline]
pub fn unit<T: Scalar + Float, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    v.normalized()
}

/// Reflects `v` about the surface with normal `n`.
///
/// Computes `v - 2 (v · n) n`. `n` is assumed to be unit length; this is not
/// checked.
///
/// # Examples
///
/// ```
/// use banan_vec::{reflect, Vec2d};
///
/// let bounced = reflect(&Vec2d::new(1.0, -1.0), &Vec2d::new(0.0, 1.0));
/// assert_eq!(bounced, Vec2d::new(1.0, 1.0));
/// ```
#[inline]
pub fn reflect<T: Scalar, const N: usize>(v: &Vector<T, N>, n: &Vector<T, N>) -> Vector<T, N> {
    let two = T::one() + T::one();
    *v - *n * (two * v.dot(n))
}

/// Refracts the unit direction `v` through the surface with unit normal `n`.
///
/// `ratio` is the ratio of refractive indices (incident over transmitted).
/// The output is split into a part perpendicular to `n`,
/// `ratio * (v + cosθ n)` with `cosθ = min(-v · n, 1)`, and a part parallel to
/// it, `-sqrt(|1 - |r_perp|²|) n`.
///
/// Under total internal reflection `1 - |r_perp|²` goes negative; the
/// absolute value keeps the result finite instead of reporting the event, so
/// callers that need to detect it should test `ratio * sinθ > 1` themselves.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use banan_vec::{refract, Vec3d};
///
/// // Equal indices: the ray passes straight through
/// let v = Vec3d::new(1.0, -1.0, 0.0).normalized();
/// let n = Vec3d::unit_y();
/// assert_relative_eq!(refract(&v, &n, 1.0), v, epsilon = 1e-12);
/// ```
pub fn refract<T: Scalar + Float, const N: usize>(
    v: &Vector<T, N>,
    n: &Vector<T, N>,
    ratio: T,
) -> Vector<T, N> {
    let cos_theta = (-v.dot(n)).min(T::one());
    let r_perp = (*v + *n * cos_theta) * ratio;
    let r_parallel = *n * -(T::one() - r_perp.mag_sq()).abs().sqrt();
    r_perp + r_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec2d, Vec3d, Vec3i};
    use approx::assert_relative_eq;

    #[test]
    fn test_free_functions_match_methods() {
        let a = Vec3d::new(1.0, 2.0, 3.0);
        let b = Vec3d::new(-1.0, 0.5, 2.0);
        assert_eq!(dot(&a, &b), a.dot(&b));
        assert_eq!(cross(&a, &b), a.cross(&b));
        assert_eq!(elem_mult(&a, &b), Vec3d::new(-1.0, 1.0, 6.0));
        assert_relative_eq!(unit(&a).mag(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_of_zero_is_zero() {
        assert_eq!(unit(&Vec3d::zero()), Vec3d::zero());
    }

    #[test]
    fn test_reflect_horizontal_surface() {
        let r = reflect(&Vec2d::new(1.0, -1.0), &Vec2d::new(0.0, 1.0));
        assert_eq!(r, Vec2d::new(1.0, 1.0));
    }

    #[test]
    fn test_reflect_integer_vectors() {
        let r = reflect(&Vec3i::new(2, -3, 1), &Vec3i::new(0, 1, 0));
        assert_eq!(r, Vec3i::new(2, 3, 1));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let v = Vec3d::new(0.3, -0.9, 0.2);
        let n = Vec3d::new(1.0, 1.0, 0.0).normalized();
        assert_relative_eq!(reflect(&v, &n).mag(), v.mag(), epsilon = 1e-12);
    }

    #[test]
    fn test_refract_normal_incidence() {
        let v = Vec3d::new(0.0, -1.0, 0.0);
        let n = Vec3d::unit_y();
        let r = refract(&v, &n, 1.0 / 1.5);
        assert_relative_eq!(r, v, epsilon = 1e-12);
    }

    #[test]
    fn test_refract_obeys_snell() {
        let theta_i = 30.0_f64.to_radians();
        let v = Vec2d::new(theta_i.sin(), -theta_i.cos());
        let n = Vec2d::unit_y();
        let ratio = 1.0 / 1.5;

        let r = refract(&v, &n, ratio);

        assert_relative_eq!(r.mag(), 1.0, epsilon = 1e-12);
        // sin θt = ratio * sin θi
        assert_relative_eq!(r.x(), ratio * theta_i.sin(), epsilon = 1e-12);
        assert!(r.y() < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection_stays_finite() {
        let theta_i = 80.0_f64.to_radians();
        let v = Vec2d::new(theta_i.sin(), -theta_i.cos());
        let n = Vec2d::unit_y();

        let r = refract(&v, &n, 1.5);

        assert!(r.x().is_finite() && r.y().is_finite());
        assert_relative_eq!(r.x(), 1.5 * theta_i.sin(), epsilon = 1e-12);
    }
}
