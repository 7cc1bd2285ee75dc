//! The generic fixed-size vector type.
//!
//! [`Vector<T, N>`] stores exactly `N` components in a single array. The
//! dimension is a const generic, so mixing dimensions is a type error and
//! every operation is monomorphised for the concrete `N`.

use std::fmt;
use std::iter::Sum;
use std::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;

use crate::error::VectorError;
use crate::scalar::Scalar;

/// Fixed-size numeric vector with `N` components of type `T`.
///
/// Value semantics throughout: `Vector` is `Copy` whenever `T` is, and no
/// operation shares storage between two vectors.
///
/// # Examples
///
/// ```
/// use banan_vec::Vector;
///
/// let a = Vector::from_array([1.0_f64, 2.0, 3.0, 4.0, 5.0]);
/// let b = Vector::splat(2.0);
///
/// assert_eq!((a + b)[4], 7.0);
/// assert_eq!(a.dot(&b), 30.0);
/// assert_eq!(Vector::<f64, 5>::default(), Vector::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    values: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components.
    #[inline]
    pub const fn from_array(values: [T; N]) -> Self {
        Self { values }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// A vector with every component equal to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { values: [value; N] }
    }

    /// Borrows the components as an array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.values
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Mutably borrows the components as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Consumes the vector, returning its components.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.values
    }

    /// Iterates over the components in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Iterates mutably over the components in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    /// Applies `f` to every component.
    ///
    /// ```
    /// use banan_vec::Vec3i;
    ///
    /// let v = Vec3i::new(1, -2, 3).map(|c| c as f64 * 0.5);
    /// assert_eq!(v.into_array(), [0.5, -1.0, 1.5]);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        Vector::from_array(self.values.map(f))
    }

    /// Unary plus: returns an identical copy.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Dot product: the sum of `self[i] * other[i]`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.values
            .iter()
            .zip(other.values.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared magnitude, `self · self`.
    #[inline]
    pub fn mag_sq(&self) -> T {
        self.dot(self)
    }

    /// Sum of the components.
    #[inline]
    pub fn sum(&self) -> T {
        self.values.iter().fold(T::zero(), |acc, &c| acc + c)
    }

    /// Component-wise (Hadamard) product.
    ///
    /// ```
    /// use banan_vec::Vec3i;
    ///
    /// let v = Vec3i::new(1, 2, 3).elem_mult(&Vec3i::new(4, 5, 6));
    /// assert_eq!(v, Vec3i::new(4, 10, 18));
    /// ```
    #[inline]
    pub fn elem_mult(&self, other: &Self) -> Self {
        let mut result = *self;
        for (c, &o) in result.values.iter_mut().zip(other.values.iter()) {
            *c *= o;
        }
        result
    }

    /// Returns `true` if every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar + Float, const N: usize> Vector<T, N> {
    /// Euclidean magnitude.
    #[inline]
    pub fn mag(&self) -> T {
        self.mag_sq().sqrt()
    }

    /// Scales the vector to unit length in place.
    ///
    /// A zero vector is left unchanged rather than filled with NaN.
    ///
    /// ```
    /// use banan_vec::Vec2d;
    ///
    /// let mut v = Vec2d::new(3.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vec2d::new(0.6, 0.8));
    ///
    /// let mut zero = Vec2d::zero();
    /// zero.normalize();
    /// assert_eq!(zero, Vec2d::zero());
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let mag_sq = self.mag_sq();
        if mag_sq == T::zero() {
            return self;
        }
        *self /= mag_sq.sqrt();
        self
    }

    /// Returns a unit-length copy, or the zero vector unchanged.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns a unit-length copy.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DegenerateVector`] for a zero vector.
    pub fn try_unit(self) -> Result<Self, VectorError> {
        if self.mag_sq() == T::zero() {
            return Err(VectorError::DegenerateVector);
        }
        Ok(self.normalized())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.values
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: Scalar, const N: usize> Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_is_zero() {
        let v: Vector<i32, 7> = Vector::default();
        assert!(v.iter().all(|&c| c == 0));
        assert!(v.is_zero());
    }

    #[test]
    fn test_indexing_reads_and_writes() {
        let mut v = Vector::from_array([1, 2, 3, 4, 5, 6]);
        v[5] = 60;
        assert_eq!(v[0], 1);
        assert_eq!(v[5], 60);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 60]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let v = Vector::from_array([1.0_f32; 5]);
        let _ = v[5];
    }

    #[test]
    fn test_dot_and_mag_sq() {
        let a = Vector::from_array([1.0_f64, 2.0, 3.0, 4.0, 5.0]);
        let b = Vector::from_array([5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(a.dot(&b), 35.0);
        assert_eq!(a.mag_sq(), 55.0);
        assert_relative_eq!(a.mag(), 55.0_f64.sqrt());
    }

    #[test]
    fn test_normalize_generic_dimension() {
        let mut v = Vector::from_array([1.0_f64, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        v.normalize();
        assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[3], 1.0 / 8.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_stays_zero_every_dimension() {
        fn check<const N: usize>() {
            let mut v = Vector::<f64, N>::zero();
            v.normalize();
            assert!(v.iter().all(|c| *c == 0.0 && !c.is_nan()));
        }
        check::<1>();
        check::<2>();
        check::<3>();
        check::<4>();
        check::<9>();
    }

    #[test]
    fn test_normalize_returns_self_for_chaining() {
        let mut v = Vector::from_array([0.0_f32, 0.0, 2.0, 0.0, 0.0]);
        let m = v.normalize().mag();
        assert_relative_eq!(m, 1.0);
    }

    #[test]
    fn test_try_unit() {
        let zero = Vector::<f64, 5>::zero();
        assert_eq!(zero.try_unit(), Err(VectorError::DegenerateVector));

        let v = Vector::from_array([0.0_f64, 0.0, 0.0, 0.0, -3.0]).try_unit().unwrap();
        assert_abs_diff_eq!(v, Vector::from_array([0.0, 0.0, 0.0, 0.0, -1.0]));
    }

    #[test]
    fn test_elem_mult_and_sum() {
        let a = Vector::from_array([1, 2, 3, 4, 5]);
        let b = Vector::from_array([2, 2, 2, 2, 2]);
        assert_eq!(a.elem_mult(&b).into_array(), [2, 4, 6, 8, 10]);
        assert_eq!(a.sum(), 15);
    }

    #[test]
    fn test_map_changes_type() {
        let v = Vector::from_array([1_u8, 2, 3, 4, 5]).map(f32::from);
        assert_eq!(v.into_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_pos_is_copy() {
        let a = Vector::from_array([1, -1, 2, -2, 3]);
        let b = a.pos();
        assert_eq!(a, b);
    }

    #[test]
    fn test_array_conversions() {
        let v: Vector<i64, 5> = [1, 2, 3, 4, 5].into();
        let back: [i64; 5] = v.into();
        assert_eq!(back, [1, 2, 3, 4, 5]);
        assert_eq!(Vector::<i64, 5>::DIM, 5);
    }

    #[test]
    fn test_iter_sum_of_vectors() {
        let vs = vec![
            Vector::from_array([1, 0, 0, 0, 1]),
            Vector::from_array([0, 1, 0, 0, 1]),
            Vector::from_array([0, 0, 1, 0, 1]),
        ];
        let total: Vector<i32, 5> = vs.into_iter().sum();
        assert_eq!(total.into_array(), [1, 1, 1, 0, 3]);
    }

    #[test]
    fn test_display() {
        let v = Vector::from_array([1, 2, 3, 4, 5]);
        assert_eq!(format!("{}", v), "(1, 2, 3, 4, 5)");
        assert_eq!(format!("{}", Vector::<i32, 0>::zero()), "()");
    }

    #[test]
    fn test_approx_comparison() {
        let a = Vector::from_array([0.1_f64 + 0.2, 1.0, 1.0, 1.0, 1.0]);
        let b = Vector::from_array([0.3, 1.0, 1.0, 1.0, 1.0]);
        assert_ne!(a, b);
        assert_relative_eq!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        approx::assert_ulps_eq!(a, b);
    }
}
