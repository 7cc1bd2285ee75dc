//! Named-component views for 2, 3 and 4 dimensions.
//!
//! The aliases (`x`/`y`/`z`/`w`, and `r`/`g`/`b`/`a` for colours) are
//! accessors over the same component array, so `v.r()` and `v.x()` always
//! agree and writing through `*v.g_mut()` is visible through `v.y()` and
//! `v[1]`.

use crate::scalar::Scalar;
use crate::vector::Vector;

macro_rules! component_accessors {
    ($($get:ident, $get_mut:ident => $idx:literal);* $(;)?) => {
        $(
            #[doc = concat!("Component ", stringify!($idx), ".")]
            #[inline]
            pub fn $get(&self) -> T {
                self[$idx]
            }

            #[doc = concat!("Mutable reference to component ", stringify!($idx), ".")]
            #[inline]
            pub fn $get_mut(&mut self) -> &mut T {
                &mut self[$idx]
            }
        )*
    };
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a 2D vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    component_accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
    }

    /// The unit vector along x.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The unit vector along y.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a 3D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    component_accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
        z, z_mut => 2;
        r, r_mut => 0;
        g, g_mut => 1;
        b, b_mut => 2;
    }

    /// Right-handed cross product.
    ///
    /// ```
    /// use banan_vec::Vec3d;
    ///
    /// let z = Vec3d::unit_x().cross(&Vec3d::unit_y());
    /// assert_eq!(z, Vec3d::unit_z());
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// The unit vector along x.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// The unit vector along y.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// The unit vector along z.
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a 4D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    component_accessors! {
        x, x_mut => 0;
        y, y_mut => 1;
        z, z_mut => 2;
        w, w_mut => 3;
        r, r_mut => 0;
        g, g_mut => 1;
        b, b_mut => 2;
        a, a_mut => 3;
    }

    /// The unit vector along x.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// The unit vector along y.
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// The unit vector along z.
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// The unit vector along w.
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> From<(T, T)> for Vector<T, 2> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<(T, T, T)> for Vector<T, 3> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vector<T, 4> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}
