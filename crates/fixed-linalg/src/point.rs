use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{
    vector::view::{XY, XYZ, XYZW},
    Vector, Zero,
};

mod ops;

/// A point in 2D space.
pub type Point2<T> = Point<T, 2>;
/// A point in 3D space.
pub type Point3<T> = Point<T, 3>;
/// A point in 4D (usually homogeneous) space.
pub type Point4<T> = Point<T, 4>;

/// A position in `N`-dimensional space.
///
/// Unlike a [`Vector`], a [`Point`] has no length or direction. Subtracting two points yields the
/// [`Vector`] between them, and adding a [`Vector`] to a point moves it.
///
/// Coordinates can be accessed by index or, for 2 to 4 dimensions, as fields `x`, `y`, `z` and `w`.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let a = Point::from([1, 2]);
/// let b = Point::from([4, 6]);
/// assert_eq!(b - a, vec2(3, 4));
/// assert_eq!(a + vec2(3, 4), b);
/// assert_eq!(b.y, 6);
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Point<T, const N: usize>(Vector<T, N>);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Point<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Point<T, N> {}

impl<T: Zero, const N: usize> Point<T, N> {
    /// The point with all coordinates set to 0.
    pub const ORIGIN: Self = Self(Vector::ZERO);
}

impl<T, const N: usize> Point<T, N> {
    /// Creates the point at offset `vector` from the origin.
    #[inline]
    pub const fn from_vector(vector: Vector<T, N>) -> Self {
        Self(vector)
    }

    /// Creates a point by invoking a closure with the index of each coordinate.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(Vector::from_fn(cb))
    }

    /// Returns the offset of this point from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector<T, N> {
        self.0
    }

    /// Returns a reference to the coordinates as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        self.0.as_array()
    }

    /// Converts this point into an array of its coordinates.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0.into_array()
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value.into())
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        Self(value)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("Point");
        for elem in self.0.as_slice() {
            tup.field(elem);
        }
        tup.finish()
    }
}

macro_rules! views {
    ($($n:literal => $view:ident),+) => {
        $(
            impl<T> Deref for Point<T, $n> {
                type Target = $view<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl<T> DerefMut for Point<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    &mut self.0
                }
            }
        )+
    };
}

views!(2 => XY, 3 => XYZ, 4 => XYZW);

#[cfg(test)]
mod tests {
    use crate::vec3;

    use super::*;

    #[test]
    fn access() {
        let mut p = Point3::from([1.0, 2.0, 3.0]);
        assert_eq!(p.x, 1.0);
        assert_eq!(p[2], 3.0);
        p.z = 5.0;
        p[0] = -1.0;
        assert_eq!(p.into_array(), [-1.0, 2.0, 5.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Point2::<i32>::ORIGIN), "Point(0, 0)");
    }

    #[test]
    fn vector_conversion() {
        let p = Point::from_vector(vec3(1, 2, 3));
        assert_eq!(p.to_vector(), vec3(1, 2, 3));
        assert_eq!(p - Point3::ORIGIN, p.to_vector());
        assert_eq!(Point::from_fn(|i| i), Point::from([0, 1, 2, 3]));
    }
}
