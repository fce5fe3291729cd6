use std::{array, fmt};

use crate::{capability::Length, traits::Number, One, Sqrt, Zero};

mod ops;
pub(crate) mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// A column vector of `N` elements of type `T`.
///
/// Build one with [`vec2`], [`vec3`] or [`vec4`], from an array through [`From`], with
/// [`Vector::splat`] or [`Vector::from_fn`], or take one of the constants: [`Vector::ZERO`] and the
/// unit axes `X`, `Y`, `Z` and `W` (defined for the dimensions that have them).
///
/// Elements are addressed by position through [`Index`] and [`IndexMut`]. Vectors of 2, 3 and 4
/// elements also expose them as the named fields `x`, `y`, `z` and `w`. The backing array is
/// reachable through [`Vector::as_array`] and friends, and [`bytemuck::Pod`] is implemented when
/// `T` is `Pod`.
///
/// [`Vector`] implements [`VectorN`][crate::capability::VectorN], so every vector operation of the
/// crate ([`dot`][crate::dot], [`normalize`][crate::normalize], [`perp`][crate::perp],
/// [`cross`][crate::cross], [`equal`][crate::equal], [`has_nan`][crate::has_nan]) accepts it. The
/// inherent methods of the same name forward to them.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The zero vector.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Vec4f::splat(0.5), vec4(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` once per index, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Transforms every element with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(-1.5f32, 0.0, 2.5).map(f32::abs), vec3(1.5, 0.0, 2.5));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` at equal indices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let pairs = vec2(0.5, -1.0).zip(vec2(4, 7));
    /// assert_eq!(pairs, vec2((0.5, 4), (-1.0, 7)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the backing array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let [x, y] = vec2(8u8, 9).into_array();
    /// assert_eq!((x, y), (8, 9));
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product with `other`. See [`dot`][crate::dot].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(2, -1, 0).dot(vec3(5, 4, 9)), 6);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        crate::dot(&self, &other)
    }

    /// Returns the squared Euclidean length, which needs no square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec3(1, -2, 2).length2(), 9);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(-5.0, 12.0).length(), 13.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        Length::length(self)
    }

    /// Scales the vector to unit length. See [`normalize`][crate::normalize].
    ///
    /// The zero vector has no direction and yields `NaN` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        crate::normalize(&self)
    }
}

impl<T: Number + Sqrt, const N: usize> Length for Vector<T, N> {
    fn length(&self) -> T {
        self.length2().sqrt()
    }
}

impl<T: Number> Vector<T, 2> {
    /// Returns `(y, -x)`, the vector rotated by a quarter turn.
    ///
    /// See [`perp`][crate::perp].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(vec2(1, 2).perp(), vec2(2, -1));
    /// ```
    #[inline]
    pub fn perp(self) -> Self {
        crate::perp(&self)
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z component of the 3D cross product of the two vectors lifted to Z=0, so it is
    /// positive when `other` lies counter-clockwise of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T {
        self.dot(other.perp())
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the cross product with `other`. See [`cross`][crate::cross].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        crate::cross(&self, &other)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Shorthand for a [`Vec2`].
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for a [`Vec3`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for a [`Vec4`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn axes_and_fields() {
        let axes = [Vec4f::X, Vec4f::Y, Vec4f::Z, Vec4f::W];
        for (i, axis) in axes.iter().enumerate() {
            for j in 0..4 {
                assert_eq!(axis[j], if i == j { 1.0 } else { 0.0 });
            }
        }
        assert_eq!((Vec2f::Y.x, Vec2f::Y.y), (0.0, 1.0));
        assert_eq!(Vec3f::Z.z, 1.0);

        let mut v = vec3(7, 8, 9);
        v.z = -1;
        v[0] += 3;
        assert_eq!(v, [10, 8, -1]);
        assert_eq!(v.as_slice().len(), 3);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec3(1.5, -2.0, 0.25)), "(1.5, -2, 0.25)");
        assert_eq!(format!("{:?}", vec2(3u8, 4)), "(3, 4)");
    }

    #[test]
    fn zip() {
        let pairs = vec3(1, 2, 3).zip(vec3('a', 'b', 'c'));
        assert_eq!(pairs, vec3((1, 'a'), (2, 'b'), (3, 'c')));
        assert_eq!(Vec4f::W.zip(Vec4f::X).map(|(a, b)| a + b), vec4(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn dot() {
        assert_eq!(vec4(1, 2, 3, 4).dot(vec4(-4, 3, -2, 1)), 0);
        assert_eq!(vec2(-3, 5).dot(vec2(-3, 5)), 34);
        assert_eq!(Vec3f::Z.dot(Vec3f::Z), 1.0);
        assert_eq!(Vec3f::Z.dot(Vec3f::X), 0.0);
    }

    #[test]
    fn length() {
        assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(vec4(1, 1, 1, 1).length2(), 4);
        assert_approx_eq!(vec2(0.3, -0.4).normalize(), vec2(0.6, -0.8));
    }

    #[test]
    fn perp_dot() {
        let a = vec2(2.0, -1.0);
        let b = vec2(0.5, 3.0);
        let lifted = |v: Vec2<f64>| vec3(v.x, v.y, 0.0);
        assert_eq!(a.perp_dot(b), lifted(a).cross(lifted(b)).z);
        assert_eq!(a.perp_dot(b), -b.perp_dot(a));
    }
}
