use std::ops::Div;

use crate::{
    capability::{Length, Shape, Vector2, Vector3, VectorN},
    Number, Zero,
};

/// Computes the dot product of `u` and `v`.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(dot(&vec3(1, 2, 3), &vec3(4, 5, 6)), 4 + 10 + 18);
/// assert_eq!(dot(&Vec2f::X, &Vec2f::Y), 0.0);
/// ```
pub fn dot<V: VectorN>(u: &V, v: &V) -> V::Scalar
where
    V::Scalar: Number,
{
    (0..V::DIMENSION).fold(<V::Scalar as Zero>::ZERO, |acc, i| acc + u[i] * v[i])
}

/// Divides `u` by its [`Length`], resulting in a unit vector pointing in the same direction.
///
/// The length is not checked: normalizing a zero vector divides by zero, which results in `NaN`
/// elements for floating-point scalars.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(normalize(&vec2(0.0, -3.0)), vec2(0.0, -1.0));
/// assert!(has_nan(&normalize(&Vec3f::ZERO)));
/// ```
pub fn normalize<V>(u: &V) -> V
where
    V: Length + Div<<V as Shape>::Scalar, Output = V>,
{
    let len = u.length();
    *u / len
}

/// Returns the perpendicular of a 2D vector, `(y, -x)`.
///
/// This rotates `u` clockwise by a quarter turn.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(perp(&Vec2f::X), -Vec2f::Y);
/// assert_eq!(perp(&vec2(3, 4)), vec2(4, -3));
/// ```
pub fn perp<V: Vector2>(u: &V) -> V
where
    V::Scalar: Number,
{
    let mut w = *u;
    w[0] = u[1];
    w[1] = -u[0];
    w
}

/// Computes the cross product of two 3D vectors.
///
/// The result is perpendicular to both `u` and `v`, following the right-hand rule.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(cross(&Vec3f::X, &Vec3f::Y), Vec3f::Z);
/// assert_eq!(cross(&Vec3f::Z, &Vec3f::Y), -Vec3f::X);
/// ```
pub fn cross<V: Vector3>(u: &V, v: &V) -> V
where
    V::Scalar: Number,
{
    let mut w = *u;
    w[0] = u[1] * v[2] - u[2] * v[1];
    w[1] = u[2] * v[0] - u[0] * v[2];
    w[2] = u[0] * v[1] - u[1] * v[0];
    w
}
