use crate::{
    approx::{ApproxEq, DefaultEpsilon},
    capability::{BasicPoint, MatrixKind, MatrixN, PointKind, ScalarKind, Shape, VectorKind, VectorN},
};

/// Per-kind implementation of [`equal_eps`].
///
/// Implemented on [`ScalarKind`], [`VectorKind`], [`PointKind`] and [`MatrixKind`], for any type
/// `E` of that kind whose elements implement [`ApproxEq`].
pub trait ApproxCheck<E: Shape>
where
    E::Scalar: ApproxEq,
{
    /// Returns whether every element of `u` is within `epsilon` of the matching element of `v`.
    fn equal_eps(u: &E, v: &E, epsilon: <E::Scalar as ApproxEq>::Epsilon) -> bool;
}

macro_rules! scalar_check {
    ($($types:ty),+) => {
        $(
            impl ApproxCheck<$types> for ScalarKind {
                fn equal_eps(u: &$types, v: &$types, epsilon: $types) -> bool {
                    u.abs_diff_eq(v, epsilon)
                }
            }
        )+
    };
}
scalar_check!(f32, f64);

impl<V: VectorN> ApproxCheck<V> for VectorKind
where
    V::Scalar: ApproxEq,
{
    fn equal_eps(u: &V, v: &V, epsilon: <V::Scalar as ApproxEq>::Epsilon) -> bool {
        (0..V::DIMENSION).all(|i| u[i].abs_diff_eq(&v[i], epsilon))
    }
}

impl<P: BasicPoint> ApproxCheck<P> for PointKind
where
    P::Scalar: ApproxEq,
{
    fn equal_eps(p: &P, q: &P, epsilon: <P::Scalar as ApproxEq>::Epsilon) -> bool {
        (0..P::DIMENSION).all(|i| p[i].abs_diff_eq(&q[i], epsilon))
    }
}

impl<M: MatrixN> ApproxCheck<M> for MatrixKind
where
    M::Scalar: ApproxEq,
{
    fn equal_eps(a: &M, b: &M, epsilon: <M::Scalar as ApproxEq>::Epsilon) -> bool {
        (0..M::DIMENSION)
            .all(|row| <VectorKind as ApproxCheck<M::Row>>::equal_eps(&a[row], &b[row], epsilon))
    }
}

/// Returns whether `u` and `v` are element-wise equal within the scalar type's
/// [`DEFAULT_EPSILON`][DefaultEpsilon::DEFAULT_EPSILON].
///
/// Works for scalars, vectors, points and matrices, including caller-defined types that implement
/// the [`capability`][crate::capability] traits. Matrices are compared row by row, and the
/// comparison stops at the first element that differs.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert!(equal(&vec2(1.0f32, 2.0), &vec2(1.0, 2.000001)));
/// assert!(!equal(&vec2(1.0f32, 2.0), &vec2(1.0, 2.1)));
/// assert!(equal(&0.1f64, &(0.3 - 0.2)));
/// ```
pub fn equal<E: Shape>(u: &E, v: &E) -> bool
where
    E::Scalar: ApproxEq,
    E::Kind: ApproxCheck<E>,
{
    equal_eps(u, v, <<E::Scalar as ApproxEq>::Epsilon as DefaultEpsilon>::DEFAULT_EPSILON)
}

/// Returns whether `u` and `v` are element-wise equal within `epsilon`.
///
/// Two elements are equal if their absolute difference is at most `epsilon`. Infinities are only
/// equal to themselves and `NaN` is never equal to anything.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let a = Mat2f::IDENTITY;
/// let b = Matrix::from_rows([[1.0, 0.0], [0.0, 1.25]]);
/// assert!(equal_eps(&a, &b, 0.5));
/// assert!(!equal_eps(&a, &b, 0.125));
/// ```
pub fn equal_eps<E: Shape>(u: &E, v: &E, epsilon: <E::Scalar as ApproxEq>::Epsilon) -> bool
where
    E::Scalar: ApproxEq,
    E::Kind: ApproxCheck<E>,
{
    <E::Kind as ApproxCheck<E>>::equal_eps(u, v, epsilon)
}

/// Per-kind implementation of [`has_nan`].
///
/// Implemented on [`ScalarKind`], [`VectorKind`], [`PointKind`] and [`MatrixKind`], for any type
/// `E` of that kind.
pub trait NanCheck<E> {
    /// Returns whether any element of `e` is `NaN`.
    fn has_nan(e: &E) -> bool;
}

impl<S> NanCheck<S> for ScalarKind
where
    S: Shape<Scalar = S, Kind = ScalarKind> + PartialEq,
{
    #[allow(clippy::eq_op)]
    fn has_nan(x: &S) -> bool {
        x != x
    }
}

impl<V: VectorN> NanCheck<V> for VectorKind
where
    V::Scalar: PartialEq,
{
    #[allow(clippy::eq_op)]
    fn has_nan(u: &V) -> bool {
        (0..V::DIMENSION).any(|i| u[i] != u[i])
    }
}

impl<P: BasicPoint> NanCheck<P> for PointKind
where
    P::Scalar: PartialEq,
{
    #[allow(clippy::eq_op)]
    fn has_nan(p: &P) -> bool {
        (0..P::DIMENSION).any(|i| p[i] != p[i])
    }
}

impl<M: MatrixN> NanCheck<M> for MatrixKind
where
    M::Scalar: PartialEq,
{
    fn has_nan(m: &M) -> bool {
        (0..M::DIMENSION).any(|i| <VectorKind as NanCheck<M::Row>>::has_nan(&m[i]))
    }
}

/// Returns whether a number, or any element of a vector, point or matrix, is `NaN`.
///
/// An element is considered `NaN` if it is not equal to itself, so this is always `false` for
/// integer elements.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert!(!has_nan(&vec3(1.0, f32::INFINITY, 0.0)));
/// assert!(has_nan(&vec3(1.0, f32::NAN, 0.0)));
/// assert!(has_nan(&Point::from([f64::NAN, 0.0])));
/// assert!(has_nan(&f32::NAN));
///
/// let mut m = Mat4f::IDENTITY;
/// assert!(!has_nan(&m));
/// m[3][2] = f32::NAN;
/// assert!(has_nan(&m));
/// ```
pub fn has_nan<E: Shape>(e: &E) -> bool
where
    E::Kind: NanCheck<E>,
{
    <E::Kind as NanCheck<E>>::has_nan(e)
}
