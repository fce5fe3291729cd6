//! Compile-time shape contracts accepted by the generic operations.
//!
//! Every operation in this crate is a free function bounded by one of the traits in this module,
//! rather than a method on a concrete type. A type opts into the operations by describing its shape
//! via [`Shape`], and by implementing the capability trait of its category ([`VectorN`],
//! [`BasicPoint`] or [`MatrixN`]). The crate's own [`Vector`], [`Point`] and [`Matrix`] do this, but
//! any other fixed-size type with the same indexing structure can as well.
//!
//! # Dispatch
//!
//! Operations that only exist for some dimensions (eg. [`determinant`][crate::determinant] for 2x2,
//! 3x3 and 4x4 matrices) are dispatched through the [`Dim`] marker stored in [`Shape::Dim`]: the
//! per-dimension formula is implemented *on* `Dim<N>`, so a shape whose dimension has no formula is
//! rejected by the compiler. Operations with a variant per category (eg.
//! [`has_nan`][crate::has_nan]) are dispatched the same way through [`Shape::Kind`].
//!
//! ```compile_fail
//! # use fixed_linalg::*;
//! // There is no 5x5 determinant.
//! let d = determinant(&Matrix::<f32, 5>::ZERO);
//! ```
//!
//! ```compile_fail
//! # use fixed_linalg::*;
//! // The cross product only exists in 3 dimensions.
//! let c = cross(&Vec2f::X, &Vec2f::Y);
//! ```
//!
//! ```compile_fail
//! # use fixed_linalg::*;
//! // Integer matrices can't be inverted.
//! let inv = Mat3::<i64>::IDENTITY.invert();
//! ```

use std::ops::{Index, IndexMut};

use crate::{Matrix, Point, Vector};

/// Type-level marker for a dimension.
///
/// Per-dimension algorithms are implemented on `Dim<N>` for the supported values of `N` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim<const N: usize>;

/// Category marker for plain `f32` and `f64` values.
///
/// Lets the element-wise comparisons of [`equal`][crate::equal] and [`has_nan`][crate::has_nan]
/// accept single numbers too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScalarKind;

/// Category marker for vectors (see [`VectorN`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VectorKind;

/// Category marker for points (see [`BasicPoint`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointKind;

/// Category marker for square matrices (see [`MatrixN`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatrixKind;

/// Static shape of a fixed-size linear algebra type.
pub trait Shape {
    /// The element type.
    type Scalar: Copy;

    /// The [`Dim`] marker matching [`Shape::DIMENSION`].
    type Dim;

    /// One of [`VectorKind`], [`PointKind`] or [`MatrixKind`] (or [`ScalarKind`] for numbers).
    type Kind;

    /// Number of elements of a vector or point, or side length of a square matrix.
    const DIMENSION: usize;
}

/// A vector with a fixed number of scalar elements, indexable by position.
pub trait VectorN:
    Shape<Kind = VectorKind>
    + Copy
    + Index<usize, Output = <Self as Shape>::Scalar>
    + IndexMut<usize>
{
}

/// Vectors that can compute their own length.
///
/// Used by [`normalize`][crate::normalize].
pub trait Length: VectorN {
    /// Returns the Euclidean length of `self`.
    fn length(&self) -> Self::Scalar;
}

/// A 2-dimensional vector, with `x` at index 0 and `y` at index 1.
pub trait Vector2: VectorN<Dim = Dim<2>> {}
impl<V: VectorN<Dim = Dim<2>>> Vector2 for V {}

/// A 3-dimensional vector, with `x`, `y` and `z` at indices 0, 1 and 2.
pub trait Vector3: VectorN<Dim = Dim<3>> {}
impl<V: VectorN<Dim = Dim<3>>> Vector3 for V {}

/// A position with a fixed number of coordinates, indexable by position.
pub trait BasicPoint:
    Shape<Kind = PointKind> + Copy + Index<usize, Output = <Self as Shape>::Scalar>
{
}

/// Shape of a square matrix: names the vector type of its rows.
pub trait MatrixShape: Shape {
    /// The row vector type.
    type Row: VectorN<Scalar = Self::Scalar, Dim = Self::Dim>;
}

/// A square matrix, indexable by row.
///
/// Indexing with `m[row]` yields the row as a [`VectorN`] of the same dimension, so that
/// `m[row][col]` addresses a single element.
pub trait MatrixN:
    MatrixShape<Kind = MatrixKind>
    + Copy
    + Index<usize, Output = <Self as MatrixShape>::Row>
    + IndexMut<usize>
{
}

/// A 2x2 matrix.
pub trait Matrix2: MatrixN<Dim = Dim<2>> {}
impl<M: MatrixN<Dim = Dim<2>>> Matrix2 for M {}

/// A 3x3 matrix.
pub trait Matrix3: MatrixN<Dim = Dim<3>> {}
impl<M: MatrixN<Dim = Dim<3>>> Matrix3 for M {}

/// A 4x4 matrix.
pub trait Matrix4: MatrixN<Dim = Dim<4>> {}
impl<M: MatrixN<Dim = Dim<4>>> Matrix4 for M {}

macro_rules! scalar_shape {
    ($($types:ty),+) => {
        $(
            impl Shape for $types {
                type Scalar = $types;
                type Dim = Dim<1>;
                type Kind = ScalarKind;
                const DIMENSION: usize = 1;
            }
        )+
    };
}
scalar_shape!(f32, f64);

impl<T: Copy, const N: usize> Shape for Vector<T, N> {
    type Scalar = T;
    type Dim = Dim<N>;
    type Kind = VectorKind;
    const DIMENSION: usize = N;
}
impl<T: Copy, const N: usize> VectorN for Vector<T, N> {}

impl<T: Copy, const N: usize> Shape for Point<T, N> {
    type Scalar = T;
    type Dim = Dim<N>;
    type Kind = PointKind;
    const DIMENSION: usize = N;
}
impl<T: Copy, const N: usize> BasicPoint for Point<T, N> {}

impl<T: Copy, const N: usize> Shape for Matrix<T, N> {
    type Scalar = T;
    type Dim = Dim<N>;
    type Kind = MatrixKind;
    const DIMENSION: usize = N;
}
impl<T: Copy, const N: usize> MatrixShape for Matrix<T, N> {
    type Row = Vector<T, N>;
}
impl<T: Copy, const N: usize> MatrixN for Matrix<T, N> {}
