//! Fixed-dimension linear algebra with compile-time capability dispatch.
//!
//! # Motivation
//!
//! Small geometric code (2D, 3D and homogeneous 4D) tends to need the same handful of operations:
//! dot and cross products, normalization, transposes, determinants and inverses. This library
//! provides those as generic functions that work with *any* vector, point or matrix type that
//! describes its shape through the traits in [`capability`], not just with the [`Vector`],
//! [`Point`] and [`Matrix`] types shipped here.
//!
//! Which algorithm runs is decided entirely at compile time. The dimension of a type selects the
//! closed-form determinant or inverse for it, and asking for an operation the type does not
//! support (a cross product of 2D vectors, the determinant of a 5×5 matrix) fails to compile
//! instead of failing at runtime.
//!
//! # Goals & Non-Goals
//!
//! - Only support dimensions 2, 3 and 4 where an operation is dimension-specific. Vectors,
//!   points and matrices of other sizes still get the dimension-agnostic operations ([`dot`],
//!   [`normalize`], [`transpose`], [`has_nan`]).
//! - Only support square, row-major matrices. `m[i]` is the `i`-th row, `m[i][j]` is the element
//!   in row `i`, column `j`.
//! - Use exact cofactor expansion for determinants and inverses. There is no pivoting and no
//!   decomposition, so [`invert`] on a singular matrix divides by zero; use [`checked_invert`]
//!   if the input might be singular.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Don't provide quaternions, projections, or general `M×N` matrices.
//!
//! # Examples
//!
//! ```
//! # use fixed_linalg::*;
//! let m = Mat3f::from_diagonal([1.0, 2.0, 4.0]);
//! assert_eq!(determinant(&m), 8.0);
//! assert_approx_eq!(invert(&m), Mat3f::from_diagonal([1.0, 0.5, 0.25]));
//!
//! assert_eq!(cross(&Vec3f::X, &Vec3f::Y), Vec3f::Z);
//! assert_eq!(dot(&Vec3f::X, &Vec3f::Y), 0.0);
//! assert!(!has_nan(&m));
//! ```

pub mod approx;
mod algebra;
pub mod capability;
mod matrix;
mod point;
mod traits;
mod vector;

pub use algebra::*;
pub use matrix::*;
pub use point::*;
pub use traits::*;
pub use vector::*;
