//! The generic operations.
//!
//! Each operation is a free function bounded by the capability traits in
//! [`capability`][crate::capability]. Dimension-specific operations dispatch to a per-dimension
//! implementation of [`Determinant`] or [`Invert`] on the shape's [`Dim`][crate::capability::Dim]
//! marker, and [`has_nan`] dispatches on the shape's kind via [`NanCheck`].

mod compare;
mod determinant;
mod invert;
mod transpose;
mod vector;

pub use compare::*;
pub use determinant::*;
pub use invert::*;
pub use transpose::*;
pub use vector::*;
