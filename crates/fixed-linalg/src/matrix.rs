use std::{array, fmt};

use crate::{
    algebra::{Determinant, Invert},
    capability::Dim,
    Number, One, Recip, Vector, Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A square, row-major `N`x`N` matrix with element type `T`.
///
/// Each row is stored as a [`Vector<T, N>`].
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] create a matrix from an array of row or
///   column vectors (or arrays).
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero elsewhere.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0, and `Matrix::IDENTITY` is the
///   identity matrix (defined for 2x2, 3x3 and 4x4 matrices).
///
/// # Element Access
///
/// Indexing with a single `usize` yields a whole row, so `mat[row][col]` addresses an element.
/// [`Matrix`] also implements [`Index`] and [`IndexMut`] for tuples of `(usize, usize)`, where the
/// first element is the *row* and the second is the *column*. Indices are 0-based.
///
/// ```
/// # use fixed_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// mat[1][0] = 5;
/// assert_eq!(mat[0], vec2(4, 1));
/// assert_eq!(mat[(1, 0)], 5);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Operations
///
/// [`Matrix`] implements [`MatrixN`][crate::capability::MatrixN], so it is accepted by
/// [`transpose`][crate::transpose], [`determinant`][crate::determinant],
/// [`invert`][crate::invert], [`equal`][crate::equal] and [`has_nan`][crate::has_nan]. The inherent
/// methods of the same name forward to them.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([Vector<T, N>; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; N]);
}

impl<T: Zero + One> Matrix<T, 2> {
    /// The 2x2 identity matrix.
    pub const IDENTITY: Self = Self([Vector::<T, 2>::X, Vector::<T, 2>::Y]);
}

impl<T: Zero + One> Matrix<T, 3> {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self([Vector::<T, 3>::X, Vector::<T, 3>::Y, Vector::<T, 3>::Z]);
}

impl<T: Zero + One> Matrix<T, 4> {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self([
        Vector::<T, 4>::X,
        Vector::<T, 4>::Y,
        Vector::<T, 4>::Z,
        Vector::<T, 4>::W,
    ]);
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self
    where
        T: Copy,
    {
        Self::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns a reference to the rows of this matrix.
    #[inline]
    pub const fn rows(&self) -> &[Vector<T, N>; N] {
        &self.0
    }

    /// Converts this matrix into its array of rows.
    #[inline]
    pub fn into_rows(self) -> [Vector<T, N>; N] {
        self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.as_slice().get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0
            .get_mut(row)
            .and_then(|row| row.as_mut_slice().get_mut(col))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// See [`transpose`][crate::transpose].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(&self) -> Self
    where
        T: Copy,
    {
        crate::transpose(self)
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Matrix::from_diagonal([1, 2, 3]).trace(), 1 + 2 + 3);
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T: Number, const N: usize> Matrix<T, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Only available for 2x2, 3x3 and 4x4 matrices. See [`determinant`][crate::determinant].
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T
    where
        Dim<N>: Determinant<Self>,
    {
        crate::determinant(self)
    }

    /// Inverts this matrix.
    ///
    /// Only available for 2x2, 3x3 and 4x4 matrices of floats. The inversion is unchecked: a
    /// non-invertible matrix yields infinite or `NaN` elements. See [`invert`][crate::invert].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Mat2f::IDENTITY.invert(), Mat2f::IDENTITY);
    /// assert_eq!(Matrix::from_diagonal([2.0, 4.0]).invert(), Matrix::from_diagonal([0.5, 0.25]));
    /// ```
    #[inline]
    pub fn invert(&self) -> Self
    where
        T: Recip,
        Dim<N>: Invert<Self>,
    {
        crate::invert(self)
    }

    /// Inverts this matrix, or returns [`None`] if it is singular.
    ///
    /// See [`checked_invert`][crate::checked_invert].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(Mat3f::ZERO.checked_invert(), None);
    /// assert_eq!(Mat3f::IDENTITY.checked_invert(), Some(Mat3f::IDENTITY));
    /// ```
    #[inline]
    pub fn checked_invert(&self) -> Option<Self>
    where
        T: Recip,
        Dim<N>: Invert<Self>,
    {
        crate::checked_invert(self)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps each row on one line, even with `{:#?}`.
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a Vector<T, N>);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.as_slice().iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}
