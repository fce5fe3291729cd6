use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

/// Row access.
impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

/// Element access by `(row, column)`.
impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

/// Row by row; stops at the first row that differs.
impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }

    fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, max_ulps)
    }
}

/// Matrix * Column Vector.
impl<T, const N: usize> Mul<Vector<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|row| self.0[row].dot(rhs))
    }
}

/// Matrix * Matrix.
impl<T, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[i][k] * rhs[k][j]))
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn add(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| self[i][j] + rhs[i][j])
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn sub(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| self[i][j] - rhs[i][j])
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}
