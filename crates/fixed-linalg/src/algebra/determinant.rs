use crate::{
    capability::{Dim, Matrix2, Matrix3, Matrix4, MatrixN},
    Number,
};

/// Closed-form determinant of the square matrices of one dimension.
///
/// Implemented on [`Dim<2>`], [`Dim<3>`] and [`Dim<4>`]. [`determinant`] looks up the
/// implementation through [`Shape::Dim`][crate::capability::Shape::Dim], so matrices of any other
/// dimension have no determinant.
pub trait Determinant<M: MatrixN> {
    /// Computes the determinant of `m`.
    fn determinant(m: &M) -> M::Scalar;
}

impl<M: Matrix2> Determinant<M> for Dim<2>
where
    M::Scalar: Number,
{
    fn determinant(m: &M) -> M::Scalar {
        (m[0][0] * m[1][1]) - (m[0][1] * m[1][0])
    }
}

/// Rule of Sarrus.
impl<M: Matrix3> Determinant<M> for Dim<3>
where
    M::Scalar: Number,
{
    fn determinant(m: &M) -> M::Scalar {
        (m[0][0] * m[1][1] * m[2][2])
            + (m[0][1] * m[1][2] * m[2][0])
            + (m[0][2] * m[1][0] * m[2][1])
            - (m[0][2] * m[1][1] * m[2][0])
            - (m[0][1] * m[1][0] * m[2][2])
            - (m[0][0] * m[1][2] * m[2][1])
    }
}

/// Full Leibniz expansion over the 24 permutations.
impl<M: Matrix4> Determinant<M> for Dim<4>
where
    M::Scalar: Number,
{
    #[rustfmt::skip]
    fn determinant(m: &M) -> M::Scalar {
        (m[0][0] * m[1][1] * m[2][2] * m[3][3])
            + (m[0][0] * m[1][2] * m[2][3] * m[3][1])
            + (m[0][0] * m[1][3] * m[2][1] * m[3][2])
            - (m[0][0] * m[1][3] * m[2][2] * m[3][1])
            - (m[0][0] * m[1][2] * m[2][1] * m[3][3])
            - (m[0][0] * m[1][1] * m[2][3] * m[3][2])
            - (m[0][1] * m[1][0] * m[2][2] * m[3][3])
            - (m[0][2] * m[1][0] * m[2][3] * m[3][1])
            - (m[0][3] * m[1][0] * m[2][1] * m[3][2])
            + (m[0][3] * m[1][0] * m[2][2] * m[3][1])
            + (m[0][2] * m[1][0] * m[2][1] * m[3][3])
            + (m[0][1] * m[1][0] * m[2][3] * m[3][2])
            + (m[0][1] * m[1][2] * m[2][0] * m[3][3])
            + (m[0][2] * m[1][3] * m[2][0] * m[3][1])
            + (m[0][3] * m[1][1] * m[2][0] * m[3][2])
            - (m[0][3] * m[1][2] * m[2][0] * m[3][1])
            - (m[0][2] * m[1][1] * m[2][0] * m[3][3])
            - (m[0][1] * m[1][3] * m[2][0] * m[3][2])
            - (m[0][1] * m[1][2] * m[2][3] * m[3][0])
            - (m[0][2] * m[1][3] * m[2][1] * m[3][0])
            - (m[0][3] * m[1][1] * m[2][2] * m[3][0])
            + (m[0][3] * m[1][2] * m[2][1] * m[3][0])
            + (m[0][2] * m[1][1] * m[2][3] * m[3][0])
            + (m[0][1] * m[1][3] * m[2][2] * m[3][0])
    }
}

/// Computes the [determinant] of a 2x2, 3x3 or 4x4 matrix.
///
/// The determinant is computed by a closed-form cofactor expansion, without pivoting.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_eq!(determinant(&Mat2::from_rows([[1, 2], [3, 4]])), -2);
/// assert_eq!(determinant(&Mat3f::from_diagonal([1.0, 2.0, 4.0])), 8.0);
/// assert_eq!(determinant(&Mat4f::IDENTITY), 1.0);
/// ```
///
/// [determinant]: https://en.wikipedia.org/wiki/Determinant
pub fn determinant<M>(m: &M) -> M::Scalar
where
    M: MatrixN,
    M::Dim: Determinant<M>,
{
    <M::Dim as Determinant<M>>::determinant(m)
}

#[cfg(test)]
mod tests {
    use crate::{transpose, Mat2, Mat3, Mat3f, Mat4, Mat4f, Matrix};

    use super::*;

    #[test]
    fn identity_and_zero() {
        assert_eq!(determinant(&Mat2::<i32>::IDENTITY), 1);
        assert_eq!(determinant(&Mat3::<i64>::IDENTITY), 1);
        assert_eq!(determinant(&Mat4::<f64>::IDENTITY), 1.0);
        assert_eq!(determinant(&Mat2::<i32>::ZERO), 0);
        assert_eq!(determinant(&Mat3::<i32>::ZERO), 0);
        assert_eq!(determinant(&Mat4::<i32>::ZERO), 0);
    }

    #[test]
    fn diagonal() {
        assert_eq!(determinant(&Mat3f::from_diagonal([1.0, 2.0, 4.0])), 8.0);
        assert_eq!(determinant(&Mat4f::from_diagonal([1.0, 2.0, 3.0, 4.0])), 24.0);
        assert_eq!(determinant(&Mat2::from_diagonal([-3, 5])), -15);
    }

    #[test]
    fn known_values() {
        let m = Matrix::from_rows([
            [2, -3, 1],
            [2, 0, -1],
            [1, 4, 5],
        ]);
        assert_eq!(determinant(&m), 49);

        let m = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(determinant(&m), 30);
    }

    #[test]
    fn row_swap_flips_sign() {
        let m = Matrix::from_rows([
            [4, 3, 2, 1],
            [0, 1, -1, 2],
            [5, 0, 2, 2],
            [1, 1, 1, 3],
        ]);
        let mut swapped = m;
        swapped[0] = m[2];
        swapped[2] = m[0];
        assert_eq!(determinant(&swapped), -determinant(&m));
    }

    #[test]
    fn transpose_preserves_determinant() {
        let m2 = Mat2::from_rows([[7, -2], [3, 9]]);
        let m3 = Mat3::from_rows([[1, 2, 3], [0, -4, 5], [6, 1, -2]]);
        let m4 = Mat4::from_fn(|i, j| ((i * 7 + j * 3) % 5) as i64 - 2);
        assert_eq!(determinant(&transpose(&m2)), determinant(&m2));
        assert_eq!(determinant(&transpose(&m3)), determinant(&m3));
        assert_eq!(determinant(&transpose(&m4)), determinant(&m4));
    }

    #[test]
    fn singular() {
        let m = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 5.0],
        ]);
        assert_eq!(determinant(&m), 0.0);
    }
}
