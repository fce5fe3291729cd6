use std::ops::Mul;

use crate::{
    capability::{Dim, Matrix2, Matrix3, Matrix4, MatrixN, Shape},
    Number, Recip, Zero,
};

use super::Determinant;

/// Closed-form inverse of the square matrices of one dimension.
///
/// Implemented on [`Dim<2>`], [`Dim<3>`] and [`Dim<4>`]. [`invert`] looks up the implementation
/// through [`Shape::Dim`][crate::capability::Shape::Dim].
pub trait Invert<M: MatrixN> {
    /// Returns the adjugate of `m` along with the determinant that the inverse is scaled by.
    ///
    /// Both are built from the same cofactors. For 4x4 matrices the determinant is expanded from
    /// the 2x2 minors, so it can differ from [`determinant`][crate::determinant] in the last bits.
    fn adjugate(m: &M) -> (M, M::Scalar);

    /// Computes the inverse of `m` as its adjugate divided by its determinant.
    ///
    /// There is no check for singular input.
    fn invert(m: &M) -> M
    where
        M: Mul<<M as Shape>::Scalar, Output = M>,
        M::Scalar: Number + Recip,
    {
        let (adjugate, det) = Self::adjugate(m);
        adjugate * det.recip()
    }

    /// Like [`Invert::invert`], but returns [`None`] if the determinant it would divide by is zero.
    fn checked_invert(m: &M) -> Option<M>
    where
        M: Mul<<M as Shape>::Scalar, Output = M>,
        M::Scalar: Number + Recip,
    {
        let (adjugate, det) = Self::adjugate(m);
        if det == <M::Scalar as Zero>::ZERO {
            return None;
        }
        Some(adjugate * det.recip())
    }
}

impl<M> Invert<M> for Dim<2>
where
    M: Matrix2,
    M::Scalar: Number,
{
    fn adjugate(m: &M) -> (M, M::Scalar) {
        let mut result = *m;
        result[0][0] = m[1][1];
        result[0][1] = -m[0][1];
        result[1][0] = -m[1][0];
        result[1][1] = m[0][0];
        (result, <Dim<2> as Determinant<M>>::determinant(m))
    }
}

impl<M> Invert<M> for Dim<3>
where
    M: Matrix3,
    M::Scalar: Number,
{
    fn adjugate(m: &M) -> (M, M::Scalar) {
        let mut result = *m;
        result[0][0] = m[1][1] * m[2][2] - m[2][1] * m[1][2];
        result[0][1] = m[0][2] * m[2][1] - m[0][1] * m[2][2];
        result[0][2] = m[0][1] * m[1][2] - m[0][2] * m[1][1];
        result[1][0] = m[1][2] * m[2][0] - m[1][0] * m[2][2];
        result[1][1] = m[0][0] * m[2][2] - m[0][2] * m[2][0];
        result[1][2] = m[1][0] * m[0][2] - m[0][0] * m[1][2];
        result[2][0] = m[1][0] * m[2][1] - m[2][0] * m[1][1];
        result[2][1] = m[2][0] * m[0][1] - m[0][0] * m[2][1];
        result[2][2] = m[0][0] * m[1][1] - m[1][0] * m[0][1];
        (result, <Dim<3> as Determinant<M>>::determinant(m))
    }
}

/// Laplace expansion over the 2x2 minors of the lower rows.
///
/// `Aabcd` is the minor of columns `a` and `b` in rows `c` and `d`. The first adjugate column is
/// reused to expand the determinant along the first row.
impl<M> Invert<M> for Dim<4>
where
    M: Matrix4,
    M::Scalar: Number,
{
    #[allow(non_snake_case)]
    fn adjugate(m: &M) -> (M, M::Scalar) {
        let A2323 = m[2][2] * m[3][3] - m[2][3] * m[3][2];
        let A1323 = m[2][1] * m[3][3] - m[2][3] * m[3][1];
        let A1223 = m[2][1] * m[3][2] - m[2][2] * m[3][1];
        let A0323 = m[2][0] * m[3][3] - m[2][3] * m[3][0];
        let A0223 = m[2][0] * m[3][2] - m[2][2] * m[3][0];
        let A0123 = m[2][0] * m[3][1] - m[2][1] * m[3][0];
        let A2313 = m[1][2] * m[3][3] - m[1][3] * m[3][2];
        let A1313 = m[1][1] * m[3][3] - m[1][3] * m[3][1];
        let A1213 = m[1][1] * m[3][2] - m[1][2] * m[3][1];
        let A2312 = m[1][2] * m[2][3] - m[1][3] * m[2][2];
        let A1312 = m[1][1] * m[2][3] - m[1][3] * m[2][1];
        let A1212 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let A0313 = m[1][0] * m[3][3] - m[1][3] * m[3][0];
        let A0213 = m[1][0] * m[3][2] - m[1][2] * m[3][0];
        let A0312 = m[1][0] * m[2][3] - m[1][3] * m[2][0];
        let A0212 = m[1][0] * m[2][2] - m[1][2] * m[2][0];
        let A0113 = m[1][0] * m[3][1] - m[1][1] * m[3][0];
        let A0112 = m[1][0] * m[2][1] - m[1][1] * m[2][0];

        let mut result = *m;
        result[0][0] = m[1][1] * A2323 - m[1][2] * A1323 + m[1][3] * A1223;
        result[0][1] = -(m[0][1] * A2323 - m[0][2] * A1323 + m[0][3] * A1223);
        result[0][2] = m[0][1] * A2313 - m[0][2] * A1313 + m[0][3] * A1213;
        result[0][3] = -(m[0][1] * A2312 - m[0][2] * A1312 + m[0][3] * A1212);
        result[1][0] = -(m[1][0] * A2323 - m[1][2] * A0323 + m[1][3] * A0223);
        result[1][1] = m[0][0] * A2323 - m[0][2] * A0323 + m[0][3] * A0223;
        result[1][2] = -(m[0][0] * A2313 - m[0][2] * A0313 + m[0][3] * A0213);
        result[1][3] = m[0][0] * A2312 - m[0][2] * A0312 + m[0][3] * A0212;
        result[2][0] = m[1][0] * A1323 - m[1][1] * A0323 + m[1][3] * A0123;
        result[2][1] = -(m[0][0] * A1323 - m[0][1] * A0323 + m[0][3] * A0123);
        result[2][2] = m[0][0] * A1313 - m[0][1] * A0313 + m[0][3] * A0113;
        result[2][3] = -(m[0][0] * A1312 - m[0][1] * A0312 + m[0][3] * A0112);
        result[3][0] = -(m[1][0] * A1223 - m[1][1] * A0223 + m[1][2] * A0123);
        result[3][1] = m[0][0] * A1223 - m[0][1] * A0223 + m[0][2] * A0123;
        result[3][2] = -(m[0][0] * A1213 - m[0][1] * A0213 + m[0][2] * A0113);
        result[3][3] = m[0][0] * A1212 - m[0][1] * A0212 + m[0][2] * A0112;

        let det = m[0][0] * result[0][0]
            + m[0][1] * result[1][0]
            + m[0][2] * result[2][0]
            + m[0][3] * result[3][0];
        (result, det)
    }
}

/// Inverts a 2x2, 3x3 or 4x4 matrix of floating-point elements.
///
/// The inverse is computed in closed form and is *unchecked*: if `m` is singular, the division by
/// its zero determinant leaves infinite or `NaN` elements. Use [`checked_invert`] when `m` might be
/// singular.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let m = Mat3f::from_diagonal([1.0, 2.0, 4.0]);
/// assert_eq!(invert(&m), Matrix::from_diagonal([1.0, 0.5, 0.25]));
///
/// let m = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
/// assert_approx_eq!(m * invert(&m), Mat2f::IDENTITY);
/// ```
///
/// Integer matrices have no inverse in their own element type:
///
/// ```compile_fail
/// # use fixed_linalg::*;
/// let inv = invert(&Mat2::<i32>::IDENTITY);
/// ```
pub fn invert<M>(m: &M) -> M
where
    M: MatrixN + Mul<<M as Shape>::Scalar, Output = M>,
    M::Dim: Invert<M>,
    M::Scalar: Number + Recip,
{
    <M::Dim as Invert<M>>::invert(m)
}

/// Inverts a 2x2, 3x3 or 4x4 matrix, or returns [`None`] if it is singular.
///
/// The matrix counts as singular when the determinant the inverse would be divided by is exactly
/// zero, so a `Some` result never holds the infinities of a division by zero. A non-zero but tiny
/// determinant still produces a (numerically poor) inverse.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
/// assert_eq!(checked_invert(&singular), None);
/// assert_eq!(checked_invert(&Mat4f::IDENTITY), Some(Mat4f::IDENTITY));
/// ```
pub fn checked_invert<M>(m: &M) -> Option<M>
where
    M: MatrixN + Mul<<M as Shape>::Scalar, Output = M>,
    M::Dim: Invert<M>,
    M::Scalar: Number + Recip,
{
    <M::Dim as Invert<M>>::checked_invert(m)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, determinant, Mat2, Mat2f, Mat3, Mat3f, Mat4, Matrix};

    use super::*;

    #[test]
    fn diagonal() {
        let m = Mat3f::from_diagonal([1.0, 2.0, 4.0]);
        assert_eq!(invert(&m), Matrix::from_diagonal([1.0, 0.5, 0.25]));

        let m = Mat4::from_diagonal([2.0, -4.0, 0.5, 1.0]);
        assert_eq!(invert(&m), Matrix::from_diagonal([0.5, -0.25, 2.0, 1.0]));
    }

    #[test]
    fn identity() {
        assert_eq!(invert(&Mat2f::IDENTITY), Mat2f::IDENTITY);
        assert_eq!(invert(&Mat3f::IDENTITY), Mat3f::IDENTITY);
        assert_eq!(invert(&Mat4::<f64>::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn round_trip() {
        let m2 = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_approx_eq!(m2 * invert(&m2), Mat2::IDENTITY);
        assert_approx_eq!(invert(&m2) * m2, Mat2::IDENTITY);
        assert_approx_eq!(invert(&m2), Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]));

        let m3 = Mat3::from_rows([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        assert_approx_eq!(m3 * invert(&m3), Mat3::IDENTITY);
        assert_approx_eq!(
            invert(&m3),
            Matrix::from_rows([[0.75, 0.5, 0.25], [0.5, 1.0, 0.5], [0.25, 0.5, 0.75]])
        );

        let m4 = Mat4::from_rows([
            [4.0, 1.0, 0.0, 2.0],
            [1.0, 5.0, 1.0, 0.0],
            [0.0, 2.0, 6.0, 1.0],
            [1.0, 0.0, 1.0, 3.0],
        ]);
        assert_approx_eq!(m4 * invert(&m4), Mat4::IDENTITY);
        assert_approx_eq!(invert(&invert(&m4)), m4);
    }

    #[test]
    fn determinant_of_inverse() {
        let m4 = Mat4::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        assert_approx_eq!(determinant(&invert(&m4)), 1.0 / 30.0);
    }

    #[test]
    fn singular() {
        let m = Mat3f::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 5.0]]);
        let inv = invert(&m);
        assert!(inv.rows().iter().any(|row| row.as_slice().iter().any(|e| !e.is_finite())));
        assert_eq!(checked_invert(&m), None);
        assert_eq!(checked_invert(&Mat2f::ZERO), None);
        assert_eq!(checked_invert(&Mat4::<f64>::ZERO), None);
    }

    #[test]
    fn checked() {
        let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(checked_invert(&m), Some(invert(&m)));
    }

    #[test]
    fn adjugate_and_determinant() {
        let m = Mat4::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        let (adj, det) = <Dim<4> as Invert<_>>::adjugate(&m);
        assert_eq!(det, 30.0);
        assert_eq!(m * adj, Mat4::from_diagonal([30.0; 4]));

        let (adj, det) = <Dim<2> as Invert<_>>::adjugate(&Mat2::from_rows([[1, 2], [3, 4]]));
        assert_eq!(det, -2);
        assert_eq!(adj, Mat2::from_rows([[4, -2], [-3, 1]]));
    }

    #[test]
    fn checked_uses_the_divided_determinant() {
        // Rows 2 and 3 sum to row 1 only up to rounding.
        let m = Mat4::from_rows([
            [0.1, 0.7, -0.3, 0.9],
            [0.3, 2.1, -0.9, 2.7],
            [0.2, 1.4, -0.6, 1.8],
            [0.5, -1.1, 3.3, 0.7],
        ]);
        let (_, det) = <Dim<4> as Invert<_>>::adjugate(&m);
        match checked_invert(&m) {
            Some(inv) => {
                assert_ne!(det, 0.0);
                assert!(!has_non_finite(&inv), "{inv:?}");
            }
            None => assert_eq!(det, 0.0),
        }
    }

    fn has_non_finite(m: &Mat4<f64>) -> bool {
        m.rows().iter().any(|row| row.as_slice().iter().any(|e| !e.is_finite()))
    }
}
