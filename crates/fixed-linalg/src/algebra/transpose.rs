use crate::capability::MatrixN;

/// Returns the transpose of `m`, mirroring its elements along the main diagonal.
///
/// Works for square matrices of any dimension.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let m = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
///     [7, 8, 9],
/// ]);
/// assert_eq!(transpose(&m), Matrix::from_rows([
///     [1, 4, 7],
///     [2, 5, 8],
///     [3, 6, 9],
/// ]));
/// ```
pub fn transpose<M: MatrixN>(m: &M) -> M {
    let mut result = *m;
    for i in 0..M::DIMENSION {
        for j in i + 1..M::DIMENSION {
            result[i][j] = m[j][i];
            result[j][i] = m[i][j];
        }
    }
    result
}
