//! Cross-checks the closed-form formulas against `nalgebra`, on random well-conditioned input.

use ::approx::assert_relative_eq;
use fixed_linalg::*;
use rayon::prelude::*;

const SEED: u64 = 0x7a3f_19c4_d2e8_5b01;
const ROUNDS: usize = 200;

/// A random, strictly diagonally dominant (and therefore invertible) matrix.
fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N> {
    Matrix::from_fn(|row, col| {
        let off = rng.f64() * 2.0 - 1.0;
        if row == col {
            off + N as f64 + 1.0
        } else {
            off
        }
    })
}

fn random_vector<const N: usize>(rng: &mut fastrand::Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rng.f64() * 20.0 - 10.0)
}

fn all_finite<const N: usize>(m: &Matrix<f64, N>) -> bool {
    m.rows().iter().all(|row| row.as_slice().iter().all(|e| e.is_finite()))
}

fn to_nalgebra2(m: &Mat2<f64>) -> nalgebra::Matrix2<f64> {
    nalgebra::Matrix2::new(m[0][0], m[0][1], m[1][0], m[1][1])
}

fn to_nalgebra3(m: &Mat3<f64>) -> nalgebra::Matrix3<f64> {
    nalgebra::Matrix3::from_fn(|row, col| m[row][col])
}

#[rustfmt::skip]
fn to_nalgebra4(m: &Mat4<f64>) -> nalgebra::Matrix4<f64> {
    nalgebra::Matrix4::new(
        m[0][0], m[0][1], m[0][2], m[0][3],
        m[1][0], m[1][1], m[1][2], m[1][3],
        m[2][0], m[2][1], m[2][2], m[2][3],
        m[3][0], m[3][1], m[3][2], m[3][3],
    )
}

#[test]
fn determinant_matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..ROUNDS {
        let m2 = random_matrix::<2>(&mut rng);
        let m3 = random_matrix::<3>(&mut rng);
        let m4 = random_matrix::<4>(&mut rng);
        assert_relative_eq!(determinant(&m2), to_nalgebra2(&m2).determinant(), max_relative = 1e-12);
        assert_relative_eq!(determinant(&m3), to_nalgebra3(&m3).determinant(), max_relative = 1e-12);
        assert_relative_eq!(determinant(&m4), to_nalgebra4(&m4).determinant(), max_relative = 1e-12);
    }
}

#[test]
fn inverse_matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 1);
    for _ in 0..ROUNDS {
        let m = random_matrix::<4>(&mut rng);
        let expected = to_nalgebra4(&m).try_inverse().unwrap();
        let inv = invert(&m);
        for row in 0..4 {
            for col in 0..4 {
                assert_relative_eq!(inv[row][col], expected[(row, col)], epsilon = 1e-12);
            }
        }

        let m = random_matrix::<3>(&mut rng);
        let expected = to_nalgebra3(&m).try_inverse().unwrap();
        let inv = invert(&m);
        for row in 0..3 {
            for col in 0..3 {
                assert_relative_eq!(inv[row][col], expected[(row, col)], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn inverse_round_trip() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 2);
    for _ in 0..ROUNDS {
        let m2 = random_matrix::<2>(&mut rng);
        let m3 = random_matrix::<3>(&mut rng);
        let m4 = random_matrix::<4>(&mut rng);
        assert!(equal(&(m2 * invert(&m2)), &Mat2::IDENTITY));
        assert!(equal(&(m3 * invert(&m3)), &Mat3::IDENTITY));
        assert!(equal(&(m4 * invert(&m4)), &Mat4::IDENTITY));
        assert!(equal(&(invert(&m4) * m4), &Mat4::IDENTITY));
        assert_eq!(checked_invert(&m4), Some(invert(&m4)));
    }
}

#[test]
fn transpose_properties() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 3);
    for _ in 0..ROUNDS {
        let m3 = random_matrix::<3>(&mut rng);
        let m4 = random_matrix::<4>(&mut rng);
        assert_eq!(transpose(&transpose(&m4)), m4);
        assert_relative_eq!(determinant(&transpose(&m3)), determinant(&m3), max_relative = 1e-12);
        assert_relative_eq!(determinant(&transpose(&m4)), determinant(&m4), max_relative = 1e-12);
        assert!(equal(&invert(&transpose(&m4)), &transpose(&invert(&m4))));
    }
}

#[test]
fn vector_properties() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 4);
    for _ in 0..ROUNDS {
        let (u2, v2) = (random_vector::<2>(&mut rng), random_vector::<2>(&mut rng));
        let (u3, v3) = (random_vector::<3>(&mut rng), random_vector::<3>(&mut rng));

        assert_eq!(dot(&u3, &v3), dot(&v3, &u3));
        assert_eq!(dot(&u2, &perp(&u2)), 0.0);
        assert_relative_eq!(normalize(&u3).length(), 1.0, epsilon = 1e-12);

        let w = cross(&u3, &v3);
        assert_relative_eq!(dot(&w, &u3), 0.0, epsilon = 1e-9);
        assert_relative_eq!(dot(&w, &v3), 0.0, epsilon = 1e-9);
        assert_eq!(cross(&v3, &u3), -w);

        let (nu, nv) = (
            nalgebra::Vector3::new(u3.x, u3.y, u3.z),
            nalgebra::Vector3::new(v3.x, v3.y, v3.z),
        );
        let expected = nu.cross(&nv);
        assert_relative_eq!(w.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(w.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(w.z, expected.z, epsilon = 1e-12);
    }
}

#[test]
fn singular_matrices() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 5);
    for zero_row in 0..4 {
        let mut m = random_matrix::<4>(&mut rng);
        m[zero_row] = Vector::ZERO;

        assert_eq!(determinant(&m), 0.0);
        assert_eq!(checked_invert(&m), None);

        assert!(!all_finite(&invert(&m)));
    }

    let mut m = random_matrix::<3>(&mut rng);
    m[1] = Vector::ZERO;
    assert_eq!(checked_invert(&m), None);
    assert!(has_nan(&invert(&m)));
}

/// Matrices built from a handful of coarse values, so that many of them are singular or sit right
/// at the edge of being singular.
#[test]
fn checked_inverse_is_finite() {
    const SCALES: [f64; 5] = [0.1, 0.3, 0.7, 1.1, 3.3];
    let mut rng = fastrand::Rng::with_seed(SEED ^ 6);
    let mut singular = 0;
    for _ in 0..20_000 {
        let m = Mat4::from_fn(|_, _| rng.i32(-3..=3) as f64 * SCALES[rng.usize(..SCALES.len())]);
        match checked_invert(&m) {
            Some(inv) => assert!(all_finite(&inv), "{m:?} -> {inv:?}"),
            None => {
                singular += 1;
                assert!(!all_finite(&invert(&m)), "{m:?}");
            }
        }
    }
    assert!(singular > 0);
}

#[test]
fn parallel_use() {
    let failures = (0..1024u64)
        .into_par_iter()
        .filter(|&seed| {
            let mut rng = fastrand::Rng::with_seed(seed);
            let m = random_matrix::<4>(&mut rng);
            let inv = invert(&m);
            has_nan(&inv) || !equal(&(m * inv), &Mat4::IDENTITY)
        })
        .count();
    assert_eq!(failures, 0);
}
