use bidiag::{
    bidiagonalize, bidiagonalize_explicit, givens_qr, householder_qr, DimensionError, Matrix,
    Vector,
};

const TOL: f64 = 1e-10;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

/// Deterministic pseudo-random matrix with entries in [-1, 1].
fn random_matrix(nrows: usize, ncols: usize, seed: u64) -> Matrix<f64> {
    let mut state = seed;
    let mut data = Vec::with_capacity(nrows * ncols);
    for _ in 0..nrows * ncols {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        data.push(((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0);
    }
    Matrix::from_vec(nrows, ncols, data)
}

fn assert_identity(m: &Matrix<f64>, tol: f64, msg: &str) {
    assert!(m.is_square());
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_near(m[(i, j)], expected, tol, &format!("{}[({},{})]", msg, i, j));
        }
    }
}

fn check_factorization(a: &Matrix<f64>) {
    let m = a.nrows();
    let n = a.ncols();
    let f = bidiagonalize(a).unwrap();

    // Reconstruction: U · B · Vt == A, scaled by the input's magnitude
    let tol = TOL * (1.0 + a.norm_fro());
    let r = f.reconstruct();
    for i in 0..m {
        for j in 0..n {
            assert_near(r[(i, j)], a[(i, j)], tol, &format!("recon ({},{})", i, j));
        }
    }

    // Orthogonality
    assert_identity(&(&f.u().transpose() * f.u()), tol, "UᵗU");
    assert_identity(&(f.vt() * &f.vt().transpose()), tol, "Vt·Vtᵗ");

    // Bidiagonal shape
    assert!(f.b().is_bidiagonal(tol), "B not bidiagonal");
}

#[test]
fn factorization_properties_small() {
    check_factorization(&Matrix::from_rows(
        4,
        3,
        &[
            4.0, 1.0, -2.0, //
            1.0, 2.0, 0.0, //
            -2.0, 0.0, 3.0, //
            2.0, 1.0, -2.0,
        ],
    ));
}

#[test]
fn factorization_properties_random() {
    for &(m, n, seed) in &[(5, 5, 1), (8, 5, 2), (12, 7, 3), (20, 20, 4), (30, 6, 5)] {
        check_factorization(&random_matrix(m, n, seed));
    }
}

#[test]
fn factorization_properties_scaled() {
    // Large and tiny magnitudes exercise the scaled tolerance
    let big = random_matrix(6, 4, 7).map(|x| x * 1e6);
    check_factorization(&big);
    let small = random_matrix(6, 4, 8).map(|x| x * 1e-6);
    check_factorization(&small);
}

#[test]
fn factorization_with_zero_columns() {
    let mut a = random_matrix(6, 4, 11);
    for i in 0..6 {
        a[(i, 2)] = 0.0;
    }
    check_factorization(&a);
}

#[test]
fn first_column_norm_survives_into_b() {
    // V's first column is e₁ (the first right reflector starts one column
    // in), so B·e₁ = Uᵗ·A·e₁ and |B[0,0]| is the norm of A's first column.
    let a = random_matrix(7, 4, 13);
    let col_norm = Vector::from_vec(a.col_to_vec(0, 0)).norm();
    let f = bidiagonalize(&a).unwrap();
    assert_near(f.b()[(0, 0)].abs(), col_norm, TOL, "|B[0,0]| vs ‖A·e₁‖");
}

#[test]
fn variants_agree_on_b() {
    for &(m, n, seed) in &[(4, 3, 21), (7, 7, 22), (10, 4, 23)] {
        let a = random_matrix(m, n, seed);
        let fast = bidiagonalize(&a).unwrap();
        let slow = bidiagonalize_explicit(&a).unwrap();

        // B compares directly; U/Vt only via reconstruction because each
        // reflection's sign is ambiguous.
        let tol = TOL * (1.0 + a.max_abs());
        for i in 0..m {
            for j in 0..n {
                assert_near(
                    fast.b()[(i, j)],
                    slow.b()[(i, j)],
                    tol,
                    &format!("B ({},{})", i, j),
                );
            }
        }

        let r = slow.reconstruct();
        for i in 0..m {
            for j in 0..n {
                assert_near(r[(i, j)], a[(i, j)], TOL, "explicit recon");
            }
        }
    }
}

#[test]
fn explicit_variant_satisfies_properties() {
    let a = random_matrix(6, 4, 31);
    let f = bidiagonalize_explicit(&a).unwrap();
    assert_identity(&(&f.u().transpose() * f.u()), TOL, "UᵗU");
    assert_identity(&(f.vt() * &f.vt().transpose()), TOL, "Vt·Vtᵗ");
    assert!(f.b().is_bidiagonal(TOL));
}

#[test]
fn wide_input_fails_without_mutation() {
    let a = random_matrix(3, 5, 41);
    let before = a.clone();
    assert_eq!(
        bidiagonalize(&a).unwrap_err(),
        DimensionError { nrows: 3, ncols: 5 }
    );
    assert_eq!(
        bidiagonalize_explicit(&a).unwrap_err(),
        DimensionError { nrows: 3, ncols: 5 }
    );
    assert_eq!(a, before);
}

#[test]
fn dimension_error_message() {
    let err = DimensionError { nrows: 3, ncols: 5 };
    assert_eq!(
        format!("{}", err),
        "matrix must have at least as many rows as columns, got 3x5"
    );
}

#[test]
fn factorization_in_f32() {
    // f32 tolerance: machine epsilon is ~1.2e-7
    let tol = 1e-4_f32;
    let a = Matrix::from_rows(
        4,
        3,
        &[
            4.0_f32, 1.0, -2.0, //
            1.0, 2.0, 0.0, //
            -2.0, 0.0, 3.0, //
            2.0, 1.0, -2.0,
        ],
    );
    let f = bidiagonalize(&a).unwrap();
    assert!(f.b().is_bidiagonal(tol));

    let r = f.reconstruct();
    for i in 0..4 {
        for j in 0..3 {
            assert!(
                (r[(i, j)] - a[(i, j)]).abs() < tol,
                "f32 recon ({},{}): {} vs {}",
                i,
                j,
                r[(i, j)],
                a[(i, j)],
            );
        }
    }

    let utu = &f.u().transpose() * f.u();
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0_f32 } else { 0.0 };
            assert!((utu[(i, j)] - expected).abs() < tol, "f32 UᵗU");
        }
    }
}

#[test]
fn qr_on_random_matrices() {
    for &(m, n, seed) in &[(5, 3, 51), (6, 6, 52)] {
        let a = random_matrix(m, n, seed);
        let qr = householder_qr(&a).unwrap();

        for j in 0..n {
            for i in (j + 1)..m {
                assert_near(qr.r()[(i, j)], 0.0, TOL, "R lower triangle");
            }
        }
        assert_identity(&(&qr.q().transpose() * qr.q()), TOL, "QᵗQ");

        let p = qr.q() * qr.r();
        for i in 0..m {
            for j in 0..n {
                assert_near(p[(i, j)], a[(i, j)], TOL, "Q·R");
            }
        }
    }
}

#[test]
fn givens_qr_on_random_matrices() {
    for &(m, n, seed) in &[(5, 3, 61), (4, 6, 62)] {
        let a = random_matrix(m, n, seed);
        let qr = givens_qr(&a);

        for j in 0..n {
            for i in (j + 1)..m {
                assert_near(qr.r()[(i, j)], 0.0, TOL, "R below diagonal");
            }
        }
        assert_identity(&(&qr.q().transpose() * qr.q()), TOL, "QᵗQ");

        let p = qr.q() * qr.r();
        for i in 0..m {
            for j in 0..n {
                assert_near(p[(i, j)], a[(i, j)], TOL, "Givens Q·R");
            }
        }
    }
}
