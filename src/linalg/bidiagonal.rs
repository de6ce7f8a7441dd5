use crate::linalg::householder::{apply_left, apply_right, make_householder};
use crate::linalg::DimensionError;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Result of a Householder bidiagonalization: `A = U · B · Vt`.
///
/// `U` (m×m) and `Vt` (n×n) are orthogonal, `B` (m×n) is upper bidiagonal.
/// `Vt` is already transposed; the right factor V of the textbook
/// factorization is `Vt`ᵗ.
#[derive(Debug, Clone, PartialEq)]
pub struct Bidiagonal<T> {
    u: Matrix<T>,
    b: Matrix<T>,
    vt: Matrix<T>,
}

impl<T: FloatScalar> Bidiagonal<T> {
    /// Left orthogonal factor U (m×m).
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Upper bidiagonal factor B (m×n).
    #[inline]
    pub fn b(&self) -> &Matrix<T> {
        &self.b
    }

    /// Transposed right orthogonal factor Vᵗ (n×n).
    #[inline]
    pub fn vt(&self) -> &Matrix<T> {
        &self.vt
    }

    /// Consume the factorization, yielding `(U, B, Vt)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>, Matrix<T>) {
        (self.u, self.b, self.vt)
    }

    /// Multiply the factors back together: `U · B · Vt`.
    ///
    /// Equals the original matrix to within a small multiple of machine
    /// epsilon times its norm.
    pub fn reconstruct(&self) -> Matrix<T> {
        &(&self.u * &self.b) * &self.vt
    }
}

/// Reduce a tall-or-square matrix to upper bidiagonal form via Householder
/// reflections: `A = U · B · Vt`.
///
/// Walks the columns left to right, alternating sides: at column `k` a left
/// reflection zeroes `A[k+1.., k]`, then (except on the last column) a right
/// reflection zeroes `A[k, k+2..]`. Reflections are applied with the
/// in-place rank-1 applicators, O(m·n²) overall; only a shrinking trailing
/// submatrix is touched at each step while the accumulators keep their full
/// size.
///
/// Requires `nrows >= ncols`; a wide matrix yields [`DimensionError`] before
/// any work is done. Columns or rows that are already zeroed are handled by
/// the builder's `beta = 0` branch and cost nothing.
///
/// ```
/// use bidiag::{bidiagonalize, Matrix};
///
/// let a = Matrix::from_rows(3, 2, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let f = bidiagonalize(&a).unwrap();
///
/// assert!(f.b().is_bidiagonal(1e-12));
/// let r = f.reconstruct();
/// for i in 0..3 {
///     for j in 0..2 {
///         assert!((r[(i, j)] - a[(i, j)]).abs() < 1e-12);
///     }
/// }
/// ```
pub fn bidiagonalize<T: FloatScalar>(a: &Matrix<T>) -> Result<Bidiagonal<T>, DimensionError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(DimensionError { nrows: m, ncols: n });
    }

    let mut b = a.clone();
    let mut u = Matrix::eye(m, T::zero());
    let mut vt = Matrix::eye(n, T::zero());

    for col in 0..n {
        // Zero the column below the diagonal.
        let h = make_householder(&b.col_to_vec(col, col));
        apply_left(&mut b, col, col, &h, &mut u);

        // Zero the row right of the superdiagonal; the last column has no
        // entries there.
        if col + 2 <= n {
            let h = make_householder(b.row_as_slice(col, col + 1));
            apply_right(&mut b, col, col + 1, &h, &mut vt);
        }
    }

    Ok(Bidiagonal { u, b, vt })
}

/// Reduce to bidiagonal form by materializing every reflector.
///
/// Same factorization as [`bidiagonalize`], but each step embeds the
/// reflector in a full-size identity and multiplies it into B and the
/// accumulator. Asymptotically worse (a full matrix product per step); kept
/// as the reference realization the fast path is cross-checked against.
///
/// Produces the same B as [`bidiagonalize`] up to floating-point rounding;
/// U and Vt may differ in the signs of individual reflections.
pub fn bidiagonalize_explicit<T: FloatScalar>(
    a: &Matrix<T>,
) -> Result<Bidiagonal<T>, DimensionError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(DimensionError { nrows: m, ncols: n });
    }

    let mut b = a.clone();
    let mut u = Matrix::eye(m, T::zero());
    let mut vt = Matrix::eye(n, T::zero());

    for col in 0..n {
        // Householder matrices are symmetric, so H folds into either side
        // without a transpose.
        let h = make_householder(&b.col_to_vec(col, col)).embed(m);
        b = &h * &b;
        u = &u * &h;

        if col + 2 <= n {
            let h = make_householder(b.row_as_slice(col, col + 1)).embed(n);
            b = &b * &h;
            vt = &h * &vt;
        }
    }

    Ok(Bidiagonal { u, b, vt })
}

impl<T: FloatScalar> Matrix<T> {
    /// Householder bidiagonalization, `self = U · B · Vt`.
    ///
    /// Convenience for [`bidiagonalize`].
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let a = Matrix::from_fn(4, 3, |i, j| ((i + 2) * (j + 1)) as f64);
    /// let f = a.bidiagonalize().unwrap();
    /// assert!(f.b().is_bidiagonal(1e-10));
    /// ```
    pub fn bidiagonalize(&self) -> Result<Bidiagonal<T>, DimensionError> {
        bidiagonalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, msg: &str) {
        assert!(
            (a - b).abs() < TOL,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    fn mat4x3() -> Matrix<f64> {
        Matrix::from_rows(
            4,
            3,
            &[
                4.0, 1.0, -2.0, //
                1.0, 2.0, 0.0, //
                -2.0, 0.0, 3.0, //
                2.0, 1.0, -2.0,
            ],
        )
    }

    #[test]
    fn reconstruction_4x3() {
        let a = mat4x3();
        let f = bidiagonalize(&a).unwrap();
        let r = f.reconstruct();
        for i in 0..4 {
            for j in 0..3 {
                assert_near(r[(i, j)], a[(i, j)], &format!("A[({},{})]", i, j));
            }
        }
    }

    #[test]
    fn b_is_bidiagonal() {
        let f = bidiagonalize(&mat4x3()).unwrap();
        assert!(f.b().is_bidiagonal(TOL));
    }

    #[test]
    fn u_and_vt_are_orthogonal() {
        let f = bidiagonalize(&mat4x3()).unwrap();

        let utu = &f.u().transpose() * f.u();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(utu[(i, j)], expected, &format!("UᵗU[({},{})]", i, j));
            }
        }

        let vvt = f.vt() * &f.vt().transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(vvt[(i, j)], expected, &format!("Vt·Vtᵗ[({},{})]", i, j));
            }
        }
    }

    #[test]
    fn square_matrix() {
        let a = Matrix::from_rows(3, 3, &[2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0]);
        let f = bidiagonalize(&a).unwrap();
        assert!(f.b().is_bidiagonal(TOL));
        let r = f.reconstruct();
        for i in 0..3 {
            for j in 0..3 {
                assert_near(r[(i, j)], a[(i, j)], "square recon");
            }
        }
    }

    #[test]
    fn one_by_one() {
        let a = Matrix::from_rows(1, 1, &[-3.0]);
        let f = bidiagonalize(&a).unwrap();
        assert_near(f.b()[(0, 0)], -3.0, "b00");
        assert_near(f.u()[(0, 0)], 1.0, "u00");
        assert_near(f.vt()[(0, 0)], 1.0, "vt00");
    }

    #[test]
    fn single_column() {
        let a: Matrix<f64> = Matrix::from_rows(3, 1, &[3.0, 0.0, 4.0]);
        let f = bidiagonalize(&a).unwrap();
        assert_near(f.b()[(0, 0)].abs(), 5.0, "|b00|");
        assert_near(f.b()[(1, 0)], 0.0, "b10");
        assert_near(f.b()[(2, 0)], 0.0, "b20");
        let r = f.reconstruct();
        for i in 0..3 {
            assert_near(r[(i, 0)], a[(i, 0)], "recon");
        }
    }

    #[test]
    fn wide_matrix_is_rejected_unmutated() {
        let a = Matrix::from_fn(3, 5, |i, j| (i + j) as f64);
        let before = a.clone();
        let err = bidiagonalize(&a).unwrap_err();
        assert_eq!(err, DimensionError { nrows: 3, ncols: 5 });
        assert_eq!(a, before);

        assert_eq!(bidiagonalize_explicit(&a).unwrap_err(), err);
    }

    #[test]
    fn already_bidiagonal_input_is_fixed_point() {
        let a = Matrix::from_rows(3, 3, &[1.0, 2.0, 0.0, 0.0, 3.0, 4.0, 0.0, 0.0, 5.0]);
        let f = bidiagonalize(&a).unwrap();
        // Every reflector takes the beta = 0 branch, so B == A exactly
        assert_eq!(*f.b(), a);
        assert_eq!(*f.u(), Matrix::eye(3, 0.0_f64));
        assert_eq!(*f.vt(), Matrix::eye(3, 0.0_f64));
    }

    #[test]
    fn explicit_variant_matches_in_place_on_b() {
        let a = mat4x3();
        let fast = bidiagonalize(&a).unwrap();
        let slow = bidiagonalize_explicit(&a).unwrap();

        // B must agree directly; U/Vt only through reconstruction, since
        // each reflection's sign is ambiguous.
        for i in 0..4 {
            for j in 0..3 {
                assert_near(fast.b()[(i, j)], slow.b()[(i, j)], "B agreement");
            }
        }

        let r = slow.reconstruct();
        for i in 0..4 {
            for j in 0..3 {
                assert_near(r[(i, j)], a[(i, j)], "explicit recon");
            }
        }
    }

    #[test]
    fn explicit_variant_factors_are_orthogonal() {
        let f = bidiagonalize_explicit(&mat4x3()).unwrap();
        let utu = &f.u().transpose() * f.u();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(utu[(i, j)], expected, "UᵗU");
            }
        }
    }

    #[test]
    fn into_parts_returns_factors() {
        let f = bidiagonalize(&mat4x3()).unwrap();
        let recon = f.reconstruct();
        let (u, b, vt) = f.into_parts();
        let again = &(&u * &b) * &vt;
        assert_eq!(recon, again);
    }
}
