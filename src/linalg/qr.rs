use crate::linalg::householder::{apply_left, make_householder};
use crate::linalg::DimensionError;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Result of a Householder QR decomposition: `A = Q · R`.
///
/// `Q` (m×m) is orthogonal, `R` (m×n) is upper triangular.
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition<T> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: FloatScalar> QrDecomposition<T> {
    /// Orthogonal factor Q (m×m).
    #[inline]
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// Upper triangular factor R (m×n).
    #[inline]
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Consume the decomposition, yielding `(Q, R)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }
}

/// QR decomposition via Householder reflections, `A = Q · R`.
///
/// One left reflection per column, the column-step half of the
/// bidiagonalization walk. Columns already zero below the diagonal take the
/// builder's `beta = 0` branch and are skipped for free, so rank-deficient
/// input is fine.
///
/// Requires `nrows >= ncols`; a wide matrix yields [`DimensionError`].
///
/// ```
/// use bidiag::{householder_qr, Matrix};
///
/// let a = Matrix::from_rows(3, 2, &[1.0_f64, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// let qr = householder_qr(&a).unwrap();
///
/// // R is upper triangular and Q·R reproduces A
/// assert!(qr.r()[(1, 0)].abs() < 1e-12);
/// assert!(qr.r()[(2, 0)].abs() < 1e-12);
/// assert!(qr.r()[(2, 1)].abs() < 1e-12);
/// let p = qr.q() * qr.r();
/// for i in 0..3 {
///     for j in 0..2 {
///         assert!((p[(i, j)] - a[(i, j)]).abs() < 1e-12);
///     }
/// }
/// ```
pub fn householder_qr<T: FloatScalar>(a: &Matrix<T>) -> Result<QrDecomposition<T>, DimensionError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(DimensionError { nrows: m, ncols: n });
    }

    let mut r = a.clone();
    let mut q = Matrix::eye(m, T::zero());

    for col in 0..n {
        let h = make_householder(&r.col_to_vec(col, col));
        apply_left(&mut r, col, col, &h, &mut q);
    }

    Ok(QrDecomposition { q, r })
}

/// Compute a Givens rotation `(c, s)` that zeroes `b` against `a`.
///
/// Guarded so that `b = 0` yields the identity rotation and neither branch
/// divides by zero; the larger of the two inputs is the divisor.
fn givens<T: FloatScalar>(a: T, b: T) -> (T, T) {
    if b == T::zero() {
        (T::one(), T::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = T::one() / (T::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = T::one() / (T::one() + t * t).sqrt();
        (c, c * t)
    }
}

/// QR factorization via Givens rotations, `A = Q · R`.
///
/// Walks each column bottom-up, rotating one below-diagonal entry to zero
/// per step. Each rotation touches two rows of R and two columns of Q, so
/// the cost matches [`householder_qr`]; the rotation path is preferable
/// when only a few entries need zeroing.
///
/// Unlike [`householder_qr`] there is no shape constraint: a wide matrix
/// comes out upper trapezoidal.
///
/// ```
/// use bidiag::{givens_qr, Matrix};
///
/// let a = Matrix::from_rows(3, 2, &[1.0_f64, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// let qr = givens_qr(&a);
///
/// assert!(qr.r()[(1, 0)].abs() < 1e-12);
/// assert!(qr.r()[(2, 0)].abs() < 1e-12);
/// assert!(qr.r()[(2, 1)].abs() < 1e-12);
/// let p = qr.q() * qr.r();
/// for i in 0..3 {
///     for j in 0..2 {
///         assert!((p[(i, j)] - a[(i, j)]).abs() < 1e-12);
///     }
/// }
/// ```
pub fn givens_qr<T: FloatScalar>(a: &Matrix<T>) -> QrDecomposition<T> {
    let m = a.nrows();
    let n = a.ncols();
    let mut r = a.clone();
    let mut q = Matrix::eye(m, T::zero());

    for i in 0..n {
        for j in ((i + 1)..m).rev() {
            let (c, s) = givens(r[(i, i)], r[(j, i)]);
            if s.is_zero() {
                continue;
            }

            // R ← G·R rotates rows i and j
            for k in (i + 1)..n {
                let t1 = r[(i, k)];
                let t2 = r[(j, k)];
                r[(i, k)] = c * t1 + s * t2;
                r[(j, k)] = c * t2 - s * t1;
            }
            r[(i, i)] = c * r[(i, i)] + s * r[(j, i)];
            r[(j, i)] = T::zero();

            // Q ← Q·Gᵗ rotates columns i and j
            for row in 0..m {
                let t1 = q[(row, i)];
                let t2 = q[(row, j)];
                q[(row, i)] = c * t1 + s * t2;
                q[(row, j)] = c * t2 - s * t1;
            }
        }
    }

    QrDecomposition { q, r }
}

impl<T: FloatScalar> Matrix<T> {
    /// Householder QR decomposition, `self = Q · R`.
    ///
    /// Convenience for [`householder_qr`]; [`givens_qr`] is the
    /// rotation-based alternative.
    pub fn qr(&self) -> Result<QrDecomposition<T>, DimensionError> {
        householder_qr(self)
    }
}
