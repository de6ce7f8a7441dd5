use alloc::vec::Vec;

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Return the transpose.
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = m.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(2, 0)], 3.0);
    /// assert_eq!(t[(0, 1)], 4.0);
    /// ```
    pub fn transpose(&self) -> Self {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect::<Vec<U>>(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Norms and shape predicates ──────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]);
    /// assert!((m.norm_fro() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm_fro(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Largest absolute element.
    pub fn max_abs(&self) -> T {
        let mut max = T::zero();
        for &x in &self.data {
            if x.abs() > max {
                max = x.abs();
            }
        }
        max
    }

    /// Whether every entry off the main diagonal and first superdiagonal
    /// has absolute value at most `tol`.
    ///
    /// ```
    /// use bidiag::Matrix;
    /// let b = Matrix::from_rows(3, 3, &[
    ///     1.0_f64, 2.0, 0.0,
    ///     0.0, 3.0, 4.0,
    ///     0.0, 0.0, 5.0,
    /// ]);
    /// assert!(b.is_bidiagonal(1e-12));
    ///
    /// let full = Matrix::fill(3, 3, 1.0_f64);
    /// assert!(!full.is_bidiagonal(1e-12));
    /// ```
    pub fn is_bidiagonal(&self, tol: T) -> bool {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if j == i || j == i + 1 {
                    continue;
                }
                if self[(i, j)].abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
