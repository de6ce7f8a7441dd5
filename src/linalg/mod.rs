pub(crate) mod bidiagonal;
pub(crate) mod householder;
pub(crate) mod qr;

pub use bidiagonal::{bidiagonalize, bidiagonalize_explicit, Bidiagonal};
pub use householder::{apply_left, apply_right, make_householder, Reflector};
pub use qr::{givens_qr, householder_qr, QrDecomposition};

/// Shape error for factorizations that require a tall-or-square input.
///
/// Returned by [`bidiagonalize`], [`bidiagonalize_explicit`], and
/// [`householder_qr`] when the matrix has more columns than rows. Raised
/// before any work begins; the input is never mutated on failure.
///
/// ```
/// use bidiag::{bidiagonalize, DimensionError, Matrix};
///
/// let wide = Matrix::zeros(3, 5, 0.0_f64);
/// let err = bidiagonalize(&wide).unwrap_err();
/// assert_eq!(err, DimensionError { nrows: 3, ncols: 5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionError {
    /// Rows of the offending matrix.
    pub nrows: usize,
    /// Columns of the offending matrix.
    pub ncols: usize,
}

impl core::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "matrix must have at least as many rows as columns, got {}x{}",
            self.nrows, self.ncols
        )
    }
}
