use crate::matrix::{Matrix, Vector};
use crate::traits::{FloatScalar, MatrixMut};

/// Householder reflector in normalized form: `H = I - beta * v * vᵗ` with
/// `v[0] = 1` by construction.
///
/// H is orthogonal and symmetric, and maps the vector it was built from onto
/// a multiple of the first basis vector. A degenerate input (tail already
/// numerically zero) yields `beta = 0`, making H the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflector<T> {
    /// Normalized Householder vector, `v[0] = 1`.
    pub v: Vector<T>,
    /// Scale factor of the rank-1 update.
    pub beta: T,
}

impl<T: FloatScalar> Reflector<T> {
    /// Dimension of the reflector (length of `v`).
    #[inline]
    pub fn dim(&self) -> usize {
        self.v.len()
    }

    /// Materialize `I - beta·v·vᵗ` embedded in the bottom-right corner of a
    /// `dim x dim` identity.
    ///
    /// Used by the explicit-embedding driver and by cross-checking tests.
    /// O(dim²) to build and O(dim³) to multiply with, so the in-place
    /// applicators never call it.
    ///
    /// Panics if `dim` is smaller than the reflector.
    ///
    /// ```
    /// use bidiag::make_householder;
    ///
    /// let h = make_householder(&[3.0_f64, 4.0]);
    /// let full = h.embed(4);
    /// // Leading 2x2 corner is untouched identity
    /// assert_eq!(full[(0, 0)], 1.0);
    /// assert_eq!(full[(0, 1)], 0.0);
    /// assert_eq!(full[(1, 1)], 1.0);
    /// ```
    pub fn embed(&self, dim: usize) -> Matrix<T> {
        let k = self.v.len();
        assert!(
            k <= dim,
            "cannot embed a {}-dim reflector in a {}x{} identity",
            k,
            dim,
            dim,
        );
        let off = dim - k;
        let block = Matrix::from_fn(k, k, |i, j| {
            let delta = if i == j { T::one() } else { T::zero() };
            delta - self.beta * self.v[i] * self.v[j]
        });
        let mut h = Matrix::eye(dim, T::zero());
        h.set_block(off, off, &block);
        h
    }
}

/// Build the Householder reflector that zeroes all but the first entry of `x`.
///
/// Returns `(v, beta)` packed in a [`Reflector`] such that
/// `(I - beta·v·vᵗ)·x = ±‖x‖·e₁`, with `v[0] = 1`.
///
/// If the squared norm of `x[1..]` is below machine epsilon the vector is
/// already aligned with `e₁` (or has length 1) and `beta = 0` is returned;
/// the reflector then acts as the identity. Degenerate input is a normal
/// case, not an error.
///
/// When `x[0] > 0`, the leading entry of the unnormalized vector is computed
/// as `-tail_sq / (x[0] + norm)` (Parlett's formula) instead of
/// `x[0] - norm`, avoiding cancellation between two nearly equal positive
/// values.
///
/// Panics if `x` is empty.
///
/// ```
/// use bidiag::make_householder;
///
/// let h = make_householder(&[3.0_f64, 4.0]);
/// assert_eq!(h.v[0], 1.0);
///
/// // H * [3, 4]ᵗ = [5, 0]ᵗ
/// let dot = h.v[0] * 3.0 + h.v[1] * 4.0;
/// let r0 = 3.0 - h.beta * h.v[0] * dot;
/// let r1 = 4.0 - h.beta * h.v[1] * dot;
/// assert!((r0 - 5.0).abs() < 1e-12);
/// assert!(r1.abs() < 1e-12);
/// ```
pub fn make_householder<T: FloatScalar>(x: &[T]) -> Reflector<T> {
    assert!(!x.is_empty(), "reflector input must have at least 1 element");

    let mut tail_sq = T::zero();
    for &xi in &x[1..] {
        tail_sq = tail_sq + xi * xi;
    }

    let mut v = Vector::from_slice(x);
    v[0] = T::one();

    if tail_sq < T::epsilon() {
        return Reflector { v, beta: T::zero() };
    }

    let norm = (x[0] * x[0] + tail_sq).sqrt();
    let v0 = if x[0] <= T::zero() {
        x[0] - norm
    } else {
        // Parlett: algebraically x[0] - norm, but stable for x[0] > 0
        -tail_sq / (x[0] + norm)
    };
    let v0_sq = v0 * v0;
    let two = T::one() + T::one();
    let beta = two * v0_sq / (tail_sq + v0_sq);

    for i in 1..x.len() {
        v[i] = x[i] / v0;
    }

    Reflector { v, beta }
}

/// Apply a reflector to `a[row.., col..]` from the left, in place, and fold
/// it into the accumulator `u`.
///
/// The reflector's dimension must equal `a.nrows() - row`. The trailing
/// block becomes `H · a[row.., col..]`, and `u ← u · H_full`, where `H_full`
/// is the identity of `u`'s dimension with H embedded at offset `row`. `u`
/// keeps its full size while the transformed block of `a` shrinks step by
/// step.
///
/// Both updates use the rank-1 identity `H·X = X - beta·v·(vᵗ·X)`; nothing
/// is materialized. O(block rows × cols).
pub fn apply_left<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    row: usize,
    col: usize,
    h: &Reflector<T>,
    u: &mut impl MatrixMut<T>,
) {
    let m = a.nrows();
    let n = a.ncols();
    let v = h.v.as_slice();
    debug_assert_eq!(v.len(), m - row, "reflector dim must match block rows");
    debug_assert_eq!(u.nrows(), m);
    debug_assert_eq!(u.ncols(), m);

    if h.beta.is_zero() {
        return;
    }

    // a[row.., col..] -= beta * v * (vᵗ · a[row.., col..])
    for j in col..n {
        let mut dot = T::zero();
        for i in row..m {
            dot = dot + v[i - row] * *a.get(i, j);
        }
        dot = dot * h.beta;
        for i in row..m {
            *a.get_mut(i, j) = *a.get(i, j) - dot * v[i - row];
        }
    }

    // u ← u · H_full touches only columns row..m
    for r in 0..m {
        let mut dot = T::zero();
        for i in row..m {
            dot = dot + *u.get(r, i) * v[i - row];
        }
        dot = dot * h.beta;
        for i in row..m {
            *u.get_mut(r, i) = *u.get(r, i) - dot * v[i - row];
        }
    }
}

/// Apply a reflector to `a[row.., col..]` from the right, in place, and fold
/// it into the accumulator `vt`.
///
/// The reflector's dimension must equal `a.ncols() - col`. The trailing
/// block becomes `a[row.., col..] · H`, and `vt ← H_full · vt`
/// (left-multiplication, since `vt` accumulates transposed), where `H_full`
/// is the identity of `vt`'s dimension with H embedded at offset `col`.
///
/// Same rank-1 formulation and cost contract as [`apply_left`].
pub fn apply_right<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    row: usize,
    col: usize,
    h: &Reflector<T>,
    vt: &mut impl MatrixMut<T>,
) {
    let m = a.nrows();
    let n = a.ncols();
    let v = h.v.as_slice();
    debug_assert_eq!(v.len(), n - col, "reflector dim must match block cols");
    debug_assert_eq!(vt.nrows(), n);
    debug_assert_eq!(vt.ncols(), n);

    if h.beta.is_zero() {
        return;
    }

    // a[row.., col..] -= beta * (a[row.., col..] · v) * vᵗ
    for i in row..m {
        let mut dot = T::zero();
        for j in col..n {
            dot = dot + *a.get(i, j) * v[j - col];
        }
        dot = dot * h.beta;
        for j in col..n {
            *a.get_mut(i, j) = *a.get(i, j) - dot * v[j - col];
        }
    }

    // vt ← H_full · vt touches only rows col..n
    for c in 0..n {
        let mut dot = T::zero();
        for j in col..n {
            dot = dot + v[j - col] * *vt.get(j, c);
        }
        dot = dot * h.beta;
        for j in col..n {
            *vt.get_mut(j, c) = *vt.get(j, c) - dot * v[j - col];
        }
    }
}
