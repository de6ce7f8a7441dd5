//! # bidiag
//!
//! Householder bidiagonalization of dense real matrices, no-std compatible.
//! Factors a tall-or-square matrix A (m ≥ n) as `A = U · B · Vᵗ`, where U and
//! Vᵗ are orthogonal and B is upper bidiagonal (nonzero only on the main
//! diagonal and the first superdiagonal).
//!
//! ## Quick start
//!
//! ```
//! use bidiag::{bidiagonalize, Matrix};
//!
//! let a = Matrix::from_rows(4, 3, &[
//!     4.0_f64, 1.0, -2.0,
//!     1.0, 2.0, 0.0,
//!     -2.0, 0.0, 3.0,
//!     2.0, 1.0, -2.0,
//! ]);
//!
//! let f = bidiagonalize(&a).unwrap();
//! assert!(f.b().is_bidiagonal(1e-12));
//!
//! // U * B * Vt reproduces A
//! let r = f.reconstruct();
//! for i in 0..4 {
//!     for j in 0..3 {
//!         assert!((r[(i, j)] - a[(i, j)]).abs() < 1e-12);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions.
//!   `Vec<T>` row-major storage. Includes arithmetic, indexing, block
//!   operations, and iteration. [`Vector<T>`] is a 1-D companion with dot
//!   product and Euclidean norm.
//!
//! - [`linalg`] — The Householder machinery: [`make_householder`] builds a
//!   reflector with the cancellation-safe Parlett formula,
//!   [`apply_left`] / [`apply_right`] fold it into a matrix region and an
//!   orthogonal accumulator in place, and [`bidiagonalize`] /
//!   [`bidiagonalize_explicit`] drive the full reduction. Two QR
//!   factorizations are included: [`householder_qr`] built on the same
//!   reflector machinery, and the rotation-based [`givens_qr`].
//!
//! - [`traits`] — Element trait hierarchy ([`Scalar`], [`FloatScalar`]) and
//!   generic matrix access ([`MatrixRef`] / [`MatrixMut`]).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{
    apply_left, apply_right, bidiagonalize, bidiagonalize_explicit, givens_qr, householder_qr,
    make_householder, Bidiagonal, DimensionError, QrDecomposition, Reflector,
};
pub use matrix::{Matrix, Vector};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
