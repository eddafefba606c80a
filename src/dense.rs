//! Dense vector and matrix helpers
//!
//! Norms, matrix-vector products and residual measurement used by callers
//! and tests to judge solution quality. The elimination kernels themselves
//! only ever form the dot products internal to substitution.

use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Euclidean (2-)norm: `||x||_2 = sqrt(Σ x_i^2)`
#[inline]
pub fn vector_norm<T: RealField>(x: &Array1<T>) -> T {
    vector_norm_sqr(x).sqrt()
}

/// Squared 2-norm, when the square root isn't needed.
#[inline]
pub fn vector_norm_sqr<T: RealField>(x: &Array1<T>) -> T {
    let mut sum = T::zero();
    for xi in x.iter() {
        sum += *xi * *xi;
    }
    sum
}

/// Dense matrix-vector product `y = A * x`.
pub fn matvec<T: RealField>(a: &Array2<T>, x: &Array1<T>) -> Array1<T> {
    assert_eq!(
        a.ncols(),
        x.len(),
        "matrix columns must match vector length"
    );
    let mut y = Array1::zeros(a.nrows());
    for (i, row) in a.rows().into_iter().enumerate() {
        let mut sum = T::zero();
        for (aij, xj) in row.iter().zip(x.iter()) {
            sum += *aij * *xj;
        }
        y[i] = sum;
    }
    y
}

/// Relative residual `||A*x - b||_2 / ||b||_2`.
///
/// Returns the absolute residual norm when `b` is the zero vector.
pub fn relative_residual<T: RealField>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T {
    let r = &matvec(a, x) - b;
    let b_norm = vector_norm(b);
    if b_norm == T::zero() {
        vector_norm(&r)
    } else {
        vector_norm(&r) / b_norm
    }
}
