//! Permutation-aware triangular substitution kernels
//!
//! Both kernels operate on a combined LU buffer produced by elimination:
//! unit-diagonal L multipliers strictly below the (permuted) diagonal, U on
//! and above it. Row and column permutations are passed as explicit
//! logical-to-physical index slices; identity slices recover the direct
//! indexing used by the no-pivot and partial-pivot solvers.
//!
//! Pivots are verified nonzero during factorization, so the backward kernel
//! divides without re-checking.

use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// The identity permutation on `{0..n-1}`.
pub(crate) fn identity_permutation(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Forward substitution: solve `Ly = Pb` on the unit-lower part of `lu`.
///
/// `y[i] = b[row[i]] - Σ_{j<i} lu[row[i], col[j]] * y[j]`, strictly in
/// increasing `i` since each step reads only earlier entries. `y` stays in
/// logical (elimination) order regardless of the column permutation.
pub(crate) fn forward_substitute<T: RealField>(
    lu: &Array2<T>,
    b: &Array1<T>,
    row: &[usize],
    col: &[usize],
) -> Array1<T> {
    let n = b.len();
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut tot = T::zero();
        for j in 0..i {
            tot += lu[[row[i], col[j]]] * y[j];
        }
        y[i] = b[row[i]] - tot;
    }
    y
}

/// Backward substitution: solve `Ux = y` on the upper part of `lu`.
///
/// Runs in strictly decreasing `i`. Solution entries are written at
/// `x[col[i]]`, undoing the column permutation, and already-resolved
/// unknowns are read back through `col[j]` for the same reason. With an
/// identity column permutation both collapse to direct indexing.
pub(crate) fn backward_substitute<T: RealField>(
    lu: &Array2<T>,
    y: &Array1<T>,
    row: &[usize],
    col: &[usize],
) -> Array1<T> {
    let n = y.len();
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut tot = T::zero();
        for j in (i + 1)..n {
            tot += lu[[row[i], col[j]]] * x[col[j]];
        }
        x[col[i]] = (y[i] - tot) / lu[[row[i], col[i]]];
    }
    x
}
