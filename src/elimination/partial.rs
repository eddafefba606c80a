//! Gaussian elimination with partial (row) pivoting
//!
//! At each step the row with the largest magnitude in the current column is
//! logically swapped into pivot position. Swaps are recorded in a row
//! permutation vector; matrix rows are never physically moved.

use crate::elimination::{check_rhs_len, check_square, ElimError};
use crate::substitution::{backward_substitute, forward_substitute, identity_permutation};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization with partial pivoting.
///
/// `lu` holds both factors addressed through `row_piv`: row `i` of the
/// factorization lives at physical row `row_piv[i]`. Columns are never
/// permuted. `row_piv` is always a bijection on `{0..n-1}`.
#[derive(Debug, Clone)]
pub struct PartialPivotLu<T: RealField> {
    pub lu: Array2<T>,
    pub row_piv: Vec<usize>,
    pub n: usize,
}

impl<T: RealField> PartialPivotLu<T> {
    /// Factorize `a` in a working copy; the caller's matrix is not mutated.
    pub fn factorize(a: &Array2<T>) -> Result<Self, ElimError> {
        let n = check_square(a)?;
        let mut lu = a.clone();
        let mut row_piv = identity_permutation(n);
        let mut swaps = 0usize;

        for i in 0..n {
            // Largest magnitude in column i among remaining rows, accessed
            // through the current permutation. Strict comparison keeps the
            // earliest row on ties.
            let mut max_row = i;
            for j in (i + 1)..n {
                if lu[[row_piv[j], i]].abs() > lu[[row_piv[max_row], i]].abs() {
                    max_row = j;
                }
            }
            if max_row != i {
                row_piv.swap(i, max_row);
                swaps += 1;
            }

            let pivot = lu[[row_piv[i], i]];
            if pivot == T::zero() {
                // The whole remaining column is zero.
                return Err(ElimError::ZeroPivot { step: i });
            }
            if pivot.abs() < T::from_f64(1e-30).unwrap() {
                log::warn!(
                    "partial pivoting: small pivot {:.3e} at step {}",
                    pivot.to_f64().unwrap_or(0.0),
                    i
                );
            }

            for j in (i + 1)..n {
                let mult = lu[[row_piv[j], i]] / pivot;
                for k in (i + 1)..n {
                    let update = mult * lu[[row_piv[i], k]];
                    lu[[row_piv[j], k]] -= update;
                }
                lu[[row_piv[j], i]] = mult;
            }
        }

        log::debug!("partial-pivot factorization: n={n}, row swaps={swaps}");
        Ok(Self { lu, row_piv, n })
    }

    /// Solve `Ax = b` using the factorization; rows are indexed through the
    /// permutation, columns directly.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, ElimError> {
        check_rhs_len(self.n, b)?;
        let id = identity_permutation(self.n);
        let y = forward_substitute(&self.lu, b, &self.row_piv, &id);
        Ok(backward_substitute(&self.lu, &y, &self.row_piv, &id))
    }
}

/// Solve `Ax = b` by Gaussian elimination with partial pivoting.
pub fn partial_pivot_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, ElimError> {
    let n = check_square(a)?;
    check_rhs_len(n, b)?;
    PartialPivotLu::factorize(a)?.solve(b)
}
