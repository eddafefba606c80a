//! Gaussian elimination with complete (row + column) pivoting
//!
//! The most stable and most expensive strategy: each step searches the whole
//! uneliminated submatrix for the dominant entry and records the choice in
//! two independent permutation vectors, one for rows and one for columns.
//! Data is never physically moved; every matrix access goes through both
//! permutations, and backward substitution undoes the column permutation
//! when writing the solution.

use crate::elimination::{check_rhs_len, check_square, ElimError};
use crate::substitution::{backward_substitute, forward_substitute, identity_permutation};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization with complete pivoting.
///
/// `lu` holds both factors addressed through `row_piv` and `col_piv`
/// jointly: entry `(i, j)` of the factorization lives at physical position
/// `(row_piv[i], col_piv[j])`. Both vectors are always bijections on
/// `{0..n-1}`.
#[derive(Debug, Clone)]
pub struct CompletePivotLu<T: RealField> {
    pub lu: Array2<T>,
    pub row_piv: Vec<usize>,
    pub col_piv: Vec<usize>,
    pub n: usize,
}

impl<T: RealField> CompletePivotLu<T> {
    /// Factorize `a` in a working copy; the caller's matrix is not mutated.
    pub fn factorize(a: &Array2<T>) -> Result<Self, ElimError> {
        let n = check_square(a)?;
        let mut lu = a.clone();
        let mut row_piv = identity_permutation(n);
        let mut col_piv = identity_permutation(n);
        let mut row_swaps = 0usize;
        let mut col_swaps = 0usize;

        for k in 0..n {
            // Dominant entry of the remaining submatrix, scanned row-major
            // over logical indices. Strict comparison keeps the first
            // encountered position on ties.
            let mut max_row = k;
            let mut max_col = k;
            let mut max_val = lu[[row_piv[k], col_piv[k]]].abs();
            for i in k..n {
                for j in k..n {
                    let val = lu[[row_piv[i], col_piv[j]]].abs();
                    if val > max_val {
                        max_val = val;
                        max_row = i;
                        max_col = j;
                    }
                }
            }
            // Two independent swaps: the row and column choices are not
            // coupled to each other.
            if max_row != k {
                row_piv.swap(k, max_row);
                row_swaps += 1;
            }
            if max_col != k {
                col_piv.swap(k, max_col);
                col_swaps += 1;
            }

            let pivot = lu[[row_piv[k], col_piv[k]]];
            if pivot == T::zero() {
                // Every remaining entry is zero.
                return Err(ElimError::ZeroPivot { step: k });
            }
            if pivot.abs() < T::from_f64(1e-30).unwrap() {
                log::warn!(
                    "complete pivoting: small pivot {:.3e} at step {}",
                    pivot.to_f64().unwrap_or(0.0),
                    k
                );
            }

            for i in (k + 1)..n {
                let mult = lu[[row_piv[i], col_piv[k]]] / pivot;
                for j in (k + 1)..n {
                    let update = mult * lu[[row_piv[k], col_piv[j]]];
                    lu[[row_piv[i], col_piv[j]]] -= update;
                }
                lu[[row_piv[i], col_piv[k]]] = mult;
            }
        }

        log::debug!(
            "complete-pivot factorization: n={n}, row swaps={row_swaps}, column swaps={col_swaps}"
        );
        Ok(Self {
            lu,
            row_piv,
            col_piv,
            n,
        })
    }

    /// Solve `Ax = b` using the factorization.
    ///
    /// Forward substitution leaves `y` in logical (column-permuted) order;
    /// backward substitution writes each entry at its true position through
    /// the column permutation.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, ElimError> {
        check_rhs_len(self.n, b)?;
        let y = forward_substitute(&self.lu, b, &self.row_piv, &self.col_piv);
        Ok(backward_substitute(&self.lu, &y, &self.row_piv, &self.col_piv))
    }
}

/// Solve `Ax = b` by Gaussian elimination with complete pivoting.
pub fn complete_pivot_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, ElimError> {
    let n = check_square(a)?;
    check_rhs_len(n, b)?;
    CompletePivotLu::factorize(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_bijection(piv: &[usize]) {
        let mut seen = vec![false; piv.len()];
        for &p in piv {
            assert!(p < piv.len(), "index {p} out of range");
            assert!(!seen[p], "index {p} repeated");
            seen[p] = true;
        }
    }

    #[test]
    fn test_solve_known_system() {
        let a = array![[2.0_f64, 4.0, -2.0], [4.0, 14.0, 0.0], [-1.0, 10.0, 7.0]];
        let b = array![4.0_f64, 18.0, 15.0];

        let x = complete_pivot_solve(&a, &b).expect("solve should succeed");

        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_column_swap_unwound() {
        // The dominant entry is 9 at (2, 2), so the first step swaps both
        // permutations; the solution must still come back in original
        // unknown order.
        let a = array![[0.0_f64, 2.0, 5.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let b = array![1.0_f64, 2.0, 3.0];

        let lu = CompletePivotLu::factorize(&a).expect("factorization should succeed");
        assert_eq!(lu.row_piv[0], 2);
        assert_eq!(lu.col_piv[0], 2);

        let x = lu.solve(&b).expect("solve should succeed");
        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_permutations_are_bijections() {
        let a = array![
            [1.0_f64, 8.0, 2.0, 0.5],
            [3.0, -2.0, 10.0, 1.0],
            [0.0, 4.0, -6.0, 9.0],
            [7.0, 1.0, 0.0, -3.0]
        ];
        let lu = CompletePivotLu::factorize(&a).expect("factorization should succeed");

        assert_bijection(&lu.row_piv);
        assert_bijection(&lu.col_piv);
    }

    #[test]
    fn test_tie_break_first_encountered() {
        // Four entries share the maximum magnitude; the row-major scan over
        // logical indices must pick (0, 1) and leave the row order alone.
        let a = array![[1.0_f64, 4.0, 4.0], [4.0, 1.0, 4.0], [2.0, 2.0, 1.0]];
        let lu = CompletePivotLu::factorize(&a).expect("factorization should succeed");

        assert_eq!(lu.row_piv[0], 0);
        assert_eq!(lu.col_piv[0], 1);
    }

    #[test]
    fn test_identity_needs_no_swaps() {
        let a = array![[1.0_f64, 0.0], [0.0, 1.0]];
        let lu = CompletePivotLu::factorize(&a).expect("factorization should succeed");

        assert_eq!(lu.row_piv, vec![0, 1]);
        assert_eq!(lu.col_piv, vec![0, 1]);
    }

    #[test]
    fn test_singular_detected() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let b = array![3.0_f64, 6.0];

        assert_eq!(
            complete_pivot_solve(&a, &b),
            Err(ElimError::ZeroPivot { step: 1 })
        );
    }

    #[test]
    fn test_factorize_multiple_rhs() {
        let a = array![[0.0_f64, 2.0, 5.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let lu = CompletePivotLu::factorize(&a).expect("factorization should succeed");

        for b in [array![1.0_f64, 2.0, 3.0], array![0.0_f64, -2.0, 6.0]] {
            let x = lu.solve(&b).expect("solve should succeed");
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }
}
