//! Gaussian elimination without pivoting
//!
//! The baseline strategy: Doolittle-style in-place LU with no pivot search.
//! Fails on any exactly-zero diagonal entry and loses accuracy on
//! ill-conditioned systems, which is what the pivoted variants exist to fix.

use crate::elimination::{check_rhs_len, check_square, ElimError};
use crate::substitution::{backward_substitute, forward_substitute, identity_permutation};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization with no pivoting.
///
/// `lu` holds both factors: strictly-lower entries are the L multipliers
/// (unit diagonal implicit), diagonal and above are U.
#[derive(Debug, Clone)]
pub struct NoPivotLu<T: RealField> {
    pub lu: Array2<T>,
    pub n: usize,
}

impl<T: RealField> NoPivotLu<T> {
    /// Factorize `a` in a working copy; the caller's matrix is not mutated.
    pub fn factorize(a: &Array2<T>) -> Result<Self, ElimError> {
        let n = check_square(a)?;
        let mut lu = a.clone();

        for i in 0..n {
            let pivot = lu[[i, i]];
            if pivot == T::zero() {
                return Err(ElimError::ZeroPivot { step: i });
            }
            for j in (i + 1)..n {
                let mult = lu[[j, i]] / pivot;
                for k in (i + 1)..n {
                    let update = mult * lu[[i, k]];
                    lu[[j, k]] -= update;
                }
                lu[[j, i]] = mult; // zeroed slot reused for the L factor
            }
        }

        Ok(Self { lu, n })
    }

    /// Solve `Ax = b` using the factorization. Reusable across right-hand
    /// sides.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, ElimError> {
        check_rhs_len(self.n, b)?;
        let id = identity_permutation(self.n);
        let y = forward_substitute(&self.lu, b, &id, &id);
        Ok(backward_substitute(&self.lu, &y, &id, &id))
    }
}

/// Solve `Ax = b` by Gaussian elimination without pivoting.
pub fn no_pivot_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, ElimError> {
    let n = check_square(a)?;
    check_rhs_len(n, b)?;
    NoPivotLu::factorize(a)?.solve(b)
}
