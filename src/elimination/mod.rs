//! Gaussian elimination solvers for dense systems
//!
//! Three strategies trading stability for cost:
//! - [`no_pivot`]: no pivot search, the unstable baseline
//! - [`partial`]: row pivoting on the current column
//! - [`complete`]: row and column pivoting over the remaining submatrix
//!
//! Each strategy offers a factorization struct (reusable across right-hand
//! sides) and a one-shot solve function. All the solvers leave the caller's
//! matrix untouched and keep no state between calls.

pub mod complete;
pub mod no_pivot;
pub mod partial;

pub use complete::{complete_pivot_solve, CompletePivotLu};
pub use no_pivot::{no_pivot_solve, NoPivotLu};
pub use partial::{partial_pivot_solve, PartialPivotLu};

use crate::traits::RealField;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur during elimination or substitution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElimError {
    /// The selected pivot is exactly zero even after any permitted
    /// permutation, so the matrix is singular to working precision.
    /// Small nonzero pivots are tolerated; only exact zero fails.
    #[error("zero pivot at elimination step {step}: matrix is singular")]
    ZeroPivot { step: usize },
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Reject a non-square matrix before elimination begins.
pub(crate) fn check_square<T: RealField>(a: &Array2<T>) -> Result<usize, ElimError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(ElimError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    Ok(n)
}

/// Reject a right-hand side whose length does not match the system.
pub(crate) fn check_rhs_len<T: RealField>(n: usize, b: &Array1<T>) -> Result<(), ElimError> {
    if b.len() != n {
        return Err(ElimError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(())
}

/// Pivoting strategy selector.
///
/// Lets callers treat the three solvers polymorphically, e.g. iterating
/// [`PivotStrategy::ALL`] in comparison harnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotStrategy {
    /// No pivot search; fails on any zero diagonal entry.
    NoPivot,
    /// Row pivoting: largest magnitude in the current column.
    Partial,
    /// Row and column pivoting: largest magnitude in the remaining submatrix.
    Complete,
}

impl PivotStrategy {
    /// All strategies, in increasing order of stability.
    pub const ALL: [PivotStrategy; 3] = [
        PivotStrategy::NoPivot,
        PivotStrategy::Partial,
        PivotStrategy::Complete,
    ];

    /// Solve `Ax = b` with this strategy.
    pub fn solve<T: RealField>(
        self,
        a: &Array2<T>,
        b: &Array1<T>,
    ) -> Result<Array1<T>, ElimError> {
        match self {
            PivotStrategy::NoPivot => no_pivot_solve(a, b),
            PivotStrategy::Partial => partial_pivot_solve(a, b),
            PivotStrategy::Complete => complete_pivot_solve(a, b),
        }
    }
}
