//! Dense Gaussian elimination solvers
//!
//! This crate solves dense linear systems `Ax = b` by Gaussian elimination,
//! with three pivoting strategies that trade numerical stability for cost.
//!
//! # Features
//!
//! - **No pivoting**: the unstable baseline, fails on any zero diagonal pivot
//! - **Partial pivoting**: row permutation, largest magnitude in the column
//! - **Complete pivoting**: row and column permutation, largest magnitude in
//!   the remaining submatrix
//! - **Permutation vectors, not data movement**: pivot choices are recorded
//!   in logical-to-physical index maps; matrix entries never move
//! - **Reusable factorizations**: factor once, solve for many right-hand sides
//! - **Generic Scalar Types**: works with `f64` (the intended use) and `f32`
//!
//! # Example
//!
//! ```
//! use gauss_solvers::{complete_pivot_solve, relative_residual};
//! use ndarray::array;
//!
//! let a = array![[0.0_f64, 2.0, 5.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
//! let b = array![1.0_f64, 2.0, 3.0];
//!
//! let x = complete_pivot_solve(&a, &b)?;
//! assert!(relative_residual(&a, &x, &b) < 1e-10);
//! # Ok::<(), gauss_solvers::ElimError>(())
//! ```

pub mod dense;
pub mod elimination;
pub mod substitution;
pub mod traits;

// Re-export main types
pub use traits::RealField;

// Re-export solvers
pub use elimination::{
    complete_pivot_solve, no_pivot_solve, partial_pivot_solve, CompletePivotLu, ElimError,
    NoPivotLu, PartialPivotLu, PivotStrategy,
};

// Re-export residual helpers
pub use dense::{matvec, relative_residual, vector_norm, vector_norm_sqr};
