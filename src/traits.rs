//! Scalar abstraction for the elimination kernels
//!
//! The solvers are written against [`RealField`], a real-number trait built
//! from `num_traits` bounds. `f64` is the intended instantiation for dense
//! double-precision work; `f32` satisfies the same bounds.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in Gaussian elimination.
///
/// Covers ordered magnitude comparison (`Float::abs`), in-place arithmetic,
/// and conversions to/from primitives for tolerances and logging.
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
}

impl<T> RealField for T where
    T: Float + NumAssign + FromPrimitive + ToPrimitive + Debug + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude<T: RealField>(x: T) -> T {
        x.abs()
    }

    #[test]
    fn test_f64_field() {
        assert_eq!(magnitude(-3.0_f64), 3.0);
        assert_eq!(magnitude(0.0_f64), 0.0);
    }

    #[test]
    fn test_f32_field() {
        assert_eq!(magnitude(-2.5_f32), 2.5);
    }
}
