//! Slice-driven polynomial and rational evaluation
//!
//! One generic Horner loop drives every approximation in the crate. The
//! coefficient tables in [`crate::math`] are stored in ascending order
//! (constant term first), so `polynomial(x, &[c0, c1, c2])` computes
//! `c0 + x*(c1 + x*c2)` in exactly `len - 1` multiply-add steps.
//!
//! The steps are plain `mul` + `add`, not fused: the minimax tables were
//! fitted against non-fused evaluation and keeping the same rounding makes
//! results identical across targets with and without hardware FMA.

use crate::traits::Float;

/// Horner evaluation of an ascending coefficient slice
///
/// Returns `coef[0] + x*(coef[1] + x*(coef[2] + ...))`.
///
/// # Panics
///
/// Panics if `coef` is empty.
///
/// # Example
///
/// ```rust
/// use vega_math::polynomial;
///
/// // 1 + 2x + 3x^2 at x = 2
/// assert_eq!(polynomial(2.0f64, &[1.0, 2.0, 3.0]), 17.0);
/// ```
#[inline(always)]
pub fn polynomial<F: Float>(x: F, coef: &[F]) -> F {
    let last = coef.len() - 1;
    let mut acc = coef[last];
    for &c in coef[..last].iter().rev() {
        acc = acc * x + c;
    }
    acc
}

/// Ratio of two Horner evaluations
///
/// Both slices are ascending full coefficient lists. Tables transcribed
/// from the p1evl form (implicit leading 1 in the denominator) store that
/// 1.0 explicitly as the highest coefficient, which reproduces the exact
/// p1evl operation sequence: the first Horner step is `1*x + q`.
///
/// # Panics
///
/// Panics if either slice is empty.
#[inline(always)]
pub fn rational<F: Float>(x: F, num: &[F], den: &[F]) -> F {
    polynomial(x, num) / polynomial(x, den)
}
