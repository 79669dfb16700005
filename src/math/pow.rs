//! Power functions: pow and integer-exponent pown
//!
//! `pown` raises by squaring, taking the reciprocal up front for
//! negative exponents, so integer powers are exact products rather than
//! exp/log round trips and negative bases keep their sign. `pow`
//! dispatches exact in-range integer exponents to `pown` and computes
//! everything else as `2^(e·log2(|x|))`, negating the result when a
//! negative base meets an odd integer exponent and returning NaN when
//! it meets a non-integer one.
//!
//! # Error Bounds
//!
//! - pown: error grows with the number of squarings, ~`log2(|n|)/2` ulp
//! - pow (non-integer path): dominated by `e·log2(x)` argument rounding,
//!   relative error ~`|e·log2(x)|·2^-52`
//!
//! # Example
//!
//! ```rust
//! assert_eq!(vega_math::pown(-3.0, 3), -27.0);
//! assert_eq!(vega_math::pow(2.0, 10.0), 1024.0);
//! assert!((vega_math::pow(2.0, 0.5) - core::f64::consts::SQRT_2).abs() < 1e-15);
//! ```

use crate::bits::fabs;
use crate::math::exp::exp2;
use crate::math::log::log2;

/// `x^n` for integer `n` by binary exponentiation
///
/// `x^0 = 1` for every `x`. Negative exponents invert the base first, so
/// `pown(0.0, -1) = inf` and `pown(-0.0, -1) = -inf` follow from the
/// division.
pub fn pown(x: f64, n: i32) -> f64 {
    let mut m = n.unsigned_abs();
    let mut base = if n < 0 { 1.0 / x } else { x };
    let mut acc = 1.0;
    loop {
        if (m & 1) != 0 {
            acc *= base;
        }
        m >>= 1;
        if m == 0 {
            break;
        }
        base *= base;
    }
    acc
}

/// `x^n` for integer `n` (single precision)
pub fn pownf(x: f32, n: i32) -> f32 {
    let mut m = n.unsigned_abs();
    let mut base = if n < 0 { 1.0 / x } else { x };
    let mut acc = 1.0;
    loop {
        if (m & 1) != 0 {
            acc *= base;
        }
        m >>= 1;
        if m == 0 {
            break;
        }
        base *= base;
    }
    acc
}

/// `x^e`
///
/// Exact integer exponents within `i32` range go through [`pown`];
/// everything else is `exp2(e · log2(|x|))` with the sign restored for
/// negative bases raised to odd integer exponents. Negative bases with
/// non-integer exponents return NaN, and overflow saturates to
/// `±inf`/`0` through the `exp2` engine.
pub fn pow(x: f64, e: f64) -> f64 {
    if e.is_finite() && e == libm::trunc(e) && fabs(e) <= 2147483647.0 {
        return pown(x, e as i32);
    }
    if x < 0.0 && e != libm::trunc(e) {
        return f64::NAN;
    }
    let r = exp2(e * log2(fabs(x)));
    if x < 0.0 && e.is_finite() && libm::fmod(e, 2.0) != 0.0 {
        -r
    } else {
        r
    }
}

/// `x^e` (single precision)
pub fn powf(x: f32, e: f32) -> f32 {
    if e.is_finite() && e == libm::truncf(e) && fabs(e) <= 2147483520.0 {
        return pownf(x, e as i32);
    }
    if x < 0.0 && e != libm::truncf(e) {
        return f32::NAN;
    }
    // integer exponents past the pownf bound are all even: the f32 grid
    // is coarser than 2 out there, so no odd-parity branch is needed
    crate::math::exp::exp2f(e * crate::math::log::log2f(fabs(x)))
}
