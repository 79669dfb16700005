//! Bit-level IEEE 754 primitives
//!
//! Sign transfer, normalized fraction/exponent decomposition, and exact
//! power-of-two construction, all implemented directly on the bit
//! representation through the [`Float`] trait. These are the building blocks
//! every engine in [`crate::math`] reduces to.
//!
//! # Algorithm notes
//!
//! - `frexp` forces the biased exponent field to `bias - 1` so the fraction
//!   lands in `[0.5, 1)`; subnormal inputs are first multiplied by the exact
//!   scale `2^BITS` to bring them into the normal range.
//! - `exp2n` writes the exponent field directly for normal results and
//!   shifts a single mantissa bit into place for subnormal ones.
//! - `ldexp` rescales in up to two clamped stages so that results which are
//!   representable even though `2^e` alone is not (the top binade, deep
//!   subnormals) are still reached. This is what makes the
//!   `frexp`/`ldexp` round-trip bit-exact over the whole finite range.

use crate::traits::{Float, FloatBits};

/// Absolute value by clearing the sign bit
///
/// Works for every input including NaN (the payload is preserved).
///
/// # Example
///
/// ```rust
/// use vega_math::fabs;
///
/// assert_eq!(fabs(-3.5f64), 3.5);
/// assert_eq!(fabs(-0.0f32).to_bits(), 0.0f32.to_bits());
/// ```
#[inline(always)]
pub fn fabs<F: Float>(x: F) -> F {
    F::from_bits(x.to_bits() & !F::SIGN_MASK)
}

/// ±1 matching the sign bit
///
/// Zero and NaN are not special: `sign(-0.0) == -1.0` and NaN maps to ±1 by
/// its sign bit.
#[inline(always)]
pub fn sign<F: Float>(x: F) -> F {
    F::from_bits((x.to_bits() & F::SIGN_MASK) | F::ONE.to_bits())
}

/// Magnitude of `magnitude` with the sign bit of `sign_source`
///
/// # Example
///
/// ```rust
/// use vega_math::copysign;
///
/// assert_eq!(copysign(2.0f64, -7.0), -2.0);
/// assert_eq!(copysign(-2.0f32, 1.0), 2.0);
/// ```
#[inline(always)]
pub fn copysign<F: Float>(magnitude: F, sign_source: F) -> F {
    F::from_bits(
        (magnitude.to_bits() & !F::SIGN_MASK) | (sign_source.to_bits() & F::SIGN_MASK),
    )
}

/// Decompose `x` into `(m, e)` with `x = m * 2^e` and `m` in `[0.5, 1)`
///
/// Zero returns `(x, 0)` with the sign of zero preserved; infinities and
/// NaN return `(x, 0)`. Subnormal inputs are renormalized by the exact
/// scale `2^BITS` before exponent extraction, so the fraction is always a
/// normal value and the round-trip through [`ldexp`] is bit-exact.
///
/// # Example
///
/// ```rust
/// use vega_math::{frexp, ldexp};
///
/// let (m, e) = frexp(6.0f64);
/// assert_eq!((m, e), (0.75, 3));
/// assert_eq!(ldexp(m, e), 6.0);
/// ```
#[inline]
pub fn frexp<F: Float>(x: F) -> (F, i32) {
    let mut bits = x.to_bits();
    let mut raw = (bits >> F::MANTISSA_BITS).to_u32() & F::EXPONENT_RAW_MAX;
    if raw == F::EXPONENT_RAW_MAX {
        // inf and NaN pass through
        return (x, 0);
    }
    let mut renorm_shift = 0i32;
    if raw == 0 {
        if (bits & !F::SIGN_MASK) == F::Bits::ZERO {
            return (x, 0);
        }
        bits = (x * F::RENORM).to_bits();
        raw = (bits >> F::MANTISSA_BITS).to_u32() & F::EXPONENT_RAW_MAX;
        renorm_shift = F::BITS as i32;
    }
    let e = raw as i32 - (F::EXPONENT_BIAS - 1) - renorm_shift;
    let half_exponent =
        F::Bits::from_u32((F::EXPONENT_BIAS - 1) as u32) << F::MANTISSA_BITS;
    let m = F::from_bits((bits & (F::SIGN_MASK | F::MANTISSA_MASK)) | half_exponent);
    (m, e)
}

/// `2^e` for an integer exponent, built in the exponent field
///
/// Exact for every representable power of two, including the subnormal
/// range. Overflows to `+inf` above [`Float::EXP_MAX`] and underflows to
/// `0` below [`Float::EXP_MIN_SUBNORMAL`].
///
/// # Example
///
/// ```rust
/// use vega_math::exp2n;
///
/// let p: f64 = exp2n(10);
/// assert_eq!(p, 1024.0);
/// let tiny: f64 = exp2n(-1074);
/// assert_eq!(tiny, f64::from_bits(1));
/// let huge: f32 = exp2n(128);
/// assert!(huge.is_infinite());
/// ```
#[inline]
pub fn exp2n<F: Float>(e: i32) -> F {
    if e > F::EXP_MAX {
        F::INFINITY
    } else if e >= F::EXP_MIN {
        F::from_bits(F::Bits::from_u32((e + F::EXPONENT_BIAS) as u32) << F::MANTISSA_BITS)
    } else if e >= F::EXP_MIN_SUBNORMAL {
        F::from_bits(F::Bits::ONE << ((e - F::EXP_MIN_SUBNORMAL) as u32))
    } else {
        F::ZERO
    }
}

/// `x * 2^e` with staged scaling
///
/// A single multiply by [`exp2n`] would lose results whose exponent passes
/// through the representable edge (a fraction in `[0.5, 1)` with `e` one
/// past `EXP_MAX`, or deep subnormal results under a large magnitude).
/// Scaling happens in clamped stages instead, after musl's scalbn, so any
/// representable product is reached and anything past the edge saturates to
/// `±inf` or `0` with correct sign.
#[inline]
pub fn ldexp<F: Float>(x: F, e: i32) -> F {
    let mut y = x;
    let mut e = e;
    if e > F::EXP_MAX {
        y = y * exp2n::<F>(F::EXP_MAX);
        e -= F::EXP_MAX;
        if e > F::EXP_MAX {
            y = y * exp2n::<F>(F::EXP_MAX);
            e -= F::EXP_MAX;
            if e > F::EXP_MAX {
                e = F::EXP_MAX;
            }
        }
    } else if e < F::EXP_MIN {
        // 2^(EXP_MIN + mantissa + 1): far enough down to land subnormal
        // targets, close enough to keep intermediates normal
        let stage = F::EXP_MIN + F::MANTISSA_BITS as i32 + 1;
        y = y * exp2n::<F>(stage);
        e -= stage;
        if e < F::EXP_MIN {
            y = y * exp2n::<F>(stage);
            e -= stage;
            if e < F::EXP_MIN {
                e = F::EXP_MIN;
            }
        }
    }
    y * exp2n::<F>(e)
}
