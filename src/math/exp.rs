//! Exponential functions: exp2, exp, exp10, expm1
//!
#![allow(clippy::excessive_precision)]
//! The per-width exp2 kernels are the engines; exp reduces against ln 2
//! with a Cody-Waite constant pair, exp10 splits off an exact integer
//! decade, and expm1 switches to a series near zero for full relative
//! accuracy.
//!
//! # Algorithm: exp2
//!
//! 1. Split `x = n + f` with integer `n` and `f ∈ [-0.5, 0.5]`
//! 2. Approximate `2^f`: f64 uses the minimax rational
//!    `1 + 2f·P(f²) / (Q(f²) - f·P(f²))`, f32 a degree-6 polynomial
//!    `1 + f·P(f)`
//! 3. Reconstruct `2^n · 2^f` through the staged [`ldexp`], so overflow,
//!    the top binade, and gradual underflow all come out right
//!
//! # Error Bounds
//!
//! - exp2/exp: 1-2 ulp over the finite range (f64), ~4e-8 relative (f32)
//! - exp2 of integer arguments is exact
//! - exp10 adds the rounding of the integer decade power (exact through
//!   10^22 in f64)
//! - expm1 keeps full relative accuracy through zero

use crate::bits::{fabs, ldexp};
use crate::math::pow::{pown, pownf};
use crate::poly::polynomial;

// ln(2^1024) and ln(2^-1075): past these every f64 result saturates
const MAX_LOG: f64 = 709.78271289338399684;
const MIN_LOG: f64 = -745.13321910194122;

// ln(2^128) and ln(2^-150) for f32
const MAX_LOGF: f32 = 88.72283905206835;
const MIN_LOGF: f32 = -103.972077083992;

// log10 of the same saturation edges
const MAX_LOG10: f64 = 308.25471555991671;
const MIN_LOG10: f64 = -323.60724533877976;
const MAX_LOG10F: f32 = 38.531839444989593;
const MIN_LOG10F: f32 = -45.154499349597178;

// Cody-Waite split of ln 2, high parts exactly representable
const LN2_HI: f64 = 6.93145751953125e-1;
const LN2_LO: f64 = 1.42860682030941723212e-6;
const LN2F_HI: f32 = 0.693359375;
const LN2F_LO: f32 = -2.12194440e-4;

// 2^f = 1 + 2f·P(f²)/(Q(f²) - f·P(f²)) on [-0.5, 0.5]
const EXP2_P: [f64; 3] = [
    1.51390680115615096133e3,
    2.02020656693165307700e1,
    2.30933477057345225087e-2,
];
const EXP2_Q: [f64; 3] = [
    4.36821166879210612817e3,
    2.33184211722314911771e2,
    1.0,
];

// e^r = 1 + 2r·P(r²)/(Q(r²) - r·P(r²)) on [-ln2/2, ln2/2]
const EXP_P: [f64; 3] = [
    9.99999999999999999910e-1,
    3.02994407707441961300e-2,
    1.26177193074810590878e-4,
];
const EXP_Q: [f64; 4] = [
    2.00000000000000000005e0,
    2.27265548208155028766e-1,
    2.52448340349684104192e-3,
    3.00198505138664455042e-6,
];

// 2^f = 1 + f·P(f) on [-0.5, 0.5]
const EXP2F_P: [f32; 6] = [
    6.931472028550421e-1,
    2.402264791363012e-1,
    5.550332471162809e-2,
    9.618437357674640e-3,
    1.339887440266574e-3,
    1.535336188319500e-4,
];

// e^r = 1 + r + r²·P(r) on [-ln2/2, ln2/2]
const EXPF_P: [f32; 6] = [
    5.0000001201e-1,
    1.6666665459e-1,
    4.1665795894e-2,
    8.3334519073e-3,
    1.3981999507e-3,
    1.9875691500e-4,
];

// expm1(x)/x = sum x^k/(k+1)!, exact rational coefficients
const EXPM1_P: [f64; 15] = [
    1.0,
    1.0 / 2.0,
    1.0 / 6.0,
    1.0 / 24.0,
    1.0 / 120.0,
    1.0 / 720.0,
    1.0 / 5040.0,
    1.0 / 40320.0,
    1.0 / 362880.0,
    1.0 / 3628800.0,
    1.0 / 39916800.0,
    1.0 / 479001600.0,
    1.0 / 6227020800.0,
    1.0 / 87178291200.0,
    1.0 / 1307674368000.0,
];

const EXPM1F_P: [f32; 9] = [
    1.0,
    1.0 / 2.0,
    1.0 / 6.0,
    1.0 / 24.0,
    1.0 / 120.0,
    1.0 / 720.0,
    1.0 / 5040.0,
    1.0 / 40320.0,
    1.0 / 362880.0,
];

/// `2^x`
///
/// Exact for integer `x` in the representable range; overflows to `+inf`
/// for `x >= 1024` and underflows to `0` below the last subnormal.
///
/// # Example
///
/// ```rust
/// assert_eq!(vega_math::exp2(3.0), 8.0);
/// assert_eq!(vega_math::exp2(-1074.0), f64::from_bits(1));
/// ```
pub fn exp2(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x >= 1024.0 {
        return f64::INFINITY;
    }
    if x < -1075.0 {
        return 0.0;
    }
    // n = round(x), f in [-0.5, 0.5]
    let n = libm::floor(x + 0.5);
    let f = x - n;
    let zz = f * f;
    let px = f * polynomial(zz, &EXP2_P);
    let u = px / (polynomial(zz, &EXP2_Q) - px);
    ldexp(1.0 + 2.0 * u, n as i32)
}

/// `e^x`
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > MAX_LOG {
        return f64::INFINITY;
    }
    if x < MIN_LOG {
        return 0.0;
    }
    let n = libm::floor(core::f64::consts::LOG2_E * x + 0.5);
    let r = (x - n * LN2_HI) - n * LN2_LO;
    let zz = r * r;
    let px = r * polynomial(zz, &EXP_P);
    let u = px / (polynomial(zz, &EXP_Q) - px);
    ldexp(1.0 + 2.0 * u, n as i32)
}

/// `10^x`
///
/// Splits off the integer decade so `exp10` of small integers is exact
/// (`10^n` stays exact through n = 22).
pub fn exp10(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > MAX_LOG10 {
        return f64::INFINITY;
    }
    if x < MIN_LOG10 {
        return 0.0;
    }
    let n = libm::floor(x + 0.5);
    let f = x - n;
    pown(10.0, n as i32) * exp(f * core::f64::consts::LN_10)
}

/// `e^x - 1`, accurate near zero
///
/// Uses the inverse-factorial series on `|x| <= ln2/2` so the result keeps
/// full relative accuracy as `x -> 0`; defers to [`exp`] elsewhere.
pub fn expm1(x: f64) -> f64 {
    if fabs(x) <= 0.5 * core::f64::consts::LN_2 {
        x * polynomial(x, &EXPM1_P)
    } else {
        exp(x) - 1.0
    }
}

/// `2^x` (single precision)
pub fn exp2f(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x >= 128.0 {
        return f32::INFINITY;
    }
    if x < -150.0 {
        return 0.0;
    }
    let n0 = libm::floorf(x);
    let mut f = x - n0;
    let mut n = n0 as i32;
    if f > 0.5 {
        f -= 1.0;
        n += 1;
    }
    ldexp(1.0 + f * polynomial(f, &EXP2F_P), n)
}

/// `e^x` (single precision)
pub fn expf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x > MAX_LOGF {
        return f32::INFINITY;
    }
    if x < MIN_LOGF {
        return 0.0;
    }
    let n = libm::floorf(core::f32::consts::LOG2_E * x + 0.5);
    let r = (x - n * LN2F_HI) - n * LN2F_LO;
    let poly = 1.0 + r + r * r * polynomial(r, &EXPF_P);
    ldexp(poly, n as i32)
}

/// `10^x` (single precision)
pub fn exp10f(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x > MAX_LOG10F {
        return f32::INFINITY;
    }
    if x < MIN_LOG10F {
        return 0.0;
    }
    let n = libm::floorf(x + 0.5);
    let f = x - n;
    pownf(10.0, n as i32) * expf(f * core::f32::consts::LN_10)
}

/// `e^x - 1` (single precision), accurate near zero
pub fn expm1f(x: f32) -> f32 {
    if fabs(x) <= 0.5 * core::f32::consts::LN_2 {
        x * polynomial(x, &EXPM1F_P)
    } else {
        expf(x) - 1.0
    }
}
