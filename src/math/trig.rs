//! Circular functions: sin, cos, tan, sincos
//!
#![allow(clippy::excessive_precision)]
//! `sincos` is the engine: one quadrant reduction feeds both the sine
//! and cosine approximants, and `sin`/`cos` just pick a component.
//! `tan` shares the reduction but evaluates its own rational approximant
//! and reciprocates on odd quadrants.
//!
//! # Algorithm
//!
//! 1. `q = round(x · 2/π)` (round-to-nearest-even), quadrant `q mod 4`
//! 2. `r = x - q·(π/2)`, computed against a three-piece split of π/4 so
//!    the subtraction cancels exactly; `r ∈ [-π/4, π/4]`
//! 3. `sin(r) = r + r³·P(r²)`, `cos(r) = 1 - r²/2 + r⁴·C(r²)`
//! 4. Rotate by quadrant: 0 → `(sr, cr)`, 1 → `(cr, -sr)`,
//!    2 → `(-sr, -cr)`, 3 → `(-cr, sr)`
//!
//! The three-piece reduction holds to about `2^30` (f64) and `8192·π`
//! (f32); past that the residual carries no significant bits and the
//! functions return the Cephes convention `sin = 0`, `cos = 1`, `tan = 0`
//! rather than noise.
//!
//! # Error Bounds
//!
//! - sin/cos/sincos: < 2 ulp inside the reduction range
//! - tan: < 3 ulp away from odd multiples of π/2
//!
//! # Example
//!
//! ```rust
//! let (s, c) = vega_math::sincos(core::f64::consts::FRAC_PI_2);
//! assert!((s - 1.0).abs() < 1e-15);
//! assert!(c.abs() < 1e-15);
//! ```

use crate::bits::fabs;
use crate::poly::{polynomial, rational};

// Three-piece split of π/4; the sum is π/4 to beyond double precision
// and each piece has trailing zero bits so q·piece stays exact.
const DP1: f64 = 7.85398125648498535156e-1;
const DP2: f64 = 3.77489470793079817668e-8;
const DP3: f64 = 2.69515142907905952645e-15;

const DP1F: f32 = 0.78515625;
const DP2F: f32 = 2.4187564849853515625e-4;
const DP3F: f32 = 3.77489497744594108e-8;

// sin(r) = r + r³·P(r²) on [-π/4, π/4]
const SIN_P: [f64; 6] = [
    -1.66666666666666307295e-1,
    8.33333333332211858878e-3,
    -1.98412698295895385996e-4,
    2.75573136213857245213e-6,
    -2.50507477628578072866e-8,
    1.58962301576546568060e-10,
];

// cos(r) = 1 - r²/2 + r⁴·C(r²) on [-π/4, π/4]
const COS_P: [f64; 6] = [
    4.16666666666665929218e-2,
    -1.38888888888730564116e-3,
    2.48015872888517179954e-5,
    -2.75573141792967388112e-7,
    2.08757008419747316778e-9,
    -1.13585365213876817300e-11,
];

// tan(r) = r + r³·P(r²)/Q(r²) on [-π/4, π/4]
const TAN_P: [f64; 3] = [
    -1.79565251976484877988e7,
    1.15351664838587416140e6,
    -1.30936939181383777646e4,
];
const TAN_Q: [f64; 5] = [
    -5.38695755929454629881e7,
    2.50083801823357915839e7,
    -1.32089234440210967447e6,
    1.36812963470692954678e4,
    1.0,
];

const SINF_P: [f32; 3] = [-1.6666654611e-1, 8.3321608736e-3, -1.9515295891e-4];
const COSF_P: [f32; 3] = [4.166664568298827e-2, -1.388731625493765e-3, 2.443315711809948e-5];
const TANF_P: [f32; 6] = [
    3.33331568548e-1,
    1.33387994085e-1,
    5.34112807005e-2,
    2.44301354525e-2,
    3.11992232697e-3,
    9.38540185543e-3,
];

// below this sin(x) and tan(x) round to x, cos(x) to 1
const TINY: f64 = 7.450580596923828125e-9; // 2^-27
const TINYF: f32 = 1.220703125e-4; // 2^-13

// reduction runs out of bits past here
const LOSS: f64 = 1.073741824e9; // 2^30
const LOSSF: f32 = 25735.926; // 8192·π

/// Shared quadrant reduction: returns the residual in `[-π/4, π/4]` and
/// the quadrant index `round(x·2/π) mod 4`.
#[inline(always)]
fn reduce(x: f64) -> (f64, i64) {
    let q = libm::rint(x * core::f64::consts::FRAC_2_PI);
    // dq·(π/4 pieces) = q·(π/2); doubling q is exact
    let dq = 2.0 * q;
    let r = ((x - dq * DP1) - dq * DP2) - dq * DP3;
    (r, (q as i64) & 3)
}

#[inline(always)]
fn reducef(x: f32) -> (f32, i32) {
    let q = libm::rintf(x * core::f32::consts::FRAC_2_PI);
    let dq = 2.0 * q;
    let r = ((x - dq * DP1F) - dq * DP2F) - dq * DP3F;
    (r, (q as i32) & 3)
}

#[inline(always)]
fn sin_core(z: f64, r: f64) -> f64 {
    r + r * z * polynomial(z, &SIN_P)
}

#[inline(always)]
fn cos_core(z: f64) -> f64 {
    1.0 - 0.5 * z + z * z * polynomial(z, &COS_P)
}

/// Simultaneous `(sin(x), cos(x))`
///
/// One reduction serves both components, so this is cheaper than two
/// separate calls whenever both values are needed.
///
/// # Example
///
/// ```rust
/// let (s, c) = vega_math::sincos(1.0);
/// assert!((s * s + c * c - 1.0).abs() < 1e-15);
/// ```
pub fn sincos(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (x, x);
    }
    if x.is_infinite() {
        return (f64::NAN, f64::NAN);
    }
    let ax = fabs(x);
    if ax < TINY {
        return (x, 1.0);
    }
    if ax > LOSS {
        return (0.0, 1.0);
    }
    let (r, q) = reduce(x);
    let z = r * r;
    let sr = sin_core(z, r);
    let cr = cos_core(z);
    match q {
        0 => (sr, cr),
        1 => (cr, -sr),
        2 => (-sr, -cr),
        _ => (-cr, sr),
    }
}

/// `sin(x)`
///
/// `sin(±0) = ±0`; infinities give NaN.
pub fn sin(x: f64) -> f64 {
    sincos(x).0
}

/// `cos(x)`
pub fn cos(x: f64) -> f64 {
    sincos(x).1
}

/// `tan(x)`
///
/// Odd quadrants reciprocate the approximant, so values near odd
/// multiples of π/2 grow as large as the reduction residual allows
/// instead of overflowing.
pub fn tan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f64::NAN;
    }
    let ax = fabs(x);
    if ax < TINY {
        return x;
    }
    if ax > LOSS {
        return 0.0;
    }
    let (r, q) = reduce(x);
    let z = r * r;
    let y = if z > 1.0e-14 {
        r + r * z * rational(z, &TAN_P, &TAN_Q)
    } else {
        r
    };
    if (q & 1) != 0 {
        -1.0 / y
    } else {
        y
    }
}

/// Simultaneous `(sin(x), cos(x))` (single precision)
pub fn sincosf(x: f32) -> (f32, f32) {
    if x.is_nan() {
        return (x, x);
    }
    if x.is_infinite() {
        return (f32::NAN, f32::NAN);
    }
    let ax = fabs(x);
    if ax < TINYF {
        return (x, 1.0);
    }
    if ax > LOSSF {
        return (0.0, 1.0);
    }
    let (r, q) = reducef(x);
    let z = r * r;
    let sr = r + r * z * polynomial(z, &SINF_P);
    let cr = 1.0 - 0.5 * z + z * z * polynomial(z, &COSF_P);
    match q {
        0 => (sr, cr),
        1 => (cr, -sr),
        2 => (-sr, -cr),
        _ => (-cr, sr),
    }
}

/// `sin(x)` (single precision)
pub fn sinf(x: f32) -> f32 {
    sincosf(x).0
}

/// `cos(x)` (single precision)
pub fn cosf(x: f32) -> f32 {
    sincosf(x).1
}

/// `tan(x)` (single precision)
pub fn tanf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f32::NAN;
    }
    let ax = fabs(x);
    if ax < TINYF {
        return x;
    }
    if ax > LOSSF {
        return 0.0;
    }
    let (r, q) = reducef(x);
    let z = r * r;
    let y = if z > 1.0e-8 {
        r + r * z * polynomial(z, &TANF_P)
    } else {
        r
    };
    if (q & 1) != 0 {
        -1.0 / y
    } else {
        y
    }
}
