//! Inverse circular functions: atan, atan2, asin, acos
//!
#![allow(clippy::excessive_precision)]
//! `atan` is the engine. The argument is folded into `[0, tan(π/8)]`
//! (f32) or `[0, 0.66]` (f64) through at most one reciprocal and one
//! Möbius transform, a single rational (f64) or polynomial (f32)
//! approximant covers the folded interval, and the unfolding adds the
//! corresponding multiple of π with its low-order bits carried
//! separately. `atan2`, `asin` and `acos` are compositions of `atan`
//! with the IEEE quadrant/domain rules layered on top.
//!
//! # Algorithm: atan (f64)
//!
//! 1. `a = |x|`
//! 2. `a > tan(3π/8)`: `atan(a) = π/2 + atan(-1/a)`
//! 3. `a > 0.66`: `atan(a) = π/4 + atan((a-1)/(a+1))`
//! 4. folded `w`: `atan(w) = w + w³·P(w²)/Q(w²)`
//! 5. restore the sign with `copysign`
//!
//! # Error Bounds
//!
//! - atan/atan2: < 2 ulp
//! - asin/acos: < 3 ulp away from the domain endpoints (the `sqrt`
//!   transform is evaluated as `(1-x)·(1+x)`, which stays exact where
//!   `1-x²` would cancel)

use crate::bits::{copysign, fabs};
use crate::poly::{polynomial, rational};

// tan(3π/8)
const T3P8: f64 = 2.41421356237309504880;
// low-order bits of π/2
const MOREBITS: f64 = 6.123233995736765886130e-17;
const THREE_QUARTER_PI: f64 = 2.35619449019234492885;

// atan(w) = w + w³·P(w²)/Q(w²) on the folded interval
const ATAN_P: [f64; 5] = [
    -6.485021904942025371773e1,
    -1.228866684490136173410e2,
    -7.500855792314704667340e1,
    -1.615753718733365076637e1,
    -8.750608600031904122785e-1,
];
const ATAN_Q: [f64; 6] = [
    1.945506571482613964425e2,
    4.853903996359136964868e2,
    4.328810604912902668951e2,
    1.650270098316988542046e2,
    2.485846490142306297962e1,
    1.0,
];

// tan(3π/8) and tan(π/8) fold points, atan(w) = w + w³·P(w²)
const T3P8F: f32 = 2.414213562373095;
const TP8F: f32 = 0.4142135623730950;
const THREE_QUARTER_PI_F: f32 = 2.35619449019234492885;

const ATANF_P: [f32; 4] = [
    -3.33329491539e-1,
    1.99777106478e-1,
    -1.38776856032e-1,
    8.05374449538e-2,
];

/// `atan(x)`
///
/// `atan(±0) = ±0`, `atan(±inf) = ±π/2`.
///
/// # Example
///
/// ```rust
/// let y = vega_math::atan(1.0);
/// assert!((y - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    let r = if a == f64::INFINITY {
        core::f64::consts::FRAC_PI_2
    } else if a > T3P8 {
        let w = -1.0 / a;
        let z = w * w;
        // MOREBITS must join the small sum first; folded into π/2 it would
        // round away below half an ulp
        core::f64::consts::FRAC_PI_2 + (w + w * z * rational(z, &ATAN_P, &ATAN_Q) + MOREBITS)
    } else if a > 0.66 {
        let w = (a - 1.0) / (a + 1.0);
        let z = w * w;
        core::f64::consts::FRAC_PI_4 + (w + w * z * rational(z, &ATAN_P, &ATAN_Q) + 0.5 * MOREBITS)
    } else {
        let z = a * a;
        a + a * z * rational(z, &ATAN_P, &ATAN_Q)
    };
    copysign(r, x)
}

/// `atan(y/x)` resolved to the correct quadrant
///
/// Follows the IEEE-754 special-value table: signed zeros select between
/// `±0` and `±π`, infinities land on the diagonal multiples of π/4.
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    if y == 0.0 {
        // sign of zero decides between the x-axis rays
        return if x.is_sign_negative() {
            copysign(core::f64::consts::PI, y)
        } else {
            y
        };
    }
    if x == 0.0 {
        return copysign(core::f64::consts::FRAC_PI_2, y);
    }
    if x.is_infinite() {
        return if y.is_infinite() {
            if x > 0.0 {
                copysign(core::f64::consts::FRAC_PI_4, y)
            } else {
                copysign(THREE_QUARTER_PI, y)
            }
        } else if x > 0.0 {
            copysign(0.0, y)
        } else {
            copysign(core::f64::consts::PI, y)
        };
    }
    if y.is_infinite() {
        return copysign(core::f64::consts::FRAC_PI_2, y);
    }
    let z = atan(y / x);
    if x > 0.0 {
        z
    } else {
        z + copysign(core::f64::consts::PI, y)
    }
}

/// `asin(x)` for `x ∈ [-1, 1]`; outside the domain returns NaN
///
/// Built on `atan(x / √((1-x)(1+x)))`; the endpoints fall out of the
/// division (`±1 → ±∞ → ±π/2`) without special cases.
pub fn asin(x: f64) -> f64 {
    if fabs(x) > 1.0 {
        return f64::NAN;
    }
    atan(x / libm::sqrt((1.0 - x) * (1.0 + x)))
}

/// `acos(x)` for `x ∈ [-1, 1]`; outside the domain returns NaN
pub fn acos(x: f64) -> f64 {
    if fabs(x) > 1.0 {
        return f64::NAN;
    }
    let z = atan(libm::sqrt((1.0 - x) * (1.0 + x)) / x);
    if x.is_sign_negative() {
        z + core::f64::consts::PI
    } else {
        z
    }
}

/// `atan(x)` (single precision)
pub fn atanf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    let r = if a == f32::INFINITY {
        core::f32::consts::FRAC_PI_2
    } else if a > T3P8F {
        let w = -1.0 / a;
        let z = w * w;
        core::f32::consts::FRAC_PI_2 + (w + w * z * polynomial(z, &ATANF_P))
    } else if a > TP8F {
        let w = (a - 1.0) / (a + 1.0);
        let z = w * w;
        core::f32::consts::FRAC_PI_4 + (w + w * z * polynomial(z, &ATANF_P))
    } else {
        let z = a * a;
        a + a * z * polynomial(z, &ATANF_P)
    };
    copysign(r, x)
}

/// `atan(y/x)` resolved to the correct quadrant (single precision)
pub fn atan2f(y: f32, x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    if y == 0.0 {
        return if x.is_sign_negative() {
            copysign(core::f32::consts::PI, y)
        } else {
            y
        };
    }
    if x == 0.0 {
        return copysign(core::f32::consts::FRAC_PI_2, y);
    }
    if x.is_infinite() {
        return if y.is_infinite() {
            if x > 0.0 {
                copysign(core::f32::consts::FRAC_PI_4, y)
            } else {
                copysign(THREE_QUARTER_PI_F, y)
            }
        } else if x > 0.0 {
            copysign(0.0, y)
        } else {
            copysign(core::f32::consts::PI, y)
        };
    }
    if y.is_infinite() {
        return copysign(core::f32::consts::FRAC_PI_2, y);
    }
    let z = atanf(y / x);
    if x > 0.0 {
        z
    } else {
        z + copysign(core::f32::consts::PI, y)
    }
}

/// `asin(x)` (single precision)
pub fn asinf(x: f32) -> f32 {
    if fabs(x) > 1.0 {
        return f32::NAN;
    }
    atanf(x / libm::sqrtf((1.0 - x) * (1.0 + x)))
}

/// `acos(x)` (single precision)
pub fn acosf(x: f32) -> f32 {
    if fabs(x) > 1.0 {
        return f32::NAN;
    }
    let z = atanf(libm::sqrtf((1.0 - x) * (1.0 + x)) / x);
    if x.is_sign_negative() {
        z + core::f32::consts::PI
    } else {
        z
    }
}
