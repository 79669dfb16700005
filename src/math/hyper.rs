//! Hyperbolic functions and their inverses
//!
#![allow(clippy::excessive_precision)]
//! All twelve functions are compositions of the exponential and
//! logarithmic engines; the work here is choosing the composition that
//! stays well-conditioned. `expm1`/`log1p` carry the small-argument
//! cases, `(1-x)(1+x)`-style factorings avoid cancellation, and the
//! large-argument cases split `exp(x)` into two half-sized factors so
//! the result overflows exactly where sinh/cosh do.
//!
//! # Error Bounds
//!
//! - sinh/cosh/tanh: < 3 ulp
//! - asinh/acosh/atanh: < 3 ulp away from the acosh endpoint `x = 1`
//!
//! # Example
//!
//! ```rust
//! let x = 0.75;
//! assert!((vega_math::tanh(x) - vega_math::sinh(x) / vega_math::cosh(x)).abs() < 1e-15);
//! assert!((vega_math::asinh(vega_math::sinh(x)) - x).abs() < 1e-15);
//! ```

use crate::bits::{copysign, fabs};
use crate::math::exp::{exp, expf, expm1, expm1f};
use crate::math::log::{log, log1p, log1pf, logf};

// exp(a) stays finite below this; above it sinh/cosh go through
// exp(a/2) squared so they overflow at ln(2·MAX), not ln(MAX)
const HALF_PATH: f64 = 709.0;
const HALF_PATH_F: f32 = 88.0;

// 2·exp(-2a) is below half an ulp of 1 past this
const TANH_SAT: f64 = 19.061547465398497;
const TANH_SAT_F: f32 = 9.010913347279288;

// a² + 1 rounds to a² past this (2^27 for f64, 2^12 for f32)
const ASINH_BIG: f64 = 134217728.0;
const ASINH_BIG_F: f32 = 4096.0;

/// `sinh(x)`
///
/// Overflows to `±inf` only past `ln(2·MAX) ≈ 710.476`, the true
/// overflow point, because the large-argument path squares `exp(x/2)`.
pub fn sinh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    let r = if a > HALF_PATH {
        let h = exp(0.5 * a);
        (0.5 * h) * h
    } else {
        let u = expm1(a);
        0.5 * (u + u / (u + 1.0))
    };
    copysign(r, x)
}

/// `cosh(x)`
pub fn cosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    if a > HALF_PATH {
        let h = exp(0.5 * a);
        (0.5 * h) * h
    } else {
        let u = exp(a);
        0.5 * (u + 1.0 / u)
    }
}

/// `tanh(x)`
///
/// Saturates to exactly `±1` once `|x|` is large enough that the true
/// value rounds there.
pub fn tanh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    let r = if a > TANH_SAT {
        1.0
    } else {
        let u = expm1(2.0 * a);
        u / (u + 2.0)
    };
    copysign(r, x)
}

/// `asinh(x)`
pub fn asinh(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return x;
    }
    let a = fabs(x);
    let r = if a > ASINH_BIG {
        log(a) + core::f64::consts::LN_2
    } else if a <= 1.0 {
        let t = a * a;
        log1p(a + t / (1.0 + libm::sqrt(1.0 + t)))
    } else {
        log(a + libm::sqrt(a * a + 1.0))
    };
    copysign(r, x)
}

/// `acosh(x)` for `x ≥ 1`; below the domain returns NaN
pub fn acosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x < 1.0 {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return x;
    }
    if x > ASINH_BIG {
        log(x) + core::f64::consts::LN_2
    } else {
        let t = x - 1.0;
        log1p(t + libm::sqrt(t * (t + 2.0)))
    }
}

/// `atanh(x)` for `x ∈ (-1, 1)`; `±1` give `±inf`, outside is NaN
pub fn atanh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    if a > 1.0 {
        return f64::NAN;
    }
    let r = 0.5 * log1p(2.0 * a / (1.0 - a));
    copysign(r, x)
}

/// `sinh(x)` (single precision)
pub fn sinhf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    let r = if a > HALF_PATH_F {
        let h = expf(0.5 * a);
        (0.5 * h) * h
    } else {
        let u = expm1f(a);
        0.5 * (u + u / (u + 1.0))
    };
    copysign(r, x)
}

/// `cosh(x)` (single precision)
pub fn coshf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    if a > HALF_PATH_F {
        let h = expf(0.5 * a);
        (0.5 * h) * h
    } else {
        let u = expf(a);
        0.5 * (u + 1.0 / u)
    }
}

/// `tanh(x)` (single precision)
pub fn tanhf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    let r = if a > TANH_SAT_F {
        1.0
    } else {
        let u = expm1f(2.0 * a);
        u / (u + 2.0)
    };
    copysign(r, x)
}

/// `asinh(x)` (single precision)
pub fn asinhf(x: f32) -> f32 {
    if x.is_nan() || x.is_infinite() {
        return x;
    }
    let a = fabs(x);
    let r = if a > ASINH_BIG_F {
        logf(a) + core::f32::consts::LN_2
    } else if a <= 1.0 {
        let t = a * a;
        log1pf(a + t / (1.0 + libm::sqrtf(1.0 + t)))
    } else {
        logf(a + libm::sqrtf(a * a + 1.0))
    };
    copysign(r, x)
}

/// `acosh(x)` (single precision)
pub fn acoshf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x < 1.0 {
        return f32::NAN;
    }
    if x == f32::INFINITY {
        return x;
    }
    if x > ASINH_BIG_F {
        logf(x) + core::f32::consts::LN_2
    } else {
        let t = x - 1.0;
        log1pf(t + libm::sqrtf(t * (t + 2.0)))
    }
}

/// `atanh(x)` (single precision)
pub fn atanhf(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    let a = fabs(x);
    if a > 1.0 {
        return f32::NAN;
    }
    let r = 0.5 * log1pf(2.0 * a / (1.0 - a));
    copysign(r, x)
}
