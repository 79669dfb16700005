//! Logarithms: log2, log, log10, log1p
//!
#![allow(clippy::excessive_precision)]
//! The per-width log2 kernels are the engines; log and log10 are constant
//! multiples of log2, and log1p evaluates the kernel's rational core
//! directly for arguments already inside the reduction interval.
//!
//! # Algorithm: log2
//!
//! 1. `frexp` decomposition `x = m · 2^e`, `m ∈ [0.5, 1)`
//! 2. If `m < √½`, double `m` and decrement `e`, so `t = m - 1` lies in
//!    `[√½ - 1, √2 - 1]`
//! 3. `log(1+t) = t - t²/2 + t³·P(t)/Q(t)` (f64 rational) or
//!    `t - t²/2 + t³·P(t)` (f32 polynomial)
//! 4. Recombine with the exponent using the split constant
//!    `log2(e) - 1`, accumulating smallest terms first to keep the extra
//!    bits
//!
//! # Error Bounds
//!
//! - log2/log/log10: 1-2 ulp away from 1; absolute error near `x = 1` is
//!   bounded by the rational core (relative error can widen where the
//!   result crosses zero, as for every log implementation in this form)
//! - `log2` of exact powers of two is exact
//! - log1p keeps full relative accuracy as `x -> 0`

use crate::bits::frexp;
use crate::poly::{polynomial, rational};

// log2(e) - 1, exponent recombination split constant
const LOG2EA: f64 = 4.4269504088896340735992e-1;
const LOG2EAF: f32 = 0.44269504088896340736;

// log(1+t) = t - t²/2 + t³·P(t)/Q(t) on [√½ - 1, √2 - 1]
const LOG_P: [f64; 6] = [
    7.70838733755885391666e0,
    1.79368678507819816313e1,
    1.44989225341610930846e1,
    4.70579119878881725854e0,
    4.97494994976747001425e-1,
    1.01875663804580931796e-4,
];
const LOG_Q: [f64; 6] = [
    2.31251620126765340583e1,
    7.11544750618563894466e1,
    8.29875266912776603211e1,
    4.52279145837532221105e1,
    1.12873587189167450590e1,
    1.0,
];

// log(1+t) = t - t²/2 + t³·P(t) on [√½ - 1, √2 - 1]
const LOGF_P: [f32; 9] = [
    3.3333331174e-1,
    -2.4999993993e-1,
    2.0000714765e-1,
    -1.6668057665e-1,
    1.4249322787e-1,
    -1.2420140846e-1,
    1.1676998740e-1,
    -1.1514610310e-1,
    7.0376836292e-2,
];

/// `log2(x)`
///
/// Exact for powers of two. `log2(±0) = -inf`, negative arguments give
/// NaN, `log2(+inf) = +inf`; subnormal inputs are renormalized, never
/// flushed.
///
/// # Example
///
/// ```rust
/// assert_eq!(vega_math::log2(8.0), 3.0);
/// assert_eq!(vega_math::log2(0.0), f64::NEG_INFINITY);
/// assert!(vega_math::log2(-1.0).is_nan());
/// ```
pub fn log2(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x < 0.0 {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return x;
    }
    let (mut m, mut e) = frexp(x);
    if m < core::f64::consts::FRAC_1_SQRT_2 {
        m += m;
        e -= 1;
    }
    let t = m - 1.0;
    let z = t * t;
    let mut y = t * z * rational(t, &LOG_P, &LOG_Q);
    y -= 0.5 * z;
    // smallest terms first so the split constant keeps its extra bits
    let mut r = y * LOG2EA;
    r += t * LOG2EA;
    r += y;
    r += t;
    r += e as f64;
    r
}

/// Natural logarithm
pub fn log(x: f64) -> f64 {
    log2(x) * core::f64::consts::LN_2
}

/// `log10(x)`
pub fn log10(x: f64) -> f64 {
    log2(x) * core::f64::consts::LOG10_2
}

/// `log(1 + x)`, accurate near zero
///
/// Arguments inside the reduction interval `[√½ - 1, √2 - 1]` skip the
/// frexp round-trip entirely and feed the rational core with `t = x`, so
/// no precision is lost forming `1 + x`.
pub fn log1p(x: f64) -> f64 {
    let lo = core::f64::consts::FRAC_1_SQRT_2 - 1.0;
    let hi = core::f64::consts::SQRT_2 - 1.0;
    if x >= lo && x <= hi {
        let z = x * x;
        let y = x * z * rational(x, &LOG_P, &LOG_Q) - 0.5 * z;
        x + y
    } else {
        log(1.0 + x)
    }
}

/// `log2(x)` (single precision)
pub fn log2f(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x == 0.0 {
        return f32::NEG_INFINITY;
    }
    if x < 0.0 {
        return f32::NAN;
    }
    if x == f32::INFINITY {
        return x;
    }
    let (mut m, mut e) = frexp(x);
    if m < core::f32::consts::FRAC_1_SQRT_2 {
        m += m;
        e -= 1;
    }
    let t = m - 1.0;
    let z = t * t;
    let mut y = t * z * polynomial(t, &LOGF_P);
    y -= 0.5 * z;
    let mut r = y * LOG2EAF;
    r += t * LOG2EAF;
    r += y;
    r += t;
    r += e as f32;
    r
}

/// Natural logarithm (single precision)
pub fn logf(x: f32) -> f32 {
    log2f(x) * core::f32::consts::LN_2
}

/// `log10(x)` (single precision)
pub fn log10f(x: f32) -> f32 {
    log2f(x) * core::f32::consts::LOG10_2
}

/// `log(1 + x)` (single precision), accurate near zero
pub fn log1pf(x: f32) -> f32 {
    let lo = core::f32::consts::FRAC_1_SQRT_2 - 1.0;
    let hi = core::f32::consts::SQRT_2 - 1.0;
    if x >= lo && x <= hi {
        let z = x * x;
        let y = x * z * polynomial(x, &LOGF_P) - 0.5 * z;
        x + y
    } else {
        logf(1.0 + x)
    }
}
