//! Cube root
//!
#![allow(clippy::excessive_precision)]
//! `frexp` reduces `|x|` to a mantissa in `[0.5, 1)` plus an exponent;
//! the exponent splits into a multiple of three (handled by `ldexp`) and
//! a remainder (handled by a constant factor `∛2` or `∛4`). On the
//! mantissa a quadratic seed interpolating `∛m` at `m = 0.5, 0.75, 1`
//! starts two Halley iterations, whose cubic convergence takes the seed's
//! ~1e-3 relative error below an ulp.
//!
//! # Error Bounds
//!
//! - < 2 ulp over the full range, subnormals included (`frexp`
//!   renormalizes before reduction)
//! - exactly odd: `cbrt(-x) == -cbrt(x)` bit for bit
//!
//! # Example
//!
//! ```rust
//! assert!((vega_math::cbrt(27.0) - 3.0).abs() < 1e-14);
//! assert_eq!(vega_math::cbrt(-8.0), -vega_math::cbrt(8.0));
//! ```

use crate::bits::{copysign, fabs, frexp, ldexp};

const CBRT2: f64 = 1.2599210498948731648;
const CBRT4: f64 = 1.5874010519681994748;
const CBRT2F: f32 = 1.25992104989;
const CBRT4F: f32 = 1.58740105197;

// quadratic through ∛m at m = 0.5, 0.75, 1.0
const SEED_A: f64 = -0.1873608;
const SEED_B: f64 = 0.6936402;
const SEED_C: f64 = 0.4937206;

#[inline(always)]
fn halley(m: f64, mut y: f64, steps: u32) -> f64 {
    for _ in 0..steps {
        let y3 = y * y * y;
        y = y * (y3 + 2.0 * m) / (2.0 * y3 + m);
    }
    y
}

/// `cbrt(x)`, defined for every real including negatives
pub fn cbrt(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let (m, e) = frexp(fabs(x));
    let e3 = e.div_euclid(3);
    let r = e.rem_euclid(3);
    let seed = (SEED_A * m + SEED_B) * m + SEED_C;
    let mut y = halley(m, seed, 2);
    y = match r {
        0 => y,
        1 => y * CBRT2,
        _ => y * CBRT4,
    };
    copysign(ldexp(y, e3), x)
}

/// `cbrt(x)` (single precision)
pub fn cbrtf(x: f32) -> f32 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let (m, e) = frexp(fabs(x));
    let e3 = e.div_euclid(3);
    let r = e.rem_euclid(3);
    // seed in f64 precision costs nothing here and one Halley step
    // finishes the job
    let seed = (SEED_A * m as f64 + SEED_B) * m as f64 + SEED_C;
    let mut y = halley(m as f64, seed, 1) as f32;
    y = match r {
        0 => y,
        1 => y * CBRT2F,
        _ => y * CBRT4F,
    };
    copysign(ldexp(y, e3), x)
}
