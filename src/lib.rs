#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! vega-math: self-contained elementary functions over IEEE-754 bit
//! manipulation
//!
//! Every transcendental here is built from three layers that only ever
//! call downward:
//!
//! - [`traits`] + [`bits`]: the bit-view primitives (`fabs`, `sign`,
//!   `copysign`, `frexp`, `exp2n`, `ldexp`) over a width-generic
//!   [`Float`] trait
//! - [`poly`]: slice-driven Horner polynomial and rational evaluators
//! - [`math`]: the range-reduction engines and their compositions, one
//!   module per function family, each in both widths (`exp2`/`exp2f`,
//!   `log2`/`log2f`, ...)
//!
//! [`array`] adds the small buffer utilities (elementwise arithmetic,
//! extrema scans, sorted search/merge) that callers typically want next
//! to the scalar functions.
//!
//! # Quick Start
//!
//! ```rust
//! use vega_math::{exp2, frexp, ldexp, log2, sincos};
//!
//! assert_eq!(exp2(10.0), 1024.0);
//! assert_eq!(log2(1024.0), 10.0);
//!
//! let (m, e) = frexp(6.0);
//! assert_eq!((m, e), (0.75, 3));
//! assert_eq!(ldexp(m, e), 6.0);
//!
//! let (s, c) = sincos(core::f64::consts::FRAC_PI_2);
//! assert!((s - 1.0).abs() < 1e-15 && c.abs() < 1e-15);
//! ```

// floor/rint/trunc/sqrt plus the reference oracles used by the tests
extern crate libm;

#[cfg(test)]
extern crate std;

// Width-generic float abstraction
pub mod traits;

// Bit-view primitives
pub mod bits;

// Horner polynomial and rational evaluators
pub mod poly;

// Elementary-function engines
pub mod math;

// Buffer utilities
pub mod array;

// Public re-exports for convenience
pub use bits::{copysign, exp2n, fabs, frexp, ldexp, sign};
pub use poly::{polynomial, rational};
pub use traits::{Float, FloatBits};

pub use math::{
    acos, acosf, acosh, acoshf, asin, asinf, asinh, asinhf, atan, atan2, atan2f, atanf, atanh,
    atanhf, cbrt, cbrtf, cos, cosf, cosh, coshf, erf, erfc, erfcf, erff, exp, exp10, exp10f, exp2,
    exp2f, expf, expm1, expm1f, log, log10, log10f, log1p, log1pf, log2, log2f, logf, pow, powf,
    pown, pownf, sin, sincos, sincosf, sinf, sinh, sinhf, tan, tanf, tanh, tanhf,
};
