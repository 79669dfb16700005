//! Elementary-function engines
//!
//! One module per function family. Each family pairs a range reduction
//! with fixed minimax coefficient tables and exists twice, once per
//! floating-point width, with the single-precision entry points carrying
//! an `f` suffix.
//!
//! # Modules
//!
//! - `exp`: exp2 engine plus exp, exp10, expm1
//! - `log`: log2 engine plus log, log10, log1p
//! - `trig`: sin, cos, tan, sincos
//! - `atan`: atan engine plus atan2, asin, acos
//! - `hyper`: sinh/cosh/tanh and asinh/acosh/atanh
//! - `erf`: erf and erfc
//! - `cbrt`: cube root
//! - `pow`: pow and integer-exponent pown
//!
//! # Example
//!
//! ```rust
//! use vega_math::{exp2, log2, sincos};
//!
//! assert_eq!(exp2(3.0), 8.0);
//! assert_eq!(log2(8.0), 3.0);
//! let (s, c) = sincos(0.0);
//! assert_eq!((s, c), (0.0, 1.0));
//! ```

pub mod atan;
pub mod cbrt;
pub mod erf;
pub mod exp;
pub mod hyper;
pub mod log;
pub mod pow;
pub mod trig;

pub use self::atan::{acos, acosf, asin, asinf, atan, atan2, atan2f, atanf};
pub use self::cbrt::{cbrt, cbrtf};
pub use self::erf::{erf, erfc, erfcf, erff};
pub use self::exp::{exp, exp10, exp10f, exp2, exp2f, expf, expm1, expm1f};
pub use self::hyper::{
    acosh, acoshf, asinh, asinhf, atanh, atanhf, cosh, coshf, sinh, sinhf, tanh, tanhf,
};
pub use self::log::{log, log10, log10f, log1p, log1pf, log2, log2f, logf};
pub use self::pow::{pow, powf, pown, pownf};
pub use self::trig::{cos, cosf, sin, sincos, sincosf, sinf, tan, tanf};
