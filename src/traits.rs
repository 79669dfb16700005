//! Width-generic float abstraction traits
//!
//! This module defines the `Float`/`FloatBits` trait pair that ties the f32
//! and f64 kernels to their raw IEEE 754 representations. The bit-view
//! primitives, the polynomial evaluators, and the array utilities are written
//! once against these traits; the per-width engines in [`crate::math`] use
//! them through the concrete types.
//!
//! The traits expose exactly what the kernels need: bit casts, the IEEE
//! field layout, and a handful of exact constants. Everything else
//! (rounding, sqrt) stays per-width via libm.

use core::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Shl, Shr, Sub};

/// Unsigned integer view of a float's storage
///
/// Implemented by `u32` (for `f32`) and `u64` (for `f64`). Field values that
/// fit in 32 bits (exponent fields, shift counts) travel as `u32` through
/// [`FloatBits::from_u32`] and [`FloatBits::to_u32`].
pub trait FloatBits:
    Copy
    + PartialEq
    + PartialOrd
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// All-zeros pattern
    const ZERO: Self;

    /// Low-bit pattern, the seed for subnormal construction shifts
    const ONE: Self;

    /// Widen a small field value into the bit type
    fn from_u32(value: u32) -> Self;

    /// Truncate to `u32`; callers mask fields into range first
    fn to_u32(self) -> u32;
}

impl FloatBits for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value
    }

    #[inline(always)]
    fn to_u32(self) -> u32 {
        self
    }
}

impl FloatBits for u64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        value as u64
    }

    #[inline(always)]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

/// IEEE 754 binary float with bit-level access
///
/// The layout constants describe the standard sign/exponent/mantissa
/// partition; the exponent-range constants are the unbiased base-2 exponents
/// at which [`crate::bits::exp2n`] transitions between normal, subnormal,
/// and over/underflowed results.
///
/// # Example
///
/// ```rust
/// use vega_math::Float;
///
/// let bits = Float::to_bits(-0.0f64);
/// assert_eq!(bits, f64::SIGN_MASK);
/// assert_eq!(f64::EXP_MAX, 1023);
/// assert_eq!(f32::EXP_MIN_SUBNORMAL, -149);
/// ```
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Raw storage type of the same width
    type Bits: FloatBits;

    /// Total storage width in bits
    const BITS: u32;

    /// Mantissa field width in bits (23 or 52)
    const MANTISSA_BITS: u32;

    /// Exponent bias (127 or 1023)
    const EXPONENT_BIAS: i32;

    /// All-ones exponent field value (infinities and NaNs)
    const EXPONENT_RAW_MAX: u32;

    /// Largest base-2 exponent with a normal representation (127 or 1023)
    const EXP_MAX: i32;

    /// Smallest base-2 exponent with a normal representation (-126 or -1022)
    const EXP_MIN: i32;

    /// Smallest representable base-2 exponent, the last subnormal
    /// (-149 or -1074)
    const EXP_MIN_SUBNORMAL: i32;

    /// Sign-bit mask
    const SIGN_MASK: Self::Bits;

    /// Mantissa-field mask
    const MANTISSA_MASK: Self::Bits;

    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Positive infinity
    const INFINITY: Self;

    /// `2^BITS`, the exact scale that renormalizes any subnormal
    const RENORM: Self;

    /// Reinterpret the value as raw bits
    fn to_bits(self) -> Self::Bits;

    /// Reinterpret raw bits as a value
    fn from_bits(bits: Self::Bits) -> Self;
}

impl Float for f32 {
    type Bits = u32;

    const BITS: u32 = 32;
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BIAS: i32 = 127;
    const EXPONENT_RAW_MAX: u32 = 0xff;
    const EXP_MAX: i32 = 127;
    const EXP_MIN: i32 = -126;
    const EXP_MIN_SUBNORMAL: i32 = -149;
    const SIGN_MASK: u32 = 0x8000_0000;
    const MANTISSA_MASK: u32 = 0x007f_ffff;
    const ZERO: f32 = 0.0;
    const ONE: f32 = 1.0;
    const INFINITY: f32 = f32::INFINITY;
    const RENORM: f32 = 4_294_967_296.0; // 2^32

    #[inline(always)]
    fn to_bits(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> f32 {
        f32::from_bits(bits)
    }
}

impl Float for f64 {
    type Bits = u64;

    const BITS: u32 = 64;
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BIAS: i32 = 1023;
    const EXPONENT_RAW_MAX: u32 = 0x7ff;
    const EXP_MAX: i32 = 1023;
    const EXP_MIN: i32 = -1022;
    const EXP_MIN_SUBNORMAL: i32 = -1074;
    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const INFINITY: f64 = f64::INFINITY;
    const RENORM: f64 = 18_446_744_073_709_551_616.0; // 2^64

    #[inline(always)]
    fn to_bits(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> f64 {
        f64::from_bits(bits)
    }
}
