//! Accuracy tests for every function family against libm references
//!
//! Each sweep compares a family over its working domain with tolerances far
//! above the measured worst-case error but tight enough to catch a wrong
//! coefficient, a misplaced fold threshold, or a broken reduction.

use vega_math::{
    acos, acosf, acosh, acoshf, asin, asinf, asinh, asinhf, atan, atan2, atan2f, atanf, atanh,
    atanhf, cbrt, cbrtf, cos, cosf, cosh, coshf, erf, erfc, erfcf, erff, exp, exp10, exp10f, exp2,
    exp2f, expf, expm1, expm1f, log, log10, log10f, log1p, log1pf, log2, log2f, logf, pow, powf,
    pown, pownf, sin, sinf, sinh, sinhf, tan, tanf, tanh, tanhf,
};


#[cfg(test)]
use test_utils::*;

/// Evenly spaced sweep over `[lo, hi]` with `n + 1` points
fn linspace(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| lo + (hi - lo) * (i as f64) / (n as f64))
}

fn linspace_f32(lo: f32, hi: f32, n: usize) -> impl Iterator<Item = f32> {
    (0..=n).map(move |i| lo + (hi - lo) * (i as f32) / (n as f32))
}

/// Log-spaced positive sweep: `2^t` for `t` in `[lo_exp, hi_exp]`
fn logspace(lo_exp: f64, hi_exp: f64, n: usize) -> impl Iterator<Item = f64> {
    linspace(lo_exp, hi_exp, n).map(libm::exp2)
}

// ============================================================================
// Exponentials
// ============================================================================

#[test]
fn test_exp_accuracy() {
    for x in linspace(-700.0, 700.0, 4000) {
        assert_approx_eq(exp(x), ref_exp(x), &format!("exp({})", x));
    }
    assert_eq!(exp(0.0), 1.0);
    assert_approx_eq(exp(1.0), core::f64::consts::E, "exp(1)");
}

#[test]
fn test_exp2_accuracy() {
    for x in linspace(-1000.0, 1000.0, 4000) {
        assert_approx_eq(exp2(x), ref_exp2(x), &format!("exp2({})", x));
    }
    assert_approx_eq(exp2(0.5), core::f64::consts::SQRT_2, "exp2(0.5)");
}

#[test]
fn test_exp10_accuracy() {
    for x in linspace(-300.0, 300.0, 4000) {
        assert_approx_eq(exp10(x), ref_exp10(x), &format!("exp10({})", x));
    }
    // 10^n is representable exactly through n = 22
    let mut decade = 1.0;
    for n in 0..=22 {
        assert_eq!(exp10(n as f64), decade, "exp10({})", n);
        decade *= 10.0;
    }
}

#[test]
fn test_expm1_accuracy() {
    // the series region, where expm1 must hold relative accuracy near zero
    for x in linspace(-0.34, 0.34, 4000) {
        assert_approx_eq(expm1(x), ref_expm1(x), &format!("expm1({})", x));
    }
    for x in linspace(-30.0, 30.0, 2000) {
        assert_approx_eq(expm1(x), ref_expm1(x), &format!("expm1({})", x));
    }
}

#[test]
fn test_exp_accuracy_f32() {
    for x in linspace_f32(-87.0, 87.0, 2000) {
        assert_approx_eq_f32(expf(x), ref_expf(x), &format!("expf({})", x));
    }
    for x in linspace_f32(-125.0, 125.0, 2000) {
        assert_approx_eq_f32(exp2f(x), ref_exp2f(x), &format!("exp2f({})", x));
    }
    for x in linspace_f32(-37.0, 37.0, 2000) {
        assert_approx_eq_f32(exp10f(x), ref_exp10f(x), &format!("exp10f({})", x));
    }
    for x in linspace_f32(-0.34, 0.34, 2000) {
        assert_approx_eq_f32(expm1f(x), ref_expm1f(x), &format!("expm1f({})", x));
    }
    for x in linspace_f32(-15.0, 15.0, 2000) {
        assert_approx_eq_f32(expm1f(x), ref_expm1f(x), &format!("expm1f({})", x));
    }
}

// ============================================================================
// Logarithms
// ============================================================================

#[test]
fn test_log_accuracy() {
    for x in logspace(-1000.0, 1000.0, 4000) {
        assert_approx_eq(log(x), ref_log(x), &format!("log({})", x));
    }
    assert_eq!(log(1.0), 0.0);
}

#[test]
fn test_log2_accuracy() {
    for x in logspace(-1000.0, 1000.0, 4000) {
        assert_approx_eq(log2(x), ref_log2(x), &format!("log2({})", x));
    }
}

#[test]
fn test_log10_accuracy() {
    for x in logspace(-1000.0, 1000.0, 4000) {
        assert_approx_eq(log10(x), ref_log10(x), &format!("log10({})", x));
    }
}

#[test]
fn test_log_near_one() {
    // both sides of 1, where the result passes through zero and only the
    // absolute floor is meaningful
    for x in linspace(0.9, 1.1, 4000) {
        assert_approx_eq(log(x), ref_log(x), &format!("log({})", x));
        assert_approx_eq(log2(x), ref_log2(x), &format!("log2({})", x));
    }
}

#[test]
fn test_log1p_accuracy() {
    for x in linspace(-0.999, 10.0, 4000) {
        assert_approx_eq(log1p(x), ref_log1p(x), &format!("log1p({})", x));
    }
    // near zero the direct evaluation must not cancel
    for x in linspace(-1.0e-5, 1.0e-5, 2000) {
        assert_approx_eq(log1p(x), ref_log1p(x), &format!("log1p({})", x));
    }
    for x in logspace(1.0, 900.0, 1000) {
        assert_approx_eq(log1p(x), ref_log1p(x), &format!("log1p({})", x));
    }
}

#[test]
fn test_log_accuracy_f32() {
    for t in linspace_f32(-120.0, 120.0, 2000) {
        let x = libm::exp2f(t);
        assert_approx_eq_f32(logf(x), ref_logf(x), &format!("logf({})", x));
        assert_approx_eq_f32(log2f(x), ref_log2f(x), &format!("log2f({})", x));
        assert_approx_eq_f32(log10f(x), ref_log10f(x), &format!("log10f({})", x));
    }
    for x in linspace_f32(-0.999, 10.0, 2000) {
        assert_approx_eq_f32(log1pf(x), ref_log1pf(x), &format!("log1pf({})", x));
    }
}

// ============================================================================
// Trigonometry
// ============================================================================

#[test]
fn test_sin_cos_accuracy() {
    for x in linspace(-20.0, 20.0, 8000) {
        assert_approx_eq(sin(x), ref_sin(x), &format!("sin({})", x));
        assert_approx_eq(cos(x), ref_cos(x), &format!("cos({})", x));
    }
    // wide arguments, still inside the reduction range
    for x in linspace(-1.0e6, 1.0e6, 4000) {
        assert_approx_eq(sin(x), ref_sin(x), &format!("sin({})", x));
        assert_approx_eq(cos(x), ref_cos(x), &format!("cos({})", x));
    }
}

#[test]
fn test_tan_accuracy() {
    // scaled tolerance: tan is unbounded near odd multiples of pi/2 and the
    // pole location itself differs between implementations by an ulp
    for x in linspace(-20.0, 20.0, 8000) {
        let t = tan(x);
        let r = ref_tan(x);
        if r.abs() > 1.0e8 {
            continue;
        }
        let dev = (t - r).abs() / (1.0 + r.abs());
        assert!(
            dev < F64_RELATIVE_TOLERANCE,
            "tan({}): got {}, reference {}, scaled dev {:.3e}",
            x,
            t,
            r,
            dev
        );
    }
}

#[test]
fn test_atan_accuracy() {
    for x in linspace(-50.0, 50.0, 8000) {
        assert_approx_eq(atan(x), ref_atan(x), &format!("atan({})", x));
    }
    for x in logspace(0.0, 300.0, 1000) {
        assert_approx_eq(atan(x), ref_atan(x), &format!("atan({})", x));
        assert_approx_eq(atan(-x), ref_atan(-x), &format!("atan({})", -x));
    }
    assert!((atan(1.0) - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
}

#[test]
fn test_atan2_accuracy() {
    for y in linspace(-10.0, 10.0, 80) {
        for x in linspace(-10.0, 10.0, 80) {
            assert_approx_eq(atan2(y, x), ref_atan2(y, x), &format!("atan2({}, {})", y, x));
        }
    }
}

#[test]
fn test_asin_acos_accuracy() {
    for x in linspace(-1.0, 1.0, 8000) {
        assert_approx_eq(asin(x), ref_asin(x), &format!("asin({})", x));
        assert_approx_eq(acos(x), ref_acos(x), &format!("acos({})", x));
    }
    // conditioning is worst against the endpoints
    for x in linspace(0.999, 1.0, 2000) {
        assert_approx_eq(asin(x), ref_asin(x), &format!("asin({})", x));
        assert_approx_eq(acos(x), ref_acos(x), &format!("acos({})", x));
        assert_approx_eq(asin(-x), ref_asin(-x), &format!("asin({})", -x));
        assert_approx_eq(acos(-x), ref_acos(-x), &format!("acos({})", -x));
    }
    assert_eq!(asin(1.0), core::f64::consts::FRAC_PI_2);
    assert_eq!(acos(-1.0), core::f64::consts::PI);
}

#[test]
fn test_trig_accuracy_f32() {
    for x in linspace_f32(-20.0, 20.0, 4000) {
        assert_approx_eq_f32(sinf(x), ref_sinf(x), &format!("sinf({})", x));
        assert_approx_eq_f32(cosf(x), ref_cosf(x), &format!("cosf({})", x));
    }
    for x in linspace_f32(-20.0, 20.0, 4000) {
        let t = tanf(x);
        let r = ref_tanf(x);
        if r.abs() > 1.0e4 {
            continue;
        }
        let dev = (t - r).abs() / (1.0 + r.abs());
        assert!(
            dev < F32_RELATIVE_TOLERANCE,
            "tanf({}): got {}, reference {}, scaled dev {:.3e}",
            x,
            t,
            r,
            dev
        );
    }
    for x in linspace_f32(-50.0, 50.0, 2000) {
        assert_approx_eq_f32(atanf(x), ref_atanf(x), &format!("atanf({})", x));
    }
    for x in linspace_f32(-1.0, 1.0, 4000) {
        assert_approx_eq_f32(asinf(x), ref_asinf(x), &format!("asinf({})", x));
        assert_approx_eq_f32(acosf(x), ref_acosf(x), &format!("acosf({})", x));
    }
    for y in linspace_f32(-5.0, 5.0, 40) {
        for x in linspace_f32(-5.0, 5.0, 40) {
            assert_approx_eq_f32(atan2f(y, x), ref_atan2f(y, x), &format!("atan2f({}, {})", y, x));
        }
    }
}

#[test]
fn test_tanf_small_reduced_argument() {
    // arguments whose reduced residual lands in [1e-4, 0.02], where the
    // cubic correction still matters at single precision
    for x in linspace_f32(1.0e-4, 0.02, 2000) {
        assert_approx_eq_f32(tanf(x), ref_tanf(x), &format!("tanf({})", x));
        assert_approx_eq_f32(tanf(-x), ref_tanf(-x), &format!("tanf({})", -x));
    }
    // the same residuals reached through reduction, on the -1/tan branch
    for r in linspace_f32(-0.02, 0.02, 2000) {
        let x = core::f32::consts::FRAC_PI_2 + r;
        let t = tanf(x);
        let want = ref_tanf(x);
        if want.abs() > 1.0e4 {
            continue;
        }
        let dev = (t - want).abs() / (1.0 + want.abs());
        assert!(
            dev < F32_RELATIVE_TOLERANCE,
            "tanf({}): got {}, reference {}, scaled dev {:.3e}",
            x,
            t,
            want,
            dev
        );
    }
}

// ============================================================================
// Hyperbolics
// ============================================================================

#[test]
fn test_sinh_cosh_accuracy() {
    for x in linspace(-700.0, 700.0, 4000) {
        assert_approx_eq(sinh(x), ref_sinh(x), &format!("sinh({})", x));
        assert_approx_eq(cosh(x), ref_cosh(x), &format!("cosh({})", x));
    }
    // small arguments, where sinh must track x and cosh must pin to 1
    for x in linspace(-0.1, 0.1, 2000) {
        assert_approx_eq(sinh(x), ref_sinh(x), &format!("sinh({})", x));
        assert_approx_eq(cosh(x), ref_cosh(x), &format!("cosh({})", x));
    }
}

#[test]
fn test_tanh_accuracy() {
    for x in linspace(-20.0, 20.0, 4000) {
        assert_approx_eq(tanh(x), ref_tanh(x), &format!("tanh({})", x));
    }
}

#[test]
fn test_asinh_accuracy() {
    for x in linspace(-1.0e9, 1.0e9, 2000) {
        assert_approx_eq(asinh(x), ref_asinh(x), &format!("asinh({})", x));
    }
    // crosses the |x| <= 1 log1p branch and the 2^27 shortcut
    for x in linspace(-2.0, 2.0, 4000) {
        assert_approx_eq(asinh(x), ref_asinh(x), &format!("asinh({})", x));
    }
    for x in logspace(20.0, 900.0, 1000) {
        assert_approx_eq(asinh(x), ref_asinh(x), &format!("asinh({})", x));
    }
}

#[test]
fn test_acosh_accuracy() {
    for x in linspace(1.0, 1.0e9, 2000) {
        assert_approx_eq(acosh(x), ref_acosh(x), &format!("acosh({})", x));
    }
    // conditioning is worst just above 1
    for x in linspace(1.0, 1.001, 2000) {
        assert_approx_eq(acosh(x), ref_acosh(x), &format!("acosh({})", x));
    }
    for x in logspace(20.0, 900.0, 1000) {
        assert_approx_eq(acosh(x), ref_acosh(x), &format!("acosh({})", x));
    }
}

#[test]
fn test_atanh_accuracy() {
    for x in linspace(-0.9999, 0.9999, 4000) {
        assert_approx_eq(atanh(x), ref_atanh(x), &format!("atanh({})", x));
    }
}

#[test]
fn test_hyper_accuracy_f32() {
    for x in linspace_f32(-88.0, 88.0, 2000) {
        assert_approx_eq_f32(sinhf(x), ref_sinhf(x), &format!("sinhf({})", x));
        assert_approx_eq_f32(coshf(x), ref_coshf(x), &format!("coshf({})", x));
    }
    for x in linspace_f32(-9.5, 9.5, 2000) {
        assert_approx_eq_f32(tanhf(x), ref_tanhf(x), &format!("tanhf({})", x));
    }
    for x in linspace_f32(-1.0e4, 1.0e4, 2000) {
        assert_approx_eq_f32(asinhf(x), ref_asinhf(x), &format!("asinhf({})", x));
    }
    for x in linspace_f32(1.0, 1.0e4, 2000) {
        assert_approx_eq_f32(acoshf(x), ref_acoshf(x), &format!("acoshf({})", x));
    }
    for x in linspace_f32(-0.999, 0.999, 2000) {
        assert_approx_eq_f32(atanhf(x), ref_atanhf(x), &format!("atanhf({})", x));
    }
}

// ============================================================================
// Error function
// ============================================================================

/// erfc amplifies the rounding of x^2 inside exp, so the tail tolerance
/// scales with the largest exponent rather than the default
const ERFC_TAIL_TOLERANCE: f64 = 2e-13;
const ERFCF_TAIL_TOLERANCE: f32 = 3e-5;

#[test]
fn test_erf_accuracy() {
    for x in linspace(-1.0, 1.0, 4000) {
        assert_approx_eq(erf(x), ref_erf(x), &format!("erf({})", x));
    }
    for x in linspace(-6.0, 6.0, 4000) {
        assert_approx_eq(erf(x), ref_erf(x), &format!("erf({})", x));
    }
    assert_eq!(erf(0.0), 0.0);
    assert_approx_eq(erf(1.0), 0.8427007929497149, "erf(1)");
}

#[test]
fn test_erfc_accuracy() {
    for x in linspace(-6.0, 1.0, 4000) {
        assert_approx_eq(erfc(x), ref_erfc(x), &format!("erfc({})", x));
    }
    // the scaled-rational region and its asymptotic tail; stops where
    // results leave the normal range and relative comparison stops
    // meaning anything
    for x in linspace(1.0, 26.0, 4000) {
        assert_rel_close(erfc(x), ref_erfc(x), ERFC_TAIL_TOLERANCE, &format!("erfc({})", x));
    }
    assert_approx_eq(erfc(2.0), 0.004677734981047266, "erfc(2)");
}

#[test]
fn test_erf_accuracy_f32() {
    for x in linspace_f32(-4.0, 4.0, 2000) {
        assert_approx_eq_f32(erff(x), ref_erff(x), &format!("erff({})", x));
    }
    for x in linspace_f32(-4.0, 1.0, 2000) {
        assert_approx_eq_f32(erfcf(x), ref_erfcf(x), &format!("erfcf({})", x));
    }
    // past 9 the result drops below the single-precision normal range
    for x in linspace_f32(1.0, 9.0, 2000) {
        assert_rel_close_f32(erfcf(x), ref_erfcf(x), ERFCF_TAIL_TOLERANCE, &format!("erfcf({})", x));
    }
}

// ============================================================================
// Cube root
// ============================================================================

#[test]
fn test_cbrt_accuracy() {
    for x in logspace(-1000.0, 1000.0, 4000) {
        assert_approx_eq(cbrt(x), ref_cbrt(x), &format!("cbrt({})", x));
        assert_approx_eq(cbrt(-x), ref_cbrt(-x), &format!("cbrt({})", -x));
    }
    assert_approx_eq(cbrt(27.0), 3.0, "cbrt(27)");
    assert_approx_eq(cbrt(-8.0), -2.0, "cbrt(-8)");
}

#[test]
fn test_cbrt_accuracy_f32() {
    for t in linspace_f32(-120.0, 120.0, 2000) {
        let x = libm::exp2f(t);
        assert_approx_eq_f32(cbrtf(x), ref_cbrtf(x), &format!("cbrtf({})", x));
        assert_approx_eq_f32(cbrtf(-x), ref_cbrtf(-x), &format!("cbrtf({})", -x));
    }
}

// ============================================================================
// Power
// ============================================================================

/// pow error grows with |e·log2 x|; the wide sweep gets a looser bound
const POW_WIDE_TOLERANCE: f64 = 1e-12;

#[test]
fn test_pow_accuracy() {
    for x in linspace(0.1, 10.0, 100) {
        for e in linspace(-20.0, 20.0, 100) {
            assert_approx_eq(pow(x, e), ref_pow(x, e), &format!("pow({}, {})", x, e));
        }
    }
}

#[test]
fn test_pow_accuracy_wide() {
    for x in linspace(0.5, 2.0, 100) {
        for e in linspace(-600.0, 600.0, 100) {
            let r = ref_pow(x, e);
            if r == 0.0 || r.is_infinite() {
                continue;
            }
            assert_rel_close(pow(x, e), r, POW_WIDE_TOLERANCE, &format!("pow({}, {})", x, e));
        }
    }
}

#[test]
fn test_pown_accuracy() {
    for x in linspace(0.1, 10.0, 200) {
        for n in -40..=40 {
            let r = ref_pow(x, n as f64);
            assert_approx_eq(pown(x, n), r, &format!("pown({}, {})", x, n));
        }
    }
    // exact integer cases go through repeated exact doubling
    assert_eq!(pown(2.0, 10), 1024.0);
    assert_eq!(pown(2.0, -10), 1.0 / 1024.0);
    assert_eq!(pow(2.0, 10.0), 1024.0);
}

#[test]
fn test_pow_accuracy_f32() {
    const POWF_TOLERANCE: f32 = 2e-5;
    for x in linspace_f32(0.1, 10.0, 60) {
        for e in linspace_f32(-20.0, 20.0, 60) {
            let r = ref_powf(x, e);
            if r == 0.0 || r.is_infinite() {
                continue;
            }
            assert_rel_close_f32(powf(x, e), r, POWF_TOLERANCE, &format!("powf({}, {})", x, e));
        }
    }
    for x in linspace_f32(0.1, 10.0, 200) {
        for n in -20..=20 {
            let r = ref_powf(x, n as f32);
            assert_approx_eq_f32(pownf(x, n), r, &format!("pownf({}, {})", x, n));
        }
    }
}
