//! Small buffer utilities: elementwise arithmetic, extremum scans,
//! sorted search and merge
//!
//! These are the helpers a plotting or table-interpolation caller needs
//! around the scalar functions. They are generic over [`Float`], so one
//! definition serves both widths. Nothing here allocates; `merge` fills
//! a caller-provided buffer and reports how much of it was used.

use crate::traits::Float;

// IEEE maxNum/minNum ordering: NaN loses to any number
#[inline(always)]
fn fmax<F: Float>(a: F, b: F) -> F {
    if a != a || b > a {
        b
    } else {
        a
    }
}

#[inline(always)]
fn fmin<F: Float>(a: F, b: F) -> F {
    if a != a || b < a {
        b
    } else {
        a
    }
}

/// Elementwise `dst = a + b`.
///
/// # Panics
///
/// Panics when the three slices differ in length.
pub fn add<F: Float>(dst: &mut [F], a: &[F], b: &[F]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(dst.len(), a.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x + y;
    }
}

/// Elementwise `dst = a - b`.
///
/// # Panics
///
/// Panics when the three slices differ in length.
pub fn sub<F: Float>(dst: &mut [F], a: &[F], b: &[F]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(dst.len(), a.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x - y;
    }
}

/// Elementwise `dst = a · b`.
///
/// # Panics
///
/// Panics when the three slices differ in length.
pub fn mul<F: Float>(dst: &mut [F], a: &[F], b: &[F]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(dst.len(), a.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x * y;
    }
}

/// Elementwise `dst = a / b`; division by zero follows IEEE (`±inf`,
/// NaN for `0/0`).
///
/// # Panics
///
/// Panics when the three slices differ in length.
pub fn div<F: Float>(dst: &mut [F], a: &[F], b: &[F]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(dst.len(), a.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x / y;
    }
}

/// Largest element, skipping NaNs; NaN only when every element is NaN.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn max<F: Float>(a: &[F]) -> F {
    assert!(!a.is_empty());
    let mut hi = a[0];
    for &v in &a[1..] {
        hi = fmax(hi, v);
    }
    hi
}

/// Smallest element, skipping NaNs.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn min<F: Float>(a: &[F]) -> F {
    assert!(!a.is_empty());
    let mut lo = a[0];
    for &v in &a[1..] {
        lo = fmin(lo, v);
    }
    lo
}

/// `(min, max)` in a single pass.
///
/// # Panics
///
/// Panics on an empty slice.
pub fn min_max<F: Float>(a: &[F]) -> (F, F) {
    assert!(!a.is_empty());
    let mut lo = a[0];
    let mut hi = a[0];
    for &v in &a[1..] {
        lo = fmin(lo, v);
        hi = fmax(hi, v);
    }
    (lo, hi)
}

/// Bracketing index into an ascending table: the returned `i` satisfies
/// `a[i] <= x < a[i+1]` when `x` is interior, clamping to the first or
/// last interval outside the table. Bisection, O(log n).
///
/// # Example
///
/// ```rust
/// let knots = [0.0, 1.0, 2.0, 4.0, 8.0];
/// assert_eq!(vega_math::array::search(3.0, &knots), 2);
/// assert_eq!(vega_math::array::search(-5.0, &knots), 0);
/// assert_eq!(vega_math::array::search(99.0, &knots), 3);
/// ```
///
/// # Panics
///
/// Panics when the table has fewer than two entries.
pub fn search<F: Float>(x: F, a: &[F]) -> usize {
    assert!(a.len() >= 2);
    let mut i = 0;
    let mut j = a.len() - 1;
    while j - i > 1 {
        let k = (i + j) >> 1;
        if x < a[k] {
            j = k;
        } else {
            i = k;
        }
    }
    i
}

/// Like [`search`], but reports `None` instead of clamping when `x`
/// falls outside `[a[0], a[last]]` (a NaN probe also finds nothing).
///
/// # Panics
///
/// Panics on an empty table.
pub fn search_extended<F: Float>(x: F, a: &[F]) -> Option<usize> {
    assert!(!a.is_empty());
    if x != x || x < a[0] || x > a[a.len() - 1] {
        return None;
    }
    if a.len() == 1 {
        return Some(0);
    }
    Some(search(x, a))
}

/// Merges two ascending arrays into `dst`, collapsing values present in
/// both, and returns the number of elements written. Strictly ascending
/// inputs produce a strictly ascending union.
///
/// # Panics
///
/// Panics when `dst` cannot hold `a.len() + b.len()` elements.
pub fn merge<F: Float>(dst: &mut [F], a: &[F], b: &[F]) -> usize {
    assert!(dst.len() >= a.len() + b.len());
    let mut i = 0;
    let mut j = 0;
    let mut n = 0;
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            dst[n] = a[i];
            i += 1;
        } else if b[j] < a[i] {
            dst[n] = b[j];
            j += 1;
        } else {
            dst[n] = a[i];
            i += 1;
            j += 1;
        }
        n += 1;
    }
    while i < a.len() {
        dst[n] = a[i];
        i += 1;
        n += 1;
    }
    while j < b.len() {
        dst[n] = b[j];
        j += 1;
        n += 1;
    }
    n
}
