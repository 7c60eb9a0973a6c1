// File: crates/geom-core/src/scalar.rs
// Summary: Scalar clamp helpers, linear mapping and small integer utilities.

use std::ops::Range;

use crate::error::{GeometryError, Result};

/// Clamp `value` into `[min, max]`.
///
/// The floor is applied first and the ceiling second, so with `min > max`
/// the result is always `max`. Callers are expected to pass `min <= max`.
#[inline]
pub fn constrain<T: PartialOrd>(value: T, min: T, max: T) -> T {
    constrain_max(constrain_min(value, min), max)
}

#[inline]
pub fn constrain_min<T: PartialOrd>(value: T, min: T) -> T {
    if value < min { min } else { value }
}

#[inline]
pub fn constrain_max<T: PartialOrd>(value: T, max: T) -> T {
    if value > max { max } else { value }
}

/// Map `value` from its relative position between `from.0` and `from.1` to the
/// equivalent position between `to.0` and `to.1`.
///
/// Either range may be inverted (`b < a`) and `value` may lie outside `from`.
/// With `constrained` set the result is clamped to the span of `to`.
pub fn linear_map(value: f64, from: (f64, f64), to: (f64, f64), constrained: bool) -> Result<f64> {
    let span = from.1 - from.0;
    if span == 0.0 {
        return Err(GeometryError::division_by_zero("linear_map"));
    }
    let mapped = (value - from.0) * (to.1 - to.0) / span + to.0;
    if constrained {
        Ok(constrain(mapped, to.0.min(to.1), to.0.max(to.1)))
    } else {
        Ok(mapped)
    }
}

/// Sign of `value` as -1, 0 or 1. Zero and NaN both give 0.
#[inline]
pub fn signum(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Wrap `value` into the half-open `range`, e.g. `-1` in `0..3` is `2`.
pub fn wrapping_around(value: i64, range: Range<i64>) -> Result<i64> {
    if range.is_empty() {
        return Err(GeometryError::EmptyRange);
    }
    Ok(wrap_closed(value, range.start, range.end - 1))
}

/// Wrap `value` into the closed range `[lo, hi]`.
pub fn wrapping_around_inclusive(value: i64, lo: i64, hi: i64) -> Result<i64> {
    if hi < lo {
        return Err(GeometryError::EmptyRange);
    }
    Ok(wrap_closed(value, lo, hi))
}

// Widened to i128 so spans up to the full i64 range cannot overflow.
// Requires lo <= hi; the result lies in [lo, hi] and so fits back in i64.
fn wrap_closed(value: i64, lo: i64, hi: i64) -> i64 {
    let len = i128::from(hi) - i128::from(lo) + 1;
    let offset = (i128::from(value) - i128::from(lo)).rem_euclid(len);
    (offset + i128::from(lo)) as i64
}

/// Integer division rounding towards positive infinity.
pub fn div_round_up(value: u64, divisor: u64) -> Result<u64> {
    if divisor == 0 {
        return Err(GeometryError::division_by_zero("div_round_up"));
    }
    Ok(value.div_ceil(divisor))
}
