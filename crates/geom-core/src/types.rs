// File: crates/geom-core/src/types.rs
// Summary: Shared constants for geometry comparisons.

/// Absolute tolerance used by the `approx_eq` helpers.
pub const EPSILON: f64 = 1e-9;

/// Compare two scalars within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}
