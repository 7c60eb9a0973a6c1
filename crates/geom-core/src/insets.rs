// File: crates/geom-core/src/insets.rs
// Summary: Edge insets (top/left/bottom/right padding) and their arithmetic.

use std::ops::{Add, AddAssign};

/// Inward offsets from each edge of a rectangle.
/// Contract: none on sign; negative values push outward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }
    /// Same inset on all four edges.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
    /// `horizontal` on left and right, `vertical` on top and bottom.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> f64 { self.top + self.bottom }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;
    fn add(self, rhs: EdgeInsets) -> EdgeInsets {
        EdgeInsets::new(
            self.top + rhs.top,
            self.left + rhs.left,
            self.bottom + rhs.bottom,
            self.right + rhs.right,
        )
    }
}

impl AddAssign for EdgeInsets {
    fn add_assign(&mut self, rhs: EdgeInsets) { *self = *self + rhs; }
}
