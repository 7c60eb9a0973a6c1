// File: crates/geom-core/src/rect.rs
// Summary: Origin + size rectangles; construction, edges, centering and insets.

use crate::insets::EdgeInsets;
use crate::point::Point;
use crate::scalar::constrain;
use crate::size::Size;

/// Axis-aligned rectangle. `origin` is the minimum (top-left) corner.
///
/// Edge accessors assume a non-negative size; nothing here standardizes
/// negative widths or heights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect { origin: Point::ZERO, size: Size::ZERO };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    pub const fn from_origin_and_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rect of `size` whose center lands on `center`.
    pub fn from_center_and_size(center: Point, size: Size) -> Self {
        Self { origin: center - size / 2.0, size }
    }

    pub const fn x(&self) -> f64 { self.origin.x }
    pub const fn y(&self) -> f64 { self.origin.y }
    pub const fn width(&self) -> f64 { self.size.width }
    pub const fn height(&self) -> f64 { self.size.height }

    pub fn min_x(&self) -> f64 { self.origin.x }
    pub fn mid_x(&self) -> f64 { self.origin.x + self.size.width / 2.0 }
    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }
    pub fn min_y(&self) -> f64 { self.origin.y }
    pub fn mid_y(&self) -> f64 { self.origin.y + self.size.height / 2.0 }
    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }

    /// `origin + size / 2`.
    pub fn center(&self) -> Point {
        self.origin + self.size / 2.0
    }

    /// Same center, size multiplied by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::from_center_and_size(self.center(), self.size.scale(factor))
    }

    /// Closed-bounds containment.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Point at fractional position inside the rect; fractions are clamped to `0..=1`.
    pub fn point_at_fraction(&self, fx: f64, fy: f64) -> Point {
        Point::new(
            self.min_x() + constrain(fx, 0.0, 1.0) * self.size.width,
            self.min_y() + constrain(fy, 0.0, 1.0) * self.size.height,
        )
    }

    /// Shrink by `insets`; negative insets grow the rect.
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            self.size.width - insets.horizontal(),
            self.size.height - insets.vertical(),
        )
    }

    /// Move the origin by `delta`, keeping the size.
    pub fn offset(&self, delta: Point) -> Self {
        Self { origin: self.origin + delta, size: self.size }
    }

    pub fn approx_eq(&self, other: &Rect) -> bool {
        self.origin.approx_eq(other.origin) && self.size.approx_eq(other.size)
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        Rect { origin: Point::ZERO, size }
    }
}
