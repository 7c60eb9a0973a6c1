// File: crates/geom-core/src/point.rs
// Summary: 2D point arithmetic, distances and point/rect relations.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{GeometryError, Result};
use crate::rect::Rect;
use crate::scalar::constrain;
use crate::size::Size;
use crate::types::approx_eq;

/// A position in a y-down screen coordinate system.
///
/// Arithmetic with another point is component-wise. The `/` operators keep
/// plain `f64` semantics (a zero divisor yields infinity or NaN); use
/// [`Point::divide`] for the checked variant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point with both components set to `value`.
    pub const fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Point at `radius` along `angle` (radians) from the origin.
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self::new(angle.cos() * radius, angle.sin() * radius)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Component-wise quotient; fails if either component of `rhs` is zero.
    pub fn divide(self, rhs: Point) -> Result<Self> {
        if rhs.x == 0.0 || rhs.y == 0.0 {
            return Err(GeometryError::division_by_zero("Point::divide"));
        }
        Ok(self / rhs)
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn distance_to_origin(self) -> f64 {
        self.distance(Point::ZERO)
    }

    /// Angle of the vector from `self` to `other`, in `(-π, π]`.
    pub fn direction_to(self, other: Point) -> f64 {
        let delta = other - self;
        delta.y.atan2(delta.x)
    }

    /// Constrain each axis independently into the closed bounds of `rect`.
    pub fn clamp_to_rect(self, rect: Rect) -> Self {
        Self::new(
            constrain(self.x, rect.min_x(), rect.max_x()),
            constrain(self.y, rect.min_y(), rect.max_y()),
        )
    }

    /// Distance to the nearest point of `rect`; zero inside or on the edge.
    pub fn distance_to_rect(self, rect: Rect) -> f64 {
        self.distance(self.clamp_to_rect(rect))
    }

    pub fn is_inside(self, rect: Rect) -> bool {
        rect.contains(self)
    }

    pub fn approx_eq(self, other: Point) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul for Point {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point { Point::new(self.x * rhs.x, self.y * rhs.y) }
}

impl Div for Point {
    type Output = Point;
    fn div(self, rhs: Point) -> Point { Point::new(self.x / rhs.x, self.y / rhs.y) }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point { self.scale(rhs) }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point { Point::new(self.x / rhs, self.y / rhs) }
}

// Offsetting a point by a size.
impl Add<Size> for Point {
    type Output = Point;
    fn add(self, rhs: Size) -> Point { Point::new(self.x + rhs.width, self.y + rhs.height) }
}

impl Sub<Size> for Point {
    type Output = Point;
    fn sub(self, rhs: Size) -> Point { Point::new(self.x - rhs.width, self.y - rhs.height) }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point { Point::new(-self.x, -self.y) }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) { *self = *self + rhs; }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) { *self = *self - rhs; }
}

impl MulAssign for Point {
    fn mul_assign(&mut self, rhs: Point) { *self = *self * rhs; }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) { *self = *self * rhs; }
}

impl DivAssign for Point {
    fn div_assign(&mut self, rhs: Point) { *self = *self / rhs; }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) { *self = *self / rhs; }
}
