// File: crates/geom-core/src/size.rs
// Summary: Width/height arithmetic mirroring Point.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{GeometryError, Result};
use crate::types::approx_eq;

/// A width/height pair. Zero and negative dimensions are valid values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn uniform(value: f64) -> Self {
        Self { width: value, height: value }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Component-wise quotient; fails if either dimension of `rhs` is zero.
    pub fn divide(self, rhs: Size) -> Result<Self> {
        if rhs.width == 0.0 || rhs.height == 0.0 {
            return Err(GeometryError::division_by_zero("Size::divide"));
        }
        Ok(self / rhs)
    }

    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// True when either dimension is zero or not finite.
    pub fn is_degenerate(self) -> bool {
        self.width == 0.0 || self.height == 0.0 || !self.width.is_finite() || !self.height.is_finite()
    }

    /// Width over height.
    pub fn aspect_ratio(self) -> Result<f64> {
        if self.height == 0.0 {
            return Err(GeometryError::division_by_zero("Size::aspect_ratio"));
        }
        Ok(self.width / self.height)
    }

    pub fn approx_eq(self, other: Size) -> bool {
        approx_eq(self.width, other.width) && approx_eq(self.height, other.height)
    }
}

impl Add for Size {
    type Output = Size;
    fn add(self, rhs: Size) -> Size { Size::new(self.width + rhs.width, self.height + rhs.height) }
}

impl Sub for Size {
    type Output = Size;
    fn sub(self, rhs: Size) -> Size { Size::new(self.width - rhs.width, self.height - rhs.height) }
}

impl Mul for Size {
    type Output = Size;
    fn mul(self, rhs: Size) -> Size { Size::new(self.width * rhs.width, self.height * rhs.height) }
}

impl Div for Size {
    type Output = Size;
    fn div(self, rhs: Size) -> Size { Size::new(self.width / rhs.width, self.height / rhs.height) }
}

impl Mul<f64> for Size {
    type Output = Size;
    fn mul(self, rhs: f64) -> Size { self.scale(rhs) }
}

impl Div<f64> for Size {
    type Output = Size;
    fn div(self, rhs: f64) -> Size { Size::new(self.width / rhs, self.height / rhs) }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) { *self = *self + rhs; }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Size) { *self = *self - rhs; }
}

impl MulAssign for Size {
    fn mul_assign(&mut self, rhs: Size) { *self = *self * rhs; }
}

impl MulAssign<f64> for Size {
    fn mul_assign(&mut self, rhs: f64) { *self = *self * rhs; }
}

impl DivAssign for Size {
    fn div_assign(&mut self, rhs: Size) { *self = *self / rhs; }
}

impl DivAssign<f64> for Size {
    fn div_assign(&mut self, rhs: f64) { *self = *self / rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Size::new(8.0, 6.0);
        let b = Size::new(2.0, 3.0);
        assert_eq!(a + b, Size::new(10.0, 9.0));
        assert_eq!(a - b, Size::new(6.0, 3.0));
        assert_eq!(a * b, Size::new(16.0, 18.0));
        assert_eq!(a / b, Size::new(4.0, 2.0));
        assert_eq!(a * 0.5, Size::new(4.0, 3.0));
        assert_eq!(a / 2.0, Size::new(4.0, 3.0));
        assert_eq!(Size::uniform(3.0), Size::new(3.0, 3.0));
    }

    #[test]
    fn checked_divide() {
        assert_eq!(Size::new(8.0, 6.0).divide(Size::new(2.0, 3.0)).unwrap(), Size::new(4.0, 2.0));
        assert_eq!(
            Size::new(8.0, 6.0).divide(Size::new(2.0, 0.0)),
            Err(GeometryError::DivisionByZero { operation: "Size::divide" })
        );
    }

    #[test]
    fn degenerate_and_aspect() {
        assert!(Size::new(0.0, 4.0).is_degenerate());
        assert!(Size::new(f64::INFINITY, 4.0).is_degenerate());
        assert!(!Size::new(-1.0, 4.0).is_degenerate());
        assert_eq!(Size::new(16.0, 9.0).aspect_ratio().unwrap(), 16.0 / 9.0);
        assert!(Size::new(16.0, 0.0).aspect_ratio().is_err());
        assert_eq!(Size::new(3.0, 4.0).area(), 12.0);
    }

    #[test]
    fn compound_assignment() {
        let mut s = Size::new(1.0, 2.0);
        s += Size::new(1.0, 0.0);
        s *= Size::new(2.0, 3.0);
        s -= Size::uniform(1.0);
        s /= 3.0;
        assert_eq!(s, Size::new(1.0, 5.0 / 3.0));
    }
}
