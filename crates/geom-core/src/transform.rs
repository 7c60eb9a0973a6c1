// File: crates/geom-core/src/transform.rs
// Summary: 2x3 affine transforms with rotation and scaling about an arbitrary center.

use crate::error::{GeometryError, Result};
use crate::point::Point;

/// Affine matrix in row-vector form:
/// `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform =
        AffineTransform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Rotation by `angle` radians that leaves `center` fixed.
    pub fn rotation_around(angle: f64, center: Point) -> Self {
        let (sn, cs) = angle.sin_cos();
        let (a, b, c, d) = (cs, sn, -sn, cs);
        let tx = a * -center.x + c * -center.y + center.x;
        let ty = b * -center.x + d * -center.y + center.y;
        Self::new(a, b, c, d, tx, ty)
    }

    /// Non-uniform scale that leaves `center` fixed.
    pub fn scale_around(sx: f64, sy: f64, center: Point) -> Self {
        Self::new(sx, 0.0, 0.0, sy, center.x - sx * center.x, center.y - sy * center.y)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Transform equivalent to applying `self` first and then `next`.
    pub fn concat(&self, next: &AffineTransform) -> Self {
        Self::new(
            self.a * next.a + self.b * next.c,
            self.a * next.b + self.b * next.d,
            self.c * next.a + self.d * next.c,
            self.c * next.b + self.d * next.d,
            self.tx * next.a + self.ty * next.c + next.tx,
            self.tx * next.b + self.ty * next.d + next.ty,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(GeometryError::division_by_zero("AffineTransform::inverse"));
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        let tx = -(self.tx * a + self.ty * c);
        let ty = -(self.tx * b + self.ty * d);
        Ok(Self::new(a, b, c, d, tx, ty))
    }
}
