// File: crates/geom-core/src/scale.rs
// Summary: Fill / aspect-fit / aspect-fill sizing of sizes and rects toward a target size.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, Result};
use crate::rect::Rect;
use crate::size::Size;

/// How content is resized toward a target box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScaleMode {
    /// Stretch to exactly the target; aspect ratio is not kept.
    #[default]
    Fill,
    /// Largest uniform scale that still fits inside the target.
    AspectFit,
    /// Smallest uniform scale that covers the target; may overflow one axis.
    AspectFill,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 3] = [ScaleMode::Fill, ScaleMode::AspectFit, ScaleMode::AspectFill];

    pub const fn as_str(self) -> &'static str {
        match self {
            ScaleMode::Fill => "fill",
            ScaleMode::AspectFit => "aspect-fit",
            ScaleMode::AspectFill => "aspect-fill",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fill" => Ok(ScaleMode::Fill),
            "aspect-fit" => Ok(ScaleMode::AspectFit),
            "aspect-fill" => Ok(ScaleMode::AspectFill),
            _ => Err(GeometryError::UnknownScaleMode(s.to_string())),
        }
    }
}

/// Resize `size` toward `target` according to `mode`.
///
/// `Fill` returns `target` for any input. The aspect modes reject a `size`
/// with a zero or non-finite dimension with [`GeometryError::DegenerateSize`].
pub fn scale_size_to_size(size: Size, target: Size, mode: ScaleMode) -> Result<Size> {
    let ratio = match mode {
        ScaleMode::Fill => return Ok(target),
        ScaleMode::AspectFit | ScaleMode::AspectFill => {
            if size.is_degenerate() {
                return Err(GeometryError::degenerate_size(size.width, size.height));
            }
            let rx = target.width / size.width;
            let ry = target.height / size.height;
            if mode == ScaleMode::AspectFit { rx.min(ry) } else { rx.max(ry) }
        }
    };
    Ok(size.scale(ratio))
}

/// Resize `rect.size` per `mode` and re-center the result on `rect`'s center.
pub fn scale_rect_to_size(rect: Rect, target: Size, mode: ScaleMode) -> Result<Rect> {
    let size = scale_size_to_size(rect.size, target, mode)?;
    Ok(Rect::from_center_and_size(rect.center(), size))
}

impl Size {
    pub fn scaled_to(self, target: Size, mode: ScaleMode) -> Result<Size> {
        scale_size_to_size(self, target, mode)
    }
}

impl Rect {
    pub fn scaled_to_size(&self, target: Size, mode: ScaleMode) -> Result<Rect> {
        scale_rect_to_size(*self, target, mode)
    }

    /// Scale toward `target.size` and center the result on `target`, e.g. to
    /// lay an image frame into a view's bounds.
    pub fn scaled_into(&self, target: Rect, mode: ScaleMode) -> Result<Rect> {
        let size = scale_size_to_size(self.size, target.size, mode)?;
        Ok(Rect::from_center_and_size(target.center(), size))
    }
}
