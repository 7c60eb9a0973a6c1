// File: crates/geom-core/src/lib.rs
// Summary: Library entry point; exports points, sizes, rects, insets and scale-to-fit helpers.

pub mod error;
pub mod types;
pub mod scalar;
pub mod point;
pub mod size;
pub mod rect;
pub mod insets;
pub mod scale;
pub mod transform;

pub use error::{GeometryError, Result};
pub use scalar::{constrain, constrain_max, constrain_min, linear_map};
pub use point::Point;
pub use size::Size;
pub use rect::Rect;
pub use insets::EdgeInsets;
pub use scale::{scale_rect_to_size, scale_size_to_size, ScaleMode};
pub use transform::AffineTransform;
