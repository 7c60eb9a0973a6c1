// File: crates/geom-core/src/error.rs
// Summary: Error kinds for the checked geometry operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A divisor component (or source range width) was zero.
    #[error("division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// Aspect scaling needs a size with non-zero, finite dimensions.
    #[error("cannot aspect-scale degenerate size {width}x{height}")]
    DegenerateSize { width: f64, height: f64 },

    #[error("cannot wrap into an empty range")]
    EmptyRange,

    #[error("unknown scale mode `{0}` (expected fill, aspect-fit or aspect-fill)")]
    UnknownScaleMode(String),
}

impl GeometryError {
    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        log::debug!("{operation}: zero divisor");
        GeometryError::DivisionByZero { operation }
    }

    pub(crate) fn degenerate_size(width: f64, height: f64) -> Self {
        log::debug!("aspect scaling rejected degenerate size {width}x{height}");
        GeometryError::DegenerateSize { width, height }
    }
}
