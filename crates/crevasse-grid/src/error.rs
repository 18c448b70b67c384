//! Error types for grid construction and field shape checks.

use thiserror::Error;

/// Errors arising from grid construction or array shape checks.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    #[error("grid must have at least one cell in each direction (got {mx} x {my})")]
    EmptyGrid {
        /// Number of cells in x.
        mx: usize,
        /// Number of cells in y.
        my: usize,
    },
    /// A grid spacing is zero, negative or not finite.
    #[error("grid spacing {axis} must be finite and positive, got {value}")]
    InvalidSpacing {
        /// `"dx"` or `"dy"`.
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A dimension does not fit the signed index type used by stencils.
    #[error("dimension {name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// `"mx"` or `"my"`.
        name: &'static str,
        /// The configured value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// Interior data does not match the grid.
    #[error("expected {expected} interior values, got {actual}")]
    LengthMismatch {
        /// Number of interior cells on the grid.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// Two arrays were combined that live on differently shaped grids.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// `(mx, my)` of the reference grid.
        expected: (usize, usize),
        /// `(mx, my)` of the offending array.
        actual: (usize, usize),
    },
}
