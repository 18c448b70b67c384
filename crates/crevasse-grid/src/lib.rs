//! Structured 2D grids and field storage for Crevasse.
//!
//! This crate defines [`Grid2D`], the fixed-resolution rectangular grid
//! every fracture field lives on, and [`Array2D`], a per-cell array that
//! carries one halo (ghost) layer so that ±1 stencils can be read at the
//! domain edge without bounds checks in the inner loop.
//!
//! Halo contents are produced by [`Array2D::fill_halo`] according to an
//! [`EdgeBehavior`]. In a distributed run the partitioning collaborator
//! owns the exchange; on a single domain this crate fills it directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod edge;
pub mod error;
pub mod grid;
pub mod stencil;

pub use array::Array2D;
pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::Grid2D;
pub use stencil::{Box3, Star};

/// A scalar field on the grid.
pub type Scalar = Array2D<f64>;
