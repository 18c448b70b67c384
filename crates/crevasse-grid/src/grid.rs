//! The structured rectangular grid.

use crate::edge::EdgeBehavior;
use crate::error::GridError;

/// A fixed-resolution rectangular grid with uniform spacing.
///
/// Cells are addressed as `(i, j)` with `0 <= i < mx` along x and
/// `0 <= j < my` along y. Interior data is stored row-major
/// (`j * mx + i`). The resolution is fixed at construction; every field
/// owned by the fracture model shares it.
///
/// # Examples
///
/// ```
/// use crevasse_grid::Grid2D;
///
/// let grid = Grid2D::new(4, 3, 1000.0, 1000.0).unwrap();
/// assert_eq!(grid.cell_count(), 12);
/// assert!(grid.is_domain_edge(0, 1));
/// assert!(grid.is_domain_edge(3, 1));
/// assert!(!grid.is_domain_edge(1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid2D {
    mx: usize,
    my: usize,
    dx: f64,
    dy: f64,
    edge: EdgeBehavior,
}

impl Grid2D {
    /// Maximum dimension size: stencil offsets use `isize`.
    pub const MAX_DIM: usize = (isize::MAX / 4) as usize;

    /// Create an `mx × my` grid with spacings `dx`, `dy` (metres) and
    /// periodic halo behaviour.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::InvalidSpacing)` if a spacing is not finite and
    /// positive, or `Err(GridError::DimensionTooLarge)`.
    pub fn new(mx: usize, my: usize, dx: f64, dy: f64) -> Result<Self, GridError> {
        if mx == 0 || my == 0 {
            return Err(GridError::EmptyGrid { mx, my });
        }
        if mx > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "mx",
                value: mx,
                max: Self::MAX_DIM,
            });
        }
        if my > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "my",
                value: my,
                max: Self::MAX_DIM,
            });
        }
        if !(dx.is_finite() && dx > 0.0) {
            return Err(GridError::InvalidSpacing {
                axis: "dx",
                value: dx,
            });
        }
        if !(dy.is_finite() && dy > 0.0) {
            return Err(GridError::InvalidSpacing {
                axis: "dy",
                value: dy,
            });
        }
        Ok(Self {
            mx,
            my,
            dx,
            dy,
            edge: EdgeBehavior::default(),
        })
    }

    /// Replace the halo behaviour.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Number of cells in x.
    pub fn mx(&self) -> usize {
        self.mx
    }

    /// Number of cells in y.
    pub fn my(&self) -> usize {
        self.my
    }

    /// Grid spacing in x (metres).
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Grid spacing in y (metres).
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Halo behaviour at the domain edge.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of interior cells.
    pub fn cell_count(&self) -> usize {
        self.mx * self.my
    }

    /// Area of one cell (m²).
    pub fn cell_area(&self) -> f64 {
        self.dx * self.dy
    }

    /// Row-major index of interior cell `(i, j)`.
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.mx + i
    }

    /// Inverse of [`index`](Self::index).
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.mx, index / self.mx)
    }

    /// Whether `(i, j)` lies on the outermost ring (first/last row or column).
    pub fn is_domain_edge(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i + 1 == self.mx || j + 1 == self.my
    }

    /// `(mx, my)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.mx, self.my)
    }

    /// Iterate over all interior cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.my).flat_map(move |j| (0..self.mx).map(move |i| (i, j)))
    }
}
