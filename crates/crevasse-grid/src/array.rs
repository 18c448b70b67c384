//! Per-cell arrays with a one-cell halo.

use crate::edge::EdgeBehavior;
use crate::error::GridError;
use crate::grid::Grid2D;
use crate::stencil::{Box3, Star};

/// A per-cell array over a [`Grid2D`] with one halo layer on every side.
///
/// Interior cells are `(i, j)` with `0 <= i < mx`, `0 <= j < my`; halo
/// cells extend the valid index range to `-1..=mx` and `-1..=my`. Writes
/// go to interior cells only. Halo contents are stale until
/// [`fill_halo`](Self::fill_halo) is called.
///
/// # Buffer layout
///
/// ```text
/// storage[(j + 1) * (mx + 2) + (i + 1)]   for i in -1..=mx, j in -1..=my
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Array2D<T> {
    mx: usize,
    my: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Array2D<T> {
    /// An array on `grid` filled with `T::default()`, halo included.
    pub fn new(grid: &Grid2D) -> Self {
        Self::filled(grid, T::default())
    }

    /// An array on `grid` filled with `value`, halo included.
    pub fn filled(grid: &Grid2D, value: T) -> Self {
        let (mx, my) = grid.shape();
        Self {
            mx,
            my,
            data: vec![value; (mx + 2) * (my + 2)],
        }
    }

    /// Build from row-major interior values (`j * mx + i`).
    ///
    /// The halo is filled according to the grid's edge behaviour.
    ///
    /// Returns `Err(GridError::LengthMismatch)` if `values.len()` differs
    /// from `grid.cell_count()`.
    pub fn from_interior(grid: &Grid2D, values: Vec<T>) -> Result<Self, GridError> {
        if values.len() != grid.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: grid.cell_count(),
                actual: values.len(),
            });
        }
        let mut out = Self::new(grid);
        for (k, v) in values.into_iter().enumerate() {
            let (i, j) = grid.coords(k);
            out.set(i, j, v);
        }
        out.fill_halo(grid.edge_behavior());
        Ok(out)
    }

    /// Build by evaluating `f(i, j)` at every interior cell.
    ///
    /// The halo is filled according to the grid's edge behaviour.
    pub fn from_fn(grid: &Grid2D, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut out = Self::new(grid);
        for (i, j) in grid.points() {
            out.set(i, j, f(i, j));
        }
        out.fill_halo(grid.edge_behavior());
        out
    }

    /// Populate the halo layer from the interior.
    pub fn fill_halo(&mut self, edge: EdgeBehavior) {
        let mx = self.mx as isize;
        let my = self.my as isize;
        for j in -1..=my {
            for i in -1..=mx {
                let inside = (0..mx).contains(&i) && (0..my).contains(&j);
                if inside {
                    continue;
                }
                let src = match (
                    edge.resolve_axis(i, self.mx),
                    edge.resolve_axis(j, self.my),
                ) {
                    (Some(si), Some(sj)) => self.data[self.slot(si as isize, sj as isize)],
                    _ => T::default(),
                };
                let dst = self.slot(i, j);
                self.data[dst] = src;
            }
        }
    }
}

impl<T: Copy> Array2D<T> {
    /// `(mx, my)` of the interior.
    pub fn shape(&self) -> (usize, usize) {
        (self.mx, self.my)
    }

    /// Number of interior cells.
    pub fn cell_count(&self) -> usize {
        self.mx * self.my
    }

    /// Storage slot of `(i, j)`, halo included.
    fn slot(&self, i: isize, j: isize) -> usize {
        debug_assert!(i >= -1 && i <= self.mx as isize, "i = {i} outside halo");
        debug_assert!(j >= -1 && j <= self.my as isize, "j = {j} outside halo");
        (j + 1) as usize * (self.mx + 2) + (i + 1) as usize
    }

    /// Value at `(i, j)`; halo positions `-1` and `mx`/`my` are allowed.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the halo.
    pub fn get(&self, i: isize, j: isize) -> T {
        self.data[self.slot(i, j)]
    }

    /// Value at interior cell `(i, j)`.
    pub fn at(&self, i: usize, j: usize) -> T {
        self.get(i as isize, j as isize)
    }

    /// Overwrite interior cell `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let k = self.slot(i as isize, j as isize);
        self.data[k] = value;
    }

    /// Whether this array lives on a grid of `grid`'s shape.
    pub fn matches(&self, grid: &Grid2D) -> bool {
        self.shape() == grid.shape()
    }

    /// `Err(GridError::ShapeMismatch)` unless this array matches `grid`.
    pub fn check_shape(&self, grid: &Grid2D) -> Result<(), GridError> {
        if self.matches(grid) {
            Ok(())
        } else {
            Err(GridError::ShapeMismatch {
                expected: grid.shape(),
                actual: self.shape(),
            })
        }
    }

    /// Iterate interior values in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.my).flat_map(move |j| (0..self.mx).map(move |i| self.at(i, j)))
    }

    /// Collect interior values in row-major order.
    pub fn interior_to_vec(&self) -> Vec<T> {
        self.interior().collect()
    }

    /// Four-point star around `(i, j)`. Reads the halo at the domain edge.
    pub fn star(&self, i: usize, j: usize) -> Star<T> {
        let (i, j) = (i as isize, j as isize);
        Star {
            c: self.get(i, j),
            e: self.get(i + 1, j),
            w: self.get(i - 1, j),
            n: self.get(i, j + 1),
            s: self.get(i, j - 1),
        }
    }

    /// Full 3×3 neighbourhood around `(i, j)`. Reads the halo at the domain edge.
    pub fn box3(&self, i: usize, j: usize) -> Box3<T> {
        let (i, j) = (i as isize, j as isize);
        let row = |dj: isize| {
            [
                self.get(i - 1, j + dj),
                self.get(i, j + dj),
                self.get(i + 1, j + dj),
            ]
        };
        Box3::from_rows([row(-1), row(0), row(1)])
    }
}

impl Array2D<f64> {
    /// Largest interior value, ignoring NaN. `None` if every value is NaN.
    pub fn max_interior(&self) -> Option<f64> {
        self.interior()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Sum of interior values.
    pub fn sum_interior(&self) -> f64 {
        self.interior().sum()
    }
}
