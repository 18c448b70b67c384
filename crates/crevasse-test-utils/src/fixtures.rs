//! Ice-shelf scenario fixtures.
//!
//! [`ShelfBuilder`] produces a [`Shelf`]: a floating shelf on a small grid
//! with every input a fracture update needs, uniform unless overridden.

use crevasse_core::{CellType, DeviatoricStress, PrincipalStrainRates, Velocity};
use crevasse_fracture::{FlowInputs, StepInputs};
use crevasse_grid::{Array2D, EdgeBehavior, Grid2D, Scalar};

/// Owned input fields on one grid.
pub struct Shelf {
    pub grid: Grid2D,
    pub velocity: Array2D<Velocity>,
    pub thickness: Scalar,
    pub cell_type: Array2D<CellType>,
    pub bc_mask: Scalar,
    pub hardness: Scalar,
    pub strain_rates: Array2D<PrincipalStrainRates>,
    pub stresses: Array2D<DeviatoricStress>,
}

impl Shelf {
    pub fn flow_inputs(&self) -> FlowInputs<'_> {
        FlowInputs {
            velocity: &self.velocity,
            thickness: &self.thickness,
            cell_type: &self.cell_type,
            bc_mask: &self.bc_mask,
            hardness: &self.hardness,
        }
    }

    pub fn inputs(&self) -> StepInputs<'_> {
        StepInputs {
            flow: self.flow_inputs(),
            strain_rates: &self.strain_rates,
            stresses: &self.stresses,
        }
    }

    /// Overwrite the classification of one cell.
    pub fn set_cell_type(&mut self, i: usize, j: usize, cell: CellType) {
        self.cell_type.set(i, j, cell);
    }
}

/// Builder for [`Shelf`].
///
/// Defaults: 1 km spacing, floating ice 300 m thick, still ice, hardness
/// `1e8`, `e1 = 1e-9 s⁻¹`, zero stress, no boundary mask.
pub struct ShelfBuilder {
    mx: usize,
    my: usize,
    spacing: f64,
    edge: EdgeBehavior,
    velocity: Velocity,
    thickness: f64,
    hardness: f64,
    strain: PrincipalStrainRates,
    stress: DeviatoricStress,
    grounded_columns: usize,
}

impl ShelfBuilder {
    pub fn new(mx: usize, my: usize) -> Self {
        Self {
            mx,
            my,
            spacing: 1.0e3,
            edge: EdgeBehavior::default(),
            velocity: Velocity::default(),
            thickness: 300.0,
            hardness: 1.0e8,
            strain: PrincipalStrainRates::new(1.0e-9, 0.0),
            stress: DeviatoricStress::default(),
            grounded_columns: 0,
        }
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    pub fn velocity(mut self, u: f64, v: f64) -> Self {
        self.velocity = Velocity::new(u, v);
        self
    }

    pub fn thickness(mut self, h: f64) -> Self {
        self.thickness = h;
        self
    }

    pub fn hardness(mut self, b: f64) -> Self {
        self.hardness = b;
        self
    }

    pub fn strain(mut self, e1: f64, e2: f64) -> Self {
        self.strain = PrincipalStrainRates::new(e1, e2);
        self
    }

    pub fn stress(mut self, xx: f64, yy: f64, xy: f64) -> Self {
        self.stress = DeviatoricStress::new(xx, yy, xy);
        self
    }

    /// Make the first `n` columns grounded ice with the boundary mask set.
    pub fn grounded_columns(mut self, n: usize) -> Self {
        self.grounded_columns = n;
        self
    }

    /// # Panics
    ///
    /// Panics if the grid dimensions or spacing are invalid.
    pub fn build(self) -> Shelf {
        let grid = Grid2D::new(self.mx, self.my, self.spacing, self.spacing)
            .expect("valid shelf grid")
            .with_edge(self.edge);
        let grounded = self.grounded_columns;
        Shelf {
            velocity: Array2D::filled(&grid, self.velocity),
            thickness: Scalar::filled(&grid, self.thickness),
            cell_type: Array2D::from_fn(&grid, |i, _| {
                if i < grounded {
                    CellType::GroundedIce
                } else {
                    CellType::FloatingIce
                }
            }),
            bc_mask: Scalar::from_fn(&grid, |i, _| if i < grounded { 1.0 } else { 0.0 }),
            hardness: Scalar::filled(&grid, self.hardness),
            strain_rates: Array2D::filled(&grid, self.strain),
            stresses: Array2D::filled(&grid, self.stress),
            grid,
        }
    }
}
